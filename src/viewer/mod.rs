//! Window frontend: draws a [`Slideshow`] with raylib.

mod texture_loader;

use raylib::prelude::*;
use tracing::{info, warn};

use crate::constants::*;
use crate::element::{Container, ElementId, TextRegion};
use crate::manifest::Manifest;
use crate::slideshow::Slideshow;

pub use texture_loader::load_texture_with_exif_rotation;

const HEADING_FONT_SIZE: i32 = 40;
const CAPTION_FONT_SIZE: i32 = 24;
const TEXT_MARGIN: i32 = 40;

pub fn run(manifest: Manifest) -> crate::Result<()> {
    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Slideshow")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let options = manifest.options.clone();
    let container = Container::new(ElementId(0))
        .with_region(options.caption_class.as_str())
        .with_region(options.heading_class.as_str());
    let Some(mut show) = Slideshow::create(Some(container), options) else {
        return Ok(());
    };

    // Slides whose image cannot be loaded are never advanced to
    let mut textures: Vec<Option<Texture2D>> = Vec::with_capacity(show.slide_count());
    for (i, descriptor) in manifest.options.slides.iter().enumerate() {
        let path = manifest.resolve(&descriptor.source_url);
        match load_texture_with_exif_rotation(&mut rl, &thread, &path) {
            Ok(texture) => textures.push(Some(texture)),
            Err(e) => {
                warn!(slide = i, "{}", e);
                show.set_ready(i, false);
                textures.push(None);
            }
        }
    }

    let placeholder = manifest.options.loading_icon.as_deref().and_then(|icon| {
        load_texture_with_exif_rotation(&mut rl, &thread, &manifest.resolve(icon))
            .map_err(|e| warn!("placeholder not loaded: {}", e))
            .ok()
    });

    info!(slides = show.slide_count(), "viewer started");

    let mut last_index = show.current_index();
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        show.update(dt);

        if show.current_index() != last_index {
            last_index = show.current_index();
            info!(slide = last_index, caption = show.caption().unwrap_or(""), "slide shown");
        }

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;

        if show.container().background.is_some() {
            if let Some(texture) = &placeholder {
                draw_fitted(&mut d, texture, sw, sh, 1.0);
            }
        }

        for slide in show.slides() {
            if !slide.fader.visible {
                continue;
            }
            if let Some(Some(texture)) = textures.get(slide.index) {
                draw_fitted(&mut d, texture, sw, sh, slide.fader.opacity);
            }
        }

        let options = show.options();
        if let Some(region) = show.container().region(&options.heading_class) {
            let y = sh as i32 - TEXT_MARGIN - CAPTION_FONT_SIZE - HEADING_FONT_SIZE - 10;
            draw_region(&mut d, region, y, HEADING_FONT_SIZE);
        }
        if let Some(region) = show.container().region(&options.caption_class) {
            let y = sh as i32 - TEXT_MARGIN - CAPTION_FONT_SIZE;
            draw_region(&mut d, region, y, CAPTION_FONT_SIZE);
        }
    }

    show.destroy();
    Ok(())
}

fn white(opacity: f32) -> Color {
    Color::new(255, 255, 255, (opacity.clamp(0.0, 1.0) * 255.0) as u8)
}

// Centered, scaled down to 90% of the window when too large
fn draw_fitted(d: &mut RaylibDrawHandle, texture: &Texture2D, sw: f32, sh: f32, opacity: f32) {
    let tex_width = texture.width() as f32;
    let tex_height = texture.height() as f32;

    let scale = (sw * 0.9 / tex_width).min(sh * 0.9 / tex_height).min(1.0);
    let scaled_width = tex_width * scale;
    let scaled_height = tex_height * scale;

    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, tex_width, tex_height),
        Rectangle::new((sw - scaled_width) * 0.5, (sh - scaled_height) * 0.5, scaled_width, scaled_height),
        Vector2::new(0.0, 0.0),
        0.0,
        white(opacity),
    );
}

fn draw_region(d: &mut RaylibDrawHandle, region: &TextRegion, y: i32, font_size: i32) {
    if region.fader.visible && !region.text.is_empty() {
        d.draw_text(&region.text, TEXT_MARGIN, y, font_size, white(region.fader.opacity));
    }
}
