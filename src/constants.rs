pub const RENDER_WIDTH: i32 = 1920;           // Width of the viewer window at full size
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the viewer window at full size
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const FADE_DURATION: f32 = 0.4;           // Slide fade in / fade out (seconds)
pub const FAST_FADE_DURATION: f32 = 0.2;      // Caption and heading reveal (seconds)

pub const DEFAULT_TIME_INTERVAL_MS: u64 = 5000;
pub const DEFAULT_CAPTION_CLASS: &str = "ui-caption";
pub const DEFAULT_HEADING_CLASS: &str = "ui-heading";

pub const WRAPPER_CLASS: &str = "ui-slideshow-wrapper";
pub const SLIDE_CLASS: &str = "ui-slideshow-slide";
pub const SLIDE_ID_PREFIX: &str = "ui-slideshow-";
