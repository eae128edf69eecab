use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{SlideDescriptor, SlideshowOptions};
use crate::error::{Result, SlideshowError};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Slideshow options plus the directory relative slide sources resolve against.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    pub options: SlideshowOptions,
    pub base_dir: PathBuf,
}

impl Manifest {
    /// Load from a JSON manifest file or from a directory of images.
    pub fn load(source: &Path) -> Result<Self> {
        if source.is_dir() {
            let slides = slides_from_directory(source)?;
            return Ok(Self {
                options: SlideshowOptions::default().with_slides(slides),
                base_dir: source.to_path_buf(),
            });
        }

        let text = fs::read_to_string(source).map_err(|e| SlideshowError::io(source, e))?;
        let options: SlideshowOptions = serde_json::from_str(&text)?;
        debug!(path = %source.display(), slides = options.slides.len(), "manifest loaded");

        Ok(Self {
            options,
            base_dir: source.parent().map(Path::to_path_buf).unwrap_or_default(),
        })
    }

    pub fn resolve(&self, source_url: &str) -> PathBuf {
        let path = Path::new(source_url);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path).map_err(|e| SlideshowError::io(dir_path, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| SlideshowError::io(dir_path, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
            if IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
                paths.push(path);
            }
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        Err(SlideshowError::NoImages(dir_path.to_path_buf()))
    } else {
        Ok(paths)
    }
}

/// One slide per image, captioned with the file stem. Sources are file names
/// relative to `dir_path`.
pub fn slides_from_directory(dir_path: &Path) -> Result<Vec<SlideDescriptor>> {
    let slides = load_sorted_image_paths(dir_path)?
        .iter()
        .filter_map(|path| {
            let name = path.file_name()?.to_str()?;
            let mut slide = SlideDescriptor::new(name);
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                slide = slide.with_caption(stem);
            }
            Some(slide)
        })
        .collect();
    Ok(slides)
}
