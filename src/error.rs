use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, SlideshowError>;

#[derive(thiserror::Error, Debug)]
pub enum SlideshowError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("no image files found in directory: {0}")]
    NoImages(PathBuf),

    #[error("image error: {0}")]
    Image(String),
}

impl SlideshowError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }
}
