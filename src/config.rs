use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// One entry of the slide sequence, as supplied by the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideDescriptor {
    #[serde(alias = "src", alias = "file_name")]
    pub source_url: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default, alias = "title")]
    pub heading: Option<String>,
}

impl SlideDescriptor {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            caption: None,
            heading: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    #[default]
    Fade,
}

/// Widget options. Missing manifest fields fall back to the defaults below.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideshowOptions {
    pub caption_class: String,
    pub heading_class: String,
    /// Reserved. Slides are always materialized when the widget is created.
    pub lazyload: bool,
    /// Placeholder background shown until the first slide is displayed.
    pub loading_icon: Option<String>,
    pub slides: Vec<SlideDescriptor>,
    pub transition: Transition,
    #[serde(alias = "time_interval")]
    pub time_interval_ms: u64,
}

impl Default for SlideshowOptions {
    fn default() -> Self {
        Self {
            caption_class: DEFAULT_CAPTION_CLASS.to_string(),
            heading_class: DEFAULT_HEADING_CLASS.to_string(),
            lazyload: true,
            loading_icon: None,
            slides: Vec::new(),
            transition: Transition::Fade,
            time_interval_ms: DEFAULT_TIME_INTERVAL_MS,
        }
    }
}

impl SlideshowOptions {
    pub fn with_slides(mut self, slides: Vec<SlideDescriptor>) -> Self {
        self.slides = slides;
        self
    }

    pub fn with_time_interval_ms(mut self, ms: u64) -> Self {
        self.time_interval_ms = ms;
        self
    }

    pub fn time_interval(&self) -> Duration {
        Duration::from_millis(self.time_interval_ms)
    }
}
