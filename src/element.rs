//! Minimal element model the widget renders into.
//!
//! A [`Container`] is the host element: it may carry a placeholder background
//! and any number of text regions (caption, heading) found by class name. The
//! widget appends a [`SlideList`] wrapper holding one [`SlideElement`] per slide.

use crate::constants::*;
use crate::fade::Fader;

/// Identity of a host element. Two containers with the same id are the same element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct TextRegion {
    pub class: String,
    pub text: String,
    pub fader: Fader,
}

impl TextRegion {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            text: String::new(),
            fader: Fader::hidden(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideElement {
    pub index: usize,
    pub id: String,
    pub class: &'static str,
    pub image_src: String,
    pub ready: bool,
    pub fader: Fader,
}

impl SlideElement {
    pub fn new(index: usize, image_src: impl Into<String>) -> Self {
        Self {
            index,
            id: slide_element_id(index),
            class: SLIDE_CLASS,
            image_src: image_src.into(),
            ready: false,
            fader: Fader::hidden(),
        }
    }
}

pub fn slide_element_id(index: usize) -> String {
    format!("{SLIDE_ID_PREFIX}{index}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideList {
    pub class: &'static str,
    pub items: Vec<SlideElement>,
}

impl SlideList {
    pub fn new() -> Self {
        Self {
            class: WRAPPER_CLASS,
            items: Vec::new(),
        }
    }

    pub fn find(&self, id: &str) -> Option<&SlideElement> {
        self.items.iter().find(|s| s.id == id)
    }
}

impl Default for SlideList {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    id: ElementId,
    pub background: Option<String>,
    pub regions: Vec<TextRegion>,
    pub wrapper: Option<SlideList>,
}

impl Container {
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            background: None,
            regions: Vec::new(),
            wrapper: None,
        }
    }

    pub fn with_region(mut self, class: impl Into<String>) -> Self {
        self.regions.push(TextRegion::new(class));
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// First region carrying `class`.
    pub fn region(&self, class: &str) -> Option<&TextRegion> {
        self.regions.iter().find(|r| r.class == class)
    }

    /// Every region carrying `class`; empty when the container has none.
    pub fn regions_mut<'a>(&'a mut self, class: &'a str) -> impl Iterator<Item = &'a mut TextRegion> {
        self.regions.iter_mut().filter(move |r| r.class == class)
    }

    pub fn slides(&self) -> &[SlideElement] {
        match &self.wrapper {
            Some(w) => &w.items,
            None => &[],
        }
    }

    pub fn slides_mut(&mut self) -> &mut [SlideElement] {
        match &mut self.wrapper {
            Some(w) => &mut w.items,
            None => &mut [],
        }
    }
}
