use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::debug;

use crate::config::SlideshowOptions;
use crate::element::{Container, ElementId};
use crate::slideshow::Slideshow;

/// Slideshows keyed by the container they are attached to.
///
/// A container can carry at most one slideshow: attaching again returns the
/// running instance and ignores the new options.
#[derive(Default)]
pub struct Registry {
    instances: HashMap<ElementId, Slideshow>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(
        &mut self,
        container: Option<Container>,
        options: SlideshowOptions,
    ) -> Option<&mut Slideshow> {
        let container = container?;

        match self.instances.entry(container.id()) {
            Entry::Occupied(entry) => {
                debug!(container = ?entry.key(), "slideshow already attached");
                Some(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let show = Slideshow::create(Some(container), options)?;
                Some(entry.insert(show))
            }
        }
    }

    /// Tear down the slideshow on `id` and hand back its container.
    pub fn detach(&mut self, id: ElementId) -> Option<Container> {
        self.instances.remove(&id).map(Slideshow::destroy)
    }

    pub fn get(&self, id: ElementId) -> Option<&Slideshow> {
        self.instances.get(&id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Slideshow> {
        self.instances.get_mut(&id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.instances.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn update(&mut self, dt: f32) {
        for show in self.instances.values_mut() {
            show.update(dt);
        }
    }
}
