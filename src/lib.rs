//! Timer-driven image slideshow.
//!
//! A [`Slideshow`] is attached to a [`Container`], creates one slide element per
//! [`SlideDescriptor`], shows the first one immediately and then fades to the
//! next ready slide every interval. The [`Registry`] keeps at most one
//! slideshow per container.

pub mod config;
pub mod constants;
pub mod element;
pub mod error;
pub mod fade;
pub mod manifest;
pub mod registry;
pub mod slideshow;
pub mod state;
pub mod timer;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use config::{SlideDescriptor, SlideshowOptions, Transition};
pub use element::{Container, ElementId, SlideElement};
pub use error::{Result, SlideshowError};
pub use manifest::Manifest;
pub use registry::Registry;
pub use slideshow::Slideshow;
pub use state::TransitionPhase;
