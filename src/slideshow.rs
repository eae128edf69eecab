use tracing::{debug, trace};

use crate::config::SlideshowOptions;
use crate::constants::*;
use crate::element::{Container, SlideElement, SlideList};
use crate::state::TransitionPhase;
use crate::timer::IntervalTimer;

/// One slideshow bound to one container.
///
/// All slides are created when the widget is created; slide 0 is shown at once
/// and every interval the next ready slide is faded in over the current one.
pub struct Slideshow {
    options: SlideshowOptions,
    container: Container,

    current_slide_index: usize,
    phase: TransitionPhase,
    timer: IntervalTimer,
}

impl Slideshow {
    /// Returns `None` when there is no container to attach to.
    pub fn create(container: Option<Container>, options: SlideshowOptions) -> Option<Self> {
        let Some(mut container) = container else {
            debug!("no container given, slideshow not created");
            return None;
        };

        if !options.lazyload {
            debug!("lazyload=false is reserved; slides are still created upfront");
        }
        if container.background.is_none() {
            container.background = options.loading_icon.clone();
        }

        let timer = IntervalTimer::start(options.time_interval());
        let mut show = Self {
            options,
            container,
            current_slide_index: 0,
            phase: TransitionPhase::Idle,
            timer,
        };
        show.materialize_slides();

        debug!(
            container = ?show.container.id(),
            slides = show.slide_count(),
            interval_ms = show.options.time_interval_ms,
            "slideshow started"
        );
        Some(show)
    }

    fn materialize_slides(&mut self) {
        let mut wrapper = SlideList::new();

        for (i, descriptor) in self.options.slides.iter().enumerate() {
            let mut slide = SlideElement::new(i, descriptor.source_url.as_str());
            if i == 0 {
                slide.fader.show();
            }
            slide.ready = true;
            wrapper.items.push(slide);
        }

        self.container.wrapper = Some(wrapper);

        if self.slide_count() > 0 {
            self.container.background = None;
            self.reveal_text(0);
        }
    }

    /// Put slide `index`'s caption and heading into their regions and fade them in.
    fn reveal_text(&mut self, index: usize) {
        let Some(descriptor) = self.options.slides.get(index) else {
            return;
        };

        let caption = descriptor.caption.clone().unwrap_or_default();
        for region in self.container.regions_mut(&self.options.caption_class) {
            region.text = caption.clone();
            region.fader.fade_in(FAST_FADE_DURATION);
        }

        let heading = descriptor.heading.clone().unwrap_or_default();
        for region in self.container.regions_mut(&self.options.heading_class) {
            region.text = heading.clone();
            region.fader.fade_in(FAST_FADE_DURATION);
        }
    }

    fn conceal_text(&mut self) {
        for class in [&self.options.caption_class, &self.options.heading_class] {
            for region in self.container.regions_mut(class) {
                region.fader.fade_out(FADE_DURATION);
                region.text.clear();
            }
        }
    }

    /// One interval elapsed: start moving to the next slide if possible.
    ///
    /// Returns `true` when a transition was started. Nothing happens when there
    /// are no slides, when the next slide is the current one, when it is not
    /// ready, or while a previous transition is still running.
    pub fn tick(&mut self) -> bool {
        let count = self.slide_count();
        if count == 0 {
            trace!("tick with no slides");
            return false;
        }
        if !self.phase.is_idle() {
            trace!(phase = ?self.phase, "transition in flight, tick dropped");
            return false;
        }

        let current = self.current_slide_index;
        let next = (current + 1) % count;
        if next == current {
            return false;
        }
        if !self.container.slides()[next].ready {
            debug!(next, "next slide not ready, tick skipped");
            return false;
        }

        self.container.background = None;
        self.conceal_text();
        self.container.slides_mut()[current].fader.fade_out(FADE_DURATION);
        self.phase = TransitionPhase::FadingOut { next };

        trace!(current, next, "fading out");
        true
    }

    /// Advance animations and the interval timer by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        // 1. Animate every element
        for region in self.container.regions.iter_mut() {
            region.fader.update(dt);
        }
        for slide in self.container.slides_mut() {
            slide.fader.update(dt);
        }

        // 2. Follow completed fades through the transition
        match self.phase {
            TransitionPhase::Idle => {}
            TransitionPhase::FadingOut { next } => {
                if !self.container.slides()[self.current_slide_index].fader.is_animating() {
                    self.reveal_text(next);
                    self.container.slides_mut()[next].fader.fade_in(FADE_DURATION);
                    self.phase = TransitionPhase::FadingIn { next };
                }
            }
            TransitionPhase::FadingIn { next } => {
                if !self.container.slides()[next].fader.is_animating() {
                    self.current_slide_index = next;
                    self.phase = TransitionPhase::Idle;
                    debug!(current = next, "slide shown");
                }
            }
        }

        // 3. Fire the timer. Extra ticks that fell due in a long frame would
        // hit the busy guard, so one is enough.
        if self.timer.advance(dt) > 0 {
            self.tick();
        }
    }

    /// Mark a slide ready or not. Returns `false` if `index` is out of range.
    pub fn set_ready(&mut self, index: usize, ready: bool) -> bool {
        match self.container.slides_mut().get_mut(index) {
            Some(slide) => {
                slide.ready = ready;
                true
            }
            None => false,
        }
    }

    /// Stop the timer and remove everything the widget added to the container.
    pub fn destroy(mut self) -> Container {
        self.teardown();
        debug!(container = ?self.container.id(), "slideshow destroyed");
        self.container
    }

    fn teardown(&mut self) {
        self.timer.cancel();
        self.phase = TransitionPhase::Idle;
        self.container.wrapper = None;
        for region in self.container.regions.iter_mut() {
            region.text.clear();
            region.fader.hide();
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_slide_index
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn options(&self) -> &SlideshowOptions {
        &self.options
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn slides(&self) -> &[SlideElement] {
        self.container.slides()
    }

    pub fn slide_count(&self) -> usize {
        self.slides().len()
    }

    pub fn current_slide(&self) -> Option<&SlideElement> {
        self.slides().get(self.current_slide_index)
    }

    pub fn caption(&self) -> Option<&str> {
        self.container
            .region(&self.options.caption_class)
            .map(|r| r.text.as_str())
    }

    pub fn heading(&self) -> Option<&str> {
        self.container
            .region(&self.options.heading_class)
            .map(|r| r.text.as_str())
    }

    pub fn timer(&self) -> &IntervalTimer {
        &self.timer
    }
}
