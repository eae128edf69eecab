#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TransitionPhase {
    Idle,                      // Showing the current slide
    FadingOut { next: usize }, // Current slide fading out, `next` queued
    FadingIn { next: usize },  // `next` fading in; becomes current on completion
}

impl TransitionPhase {
    pub fn is_idle(&self) -> bool {
        *self == TransitionPhase::Idle
    }
}
