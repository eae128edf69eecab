use std::f32::consts::PI;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FadeDirection {
    In,
    Out,
}

/// Opacity animation for a single element.
///
/// `visible` mirrors the element being displayed at all; `opacity` is only
/// meaningful while it is. A completed fade-out hides the element.
#[derive(Debug, Clone, PartialEq)]
pub struct Fader {
    pub visible: bool,
    pub opacity: f32,

    direction: Option<FadeDirection>,
    start_opacity: f32,
    duration: f32,
    animation_timer: f32,
}

impl Fader {
    pub fn hidden() -> Self {
        Self {
            visible: false,
            opacity: 0.0,
            direction: None,
            start_opacity: 0.0,
            duration: 0.0,
            animation_timer: 0.0,
        }
    }

    /// Display immediately at full opacity, cancelling any running fade.
    pub fn show(&mut self) {
        self.visible = true;
        self.opacity = 1.0;
        self.direction = None;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.opacity = 0.0;
        self.direction = None;
    }

    pub fn fade_in(&mut self, duration: f32) {
        let start = if self.visible { self.opacity } else { 0.0 };
        self.visible = true;
        self.start(FadeDirection::In, start, duration);
    }

    pub fn fade_out(&mut self, duration: f32) {
        if !self.visible {
            // Nothing to fade, but the fade still has to complete so that
            // whoever waits on it gets its completion.
            self.opacity = 0.0;
        }
        self.start(FadeDirection::Out, self.opacity, duration);
    }

    fn start(&mut self, direction: FadeDirection, start_opacity: f32, duration: f32) {
        self.direction = Some(direction);
        self.start_opacity = start_opacity;
        self.opacity = start_opacity;
        self.duration = duration.max(0.0);
        self.animation_timer = 0.0;
    }

    pub fn is_animating(&self) -> bool {
        self.direction.is_some()
    }

    pub fn direction(&self) -> Option<FadeDirection> {
        self.direction
    }

    /// Advance by `dt` seconds. Returns the direction of a fade that completed
    /// during this step.
    pub fn update(&mut self, dt: f32) -> Option<FadeDirection> {
        let direction = self.direction?;

        self.animation_timer += dt;
        let t = if self.duration > 0.0 {
            (self.animation_timer / self.duration).min(1.0)
        } else {
            1.0
        };
        let target = match direction {
            FadeDirection::In => 1.0,
            FadeDirection::Out => 0.0,
        };
        self.opacity = self.start_opacity + (target - self.start_opacity) * swing(t);

        if t < 1.0 {
            return None;
        }

        self.direction = None;
        self.opacity = target;
        if direction == FadeDirection::Out {
            self.visible = false;
        }
        Some(direction)
    }
}

impl Default for Fader {
    fn default() -> Self {
        Self::hidden()
    }
}

// Ease-in-out along half a cosine period.
fn swing(t: f32) -> f32 {
    0.5 - (t * PI).cos() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(fader: &mut Fader, seconds: f32, step: f32) -> Option<FadeDirection> {
        let mut done = None;
        let mut elapsed = 0.0;
        while elapsed < seconds {
            if let Some(d) = fader.update(step) {
                done = Some(d);
            }
            elapsed += step;
        }
        done
    }

    #[test]
    fn swing_endpoints_are_stable() {
        assert!(swing(0.0).abs() < 1e-6);
        assert!((swing(1.0) - 1.0).abs() < 1e-6);
        assert!((swing(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn fade_in_reveals_and_completes() {
        let mut f = Fader::hidden();
        f.fade_in(0.2);
        assert!(f.visible);
        assert_eq!(f.opacity, 0.0);

        f.update(0.1);
        assert!(f.opacity > 0.0 && f.opacity < 1.0);
        assert!(f.is_animating());

        assert_eq!(f.update(0.15), Some(FadeDirection::In));
        assert_eq!(f.opacity, 1.0);
        assert!(!f.is_animating());
    }

    #[test]
    fn fade_out_hides_on_completion() {
        let mut f = Fader::hidden();
        f.show();
        f.fade_out(0.4);
        assert_eq!(run(&mut f, 0.5, 0.05), Some(FadeDirection::Out));
        assert!(!f.visible);
        assert_eq!(f.opacity, 0.0);
    }

    #[test]
    fn fade_out_of_hidden_element_still_completes() {
        let mut f = Fader::hidden();
        f.fade_out(0.4);
        assert!(f.is_animating());
        assert_eq!(run(&mut f, 0.5, 0.1), Some(FadeDirection::Out));
    }

    #[test]
    fn fade_in_replaces_running_fade_out_from_current_opacity() {
        let mut f = Fader::hidden();
        f.show();
        f.fade_out(0.4);
        f.update(0.2);
        let mid = f.opacity;
        f.fade_in(0.2);
        assert_eq!(f.direction(), Some(FadeDirection::In));
        assert_eq!(f.opacity, mid);
    }

    #[test]
    fn zero_duration_completes_on_next_update() {
        let mut f = Fader::hidden();
        f.fade_in(0.0);
        assert_eq!(f.update(0.0), Some(FadeDirection::In));
        assert_eq!(f.opacity, 1.0);
    }

    #[test]
    fn idle_update_reports_nothing() {
        let mut f = Fader::hidden();
        f.show();
        assert_eq!(f.update(1.0), None);
        assert_eq!(f.opacity, 1.0);
    }
}
