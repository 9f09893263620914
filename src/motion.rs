use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn apply(self, delta: f32) -> f32 {
        let delta = delta.clamp(0.0, 1.0);
        match self {
            Easing::Linear => gpui::linear(delta),
            Easing::EaseIn => gpui::quadratic(delta),
            Easing::EaseOut => gpui::ease_out_quint()(delta),
            Easing::EaseInOut => gpui::ease_in_out(delta),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MotionTransition {
    pub duration: Duration,
    pub easing: Easing,
}

impl MotionTransition {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            easing: Easing::EaseOut,
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn is_instant(&self) -> bool {
        self.duration.is_zero()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TitleMotion {
    pub fade_in: MotionTransition,
    pub fade_out: MotionTransition,
}

impl Default for TitleMotion {
    fn default() -> Self {
        Self {
            fade_in: MotionTransition::new(Duration::from_millis(200)),
            fade_out: MotionTransition::new(Duration::from_millis(300)),
        }
    }
}

impl TitleMotion {
    pub fn for_visibility(&self, visible: bool) -> MotionTransition {
        if visible { self.fade_in } else { self.fade_out }
    }
}
