use std::time::Duration;

use gpui::{Bounds, Hsla, Pixels, SharedString, point, px, size};

use crate::motion::{Easing, MotionTransition, TitleMotion};

use super::field_config::TitleFont;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TitleVisibility {
    #[default]
    Hidden,
    Visible,
}

impl TitleVisibility {
    pub fn from_content(has_text: bool) -> Self {
        if has_text { Self::Visible } else { Self::Hidden }
    }

    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }

    pub fn opacity(self) -> f32 {
        if self.is_visible() { 1.0 } else { 0.0 }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransitionMode {
    Animated,
    Immediate,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TitleFrame {
    pub opacity: f32,
    pub bounds: Bounds<Pixels>,
}

impl TitleFrame {
    pub fn new(visibility: TitleVisibility, bounds: Bounds<Pixels>) -> Self {
        Self {
            opacity: visibility.opacity(),
            bounds,
        }
    }

    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let mix = |from: Pixels, to: Pixels| {
            let from = f32::from(from);
            px(from + (f32::from(to) - from) * t)
        };
        Self {
            opacity: self.opacity + (other.opacity - self.opacity) * t,
            bounds: Bounds::new(
                point(
                    mix(self.bounds.origin.x, other.bounds.origin.x),
                    mix(self.bounds.origin.y, other.bounds.origin.y),
                ),
                size(
                    mix(self.bounds.size.width, other.bounds.size.width),
                    mix(self.bounds.size.height, other.bounds.size.height),
                ),
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TitleTransition {
    pub from: TitleFrame,
    pub to: TitleFrame,
    pub target: TitleVisibility,
    pub duration: Duration,
    pub easing: Easing,
    elapsed: Duration,
}

impl TitleTransition {
    pub fn new(
        from: TitleFrame,
        to: TitleFrame,
        target: TitleVisibility,
        motion: MotionTransition,
    ) -> Self {
        Self {
            from,
            to,
            target,
            duration: motion.duration,
            easing: motion.easing,
            elapsed: Duration::ZERO,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn sample(&self) -> TitleFrame {
        if self.is_finished() {
            return self.to;
        }
        self.from.lerp(&self.to, self.easing.apply(self.progress()))
    }

    pub fn advance(&mut self, dt: Duration) -> TitleFrame {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.sample()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TitleTransitionEnd {
    pub visible: bool,
    pub finished: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TitleStateMachine {
    visibility: TitleVisibility,
    displayed: TitleFrame,
    transition: Option<TitleTransition>,
}

impl TitleStateMachine {
    pub fn new(placeholder: Bounds<Pixels>) -> Self {
        Self {
            visibility: TitleVisibility::Hidden,
            displayed: TitleFrame::new(TitleVisibility::Hidden, placeholder),
            transition: None,
        }
    }

    pub fn visibility(&self) -> TitleVisibility {
        self.visibility
    }

    pub fn displayed(&self) -> TitleFrame {
        self.displayed
    }

    pub fn transition(&self) -> Option<&TitleTransition> {
        self.transition.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Moves toward `target` at `bounds`. An in-flight transition heading
    /// elsewhere is redirected from the currently displayed frame.
    pub fn drive(
        &mut self,
        target: TitleVisibility,
        bounds: Bounds<Pixels>,
        mode: TransitionMode,
        motion: &TitleMotion,
    ) -> Vec<TitleTransitionEnd> {
        let goal = TitleFrame::new(target, bounds);
        let mut ended = Vec::new();

        if let Some(in_flight) = self.transition.as_ref() {
            if mode == TransitionMode::Animated && in_flight.to == goal {
                return ended;
            }
            tracing::debug!(
                from = ?in_flight.target,
                to = ?target,
                "redirecting in-flight title transition"
            );
            ended.push(TitleTransitionEnd {
                visible: in_flight.target.is_visible(),
                finished: false,
            });
            self.transition = None;
        }

        self.visibility = target;
        let profile = motion.for_visibility(target.is_visible());
        if mode == TransitionMode::Immediate || profile.is_instant() || self.displayed == goal {
            self.displayed = goal;
            ended.push(TitleTransitionEnd {
                visible: target.is_visible(),
                finished: true,
            });
            return ended;
        }

        tracing::debug!(
            to = ?target,
            duration_ms = profile.duration.as_millis() as u64,
            "starting title transition"
        );
        self.transition = Some(TitleTransition::new(self.displayed, goal, target, profile));
        ended
    }

    pub fn reposition(&mut self, bounds: Bounds<Pixels>) {
        match self.transition.as_mut() {
            Some(transition) => transition.to.bounds = bounds,
            None => self.displayed.bounds = bounds,
        }
    }

    pub fn advance(&mut self, dt: Duration) -> Option<TitleTransitionEnd> {
        let transition = self.transition.as_mut()?;
        self.displayed = transition.advance(dt);
        if !transition.is_finished() {
            return None;
        }
        let visible = transition.target.is_visible();
        self.displayed = transition.to;
        self.transition = None;
        tracing::debug!(visible, "title transition finished");
        Some(TitleTransitionEnd {
            visible,
            finished: true,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TitleLabel {
    pub text: SharedString,
    pub font: TitleFont,
    pub color: Hsla,
    pub generation: u64,
    machine: TitleStateMachine,
}

impl TitleLabel {
    pub(crate) fn new(
        generation: u64,
        font: TitleFont,
        color: Hsla,
        placeholder: Bounds<Pixels>,
    ) -> Self {
        Self {
            text: SharedString::from(""),
            font,
            color,
            generation,
            machine: TitleStateMachine::new(placeholder),
        }
    }

    pub fn line_height(&self) -> Pixels {
        self.font.line_height
    }

    pub fn opacity(&self) -> f32 {
        self.machine.displayed().opacity
    }

    pub fn frame(&self) -> Bounds<Pixels> {
        self.machine.displayed().bounds
    }

    pub fn state(&self) -> &TitleStateMachine {
        &self.machine
    }

    pub(crate) fn state_mut(&mut self) -> &mut TitleStateMachine {
        &mut self.machine
    }
}
