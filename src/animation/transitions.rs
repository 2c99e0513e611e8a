use crate::animation::interpolation::{EasingFunction, Interpolation};
use crate::core::{
    geo::{LatLng, LatLngBounds},
    viewport::{CameraPadding, Viewport},
};
use instant::Instant;

/// Types of camera transitions
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionType {
    /// Combined pan and zoom to a new view
    SetView { center: LatLng, zoom: f64 },
    /// Re-frame around a polygon so it stays visible beside a popup panel
    FrameBounds {
        bounds: LatLngBounds,
        pan_margin: f64,
        padding: CameraPadding,
    },
}

/// State of a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionState {
    NotStarted,
    Running,
    Completed,
    Cancelled,
}

/// A timed viewport transition
pub struct Transition {
    pub transition_type: TransitionType,
    /// Duration in seconds
    pub duration: f64,
    pub easing: EasingFunction,
    pub state: TransitionState,
    start_time: Option<Instant>,
    start_viewport: Viewport,
    target_viewport: Viewport,
    current_viewport: Viewport,
}

impl Transition {
    /// Creates a new transition from the current viewport
    pub fn new(transition_type: TransitionType, current: Viewport, duration: f64) -> Self {
        let target = Self::target_viewport(&transition_type, &current);

        Self {
            transition_type,
            duration,
            easing: EasingFunction::EaseInOutQuad,
            state: TransitionState::NotStarted,
            start_time: None,
            start_viewport: current.clone(),
            target_viewport: target,
            current_viewport: current,
        }
    }

    fn target_viewport(transition_type: &TransitionType, current: &Viewport) -> Viewport {
        let mut target = current.clone();
        match transition_type {
            TransitionType::SetView { center, zoom } => {
                target.set_view(*center, *zoom);
                target.clear_padding();
            }
            TransitionType::FrameBounds {
                bounds,
                pan_margin,
                padding,
            } => {
                target.set_padding(*padding);
                target.frame_bounds(bounds, *pan_margin);
            }
        }
        target
    }

    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Starts the transition clock
    pub fn start(&mut self) {
        if self.state == TransitionState::NotStarted {
            self.start_time = Some(Instant::now());
            self.state = TransitionState::Running;
        }
    }

    /// Cancels the transition, leaving the viewport wherever it was
    pub fn stop(&mut self) {
        self.state = TransitionState::Cancelled;
    }

    /// Advances the transition; returns the interpolated viewport while
    /// running, or None once finished.
    pub fn update(&mut self) -> Option<Viewport> {
        match self.state {
            TransitionState::NotStarted => {
                self.start();
                Some(self.current_viewport.clone())
            }
            TransitionState::Running => {
                let elapsed = self
                    .start_time
                    .map(|t| t.elapsed().as_secs_f64())
                    .unwrap_or(0.0);
                let progress = if self.duration <= 0.0 {
                    1.0
                } else {
                    (elapsed / self.duration).clamp(0.0, 1.0)
                };
                let eased = self.easing.apply(progress);

                self.current_viewport.center = Interpolation::lat_lng(
                    &self.start_viewport.center,
                    &self.target_viewport.center,
                    eased,
                );
                self.current_viewport.zoom = Interpolation::linear(
                    self.start_viewport.zoom,
                    self.target_viewport.zoom,
                    eased,
                );

                if progress >= 1.0 {
                    self.state = TransitionState::Completed;
                    self.current_viewport = self.target_viewport.clone();
                }
                Some(self.current_viewport.clone())
            }
            _ => None,
        }
    }

    /// Checks if the transition is finished
    pub fn is_finished(&self) -> bool {
        matches!(
            self.state,
            TransitionState::Completed | TransitionState::Cancelled
        )
    }

    /// The viewport this transition ends at
    pub fn target(&self) -> &Viewport {
        &self.target_viewport
    }
}

/// Manager for camera transitions. A new transition interrupts the current
/// one; the camera never runs two at once.
#[derive(Default)]
pub struct TransitionManager {
    current: Option<Transition>,
}

impl TransitionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new transition, cancelling any in-flight one
    pub fn start(&mut self, transition: Transition) {
        if let Some(ref mut current) = self.current {
            current.stop();
        }
        let mut transition = transition;
        transition.start();
        self.current = Some(transition);
    }

    /// Advances the active transition, returning the viewport to apply
    pub fn update(&mut self) -> Option<Viewport> {
        let result = self.current.as_mut().and_then(|t| t.update());
        if self.current.as_ref().is_some_and(|t| t.is_finished()) {
            self.current = None;
        }
        result
    }

    /// Checks if a transition is active
    pub fn is_animating(&self) -> bool {
        self.current.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// The target viewport of the active transition, if any
    pub fn target(&self) -> Option<&Viewport> {
        self.current.as_ref().map(|t| t.target())
    }
}
