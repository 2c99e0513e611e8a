use crate::core::geo::LatLng;

/// Easing functions for camera transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EasingFunction {
    Linear,
    EaseOutCubic,
    EaseInOutQuad,
}

impl EasingFunction {
    /// Applies the easing curve to a progress value in [0, 1]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseOutCubic => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            EasingFunction::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Interpolation helpers for viewport values
pub struct Interpolation;

impl Interpolation {
    /// Linear interpolation between two scalars
    pub fn linear(start: f64, end: f64, t: f64) -> f64 {
        start + (end - start) * t
    }

    /// Interpolates between two coordinates component-wise
    pub fn lat_lng(start: &LatLng, end: &LatLng, t: f64) -> LatLng {
        LatLng::new(
            Self::linear(start.lat, end.lat, t),
            Self::linear(start.lng, end.lng, t),
        )
    }
}
