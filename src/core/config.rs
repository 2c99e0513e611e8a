//! Configuration for the dashboard composition root.
//!
//! A `DashboardConfig` is built once by the embedding application, validated,
//! and passed to the `DashboardBuilder`. Nothing here is re-read after
//! startup.

use crate::{constants, DashboardError};

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Access credential for the external map surface. The engine never
    /// uses it itself but refuses to initialize without one, so the failure
    /// surfaces before any data is fetched.
    pub access_token: String,
    /// Location of the project feature collection (path or URL).
    pub projects_resource: String,
    /// Location of the administrative boundary collection (path or URL).
    pub boundaries_resource: String,
    pub animation: CameraAnimationConfig,
    pub popup: PopupLayoutConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraAnimationConfig {
    /// Duration of the country-focus fly animation in milliseconds.
    pub fly_duration_ms: u64,
    /// Duration of the popup re-framing pan in milliseconds.
    pub pan_duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopupLayoutConfig {
    /// Degrees of longitude between a polygon's east edge and its popup.
    pub lng_offset: f64,
    /// Eastward camera shift in degrees applied when framing a popup.
    pub pan_margin: f64,
    /// Viewport padding in pixels; right side is wide to leave room for
    /// the popup panel.
    pub padding_left: f64,
    pub padding_right: f64,
}

impl Default for CameraAnimationConfig {
    fn default() -> Self {
        Self {
            fly_duration_ms: constants::FLY_DURATION_MS,
            pan_duration_ms: constants::PAN_DURATION_MS,
        }
    }
}

impl Default for PopupLayoutConfig {
    fn default() -> Self {
        Self {
            lng_offset: constants::POPUP_LNG_OFFSET,
            pan_margin: constants::POPUP_PAN_MARGIN,
            padding_left: constants::POPUP_PADDING_LEFT,
            padding_right: constants::POPUP_PADDING_RIGHT,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            projects_resource: constants::PROJECTS_RESOURCE.to_string(),
            boundaries_resource: constants::BOUNDARIES_RESOURCE.to_string(),
            animation: CameraAnimationConfig::default(),
            popup: PopupLayoutConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Creates a config with the given access token and default resources
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            ..Self::default()
        }
    }

    /// Validates the configuration before any fetch starts.
    ///
    /// A missing or blank access token is fatal to initialization and must
    /// be surfaced to the user with remediation steps, not retried.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.access_token.trim().is_empty() {
            return Err(DashboardError::Configuration(
                "map access token is missing; set it in the dashboard config \
                 before starting the application"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
