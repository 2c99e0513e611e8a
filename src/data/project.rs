use crate::{
    constants,
    core::geo::LatLng,
    data::geojson::Feature,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a project, when the source data carries one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Active,
    Paused,
    Cancelled,
    Completed,
}

impl ProjectStatus {
    /// Parses a status string, ignoring case; unknown values yield None
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "active" => Some(Self::Active),
            "paused" => Some(Self::Paused),
            "cancelled" | "canceled" => Some(Self::Cancelled),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Cancelled => "Cancelled",
            Self::Completed => "Completed",
        }
    }
}

/// One development-aid project entry, immutable once loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub country: String,
    pub region: String,
    pub project_name: String,
    pub sector: String,
    pub budget: f64,
    pub beneficiaries: f64,
    pub implementing_partner: String,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub coordinates: LatLng,
}

/// Why a source feature was rejected by the validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordRejection {
    NoGeometry,
    NotAPoint,
    MissingField(&'static str),
    NegativeAmount(&'static str),
    DateRange,
}

impl std::fmt::Display for RecordRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoGeometry => write!(f, "feature has no geometry"),
            Self::NotAPoint => write!(f, "feature geometry is not a point"),
            Self::MissingField(name) => write!(f, "missing required field '{}'", name),
            Self::NegativeAmount(name) => write!(f, "field '{}' is negative", name),
            Self::DateRange => write!(f, "end date precedes start date"),
        }
    }
}

const REQUIRED_COUNTRY: &str = "Country";
const REQUIRED_REGION: &str = "Region";
const REQUIRED_PROJECT_NAME: &str = "Project Name";
const REQUIRED_SECTOR: &str = "Sector";
const REQUIRED_BUDGET: &str = "Budget";
const REQUIRED_PARTNER: &str = "Implementing Partner";
const REQUIRED_BENEFICIARIES: &str = "Beneficiaries";

impl ProjectRecord {
    /// Builds a record from a source point feature, applying the validation
    /// pass: required fields must be present and non-empty, amounts must be
    /// non-negative, and the end date may not precede the start date. An
    /// out-of-range coordinate is not a rejection; the record falls back to
    /// the crate-wide default location instead.
    pub fn from_feature(feature: &Feature) -> Result<Self, RecordRejection> {
        let geometry = feature.geometry.as_ref().ok_or(RecordRejection::NoGeometry)?;
        let raw_point = geometry.as_point().ok_or(RecordRejection::NotAPoint)?;

        let required = |key: &'static str| -> Result<String, RecordRejection> {
            feature
                .string_property(key)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .ok_or(RecordRejection::MissingField(key))
        };
        let amount = |key: &'static str| -> Result<f64, RecordRejection> {
            let value = feature
                .number_property(key)
                .ok_or(RecordRejection::MissingField(key))?;
            if value < 0.0 {
                return Err(RecordRejection::NegativeAmount(key));
            }
            Ok(value)
        };

        let start_date = Self::parse_date(feature.string_property("Start Date"));
        let end_date = Self::parse_date(feature.string_property("End Date"));
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                return Err(RecordRejection::DateRange);
            }
        }

        let coordinates = if raw_point.is_valid() {
            raw_point
        } else {
            constants::FALLBACK_COORDINATE
        };

        Ok(Self {
            country: required(REQUIRED_COUNTRY)?,
            region: required(REQUIRED_REGION)?,
            project_name: required(REQUIRED_PROJECT_NAME)?,
            sector: required(REQUIRED_SECTOR)?,
            budget: amount(REQUIRED_BUDGET)?,
            beneficiaries: amount(REQUIRED_BENEFICIARIES)?,
            implementing_partner: required(REQUIRED_PARTNER)?,
            status: feature.string_property("Status").and_then(ProjectStatus::parse),
            start_date,
            end_date,
            description: feature
                .string_property("Description")
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            coordinates,
        })
    }

    fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(raw?.trim(), "%Y-%m-%d").ok()
    }
}
