use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Tag sent with every lead so the automation knows where it came from
pub const LEAD_SOURCE: &str = "landing-page";

/// A contact request as typed into the form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Raw select value; empty until the visitor picks one
    pub project_type: String,
    /// Only meaningful when `project_type` is "other"
    pub other_project_type: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn project_type(&self) -> Option<ProjectType> {
        ProjectType::from_str(&self.project_type)
    }
}

/// Kinds of project the firm takes on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Residential,
    Commercial,
    Industrial,
    Renovation,
    Other,
}

impl ProjectType {
    /// Value sent over the wire and used as the `<option>` value
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Residential => "residencial",
            ProjectType::Commercial => "comercial",
            ProjectType::Industrial => "industrial",
            ProjectType::Renovation => "reforma",
            ProjectType::Other => "outro",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::Residential => "Residential",
            ProjectType::Commercial => "Commercial",
            ProjectType::Industrial => "Industrial",
            ProjectType::Renovation => "Renovation",
            ProjectType::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "residencial" => Some(ProjectType::Residential),
            "comercial" => Some(ProjectType::Commercial),
            "industrial" => Some(ProjectType::Industrial),
            "reforma" => Some(ProjectType::Renovation),
            "outro" => Some(ProjectType::Other),
            _ => None,
        }
    }

    pub fn all() -> Vec<ProjectType> {
        vec![
            ProjectType::Residential,
            ProjectType::Commercial,
            ProjectType::Industrial,
            ProjectType::Renovation,
            ProjectType::Other,
        ]
    }
}

/// JSON document posted to the lead webhook
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OutboundPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub message: String,
    pub timestamp: String,
    pub source: String,
}

impl OutboundPayload {
    /// Reshape a submission for delivery. An "other" project type is replaced
    /// by the visitor's own description.
    pub fn new(submission: &ContactSubmission, submitted_at: DateTime<Utc>) -> Self {
        let project_type = match submission.project_type() {
            Some(ProjectType::Other) => submission.other_project_type.trim().to_string(),
            _ => submission.project_type.clone(),
        };

        Self {
            name: submission.name.clone(),
            email: submission.email.clone(),
            phone: submission.phone.clone(),
            project_type,
            message: submission.message.clone(),
            timestamp: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            source: LEAD_SOURCE.to_string(),
        }
    }
}
