use std::fmt::{self, Display};

use axum::response::Response;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::{ApiError, Json};
use super::{attachment, render_blocking};
use crate::prelude::*;
use crate::render::TemplateKind;

const DEFAULT_INSTRUCTOR: &str = "IntelliForge AI Team";

/// The closed set of IntelliForge Learning courses. Requests naming anything
/// else are rejected at the deserialization boundary, before the renderer is
/// ever involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Course {
    #[serde(rename = "AI Product Development Fundamentals")]
    AiProductDevelopmentFundamentals,
    #[serde(rename = "Building AI-Powered Applications")]
    BuildingAiPoweredApplications,
    #[serde(rename = "Prompt Engineering & LLM Integration")]
    PromptEngineeringAndLlmIntegration,
    #[serde(rename = "Full-Stack AI Development")]
    FullStackAiDevelopment,
    #[serde(rename = "AI Product Design & UX")]
    AiProductDesignAndUx,
    #[serde(rename = "Digital Profile Creation")]
    DigitalProfileCreation,
    #[serde(rename = "Deploying AI Solutions")]
    DeployingAiSolutions,
}

impl Course {
    pub const ALL: [Self; 7] = [
        Self::AiProductDevelopmentFundamentals,
        Self::BuildingAiPoweredApplications,
        Self::PromptEngineeringAndLlmIntegration,
        Self::FullStackAiDevelopment,
        Self::AiProductDesignAndUx,
        Self::DigitalProfileCreation,
        Self::DeployingAiSolutions,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::AiProductDevelopmentFundamentals => "AI Product Development Fundamentals",
            Self::BuildingAiPoweredApplications => "Building AI-Powered Applications",
            Self::PromptEngineeringAndLlmIntegration => "Prompt Engineering & LLM Integration",
            Self::FullStackAiDevelopment => "Full-Stack AI Development",
            Self::AiProductDesignAndUx => "AI Product Design & UX",
            Self::DigitalProfileCreation => "Digital Profile Creation",
            Self::DeployingAiSolutions => "Deploying AI Solutions",
        }
    }
}

impl Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[derive(Debug, Deserialize)]
pub struct CertificateRequest {
    pub participant_name: String,
    pub course_name: Course,
    pub completion_date: NaiveDate,
    #[serde(default = "default_instructor")]
    pub instructor_name: String,
}

fn default_instructor() -> String {
    DEFAULT_INSTRUCTOR.to_string()
}

/// `POST /api/certificate` - fills the certificate shell with the given fields
/// and returns the rendered PDF.
pub async fn generate(
    Json(request): Json<CertificateRequest>,
) -> std::result::Result<Response, ApiError> {
    let participant = request.participant_name.trim();

    if participant.is_empty() {
        return Err(ApiError::validation("participant_name must not be empty"));
    }

    let certificate_id = certificate_id(participant, request.course_name, request.completion_date);

    info!(
        "Generating certificate for {participant} - {}.",
        request.course_name
    );

    let ctx = minijinja::context! {
        participant_name => participant,
        course_name => request.course_name.title(),
        completion_date => request.completion_date.to_string(),
        instructor_name => request.instructor_name,
        certificate_id => certificate_id,
    };

    let bytes = render_blocking(TemplateKind::Certificate, ctx).await?;

    let filename = format!("Certificate_{}.pdf", underscore_name(participant));
    Ok(attachment(bytes, &filename))
}

/// Derives the stable certificate ID from the identifying fields; the same
/// participant, course and date always yield the same ID.
fn certificate_id(participant: &str, course: Course, date: NaiveDate) -> String {
    let raw = format!("{participant}-{course}-{date}");

    format!("IF-{:016X}", seahash::hash(raw.as_bytes()))
}

/// Collapses whitespace in a participant name to underscores for use in the
/// download filename, dropping characters that would break the header.
fn underscore_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_round_trips_through_serde() {
        let course: Course = serde_json::from_str("\"Deploying AI Solutions\"").unwrap();
        assert_eq!(course, Course::DeployingAiSolutions);
        assert_eq!(
            serde_json::to_string(&course).unwrap(),
            "\"Deploying AI Solutions\""
        );
    }

    #[test]
    fn unknown_course_is_rejected() {
        let result: Result<Course, _> = serde_json::from_str("\"Intro to Pottery\"");
        assert!(result.is_err());
    }

    #[test]
    fn catalog_covers_every_variant() {
        assert_eq!(Course::ALL.len(), 7);

        for course in Course::ALL {
            assert!(!course.title().is_empty());
        }
    }

    #[test]
    fn certificate_id_is_stable() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        let first = certificate_id("Jane Doe", Course::DeployingAiSolutions, date);
        let second = certificate_id("Jane Doe", Course::DeployingAiSolutions, date);

        assert_eq!(first, second);
        assert!(first.starts_with("IF-"));
    }

    #[test]
    fn certificate_id_varies_with_input() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        let jane = certificate_id("Jane Doe", Course::DeployingAiSolutions, date);
        let john = certificate_id("John Doe", Course::DeployingAiSolutions, date);

        assert_ne!(jane, john);
    }

    #[test]
    fn names_collapse_to_underscores() {
        assert_eq!(underscore_name("Jane Doe"), "Jane_Doe");
        assert_eq!(underscore_name("  Ada   Lovelace "), "Ada_Lovelace");
        assert_eq!(underscore_name("O\"Connor"), "OConnor");
    }

    #[test]
    fn instructor_defaults_when_absent() {
        let request: CertificateRequest = serde_json::from_value(serde_json::json!({
            "participant_name": "Jane Doe",
            "course_name": "Deploying AI Solutions",
            "completion_date": "2026-01-01",
        }))
        .unwrap();

        assert_eq!(request.instructor_name, DEFAULT_INSTRUCTOR);
    }
}
