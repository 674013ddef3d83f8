use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

use super::record::{ApplicationRecord, SleLevel};

/// External wire shape handed to the marketplace submission service. Field
/// names are the service's contract; optional fields that were left empty
/// are omitted outright rather than sent as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub province: String,
    pub education: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<String>,
    pub years_teaching: u32,
    pub native_language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sle_oral_level: Option<SleLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sle_written_level: Option<SleLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sle_reading_level: Option<SleLevel>,
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline_fr: Option<String>,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio_fr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teaching_philosophy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_value: Option<String>,
    pub languages: String,
    pub specializations: BTreeMap<&'static str, bool>,
    pub years_experience: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
    pub hourly_rate: u32,
    pub trial_rate: u32,
    pub weekly_hours: u32,
    pub available_days: Vec<String>,
    pub available_time_slots: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub terms_accepted: bool,
    pub privacy_accepted: bool,
    pub background_check_consent: bool,
    pub code_of_conduct_accepted: bool,
    pub commission_accepted: bool,
    pub digital_signature: String,
}

/// Map the internal application record onto the marketplace payload. Pure
/// and deterministic: no clock, no I/O, identical input yields identical
/// output.
pub fn to_submission_payload(record: &ApplicationRecord) -> SubmissionPayload {
    let background = &record.professional_background;
    let qualifications = &record.language_qualifications;
    let pricing = &record.availability_pricing;
    let content = &record.profile_content;
    let media = &record.media_uploads;
    let consents = &record.legal_consents;

    // The marketplace reads the same joined list under two names; the
    // duplication is part of the contract, not an accident.
    let joined_certifications = if background.certifications.is_empty() {
        None
    } else {
        Some(background.certifications.join(", "))
    };

    SubmissionPayload {
        first_name: record.personal_info.first_name.clone(),
        last_name: record.personal_info.last_name.clone(),
        email: record.personal_info.email.clone(),
        phone: record.personal_info.phone.clone(),
        city: record.personal_info.city.clone(),
        province: record.personal_info.province.clone(),
        education: background.highest_education.clone(),
        certifications: joined_certifications.clone(),
        years_teaching: background.years_teaching,
        native_language: qualifications.native_language.clone(),
        sle_oral_level: qualifications.sle_oral_level,
        sle_written_level: qualifications.sle_written_level,
        sle_reading_level: qualifications.sle_reading_level,
        headline: content.headline.clone(),
        headline_fr: non_empty(&content.headline_fr),
        bio: content.bio.clone(),
        bio_fr: non_empty(&content.bio_fr),
        teaching_philosophy: non_empty(&content.teaching_philosophy),
        unique_value: non_empty(&content.unique_approach),
        languages: derive_languages(&qualifications.native_language),
        specializations: record.specializations.as_flag_map(),
        years_experience: background.years_teaching,
        credentials: joined_certifications,
        // Major currency units to cents. Rates outside the step-5 ranges
        // never reach a submit-ready record.
        hourly_rate: pricing.hourly_rate.saturating_mul(100),
        trial_rate: pricing.trial_rate.saturating_mul(100),
        weekly_hours: pricing.weekly_hours,
        available_days: pricing.preferred_days.clone(),
        available_time_slots: pricing.preferred_times.clone(),
        photo_url: non_empty(&media.photo_url),
        video_url: non_empty(&media.video_url),
        terms_accepted: consents.terms_of_service,
        privacy_accepted: consents.privacy_policy,
        background_check_consent: consents.background_check,
        code_of_conduct_accepted: consents.code_of_conduct,
        commission_accepted: consents.commission_terms,
        digital_signature: consents.digital_signature.clone(),
    }
}

/// Teaching languages offered on the marketplace, derived from the native
/// language: anything that is not exactly French or English (bilingual
/// included) offers both.
fn derive_languages(native_language: &str) -> String {
    match native_language {
        "french" => "french".to_string(),
        "english" => "english".to_string(),
        _ => "both".to_string(),
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Submission failure reported back to the applicant. The message is shown
/// verbatim; the wizard stays on the final step, re-submittable.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("{0}")]
    Rejected(String),
    #[error("submission service unavailable: {0}")]
    Unavailable(String),
}

/// Outbound boundary to the marketplace submission service.
pub trait SubmissionGateway: Send + Sync {
    fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError>;
}

/// Gateway that acknowledges every application and records it in the log.
/// The production forwarder lives with the marketplace backend; this keeps
/// the service runnable on its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingGateway;

impl SubmissionGateway for LoggingGateway {
    fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError> {
        info!(
            applicant = %format!("{} {}", payload.first_name, payload.last_name),
            hourly_rate_cents = payload.hourly_rate,
            languages = %payload.languages,
            "accepted coach application"
        );
        Ok(())
    }
}
