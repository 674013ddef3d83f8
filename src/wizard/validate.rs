//! Per-step gating predicates.
//!
//! Each predicate is pure over the record and the ephemeral media session,
//! so it can run against literal fixtures with no controller involved.
//! Failure is a uniform incomplete-step signal; the wizard never enumerates
//! which field was missing.

use std::ops::RangeInclusive;

use super::media::MediaSession;
use super::record::ApplicationRecord;
use super::steps::WizardStep;

/// Accepted ranges for the step-5 pricing sliders, in major currency units
/// and hours per week.
pub const HOURLY_RATE_RANGE: RangeInclusive<u32> = 20..=200;
pub const TRIAL_RATE_RANGE: RangeInclusive<u32> = 0..=100;
pub const WEEKLY_HOURS_RANGE: RangeInclusive<u32> = 1..=40;

/// Whether `step` may be left through the primary forward action.
pub fn is_step_valid(step: WizardStep, record: &ApplicationRecord, media: &MediaSession) -> bool {
    match step {
        WizardStep::PersonalInfo => {
            let info = &record.personal_info;
            !info.first_name.is_empty()
                && !info.last_name.is_empty()
                && !info.email.is_empty()
                && !info.phone.is_empty()
                && !info.city.is_empty()
                && !info.province.is_empty()
        }
        // years_teaching is unsigned, so the source's `>= 0` half of this
        // predicate holds by construction.
        WizardStep::ProfessionalBackground => {
            !record.professional_background.highest_education.is_empty()
        }
        WizardStep::LanguageQualifications => {
            let qualifications = &record.language_qualifications;
            !qualifications.native_language.is_empty() && qualifications.sle_oral_level.is_some()
        }
        WizardStep::Specializations => record.specializations.any(),
        WizardStep::AvailabilityPricing => {
            let pricing = &record.availability_pricing;
            WEEKLY_HOURS_RANGE.contains(&pricing.weekly_hours)
                && HOURLY_RATE_RANGE.contains(&pricing.hourly_rate)
                && TRIAL_RATE_RANGE.contains(&pricing.trial_rate)
                && !pricing.preferred_days.is_empty()
        }
        WizardStep::ProfileContent => {
            let content = &record.profile_content;
            !content.headline.is_empty()
                && !content.bio.is_empty()
                && content.bio.chars().count() >= 100
        }
        WizardStep::MediaUploads => {
            media.photo_preview.is_some() || !record.media_uploads.photo_url.is_empty()
        }
        WizardStep::LegalConsents => {
            let consents = &record.legal_consents;
            consents.terms_of_service
                && consents.privacy_policy
                && consents.background_check
                && consents.code_of_conduct
                && consents.commission_terms
                && !consents.digital_signature.is_empty()
        }
    }
}

/// First step whose predicate fails, in wizard order. A record is
/// submit-ready only when this returns `None`; the controller re-runs this
/// at submission time to catch backtracking edits.
pub fn first_incomplete_step(
    record: &ApplicationRecord,
    media: &MediaSession,
) -> Option<WizardStep> {
    WizardStep::ALL
        .into_iter()
        .find(|step| !is_step_valid(*step, record, media))
}
