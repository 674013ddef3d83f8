//! Coach application wizard: record, per-step validation, controller state
//! machine, media intake, and the submission transform.
//!
//! The controller owns one [`record::ApplicationRecord`] per session and is
//! the only writer; everything that checks or transforms the record is a
//! pure function so the wizard can be exercised without any rendering layer.

pub mod controller;
pub mod media;
pub mod options;
pub mod record;
pub mod router;
pub mod steps;
pub mod submit;
pub mod validate;

#[cfg(test)]
mod tests;

pub use controller::{
    BackAction, NavOutcome, SubmitOutcome, WizardController, WizardHooks, WizardState,
};
pub use media::{
    MediaIntakeError, MediaIntakeGuard, MediaSession, PhotoPreview, PreviewGenerator,
    PHOTO_MAX_BYTES, VIDEO_MAX_BYTES,
};
pub use record::{
    ApplicationRecord, AvailabilityPricing, AvailabilityPricingUpdate, CandidateFile,
    LanguageQualifications, LanguageQualificationsUpdate, LegalConsents, LegalConsentsUpdate,
    MediaUploads, MediaUploadsUpdate, PersonalInfo, PersonalInfoUpdate, ProfessionalBackground,
    ProfessionalBackgroundUpdate, ProfileContent, ProfileContentUpdate, SleLevel, Specialization,
    Specializations, VideoSource,
};
pub use router::application_router;
pub use steps::WizardStep;
pub use submit::{
    to_submission_payload, LoggingGateway, SubmissionError, SubmissionGateway, SubmissionPayload,
};
pub use validate::{
    first_incomplete_step, is_step_valid, HOURLY_RATE_RANGE, TRIAL_RATE_RANGE, WEEKLY_HOURS_RANGE,
};
