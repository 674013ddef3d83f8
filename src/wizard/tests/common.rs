use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::wizard::controller::{WizardController, WizardHooks};
use crate::wizard::media::{MediaSession, PhotoPreview, PreviewGenerator};
use crate::wizard::record::{
    ApplicationRecord, CandidateFile, LanguageQualificationsUpdate, LegalConsentsUpdate,
    MediaUploadsUpdate, PersonalInfoUpdate, ProfessionalBackgroundUpdate, ProfileContentUpdate,
    SleLevel, Specialization,
};
use crate::wizard::submit::{SubmissionError, SubmissionGateway, SubmissionPayload};

pub(super) fn bio_of(length: usize) -> String {
    "x".repeat(length)
}

/// Fill the six required step-1 fields.
pub(super) fn fill_personal_info(record: &mut ApplicationRecord) {
    record.update_personal_info(PersonalInfoUpdate::FirstName("John".to_string()));
    record.update_personal_info(PersonalInfoUpdate::LastName("Doe".to_string()));
    record.update_personal_info(PersonalInfoUpdate::Email("john.doe@example.com".to_string()));
    record.update_personal_info(PersonalInfoUpdate::Phone("+1 (613) 555-0123".to_string()));
    record.update_personal_info(PersonalInfoUpdate::City("Ottawa".to_string()));
    record.update_personal_info(PersonalInfoUpdate::Province("Ontario".to_string()));
}

/// A record that passes every step with minimal data: bio of exactly 100
/// characters, one specialization, one preferred day, mandatory consents,
/// and a photo URL (no preview session needed).
pub(super) fn minimal_valid_record() -> ApplicationRecord {
    let mut record = ApplicationRecord::new();
    fill_personal_info(&mut record);
    record.update_professional_background(ProfessionalBackgroundUpdate::HighestEducation(
        "masters".to_string(),
    ));
    record.update_language_qualifications(LanguageQualificationsUpdate::NativeLanguage(
        "french".to_string(),
    ));
    record.update_language_qualifications(LanguageQualificationsUpdate::SleOralLevel(SleLevel::C));
    record.set_specialization(Specialization::ExamPrep, true);
    record.toggle_preferred_day("monday");
    record.update_profile_content(ProfileContentUpdate::Headline(
        "Certified SLE coach".to_string(),
    ));
    record.update_profile_content(ProfileContentUpdate::Bio(bio_of(100)));
    record.update_media_uploads(MediaUploadsUpdate::PhotoUrl(
        "/images/coaches/john-doe.jpg".to_string(),
    ));
    record.update_legal_consents(LegalConsentsUpdate::TermsOfService(true));
    record.update_legal_consents(LegalConsentsUpdate::PrivacyPolicy(true));
    record.update_legal_consents(LegalConsentsUpdate::BackgroundCheck(true));
    record.update_legal_consents(LegalConsentsUpdate::CodeOfConduct(true));
    record.update_legal_consents(LegalConsentsUpdate::CommissionTerms(true));
    record.set_digital_signature("John Doe");
    record
}

pub(super) fn no_media() -> MediaSession {
    MediaSession::default()
}

pub(super) fn photo_file(size_bytes: u64) -> CandidateFile {
    CandidateFile {
        name: "headshot.jpg".to_string(),
        content_type: "image/jpeg".to_string(),
        size_bytes,
    }
}

pub(super) fn video_file(size_bytes: u64) -> CandidateFile {
    CandidateFile {
        name: "intro.mp4".to_string(),
        content_type: "video/mp4".to_string(),
        size_bytes,
    }
}

/// Gateway that acknowledges everything and records each payload.
#[derive(Default)]
pub(super) struct RecordingGateway {
    payloads: Mutex<Vec<SubmissionPayload>>,
}

impl RecordingGateway {
    pub(super) fn payloads(&self) -> Vec<SubmissionPayload> {
        self.payloads.lock().expect("gateway mutex poisoned").clone()
    }
}

impl SubmissionGateway for RecordingGateway {
    fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError> {
        self.payloads
            .lock()
            .expect("gateway mutex poisoned")
            .push(payload.clone());
        Ok(())
    }
}

/// Gateway that refuses every application with a business error.
pub(super) struct RejectingGateway(pub(super) &'static str);

impl SubmissionGateway for RejectingGateway {
    fn submit(&self, _payload: &SubmissionPayload) -> Result<(), SubmissionError> {
        Err(SubmissionError::Rejected(self.0.to_string()))
    }
}

#[derive(Default)]
pub(super) struct RecordingHooks {
    completed: AtomicUsize,
    cancelled: AtomicUsize,
}

impl RecordingHooks {
    pub(super) fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub(super) fn cancelled(&self) -> usize {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl WizardHooks for RecordingHooks {
    fn on_complete(&self) {
        self.completed.fetch_add(1, Ordering::SeqCst);
    }

    fn on_cancel(&self) {
        self.cancelled.fetch_add(1, Ordering::SeqCst);
    }
}

/// Preview utility that always succeeds with a stub handle.
pub(super) struct StubPreviews;

impl PreviewGenerator for StubPreviews {
    fn preview(&self, file: &CandidateFile) -> Option<PhotoPreview> {
        Some(PhotoPreview(format!("preview:{}", file.name)))
    }
}

/// Preview utility that silently fails, as the contract allows.
pub(super) struct NoPreviews;

impl PreviewGenerator for NoPreviews {
    fn preview(&self, _file: &CandidateFile) -> Option<PhotoPreview> {
        None
    }
}

pub(super) type TestController<G> = WizardController<G, RecordingHooks>;

pub(super) fn build_controller() -> (
    TestController<RecordingGateway>,
    Arc<RecordingGateway>,
    Arc<RecordingHooks>,
) {
    let gateway = Arc::new(RecordingGateway::default());
    let hooks = Arc::new(RecordingHooks::default());
    let controller = WizardController::new(gateway.clone(), hooks.clone(), Box::new(StubPreviews));
    (controller, gateway, hooks)
}

pub(super) fn build_rejecting_controller(
    message: &'static str,
) -> (TestController<RejectingGateway>, Arc<RecordingHooks>) {
    let hooks = Arc::new(RecordingHooks::default());
    let controller = WizardController::new(
        Arc::new(RejectingGateway(message)),
        hooks.clone(),
        Box::new(StubPreviews),
    );
    (controller, hooks)
}
