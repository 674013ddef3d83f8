use std::sync::Arc;

use tracing::{debug, warn};

use super::media::{MediaIntakeError, MediaIntakeGuard, MediaSession, PreviewGenerator};
use super::record::{
    ApplicationRecord, AvailabilityPricingUpdate, CandidateFile, LanguageQualificationsUpdate,
    LegalConsentsUpdate, MediaUploadsUpdate, PersonalInfoUpdate, ProfessionalBackgroundUpdate,
    ProfileContentUpdate, Specialization,
};
use super::steps::WizardStep;
use super::submit::{to_submission_payload, SubmissionGateway};
use super::validate::{first_incomplete_step, is_step_valid};

/// Where the wizard currently is: on a step, or finished for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    Step(WizardStep),
    Completed,
}

/// What the single back-position button does on the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackAction {
    Cancel,
    Back,
}

/// Result of a navigation request, reported back to the caller so the view
/// layer can react without the controller knowing anything about rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Advanced(WizardStep),
    /// The current step's predicate failed; position is unchanged.
    IncompleteStep(WizardStep),
    MovedBack(WizardStep),
    Cancelled,
    /// Navigation request that does not apply to the current state.
    NoOp,
}

/// Result of a submission attempt from the final step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Completed,
    /// Submission-time re-check found an invalid step (possibly an earlier
    /// one the applicant backtracked into and broke).
    IncompleteStep(WizardStep),
    /// The marketplace refused the application; message surfaced verbatim.
    Rejected(String),
    /// A submission is already outstanding.
    InFlight,
    NotAtFinalStep,
}

/// External hooks the embedding surface provides to the wizard.
pub trait WizardHooks: Send + Sync {
    /// Fired exactly once, after a successful submission.
    fn on_complete(&self);
    /// Fired only when the wizard is cancelled from the first step.
    fn on_cancel(&self);
}

/// Owns one application record for the lifetime of one wizard session,
/// applies the navigation rules, and carries the transient per-step state
/// (certification input buffer, media session) that never belongs in the
/// record itself.
pub struct WizardController<G, H> {
    record: ApplicationRecord,
    state: WizardState,
    media: MediaSession,
    certification_input: String,
    submission_in_flight: bool,
    guard: MediaIntakeGuard,
    previews: Box<dyn PreviewGenerator>,
    gateway: Arc<G>,
    hooks: Arc<H>,
}

impl<G, H> WizardController<G, H>
where
    G: SubmissionGateway + 'static,
    H: WizardHooks + 'static,
{
    pub fn new(gateway: Arc<G>, hooks: Arc<H>, previews: Box<dyn PreviewGenerator>) -> Self {
        Self {
            record: ApplicationRecord::new(),
            state: WizardState::Step(WizardStep::PersonalInfo),
            media: MediaSession::default(),
            certification_input: String::new(),
            submission_in_flight: false,
            guard: MediaIntakeGuard,
            previews,
            gateway,
            hooks,
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn current_step(&self) -> Option<WizardStep> {
        match self.state {
            WizardState::Step(step) => Some(step),
            WizardState::Completed => None,
        }
    }

    pub fn record(&self) -> &ApplicationRecord {
        &self.record
    }

    pub fn media(&self) -> &MediaSession {
        &self.media
    }

    /// Advance past the current step if its predicate passes.
    pub fn next(&mut self) -> NavOutcome {
        let WizardState::Step(step) = self.state else {
            return NavOutcome::NoOp;
        };
        if !is_step_valid(step, &self.record, &self.media) {
            debug!(step = step.index(), "forward navigation blocked");
            return NavOutcome::IncompleteStep(step);
        }
        match step.next() {
            Some(next) => {
                self.state = WizardState::Step(next);
                NavOutcome::Advanced(next)
            }
            // The final step is left through `submit`, not `next`.
            None => NavOutcome::NoOp,
        }
    }

    /// Move back one step. Never re-validates: leaving a later step in an
    /// invalid state is allowed, the submit-time re-check catches it.
    pub fn back(&mut self) -> NavOutcome {
        let WizardState::Step(step) = self.state else {
            return NavOutcome::NoOp;
        };
        match step.previous() {
            Some(previous) => {
                self.state = WizardState::Step(previous);
                NavOutcome::MovedBack(previous)
            }
            None => NavOutcome::NoOp,
        }
    }

    /// What the back-position button currently offers.
    pub fn primary_back_action(&self) -> BackAction {
        match self.state {
            WizardState::Step(step) if step.is_first() => BackAction::Cancel,
            _ => BackAction::Back,
        }
    }

    /// The single back-position button: cancels from the first step, moves
    /// back everywhere else.
    pub fn primary_back(&mut self) -> NavOutcome {
        match self.primary_back_action() {
            BackAction::Cancel => self.cancel(),
            BackAction::Back => self.back(),
        }
    }

    /// Abandon the wizard from the first step. The record is discarded with
    /// no side effects beyond the cancellation hook.
    pub fn cancel(&mut self) -> NavOutcome {
        match self.state {
            WizardState::Step(step) if step.is_first() => {
                self.hooks.on_cancel();
                NavOutcome::Cancelled
            }
            _ => NavOutcome::NoOp,
        }
    }

    /// Submit from the final step. Re-checks every step (not just the one
    /// being left) so a backtracking edit cannot sneak an invalid record
    /// past the gate, then hands the transformed payload to the gateway.
    pub fn submit(&mut self) -> SubmitOutcome {
        match self.state {
            WizardState::Step(step) if step.is_last() => {}
            _ => return SubmitOutcome::NotAtFinalStep,
        }
        if self.submission_in_flight {
            return SubmitOutcome::InFlight;
        }
        if let Some(incomplete) = first_incomplete_step(&self.record, &self.media) {
            warn!(step = incomplete.index(), "submission blocked by incomplete step");
            return SubmitOutcome::IncompleteStep(incomplete);
        }

        self.submission_in_flight = true;
        let payload = to_submission_payload(&self.record);
        let result = self.gateway.submit(&payload);
        self.submission_in_flight = false;

        match result {
            Ok(()) => {
                self.state = WizardState::Completed;
                self.hooks.on_complete();
                SubmitOutcome::Completed
            }
            Err(error) => {
                warn!(%error, "marketplace rejected coach application");
                SubmitOutcome::Rejected(error.to_string())
            }
        }
    }

    pub fn submission_in_flight(&self) -> bool {
        self.submission_in_flight
    }

    // Record mutation, scoped per sub-record.

    pub fn update_personal_info(&mut self, update: PersonalInfoUpdate) {
        self.record.update_personal_info(update);
    }

    pub fn update_professional_background(&mut self, update: ProfessionalBackgroundUpdate) {
        self.record.update_professional_background(update);
    }

    pub fn update_language_qualifications(&mut self, update: LanguageQualificationsUpdate) {
        self.record.update_language_qualifications(update);
    }

    pub fn set_specialization(&mut self, which: Specialization, enabled: bool) {
        self.record.set_specialization(which, enabled);
    }

    pub fn update_availability_pricing(&mut self, update: AvailabilityPricingUpdate) {
        self.record.update_availability_pricing(update);
    }

    pub fn toggle_preferred_day(&mut self, day: &str) {
        self.record.toggle_preferred_day(day);
    }

    pub fn toggle_preferred_time(&mut self, time: &str) {
        self.record.toggle_preferred_time(time);
    }

    pub fn update_profile_content(&mut self, update: ProfileContentUpdate) {
        self.record.update_profile_content(update);
    }

    pub fn update_media_uploads(&mut self, update: MediaUploadsUpdate) {
        self.record.update_media_uploads(update);
    }

    pub fn update_legal_consents(&mut self, update: LegalConsentsUpdate) {
        self.record.update_legal_consents(update);
    }

    pub fn set_digital_signature(&mut self, signature: impl Into<String>) {
        self.record.set_digital_signature(signature);
    }

    // Certification staging buffer. Text is typed here first and only
    // lands on the record through `add_certification`.

    pub fn set_certification_input(&mut self, text: impl Into<String>) {
        self.certification_input = text.into();
    }

    pub fn certification_input(&self) -> &str {
        &self.certification_input
    }

    /// Append the staged certification text to the record; clears the
    /// buffer only when something was actually appended.
    pub fn add_certification(&mut self) -> bool {
        let staged = self.certification_input.clone();
        let appended = self.record.append_certification(&staged);
        if appended {
            self.certification_input.clear();
        }
        appended
    }

    pub fn remove_certification(&mut self, index: usize) {
        self.record.remove_certification(index);
    }

    // Media intake.

    /// Run the intake guard over a candidate photo; on acceptance store the
    /// descriptor on the record and keep only the preview handle (which may
    /// silently be absent) in the session.
    pub fn attach_photo(&mut self, file: CandidateFile) -> Result<(), MediaIntakeError> {
        self.guard.check_photo(&file)?;
        self.media.photo_preview = self.previews.preview(&file);
        self.record.set_photo_file(file);
        Ok(())
    }

    /// Run the intake guard over a candidate video; acceptance flips the
    /// video source to `upload` even if YouTube was selected before.
    pub fn attach_video(&mut self, file: CandidateFile) -> Result<(), MediaIntakeError> {
        self.guard.check_video(&file)?;
        self.record.accept_video_file(file);
        Ok(())
    }
}
