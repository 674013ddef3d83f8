use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::options;

/// Contact and location details for the applicant (step 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub province: String,
    pub country: String,
    pub timezone: String,
}

impl Default for PersonalInfo {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            city: String::new(),
            province: String::new(),
            country: options::DEFAULT_COUNTRY.to_string(),
            timezone: options::DEFAULT_TIMEZONE.to_string(),
        }
    }
}

/// Education, certifications, and work history (step 2).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfessionalBackground {
    pub highest_education: String,
    pub field_of_study: String,
    pub institution: String,
    pub certifications: Vec<String>,
    pub years_teaching: u32,
    pub current_occupation: String,
    pub linkedin_url: String,
}

/// Second Language Evaluation proficiency level. `NotTested` is a valid
/// selection; an unanswered select is `None` on the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SleLevel {
    #[serde(rename = "none")]
    NotTested,
    A,
    B,
    C,
    E,
}

/// Native language and SLE proficiency levels (step 3).
///
/// `sle_oral_level` is the canonical field name for oral proficiency; the
/// payload keys in [`super::submit`] follow the same spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageQualifications {
    pub native_language: String,
    pub sle_oral_level: Option<SleLevel>,
    pub sle_written_level: Option<SleLevel>,
    pub sle_reading_level: Option<SleLevel>,
    pub teaching_experience: String,
}

/// Selector for one of the fourteen coaching specializations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Specialization {
    OralA,
    OralB,
    OralC,
    WrittenA,
    WrittenB,
    WrittenC,
    ReadingComprehension,
    ExamPrep,
    BusinessFrench,
    BusinessEnglish,
    GrammarFocus,
    VocabularyBuilding,
    ConversationPractice,
    PronunciationCoaching,
}

impl Specialization {
    pub const ALL: [Specialization; 14] = [
        Specialization::OralA,
        Specialization::OralB,
        Specialization::OralC,
        Specialization::WrittenA,
        Specialization::WrittenB,
        Specialization::WrittenC,
        Specialization::ReadingComprehension,
        Specialization::ExamPrep,
        Specialization::BusinessFrench,
        Specialization::BusinessEnglish,
        Specialization::GrammarFocus,
        Specialization::VocabularyBuilding,
        Specialization::ConversationPractice,
        Specialization::PronunciationCoaching,
    ];

    /// Wire key used in the submission payload's flag map.
    pub const fn key(self) -> &'static str {
        match self {
            Specialization::OralA => "oralA",
            Specialization::OralB => "oralB",
            Specialization::OralC => "oralC",
            Specialization::WrittenA => "writtenA",
            Specialization::WrittenB => "writtenB",
            Specialization::WrittenC => "writtenC",
            Specialization::ReadingComprehension => "readingComprehension",
            Specialization::ExamPrep => "examPrep",
            Specialization::BusinessFrench => "businessFrench",
            Specialization::BusinessEnglish => "businessEnglish",
            Specialization::GrammarFocus => "grammarFocus",
            Specialization::VocabularyBuilding => "vocabularyBuilding",
            Specialization::ConversationPractice => "conversationPractice",
            Specialization::PronunciationCoaching => "pronunciationCoaching",
        }
    }
}

/// Fourteen independent coaching focus flags (step 4).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Specializations {
    pub oral_a: bool,
    pub oral_b: bool,
    pub oral_c: bool,
    pub written_a: bool,
    pub written_b: bool,
    pub written_c: bool,
    pub reading_comprehension: bool,
    pub exam_prep: bool,
    pub business_french: bool,
    pub business_english: bool,
    pub grammar_focus: bool,
    pub vocabulary_building: bool,
    pub conversation_practice: bool,
    pub pronunciation_coaching: bool,
}

impl Specializations {
    pub fn set(&mut self, which: Specialization, enabled: bool) {
        match which {
            Specialization::OralA => self.oral_a = enabled,
            Specialization::OralB => self.oral_b = enabled,
            Specialization::OralC => self.oral_c = enabled,
            Specialization::WrittenA => self.written_a = enabled,
            Specialization::WrittenB => self.written_b = enabled,
            Specialization::WrittenC => self.written_c = enabled,
            Specialization::ReadingComprehension => self.reading_comprehension = enabled,
            Specialization::ExamPrep => self.exam_prep = enabled,
            Specialization::BusinessFrench => self.business_french = enabled,
            Specialization::BusinessEnglish => self.business_english = enabled,
            Specialization::GrammarFocus => self.grammar_focus = enabled,
            Specialization::VocabularyBuilding => self.vocabulary_building = enabled,
            Specialization::ConversationPractice => self.conversation_practice = enabled,
            Specialization::PronunciationCoaching => self.pronunciation_coaching = enabled,
        }
    }

    pub const fn get(&self, which: Specialization) -> bool {
        match which {
            Specialization::OralA => self.oral_a,
            Specialization::OralB => self.oral_b,
            Specialization::OralC => self.oral_c,
            Specialization::WrittenA => self.written_a,
            Specialization::WrittenB => self.written_b,
            Specialization::WrittenC => self.written_c,
            Specialization::ReadingComprehension => self.reading_comprehension,
            Specialization::ExamPrep => self.exam_prep,
            Specialization::BusinessFrench => self.business_french,
            Specialization::BusinessEnglish => self.business_english,
            Specialization::GrammarFocus => self.grammar_focus,
            Specialization::VocabularyBuilding => self.vocabulary_building,
            Specialization::ConversationPractice => self.conversation_practice,
            Specialization::PronunciationCoaching => self.pronunciation_coaching,
        }
    }

    pub fn any(&self) -> bool {
        Specialization::ALL.iter().any(|which| self.get(*which))
    }

    /// Ordered flag map for the submission payload passthrough.
    pub fn as_flag_map(&self) -> BTreeMap<&'static str, bool> {
        Specialization::ALL
            .iter()
            .map(|which| (which.key(), self.get(*which)))
            .collect()
    }
}

/// Weekly availability and session pricing in major currency units (step 5).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AvailabilityPricing {
    pub weekly_hours: u32,
    pub preferred_days: Vec<String>,
    pub preferred_times: Vec<String>,
    pub hourly_rate: u32,
    pub trial_rate: u32,
    pub package_discount: u32,
}

impl Default for AvailabilityPricing {
    fn default() -> Self {
        Self {
            weekly_hours: 10,
            preferred_days: Vec::new(),
            preferred_times: Vec::new(),
            hourly_rate: 50,
            trial_rate: 25,
            package_discount: 10,
        }
    }
}

/// Public profile copy in English with optional French parallels (step 6).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileContent {
    pub headline: String,
    pub headline_fr: String,
    pub bio: String,
    pub bio_fr: String,
    pub teaching_philosophy: String,
    pub unique_approach: String,
    pub success_story: String,
}

/// Descriptor for a locally selected file. The raw bytes never enter the
/// record; upload happens outside the wizard core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateFile {
    pub name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

/// How the introduction video is provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoSource {
    Upload,
    Youtube,
}

/// Profile photo and introduction video references (step 7).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaUploads {
    pub photo_url: String,
    pub photo_file: Option<CandidateFile>,
    pub video_url: String,
    pub video_file: Option<CandidateFile>,
    pub video_type: VideoSource,
}

impl Default for MediaUploads {
    fn default() -> Self {
        Self {
            photo_url: String::new(),
            photo_file: None,
            video_url: String::new(),
            video_file: None,
            video_type: VideoSource::Youtube,
        }
    }
}

/// Legal agreements and the typed digital signature (step 8).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegalConsents {
    pub terms_of_service: bool,
    pub privacy_policy: bool,
    pub background_check: bool,
    pub code_of_conduct: bool,
    pub commission_terms: bool,
    pub marketing_consent: bool,
    pub digital_signature: String,
    /// Derived: stamped whenever the signature text changes, never settable
    /// on its own.
    pub signature_date: Option<DateTime<Utc>>,
}

/// Typed update for a step-1 field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonalInfoUpdate {
    FirstName(String),
    LastName(String),
    Email(String),
    Phone(String),
    City(String),
    Province(String),
    Country(String),
    Timezone(String),
}

/// Typed update for a step-2 field. The certification list has its own
/// append/remove operations on [`ApplicationRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfessionalBackgroundUpdate {
    HighestEducation(String),
    FieldOfStudy(String),
    Institution(String),
    YearsTeaching(u32),
    CurrentOccupation(String),
    LinkedinUrl(String),
}

/// Typed update for a step-3 field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageQualificationsUpdate {
    NativeLanguage(String),
    SleOralLevel(SleLevel),
    SleWrittenLevel(SleLevel),
    SleReadingLevel(SleLevel),
    TeachingExperience(String),
}

/// Typed update for a step-5 scalar field. Day and daypart sets are toggled
/// through their own operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityPricingUpdate {
    WeeklyHours(u32),
    HourlyRate(u32),
    TrialRate(u32),
    PackageDiscount(u32),
}

/// Typed update for a step-6 field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileContentUpdate {
    Headline(String),
    HeadlineFr(String),
    Bio(String),
    BioFr(String),
    TeachingPhilosophy(String),
    UniqueApproach(String),
    SuccessStory(String),
}

/// Typed update for a step-7 reference field. File attachment goes through
/// the media intake guard on the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaUploadsUpdate {
    PhotoUrl(String),
    VideoUrl(String),
    VideoType(VideoSource),
}

/// Typed update for a step-8 consent flag. The signature is set through
/// [`ApplicationRecord::set_digital_signature`] so its date stays derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalConsentsUpdate {
    TermsOfService(bool),
    PrivacyPolicy(bool),
    BackgroundCheck(bool),
    CodeOfConduct(bool),
    CommissionTerms(bool),
    MarketingConsent(bool),
}

/// The in-progress application aggregate. One record lives for exactly one
/// wizard session; mutation happens only through the scoped update
/// operations below, and no operation touches more than one sub-record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationRecord {
    pub personal_info: PersonalInfo,
    pub professional_background: ProfessionalBackground,
    pub language_qualifications: LanguageQualifications,
    pub specializations: Specializations,
    pub availability_pricing: AvailabilityPricing,
    pub profile_content: ProfileContent,
    pub media_uploads: MediaUploads,
    pub legal_consents: LegalConsents,
}

impl ApplicationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_personal_info(&mut self, update: PersonalInfoUpdate) {
        let info = &mut self.personal_info;
        match update {
            PersonalInfoUpdate::FirstName(value) => info.first_name = value,
            PersonalInfoUpdate::LastName(value) => info.last_name = value,
            PersonalInfoUpdate::Email(value) => info.email = value,
            PersonalInfoUpdate::Phone(value) => info.phone = value,
            PersonalInfoUpdate::City(value) => info.city = value,
            PersonalInfoUpdate::Province(value) => info.province = value,
            PersonalInfoUpdate::Country(value) => info.country = value,
            PersonalInfoUpdate::Timezone(value) => info.timezone = value,
        }
    }

    pub fn update_professional_background(&mut self, update: ProfessionalBackgroundUpdate) {
        let background = &mut self.professional_background;
        match update {
            ProfessionalBackgroundUpdate::HighestEducation(value) => {
                background.highest_education = value
            }
            ProfessionalBackgroundUpdate::FieldOfStudy(value) => background.field_of_study = value,
            ProfessionalBackgroundUpdate::Institution(value) => background.institution = value,
            ProfessionalBackgroundUpdate::YearsTeaching(value) => background.years_teaching = value,
            ProfessionalBackgroundUpdate::CurrentOccupation(value) => {
                background.current_occupation = value
            }
            ProfessionalBackgroundUpdate::LinkedinUrl(value) => background.linkedin_url = value,
        }
    }

    pub fn update_language_qualifications(&mut self, update: LanguageQualificationsUpdate) {
        let qualifications = &mut self.language_qualifications;
        match update {
            LanguageQualificationsUpdate::NativeLanguage(value) => {
                qualifications.native_language = value
            }
            LanguageQualificationsUpdate::SleOralLevel(level) => {
                qualifications.sle_oral_level = Some(level)
            }
            LanguageQualificationsUpdate::SleWrittenLevel(level) => {
                qualifications.sle_written_level = Some(level)
            }
            LanguageQualificationsUpdate::SleReadingLevel(level) => {
                qualifications.sle_reading_level = Some(level)
            }
            LanguageQualificationsUpdate::TeachingExperience(value) => {
                qualifications.teaching_experience = value
            }
        }
    }

    pub fn set_specialization(&mut self, which: Specialization, enabled: bool) {
        self.specializations.set(which, enabled);
    }

    pub fn update_availability_pricing(&mut self, update: AvailabilityPricingUpdate) {
        let pricing = &mut self.availability_pricing;
        match update {
            AvailabilityPricingUpdate::WeeklyHours(value) => pricing.weekly_hours = value,
            AvailabilityPricingUpdate::HourlyRate(value) => pricing.hourly_rate = value,
            AvailabilityPricingUpdate::TrialRate(value) => pricing.trial_rate = value,
            AvailabilityPricingUpdate::PackageDiscount(value) => pricing.package_discount = value,
        }
    }

    /// Add or remove a weekday token from the preferred-day set. Unknown
    /// tokens are ignored.
    pub fn toggle_preferred_day(&mut self, day: &str) {
        if !options::is_weekday_token(day) {
            return;
        }
        toggle_token(&mut self.availability_pricing.preferred_days, day);
    }

    /// Add or remove a daypart token from the preferred-time set. Unknown
    /// tokens are ignored.
    pub fn toggle_preferred_time(&mut self, time: &str) {
        if !options::is_daypart_token(time) {
            return;
        }
        toggle_token(&mut self.availability_pricing.preferred_times, time);
    }

    pub fn update_profile_content(&mut self, update: ProfileContentUpdate) {
        let content = &mut self.profile_content;
        match update {
            ProfileContentUpdate::Headline(value) => content.headline = value,
            ProfileContentUpdate::HeadlineFr(value) => content.headline_fr = value,
            ProfileContentUpdate::Bio(value) => content.bio = value,
            ProfileContentUpdate::BioFr(value) => content.bio_fr = value,
            ProfileContentUpdate::TeachingPhilosophy(value) => {
                content.teaching_philosophy = value
            }
            ProfileContentUpdate::UniqueApproach(value) => content.unique_approach = value,
            ProfileContentUpdate::SuccessStory(value) => content.success_story = value,
        }
    }

    pub fn update_media_uploads(&mut self, update: MediaUploadsUpdate) {
        let media = &mut self.media_uploads;
        match update {
            MediaUploadsUpdate::PhotoUrl(value) => media.photo_url = value,
            MediaUploadsUpdate::VideoUrl(value) => media.video_url = value,
            MediaUploadsUpdate::VideoType(source) => media.video_type = source,
        }
    }

    /// Store an accepted photo file descriptor. Size and type checks belong
    /// to the media intake guard, not the record.
    pub fn set_photo_file(&mut self, file: CandidateFile) {
        self.media_uploads.photo_file = Some(file);
    }

    /// Store an accepted video file descriptor and force the source to
    /// `upload`, overriding any prior YouTube selection.
    pub fn accept_video_file(&mut self, file: CandidateFile) {
        self.media_uploads.video_file = Some(file);
        self.media_uploads.video_type = VideoSource::Upload;
    }

    pub fn update_legal_consents(&mut self, update: LegalConsentsUpdate) {
        let consents = &mut self.legal_consents;
        match update {
            LegalConsentsUpdate::TermsOfService(value) => consents.terms_of_service = value,
            LegalConsentsUpdate::PrivacyPolicy(value) => consents.privacy_policy = value,
            LegalConsentsUpdate::BackgroundCheck(value) => consents.background_check = value,
            LegalConsentsUpdate::CodeOfConduct(value) => consents.code_of_conduct = value,
            LegalConsentsUpdate::CommissionTerms(value) => consents.commission_terms = value,
            LegalConsentsUpdate::MarketingConsent(value) => consents.marketing_consent = value,
        }
    }

    /// Set the typed signature and restamp its derived date atomically.
    pub fn set_digital_signature(&mut self, signature: impl Into<String>) {
        self.legal_consents.digital_signature = signature.into();
        self.legal_consents.signature_date = Some(Utc::now());
    }

    /// Append a certification, trimming surrounding whitespace. Empty or
    /// whitespace-only input is a no-op; returns whether anything was added.
    pub fn append_certification(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.professional_background
            .certifications
            .push(trimmed.to_string());
        true
    }

    /// Remove the certification at `index`; out-of-range is a no-op.
    pub fn remove_certification(&mut self, index: usize) {
        if index < self.professional_background.certifications.len() {
            self.professional_background.certifications.remove(index);
        }
    }
}

fn toggle_token(tokens: &mut Vec<String>, token: &str) {
    if let Some(position) = tokens.iter().position(|existing| existing == token) {
        tokens.remove(position);
    } else {
        tokens.push(token.to_string());
    }
}
