use serde::{Deserialize, Serialize};

/// Ordered steps of the coach application wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    PersonalInfo,
    ProfessionalBackground,
    LanguageQualifications,
    Specializations,
    AvailabilityPricing,
    ProfileContent,
    MediaUploads,
    LegalConsents,
}

impl WizardStep {
    pub const COUNT: u8 = 8;

    pub const ALL: [WizardStep; 8] = [
        WizardStep::PersonalInfo,
        WizardStep::ProfessionalBackground,
        WizardStep::LanguageQualifications,
        WizardStep::Specializations,
        WizardStep::AvailabilityPricing,
        WizardStep::ProfileContent,
        WizardStep::MediaUploads,
        WizardStep::LegalConsents,
    ];

    /// One-based position shown in the progress header.
    pub const fn index(self) -> u8 {
        match self {
            WizardStep::PersonalInfo => 1,
            WizardStep::ProfessionalBackground => 2,
            WizardStep::LanguageQualifications => 3,
            WizardStep::Specializations => 4,
            WizardStep::AvailabilityPricing => 5,
            WizardStep::ProfileContent => 6,
            WizardStep::MediaUploads => 7,
            WizardStep::LegalConsents => 8,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            WizardStep::PersonalInfo => "Personal Info",
            WizardStep::ProfessionalBackground => "Professional Background",
            WizardStep::LanguageQualifications => "Language Qualifications",
            WizardStep::Specializations => "Specializations",
            WizardStep::AvailabilityPricing => "Availability & Pricing",
            WizardStep::ProfileContent => "Profile Content",
            WizardStep::MediaUploads => "Photo & Video",
            WizardStep::LegalConsents => "Legal & Consent",
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index.checked_sub(1)? as usize).copied()
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        Self::from_index(self.index().wrapping_sub(1))
    }

    pub const fn is_first(self) -> bool {
        matches!(self, WizardStep::PersonalInfo)
    }

    pub const fn is_last(self) -> bool {
        matches!(self, WizardStep::LegalConsents)
    }

    /// Completion percentage for the progress bar.
    pub const fn progress_percent(self) -> u8 {
        (self.index() as u16 * 100 / Self::COUNT as u16) as u8
    }
}
