use super::common::*;
use crate::wizard::record::{
    AvailabilityPricingUpdate, LanguageQualificationsUpdate, MediaUploadsUpdate,
    ProfileContentUpdate,
};
use crate::wizard::submit::to_submission_payload;

#[test]
fn transformer_is_deterministic() {
    let record = minimal_valid_record();

    assert_eq!(to_submission_payload(&record), to_submission_payload(&record));
}

#[test]
fn rates_are_converted_to_cents() {
    let mut record = minimal_valid_record();
    record.update_availability_pricing(AvailabilityPricingUpdate::HourlyRate(50));
    record.update_availability_pricing(AvailabilityPricingUpdate::TrialRate(20));

    let payload = to_submission_payload(&record);

    assert_eq!(payload.hourly_rate, 5000);
    assert_eq!(payload.trial_rate, 2000);

    record.update_availability_pricing(AvailabilityPricingUpdate::HourlyRate(200));
    assert_eq!(to_submission_payload(&record).hourly_rate, 20_000);
}

#[test]
fn rate_conversion_saturates_instead_of_wrapping() {
    // Such a record never passes step 5, but the transformer stays total.
    let mut record = minimal_valid_record();
    record.update_availability_pricing(AvailabilityPricingUpdate::HourlyRate(50_000_000));

    assert_eq!(to_submission_payload(&record).hourly_rate, u32::MAX);
}

#[test]
fn languages_follow_the_native_language() {
    let mut record = minimal_valid_record();

    record.update_language_qualifications(LanguageQualificationsUpdate::NativeLanguage(
        "french".to_string(),
    ));
    assert_eq!(to_submission_payload(&record).languages, "french");

    record.update_language_qualifications(LanguageQualificationsUpdate::NativeLanguage(
        "english".to_string(),
    ));
    assert_eq!(to_submission_payload(&record).languages, "english");

    for other in ["bilingual", "spanish", "arabic", "anything else"] {
        record.update_language_qualifications(LanguageQualificationsUpdate::NativeLanguage(
            other.to_string(),
        ));
        assert_eq!(to_submission_payload(&record).languages, "both");
    }
}

#[test]
fn certifications_are_joined_and_mirrored_into_credentials() {
    let mut record = minimal_valid_record();
    record.append_certification("CELPIP");
    record.append_certification("TEFaQ");

    let payload = to_submission_payload(&record);

    assert_eq!(payload.certifications.as_deref(), Some("CELPIP, TEFaQ"));
    assert_eq!(payload.credentials.as_deref(), Some("CELPIP, TEFaQ"));
}

#[test]
fn empty_certifications_are_omitted_from_the_wire() {
    let payload = to_submission_payload(&minimal_valid_record());
    assert!(payload.certifications.is_none());
    assert!(payload.credentials.is_none());

    let encoded = serde_json::to_value(&payload).expect("payload serializes");
    let object = encoded.as_object().expect("payload is an object");
    assert!(!object.contains_key("certifications"));
    assert!(!object.contains_key("credentials"));
}

#[test]
fn unique_approach_is_renamed_to_unique_value() {
    let mut record = minimal_valid_record();
    record.update_profile_content(ProfileContentUpdate::UniqueApproach(
        "Exam drills under real board conditions".to_string(),
    ));

    let payload = to_submission_payload(&record);
    assert_eq!(
        payload.unique_value.as_deref(),
        Some("Exam drills under real board conditions")
    );

    let encoded = serde_json::to_value(&payload).expect("payload serializes");
    let object = encoded.as_object().expect("payload is an object");
    assert!(object.contains_key("uniqueValue"));
    assert!(!object.contains_key("uniqueApproach"));
}

#[test]
fn blank_optionals_are_omitted_not_sent_empty() {
    let payload = to_submission_payload(&minimal_valid_record());

    let encoded = serde_json::to_value(&payload).expect("payload serializes");
    let object = encoded.as_object().expect("payload is an object");
    for absent in [
        "headlineFr",
        "bioFr",
        "teachingPhilosophy",
        "uniqueValue",
        "videoUrl",
        "sleWrittenLevel",
        "sleReadingLevel",
    ] {
        assert!(!object.contains_key(absent), "{absent} should be omitted");
    }
    assert_eq!(object["photoUrl"], "/images/coaches/john-doe.jpg");
}

#[test]
fn sle_levels_use_their_wire_tokens() {
    let mut record = minimal_valid_record();
    record.update_language_qualifications(LanguageQualificationsUpdate::SleWrittenLevel(
        crate::wizard::record::SleLevel::NotTested,
    ));

    let encoded =
        serde_json::to_value(to_submission_payload(&record)).expect("payload serializes");
    assert_eq!(encoded["sleOralLevel"], "C");
    assert_eq!(encoded["sleWrittenLevel"], "none");
}

#[test]
fn specializations_flag_map_carries_all_fourteen_keys() {
    let payload = to_submission_payload(&minimal_valid_record());

    assert_eq!(payload.specializations.len(), 14);
    assert_eq!(payload.specializations.get("examPrep"), Some(&true));
    assert_eq!(payload.specializations.get("oralA"), Some(&false));

    let encoded = serde_json::to_value(&payload).expect("payload serializes");
    assert_eq!(encoded["specializations"]["examPrep"], true);
}

#[test]
fn years_experience_mirrors_years_teaching() {
    let mut record = minimal_valid_record();
    record.update_professional_background(
        crate::wizard::record::ProfessionalBackgroundUpdate::YearsTeaching(7),
    );

    let payload = to_submission_payload(&record);
    assert_eq!(payload.years_teaching, 7);
    assert_eq!(payload.years_experience, 7);
}

#[test]
fn wire_field_names_are_camel_case() {
    let mut record = minimal_valid_record();
    record.update_media_uploads(MediaUploadsUpdate::VideoUrl(
        "https://youtu.be/abc123".to_string(),
    ));

    let encoded =
        serde_json::to_value(to_submission_payload(&record)).expect("payload serializes");
    let object = encoded.as_object().expect("payload is an object");
    for present in [
        "firstName",
        "nativeLanguage",
        "yearsExperience",
        "hourlyRate",
        "availableTimeSlots",
        "backgroundCheckConsent",
        "digitalSignature",
        "videoUrl",
    ] {
        assert!(object.contains_key(present), "{present} should be present");
    }
}
