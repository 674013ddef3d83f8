//! Canonical value tables backing the enum-like string fields of the
//! application record. The record keeps these fields as strings for wire
//! compatibility; these tables are the single authoritative source of the
//! accepted tokens.

pub const DEFAULT_COUNTRY: &str = "Canada";
pub const DEFAULT_TIMEZONE: &str = "America/Toronto";

pub const PROVINCES: [&str; 13] = [
    "Alberta",
    "British Columbia",
    "Manitoba",
    "New Brunswick",
    "Newfoundland and Labrador",
    "Northwest Territories",
    "Nova Scotia",
    "Nunavut",
    "Ontario",
    "Prince Edward Island",
    "Quebec",
    "Saskatchewan",
    "Yukon",
];

/// IANA identifier and display label for the Canadian timezones offered
/// during onboarding.
pub const TIMEZONES: [(&str, &str); 6] = [
    ("America/St_Johns", "Newfoundland (NST)"),
    ("America/Halifax", "Atlantic (AST)"),
    ("America/Toronto", "Eastern (EST)"),
    ("America/Winnipeg", "Central (CST)"),
    ("America/Edmonton", "Mountain (MST)"),
    ("America/Vancouver", "Pacific (PST)"),
];

/// Token and display label for the education select.
pub const EDUCATION_LEVELS: [(&str, &str); 6] = [
    ("high_school", "High School Diploma"),
    ("college", "College Diploma"),
    ("bachelors", "Bachelor's Degree"),
    ("masters", "Master's Degree"),
    ("doctorate", "Doctorate"),
    ("professional", "Professional Degree"),
];

pub const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

pub const DAYPARTS: [&str; 3] = ["morning", "afternoon", "evening"];

pub fn is_weekday_token(token: &str) -> bool {
    WEEKDAYS.contains(&token)
}

pub fn is_daypart_token(token: &str) -> bool {
    DAYPARTS.contains(&token)
}
