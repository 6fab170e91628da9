// src/domain/registration/validators.rs
//
// Pure field validators for registration candidates. Each function either
// accepts its input or reports exactly one `ValidationError`; none of them
// touch storage, network, or shared state. Raw fields arrive as JSON values
// so that a wrong JSON type is reported by the validator itself (with the
// `INVALID_TYPE` / `INVALID_DATE` codes) instead of failing deserialization.
use crate::domain::errors::{ValidationCode, ValidationError};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Minimum legal age for a registration.
pub const ADULT_AGE: i32 = 18;
/// Ages above this are treated as implausible input.
pub const MAX_AGE: i32 = 120;

const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

static POSTAL_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{5}$").expect("postal code regex"));

static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("html tag regex"));

// ASCII letters plus the Latin-1 Supplement letter ranges, hyphen and space.
static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z\u{C0}-\u{D6}\u{D8}-\u{F6}\u{F8}-\u{FF}\- ]+$").expect("name regex")
});

// Strict form: alphanumeric edges on a local part of at most 64 characters,
// then one or more dot-separated DNS labels. A looser single-purpose variant
// existed in an alternate build of the original module; the strict rule is
// the authoritative one (see DESIGN.md).
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9._%+-]{0,62}[A-Za-z0-9])?@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+$")
        .expect("email regex")
});

/// Parses and validates a birth date, returning the age in whole years.
///
/// `today` is injected by the caller so tests can fix the reference instant;
/// production code reads it from the [`Clock`](crate::application::ports::time::Clock) port.
///
/// Errors with `INVALID_DATE` when the value is not a `YYYY-MM-DD` string,
/// lies in the future, or yields an age above [`MAX_AGE`]; errors with
/// `UNDERAGE` when the age is below [`ADULT_AGE`].
pub fn validate_age(value: &Value, today: NaiveDate) -> Result<i32, ValidationError> {
    let birth_date = parse_birth_date(value)?;

    if birth_date > today {
        return Err(invalid_date());
    }

    let age = age_in_years(birth_date, today);
    if age > MAX_AGE {
        return Err(invalid_date());
    }
    if age < ADULT_AGE {
        return Err(ValidationError::new(
            ValidationCode::Underage,
            "L'utilisateur doit avoir au moins 18 ans",
        ));
    }

    Ok(age)
}

fn parse_birth_date(value: &Value) -> Result<NaiveDate, ValidationError> {
    let raw = value.as_str().ok_or_else(invalid_date)?;
    NaiveDate::parse_from_str(raw, BIRTH_DATE_FORMAT).map_err(|_| invalid_date())
}

fn invalid_date() -> ValidationError {
    ValidationError::new(ValidationCode::InvalidDate, "Date de naissance invalide")
}

// Whole years between `birth_date` and `today`. The month/day tuple
// comparison also covers February 29 birth dates in non-leap years.
fn age_in_years(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    let birthday_passed = (today.month(), today.day()) >= (birth_date.month(), birth_date.day());
    if !birthday_passed {
        age -= 1;
    }
    age
}

/// Validates a French postal code: exactly five ASCII digits.
pub fn validate_postal_code(value: &Value) -> Result<(), ValidationError> {
    let code = value.as_str().ok_or_else(|| {
        ValidationError::new(
            ValidationCode::InvalidType,
            "Le code postal doit être une chaîne de caractères",
        )
    })?;

    if !POSTAL_CODE_RE.is_match(code) {
        return Err(ValidationError::new(
            ValidationCode::InvalidPostalCode,
            "Code postal français invalide",
        ));
    }

    Ok(())
}

/// Validates identity-like fields (surname, given name, city).
///
/// Markup detection runs before the character-set rule so HTML content is
/// reported as `XSS_DETECTED` rather than the less specific `INVALID_NAME`.
pub fn validate_identity(value: &Value) -> Result<(), ValidationError> {
    let text = value.as_str().ok_or_else(|| {
        ValidationError::new(
            ValidationCode::InvalidType,
            "Le nom ou le prénom doit être une chaîne de caractères",
        )
    })?;

    if HTML_TAG_RE.is_match(text) {
        return Err(ValidationError::new(
            ValidationCode::XssDetected,
            "Contenu HTML détecté",
        ));
    }

    if !NAME_RE.is_match(text) {
        return Err(ValidationError::new(
            ValidationCode::InvalidName,
            "Caractères invalides dans le nom",
        ));
    }

    Ok(())
}

/// Validates email format with strict ASCII rules.
pub fn validate_email(value: &Value) -> Result<(), ValidationError> {
    let email = value.as_str().ok_or_else(|| {
        ValidationError::new(
            ValidationCode::InvalidType,
            "L'email doit être une chaîne de caractères",
        )
    })?;

    // The main pattern admits dots inside the local part; consecutive dots
    // are rejected separately.
    if !EMAIL_RE.is_match(email) || email.contains("..") {
        return Err(ValidationError::new(
            ValidationCode::InvalidEmail,
            "Format d'email invalide",
        ));
    }

    Ok(())
}

/// Ensures the candidate email is not already present in `existing`.
///
/// The candidate must already have passed [`validate_email`]. Existing
/// records may have any shape: entries without a string `email` member are
/// skipped rather than rejected. Comparison is on trimmed, lowercased forms.
pub fn validate_unique_email(email: &str, existing: &[Value]) -> Result<(), ValidationError> {
    let normalized = normalize_email(email);

    let duplicate = existing.iter().any(|record| {
        record
            .get("email")
            .and_then(Value::as_str)
            .is_some_and(|known| normalize_email(known) == normalized)
    });

    if duplicate {
        return Err(ValidationError::new(
            ValidationCode::DuplicateEmail,
            "Cet email est déjà utilisé",
        ));
    }

    Ok(())
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn code_of<T>(result: Result<T, ValidationError>) -> ValidationCode {
        result.err().expect("expected a validation error").code
    }

    #[test]
    fn validation_error_exposes_code_and_message() {
        let error = ValidationError::new(ValidationCode::InvalidName, "Message test");
        assert_eq!(error.code, ValidationCode::InvalidName);
        assert_eq!(error.message, "Message test");
        assert_eq!(error.code.as_str(), "INVALID_NAME");
        assert_eq!(error.to_string(), "Message test");
    }

    #[test]
    fn validation_code_serializes_to_stable_strings() {
        let codes = [
            (ValidationCode::InvalidDate, "INVALID_DATE"),
            (ValidationCode::Underage, "UNDERAGE"),
            (ValidationCode::InvalidType, "INVALID_TYPE"),
            (ValidationCode::InvalidPostalCode, "INVALID_POSTAL_CODE"),
            (ValidationCode::XssDetected, "XSS_DETECTED"),
            (ValidationCode::InvalidName, "INVALID_NAME"),
            (ValidationCode::InvalidEmail, "INVALID_EMAIL"),
            (ValidationCode::DuplicateEmail, "DUPLICATE_EMAIL"),
        ];
        for (code, expected) in codes {
            assert_eq!(serde_json::to_value(code).unwrap(), json!(expected));
            assert_eq!(code.as_str(), expected);
        }
    }

    #[test]
    fn age_adult_returns_exact_age() {
        let today = date(2025, 6, 15);
        assert_eq!(validate_age(&json!("1990-01-01"), today), Ok(35));
    }

    #[test]
    fn age_exactly_eighteen_today_is_accepted() {
        let today = date(2025, 6, 15);
        assert_eq!(validate_age(&json!("2007-06-15"), today), Ok(18));
    }

    #[test]
    fn age_eighteen_minus_one_day_is_underage() {
        let today = date(2025, 6, 15);
        let result = validate_age(&json!("2007-06-16"), today);
        assert_eq!(code_of(result), ValidationCode::Underage);
    }

    #[test]
    fn age_rejects_non_string_values() {
        let today = date(2025, 6, 15);
        assert_eq!(code_of(validate_age(&json!(19900101), today)), ValidationCode::InvalidDate);
        assert_eq!(code_of(validate_age(&Value::Null, today)), ValidationCode::InvalidDate);
        assert_eq!(code_of(validate_age(&json!(true), today)), ValidationCode::InvalidDate);
    }

    #[test]
    fn age_rejects_malformed_date_strings() {
        let today = date(2025, 6, 15);
        for raw in ["invalid-date", "1990-13-01", "1990-02-30", "01/01/1990", ""] {
            assert_eq!(
                code_of(validate_age(&json!(raw), today)),
                ValidationCode::InvalidDate,
                "input: {raw:?}"
            );
        }
    }

    #[test]
    fn age_rejects_future_dates() {
        let today = date(2025, 6, 15);
        assert_eq!(
            code_of(validate_age(&json!("2025-06-16"), today)),
            ValidationCode::InvalidDate
        );
    }

    #[test]
    fn age_rejects_implausible_ages() {
        let today = date(2025, 6, 15);
        assert_eq!(
            code_of(validate_age(&json!("1904-06-14"), today)),
            ValidationCode::InvalidDate
        );
        // 120 exactly is still plausible.
        assert_eq!(validate_age(&json!("1905-06-15"), today), Ok(120));
    }

    #[test]
    fn age_handles_february_29_birthdays() {
        let birth = json!("2004-02-29");
        // Birthday not yet reached in a non-leap year.
        assert_eq!(validate_age(&birth, date(2025, 2, 28)), Ok(20));
        assert_eq!(validate_age(&birth, date(2025, 3, 1)), Ok(21));
        // Leap-year anniversary counts on the day itself.
        assert_eq!(validate_age(&birth, date(2024, 2, 29)), Ok(20));
    }

    #[test]
    fn postal_code_accepts_five_digits() {
        assert_eq!(validate_postal_code(&json!("75001")), Ok(()));
        assert_eq!(validate_postal_code(&json!("00000")), Ok(()));
    }

    #[test]
    fn postal_code_rejects_bad_formats() {
        for raw in ["1234", "123456", "75A01", " 75001", "75001 ", "7500１"] {
            assert_eq!(
                code_of(validate_postal_code(&json!(raw))),
                ValidationCode::InvalidPostalCode,
                "input: {raw:?}"
            );
        }
    }

    #[test]
    fn postal_code_rejects_non_strings() {
        assert_eq!(code_of(validate_postal_code(&json!(75015))), ValidationCode::InvalidType);
        assert_eq!(code_of(validate_postal_code(&Value::Null)), ValidationCode::InvalidType);
    }

    #[test]
    fn identity_accepts_names_with_accents_hyphens_and_spaces() {
        for raw in ["Jean-Pierre Dupont", "Élodie-Anne", "Jean Dupont", "Ville", "ç"] {
            assert_eq!(validate_identity(&json!(raw)), Ok(()), "input: {raw:?}");
        }
    }

    #[test]
    fn identity_rejects_invalid_characters() {
        for raw in ["Jean3", "Jean_Dupont", "Jean!", ""] {
            assert_eq!(
                code_of(validate_identity(&json!(raw))),
                ValidationCode::InvalidName,
                "input: {raw:?}"
            );
        }
    }

    #[test]
    fn identity_reports_markup_before_character_set() {
        for raw in ["<script>alert(1)</script>", "<b>Jean</b>", "Jean <i>"] {
            assert_eq!(
                code_of(validate_identity(&json!(raw))),
                ValidationCode::XssDetected,
                "input: {raw:?}"
            );
        }
    }

    #[test]
    fn identity_rejects_non_strings() {
        assert_eq!(code_of(validate_identity(&Value::Null)), ValidationCode::InvalidType);
        assert_eq!(code_of(validate_identity(&json!(42))), ValidationCode::InvalidType);
    }

    #[test]
    fn email_accepts_common_addresses() {
        for raw in ["test@mail.com", "a@x.io", "user.name+tag@sub.domain.org", "a_b%c@mail.fr"] {
            assert_eq!(validate_email(&json!(raw)), Ok(()), "input: {raw:?}");
        }
    }

    #[test]
    fn email_rejects_bad_formats() {
        for raw in [
            "testmail.com",
            "@mail.com",
            "a@mail",
            ".a@mail.com",
            "a.@mail.com",
            "a@-",
            "a b@mail.com",
            "",
        ] {
            assert_eq!(
                code_of(validate_email(&json!(raw))),
                ValidationCode::InvalidEmail,
                "input: {raw:?}"
            );
        }
    }

    #[test]
    fn email_rejects_consecutive_dots_everywhere() {
        for raw in ["a..b@mail.com", "a@mail..com", "ab@x..y.com"] {
            assert_eq!(
                code_of(validate_email(&json!(raw))),
                ValidationCode::InvalidEmail,
                "input: {raw:?}"
            );
        }
    }

    #[test]
    fn email_local_part_length_bounds() {
        let local_64 = format!("a{}b", "x".repeat(62));
        assert_eq!(validate_email(&json!(format!("{local_64}@mail.com"))), Ok(()));

        let local_65 = format!("a{}b", "x".repeat(63));
        assert_eq!(
            code_of(validate_email(&json!(format!("{local_65}@mail.com")))),
            ValidationCode::InvalidEmail
        );
    }

    #[test]
    fn email_rejects_non_strings() {
        assert_eq!(code_of(validate_email(&Value::Null)), ValidationCode::InvalidType);
        assert_eq!(code_of(validate_email(&json!(["a@x.com"]))), ValidationCode::InvalidType);
    }

    #[test]
    fn unique_email_detects_case_and_whitespace_variants() {
        let existing = vec![json!({ "email": "a@x.com" })];
        for candidate in ["a@x.com", "A@X.COM", "  a@x.com  ", " A@x.Com"] {
            assert_eq!(
                code_of(validate_unique_email(candidate, &existing)),
                ValidationCode::DuplicateEmail,
                "candidate: {candidate:?}"
            );
        }
    }

    #[test]
    fn unique_email_accepts_unseen_addresses() {
        let existing = vec![json!({ "email": "a@x.com" })];
        assert_eq!(validate_unique_email("b@x.com", &existing), Ok(()));
        assert_eq!(validate_unique_email("b@x.com", &[]), Ok(()));
    }

    #[test]
    fn unique_email_skips_malformed_records() {
        let existing = vec![
            Value::Null,
            json!({ "email": 42 }),
            json!({ "nom": "Dupont" }),
            json!("a@x.com"),
            json!({ "email": " A@X.com " }),
        ];
        assert_eq!(
            code_of(validate_unique_email("a@x.com", &existing)),
            ValidationCode::DuplicateEmail
        );
        assert_eq!(validate_unique_email("b@x.com", &existing), Ok(()));
    }

    #[test]
    fn validators_are_idempotent() {
        let today = date(2025, 6, 15);
        let birth = json!("2010-01-01");
        assert_eq!(validate_age(&birth, today), validate_age(&birth, today));

        let bad_name = json!("Jean3");
        assert_eq!(validate_identity(&bad_name), validate_identity(&bad_name));

        let existing = vec![json!({ "email": "a@x.com" })];
        assert_eq!(
            validate_unique_email("A@X.COM", &existing),
            validate_unique_email("A@X.COM", &existing)
        );
    }
}
