//! Stateless field validators.
//!
//! Every validator treats blank input as valid and skipped; whether a field
//! is mandatory is a per-record-type decision made by the record builder,
//! not a validator concern.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{FieldError, FieldErrorKind, StoreError};
use crate::store::Store;
use crate::types::Id;

static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9_-]{3,20}$").expect("code pattern compiles"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 ()\-]{5,19}$").expect("phone pattern compiles"));
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

/// Life-stage category selecting the weight bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightCategory {
    Birth,
    Adult,
    Any,
}

impl WeightCategory {
    /// Inclusive bounds in kilograms, the canonical storage unit.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Self::Birth => (10.0, 200.0),
            Self::Adult => (200.0, 1500.0),
            Self::Any => (1.0, 2000.0),
        }
    }
}

/// Validate an animal code: fixed pattern first, then uniqueness against
/// the store. `exclude_id` skips the record's own row when validating an
/// update. Returns `Ok(None)` when the code passes or is blank.
pub fn validate_code(
    code: &str,
    store: &dyn Store,
    exclude_id: Option<Id>,
) -> Result<Option<FieldError>, StoreError> {
    let code = code.trim().to_uppercase();
    if code.is_empty() {
        return Ok(None);
    }
    if !CODE_RE.is_match(&code) {
        return Ok(Some(FieldError::new(
            FieldErrorKind::Format,
            "codigo",
            format!("code '{code}' must be 3-20 letters, digits, '-' or '_'"),
        )));
    }
    if store.exists_code(&code, exclude_id)? {
        return Ok(Some(FieldError::new(
            FieldErrorKind::Uniqueness,
            "codigo",
            format!("code '{code}' already exists"),
        )));
    }
    Ok(None)
}

/// Validate a weight in kilograms against the category bounds. Any
/// display-unit conversion happens before this check.
pub fn validate_weight(
    field: &str,
    value: &str,
    category: WeightCategory,
) -> Result<Option<f64>, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    let weight: f64 = value.parse().map_err(|_| {
        FieldError::new(
            FieldErrorKind::Format,
            field,
            format!("'{value}' is not a number"),
        )
    })?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(FieldError::new(
            FieldErrorKind::Range,
            field,
            "weight must be finite and non-negative".to_string(),
        ));
    }
    let (min, max) = category.bounds();
    if weight < min || weight > max {
        return Err(FieldError::new(
            FieldErrorKind::Range,
            field,
            format!("weight {weight} kg is outside {min}-{max} kg"),
        ));
    }
    Ok(Some(weight))
}

/// Parse a calendar date in ISO (`2024-01-10`) or the source app's display
/// format (`10/01/2024`).
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%d/%m/%Y"))
        .ok()
}

/// Validate a date field: parseable, not after `today`, and inside the
/// optional `[min, max]` bounds. `today` is supplied by the caller so the
/// check is deterministic.
pub fn validate_date(
    field: &str,
    value: &str,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<Option<NaiveDate>, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    let date = parse_date(value).ok_or_else(|| {
        FieldError::new(
            FieldErrorKind::Format,
            field,
            format!("'{value}' is not a valid date"),
        )
    })?;
    if date > today {
        return Err(FieldError::new(
            FieldErrorKind::Range,
            field,
            format!("date {date} is in the future"),
        ));
    }
    if let Some(min) = min {
        if date < min {
            return Err(FieldError::new(
                FieldErrorKind::Range,
                field,
                format!("date {date} is before {min}"),
            ));
        }
    }
    if let Some(max) = max {
        if date > max {
            return Err(FieldError::new(
                FieldErrorKind::Range,
                field,
                format!("date {date} is after {max}"),
            ));
        }
    }
    Ok(Some(date))
}

/// Validate a monetary amount: finite and within `[min, max]`.
pub fn validate_monetary(
    field: &str,
    value: &str,
    min: f64,
    max: f64,
) -> Result<Option<f64>, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    let amount: f64 = value.parse().map_err(|_| {
        FieldError::new(
            FieldErrorKind::Format,
            field,
            format!("'{value}' is not a number"),
        )
    })?;
    if !amount.is_finite() || amount < min || amount > max {
        return Err(FieldError::new(
            FieldErrorKind::Range,
            field,
            format!("amount must be between {min} and {max}"),
        ));
    }
    Ok(Some(amount))
}

/// Format-only phone check. The field is optional; blank input passes.
pub fn validate_phone(field: &str, value: &str) -> Option<FieldError> {
    let value = value.trim();
    if value.is_empty() || PHONE_RE.is_match(value) {
        return None;
    }
    Some(FieldError::new(
        FieldErrorKind::Format,
        field,
        format!("'{value}' is not a valid phone number"),
    ))
}

/// Format-only email check. The field is optional; blank input passes.
pub fn validate_email(field: &str, value: &str) -> Option<FieldError> {
    let value = value.trim();
    if value.is_empty() || EMAIL_RE.is_match(value) {
        return None;
    }
    Some(FieldError::new(
        FieldErrorKind::Format,
        field,
        format!("'{value}' is not a valid email address"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::types::RefKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn code_format_is_checked_before_uniqueness() {
        let store = MemoryStore::new();
        assert!(validate_code("T001", &store, None).expect("store ok").is_none());
        // lower-case input is uppercased before the pattern check
        assert!(validate_code("t001", &store, None).expect("store ok").is_none());

        for bad in ["AB", "HAS SPACE", "Ñ123", "THIS-CODE-IS-FAR-TOO-LONG"] {
            let err = validate_code(bad, &store, None)
                .expect("store ok")
                .expect("format error");
            assert_eq!(err.kind, FieldErrorKind::Format, "{bad}");
        }
    }

    #[test]
    fn duplicate_code_is_a_uniqueness_error() {
        let mut store = MemoryStore::new();
        let farm = store.add_reference(RefKind::Farm, "Finca A", None);
        let id = store
            .insert_animal(&crate::memory::tests_support::record("T001", farm))
            .expect("insert");

        let err = validate_code("T001", &store, None)
            .expect("store ok")
            .expect("uniqueness error");
        assert_eq!(err.kind, FieldErrorKind::Uniqueness);

        // excluding the record's own id makes the same code valid (update path)
        assert!(validate_code("T001", &store, Some(id)).expect("store ok").is_none());
    }

    #[test]
    fn weight_bounds_by_category() {
        assert!(validate_weight("peso", "10", WeightCategory::Birth).is_ok());
        assert!(validate_weight("peso", "200", WeightCategory::Birth).is_ok());
        assert!(validate_weight("peso", "9.9", WeightCategory::Birth).is_err());
        assert!(validate_weight("peso", "201", WeightCategory::Birth).is_err());

        assert!(validate_weight("peso", "200", WeightCategory::Adult).is_ok());
        assert!(validate_weight("peso", "1500", WeightCategory::Adult).is_ok());
        assert!(validate_weight("peso", "199", WeightCategory::Adult).is_err());
        assert!(validate_weight("peso", "1501", WeightCategory::Adult).is_err());

        assert!(validate_weight("peso", "1", WeightCategory::Any).is_ok());
        assert!(validate_weight("peso", "2000", WeightCategory::Any).is_ok());
        assert!(validate_weight("peso", "0.5", WeightCategory::Any).is_err());
    }

    #[test]
    fn weight_rejects_garbage_and_negatives() {
        let err = validate_weight("peso", "abc", WeightCategory::Any).expect_err("format");
        assert_eq!(err.kind, FieldErrorKind::Format);
        let err = validate_weight("peso", "-5", WeightCategory::Any).expect_err("range");
        assert_eq!(err.kind, FieldErrorKind::Range);
        assert_eq!(validate_weight("peso", "  ", WeightCategory::Any), Ok(None));
    }

    #[test]
    fn dates_accept_today_but_not_tomorrow() {
        let today = date(2024, 6, 1);
        assert_eq!(
            validate_date("fecha", "2024-06-01", None, None, today),
            Ok(Some(today))
        );
        let err = validate_date("fecha", "2024-06-02", None, None, today).expect_err("future");
        assert_eq!(err.kind, FieldErrorKind::Range);
    }

    #[test]
    fn dates_parse_both_formats_and_honor_bounds() {
        let today = date(2024, 6, 1);
        assert_eq!(
            validate_date("fecha", "10/01/2024", None, None, today),
            Ok(Some(date(2024, 1, 10)))
        );
        assert!(validate_date("fecha", "not-a-date", None, None, today).is_err());
        assert!(
            validate_date("fecha", "2024-01-10", Some(date(2024, 2, 1)), None, today).is_err()
        );
        assert!(
            validate_date("fecha", "2024-01-10", None, Some(date(2024, 1, 5)), today).is_err()
        );
    }

    #[test]
    fn monetary_bounds() {
        assert_eq!(validate_monetary("precio", "0", 0.0, 1e8), Ok(Some(0.0)));
        assert!(validate_monetary("precio", "-1", 0.0, 1e8).is_err());
        assert!(validate_monetary("precio", "100000001", 0.0, 1e8).is_err());
        assert_eq!(validate_monetary("precio", "", 0.0, 1e8), Ok(None));
    }

    #[test]
    fn phone_and_email_are_format_only_and_optional() {
        assert!(validate_phone("telefono", "").is_none());
        assert!(validate_phone("telefono", "+57 310 555-1234").is_none());
        assert!(validate_phone("telefono", "call me").is_some());

        assert!(validate_email("correo", "").is_none());
        assert!(validate_email("correo", "finca@example.com").is_none());
        assert!(validate_email("correo", "not-an-email").is_some());
    }
}
