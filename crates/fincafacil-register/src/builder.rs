use chrono::{Local, NaiveDate};
use thiserror::Error;
use tracing::debug;

use fincafacil_core::{
    AcquisitionType, CanonicalRecord, FieldError, FieldErrorKind, Id, LifeStatus,
    RawRow, RefKind, Sex, Store, StoreError, validate_code, validate_date, validate_monetary,
    validate_weight,
};
use fincafacil_resolve::{ResolveError, ResolveRefs, parse_display};

use crate::fields;

/// Failure modes of a single build.
///
/// `Invalid` carries the full accumulated error list, never a partial
/// record; `Store` is the persistence layer failing mid-validation and is
/// fatal for the record.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("record failed validation with {} field error(s)", .0.len())]
    Invalid(Vec<FieldError>),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Composes reference resolution and field validation into one pass over a
/// raw input row.
///
/// Pure transform: nothing is written. Errors accumulate per field; a bad
/// code does not stop validation of the dates, and a bad date does not
/// stop resolution of the farm.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    today: NaiveDate,
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            today: Local::now().date_naive(),
        }
    }

    /// Pin "today" for the date checks. The default is the local calendar
    /// date at construction time.
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn build<R: ResolveRefs + ?Sized>(
        &self,
        raw: &RawRow,
        acquisition: AcquisitionType,
        resolver: &R,
        store: &dyn Store,
    ) -> Result<CanonicalRecord, BuildError> {
        let mut errors = Vec::new();

        for field in fields::mandatory(acquisition) {
            if raw.get(field).is_none() {
                errors.push(FieldError::new(
                    FieldErrorKind::Missing,
                    field,
                    "mandatory field is empty",
                ));
            }
        }

        let code = raw
            .get(fields::CODE)
            .map(|code| code.to_uppercase())
            .unwrap_or_default();
        if !code.is_empty() {
            if let Some(error) = validate_code(&code, store, None)? {
                errors.push(error);
            }
        }

        let sex = raw.get(fields::SEX).and_then(|value| {
            Sex::parse(&value).or_else(|| {
                errors.push(FieldError::new(
                    FieldErrorKind::Format,
                    fields::SEX,
                    format!("'{value}' is not a recognized sex"),
                ));
                None
            })
        });

        // Farm first: every farm-scoped resolution below depends on it. On
        // failure those lookups are skipped, so a missing farm surfaces as
        // one error rather than one per dependent field.
        let farm_id = match raw.get(fields::FARM) {
            Some(value) => {
                resolve_field(resolver, RefKind::Farm, fields::FARM, &value, None, &mut errors)?
            }
            None => None,
        };

        let breed = match raw.get(fields::BREED) {
            Some(value) => {
                let breed = resolver.resolve_breed(&value)?;
                if breed.is_legacy() {
                    debug!(breed = %value, "breed kept as legacy free text");
                }
                Some(breed)
            }
            None => None,
        };

        let mut pasture_id = None;
        let mut lot_id = None;
        let mut sector_id = None;
        if let Some(farm) = farm_id {
            for (kind, field, slot) in [
                (RefKind::Pasture, fields::PASTURE, &mut pasture_id),
                (RefKind::Lot, fields::LOT, &mut lot_id),
                (RefKind::Sector, fields::SECTOR, &mut sector_id),
            ] {
                if let Some(value) = raw.get(field) {
                    *slot = resolve_field(resolver, kind, field, &value, Some(farm), &mut errors)?;
                }
            }
        }

        let mut mother_id = None;
        let mut father_id = None;
        for (field, expected_sex, slot) in [
            (fields::MOTHER, Sex::Female, &mut mother_id),
            (fields::FATHER, Sex::Male, &mut father_id),
        ] {
            let Some(value) = raw.get(field) else {
                continue;
            };
            if acquisition != AcquisitionType::Birth {
                errors.push(FieldError::new(
                    FieldErrorKind::Reference,
                    field,
                    "parent references are only valid for birth records",
                ));
                continue;
            }
            *slot = resolve_parent(store, field, &value, expected_sex, &code, &mut errors)?;
        }

        let mut vendor_id = None;
        let mut procurement_id = None;
        for (kind, field, slot) in [
            (RefKind::Vendor, fields::VENDOR, &mut vendor_id),
            (RefKind::ProcurementSource, fields::PROCUREMENT, &mut procurement_id),
        ] {
            let Some(value) = raw.get(field) else {
                continue;
            };
            if acquisition != AcquisitionType::Purchase {
                errors.push(FieldError::new(
                    FieldErrorKind::Reference,
                    field,
                    format!("{} is only valid for purchase records", kind.label()),
                ));
                continue;
            }
            if let Some(farm) = farm_id {
                *slot = resolve_field(resolver, kind, field, &value, Some(farm), &mut errors)?;
            }
        }

        let body_condition_id = match raw.get(fields::BODY_CONDITION) {
            Some(value) => resolve_field(
                resolver,
                RefKind::BodyCondition,
                fields::BODY_CONDITION,
                &value,
                None,
                &mut errors,
            )?,
            None => None,
        };

        let birth_date = raw.get(fields::BIRTH_DATE).and_then(|value| {
            collect(
                validate_date(fields::BIRTH_DATE, &value, None, None, self.today),
                &mut errors,
            )
        });
        let purchase_date = raw.get(fields::PURCHASE_DATE).and_then(|value| {
            collect(
                validate_date(fields::PURCHASE_DATE, &value, None, None, self.today),
                &mut errors,
            )
        });
        if let (Some(birth), Some(purchase)) = (birth_date, purchase_date) {
            if purchase < birth {
                errors.push(FieldError::new(
                    FieldErrorKind::Range,
                    fields::PURCHASE_DATE,
                    format!("purchase date {purchase} precedes birth date {birth}"),
                ));
            }
        }

        let weight_field = match acquisition {
            AcquisitionType::Birth => fields::BIRTH_WEIGHT,
            AcquisitionType::Purchase => fields::PURCHASE_WEIGHT,
        };
        let weight_kg = raw.get(weight_field).and_then(|value| {
            collect(
                validate_weight(weight_field, &value, acquisition.weight_category()),
                &mut errors,
            )
        });

        let price = raw.get(fields::PRICE).and_then(|value| {
            collect(
                validate_monetary(fields::PRICE, &value, 0.0, 1e8),
                &mut errors,
            )
        });

        let life_status = match raw.get(fields::LIFE_STATUS) {
            Some(value) => LifeStatus::parse(&value).unwrap_or_else(|| {
                errors.push(FieldError::new(
                    FieldErrorKind::Format,
                    fields::LIFE_STATUS,
                    format!("'{value}' is not a recognized life status"),
                ));
                LifeStatus::default()
            }),
            None => LifeStatus::default(),
        };

        match (sex, farm_id) {
            (Some(sex), Some(farm_id)) if errors.is_empty() => Ok(CanonicalRecord {
                code,
                name: raw.get(fields::NAME),
                sex,
                acquisition,
                farm_id,
                breed,
                pasture_id,
                lot_id,
                sector_id,
                mother_id,
                father_id,
                vendor_id,
                procurement_id,
                birth_date: birth_date.map(|date| date.format("%Y-%m-%d").to_string()),
                purchase_date: purchase_date.map(|date| date.format("%Y-%m-%d").to_string()),
                weight_kg,
                price,
                health_status: raw.get(fields::HEALTH),
                life_status,
                body_condition_id,
                comment: raw.get(fields::COMMENT),
                photo_path: raw.get(fields::PHOTO),
            }),
            _ => Err(BuildError::Invalid(errors)),
        }
    }
}

/// Push the field error from a validator result, keeping the parsed value.
fn collect<T>(result: Result<Option<T>, FieldError>, errors: &mut Vec<FieldError>) -> Option<T> {
    match result {
        Ok(value) => value,
        Err(error) => {
            errors.push(error);
            None
        }
    }
}

/// Resolve one reference field, turning `NotFound`/`CrossScope` into an
/// accumulated field error and propagating store failures.
fn resolve_field<R: ResolveRefs + ?Sized>(
    resolver: &R,
    kind: RefKind,
    field: &str,
    input: &str,
    scope: Option<Id>,
    errors: &mut Vec<FieldError>,
) -> Result<Option<Id>, StoreError> {
    match resolver.resolve(kind, input, scope) {
        Ok(id) => Ok(Some(id)),
        Err(ResolveError::Store(error)) => Err(error),
        Err(error) => {
            if let Some(field_error) = error.into_field_error(field) {
                errors.push(field_error);
            }
            Ok(None)
        }
    }
}

/// Resolve a parent reference live against the store, by id display or by
/// code, so rows can reference animals written earlier in the same batch.
fn resolve_parent(
    store: &dyn Store,
    field: &str,
    input: &str,
    expected_sex: Sex,
    own_code: &str,
    errors: &mut Vec<FieldError>,
) -> Result<Option<Id>, StoreError> {
    let parent = if let Some((id, _name)) = parse_display(input) {
        store.get_animal(id)?
    } else {
        let code = input.to_uppercase();
        if !code.is_empty() && code == own_code {
            errors.push(FieldError::new(
                FieldErrorKind::Reference,
                field,
                "an animal cannot be its own parent",
            ));
            return Ok(None);
        }
        store.find_animal_by_code(&code)?
    };

    match parent {
        Some(parent) if parent.sex == expected_sex => Ok(Some(parent.id)),
        Some(parent) => {
            let expected = match expected_sex {
                Sex::Female => "female",
                Sex::Male => "male",
            };
            errors.push(FieldError::new(
                FieldErrorKind::Reference,
                field,
                format!("animal '{}' is not {expected}", parent.code),
            ));
            Ok(None)
        }
        None => {
            errors.push(FieldError::new(
                FieldErrorKind::Reference,
                field,
                format!("animal '{input}' not found"),
            ));
            Ok(None)
        }
    }
}
