use serde::{Deserialize, Serialize};

use crate::validate::WeightCategory;

/// Opaque row identifier assigned by the store. The engine never invents ids.
pub type Id = i64;

/// Biological sex of an animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Parse a user-facing value. The source spreadsheets are Spanish, so
    /// both languages and the single-letter shorthands are accepted.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "macho" | "male" | "m" => Some(Self::Male),
            "hembra" | "female" | "f" | "h" => Some(Self::Female),
            _ => None,
        }
    }
}

/// How an animal entered the herd. Determines which field cluster is
/// mandatory and which weight category applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcquisitionType {
    Birth,
    Purchase,
}

impl AcquisitionType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "nacimiento" | "birth" => Some(Self::Birth),
            "compra" | "purchase" => Some(Self::Purchase),
            _ => None,
        }
    }

    /// Weight bounds used for the acquisition-time weight.
    pub fn weight_category(self) -> WeightCategory {
        match self {
            Self::Birth => WeightCategory::Birth,
            Self::Purchase => WeightCategory::Adult,
        }
    }
}

/// Life status of an animal in inventory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeStatus {
    #[default]
    Active,
    Sold,
    Dead,
}

impl LifeStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "activo" | "activa" | "active" => Some(Self::Active),
            "vendido" | "vendida" | "sold" => Some(Self::Sold),
            "muerto" | "muerta" | "dead" => Some(Self::Dead),
            _ => None,
        }
    }
}

/// The reference tables a name lookup can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefKind {
    Farm,
    Breed,
    Pasture,
    Lot,
    Sector,
    Vendor,
    ProcurementSource,
    BodyCondition,
    Animal,
}

impl RefKind {
    /// Kinds whose rows live under a farm; lookups for these require a
    /// farm scope and never fall back to an unscoped match.
    pub fn is_farm_scoped(self) -> bool {
        matches!(
            self,
            Self::Pasture | Self::Lot | Self::Sector | Self::Vendor | Self::ProcurementSource
        )
    }

    /// Human-readable label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Farm => "farm",
            Self::Breed => "breed",
            Self::Pasture => "pasture",
            Self::Lot => "lot",
            Self::Sector => "sector",
            Self::Vendor => "vendor",
            Self::ProcurementSource => "procurement source",
            Self::BodyCondition => "body condition",
            Self::Animal => "animal",
        }
    }
}

/// A breed reference.
///
/// Pre-migration rows carry the breed name as free text instead of an id;
/// that compatibility path is kept as an explicit variant so callers never
/// confuse a resolved id with a raw-text fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum BreedRef {
    Id(Id),
    Legacy(String),
}

impl BreedRef {
    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy(_))
    }
}

/// Fully resolved, fully typed create-time snapshot of an animal, ready
/// for persistence. All foreign keys are ids, all dates ISO `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub sex: Sex,
    pub acquisition: AcquisitionType,
    pub farm_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<BreedRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pasture_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lot_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procurement_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_status: Option<String>,
    pub life_status: LifeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_condition_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Opaque path; the engine never interprets it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_path: Option<String>,
}

/// The slice of a persisted animal the engine reads back, enough to
/// validate parent references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAnimal {
    pub id: Id,
    pub code: String,
    pub sex: Sex,
    pub farm_id: Id,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sex_parses_both_languages() {
        assert_eq!(Sex::parse("Macho"), Some(Sex::Male));
        assert_eq!(Sex::parse(" hembra "), Some(Sex::Female));
        assert_eq!(Sex::parse("female"), Some(Sex::Female));
        assert_eq!(Sex::parse("x"), None);
    }

    #[test]
    fn acquisition_parses_both_languages() {
        assert_eq!(AcquisitionType::parse("Nacimiento"), Some(AcquisitionType::Birth));
        assert_eq!(AcquisitionType::parse("COMPRA"), Some(AcquisitionType::Purchase));
        assert_eq!(AcquisitionType::parse("donación"), None);
    }

    #[test]
    fn breed_refs_serialize_distinctly() {
        let resolved = serde_json::to_value(BreedRef::Id(7)).expect("serialize");
        let legacy =
            serde_json::to_value(BreedRef::Legacy("Criolla".to_string())).expect("serialize");
        assert_eq!(resolved["kind"], "id");
        assert_eq!(legacy["kind"], "legacy");

        let back: BreedRef = serde_json::from_value(legacy).expect("deserialize");
        assert!(back.is_legacy());
    }

    #[test]
    fn farm_scoped_kinds() {
        assert!(RefKind::Pasture.is_farm_scoped());
        assert!(RefKind::Vendor.is_farm_scoped());
        assert!(!RefKind::Farm.is_farm_scoped());
        assert!(!RefKind::Breed.is_farm_scoped());
    }
}
