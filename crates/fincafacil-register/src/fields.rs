//! Input column names as they appear in the source spreadsheets and UI
//! forms (normalized: lower-cased, trimmed).

use fincafacil_core::AcquisitionType;

pub const CODE: &str = "codigo";
pub const NAME: &str = "nombre";
pub const ACQUISITION: &str = "tipo_ingreso";
pub const SEX: &str = "sexo";
pub const FARM: &str = "finca";
pub const BREED: &str = "raza";
pub const PASTURE: &str = "potrero";
pub const LOT: &str = "lote";
pub const SECTOR: &str = "sector";
pub const BIRTH_DATE: &str = "fecha_nacimiento";
pub const PURCHASE_DATE: &str = "fecha_compra";
pub const BIRTH_WEIGHT: &str = "peso_nacimiento";
pub const PURCHASE_WEIGHT: &str = "peso_compra";
pub const PRICE: &str = "precio_compra";
pub const MOTHER: &str = "madre";
pub const FATHER: &str = "padre";
pub const VENDOR: &str = "proveedor";
pub const PROCUREMENT: &str = "procedencia";
pub const HEALTH: &str = "salud";
pub const LIFE_STATUS: &str = "estado";
pub const BODY_CONDITION: &str = "condicion_corporal";
pub const COMMENT: &str = "comentario";
pub const PHOTO: &str = "foto";

/// The mandatory field set for an acquisition type. Birth records require
/// a birth date, purchase records a purchase date; code, sex, and farm are
/// always mandatory.
pub fn mandatory(acquisition: AcquisitionType) -> [&'static str; 4] {
    match acquisition {
        AcquisitionType::Birth => [CODE, SEX, FARM, BIRTH_DATE],
        AcquisitionType::Purchase => [CODE, SEX, FARM, PURCHASE_DATE],
    }
}
