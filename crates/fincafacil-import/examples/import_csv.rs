//! Import a small CSV batch into an in-memory store and print the result.
//!
//! Run with `RUST_LOG=debug` to watch per-row decisions.

use fincafacil_core::{MemoryStore, RefKind};
use fincafacil_import::import_csv;
use tracing_subscriber::EnvFilter;

const CSV: &str = "\
codigo,tipo_ingreso,sexo,finca,raza,potrero,fecha_nacimiento,peso_nacimiento,madre
COW01,Nacimiento,Hembra,Finca El Prado,Brahman,Norte,2022-03-15,38,
TORO1,Nacimiento,Macho,Finca El Prado,Brahman,Norte,2021-07-01,41,
CALF1,Nacimiento,Hembra,Finca El Prado,Criolla,norte,2024-05-20,32,COW01
BAD01,Nacimiento,Hembra,Finca Fantasma,Brahman,,2024-05-21,30,
";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut store = MemoryStore::new();
    let farm = store.add_reference(RefKind::Farm, "Finca El Prado", None);
    store.add_reference(RefKind::Breed, "Brahman", None);
    store.add_reference(RefKind::Pasture, "Norte", Some(farm));

    let result = import_csv(&mut store, CSV.as_bytes(), None).expect("import");
    println!(
        "{}",
        serde_json::to_string_pretty(&result).expect("serialize result")
    );
}
