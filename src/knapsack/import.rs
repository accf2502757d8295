use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{ImportError, Item, KnapsackInstance};

#[derive(Debug, Deserialize)]
struct ItemRecord {
    name: String,
    weight: f64,
    value: f64,
}

/// Reads items from a csv file with the header `name,weight,value`.
pub fn import_csv<P: AsRef<Path>>(path: P) -> Result<KnapsackInstance, ImportError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|_| ImportError::MissingFile(path.display().to_string()))?;

    read_csv(file)
}

pub fn read_csv<R: Read>(reader: R) -> Result<KnapsackInstance, ImportError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut items = Vec::new();
    for (id, record) in reader.deserialize::<ItemRecord>().enumerate() {
        let record = record.map_err(|err| ImportError::InvalidFormat(err.to_string()))?;
        items.push(Item::new(id, record.name, record.weight, record.value));
    }

    Ok(KnapsackInstance::new(items)?)
}
