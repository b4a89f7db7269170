use crate::error::{Result, StoreError};
use rolodex_core::{AddressBook, Record, RecordDto};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    records: Vec<RecordDto>,
}

#[derive(Debug, Deserialize)]
struct SnapshotHeader {
    version: u32,
}

pub fn encode(book: &AddressBook) -> Result<Vec<u8>> {
    let snapshot = Snapshot {
        version: SCHEMA_VERSION,
        records: book.records().map(RecordDto::from).collect(),
    };
    let mut bytes = serde_json::to_vec_pretty(&snapshot).map_err(StoreError::Encode)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Decodes a snapshot, checking the version before the body so that a newer
/// layout is reported as such rather than as garbage.
pub fn decode(path: &Path, bytes: &[u8]) -> Result<AddressBook> {
    let header: SnapshotHeader =
        serde_json::from_slice(bytes).map_err(|source| StoreError::Corrupt {
            path: path.to_path_buf(),
            source,
        })?;
    if header.version != SCHEMA_VERSION {
        return Err(StoreError::UnsupportedVersion {
            path: path.to_path_buf(),
            version: header.version,
        });
    }

    let snapshot: Snapshot =
        serde_json::from_slice(bytes).map_err(|source| StoreError::Corrupt {
            path: path.to_path_buf(),
            source,
        })?;

    let mut book = AddressBook::new();
    for dto in snapshot.records {
        if book.contains(&dto.name) {
            return Err(StoreError::DuplicateName {
                path: path.to_path_buf(),
                name: dto.name,
            });
        }
        let record = Record::try_from(dto).map_err(|source| StoreError::InvalidRecord {
            path: path.to_path_buf(),
            source,
        })?;
        book.add_record(record);
    }
    Ok(book)
}
