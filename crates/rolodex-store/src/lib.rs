pub mod error;
pub mod paths;
pub mod snapshot;

use crate::error::Result;
use rolodex_core::AddressBook;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use crate::snapshot::SCHEMA_VERSION;

/// A single-file address book store. The whole book is read and written in
/// one piece.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn open(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `Ok(None)` when nothing has been saved yet.
    pub fn load(&self) -> Result<Option<AddressBook>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        snapshot::decode(&self.path, &bytes).map(Some)
    }

    /// Writes to a staging file next to the store and renames it into place.
    pub fn save(&self, book: &AddressBook) -> Result<()> {
        let bytes = snapshot::encode(book)?;
        paths::ensure_parent_dir(&self.path)?;
        let staging = paths::staging_path(&self.path);
        fs::write(&staging, bytes)?;
        restrict_file_permissions(&staging)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }

    /// Moves an unreadable store aside so the next save does not overwrite it.
    pub fn quarantine(&self) -> Result<PathBuf> {
        let target = paths::quarantine_path(&self.path);
        fs::rename(&self.path, &target)?;
        Ok(target)
    }
}

#[cfg(unix)]
fn restrict_file_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let perms = fs::Permissions::from_mode(0o600);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_file_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
