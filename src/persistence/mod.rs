//! Save/load persistence for the address book
//!
//! Features:
//! - Pretty-printed JSON body (`{"contacts": {...}}`)
//! - Atomic replace (write `<path>.tmp`, then rename over the save)
//! - Missing save file loads as an empty book

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::book::AddressBook;

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed address book {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PersistError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn format(path: &Path, source: serde_json::Error) -> Self {
        Self::Format {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Load an address book from `path`
///
/// A missing file is not an error: it yields a fresh, empty book.
pub fn load(path: impl AsRef<Path>) -> Result<AddressBook, PersistError> {
    let path = path.as_ref();

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::info!("No address book at {}, starting fresh", path.display());
            return Ok(AddressBook::new());
        }
        Err(err) => return Err(PersistError::io(path, err)),
    };

    let book: AddressBook =
        serde_json::from_slice(&bytes).map_err(|err| PersistError::format(path, err))?;
    log::info!("Loaded {} contacts from {}", book.len(), path.display());

    Ok(book)
}

/// Save `book` to `path`, replacing whatever was there
pub fn save(book: &AddressBook, path: impl AsRef<Path>) -> Result<(), PersistError> {
    let path = path.as_ref();
    let json = serde_json::to_vec_pretty(book).map_err(|err| PersistError::format(path, err))?;

    let tmp = tmp_path(path);
    fs::write(&tmp, &json).map_err(|err| PersistError::io(&tmp, err))?;
    fs::rename(&tmp, path).map_err(|err| {
        let _ = fs::remove_file(&tmp);
        PersistError::io(path, err)
    })?;

    log::info!("Address book saved ({} contacts) to {}", book.len(), path.display());
    Ok(())
}

/// Sibling file the save is staged in before it replaces `path`
fn tmp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
