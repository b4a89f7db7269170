//! Settings for rolodex and the choice of address book file.
//!
//! `config.toml` lives in `$XDG_CONFIG_HOME/rolodex` (or `~/.config/rolodex`)
//! and knows one key, `book_path`. A relative `book_path` is taken relative
//! to the directory holding the config file; a leading `~/` expands to the
//! home directory. Every book path, whether it comes from the file or from
//! the command line, goes through [`validate_book_path`].

use std::env;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "rolodex";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid book path: {0}")]
    InvalidBookPath(PathBuf),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    book_path: Option<PathBuf>,
    source: Option<PathBuf>,
}

impl AppConfig {
    /// The config file these settings were read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn book_path(&self) -> Option<&Path> {
        self.book_path.as_deref()
    }

    /// Picks the address book file. A path given on the command line wins
    /// over the config file; `None` means the default data location applies.
    pub fn select_book_path(&self, flag: Option<PathBuf>) -> Result<Option<PathBuf>> {
        match flag {
            Some(path) => validate_book_path(path).map(Some),
            None => Ok(self.book_path.clone()),
        }
    }
}

/// A book path must name a file: not empty, not a root, not ending in `..`.
pub fn validate_book_path(path: PathBuf) -> Result<PathBuf> {
    if path.as_os_str().is_empty() || path.file_name().is_none() {
        return Err(ConfigError::InvalidBookPath(path));
    }
    Ok(path)
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    book_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Location {
    /// Named with `--config`; it has to exist.
    Explicit(PathBuf),
    /// The per-user default; a missing file means defaults.
    Discovered(PathBuf),
}

impl Location {
    fn path(&self) -> &Path {
        match self {
            Location::Explicit(path) | Location::Discovered(path) => path,
        }
    }
}

/// Reads the settings. Without `--config`, a missing file or an unknown
/// home directory yields the defaults.
pub fn load(explicit: Option<PathBuf>) -> Result<AppConfig> {
    match locate(explicit)? {
        Some(location) => load_from(&location),
        None => Ok(AppConfig::default()),
    }
}

fn locate(explicit: Option<PathBuf>) -> Result<Option<Location>> {
    if let Some(path) = explicit {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfigPath(path));
        }
        return Ok(Some(Location::Explicit(path)));
    }

    // An empty XDG_CONFIG_HOME counts as unset.
    let base = env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")));
    Ok(base.map(|dir| Location::Discovered(dir.join(APP_DIR).join(CONFIG_FILENAME))))
}

fn load_from(location: &Location) -> Result<AppConfig> {
    let path = location.path();
    let Some(contents) = read_private(path)? else {
        return match location {
            Location::Explicit(path) => Err(ConfigError::MissingConfigFile(path.clone())),
            Location::Discovered(_) => Ok(AppConfig::default()),
        };
    };

    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    let home = dirs::home_dir();
    let book_path = parsed
        .book_path
        .map(|raw| expand_book_path(raw, base, home.as_deref()))
        .transpose()?;

    Ok(AppConfig {
        book_path,
        source: Some(path.to_path_buf()),
    })
}

/// Opens the file and checks its mode on the open handle. `None` when the
/// file does not exist.
fn read_private(path: &Path) -> Result<Option<String>> {
    let read_error = |source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    };
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(read_error(err)),
    };
    ensure_private(&file, path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(read_error)?;
    Ok(Some(contents))
}

#[cfg(unix)]
fn ensure_private(file: &File, path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = file.metadata().map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if metadata.permissions().mode() & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_private(_file: &File, _path: &Path) -> Result<()> {
    Ok(())
}

fn expand_book_path(raw: PathBuf, base: &Path, home: Option<&Path>) -> Result<PathBuf> {
    let raw = validate_book_path(raw)?;
    let expanded = match raw.strip_prefix("~") {
        Ok(rest) if rest.as_os_str().is_empty() => {
            return Err(ConfigError::InvalidBookPath(raw.clone()));
        }
        Ok(rest) => home.ok_or(ConfigError::MissingHomeDir)?.join(rest),
        Err(_) if raw.is_relative() => base.join(&raw),
        Err(_) => raw,
    };
    Ok(expanded)
}
