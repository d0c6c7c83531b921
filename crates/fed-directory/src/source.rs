//! Choosing and opening a directory file by name.
//!
//! The Fed publishes each directory under a fixed file name. [`SourceConfig`]
//! maps those names to a [`Format`]; it deserializes from JSON (or any serde
//! format) so deployments that rename the files can say so.
//!
//! ```
//! use fed_directory::{format::Format, source::SourceConfig};
//!
//! let config: SourceConfig = serde_json::from_str(r#"{"achFileName": "ach.txt"}"#).unwrap();
//! assert_eq!(config.format_for("/data/ach.txt"), Some(Format::Ach));
//! assert_eq!(config.format_for("fpddir.txt"), Some(Format::Wire));
//! ```

use std::{fs::File, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    directory::Directory,
    error::{DirectoryError, ErrorList},
    format::Format,
};

/// Default file name of the FedACH participant directory.
pub const ACH_FILE_NAME: &str = "FedACHdir.txt";

/// Default file name of the Fedwire participant directory.
pub const WIRE_FILE_NAME: &str = "fpddir.txt";

/// File names that identify each directory format.
///
/// Missing fields fall back to [`ACH_FILE_NAME`] and [`WIRE_FILE_NAME`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceConfig {
    pub ach_file_name: String,
    pub wire_file_name: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self { ach_file_name: ACH_FILE_NAME.to_string(), wire_file_name: WIRE_FILE_NAME.to_string() }
    }
}

impl SourceConfig {
    /// Format identified by the final component of `name`, matched exactly.
    #[must_use]
    pub fn format_for(&self, name: &str) -> Option<Format> {
        let file_name = Path::new(name).file_name()?.to_str()?;
        if file_name == self.ach_file_name {
            Some(Format::Ach)
        } else if file_name == self.wire_file_name {
            Some(Format::Wire)
        } else {
            None
        }
    }

    /// Opens `path`, picks the format from its file name and loads it.
    ///
    /// An unrecognized name fails before the file is touched. The file is
    /// closed before this returns, whatever the outcome.
    pub fn open(&self, path: impl AsRef<Path>) -> Result<Directory, ErrorList> {
        let path = path.as_ref();
        let name = path.to_string_lossy();
        let Some(format) = self.format_for(&name) else {
            let name = path.file_name().map_or(name.clone(), |n| n.to_string_lossy());
            return Err(DirectoryError::UnknownDirectoryType { name: name.into_owned() }.into());
        };

        debug!(path = %path.display(), %format, "opening directory file");
        let file = File::open(path)
            .map_err(|source| DirectoryError::Open { path: path.to_path_buf(), source })?;
        Directory::load_format(format, file)
    }
}

/// Opens a directory file using the default [`SourceConfig`].
pub fn open(path: impl AsRef<Path>) -> Result<Directory, ErrorList> {
    SourceConfig::default().open(path)
}
