use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Platform-specific data directory of an application.
#[derive(Default, Clone, Debug)]
pub struct Storage {
  data_directory: Option<PathBuf>,
}
impl Storage {
  pub fn new(application: &str) -> Self {
    let data_directory = ProjectDirs::from("", "optional_ext", application)
      .map(|project_directories| project_directories.data_dir().to_path_buf());
    Self { data_directory }
  }

  /// Storage with `data_directory` in place of the platform data directory.
  pub fn in_directory(data_directory: impl Into<PathBuf>) -> Self {
    Self { data_directory: Some(data_directory.into()) }
  }

  #[inline]
  pub fn data_directory(&self) -> Option<&Path> { self.data_directory.as_deref() }

  pub fn data_file(&self, file_path: impl AsRef<Path>) -> Option<PathBuf> {
    self.data_directory().map(|d| d.join(file_path))
  }
}

#[cfg(feature = "app_storage_json")]
mod json {
  use std::fs::{create_dir_all, File, OpenOptions};
  use std::io::{self, BufReader, BufWriter};
  use std::path::Path;

  use super::Storage;

  impl Storage {
    /// Deserialize JSON file `file_name` in the data directory.
    ///
    /// Returns `Ok(None)` when there is no data directory or file, or when the file does not match the data format of
    /// `T`.
    pub fn deserialize_json_file<T: serde::de::DeserializeOwned>(
      &self,
      file_name: impl AsRef<Path>,
    ) -> Result<Option<T>, io::Error> {
      deserialize_json_path(self.data_file(file_name))
    }

    /// Serialize `value` into JSON file `file_name` in the data directory, creating the directory if needed. Does
    /// nothing when there is no data directory.
    pub fn serialize_json_file<T: serde::Serialize>(
      &self,
      file_name: impl AsRef<Path>,
      value: &T,
    ) -> Result<(), io::Error> {
      serialize_json_path(self.data_file(file_name), value)
    }
  }

  /// Deserialize JSON file at `file_path`, with the same semantics as [`Storage::deserialize_json_file`].
  pub fn deserialize_json_path<T: serde::de::DeserializeOwned>(
    file_path: Option<impl AsRef<Path>>,
  ) -> Result<Option<T>, io::Error> {
    let mut open_options = OpenOptions::new();
    open_options.read(true);
    let file_opt = open_file_opt(file_path, open_options)?;
    let result = file_opt.map(|file| serde_json::from_reader(BufReader::new(file))).transpose();
    if let Err(cause) = &result {
      if cause.classify() == serde_json::error::Category::Data {
        tracing::error!(%cause, "failed to deserialize JSON due to data format changes; returning None");
        return Ok(None);
      }
    }
    Ok(result?)
  }

  /// Serialize `value` into JSON file at `file_path`, with the same semantics as [`Storage::serialize_json_file`].
  pub fn serialize_json_path<T: serde::Serialize>(
    file_path: Option<impl AsRef<Path>>,
    value: &T,
  ) -> Result<(), io::Error> {
    let Some(file_path) = file_path else {
      return Ok(());
    };
    let file_path = file_path.as_ref();
    if let Some(parent) = file_path.parent() {
      create_dir_all(parent)?;
    }
    let file = OpenOptions::new().write(true).truncate(true).create(true).open(file_path)?;
    serde_json::to_writer(BufWriter::new(file), value)?;
    Ok(())
  }

  fn open_file_opt(file_path: Option<impl AsRef<Path>>, open_options: OpenOptions) -> Result<Option<File>, io::Error> {
    file_path.and_then(|path| match open_options.open(path) {
      Err(e) if e.kind() == io::ErrorKind::NotFound => None,
      v => Some(v),
    }).transpose()
  }
}

#[cfg(feature = "app_storage_json")]
pub use json::{deserialize_json_path, serialize_json_path};
