use std::io;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use optional_ext_core::app::env::{var_opt, var_or};
use optional_ext_core::app::storage::{deserialize_json_path, Storage};
use optional_ext_core::Optional;

use crate::error::DemoError;
use crate::timeline::Timeline;

pub const SEARCH_VAR: &str = "OPTIONAL_EXT_DEMO_SEARCH";
pub const TIMELINE_VAR: &str = "OPTIONAL_EXT_DEMO_TIMELINE";
pub const TIMELINE_FILE_NAME: &str = "timeline.json";

#[derive(Clone, Debug)]
pub struct Config {
  pub search: String,
  pub timeline_path: Optional<PathBuf>,
}

impl Config {
  /// Read the configuration from environment variables.
  pub fn from_env() -> Self {
    let search = var_or(SEARCH_VAR, "foo");
    let timeline_path = var_opt(TIMELINE_VAR).map(PathBuf::from).into();
    Self { search, timeline_path }
  }

  /// Load the timeline from the configured file, or else from the storage data directory, or else return the
  /// [sample timeline](Timeline::sample).
  ///
  /// An explicitly configured file that is missing or does not contain a timeline is an error. When the data
  /// directory has no timeline file yet, the sample timeline is written there.
  pub fn load_timeline(&self, storage: &Storage) -> Result<Timeline, DemoError> {
    if let Some(path) = self.timeline_path.get() {
      info!(path = %path.display(), "loading configured timeline");
      return match deserialize_json_path::<Timeline>(Some(path)) {
        Ok(Some(timeline)) => Ok(timeline),
        Ok(None) if path.exists() => Err(DemoError::InvalidTimeline(path.display().to_string())),
        Ok(None) => Err(DemoError::ReadTimeline(io::Error::new(
          io::ErrorKind::NotFound,
          format!("'{}' does not exist", path.display()),
        ))),
        Err(cause) if is_json_error(&cause) => {
          warn!(%cause, path = %path.display(), "configured timeline is not valid JSON");
          Err(DemoError::InvalidTimeline(path.display().to_string()))
        }
        Err(cause) => Err(DemoError::ReadTimeline(cause)),
      };
    }

    match storage.deserialize_json_file::<Timeline>(TIMELINE_FILE_NAME) {
      Ok(Some(timeline)) => {
        debug!("loaded timeline from data directory");
        Ok(timeline)
      }
      Ok(None) => {
        debug!("no timeline in data directory; using sample timeline");
        let timeline = Timeline::sample();
        save_sample(storage, &timeline);
        Ok(timeline)
      }
      Err(cause) => {
        warn!(%cause, "cannot read timeline from data directory; using sample timeline");
        Ok(Timeline::sample())
      }
    }
  }
}

/// Whether `cause` wraps a JSON syntax or end-of-file error rather than an I/O failure.
fn is_json_error(cause: &io::Error) -> bool {
  cause.get_ref().is_some_and(|inner| inner.is::<serde_json::Error>())
}

/// Write `timeline` to the data directory unless a timeline file is already there.
fn save_sample(storage: &Storage, timeline: &Timeline) {
  let Some(path) = storage.data_file(TIMELINE_FILE_NAME) else {
    return;
  };
  if path.exists() {
    return;
  }
  match storage.serialize_json_file(TIMELINE_FILE_NAME, timeline) {
    Ok(()) => info!(path = %path.display(), "wrote sample timeline to data directory"),
    Err(cause) => warn!(%cause, path = %path.display(), "cannot write sample timeline to data directory"),
  }
}
