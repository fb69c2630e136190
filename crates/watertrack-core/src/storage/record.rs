//! JSON-backed storage for the single daily intake record.
//!
//! The file holds exactly one record and is rewritten wholesale on every
//! save:
//!
//! ```text
//! {"date": "2024-06-01", "intake": 750.0}
//! ```
//!
//! Loading is forgiving. A missing or unreadable file yields a zeroed
//! record for today. A record from an earlier day is replaced by a zeroed
//! record for today, and that replacement is written back immediately so
//! the rollover survives even if nothing else happens this session.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{data_dir, Config};
use crate::error::StorageError;

/// Default record file name inside the data directory.
pub const DATA_FILE: &str = "water_tracker_data.json";

/// Intake for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    /// Milliliters consumed so far, never negative.
    #[serde(rename = "intake")]
    pub intake_ml: f64,
}

impl DailyRecord {
    /// A zeroed record for `date`.
    pub fn fresh(date: NaiveDate) -> Self {
        Self {
            date,
            intake_ml: 0.0,
        }
    }
}

/// On-disk shape, untyped per field so a stale record with junk in it
/// still rolls over instead of reading as corrupt.
#[derive(Debug, Deserialize)]
struct StoredRecord {
    #[serde(default)]
    date: Option<serde_json::Value>,
    #[serde(default)]
    intake: Option<serde_json::Value>,
}

impl StoredRecord {
    fn date(&self) -> Option<NaiveDate> {
        self.date.as_ref()?.as_str()?.parse().ok()
    }
}

/// Outcome of reading the record file.
enum Stored {
    Missing,
    Corrupt(String),
    Found(StoredRecord),
}

/// Owns the record file.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Store at `<data_dir>/water_tracker_data.json`.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be resolved or created.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self::at(data_dir()?.join(DATA_FILE)))
    }

    /// Store at the configured `storage.data_file`, falling back to
    /// [`RecordStore::open`].
    pub fn from_config(config: &Config) -> Result<Self, StorageError> {
        match config.storage.data_file.as_deref() {
            Some(path) if !path.trim().is_empty() => Ok(Self::at(path)),
            _ => Self::open(),
        }
    }

    /// Store bound to an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the record for the local calendar day.
    ///
    /// # Errors
    /// Only fails when a day rollover has to be persisted and the write fails.
    pub fn load(&self) -> Result<DailyRecord, StorageError> {
        self.load_on(today())
    }

    /// Load the record as if the current day were `today`.
    pub fn load_on(&self, today: NaiveDate) -> Result<DailyRecord, StorageError> {
        let stored = match self.read() {
            Stored::Missing => {
                debug!(path = %self.path.display(), "no stored record, starting fresh");
                return Ok(DailyRecord::fresh(today));
            }
            Stored::Corrupt(reason) => {
                warn!(path = %self.path.display(), %reason, "stored record unusable, starting fresh");
                return Ok(DailyRecord::fresh(today));
            }
            Stored::Found(stored) => stored,
        };

        if stored.date() != Some(today) {
            let previous = stored
                .date
                .as_ref()
                .map_or_else(|| "<none>".to_string(), |d| d.to_string());
            info!(stored = %previous, %today, "new day, resetting intake");
            let record = DailyRecord::fresh(today);
            self.save(&record)?;
            return Ok(record);
        }

        let intake_ml = match &stored.intake {
            None | Some(serde_json::Value::Null) => 0.0,
            Some(value) => match value.as_f64() {
                Some(n) if n.is_finite() && n >= 0.0 => n,
                _ => {
                    warn!(path = %self.path.display(), intake = %value, "stored intake unusable, starting fresh");
                    return Ok(DailyRecord::fresh(today));
                }
            },
        };

        debug!(%today, intake_ml, "loaded record");
        Ok(DailyRecord {
            date: today,
            intake_ml,
        })
    }

    /// Overwrite the record file with `record`.
    ///
    /// # Errors
    /// Returns an error if the record cannot be encoded or written.
    pub fn save(&self, record: &DailyRecord) -> Result<(), StorageError> {
        let content = serde_json::to_string(record)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::WriteFailed {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&self.path, content).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), date = %record.date, intake_ml = record.intake_ml, "saved record");
        Ok(())
    }

    fn read(&self) -> Stored {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Stored::Missing,
            Err(e) => return Stored::Corrupt(e.to_string()),
        };
        match serde_json::from_str::<StoredRecord>(&content) {
            Ok(stored) => Stored::Found(stored),
            Err(e) => Stored::Corrupt(e.to_string()),
        }
    }
}

/// The local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
