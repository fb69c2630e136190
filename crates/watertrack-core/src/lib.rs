//! # Watertrack Core Library
//!
//! This library provides the core logic for Watertrack, a daily liquid
//! intake tracker. Front-ends are thin layers over the same core: they
//! parse input, call into the controller, and render the [`Snapshot`] it
//! returns.
//!
//! ## Architecture
//!
//! - **Record store**: one JSON file holding today's date and intake,
//!   rolled over to zero when the calendar day changes
//! - **Intake controller**: applies adds and resets under the goal rules
//!   and writes every change through to the store
//! - **Configuration**: TOML file with the daily goal and quick-add sizes
//!
//! ## Key Components
//!
//! - [`IntakeController`]: add / reset / snapshot
//! - [`RecordStore`]: load with rollover, save
//! - [`Config`]: application configuration management

pub mod error;
pub mod intake;
pub mod storage;

pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use intake::{parse_amount, IntakeController, Snapshot};
pub use storage::{Config, DailyRecord, RecordStore};
