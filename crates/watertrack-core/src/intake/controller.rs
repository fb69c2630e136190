//! Goal-tracking rules over the persisted daily record.
//!
//! ## Rules
//!
//! - An add while intake is already at or above the goal is dropped: no
//!   change, no write.
//! - Every accepted add and every reset is written through immediately.
//! - `goal_just_reached` fires once, on the add that crosses the goal.

use chrono::NaiveDate;
use tracing::{debug, info};

use super::Snapshot;
use crate::error::Result;
use crate::storage::{record, DailyRecord, RecordStore};

/// Owns today's record for the lifetime of the process.
#[derive(Debug)]
pub struct IntakeController {
    store: RecordStore,
    record: DailyRecord,
    goal_ml: f64,
}

impl IntakeController {
    /// Load today's record from `store`.
    ///
    /// # Errors
    /// Fails only if a day rollover cannot be written.
    pub fn open(store: RecordStore, goal_ml: f64) -> Result<Self> {
        Self::open_on(store, goal_ml, record::today())
    }

    /// Like [`IntakeController::open`] with an explicit current date.
    pub fn open_on(store: RecordStore, goal_ml: f64, today: NaiveDate) -> Result<Self> {
        let record = store.load_on(today)?;
        Ok(Self {
            store,
            record,
            goal_ml,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn record(&self) -> &DailyRecord {
        &self.record
    }

    pub fn date(&self) -> NaiveDate {
        self.record.date
    }

    pub fn goal_ml(&self) -> f64 {
        self.goal_ml
    }

    pub fn goal_met(&self) -> bool {
        self.record.intake_ml >= self.goal_ml
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.record.intake_ml, self.goal_ml, false)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Record `amount_ml` of intake.
    ///
    /// `amount_ml` must be finite; see [`parse_amount`](super::parse_amount).
    ///
    /// # Errors
    /// Returns an error if the updated record cannot be written. The
    /// in-memory record is left unchanged in that case.
    pub fn add(&mut self, amount_ml: f64) -> Result<Snapshot> {
        let before = self.record.intake_ml;
        if before >= self.goal_ml {
            debug!(intake_ml = before, goal_ml = self.goal_ml, "goal already met, add dropped");
            return Ok(self.snapshot());
        }

        let updated = DailyRecord {
            date: self.record.date,
            intake_ml: before + amount_ml,
        };
        self.store.save(&updated)?;
        self.record = updated;

        let after = self.record.intake_ml;
        let goal_just_reached = before < self.goal_ml && after >= self.goal_ml;
        if goal_just_reached {
            info!(intake_ml = after, goal_ml = self.goal_ml, "daily goal reached");
        }
        Ok(Snapshot::new(after, self.goal_ml, goal_just_reached))
    }

    /// Zero today's intake.
    ///
    /// # Errors
    /// Returns an error if the zeroed record cannot be written.
    pub fn reset(&mut self) -> Result<Snapshot> {
        let zeroed = DailyRecord::fresh(self.record.date);
        self.store.save(&zeroed)?;
        self.record = zeroed;
        info!(date = %self.record.date, "intake reset");
        Ok(self.snapshot())
    }

    /// Start a new day if the held record is not for `today`.
    ///
    /// Returns the new snapshot when a rollover happened.
    pub fn roll_over(&mut self, today: NaiveDate) -> Result<Option<Snapshot>> {
        if self.record.date == today {
            return Ok(None);
        }
        let fresh = DailyRecord::fresh(today);
        self.store.save(&fresh)?;
        info!(from = %self.record.date, to = %today, "day changed, intake reset");
        self.record = fresh;
        Ok(Some(self.snapshot()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DATA_FILE;
    use tempfile::TempDir;

    const GOAL: f64 = 2000.0;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn controller(dir: &TempDir) -> IntakeController {
        let store = RecordStore::at(dir.path().join(DATA_FILE));
        IntakeController::open_on(store, GOAL, day("2024-06-01")).unwrap()
    }

    fn stored(dir: &TempDir) -> DailyRecord {
        RecordStore::at(dir.path().join(DATA_FILE))
            .load_on(day("2024-06-01"))
            .unwrap()
    }

    #[test]
    fn initial_snapshot_is_empty() {
        let dir = TempDir::new().unwrap();
        let ctl = controller(&dir);
        let snap = ctl.snapshot();
        assert_eq!(snap.intake_ml, 0.0);
        assert_eq!(snap.remaining_ml, GOAL);
        assert!(!snap.goal_just_reached);
    }

    #[test]
    fn add_accumulates_and_persists() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller(&dir);

        ctl.add(250.0).unwrap();
        let snap = ctl.add(500.0).unwrap();

        assert_eq!(snap.intake_ml, 750.0);
        assert_eq!(snap.remaining_ml, 1250.0);
        assert_eq!(snap.progress_fraction, 0.375);
        assert_eq!(stored(&dir).intake_ml, 750.0);
    }

    #[test]
    fn goal_crossing_reported_once() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller(&dir);

        let first = ctl.add(250.0).unwrap();
        assert!(!first.goal_just_reached);
        for _ in 0..3 {
            assert!(!ctl.add(500.0).unwrap().goal_just_reached);
        }
        assert_eq!(ctl.snapshot().intake_ml, 1750.0);

        let crossing = ctl.add(500.0).unwrap();
        assert_eq!(crossing.intake_ml, 2250.0);
        assert!(crossing.goal_just_reached);
        assert_eq!(crossing.remaining_ml, 0.0);

        let after = ctl.add(100.0).unwrap();
        assert_eq!(after.intake_ml, 2250.0);
        assert!(!after.goal_just_reached);
    }

    #[test]
    fn landing_exactly_on_goal_counts_as_crossing() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller(&dir);
        ctl.add(1500.0).unwrap();
        let snap = ctl.add(500.0).unwrap();
        assert!(snap.goal_just_reached);
        assert!(ctl.goal_met());
    }

    #[test]
    fn add_after_goal_does_not_touch_file() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller(&dir);
        ctl.add(2100.0).unwrap();
        let path = dir.path().join(DATA_FILE);
        let before = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        ctl.add(300.0).unwrap();

        assert!(!path.exists(), "no-op add must not write");
        assert_eq!(ctl.record().intake_ml, 2100.0);
        std::fs::write(&path, before).unwrap();
        assert_eq!(stored(&dir).intake_ml, 2100.0);
    }

    #[test]
    fn reset_zeroes_and_persists() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller(&dir);
        ctl.add(2500.0).unwrap();

        let snap = ctl.reset().unwrap();

        assert_eq!(snap.intake_ml, 0.0);
        assert!(!snap.goal_just_reached);
        assert_eq!(snap.remaining_ml, GOAL);
        assert_eq!(stored(&dir).intake_ml, 0.0);
    }

    #[test]
    fn add_works_again_after_reset() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller(&dir);
        ctl.add(2500.0).unwrap();
        ctl.reset().unwrap();

        let snap = ctl.add(2000.0).unwrap();
        assert!(snap.goal_just_reached);
    }

    #[test]
    fn failed_write_leaves_state_unchanged() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::at(dir.path());
        let mut ctl = IntakeController::open_on(store, GOAL, day("2024-06-01")).unwrap();

        assert!(ctl.add(250.0).is_err());
        assert_eq!(ctl.record().intake_ml, 0.0);
    }

    #[test]
    fn roll_over_only_when_day_changes() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller(&dir);
        ctl.add(900.0).unwrap();

        assert!(ctl.roll_over(day("2024-06-01")).unwrap().is_none());
        assert_eq!(ctl.record().intake_ml, 900.0);

        let snap = ctl.roll_over(day("2024-06-02")).unwrap().unwrap();
        assert_eq!(snap.intake_ml, 0.0);
        assert_eq!(ctl.date(), day("2024-06-02"));

        let on_disk = RecordStore::at(dir.path().join(DATA_FILE))
            .load_on(day("2024-06-02"))
            .unwrap();
        assert_eq!(on_disk, DailyRecord::fresh(day("2024-06-02")));
    }
}
