use serde::{Deserialize, Serialize};

/// Read-only view of the day's progress handed to the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub intake_ml: f64,
    pub goal_ml: f64,
    /// `intake_ml / goal_ml`, not clamped, so it can pass 1.0.
    pub progress_fraction: f64,
    /// True only on the add that carried intake from below the goal to at
    /// or above it.
    pub goal_just_reached: bool,
    /// Milliliters still to go, zero once the goal is met.
    pub remaining_ml: f64,
}

impl Snapshot {
    pub(crate) fn new(intake_ml: f64, goal_ml: f64, goal_just_reached: bool) -> Self {
        Self {
            intake_ml,
            goal_ml,
            progress_fraction: intake_ml / goal_ml,
            goal_just_reached,
            remaining_ml: (goal_ml - intake_ml).max(0.0),
        }
    }

    pub fn goal_met(&self) -> bool {
        self.intake_ml >= self.goal_ml
    }

    pub fn intake_liters(&self) -> f64 {
        self.intake_ml / 1000.0
    }

    pub fn goal_liters(&self) -> f64 {
        self.goal_ml / 1000.0
    }

    /// Progress as a percentage, clamped to 0..=100 for progress bars.
    pub fn progress_percent(&self) -> f64 {
        (self.progress_fraction * 100.0).clamp(0.0, 100.0)
    }

    /// e.g. `0.25 L / 2.0 L`
    pub fn summary_line(&self) -> String {
        format!("{:.2} L / {:.1} L", self.intake_liters(), self.goal_liters())
    }

    pub fn status_line(&self) -> String {
        if self.goal_met() {
            "Goal Achieved! Keep it up!".to_string()
        } else {
            format!("You need {:.2} L more.", self.remaining_ml / 1000.0)
        }
    }

    pub fn goal_reached_message(&self) -> String {
        format!(
            "Congratulations! You've reached your daily goal of {:.1}L.",
            self.goal_liters()
        )
    }
}
