mod amount;
mod controller;
mod snapshot;

pub use amount::parse_amount;
pub use controller::IntakeController;
pub use snapshot::Snapshot;
