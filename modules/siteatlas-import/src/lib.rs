pub mod classify;
pub mod job;
pub mod records;
pub mod reconcile;
pub mod states;
pub mod stats;


pub use job::{ImportJob, ImportParams};
pub use records::{parse_records, LocationRecord};
pub use reconcile::Reconciler;
pub use states::resolve_state;
pub use stats::ImportStats;
