//! Special-round scheduling.
//!
//! Two schedules are supported (see `SpecialTrigger`): a deferred
//! announcement every N rounds, armed by the presentation layer after its
//! banner, or an immediately pending modifier after every N rounds.

mod scheduler;

pub use scheduler::SpecialRoundScheduler;
