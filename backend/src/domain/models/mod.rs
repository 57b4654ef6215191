//! Domain models: the records each collection stores.
//!
//! Field names on disk are camelCase so data files stay compatible with the
//! JSON the REST layer speaks.

pub mod activity;
pub mod daily_update;
pub mod staff;

pub use activity::Activity;
pub use daily_update::DailyUpdate;
pub use staff::StaffMember;
