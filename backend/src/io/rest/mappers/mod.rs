//! Conversions between the public DTOs in `shared` and the domain types.
//!
//! Handlers never build domain commands or response bodies by hand; they go
//! through these mappers so the wire format lives in one place.

pub mod activity_mapper;
pub mod daily_update_mapper;
pub mod staff_mapper;

pub use activity_mapper::ActivityMapper;
pub use daily_update_mapper::DailyUpdateMapper;
pub use staff_mapper::StaffMapper;
