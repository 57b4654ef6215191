//! # Domain Module
//!
//! Contains the business logic of the daycare activity log.
//!
//! ## Module Organization
//!
//! - **activity_service**: logging activities, photo references, parent and staff feeds
//! - **summary_service**: per-child daily summary derived from the activity log
//! - **staff_service**: staff roster management
//! - **daily_update_service**: daily attendance/behaviour updates
//! - **commands**: internal command and query types the services accept
//! - **models**: the records each collection stores
//!
//! ## Business Rules
//!
//! - Ids are generated by the services and never change
//! - An activity's timestamp is set on insert and never changes; photos are append-only
//! - Partial updates only apply fields that are present and non-empty
//! - Ids referenced across collections (child, staff) are not checked
//! - Staff members need a serial, name, phone and role; daily updates need a child and staff id

pub mod activity_service;
pub mod commands;
pub mod daily_update_service;
pub mod error;
pub mod fields;
pub mod models;
pub mod staff_service;
pub mod summary_service;

pub use activity_service::ActivityService;
pub use daily_update_service::DailyUpdateService;
pub use error::{DomainError, DomainResult};
pub use staff_service::StaffService;
pub use summary_service::SummaryService;
