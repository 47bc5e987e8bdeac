//! # ClassGrid Core
//!
//! Consolidates the weekly class timetables of several gym locations into one
//! time-ordered, day-bucketed schedule, and decides which cells fall inside
//! the viewer's blocked time.
//!
//! The pipeline runs synchronously and never fails on bad table data:
//!
//! - [`parser`] reads one location's delimited table into activities
//! - [`aggregate`] merges all locations into time slots and sorts them
//! - [`partition`] splits slots into morning and evening sessions
//! - [`models::blocked`] holds the blocked-interval classifier

pub mod aggregate;
pub mod config;
pub mod errors;
pub mod models;
pub mod parser;
pub mod partition;
pub mod pipeline;

pub use config::{ScheduleConfig, TableFormat};
pub use errors::{GridError, GridResult};
pub use pipeline::{Schedule, refresh};
