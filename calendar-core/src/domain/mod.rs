//! # Domain Module
//!
//! Pure calendar logic: every function here is deterministic in its inputs
//! and never touches the clock, so callers pass "today" explicitly.
//!
//! ## Module Organization
//!
//! - **time_slot**: start time → morning / afternoon / evening
//! - **filter**: committed filter state applied to class records
//! - **calendar**: 42-cell month grid generation
//! - **entity**: studio/dancer class selection, available dancers, day lists

pub mod calendar;
pub mod entity;
pub mod filter;
pub mod time_slot;

pub use calendar::*;
pub use entity::*;
pub use filter::*;
pub use time_slot::*;
