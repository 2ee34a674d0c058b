//! # Class Calendar Core
//!
//! Month calendar for browsing a studio's or dancer's class schedule.
//!
//! ```text
//! entity classes ──► filter (committed filters) ──► month grid (current month)
//!                                                     │
//!                 view state (selection, panels) ─────┴──► rendering layer
//! ```
//!
//! - **domain**: pure functions: time-slot classification, filtering,
//!   grid generation, entity class selection
//! - **state**: the view state and its transitions
//! - **view**: `CalendarView`, the facade a renderer drives
//! - **config** / **clock**: where "today" and the opening month come from
//!
//! The library logs through the `log` facade and installs no logger.

pub mod clock;
pub mod config;
pub mod domain;
pub mod state;
pub mod view;

pub use clock::{Clock, FixedClock, LocalClock};
pub use config::CalendarConfig;
pub use domain::*;
pub use state::*;
pub use view::CalendarView;
