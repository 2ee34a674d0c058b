//! # Calendar Configuration
//!
//! Optional YAML configuration for a calendar instance. Every field has a
//! default, so an empty document (or a missing file) is a valid config.
//!
//! ```yaml
//! pinned_today: "2025-12-24"
//! initial_month:
//!   year: 2025
//!   month: 12
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::MonthAnchor;
use std::fs;
use std::path::Path;

use crate::clock::{Clock, FixedClock, LocalClock};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Use this date as "today" instead of the local clock
    #[serde(default)]
    pub pinned_today: Option<NaiveDate>,
    /// Month shown when the calendar opens; defaults to today's month
    #[serde(default)]
    pub initial_month: Option<MonthAnchor>,
}

impl CalendarConfig {
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents).context("Failed to parse calendar config")
    }

    /// Load from `path`; a missing file gives the default config
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No calendar config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read calendar config {}", path.display()))?;
        let config = Self::from_yaml_str(&contents)?;
        log::info!("Loaded calendar config from {}", path.display());
        Ok(config)
    }

    /// Clock implied by this config
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.pinned_today {
            Some(date) => Box::new(FixedClock(date)),
            None => Box::new(LocalClock),
        }
    }

    /// Month a new calendar opens on, given today's date
    pub fn initial_month_for(&self, today: NaiveDate) -> MonthAnchor {
        self.initial_month.unwrap_or_else(|| MonthAnchor::from_date(today))
    }
}
