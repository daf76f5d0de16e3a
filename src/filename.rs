//! Destination filename resolution
//!
//! Uploaded artifacts are always named `*.csv`. When the caller supplies no
//! name, one is generated from the current time of an injected [`Clock`].

use chrono::NaiveDateTime;

pub const GENERATED_PREFIX: &str = "huggingface_generated_";
pub const CSV_SUFFIX: &str = ".csv";
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Source of wall-clock time for generated filenames
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// A clock stuck at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// `huggingface_generated_<YYYYMMDD_HHMMSS>.csv` for the clock's current time
pub fn generated_filename(clock: &dyn Clock) -> String {
    format!(
        "{}{}{}",
        GENERATED_PREFIX,
        clock.now().format(TIMESTAMP_FORMAT),
        CSV_SUFFIX
    )
}

/// Append `.csv` unless the name already ends with it
pub fn normalize_filename(name: &str) -> String {
    if name.ends_with(CSV_SUFFIX) {
        name.to_string()
    } else {
        format!("{}{}", name, CSV_SUFFIX)
    }
}

pub fn resolve_filename(name: Option<&str>, clock: &dyn Clock) -> String {
    match name {
        Some(name) => normalize_filename(name),
        None => generated_filename(clock),
    }
}
