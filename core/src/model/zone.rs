use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error, Result};
use chrono::NaiveDate;

use crate::time::{format_due_date, parse_date_strict};

const UNSCHEDULED_ID: &str = "unscheduled";
const CALENDAR_DAY_PREFIX: &str = "calendar-day-";

/// A place a task can be dropped on: the unscheduled list, or one day of the
/// calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Unscheduled,
    CalendarDay(NaiveDate),
}

impl Zone {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Zone::Unscheduled => None,
            Zone::CalendarDay(date) => Some(*date),
        }
    }
}

// Droppable identifiers used by the gesture layer.
impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Unscheduled => f.write_str(UNSCHEDULED_ID),
            Zone::CalendarDay(date) => {
                write!(f, "{}{}", CALENDAR_DAY_PREFIX, format_due_date(*date))
            }
        }
    }
}

impl FromStr for Zone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == UNSCHEDULED_ID {
            return Ok(Zone::Unscheduled);
        }
        match s.strip_prefix(CALENDAR_DAY_PREFIX) {
            Some(date) => Ok(Zone::CalendarDay(parse_date_strict(date)?)),
            None => Err(anyhow!("Unknown drop zone: {}", s)),
        }
    }
}

/// Zone plus position inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropLocation {
    pub zone: Zone,
    pub index: usize,
}

impl DropLocation {
    pub fn new(zone: Zone, index: usize) -> Self {
        Self { zone, index }
    }
}
