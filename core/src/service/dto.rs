use chrono::NaiveDate;
use serde::Serialize;

use crate::model::task::Task;
use crate::time::{day_month, day_name};

/// One column of the calendar view.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_today: bool,
    pub tasks: Vec<Task>,
}

impl CalendarDay {
    pub fn day_of_week(&self) -> String {
        day_name(self.date) // Mon, Tue...
    }

    pub fn day_month(&self) -> String {
        day_month(self.date)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarWeek {
    pub days: Vec<CalendarDay>,
    // Scheduled tasks falling outside the shown week.
    pub outside_week: usize,
}
