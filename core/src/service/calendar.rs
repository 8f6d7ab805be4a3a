use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::task::Task;
use crate::service::dto::{CalendarDay, CalendarWeek};
use crate::service::task_store::sort_by_priority;
use crate::time::week_of;

/// Scheduled tasks grouped by due date. Each bucket keeps insertion order.
pub fn tasks_by_date(tasks: &[Task]) -> BTreeMap<NaiveDate, Vec<Task>> {
    let mut groups: BTreeMap<NaiveDate, Vec<Task>> = BTreeMap::new();
    for task in tasks {
        if let Some(due) = task.due_date() {
            groups.entry(due).or_default().push(task.clone());
        }
    }
    groups
}

/// Builds the Monday-started week around `reference`, with each day's tasks
/// sorted by priority.
pub fn calendar_week(tasks: &[Task], reference: NaiveDate, today: NaiveDate) -> CalendarWeek {
    let mut groups = tasks_by_date(tasks);

    let days: Vec<CalendarDay> = week_of(reference)
        .into_iter()
        .map(|date| {
            let mut day_tasks = groups.remove(&date).unwrap_or_default();
            sort_by_priority(&mut day_tasks);
            CalendarDay {
                date,
                is_today: date == today,
                tasks: day_tasks,
            }
        })
        .collect();

    let outside_week = groups.values().map(Vec::len).sum();

    CalendarWeek { days, outside_week }
}
