pub mod model;
pub mod input;
pub mod priority;
pub mod time;
pub mod service;
pub mod usecase;

pub use model::mutation::Mutation;
pub use model::task::{Task, Priority};
pub use model::zone::{DropLocation, Zone};
pub use input::normalize_task_text;
pub use priority::classify;
pub use time::{parse_due_date, week_of};
pub use service::task_store::{TaskStore, sort_by_priority};
pub use service::calendar::{calendar_week, tasks_by_date};
pub use service::dto::{CalendarDay, CalendarWeek};
pub use usecase::drag::{DropResult, apply_drop, apply_raw_drop, interpret_drop};
