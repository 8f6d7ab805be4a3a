pub mod calendar;
pub mod dto;
pub mod task_store;
