use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::input::normalize_task_text;
use crate::model::mutation::Mutation;
use crate::model::task::Task;

/// In-memory owner of all tasks. Every change to a task goes through here.
///
/// Operations addressing an unknown id are silent no-ops: a task may be
/// deleted while a click or drag on it is still in flight.
#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new task. Blank text is ignored and returns `None`.
    pub fn add(&mut self, text: &str) -> Option<Task> {
        let Some(text) = normalize_task_text(text) else {
            debug!("ignoring add with blank text");
            return None;
        };
        let task = Task::new(text);
        debug!(id = %task.id(), priority = task.priority().tier(), "task added");
        self.tasks.push(task.clone());
        Some(task)
    }

    pub fn toggle_completed(&mut self, id: Uuid) {
        if let Some(task) = self.find_mut(id) {
            task.toggle();
            debug!(%id, completed = task.completed(), "task toggled");
        }
    }

    pub fn delete(&mut self, id: Uuid) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id() != id);
        if self.tasks.len() == before {
            debug!(%id, "delete of unknown task ignored");
        } else {
            debug!(%id, "task deleted");
        }
    }

    pub fn set_due_date(&mut self, id: Uuid, date: NaiveDate) {
        if let Some(task) = self.find_mut(id) {
            task.schedule(date);
            debug!(%id, %date, "task scheduled");
        }
    }

    pub fn clear_due_date(&mut self, id: Uuid) {
        if let Some(task) = self.find_mut(id) {
            task.unschedule();
            debug!(%id, "task unscheduled");
        }
    }

    pub fn apply(&mut self, mutation: Mutation) {
        match mutation {
            Mutation::SetDueDate { id, date } => self.set_due_date(id, date),
            Mutation::ClearDueDate { id } => self.clear_due_date(id),
            Mutation::NoOp => {}
        }
    }

    /// Tasks in insertion order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn sorted_by_priority(&self) -> Vec<Task> {
        let mut tasks = self.tasks.clone();
        sort_by_priority(&mut tasks);
        tasks
    }

    /// Unscheduled tasks, highest priority first.
    pub fn unscheduled(&self) -> Vec<Task> {
        let mut tasks: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| !t.is_scheduled())
            .cloned()
            .collect();
        sort_by_priority(&mut tasks);
        tasks
    }

    /// Tasks due on `date`, highest priority first.
    pub fn scheduled_on(&self, date: NaiveDate) -> Vec<Task> {
        let mut tasks: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| t.due_date() == Some(date))
            .cloned()
            .collect();
        sort_by_priority(&mut tasks);
        tasks
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn find_mut(&mut self, id: Uuid) -> Option<&mut Task> {
        let found = self.tasks.iter_mut().find(|t| t.id() == id);
        if found.is_none() {
            debug!(%id, "mutation on unknown task ignored");
        }
        found
    }
}

/// Descending priority. Stable, so equal tiers keep their relative order.
pub fn sort_by_priority(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| b.priority().cmp(&a.priority()));
}
