use chrono::NaiveDate;
use taskboard_core::time::{format_due_date, shift_weeks, week_of};
use taskboard_core::{
    apply_drop, calendar_week, normalize_task_text, CalendarWeek, DropLocation, DropResult,
    Mutation, Task, TaskStore, Zone,
};
use tracing::info;
use uuid::Uuid;

/// Unscheduled list plus the seven calendar days.
pub const ZONE_COUNT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Adding,
    Dragging,
}

/// A task picked up with `g` and not yet dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub task_id: Uuid,
    pub source: DropLocation,
    pub target_zone: usize,
    pub target_index: usize,
}

pub struct App {
    pub store: TaskStore,
    pub input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    /// 0 is the unscheduled list, 1..=7 are Monday..Sunday.
    pub focus: usize,
    pub selected: usize,
    pub today: NaiveDate,
    pub week_reference: NaiveDate,
    pub show_completed: bool,
    pub drag: Option<DragState>,
    pub status: Option<String>,
}

impl App {
    pub fn new(store: TaskStore, today: NaiveDate, show_completed: bool) -> App {
        App {
            store,
            input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            focus: 0,
            selected: 0,
            today,
            week_reference: today,
            show_completed,
            drag: None,
            status: None,
        }
    }

    pub fn week(&self) -> [NaiveDate; 7] {
        week_of(self.week_reference)
    }

    pub fn calendar(&self) -> CalendarWeek {
        calendar_week(self.store.list(), self.week_reference, self.today)
    }

    pub fn zone(&self, index: usize) -> Zone {
        match index {
            0 => Zone::Unscheduled,
            i => Zone::CalendarDay(self.week()[(i - 1).min(6)]),
        }
    }

    /// Tasks shown in a zone, in display order.
    pub fn zone_tasks(&self, index: usize) -> Vec<Task> {
        let tasks = match self.zone(index) {
            Zone::Unscheduled => self.store.unscheduled(),
            Zone::CalendarDay(date) => self.store.scheduled_on(date),
        };
        if self.show_completed {
            tasks
        } else {
            tasks.into_iter().filter(|t| !t.completed()).collect()
        }
    }

    pub fn selected_task(&self) -> Option<Task> {
        self.zone_tasks(self.focus).into_iter().nth(self.selected)
    }

    pub fn next(&mut self) {
        let len = self.zone_tasks(self.focus).len();
        if len == 0 {
            return;
        }
        self.selected = if self.selected >= len - 1 { 0 } else { self.selected + 1 };
    }

    pub fn previous(&mut self) {
        let len = self.zone_tasks(self.focus).len();
        if len == 0 {
            return;
        }
        self.selected = if self.selected == 0 { len - 1 } else { self.selected - 1 };
    }

    pub fn focus_right(&mut self) {
        self.focus = (self.focus + 1) % ZONE_COUNT;
        self.selected = 0;
    }

    pub fn focus_left(&mut self) {
        self.focus = (self.focus + ZONE_COUNT - 1) % ZONE_COUNT;
        self.selected = 0;
    }

    pub fn toggle_status(&mut self) {
        if let Some(task) = self.selected_task() {
            self.store.toggle_completed(task.id());
            self.clamp_selection();
        }
    }

    pub fn delete_task(&mut self) {
        if let Some(task) = self.selected_task() {
            self.store.delete(task.id());
            info!(id = %task.id(), "task deleted from board");
            self.clamp_selection();
        }
    }

    pub fn toggle_show_completed(&mut self) {
        self.show_completed = !self.show_completed;
        self.clamp_selection();
    }

    pub fn shift_week(&mut self, weeks: i64) {
        self.week_reference = shift_weeks(self.week_reference, weeks);
        self.clamp_selection();
    }

    pub fn this_week(&mut self) {
        self.week_reference = self.today;
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.zone_tasks(self.focus).len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    // Drag gesture

    pub fn start_drag(&mut self) {
        if let Some(task) = self.selected_task() {
            self.drag = Some(DragState {
                task_id: task.id(),
                source: DropLocation::new(self.zone(self.focus), self.selected),
                target_zone: self.focus,
                target_index: self.selected,
            });
            self.input_mode = InputMode::Dragging;
        }
    }

    pub fn drag_right(&mut self) {
        if let Some(drag) = self.drag.as_mut() {
            drag.target_zone = (drag.target_zone + 1) % ZONE_COUNT;
        }
        self.clamp_drag_index();
    }

    pub fn drag_left(&mut self) {
        if let Some(drag) = self.drag.as_mut() {
            drag.target_zone = (drag.target_zone + ZONE_COUNT - 1) % ZONE_COUNT;
        }
        self.clamp_drag_index();
    }

    pub fn drag_down(&mut self) {
        if let Some(drag) = self.drag.as_mut() {
            drag.target_index += 1;
        }
        self.clamp_drag_index();
    }

    pub fn drag_up(&mut self) {
        if let Some(drag) = self.drag.as_mut() {
            drag.target_index = drag.target_index.saturating_sub(1);
        }
    }

    fn clamp_drag_index(&mut self) {
        let Some(target_zone) = self.drag.map(|d| d.target_zone) else {
            return;
        };
        let len = self.zone_tasks(target_zone).len();
        if let Some(drag) = self.drag.as_mut() {
            drag.target_index = drag.target_index.min(len);
        }
    }

    /// Releases the dragged task over the current target.
    pub fn drop_task(&mut self) -> Mutation {
        let Some(drag) = self.drag.take() else {
            return Mutation::NoOp;
        };
        self.input_mode = InputMode::Normal;

        let destination = DropLocation::new(self.zone(drag.target_zone), drag.target_index);
        let result = DropResult::new(drag.task_id, drag.source, Some(destination));
        let mutation = apply_drop(&mut self.store, &result);

        if !mutation.is_noop() {
            self.focus = drag.target_zone;
        }
        self.select_task(drag.task_id);
        self.status = Some(describe(mutation));
        mutation
    }

    pub fn cancel_drag(&mut self) -> Mutation {
        let Some(drag) = self.drag.take() else {
            return Mutation::NoOp;
        };
        self.input_mode = InputMode::Normal;
        let result = DropResult::new(drag.task_id, drag.source, None);
        let mutation = apply_drop(&mut self.store, &result);
        self.status = Some("Drag cancelled".to_string());
        mutation
    }

    fn select_task(&mut self, id: Uuid) {
        match self.zone_tasks(self.focus).iter().position(|t| t.id() == id) {
            Some(i) => self.selected = i,
            None => self.clamp_selection(),
        }
    }

    // Add form

    pub fn enter_add_mode(&mut self) {
        self.input_mode = InputMode::Adding;
        self.input.clear();
        self.cursor_position = 0;
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self.input.chars().take(self.cursor_position).map(|c| c.len_utf8()).sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self.input.chars().take(self.cursor_position - 1).map(|c| c.len_utf8()).sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn submit_add(&mut self) {
        if let Some(text) = normalize_task_text(&self.input) {
            if let Some(task) = self.store.add(&text) {
                self.status = Some(format!("Added \"{}\" ({})", task.text(), task.priority()));
                self.focus = 0;
                self.select_task(task.id());
            }
        }
        self.input.clear();
        self.cursor_position = 0;
        self.exit_input_mode();
    }
}

fn describe(mutation: Mutation) -> String {
    match mutation {
        Mutation::SetDueDate { date, .. } => format!("Scheduled for {}", format_due_date(date)),
        Mutation::ClearDueDate { .. } => "Moved back to unscheduled".to_string(),
        Mutation::NoOp => "Nothing changed".to_string(),
    }
}
