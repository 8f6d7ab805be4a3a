use chrono::NaiveDate;
use uuid::Uuid;

/// Store change produced by interpreting a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    SetDueDate { id: Uuid, date: NaiveDate },
    ClearDueDate { id: Uuid },
    NoOp,
}

impl Mutation {
    pub fn is_noop(&self) -> bool {
        matches!(self, Mutation::NoOp)
    }
}
