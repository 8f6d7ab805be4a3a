use tracing::{debug, warn};
use uuid::Uuid;

use crate::model::mutation::Mutation;
use crate::model::task::Task;
use crate::model::zone::{DropLocation, Zone};
use crate::service::task_store::TaskStore;

/// Outcome of one drag gesture, completed or cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropResult {
    pub dragged_id: Uuid,
    pub source: DropLocation,
    /// `None` when the drag was cancelled or released outside any zone.
    pub destination: Option<DropLocation>,
}

impl DropResult {
    pub fn new(dragged_id: Uuid, source: DropLocation, destination: Option<DropLocation>) -> Self {
        Self {
            dragged_id,
            source,
            destination,
        }
    }

    /// Builds a drop from the gesture layer's raw identifiers. Returns `None`
    /// when the source or dragged id can't be understood; an unknown
    /// destination is treated as no destination.
    pub fn from_raw(
        dragged_id: &str,
        source_zone: &str,
        source_index: usize,
        destination: Option<(&str, usize)>,
    ) -> Option<Self> {
        let dragged_id = match Uuid::parse_str(dragged_id) {
            Ok(id) => id,
            Err(e) => {
                warn!(dragged_id, error = %e, "dropped item has an invalid id");
                return None;
            }
        };
        let source_zone: Zone = match source_zone.parse() {
            Ok(zone) => zone,
            Err(e) => {
                warn!(error = %e, "drag started from an unknown zone");
                return None;
            }
        };
        let destination = destination.and_then(|(zone, index)| match zone.parse::<Zone>() {
            Ok(zone) => Some(DropLocation::new(zone, index)),
            Err(e) => {
                warn!(error = %e, "drop on an unknown zone treated as cancelled");
                None
            }
        });

        Some(Self::new(
            dragged_id,
            DropLocation::new(source_zone, source_index),
            destination,
        ))
    }
}

/// Decides what a drop means for the task collection.
///
/// Checked in order: cancelled drop, drop back on the same slot, unknown
/// task, calendar day (schedule), unscheduled list (unschedule). A reorder
/// inside the unscheduled list is never persisted: display order always comes
/// from priority.
pub fn interpret_drop(drop: &DropResult, current_tasks: &[Task]) -> Mutation {
    let Some(destination) = drop.destination else {
        return Mutation::NoOp;
    };

    if destination == drop.source {
        return Mutation::NoOp;
    }

    let id = drop.dragged_id;
    if !current_tasks.iter().any(|t| t.id() == id) {
        return Mutation::NoOp;
    }

    match (drop.source.zone, destination.zone) {
        (_, Zone::CalendarDay(date)) => Mutation::SetDueDate { id, date },
        (Zone::Unscheduled, Zone::Unscheduled) => Mutation::NoOp,
        (Zone::CalendarDay(_), Zone::Unscheduled) => Mutation::ClearDueDate { id },
    }
}

/// Interprets `drop` against the store's current tasks and applies the
/// result.
pub fn apply_drop(store: &mut TaskStore, drop: &DropResult) -> Mutation {
    let mutation = interpret_drop(drop, store.list());
    debug!(?drop, ?mutation, "drop interpreted");
    store.apply(mutation);
    mutation
}

/// Same as [`apply_drop`], starting from the gesture layer's raw identifiers.
/// Anything that can't be understood is a `NoOp`.
pub fn apply_raw_drop(
    store: &mut TaskStore,
    dragged_id: &str,
    source_zone: &str,
    source_index: usize,
    destination: Option<(&str, usize)>,
) -> Mutation {
    match DropResult::from_raw(dragged_id, source_zone, source_index, destination) {
        Some(drop) => apply_drop(store, &drop),
        None => Mutation::NoOp,
    }
}
