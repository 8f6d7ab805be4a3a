#[cfg(test)]
mod tests {
    use crate::model::mutation::Mutation;
    use crate::model::zone::{DropLocation, Zone};
    use crate::service::task_store::TaskStore;
    use crate::usecase::drag::{apply_drop, apply_raw_drop, interpret_drop, DropResult};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn list_at(index: usize) -> DropLocation {
        DropLocation::new(Zone::Unscheduled, index)
    }

    fn day_at(day: u32, index: usize) -> DropLocation {
        DropLocation::new(Zone::CalendarDay(june(day)), index)
    }

    fn store_with(texts: &[&str]) -> (TaskStore, Vec<Uuid>) {
        let mut store = TaskStore::new();
        let ids = texts.iter().map(|t| store.add(t).unwrap().id()).collect();
        (store, ids)
    }

    #[test]
    fn test_drag_onto_calendar_day_schedules() {
        let (mut store, ids) = store_with(&["write report", "call mom"]);
        let drop = DropResult::new(ids[0], list_at(0), Some(day_at(5, 0)));

        let mutation = apply_drop(&mut store, &drop);

        assert_eq!(mutation, Mutation::SetDueDate { id: ids[0], date: june(5) });
        assert_eq!(store.get(ids[0]).unwrap().due_date(), Some(june(5)));
        assert_eq!(store.get(ids[1]).unwrap().due_date(), None);
    }

    #[test]
    fn test_drag_back_to_list_unschedules() {
        let (mut store, ids) = store_with(&["write report"]);
        store.set_due_date(ids[0], june(5));
        let drop = DropResult::new(ids[0], day_at(5, 0), Some(list_at(3)));

        let mutation = apply_drop(&mut store, &drop);

        assert_eq!(mutation, Mutation::ClearDueDate { id: ids[0] });
        assert_eq!(store.get(ids[0]).unwrap().due_date(), None);
    }

    #[test]
    fn test_drag_between_days_reschedules() {
        let (mut store, ids) = store_with(&["write report"]);
        store.set_due_date(ids[0], june(5));
        let drop = DropResult::new(ids[0], day_at(5, 0), Some(day_at(7, 2)));

        apply_drop(&mut store, &drop);

        assert_eq!(store.get(ids[0]).unwrap().due_date(), Some(june(7)));
    }

    #[test]
    fn test_cancelled_drag_changes_nothing() {
        let (mut store, ids) = store_with(&["a", "b urgent"]);
        store.set_due_date(ids[1], june(5));
        let before = store.list().to_vec();

        let drop = DropResult::new(ids[0], list_at(1), None);
        assert_eq!(apply_drop(&mut store, &drop), Mutation::NoOp);
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_same_slot_drop_changes_nothing() {
        let (mut store, ids) = store_with(&["a", "b"]);
        store.set_due_date(ids[1], june(5));
        let before = store.list().to_vec();

        let on_list = DropResult::new(ids[0], list_at(0), Some(list_at(0)));
        let on_day = DropResult::new(ids[1], day_at(5, 0), Some(day_at(5, 0)));
        assert_eq!(apply_drop(&mut store, &on_list), Mutation::NoOp);
        assert_eq!(apply_drop(&mut store, &on_day), Mutation::NoOp);
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_reorder_within_list_is_noop() {
        let (mut store, ids) = store_with(&["a", "b", "c"]);
        let before = store.list().to_vec();

        let drop = DropResult::new(ids[0], list_at(0), Some(list_at(2)));
        assert_eq!(apply_drop(&mut store, &drop), Mutation::NoOp);
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_drop_on_same_day_at_other_index_schedules() {
        let (mut store, ids) = store_with(&["a", "b"]);
        store.set_due_date(ids[0], june(5));
        store.set_due_date(ids[1], june(7));

        // The gesture layer still thinks `b` sits on the 5th.
        let drop = DropResult::new(ids[1], day_at(5, 1), Some(day_at(5, 0)));
        assert_eq!(interpret_drop(&drop, store.list()), Mutation::SetDueDate { id: ids[1], date: june(5) });

        apply_drop(&mut store, &drop);
        assert_eq!(store.get(ids[1]).unwrap().due_date(), Some(june(5)));
    }

    #[test]
    fn test_drag_of_deleted_task_is_noop() {
        let (mut store, ids) = store_with(&["a", "b"]);
        store.delete(ids[0]);
        let before = store.list().to_vec();

        let drop = DropResult::new(ids[0], list_at(0), Some(day_at(5, 0)));
        assert_eq!(apply_drop(&mut store, &drop), Mutation::NoOp);
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_from_raw_ids() {
        let (mut store, ids) = store_with(&["a"]);
        let id = ids[0].to_string();

        let drop = DropResult::from_raw(&id, "unscheduled", 0, Some(("calendar-day-2024-06-05", 0)))
            .unwrap();
        assert_eq!(drop.destination, Some(day_at(5, 0)));
        apply_drop(&mut store, &drop);
        assert_eq!(store.get(ids[0]).unwrap().due_date(), Some(june(5)));
    }

    #[test]
    fn test_from_raw_unknown_destination_is_cancelled() {
        let (mut store, ids) = store_with(&["a"]);
        let id = ids[0].to_string();
        let before = store.list().to_vec();

        let drop = DropResult::from_raw(&id, "unscheduled", 0, Some(("trash-bin", 0))).unwrap();
        assert_eq!(drop.destination, None);
        assert_eq!(apply_drop(&mut store, &drop), Mutation::NoOp);
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_from_raw_rejects_bad_source() {
        let id = Uuid::new_v4().to_string();
        assert!(DropResult::from_raw(&id, "sidebar", 0, Some(("unscheduled", 0))).is_none());
        assert!(DropResult::from_raw("not-a-uuid", "unscheduled", 0, None).is_none());
    }

    #[test]
    fn test_raw_drop_with_bad_ids_is_noop() {
        let (mut store, ids) = store_with(&["a"]);
        let id = ids[0].to_string();
        let before = store.list().to_vec();

        let from_sidebar = apply_raw_drop(&mut store, &id, "sidebar", 0, Some(("calendar-day-2024-06-05", 0)));
        let bad_id = apply_raw_drop(&mut store, "not-a-uuid", "unscheduled", 0, Some(("calendar-day-2024-06-05", 0)));
        assert_eq!(from_sidebar, Mutation::NoOp);
        assert_eq!(bad_id, Mutation::NoOp);
        assert_eq!(store.list(), before.as_slice());

        let scheduled = apply_raw_drop(&mut store, &id, "unscheduled", 0, Some(("calendar-day-2024-06-05", 0)));
        assert_eq!(scheduled, Mutation::SetDueDate { id: ids[0], date: june(5) });
    }
}
