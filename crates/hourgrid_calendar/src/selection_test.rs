#[cfg(test)]
mod tests {
    use crate::error::CalendarError;
    use crate::grid::{build_week, HourSlot};
    use crate::selection::{Selection, SelectionMachine};
    use crate::test_support::{
        all_open, anchor, at, early_now, idx, monday_office_hours, slot_at, stamp, unavailable,
    };
    use hourgrid_common::HourRecord;
    use rust_decimal::Decimal;

    fn office_week() -> Vec<HourSlot> {
        build_week(anchor(), &monday_office_hours(anchor()))
    }

    /// Open every hour except Monday 12:00.
    fn week_with_gap() -> Vec<HourSlot> {
        let mut source = all_open(anchor());
        source.insert(slot_at(1, 12).naive_local(), unavailable());
        build_week(anchor(), &source)
    }

    /// Open every hour, with `record` at Monday `hour`.
    fn week_with(hour: usize, record: HourRecord) -> Vec<HourSlot> {
        let mut source = all_open(anchor());
        source.insert(slot_at(1, hour).naive_local(), record);
        build_week(anchor(), &source)
    }

    /// All-open week holding the autumn DST change, where 02:00 happens twice (slots 2 and 3).
    fn autumn_week() -> Vec<HourSlot> {
        let week_start = at(2030, 10, 27, 0);
        build_week(week_start, &all_open(week_start))
    }

    #[test]
    fn test_first_click_opens_a_range() {
        let slots = office_week();
        let mut machine = SelectionMachine::new();
        let change = machine.click(&slots, idx(1, 10), &early_now()).unwrap();

        assert_eq!(change.unwrap().range, format!("{}/", stamp(1, 10)));
        assert!(matches!(machine.selection(), Selection::Open { start } if start.index == idx(1, 10)));
    }

    #[test]
    fn test_later_reachable_click_closes_the_range() {
        let slots = office_week();
        let mut machine = SelectionMachine::new();
        machine.click(&slots, idx(1, 10), &early_now()).unwrap();
        let change = machine.click(&slots, idx(1, 14), &early_now()).unwrap();

        assert_eq!(
            change.unwrap().range,
            format!("{}/{}", stamp(1, 10), stamp(1, 14))
        );
        assert_eq!(machine.selection().indices(), (Some(idx(1, 10)), Some(idx(1, 14))));
    }

    #[test]
    fn test_earlier_click_restarts_the_range() {
        let slots = office_week();
        let mut machine = SelectionMachine::new();
        machine.click(&slots, idx(1, 12), &early_now()).unwrap();
        let change = machine.click(&slots, idx(1, 9), &early_now()).unwrap();

        assert_eq!(change.unwrap().range, format!("{}/", stamp(1, 9)));
        assert_eq!(machine.selection().indices(), (Some(idx(1, 9)), None));
    }

    #[test]
    fn test_clicking_the_open_start_again_changes_nothing() {
        let slots = office_week();
        let mut machine = SelectionMachine::new();
        machine.click(&slots, idx(1, 10), &early_now()).unwrap();
        let change = machine.click(&slots, idx(1, 10), &early_now()).unwrap();

        assert!(change.is_none());
        assert_eq!(machine.selection().indices(), (Some(idx(1, 10)), None));
    }

    #[test]
    fn test_range_cannot_span_an_unbookable_hour() {
        let slots = week_with_gap();
        let mut machine = SelectionMachine::new();
        machine.click(&slots, idx(1, 10), &early_now()).unwrap();

        assert!(!machine.is_unreachable(&slots, idx(1, 12)));
        assert!(machine.is_unreachable(&slots, idx(1, 13)));

        // The gap itself cannot be clicked.
        assert!(machine.click(&slots, idx(1, 12), &early_now()).unwrap().is_none());

        // Past the gap the range starts over instead of closing.
        let change = machine.click(&slots, idx(1, 13), &early_now()).unwrap();
        assert_eq!(change.unwrap().range, format!("{}/", stamp(1, 13)));
    }

    #[test]
    fn test_range_may_end_right_before_a_gap() {
        let slots = week_with_gap();
        let mut machine = SelectionMachine::new();
        machine.click(&slots, idx(1, 10), &early_now()).unwrap();
        machine.click(&slots, idx(1, 11), &early_now()).unwrap();
        assert_eq!(machine.selection().indices(), (Some(idx(1, 10)), Some(idx(1, 11))));
    }

    #[test]
    fn test_click_after_closed_range_starts_over() {
        let slots = office_week();
        let mut machine = SelectionMachine::new();
        machine.click(&slots, idx(1, 10), &early_now()).unwrap();
        machine.click(&slots, idx(1, 14), &early_now()).unwrap();
        let change = machine.click(&slots, idx(1, 15), &early_now()).unwrap();

        assert_eq!(change.unwrap().range, format!("{}/", stamp(1, 15)));
        assert!(machine.selection().end().is_none());
    }

    #[test]
    fn test_clicks_on_unbookable_or_past_slots_are_ignored() {
        let slots = office_week();
        let mut machine = SelectionMachine::new();

        // Tuesday is unavailable.
        assert!(machine.click(&slots, idx(2, 10), &early_now()).unwrap().is_none());
        assert!(machine.selection().is_empty());

        // Monday 10:00 is over by 11:00.
        let late = slot_at(1, 11);
        assert!(machine.click(&slots, idx(1, 10), &late).unwrap().is_none());
        assert!(machine.selection().is_empty());
        assert!(machine.click(&slots, idx(1, 12), &late).unwrap().is_some());
    }

    #[test]
    fn test_click_out_of_range_is_an_error() {
        let slots = office_week();
        let mut machine = SelectionMachine::new();
        assert_eq!(
            machine.click(&slots, 168, &early_now()),
            Err(CalendarError::SlotOutOfRange(168))
        );
        assert_eq!(machine.hover(500), Err(CalendarError::SlotOutOfRange(500)));
    }

    #[test]
    fn test_reset_reports_only_real_changes() {
        let slots = office_week();
        let mut machine = SelectionMachine::new();
        assert!(machine.reset().is_none());

        machine.click(&slots, idx(1, 10), &early_now()).unwrap();
        machine.hover(idx(1, 11)).unwrap();
        assert_eq!(machine.reset().unwrap().range, "/");
        assert!(machine.selection().is_empty());
        assert_eq!(machine.hovered(), None);
    }

    #[test]
    fn test_reset_silently() {
        let slots = office_week();
        let mut machine = SelectionMachine::new();
        machine.click(&slots, idx(1, 10), &early_now()).unwrap();
        machine.reset_silently();
        assert!(machine.selection().is_empty());
        assert_eq!(machine.selection().range(), "/");
    }

    #[test]
    fn test_nothing_is_unreachable_without_an_open_range() {
        let slots = week_with_gap();
        let machine = SelectionMachine::new();
        assert!((0..slots.len()).all(|i| !machine.is_unreachable(&slots, i)));
    }

    #[test]
    fn test_zero_priced_hour_is_not_clickable() {
        let mut source = all_open(anchor());
        source.insert(
            slot_at(1, 10).naive_local(),
            HourRecord::priced(Decimal::ZERO),
        );
        let slots = build_week(anchor(), &source);
        let mut machine = SelectionMachine::new();
        assert!(machine.click(&slots, idx(1, 10), &early_now()).unwrap().is_none());
    }

    #[test]
    fn test_from_indices() {
        let slots = office_week();
        assert_eq!(Selection::from_indices(&slots, None, None), Ok(Selection::Empty));

        let closed = Selection::from_indices(&slots, Some(idx(1, 10)), Some(idx(1, 14))).unwrap();
        assert_eq!(closed.range(), format!("{}/{}", stamp(1, 10), stamp(1, 14)));

        assert!(matches!(
            Selection::from_indices(&slots, None, Some(3)),
            Err(CalendarError::InvalidSelection(_))
        ));
        assert!(matches!(
            Selection::from_indices(&slots, Some(10), Some(10)),
            Err(CalendarError::InvalidSelection(_))
        ));
        assert_eq!(
            Selection::from_indices(&slots, Some(170), None),
            Err(CalendarError::SlotOutOfRange(170))
        );
    }

    #[test]
    fn test_booked_hour_in_between_restarts_the_range() {
        let booked = HourRecord {
            booked: true,
            ..HourRecord::priced(Decimal::from(50))
        };
        let slots = week_with(12, booked);
        let mut machine = SelectionMachine::new();
        machine.click(&slots, idx(1, 10), &early_now()).unwrap();
        assert!(machine.is_unreachable(&slots, idx(1, 14)));

        let change = machine.click(&slots, idx(1, 14), &early_now()).unwrap();
        assert_eq!(change.unwrap().range, format!("{}/", stamp(1, 14)));
        assert_eq!(machine.selection().indices(), (Some(idx(1, 14)), None));
    }

    #[test]
    fn test_non_working_hour_in_between_restarts_the_range() {
        let evening = HourRecord {
            non_working_hour: true,
            ..HourRecord::priced(Decimal::from(50))
        };
        let slots = week_with(20, evening);
        let mut machine = SelectionMachine::new();
        machine.click(&slots, idx(1, 18), &early_now()).unwrap();
        assert!(machine.click(&slots, idx(1, 20), &early_now()).unwrap().is_none());

        machine.click(&slots, idx(1, 22), &early_now()).unwrap();
        assert_eq!(machine.selection().indices(), (Some(idx(1, 22)), None));
    }

    #[test]
    fn test_custom_priced_non_working_hour_can_be_spanned() {
        let evening = HourRecord {
            non_working_hour: true,
            custom_price: true,
            ..HourRecord::priced(Decimal::from(80))
        };
        let slots = week_with(20, evening);
        let mut machine = SelectionMachine::new();
        machine.click(&slots, idx(1, 18), &early_now()).unwrap();
        assert!(!machine.is_unreachable(&slots, idx(1, 22)));

        let change = machine.click(&slots, idx(1, 22), &early_now()).unwrap();
        assert_eq!(change.unwrap().range, format!("{}/{}", stamp(1, 18), stamp(1, 22)));
        assert_eq!(machine.selection().indices(), (Some(idx(1, 18)), Some(idx(1, 22))));
    }

    #[test]
    fn test_repeated_dst_hour_does_not_close_the_range() {
        let slots = autumn_week();
        let now = at(2020, 1, 1, 0);
        let mut machine = SelectionMachine::new();
        machine.click(&slots, 2, &now).unwrap();

        // Second 02:00 is later as an instant only.
        let change = machine.click(&slots, 3, &now).unwrap();
        assert_eq!(change.unwrap().range, "2030-10-27T02:00:00/");
        assert_eq!(machine.selection().indices(), (Some(3), None));

        let change = machine.click(&slots, 4, &now).unwrap();
        assert_eq!(change.unwrap().range, "2030-10-27T02:00:00/2030-10-27T03:00:00");
    }

    #[test]
    fn test_from_indices_rejects_a_repeated_dst_hour() {
        let slots = autumn_week();
        assert!(matches!(
            Selection::from_indices(&slots, Some(2), Some(3)),
            Err(CalendarError::InvalidSelection(_))
        ));
        assert!(Selection::from_indices(&slots, Some(1), Some(3)).is_ok());
    }
}
