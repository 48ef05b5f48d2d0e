#[cfg(test)]
mod tests {
    use crate::classify::{classify_week, SlotClass};
    use crate::grid::{build_week, SLOTS_PER_WEEK};
    use crate::selection::{Selection, SelectionMachine};
    use crate::test_support::{anchor, early_now};
    use crate::InMemoryAvailability;
    use chrono::Duration;
    use hourgrid_common::HourRecord;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    // Random availability: each hour is missing, bookable, unavailable, booked, a plain
    // non-working hour, or a non-working hour opened up by a custom price.
    fn source_from(kinds: &[u8]) -> InMemoryAvailability {
        let mut source = InMemoryAvailability::new();
        for (offset, kind) in kinds.iter().enumerate() {
            let local = (anchor() + Duration::hours(offset as i64)).naive_local();
            let priced = HourRecord::priced(Decimal::from(100));
            let record = match kind % 6 {
                0 => continue,
                1 => priced,
                2 => HourRecord {
                    unavailable: true,
                    ..HourRecord::default()
                },
                3 => HourRecord {
                    booked: true,
                    ..priced
                },
                4 => HourRecord {
                    non_working_hour: true,
                    ..priced
                },
                _ => HourRecord {
                    non_working_hour: true,
                    custom_price: true,
                    ..priced
                },
            };
            source.insert(local, record);
        }
        source
    }

    proptest! {
        // Slots are strictly increasing in time and positionally indexed.
        #[test]
        fn test_grid_is_ordered(week in 0i64..104) {
            let start = anchor() + Duration::weeks(week);
            let slots = build_week(start, &InMemoryAvailability::new());
            prop_assert_eq!(slots.len(), SLOTS_PER_WEEK);
            for (i, pair) in slots.windows(2).enumerate() {
                prop_assert_eq!(pair[0].index, i);
                prop_assert!(pair[0].starts_at < pair[1].starts_at);
            }
        }

        // Every slot before "now" is classified as past, whatever else it is.
        #[test]
        fn test_past_slots_are_in_past(
            kinds in prop::collection::vec(any::<u8>(), SLOTS_PER_WEEK),
            now_offset in 0i64..SLOTS_PER_WEEK as i64,
        ) {
            let slots = build_week(anchor(), &source_from(&kinds));
            let now = anchor() + Duration::hours(now_offset);
            let classes = classify_week(&slots, &SelectionMachine::new(), &now, true);
            for (slot, class) in slots.iter().zip(&classes) {
                if slot.starts_at < now && slot.record.is_some() {
                    prop_assert_eq!(*class, SlotClass::InPast);
                }
                if slot.record.is_none() {
                    prop_assert_eq!(*class, SlotClass::Empty);
                }
            }
        }

        // Any click sequence leaves a well-formed selection whose closed span is fully bookable.
        #[test]
        fn test_random_clicks_keep_selection_consistent(
            kinds in prop::collection::vec(any::<u8>(), SLOTS_PER_WEEK),
            clicks in prop::collection::vec(0usize..SLOTS_PER_WEEK, 1..30),
        ) {
            let slots = build_week(anchor(), &source_from(&kinds));
            let now = early_now();
            let mut machine = SelectionMachine::new();
            for index in clicks {
                let before = *machine.selection();
                let change = machine.click(&slots, index, &now).unwrap();
                prop_assert_eq!(change.is_some(), before.timestamps() != machine.selection().timestamps());

                match *machine.selection() {
                    Selection::Empty => {}
                    Selection::Open { start } => {
                        prop_assert!(slots[start.index].is_selectable(&now));
                    }
                    Selection::Closed { start, end } => {
                        prop_assert!(end.is_after(&start));
                        prop_assert!(slots[start.index..end.index].iter().all(|s| s.is_bookable()));
                        prop_assert!(slots[end.index].is_bookable());
                    }
                }
            }
        }
    }
}
