//! Property-based tests for the fetch reducer and machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated event sequences.

use hitlist::client::FetchError;
use hitlist::core::{FetchPhase, Record, RecordId};
use hitlist::fetch::{reduce, FetchEvent, FetchMachine, FetchState, Settlement};
use proptest::prelude::*;
use std::collections::HashSet;

fn record(id: u8) -> Record {
    Record {
        id: RecordId::from(u64::from(id)),
        title: format!("story {id}"),
        url: format!("https://example.com/{id}"),
        author: "author".to_string(),
        comment_count: u64::from(id),
        score: i64::from(id),
    }
}

prop_compose! {
    fn arbitrary_records()(ids in prop::collection::hash_set(0..50u8, 0..12)) -> Vec<Record> {
        ids.into_iter().map(record).collect()
    }
}

fn arbitrary_event() -> impl Strategy<Value = FetchEvent> {
    prop_oneof![
        Just(FetchEvent::FetchInit),
        arbitrary_records().prop_map(FetchEvent::FetchSuccess),
        Just(FetchEvent::FetchFailure),
        (0..50u8).prop_map(|id| FetchEvent::RemoveRecord(RecordId::from(u64::from(id)))),
    ]
}

fn loaded(records: Vec<Record>) -> FetchState {
    reduce(
        reduce(FetchState::new(), FetchEvent::FetchInit),
        FetchEvent::FetchSuccess(records),
    )
}

proptest! {
    #[test]
    fn removals_drop_ids_and_keep_order(
        records in arbitrary_records(),
        removals in prop::collection::vec(0..50u8, 0..20)
    ) {
        let mut state = loaded(records.clone());
        for id in &removals {
            state = reduce(state, FetchEvent::RemoveRecord(RecordId::from(u64::from(*id))));
        }

        let removed: HashSet<RecordId> =
            removals.iter().map(|id| RecordId::from(u64::from(*id))).collect();
        let expected: Vec<Record> =
            records.into_iter().filter(|r| !removed.contains(&r.id)).collect();

        prop_assert_eq!(state.records(), expected.as_slice());
    }

    #[test]
    fn loading_and_error_never_both_true(
        events in prop::collection::vec(arbitrary_event(), 0..40)
    ) {
        let mut state = FetchState::new();
        for event in events {
            state = reduce(state, event);
            prop_assert!(!(state.is_loading() && state.is_error()));
        }
    }

    #[test]
    fn terminal_events_set_flags(
        records in arbitrary_records(),
        prefix in prop::collection::vec(arbitrary_event(), 0..10)
    ) {
        let mut state = FetchState::new();
        for event in prefix {
            state = reduce(state, event);
        }
        let loading = reduce(state, FetchEvent::FetchInit);

        let succeeded = reduce(loading.clone(), FetchEvent::FetchSuccess(records.clone()));
        prop_assert!(!succeeded.is_loading());
        prop_assert!(!succeeded.is_error());
        prop_assert_eq!(succeeded.records(), records.as_slice());

        let failed = reduce(loading.clone(), FetchEvent::FetchFailure);
        prop_assert!(!failed.is_loading());
        prop_assert!(failed.is_error());
        prop_assert_eq!(failed.records(), loading.records());
    }

    #[test]
    fn init_never_touches_records(events in prop::collection::vec(arbitrary_event(), 0..20)) {
        let mut state = FetchState::new();
        for event in events {
            state = reduce(state, event);
        }
        let before = state.records().to_vec();
        let after = reduce(state, FetchEvent::FetchInit);

        prop_assert_eq!(after.phase(), FetchPhase::Loading);
        prop_assert_eq!(after.records(), before.as_slice());
    }

    #[test]
    fn only_latest_cycle_is_applied(
        payloads in prop::collection::vec(arbitrary_records(), 1..6),
        order in any::<u64>()
    ) {
        let mut machine = FetchMachine::new();
        let tags: Vec<u64> = payloads.iter().map(|_| machine.begin()).collect();
        let latest = *tags.last().unwrap();

        // settle every cycle in a scrambled order
        let mut pending: Vec<(u64, Vec<Record>)> =
            tags.iter().copied().zip(payloads.iter().cloned()).collect();
        let mut seed = order;
        while !pending.is_empty() {
            let index = (seed % pending.len() as u64) as usize;
            seed = seed.rotate_left(7) ^ 0x9e37_79b9_7f4a_7c15;
            let (tag, records) = pending.remove(index);

            let settlement = machine.settle(tag, Ok(records));
            if tag == latest {
                prop_assert!(settlement.is_applied());
            } else {
                let is_stale = matches!(settlement, Settlement::Stale { .. });
                prop_assert!(is_stale);
            }
        }

        prop_assert_eq!(machine.state().records(), payloads.last().unwrap().as_slice());
        prop_assert_eq!(machine.state().phase(), FetchPhase::Success);
    }

    #[test]
    fn stale_failures_never_raise_error(payload in arbitrary_records()) {
        let mut machine = FetchMachine::new();
        let old = machine.begin();
        let new = machine.begin();

        machine.settle(new, Ok(payload.clone()));
        machine.settle(old, Err(FetchError::Timeout));

        prop_assert!(!machine.state().is_error());
        prop_assert_eq!(machine.state().records(), payload.as_slice());
    }
}
