//! Property-Based Tests for the Playlist Module
//!
//! Uses proptest to verify the idempotence, convergence, and ordering
//! guarantees of insertion and eviction, plus extraction ordering.

use std::sync::Arc;

use proptest::prelude::*;
use tokio::runtime::Runtime;

use crate::extract::extract_track_ids;
use crate::playlist::testutil::{test_limits, FakePlaylist};
use crate::playlist::{EvictionResult, InsertResult, Mutator, TrackId};

// == Strategies ==
/// Generates bare base62 track ids as they appear in shared links.
fn base62_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{4,22}"
}

/// Generates id sequences from a small pool so duplicates occur often.
fn id_sequence_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(
        prop::sample::select(vec!["a1", "b2", "c3", "d4", "e5", "f6"]),
        1..25,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // Idempotence: inserting the same id twice yields exactly one membership
    // entry and exactly one add call.
    #[test]
    fn prop_insert_idempotent(raw in base62_strategy()) {
        let rt = Runtime::new().expect("tokio runtime");
        rt.block_on(async {
            let service = Arc::new(FakePlaylist::new());
            let (_dir, limits) = test_limits(10);
            let mutator = Mutator::new(service.clone(), limits);
            let id = TrackId::from_base62(&raw);

            prop_assert_eq!(mutator.insert(&id).await.unwrap(), InsertResult::Added);
            prop_assert_eq!(
                mutator.insert(&id).await.unwrap(),
                InsertResult::AlreadyPresent
            );
            prop_assert_eq!(service.len(), 1);
            prop_assert_eq!(service.add_calls(), 1);
            Ok(())
        })?;
    }

    // Capacity convergence: after every insert is followed by one
    // enforce_capacity call, final membership never exceeds the limit.
    #[test]
    fn prop_capacity_convergence(ids in id_sequence_strategy(), limit in 1usize..5) {
        let rt = Runtime::new().expect("tokio runtime");
        rt.block_on(async {
            let service = Arc::new(FakePlaylist::new());
            let (_dir, limits) = test_limits(limit);
            let mutator = Mutator::new(service.clone(), limits);

            for raw in &ids {
                let id = TrackId::from_base62(raw);
                if mutator.insert(&id).await.unwrap() == InsertResult::Added {
                    mutator.enforce_capacity().await.unwrap();
                }
            }

            prop_assert!(service.len() <= limit);
            Ok(())
        })?;
    }

    // Oldest-first: with distinct added_at values, eviction removes the
    // entry with the minimum timestamp, which is the first one seeded.
    #[test]
    fn prop_oldest_first_eviction((size, limit) in (2usize..10).prop_flat_map(|n| (Just(n), 1..n))) {
        let rt = Runtime::new().expect("tokio runtime");
        rt.block_on(async {
            let service = Arc::new(FakePlaylist::new());
            let ids: Vec<String> = (0..size).map(|n| format!("seed{}", n)).collect();
            let refs: Vec<&str> = ids.iter().map(|s| s.as_str()).collect();
            service.seed(&refs);

            let (_dir, limits) = test_limits(limit);
            let mutator = Mutator::new(service.clone(), limits);

            let result = mutator.enforce_capacity().await.unwrap();
            prop_assert_eq!(result, EvictionResult::Evicted(TrackId::from_base62("seed0")));
            prop_assert_eq!(service.len(), size - 1);
            Ok(())
        })?;
    }

    // Extraction preserves appearance order, duplicates included.
    #[test]
    fn prop_extraction_order(ids in prop::collection::vec(base62_strategy(), 1..10)) {
        let text = ids
            .iter()
            .map(|id| format!("listen https://open.spotify.com/track/{}", id))
            .collect::<Vec<_>>()
            .join(" and ");

        let extracted = extract_track_ids(&text);
        let expected: Vec<TrackId> = ids.iter().map(|id| TrackId::from_base62(id)).collect();
        prop_assert_eq!(extracted, expected);
    }

    // Extraction never errors or panics, whatever the input.
    #[test]
    fn prop_extraction_total(text in ".{0,256}") {
        let _ = extract_track_ids(&text);
    }
}
