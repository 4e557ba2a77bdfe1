//! Deduplication and tag-merging of per-objective route results.
//!
//! The backend answers one search with up to one candidate per objective,
//! and two objectives may resolve to the same physical path. Showing that
//! path twice would waste a card, so candidates sharing a route identifier
//! collapse into one [`MergedRoute`] carrying every applicable objective
//! badge.

use gil_transit::identifiers::RouteIdentifier;
use indexmap::IndexMap;
use indexmap::map::Entry;

use super::types::{CandidateRoute, MergedRoute};

/// Merge key. Identity is the backend-supplied route identifier and nothing
/// else: no structural comparison of segments is attempted, so the contract
/// only holds if the backend assigns identical ids to identical paths.
/// Candidates without an identifier each get a fresh counter value and
/// therefore never merge with anything.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum MergeKey {
    Identified(RouteIdentifier),
    Unidentified(usize),
}

/// Collapse per-objective candidates into an ordered list of distinct routes.
///
/// Candidates are processed in input order, which defines output order: a
/// route's position is fixed by the first objective that produced it. The
/// first-seen candidate's field values win; a later candidate with the same
/// identifier contributes only its objective tag, not its measurements.
/// That is a deliberate trade-off — duplicates are expected to differ at
/// most by rounding, and one card showing one consistent set of numbers
/// beats stitching fields from several responses.
///
/// Never fails: any number of candidates (including zero) yields a valid,
/// possibly empty list.
pub fn merge_candidates<I>(candidates: I) -> Vec<MergedRoute>
where
    I: IntoIterator<Item = CandidateRoute>,
{
    let mut merged: IndexMap<MergeKey, MergedRoute> = IndexMap::new();
    let mut unidentified = 0usize;

    for candidate in candidates {
        let key = match &candidate.route.route_id {
            Some(id) => MergeKey::Identified(id.clone()),
            None => {
                unidentified += 1;
                MergeKey::Unidentified(unidentified)
            }
        };

        match merged.entry(key) {
            Entry::Occupied(mut entry) => entry.get_mut().add_objective(candidate.objective),
            Entry::Vacant(entry) => {
                entry.insert(MergedRoute::seeded(candidate));
            }
        }
    }

    merged.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::types::{Congestion, RouteObjective, RouteSummary};

    fn summary(route_id: Option<&str>, total_time_min: u32) -> RouteSummary {
        RouteSummary {
            route_id: route_id.map(RouteIdentifier::new),
            total_time_min,
            total_walk_time_min: 5,
            transfer_count: 1,
            congestion: Congestion::Medium,
            fare: Some(1450),
            total_distance_km: None,
            arrival_estimate: None,
            segments: Vec::new(),
        }
    }

    fn candidate(objective: RouteObjective, route_id: Option<&str>) -> CandidateRoute {
        CandidateRoute::new(objective, summary(route_id, 30))
    }

    #[test]
    fn test_shared_id_merges_tags() {
        let merged = merge_candidates(vec![
            candidate(RouteObjective::MinCrowding, Some("A")),
            candidate(RouteObjective::MinTime, Some("A")),
            candidate(RouteObjective::MinWalking, Some("B")),
        ]);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].route().route_id, Some(RouteIdentifier::new("A")));
        assert_eq!(
            merged[0].objectives(),
            &[RouteObjective::MinCrowding, RouteObjective::MinTime]
        );
        assert_eq!(merged[1].route().route_id, Some(RouteIdentifier::new("B")));
        assert_eq!(merged[1].objectives(), &[RouteObjective::MinWalking]);
    }

    #[test]
    fn test_all_three_collapse_to_one() {
        let merged = merge_candidates(vec![
            candidate(RouteObjective::MinCrowding, Some("Z")),
            candidate(RouteObjective::MinTime, Some("Z")),
            candidate(RouteObjective::MinWalking, Some("Z")),
        ]);

        assert_eq!(merged.len(), 1);
        assert_eq!(
            merged[0].objectives(),
            &[
                RouteObjective::MinCrowding,
                RouteObjective::MinTime,
                RouteObjective::MinWalking,
            ]
        );
    }

    #[test]
    fn test_distinct_ids_never_merge() {
        let merged = merge_candidates(vec![
            candidate(RouteObjective::MinCrowding, Some("X")),
            candidate(RouteObjective::MinTime, Some("Y")),
            candidate(RouteObjective::MinWalking, Some("Z")),
        ]);

        assert_eq!(merged.len(), 3);
        for entry in &merged {
            assert_eq!(entry.objectives().len(), 1);
        }
    }

    #[test]
    fn test_no_tag_lost_or_invented() {
        let input = vec![
            candidate(RouteObjective::MinCrowding, Some("A")),
            candidate(RouteObjective::MinTime, Some("B")),
            candidate(RouteObjective::MinWalking, Some("A")),
        ];
        let merged = merge_candidates(input);

        let all_tags: Vec<RouteObjective> = merged
            .iter()
            .flat_map(|m| m.objectives().iter().copied())
            .collect();
        assert_eq!(
            all_tags,
            vec![
                RouteObjective::MinCrowding,
                RouteObjective::MinWalking,
                RouteObjective::MinTime,
            ]
        );
    }

    #[test]
    fn test_first_seen_data_wins() {
        // Same id, durations differing by rounding: the first candidate's
        // numbers survive, the second contributes only its tag.
        let merged = merge_candidates(vec![
            CandidateRoute::new(RouteObjective::MinCrowding, summary(Some("A"), 30)),
            CandidateRoute::new(RouteObjective::MinTime, summary(Some("A"), 29)),
        ]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].route().total_time_min, 30);
        assert!(merged[0].has_objective(RouteObjective::MinTime));
    }

    #[test]
    fn test_missing_ids_stay_distinct() {
        let merged = merge_candidates(vec![
            candidate(RouteObjective::MinCrowding, None),
            candidate(RouteObjective::MinTime, None),
        ]);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].objectives(), &[RouteObjective::MinCrowding]);
        assert_eq!(merged[1].objectives(), &[RouteObjective::MinTime]);
    }

    #[test]
    fn test_duplicate_tag_not_added_twice() {
        let merged = merge_candidates(vec![
            candidate(RouteObjective::MinTime, Some("A")),
            candidate(RouteObjective::MinTime, Some("A")),
        ]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].objectives(), &[RouteObjective::MinTime]);
    }

    #[test]
    fn test_order_is_stable_across_runs() {
        let input = || {
            vec![
                candidate(RouteObjective::MinCrowding, Some("B")),
                candidate(RouteObjective::MinTime, Some("A")),
                candidate(RouteObjective::MinWalking, Some("B")),
            ]
        };

        let first = merge_candidates(input());
        let second = merge_candidates(input());
        assert_eq!(first, second);

        // First-seen order, not identifier order.
        assert_eq!(first[0].route().route_id, Some(RouteIdentifier::new("B")));
        assert_eq!(first[1].route().route_id, Some(RouteIdentifier::new("A")));
    }

    #[test]
    fn test_tolerates_fewer_candidates_and_empty_input() {
        assert!(merge_candidates(Vec::new()).is_empty());

        let merged = merge_candidates(vec![candidate(RouteObjective::MinWalking, Some("A"))]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].primary_objective(), RouteObjective::MinWalking);
    }
}
