//! Wire types for the route-search backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::route::types::{CandidateRoute, RouteObjective, RouteSummary};

/// One search request: a station pair plus the moment the user searched,
/// which the backend uses to pick the departure window.
#[derive(Clone, Debug, Serialize)]
pub struct RouteSearchRequest {
    pub from_station: String,
    pub to_station: String,
    pub searched_time: DateTime<Utc>,
}

impl RouteSearchRequest {
    pub fn now(from_station: impl Into<String>, to_station: impl Into<String>) -> Self {
        Self {
            from_station: from_station.into(),
            to_station: to_station.into(),
            searched_time: Utc::now(),
        }
    }
}

/// One response carries up to one route per objective. Any objective may be
/// absent; the backend omits the key when it found nothing for it.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RouteSearchResponse {
    #[serde(default)]
    pub min_crowding: Option<RouteSummary>,
    #[serde(default)]
    pub min_time: Option<RouteSummary>,
    #[serde(default)]
    pub min_walking: Option<RouteSummary>,
}

impl RouteSearchResponse {
    /// Tag each present route with its objective, in the fixed priority
    /// order (crowding, time, walking) so downstream merging is
    /// reproducible.
    pub fn into_candidates(self) -> Vec<CandidateRoute> {
        let Self {
            min_crowding,
            min_time,
            min_walking,
        } = self;

        RouteObjective::iter()
            .zip([min_crowding, min_time, min_walking])
            .filter_map(|(objective, route)| route.map(|route| CandidateRoute::new(objective, route)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::types::Congestion;

    fn summary(id: &str) -> RouteSummary {
        RouteSummary {
            route_id: Some(id.into()),
            total_time_min: 35,
            total_walk_time_min: 6,
            transfer_count: 1,
            congestion: Congestion::Low,
            fare: None,
            total_distance_km: None,
            arrival_estimate: None,
            segments: Vec::new(),
        }
    }

    #[test]
    fn test_candidates_follow_priority_order() {
        let response = RouteSearchResponse {
            min_crowding: Some(summary("c")),
            min_time: Some(summary("t")),
            min_walking: Some(summary("w")),
        };

        let objectives: Vec<RouteObjective> = response
            .into_candidates()
            .into_iter()
            .map(|c| c.objective)
            .collect();
        assert_eq!(
            objectives,
            vec![
                RouteObjective::MinCrowding,
                RouteObjective::MinTime,
                RouteObjective::MinWalking,
            ]
        );
    }

    #[test]
    fn test_missing_objectives_are_tolerated() {
        let response = RouteSearchResponse {
            min_time: Some(summary("t")),
            ..Default::default()
        };

        let candidates = response.into_candidates();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].objective, RouteObjective::MinTime);

        assert!(RouteSearchResponse::default().into_candidates().is_empty());
    }

    #[test]
    fn test_response_parses_backend_payload() {
        let response: RouteSearchResponse = serde_json::from_str(
            r#"{
                "min_time": { "route_id": "r2", "total_time": 35, "congestion_status": "high" },
                "min_crowding": { "route_id": "r1", "total_time": 42, "congestion_status": "low" }
            }"#,
        )
        .unwrap();

        let candidates = response.into_candidates();
        assert_eq!(candidates.len(), 2);
        // Priority order, not JSON key order.
        assert_eq!(candidates[0].objective, RouteObjective::MinCrowding);
        assert_eq!(candidates[1].objective, RouteObjective::MinTime);
    }

    #[test]
    fn test_request_serializes_station_pair() {
        let request = RouteSearchRequest::now("강남", "잠실");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["from_station"], "강남");
        assert_eq!(json["to_station"], "잠실");
        assert!(json["searched_time"].is_string());
    }
}
