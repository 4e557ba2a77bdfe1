//! Route data model: objectives, segments, candidates, merged results.

use chrono::{DateTime, Utc};
use gil_transit::identifiers::RouteIdentifier;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Why a candidate route was produced.
///
/// Variant order is the stable presentation priority (crowding, time,
/// walking) and drives the order in which candidates are fed to the
/// aggregator, so merged-tag order is reproducible across runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum RouteObjective {
    MinCrowding,
    MinTime,
    MinWalking,
}

impl RouteObjective {
    /// Wire key, as used by the route-search backend.
    pub fn key(&self) -> &'static str {
        match self {
            Self::MinCrowding => "min_crowding",
            Self::MinTime => "min_time",
            Self::MinWalking => "min_walking",
        }
    }

    /// Badge label shown on a route card.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MinCrowding => "덜 붐빔",
            Self::MinTime => "최단 시간",
            Self::MinWalking => "최소 도보",
        }
    }
}

/// Congestion descriptor for a route or a single segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Congestion {
    Low,
    Medium,
    High,
}

impl Congestion {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "여유",
            Self::Medium => "보통",
            Self::High => "혼잡",
        }
    }
}

/// How one leg of an itinerary is travelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentMode {
    Subway,
    Transfer,
    Walk,
}

/// One leg of an itinerary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    pub mode: SegmentMode,
    /// Line label for subway legs; walks and transfers carry none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    pub from: String,
    pub to: String,
    #[serde(rename = "duration")]
    pub duration_min: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub congestion: Option<Congestion>,
}

/// The route payload the backend computes for one objective.
///
/// `route_id` is assumed stable across objectives: two objectives resolving
/// to the same physical path carry the same identifier. The backend does not
/// guarantee presence, so it stays optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_id: Option<RouteIdentifier>,
    #[serde(rename = "total_time")]
    pub total_time_min: u32,
    #[serde(rename = "total_walk_time", default)]
    pub total_walk_time_min: u32,
    #[serde(default)]
    pub transfer_count: u32,
    #[serde(rename = "congestion_status")]
    pub congestion: Congestion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fare: Option<u32>,
    #[serde(rename = "total_distance", default, skip_serializing_if = "Option::is_none")]
    pub total_distance_km: Option<f64>,
    #[serde(rename = "arrival_time", default, skip_serializing_if = "Option::is_none")]
    pub arrival_estimate: Option<DateTime<Utc>>,
    #[serde(default)]
    pub segments: Vec<RouteSegment>,
}

/// The raw result for one objective: a route payload tagged with the
/// objective that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateRoute {
    pub objective: RouteObjective,
    pub route: RouteSummary,
}

impl CandidateRoute {
    pub fn new(objective: RouteObjective, route: RouteSummary) -> Self {
        Self { objective, route }
    }
}

/// A deduplicated route card: one route payload plus every objective whose
/// candidate resolved to it.
///
/// Invariants (upheld by construction, hence the private fields):
/// `objectives` is never empty, contains no duplicates, and its first entry
/// is the objective of the candidate that seeded the route data.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MergedRoute {
    #[serde(flatten)]
    route: RouteSummary,
    objectives: Vec<RouteObjective>,
}

impl MergedRoute {
    pub(crate) fn seeded(candidate: CandidateRoute) -> Self {
        Self {
            route: candidate.route,
            objectives: vec![candidate.objective],
        }
    }

    /// Record another objective that resolved to this route. Set semantics:
    /// an objective already present is not added twice.
    pub(crate) fn add_objective(&mut self, objective: RouteObjective) {
        if !self.objectives.contains(&objective) {
            self.objectives.push(objective);
        }
    }

    pub fn route(&self) -> &RouteSummary {
        &self.route
    }

    /// Objectives in encounter order, duplicates suppressed.
    pub fn objectives(&self) -> &[RouteObjective] {
        &self.objectives
    }

    /// The objective whose candidate supplied this route's data.
    pub fn primary_objective(&self) -> RouteObjective {
        self.objectives[0]
    }

    pub fn has_objective(&self, objective: RouteObjective) -> bool {
        self.objectives.contains(&objective)
    }
}
