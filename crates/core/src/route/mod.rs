//! Route data model and result aggregation.

pub mod aggregator;
pub mod types;

pub use aggregator::merge_candidates;
pub use types::{
    CandidateRoute, Congestion, MergedRoute, RouteObjective, RouteSegment, RouteSummary,
    SegmentMode,
};
