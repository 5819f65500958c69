// Phase orchestration.
//
// Each phase is a batch `run()` that either completes or fails outright —
// no retries, no partial recovery. The similarity phase owns the graph
// while building it; the grouping phase owns its own loaded copy.

pub mod grouping;
pub mod similarity;
