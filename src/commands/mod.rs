//! Command implementations

pub mod batch;
pub mod curate;
pub mod lookup;
pub mod rank;
pub mod solve;

pub use batch::{BatchConfig, BatchMode, BatchStatistics, RollReport, run_batch};
pub use curate::{CurationCandidate, curation_candidates};
pub use lookup::{LookupConfig, LookupReport, run_lookup};
pub use rank::{TemplateRank, rank_templates, ranked_library};
pub use solve::{SolveConfig, SolveResult, TemplateAttempt, solve_roll, solve_roll_in_order};
