//! The five pipeline steps. Each reads the fields it needs from
//! [`BlogState`](crate::BlogState) and returns a [`BlogUpdate`](crate::BlogUpdate)
//! with only the fields it owns.
mod feedback;
mod generate;
mod review;
mod search;
mod summarize;

pub use feedback::FeedbackNode;
pub use generate::GenerateNode;
pub use review::ReviewNode;
pub use search::SearchNode;
pub use summarize::SummarizeNode;

pub const SEARCH: &str = "search";
pub const SUMMARIZE: &str = "summarize";
pub const GENERATE: &str = "generate";
pub const REVIEW: &str = "review";
pub const COLLECT_FEEDBACK: &str = "collect_feedback";

/// Execution order of the linear workflow.
pub const STEP_ORDER: [&str; 5] = [SEARCH, SUMMARIZE, GENERATE, REVIEW, COLLECT_FEEDBACK];
