//! Prompt templates sent to the language model.

pub const GENERATE_PROMPT: &str = "Write a detailed blog post on \"{{topic}}\" using the information below:\n\n{{summary}}\n\nThe blog should be engaging, informative, and structured with headings and subheadings.";

pub const REFINE_PROMPT: &str =
    "Refine the following blog with the following feedback: {{feedback}}:\n\n{{final_blog}}";

/// Summary used when the search produced nothing to summarize.
pub const NO_RESULTS_SUMMARY: &str = "No relevant information available.";

/// Feedback must contain this word (any case) to trigger a rewrite.
pub const IMPROVE_KEYWORD: &str = "improve";
