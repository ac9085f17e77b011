use blogsmith_core::{SearchHit, StateSchema};
use serde::{Deserialize, Serialize};

/// The record carried through one pipeline run.
///
/// Only `topic` is required up front; every other field is filled in by
/// the step that owns it and carried forward untouched afterwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogState {
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_results: Option<Vec<SearchHit>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_blog: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl BlogState {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Self::default()
        }
    }

    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = Some(feedback.into());
        self
    }

    pub fn with_final_blog(mut self, final_blog: impl Into<String>) -> Self {
        self.final_blog = Some(final_blog.into());
        self
    }
}

/// Partial write produced by a step. `None` leaves the field as it was.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_results: Option<Vec<SearchHit>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_blog: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl BlogUpdate {
    pub fn search_results(hits: Vec<SearchHit>) -> Self {
        Self {
            search_results: Some(hits),
            ..Self::default()
        }
    }

    pub fn summary(summary: impl Into<String>) -> Self {
        Self {
            summary: Some(summary.into()),
            ..Self::default()
        }
    }

    pub fn blog(blog: impl Into<String>) -> Self {
        Self {
            blog: Some(blog.into()),
            ..Self::default()
        }
    }

    pub fn final_blog(final_blog: impl Into<String>) -> Self {
        Self {
            final_blog: Some(final_blog.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl StateSchema for BlogState {
    type Update = BlogUpdate;

    fn apply(current: &Self, update: BlogUpdate) -> Self {
        let mut next = current.clone();
        if let Some(topic) = update.topic {
            next.topic = topic;
        }
        if update.search_results.is_some() {
            next.search_results = update.search_results;
        }
        if update.summary.is_some() {
            next.summary = update.summary;
        }
        if update.blog.is_some() {
            next.blog = update.blog;
        }
        if update.final_blog.is_some() {
            next.final_blog = update.final_blog;
        }
        if update.feedback.is_some() {
            next.feedback = update.feedback;
        }
        next
    }
}
