use super::{GraphState, StateSchema, StateUpdate};
use serde::{Deserialize, Serialize};

#[derive(Clone, Default, Debug, Serialize, Deserialize, PartialEq)]
struct DraftState {
    title: String,
    body: Option<String>,
}

#[derive(Clone, Default, Debug, Serialize, Deserialize, PartialEq)]
struct DraftPatch {
    title: Option<String>,
    body: Option<String>,
}

impl StateSchema for DraftState {
    type Update = DraftPatch;

    fn apply(current: &Self, update: Self::Update) -> Self {
        Self {
            title: update.title.unwrap_or_else(|| current.title.clone()),
            body: update.body.or_else(|| current.body.clone()),
        }
    }
}

#[test]
fn partial_patch_keeps_untouched_fields() {
    let initial = DraftState {
        title: "ownership".to_string(),
        body: None,
    };

    let next = DraftState::apply(
        &initial,
        DraftPatch {
            title: None,
            body: Some("borrowing".to_string()),
        },
    );

    assert_eq!(next.title, "ownership");
    assert_eq!(next.body.as_deref(), Some("borrowing"));
}

#[test]
fn empty_patch_is_identity() {
    let initial = DraftState {
        title: "ownership".to_string(),
        body: Some("borrowing".to_string()),
    };

    let next = DraftState::apply(&initial, DraftPatch::default());
    assert_eq!(next, initial);
}

#[test]
fn graph_state_applies_update_through_schema() {
    let state = GraphState::new(DraftState {
        title: "a".to_string(),
        body: Some("b".to_string()),
    });
    let next = state.apply_update(StateUpdate::new(DraftPatch {
        title: Some("c".to_string()),
        body: None,
    }));

    assert_eq!(next.data.title, "c");
    assert_eq!(next.data.body.as_deref(), Some("b"));
}
