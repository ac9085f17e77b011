use blogsmith_core::BlogsmithError;
use blogsmith_graph::{
    GraphBuilder, GraphContext, GraphNode, GraphState, StateSchema, StateUpdate, END,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Default, Debug, Serialize, Deserialize, PartialEq)]
struct TrailState {
    visited: Vec<String>,
    note: Option<String>,
}

#[derive(Clone, Default, Debug, Serialize, Deserialize, PartialEq)]
struct TrailUpdate {
    visit: Option<String>,
    note: Option<String>,
}

impl StateSchema for TrailState {
    type Update = TrailUpdate;

    fn apply(current: &Self, update: TrailUpdate) -> Self {
        let mut next = current.clone();
        if let Some(visit) = update.visit {
            next.visited.push(visit);
        }
        if let Some(note) = update.note {
            next.note = Some(note);
        }
        next
    }
}

struct Visit(&'static str);

#[async_trait::async_trait]
impl GraphNode<TrailState> for Visit {
    async fn invoke_with_context(
        &self,
        _input: GraphState<TrailState>,
        context: &GraphContext,
    ) -> Result<StateUpdate<TrailState>, BlogsmithError> {
        Ok(StateUpdate::new(TrailUpdate {
            visit: Some(format!("{}@{}", self.0, context.step)),
            note: None,
        }))
    }
}

#[tokio::test]
async fn linear_graph_runs_nodes_in_edge_order() {
    let graph = GraphBuilder::new()
        .add_node("a", Visit("a"))
        .add_node("b", Visit("b"))
        .add_node("c", Visit("c"))
        .set_entry("a")
        .add_edge("a", "b")
        .add_edge("b", "c")
        .add_edge("c", END)
        .build();

    let out = graph
        .invoke_graph(GraphState::new(TrailState::default()))
        .await
        .unwrap();
    assert_eq!(out.data.visited, vec!["a@1", "b@2", "c@3"]);
    assert_eq!(graph.path(), vec!["a", "b", "c"]);
}

#[tokio::test]
async fn node_without_outgoing_edge_terminates() {
    let graph = GraphBuilder::new()
        .add_node("only", Visit("only"))
        .set_entry("only")
        .build();

    let out = graph
        .invoke_graph(GraphState::new(TrailState::default()))
        .await
        .unwrap();
    assert_eq!(out.data.visited, vec!["only@1"]);
}

#[tokio::test]
async fn untouched_fields_are_carried_forward() {
    let graph = GraphBuilder::new()
        .add_node("a", Visit("a"))
        .add_node("b", Visit("b"))
        .set_entry("a")
        .add_edge("a", "b")
        .add_edge("b", END)
        .build();

    let initial = TrailState {
        visited: vec![],
        note: Some("keep me".to_string()),
    };
    let out = graph.invoke_graph(GraphState::new(initial)).await.unwrap();
    assert_eq!(out.data.note.as_deref(), Some("keep me"));
    assert_eq!(out.data.visited.len(), 2);
}
