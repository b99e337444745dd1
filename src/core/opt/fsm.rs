/// Optimized FSM: The flattened machine handed to the code generator. Every
/// concrete state carries its complete transition list, with inherited
/// transitions inlined and entry/exit actions folded into the action lists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptimizedFsm {
    pub name: String,
    pub actions_class: String,
    pub initial_state: String,
    pub events: Vec<String>,
    pub actions: Vec<String>,
    pub states: Vec<FlatState>,
}

impl OptimizedFsm {
    pub fn state(&self, name: &str) -> Option<&FlatState> {
        self.states.iter().find(|state| state.name == name)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlatState {
    pub name: String,
    pub transitions: Vec<FlatTransition>,
}

/// Flat Transition: A fully resolved transition. An empty `next_state`
/// marks a self-loop with no state change; `actions` is distinct, in
/// first-occurrence order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlatTransition {
    pub event: String,
    pub next_state: String,
    pub actions: Vec<String>,
}
