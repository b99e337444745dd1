use core::opt::fsm::{FlatState, FlatTransition, OptimizedFsm};

pub mod golang;

/// Node: A code-shaped tree lowered from an `OptimizedFsm`, one step short
/// of target-language text. Implementers walk it through the `Visitor`
/// seam; the tree itself knows nothing about any target language.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Composite(Vec<Node>),
    StateInterface(StateInterfaceNode),
    ActionsInterface(ActionsInterfaceNode),
    FsmClass(FsmClassNode),
    EventMethod(EventMethodNode),
    BaseStateClass(BaseStateClassNode),
    StateClass(StateClassNode),
    StateEventMethod(StateEventMethodNode),
}

#[derive(Clone, Debug, PartialEq)]
pub struct StateInterfaceNode {
    pub fsm_class_name: String,
    pub events: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActionsInterfaceNode {
    pub actions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FsmClassNode {
    pub class_name: String,
    pub initial_state: String,
    pub event_methods: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EventMethodNode {
    pub class_name: String,
    pub event_name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BaseStateClassNode {
    pub fsm_class_name: String,
    pub events: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StateClassNode {
    pub state_name: String,
    pub event_methods: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StateEventMethodNode {
    pub fsm_class_name: String,
    pub state_name: String,
    pub event_name: String,
    pub next_state: String,
    pub actions: Vec<String>,
}

/// Visitor: One method per node type. Inner method lists (`event_methods`)
/// are visited by the implementer, not by `accept`, so an implementer
/// controls where nested output lands.
pub trait Visitor {
    fn visit_state_interface(&mut self, node: &StateInterfaceNode);
    fn visit_actions_interface(&mut self, node: &ActionsInterfaceNode);
    fn visit_fsm_class(&mut self, node: &FsmClassNode);
    fn visit_event_method(&mut self, node: &EventMethodNode);
    fn visit_base_state_class(&mut self, node: &BaseStateClassNode);
    fn visit_state_class(&mut self, node: &StateClassNode);
    fn visit_state_event_method(&mut self, node: &StateEventMethodNode);
}

impl Node {
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        match *self {
            Node::Composite(ref nodes) => {
                for node in nodes {
                    node.accept(visitor);
                }
            }
            Node::StateInterface(ref node) => visitor.visit_state_interface(node),
            Node::ActionsInterface(ref node) => visitor.visit_actions_interface(node),
            Node::FsmClass(ref node) => visitor.visit_fsm_class(node),
            Node::EventMethod(ref node) => visitor.visit_event_method(node),
            Node::BaseStateClass(ref node) => visitor.visit_base_state_class(node),
            Node::StateClass(ref node) => visitor.visit_state_class(node),
            Node::StateEventMethod(ref node) => visitor.visit_state_event_method(node),
        }
    }
}

/// Lowers `fsm` into the node tree realizing the State pattern: a state
/// interface, the actions interface carrying the unhandled-transition
/// callback, the FSM class with one delegating method per event, a base
/// state routing unhandled events to the callback, and one class per
/// concrete state.
pub fn generate(fsm: &OptimizedFsm) -> Node {
    let generator = NodeGenerator { fsm };

    Node::Composite(vec![
        generator.state_interface_node(),
        generator.actions_interface_node(),
        generator.fsm_class_node(),
        generator.base_state_class_node(),
        generator.state_class_nodes(),
    ])
}

struct NodeGenerator<'fsm> {
    fsm: &'fsm OptimizedFsm,
}

impl<'fsm> NodeGenerator<'fsm> {
    fn state_interface_node(&self) -> Node {
        Node::StateInterface(StateInterfaceNode {
            fsm_class_name: self.fsm.name.clone(),
            events: self.fsm.events.clone(),
        })
    }

    fn actions_interface_node(&self) -> Node {
        Node::ActionsInterface(ActionsInterfaceNode {
            actions: self.fsm.actions.clone(),
        })
    }

    fn fsm_class_node(&self) -> Node {
        Node::FsmClass(FsmClassNode {
            class_name: self.fsm.name.clone(),
            initial_state: self.fsm.initial_state.clone(),
            event_methods: self.event_method_nodes(),
        })
    }

    fn event_method_nodes(&self) -> Vec<Node> {
        self.fsm
            .events
            .iter()
            .map(|event| {
                Node::EventMethod(EventMethodNode {
                    class_name: self.fsm.name.clone(),
                    event_name: event.clone(),
                })
            })
            .collect()
    }

    fn base_state_class_node(&self) -> Node {
        Node::BaseStateClass(BaseStateClassNode {
            fsm_class_name: self.fsm.name.clone(),
            events: self.fsm.events.clone(),
        })
    }

    fn state_class_nodes(&self) -> Node {
        Node::Composite(
            self.fsm
                .states
                .iter()
                .map(|state| self.state_class_node(state))
                .collect(),
        )
    }

    fn state_class_node(&self, state: &FlatState) -> Node {
        Node::StateClass(StateClassNode {
            state_name: state.name.clone(),
            event_methods: state
                .transitions
                .iter()
                .map(|transition| self.state_event_method_node(state, transition))
                .collect(),
        })
    }

    fn state_event_method_node(&self, state: &FlatState, transition: &FlatTransition) -> Node {
        Node::StateEventMethod(StateEventMethodNode {
            fsm_class_name: self.fsm.name.clone(),
            state_name: state.name.clone(),
            event_name: transition.event.clone(),
            next_state: transition.next_state.clone(),
            actions: transition.actions.clone(),
        })
    }
}
