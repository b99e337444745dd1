use std::{error, fmt};

/// Index of a `State` in `SemanticFsm::states`. All states live in that
/// single container; every other reference into the (possibly cyclic) state
/// graph is one of these indices, never an owning pointer.
pub type StateId = usize;

/// Semantic FSM: The resolved state graph produced by the analyzer, with
/// every diagnostic discovered along the way. The analyzer always returns
/// one of these; failures are data.
///
/// # Fields
///
/// * `states` - all states in creation order: declared states in declaration
/// order, then any placeholders created for unresolved references.
/// * `events`, `actions` - distinct names in first-seen order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SemanticFsm {
    pub name: String,
    pub actions_class: String,
    pub initial_state: Option<StateId>,
    pub states: Vec<State>,
    pub events: Vec<String>,
    pub actions: Vec<String>,
    pub errors: Vec<SemanticError>,
    pub warnings: Vec<SemanticError>,
}

impl SemanticFsm {
    pub fn state(&self, name: &str) -> Option<&State> {
        self.states.iter().find(|state| state.name == name)
    }
}

/// State: A node of the state graph.
///
/// # Fields
///
/// * `abstract_state` - declared in parentheses; usable only for inheritance.
/// * `defined` - whether any transition block declares this state, as
/// opposed to a placeholder created for an unresolved reference.
/// * `used` - referenced as the initial state, a super-state, or a next
/// state (self-transitions count).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct State {
    pub name: String,
    pub abstract_state: bool,
    pub defined: bool,
    pub used: bool,
    pub super_states: Vec<StateId>,
    pub entry_actions: Vec<String>,
    pub exit_actions: Vec<String>,
    pub transitions: Vec<Transition>,
}

/// Transition: An edge out of a state. `next_state` is `None` when the
/// source wrote a dash, meaning no state change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transition {
    pub event: String,
    pub next_state: Option<StateId>,
    pub actions: Vec<String>,
}

/// Semantic Error: A diagnostic carrying the name of the offending element.
#[derive(Clone, Debug, PartialEq)]
pub struct SemanticError {
    pub kind: SemanticErrorKind,
    pub element: String,
}

impl SemanticError {
    pub fn new(kind: SemanticErrorKind, element: &str) -> Self {
        SemanticError {
            kind,
            element: element.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SemanticErrorKind {
    NoFsm,
    NoInitial,
    InvalidHeader,
    DuplicateHeader,
    UndefinedState,
    UndefinedSuperState,
    AbstractStateRedefinedAsNonAbstract,
    AbstractStateUsedAsNextState,
    EntryActionsAlreadyDefined,
    ExitActionsAlreadyDefined,
    DuplicateTransition,
    ConflictingSuperStates,
    UnusedState,
}

impl SemanticErrorKind {
    pub fn label(&self) -> &'static str {
        match *self {
            SemanticErrorKind::NoFsm => "NO_FSM",
            SemanticErrorKind::NoInitial => "NO_INITIAL",
            SemanticErrorKind::InvalidHeader => "INVALID_HEADER",
            SemanticErrorKind::DuplicateHeader => "DUPLICATE_HEADER",
            SemanticErrorKind::UndefinedState => "UNDEFINED_STATE",
            SemanticErrorKind::UndefinedSuperState => "UNDEFINED_SUPER_STATE",
            SemanticErrorKind::AbstractStateRedefinedAsNonAbstract => {
                "ABSTRACT_STATE_REDEFINED_AS_NON_ABSTRACT"
            }
            SemanticErrorKind::AbstractStateUsedAsNextState => "ABSTRACT_STATE_USED_AS_NEXT_STATE",
            SemanticErrorKind::EntryActionsAlreadyDefined => "ENTRY_ACTIONS_ALREADY_DEFINED",
            SemanticErrorKind::ExitActionsAlreadyDefined => "EXIT_ACTIONS_ALREADY_DEFINED",
            SemanticErrorKind::DuplicateTransition => "DUPLICATE_TRANSITION",
            SemanticErrorKind::ConflictingSuperStates => "CONFLICTING_SUPER_STATES",
            SemanticErrorKind::UnusedState => "UNUSED_STATE",
        }
    }
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Type: {} - Element: {}", self.kind.label(), self.element)
    }
}

impl error::Error for SemanticError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
