use std::collections::{HashMap, HashSet};

use core::{
    data::DistinctList,
    parse::syntax::{FsmSyntax, StateSpec, SubTransition},
    sem::fsm::{SemanticError, SemanticErrorKind, SemanticFsm, State, StateId, Transition},
};

pub mod fsm;

/// Analyzes `parsed`, resolving every state reference and recording every
/// semantic diagnostic. Always returns a `SemanticFsm`; callers decide
/// whether a non-empty error list halts the pipeline.
pub fn analyze(parsed: &FsmSyntax) -> SemanticFsm {
    Analyzer::new().analyze(parsed)
}

/// Analyzer: Three passes over the parsed syntax, in order: the state
/// catalog, header resolution, and state body resolution; then the
/// post-checks for duplicate transitions, conflicting super-states, and
/// unused states.
struct Analyzer {
    fsm: SemanticFsm,
    ids: HashMap<String, StateId>,
    events: DistinctList,
    actions: DistinctList,
}

impl Analyzer {
    fn new() -> Self {
        Analyzer {
            fsm: SemanticFsm::default(),
            ids: HashMap::new(),
            events: DistinctList::new(),
            actions: DistinctList::new(),
        }
    }

    fn analyze(mut self, parsed: &FsmSyntax) -> SemanticFsm {
        self.catalog_states(parsed);
        self.resolve_headers(parsed);
        self.resolve_state_bodies(parsed);
        self.check_duplicate_transitions();
        self.check_conflicting_super_states();
        self.check_unused_states();

        let Analyzer {
            mut fsm,
            events,
            actions,
            ..
        } = self;
        fsm.events = events.into_items();
        fsm.actions = actions.into_items();
        fsm
    }

    /// Pass (a): create or locate a state for every transition block and
    /// settle its abstract flag. The first declaration wins; a redeclaration
    /// with the opposite flag is an error.
    fn catalog_states(&mut self, parsed: &FsmSyntax) {
        for block in &parsed.logic {
            let spec = &block.state_spec;
            let id = self.find_or_create_state(&spec.name);

            if !self.fsm.states[id].defined {
                self.fsm.states[id].defined = true;
                self.fsm.states[id].abstract_state = spec.abstract_state;
            } else if self.fsm.states[id].abstract_state != spec.abstract_state {
                self.error(
                    SemanticErrorKind::AbstractStateRedefinedAsNonAbstract,
                    &spec.name,
                );
            }
        }
    }

    /// Pass (b): map headers case-insensitively onto the FSM, rejecting
    /// repeats and unknown names, then require `fsm` and `initial`.
    fn resolve_headers(&mut self, parsed: &FsmSyntax) {
        for header in &parsed.headers {
            match header.name.to_lowercase().as_str() {
                "fsm" => {
                    if self.fsm.name.is_empty() {
                        self.fsm.name = header.value.clone();
                    } else {
                        self.error(SemanticErrorKind::DuplicateHeader, &header.name);
                    }
                }
                "actions" => {
                    if self.fsm.actions_class.is_empty() {
                        self.fsm.actions_class = header.value.clone();
                    } else {
                        self.error(SemanticErrorKind::DuplicateHeader, &header.name);
                    }
                }
                "initial" => {
                    if self.fsm.initial_state.is_none() {
                        let id = self.find_or_create_state(&header.value);
                        self.fsm.states[id].used = true;
                        self.fsm.initial_state = Some(id);
                    } else {
                        self.error(SemanticErrorKind::DuplicateHeader, &header.name);
                    }
                }
                _ => self.error(SemanticErrorKind::InvalidHeader, &header.name),
            }
        }

        if self.fsm.name.is_empty() {
            self.error(SemanticErrorKind::NoFsm, "");
        }

        if self.fsm.initial_state.is_none() {
            self.error(SemanticErrorKind::NoInitial, "");
        }
    }

    /// Pass (c): attach entry/exit actions, link super-states, and build
    /// transitions. Blocks sharing a state name merge in source order.
    fn resolve_state_bodies(&mut self, parsed: &FsmSyntax) {
        for block in &parsed.logic {
            let id = self.find_or_create_state(&block.state_spec.name);

            self.attach_entry_actions(id, &block.state_spec);
            self.attach_exit_actions(id, &block.state_spec);
            self.link_super_states(id, &block.state_spec);

            for sub in &block.sub_transitions {
                self.add_transition(id, sub);
            }
        }
    }

    fn attach_entry_actions(&mut self, id: StateId, spec: &StateSpec) {
        if spec.entry_actions.is_empty() {
            return;
        }

        if !self.fsm.states[id].entry_actions.is_empty() {
            self.error(SemanticErrorKind::EntryActionsAlreadyDefined, &spec.name);
            return;
        }

        for action in &spec.entry_actions {
            self.actions.push(action);
        }
        self.fsm.states[id].entry_actions = spec.entry_actions.clone();
    }

    fn attach_exit_actions(&mut self, id: StateId, spec: &StateSpec) {
        if spec.exit_actions.is_empty() {
            return;
        }

        if !self.fsm.states[id].exit_actions.is_empty() {
            self.error(SemanticErrorKind::ExitActionsAlreadyDefined, &spec.name);
            return;
        }

        for action in &spec.exit_actions {
            self.actions.push(action);
        }
        self.fsm.states[id].exit_actions = spec.exit_actions.clone();
    }

    fn link_super_states(&mut self, id: StateId, spec: &StateSpec) {
        for name in &spec.super_states {
            if !self.is_defined(name) {
                self.error(SemanticErrorKind::UndefinedSuperState, name);
            }

            let super_id = self.find_or_create_state(name);
            self.fsm.states[super_id].used = true;
            self.fsm.states[id].super_states.push(super_id);
        }
    }

    /// A dash in the event slot produced no event; such sub-transitions only
    /// satisfy the grammar and are discarded here.
    fn add_transition(&mut self, id: StateId, sub: &SubTransition) {
        let event = match sub.event {
            Some(ref event) => event.clone(),
            None => return,
        };

        let next_state = match sub.next_state {
            None => None,
            Some(ref name) => {
                if !self.is_defined(name) {
                    self.error(SemanticErrorKind::UndefinedState, name);
                }

                let next_id = self.find_or_create_state(name);
                if self.fsm.states[next_id].abstract_state {
                    self.error(SemanticErrorKind::AbstractStateUsedAsNextState, name);
                }
                self.fsm.states[next_id].used = true;
                Some(next_id)
            }
        };

        self.events.push(&event);
        for action in &sub.actions {
            self.actions.push(action);
        }

        self.fsm.states[id].transitions.push(Transition {
            event,
            next_state,
            actions: sub.actions.clone(),
        });
    }

    fn check_duplicate_transitions(&mut self) {
        let mut duplicates: Vec<String> = Vec::new();

        for state in &self.fsm.states {
            let mut seen: HashSet<&String> = HashSet::new();
            for transition in &state.transitions {
                if !seen.insert(&transition.event) {
                    duplicates.push(format!("{}:{}", state.name, transition.event));
                }
            }
        }

        for element in duplicates {
            self.error(SemanticErrorKind::DuplicateTransition, &element);
        }
    }

    /// Two different direct super-states defining the same event is a
    /// conflict; transitive redefinitions resolve by override instead.
    fn check_conflicting_super_states(&mut self) {
        let mut conflicts: Vec<String> = Vec::new();

        for state in &self.fsm.states {
            let mut owners: HashMap<&String, StateId> = HashMap::new();

            for &super_id in &state.super_states {
                let mut local: HashSet<&String> = HashSet::new();

                for transition in &self.fsm.states[super_id].transitions {
                    if !local.insert(&transition.event) {
                        continue;
                    }

                    match owners.get(&transition.event) {
                        Some(&owner) if owner != super_id => {
                            conflicts.push(format!("{}:{}", state.name, transition.event));
                        }
                        Some(_) => {}
                        None => {
                            owners.insert(&transition.event, super_id);
                        }
                    }
                }
            }
        }

        for element in conflicts {
            self.error(SemanticErrorKind::ConflictingSuperStates, &element);
        }
    }

    fn check_unused_states(&mut self) {
        let mut unused: Vec<String> = Vec::new();

        for state in &self.fsm.states {
            if !state.used {
                unused.push(state.name.clone());
            }
        }

        for element in unused {
            self.warning(SemanticErrorKind::UnusedState, &element);
        }
    }

    fn is_defined(&self, name: &str) -> bool {
        match self.ids.get(name) {
            Some(&id) => self.fsm.states[id].defined,
            None => false,
        }
    }

    fn find_or_create_state(&mut self, name: &str) -> StateId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }

        let id = self.fsm.states.len();
        self.fsm.states.push(State {
            name: name.to_string(),
            ..State::default()
        });
        self.ids.insert(name.to_string(), id);
        id
    }

    fn error(&mut self, kind: SemanticErrorKind, element: &str) {
        self.fsm.errors.push(SemanticError::new(kind, element));
    }

    fn warning(&mut self, kind: SemanticErrorKind, element: &str) {
        self.fsm.warnings.push(SemanticError::new(kind, element));
    }
}
