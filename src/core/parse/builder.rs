use core::parse::syntax::{
    FsmSyntax, Header, StateSpec, SubTransition, SyntaxError, SyntaxErrorKind, TransitionBlock,
};

/// Builder: Trait which receives the actions fired by the parser's
/// transition table. The parser is the single caller; the builder owns the
/// growing syntax tree and a current-name register written on every `Name`
/// token.
pub trait Builder {
    fn set_name(&mut self, name: &str);
    fn new_header(&mut self);
    fn add_header_value(&mut self);
    fn add_new_transition(&mut self);
    fn add_new_abstract_transition(&mut self);
    fn add_super_state(&mut self);
    fn add_entry_action(&mut self);
    fn add_exit_action(&mut self);
    fn add_empty_event(&mut self);
    fn add_event(&mut self);
    fn add_next_state(&mut self);
    fn add_action(&mut self);
    fn done(&mut self);
    fn syntax_error(&mut self, line: usize, pos: usize);
    fn parse_error(&mut self, state: &'static str, event: &'static str, line: usize, pos: usize);
}

/// Syntax Builder: The production `Builder`, accumulating an `FsmSyntax`.
pub struct SyntaxBuilder {
    fsm: FsmSyntax,
    current_name: String,
}

impl SyntaxBuilder {
    pub fn new() -> Self {
        SyntaxBuilder {
            fsm: FsmSyntax::default(),
            current_name: String::new(),
        }
    }

    pub fn into_fsm(self) -> FsmSyntax {
        self.fsm
    }

    fn last_header(&mut self) -> &mut Header {
        self.fsm.headers.last_mut().expect("no header started")
    }

    fn last_block(&mut self) -> &mut TransitionBlock {
        self.fsm.logic.last_mut().expect("no transition block started")
    }

    fn last_state_spec(&mut self) -> &mut StateSpec {
        &mut self.last_block().state_spec
    }

    fn last_sub_transition(&mut self) -> &mut SubTransition {
        self.last_block()
            .sub_transitions
            .last_mut()
            .expect("no sub-transition started")
    }
}

impl Builder for SyntaxBuilder {
    fn set_name(&mut self, name: &str) {
        self.current_name = name.to_string();
    }

    fn new_header(&mut self) {
        let name = self.current_name.clone();
        self.fsm.headers.push(Header {
            name,
            value: String::new(),
        });
    }

    fn add_header_value(&mut self) {
        let value = self.current_name.clone();
        self.last_header().value = value;
    }

    fn add_new_transition(&mut self) {
        let name = self.current_name.clone();
        self.fsm.logic.push(TransitionBlock {
            state_spec: StateSpec {
                name,
                ..StateSpec::default()
            },
            sub_transitions: Vec::new(),
        });
    }

    fn add_new_abstract_transition(&mut self) {
        self.add_new_transition();
        self.last_state_spec().abstract_state = true;
    }

    fn add_super_state(&mut self) {
        let name = self.current_name.clone();
        self.last_state_spec().super_states.push(name);
    }

    fn add_entry_action(&mut self) {
        let name = self.current_name.clone();
        self.last_state_spec().entry_actions.push(name);
    }

    fn add_exit_action(&mut self) {
        let name = self.current_name.clone();
        self.last_state_spec().exit_actions.push(name);
    }

    fn add_empty_event(&mut self) {
        self.last_block()
            .sub_transitions
            .push(SubTransition::default());
    }

    fn add_event(&mut self) {
        self.add_empty_event();
        let event = self.current_name.clone();
        self.last_sub_transition().event = Some(event);
    }

    fn add_next_state(&mut self) {
        let next_state = self.current_name.clone();
        self.last_sub_transition().next_state = Some(next_state);
    }

    fn add_action(&mut self) {
        let action = self.current_name.clone();
        self.last_sub_transition().actions.push(action);
    }

    fn done(&mut self) {
        self.fsm.done = true;
    }

    fn syntax_error(&mut self, line: usize, pos: usize) {
        self.fsm.errors.push(SyntaxError {
            kind: SyntaxErrorKind::Syntax,
            msg: String::new(),
            line,
            pos,
        });
    }

    fn parse_error(&mut self, state: &'static str, event: &'static str, line: usize, pos: usize) {
        self.fsm.errors.push(SyntaxError {
            kind: SyntaxErrorKind::Parse,
            msg: format!("{}|{}", state, event),
            line,
            pos,
        });
    }
}
