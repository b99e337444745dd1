use std::{error, fmt};

/// FSM Syntax: The parsed form of an FSM description, accumulated by a
/// `SyntaxBuilder` as the parser consumes tokens.
///
/// # Fields
///
/// * `headers` - the header pairs, in declaration order.
/// * `logic` - the transition blocks, in declaration order. Multiple blocks
/// may share a state name; they are merged during semantic analysis.
/// * `errors` - the syntax and parse diagnostics, in discovery order.
/// * `done` - whether the end of input was reached cleanly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FsmSyntax {
    pub headers: Vec<Header>,
    pub logic: Vec<TransitionBlock>,
    pub errors: Vec<SyntaxError>,
    pub done: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransitionBlock {
    pub state_spec: StateSpec,
    pub sub_transitions: Vec<SubTransition>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StateSpec {
    pub name: String,
    pub super_states: Vec<String>,
    pub entry_actions: Vec<String>,
    pub exit_actions: Vec<String>,
    pub abstract_state: bool,
}

/// Sub Transition: One transition line of a block. `None` in the event or
/// next-state slot records a dash in the source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubTransition {
    pub event: Option<String>,
    pub next_state: Option<String>,
    pub actions: Vec<String>,
}

/// Syntax Error: A diagnostic produced while recognizing the input.
///
/// # Fields
///
/// * `kind` - `Syntax` for an unrecognized character, `Parse` for a token
/// the transition table has no row for.
/// * `msg` - `"<STATE>|<TOKEN>"` for parse errors, empty for syntax errors.
/// * `line`, `pos` - the position of the offending character or token.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub msg: String,
    pub line: usize,
    pub pos: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SyntaxErrorKind {
    Syntax,
    Parse,
}

impl SyntaxErrorKind {
    pub fn label(&self) -> &'static str {
        match *self {
            SyntaxErrorKind::Syntax => "SYNTAX",
            SyntaxErrorKind::Parse => "PARSE",
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Type: {} - Line: {} Pos {} - Message: {}",
            self.kind.label(),
            self.line,
            self.pos,
            self.msg
        )
    }
}

impl error::Error for SyntaxError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
