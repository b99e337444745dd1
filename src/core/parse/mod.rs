use core::lex::{Token, TokenKind, TokenSink};

use self::{builder::Builder, ParserState as S, TableOp as Op, TokenClass as T};

pub mod builder;
pub mod syntax;

/// Parser State: The states of the recognizer, enumerated exhaustively.
/// `Header` is the initial state; `End` is reached when the logic group's
/// closing brace has been consumed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParserState {
    Header,
    HeaderColon,
    HeaderValue,
    TransitionGroup,
    NewTransition,
    StateBase,
    EntryAction,
    ExitAction,
    SingleEvent,
    NextState,
    ActionGroup,
    SubTransitionGroup,
    SubTransitionEvent,
    SubTransitionNextState,
    SubTransitionActionGroup,
    SuperState,
    SuperStateName,
    End,
}

impl ParserState {
    fn label(&self) -> &'static str {
        match *self {
            S::Header => "HEADER",
            S::HeaderColon => "HEADER_COLON",
            S::HeaderValue => "HEADER_VALUE",
            S::TransitionGroup => "TRANSITION_GROUP",
            S::NewTransition => "NEW_TRANSITION",
            S::StateBase => "STATE_BASE",
            S::EntryAction => "ENTRY_ACTION",
            S::ExitAction => "EXIT_ACTION",
            S::SingleEvent => "SINGLE_EVENT",
            S::NextState => "NEXT_STATE",
            S::ActionGroup => "ACTION_GROUP",
            S::SubTransitionGroup => "SUB_TRANSITION_GROUP",
            S::SubTransitionEvent => "SUB_TRANSITION_EVENT",
            S::SubTransitionNextState => "SUB_TRANSITION_NEXT_STATE",
            S::SubTransitionActionGroup => "SUB_TRANSITION_ACTION_GROUP",
            S::SuperState => "SUPER_STATE",
            S::SuperStateName => "SUPER_STATE_NAME",
            S::End => "END",
        }
    }
}

/// Token Class: A token kind stripped of its payload, as matched against
/// the transition table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenClass {
    OpenBrace,
    ClosedBrace,
    Colon,
    OpenParen,
    ClosedParen,
    OpenAngle,
    ClosedAngle,
    Dash,
    Name,
    End,
}

impl TokenClass {
    fn label(&self) -> &'static str {
        match *self {
            T::OpenBrace => "OPEN_BRACE",
            T::ClosedBrace => "CLOSED_BRACE",
            T::Colon => "COLON",
            T::OpenParen => "OPEN_PAREN",
            T::ClosedParen => "CLOSED_PAREN",
            T::OpenAngle => "OPEN_ANGLE",
            T::ClosedAngle => "CLOSED_ANGLE",
            T::Dash => "DASH",
            T::Name => "NAME",
            T::End => "END",
        }
    }
}

/// Table Op: Tags naming the builder operation a table row fires.
#[derive(Clone, Copy, Debug, PartialEq)]
enum TableOp {
    None,
    NewHeader,
    AddHeaderValue,
    AddNewTransition,
    AddNewAbstractTransition,
    AddSuperState,
    AddEntryAction,
    AddExitAction,
    AddEmptyEvent,
    AddEvent,
    AddNextState,
    AddAction,
    Done,
}

/// The recognizer itself, as data: one row per legal
/// `(state, token) -> (state, builder op)` transition. A missing row is a
/// parse error and leaves the parser's state unchanged.
static TRANSITION_TABLE: &[(ParserState, TokenClass, ParserState, TableOp)] = &[
    (S::Header, T::Name, S::HeaderColon, Op::NewHeader),
    (S::Header, T::OpenBrace, S::TransitionGroup, Op::None),
    (S::HeaderColon, T::Colon, S::HeaderValue, Op::None),
    (S::HeaderValue, T::Name, S::Header, Op::AddHeaderValue),
    (S::TransitionGroup, T::Name, S::NewTransition, Op::AddNewTransition),
    (S::TransitionGroup, T::OpenParen, S::SuperState, Op::None),
    (S::TransitionGroup, T::ClosedBrace, S::End, Op::None),
    (S::SuperState, T::Name, S::SuperStateName, Op::AddNewAbstractTransition),
    (S::SuperStateName, T::ClosedParen, S::NewTransition, Op::None),
    (S::NewTransition, T::Colon, S::StateBase, Op::None),
    (S::NewTransition, T::ClosedAngle, S::EntryAction, Op::None),
    (S::NewTransition, T::OpenAngle, S::ExitAction, Op::None),
    (S::NewTransition, T::Name, S::SingleEvent, Op::AddEvent),
    (S::NewTransition, T::Dash, S::SingleEvent, Op::AddEmptyEvent),
    (S::NewTransition, T::OpenBrace, S::SubTransitionGroup, Op::None),
    (S::StateBase, T::Name, S::NewTransition, Op::AddSuperState),
    (S::EntryAction, T::Name, S::NewTransition, Op::AddEntryAction),
    (S::ExitAction, T::Name, S::NewTransition, Op::AddExitAction),
    (S::SingleEvent, T::Name, S::NextState, Op::AddNextState),
    (S::SingleEvent, T::Dash, S::NextState, Op::None),
    (S::NextState, T::Name, S::TransitionGroup, Op::AddAction),
    (S::NextState, T::Dash, S::TransitionGroup, Op::None),
    (S::NextState, T::OpenBrace, S::ActionGroup, Op::None),
    (S::ActionGroup, T::Name, S::ActionGroup, Op::AddAction),
    (S::ActionGroup, T::ClosedBrace, S::TransitionGroup, Op::None),
    (S::SubTransitionGroup, T::ClosedBrace, S::TransitionGroup, Op::None),
    (S::SubTransitionGroup, T::Name, S::SubTransitionEvent, Op::AddEvent),
    (S::SubTransitionGroup, T::Dash, S::SubTransitionEvent, Op::AddEmptyEvent),
    (S::SubTransitionEvent, T::Name, S::SubTransitionNextState, Op::AddNextState),
    (S::SubTransitionEvent, T::Dash, S::SubTransitionNextState, Op::None),
    (S::SubTransitionNextState, T::Name, S::SubTransitionGroup, Op::AddAction),
    (S::SubTransitionNextState, T::Dash, S::SubTransitionGroup, Op::None),
    (S::SubTransitionNextState, T::OpenBrace, S::SubTransitionActionGroup, Op::None),
    (S::SubTransitionActionGroup, T::Name, S::SubTransitionActionGroup, Op::AddAction),
    (S::SubTransitionActionGroup, T::ClosedBrace, S::SubTransitionGroup, Op::None),
    (S::End, T::End, S::End, Op::Done),
];

/// Parser: A table-driven recognizer, driven by the lexer through the
/// `TokenSink` seam. Errors are recorded on the builder, never raised, and
/// recognition continues from the same state.
pub struct Parser<B: Builder> {
    state: ParserState,
    builder: B,
}

impl<B: Builder> Parser<B> {
    pub fn new(builder: B) -> Self {
        Parser {
            state: ParserState::Header,
            builder,
        }
    }

    pub fn into_builder(self) -> B {
        self.builder
    }

    fn handle_event(&mut self, token: TokenClass, line: usize, pos: usize) {
        for &(current, trigger, next, op) in TRANSITION_TABLE {
            if current == self.state && trigger == token {
                self.state = next;
                Self::apply(op, &mut self.builder);
                return;
            }
        }

        self.builder
            .parse_error(self.state.label(), token.label(), line, pos);
    }

    fn apply(op: TableOp, builder: &mut B) {
        match op {
            Op::None => {}
            Op::NewHeader => builder.new_header(),
            Op::AddHeaderValue => builder.add_header_value(),
            Op::AddNewTransition => builder.add_new_transition(),
            Op::AddNewAbstractTransition => builder.add_new_abstract_transition(),
            Op::AddSuperState => builder.add_super_state(),
            Op::AddEntryAction => builder.add_entry_action(),
            Op::AddExitAction => builder.add_exit_action(),
            Op::AddEmptyEvent => builder.add_empty_event(),
            Op::AddEvent => builder.add_event(),
            Op::AddNextState => builder.add_next_state(),
            Op::AddAction => builder.add_action(),
            Op::Done => builder.done(),
        }
    }
}

impl<B: Builder> TokenSink for Parser<B> {
    fn collect(&mut self, token: Token) {
        match token.kind {
            TokenKind::OpenBrace => self.handle_event(T::OpenBrace, token.line, token.pos),
            TokenKind::ClosedBrace => self.handle_event(T::ClosedBrace, token.line, token.pos),
            TokenKind::Colon => self.handle_event(T::Colon, token.line, token.pos),
            TokenKind::OpenParen => self.handle_event(T::OpenParen, token.line, token.pos),
            TokenKind::ClosedParen => self.handle_event(T::ClosedParen, token.line, token.pos),
            TokenKind::OpenAngle => self.handle_event(T::OpenAngle, token.line, token.pos),
            TokenKind::ClosedAngle => self.handle_event(T::ClosedAngle, token.line, token.pos),
            TokenKind::Dash => self.handle_event(T::Dash, token.line, token.pos),
            TokenKind::Name(ref name) => {
                self.builder.set_name(name);
                self.handle_event(T::Name, token.line, token.pos);
            }
            TokenKind::Error => self.builder.syntax_error(token.line, token.pos),
            TokenKind::End => self.handle_event(T::End, token.line, token.pos),
        }
    }
}

/// Lexes and parses `input` into its syntax tree.
pub fn parse_source(input: &str) -> syntax::FsmSyntax {
    use core::lex::Lexer;

    let mut parser = Parser::new(builder::SyntaxBuilder::new());
    Lexer::new(&mut parser).lex(input);
    parser.into_builder().into_fsm()
}
