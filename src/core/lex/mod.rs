use regex::Regex;

lazy_static! {
    static ref NAME_PATTERN: Regex = Regex::new(r"^[A-Za-z0-9_]+").unwrap();
}

/// Token Kind: The kind of a scanned token.
///
/// # Types
///
/// * Single-character kinds for the punctuation of the language.
/// * `Name` - a maximal run of word characters, storing its lexeme.
/// * `Error` - a character outside the language, reported and skipped.
/// * `End` - synthesized once the input is exhausted.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    OpenBrace,
    ClosedBrace,
    Colon,
    OpenParen,
    ClosedParen,
    OpenAngle,
    ClosedAngle,
    Dash,
    Name(String),
    Error,
    End,
}

/// Token: A scanned token tagged with the position of its first character.
/// Lines and columns are 1-based; the column counter resets at every newline.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub pos: usize,
}

/// Token Sink: Trait which receives the token stream produced by a `Lexer`.
/// The parser is the production implementation.
pub trait TokenSink {
    fn collect(&mut self, token: Token);
}

/// Lexer: Scans an input string and pushes positioned tokens into a sink.
/// Lexing never fails; unrecognized characters become `Error` tokens and
/// scanning continues with the next character.
pub struct Lexer<'sink> {
    sink: &'sink mut dyn TokenSink,
    line: usize,
}

impl<'sink> Lexer<'sink> {
    pub fn new(sink: &'sink mut dyn TokenSink) -> Self {
        Lexer { sink, line: 0 }
    }

    /// Scans `input` to exhaustion. The line counter increments before each
    /// scanned line, so the final `End` token reports the line after the
    /// last one, at column 1.
    pub fn lex(&mut self, input: &str) {
        for line in input.lines() {
            self.line += 1;
            self.lex_line(line);
        }

        self.line += 1;
        self.push(TokenKind::End, 1);
    }

    fn lex_line(&mut self, line: &str) {
        let mut idx: usize = 0;
        let mut pos: usize = 1;

        while let Some(c) = line[idx..].chars().next() {
            if c.is_whitespace() {
                idx += c.len_utf8();
                pos += 1;
            } else if let Some(kind) = single_char_token(c) {
                self.push(kind, pos);
                idx += 1;
                pos += 1;
            } else if let Some(name) = NAME_PATTERN.find(&line[idx..]) {
                self.push(TokenKind::Name(name.as_str().to_string()), pos);
                idx += name.end();
                pos += name.end();
            } else {
                self.push(TokenKind::Error, pos);
                idx += c.len_utf8();
                pos += 1;
            }
        }
    }

    fn push(&mut self, kind: TokenKind, pos: usize) {
        self.sink.collect(Token {
            kind,
            line: self.line,
            pos,
        });
    }
}

fn single_char_token(c: char) -> Option<TokenKind> {
    match c {
        '{' => Some(TokenKind::OpenBrace),
        '}' => Some(TokenKind::ClosedBrace),
        ':' => Some(TokenKind::Colon),
        '(' => Some(TokenKind::OpenParen),
        ')' => Some(TokenKind::ClosedParen),
        '<' => Some(TokenKind::OpenAngle),
        '>' => Some(TokenKind::ClosedAngle),
        '-' => Some(TokenKind::Dash),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TokenCollectorSpy {
        result: String,
        end_line: usize,
        end_pos: usize,
    }

    impl TokenCollectorSpy {
        fn new() -> Self {
            TokenCollectorSpy {
                result: String::new(),
                end_line: 0,
                end_pos: 0,
            }
        }

        fn add(&mut self, token: &str, line: usize, pos: usize) {
            if !self.result.is_empty() {
                self.result.push(',');
            }
            self.result.push_str(&format!("{}:{}/{}", token, line, pos));
        }
    }

    impl TokenSink for TokenCollectorSpy {
        fn collect(&mut self, token: Token) {
            match token.kind {
                TokenKind::OpenBrace => self.add("OB", token.line, token.pos),
                TokenKind::ClosedBrace => self.add("CB", token.line, token.pos),
                TokenKind::Colon => self.add("C", token.line, token.pos),
                TokenKind::OpenParen => self.add("OP", token.line, token.pos),
                TokenKind::ClosedParen => self.add("CP", token.line, token.pos),
                TokenKind::OpenAngle => self.add("OA", token.line, token.pos),
                TokenKind::ClosedAngle => self.add("CA", token.line, token.pos),
                TokenKind::Dash => self.add("D", token.line, token.pos),
                TokenKind::Name(ref name) => {
                    let tag = format!("#{}#", name);
                    self.add(&tag, token.line, token.pos);
                }
                TokenKind::Error => self.add("E", token.line, token.pos),
                TokenKind::End => {
                    self.end_line = token.line;
                    self.end_pos = token.pos;
                    self.result.push('.');
                }
            }
        }
    }

    fn assert_lex_result(input: &str, expected: &str) {
        //setup
        let mut spy = TokenCollectorSpy::new();

        //exercise
        Lexer::new(&mut spy).lex(input);

        //verify
        assert_eq!(spy.result, expected, "for input {:?}", input);
    }

    #[test]
    fn single_character_tokens() {
        assert_lex_result("{", "OB:1/1.");
        assert_lex_result("}", "CB:1/1.");
        assert_lex_result(":", "C:1/1.");
        assert_lex_result("(", "OP:1/1.");
        assert_lex_result(")", "CP:1/1.");
        assert_lex_result("<", "OA:1/1.");
        assert_lex_result(">", "CA:1/1.");
        assert_lex_result("-", "D:1/1.");
    }

    #[test]
    fn unrecognized_characters() {
        assert_lex_result(".", "E:1/1.");
        assert_lex_result("&", "E:1/1.");
        assert_lex_result("*", "E:1/1.");
    }

    #[test]
    fn names() {
        assert_lex_result("name", "#name#:1/1.");
        assert_lex_result("Name", "#Name#:1/1.");
        assert_lex_result("Complex_Name", "#Complex_Name#:1/1.");
    }

    #[test]
    fn token_sequences() {
        assert_lex_result("{}", "OB:1/1,CB:1/2.");
        assert_lex_result("{-}<>&:", "OB:1/1,D:1/2,CB:1/3,OA:1/4,CA:1/5,E:1/6,C:1/7.");
        assert_lex_result("{name}", "OB:1/1,#name#:1/2,CB:1/6.");
        assert_lex_result(
            "{name}asd:fgh>",
            "OB:1/1,#name#:1/2,CB:1/6,#asd#:1/7,C:1/10,#fgh#:1/11,CA:1/14.",
        );
    }

    #[test]
    fn whitespace_is_skipped() {
        assert_lex_result("{ name }", "OB:1/1,#name#:1/3,CB:1/8.");
        assert_lex_result("{\n  name\n}", "OB:1/1,#name#:2/3,CB:3/1.");
        assert_lex_result(
            "FSM: fsm {\n name : >asd &      \n\n  }\n",
            "#FSM#:1/1,C:1/4,#fsm#:1/6,OB:1/10,#name#:2/2,C:2/7,CA:2/9,#asd#:2/10,E:2/14,CB:4/3.",
        );
    }

    #[test]
    fn end_position_points_past_the_last_line() {
        //setup
        let mut spy = TokenCollectorSpy::new();

        //exercise
        Lexer::new(&mut spy).lex("\n\n\na:b");

        //verify
        assert_eq!(spy.end_line, 5);
        assert_eq!(spy.end_pos, 1);
    }

    #[test]
    fn tokens_reconstruct_the_input_without_whitespace() {
        //setup
        struct TextSink {
            text: String,
        }

        impl TokenSink for TextSink {
            fn collect(&mut self, token: Token) {
                match token.kind {
                    TokenKind::OpenBrace => self.text.push('{'),
                    TokenKind::ClosedBrace => self.text.push('}'),
                    TokenKind::Colon => self.text.push(':'),
                    TokenKind::OpenParen => self.text.push('('),
                    TokenKind::ClosedParen => self.text.push(')'),
                    TokenKind::OpenAngle => self.text.push('<'),
                    TokenKind::ClosedAngle => self.text.push('>'),
                    TokenKind::Dash => self.text.push('-'),
                    TokenKind::Name(ref name) => self.text.push_str(name),
                    TokenKind::Error | TokenKind::End => {}
                }
            }
        }

        let mut sink = TextSink {
            text: String::new(),
        };

        //exercise
        Lexer::new(&mut sink).lex("FSM:fsm{(Base)Reset:Locked<on>off-}");

        //verify
        assert_eq!(sink.text, "FSM:fsm{(Base)Reset:Locked<on>off-}");
    }
}
