use std::{error, fmt};

use core::{
    gen::golang::GoImplementer,
    parse::syntax::SyntaxError,
    sem::fsm::SemanticError,
};

pub mod data;
pub mod gen;
pub mod lex;
pub mod opt;
pub mod parse;
pub mod sem;

/// Compilation: The result of a successful compile. Warnings never halt the
/// pipeline; callers decide where to surface them.
#[derive(Debug)]
pub struct Compilation {
    pub code: String,
    pub warnings: Vec<SemanticError>,
}

/// Compiles an FSM description into Go source realizing the machine with
/// the State pattern, `package` naming the emitted package.
///
/// The pipeline runs lexing and parsing, semantic analysis, optimization,
/// and generation, in that order. It halts after any stage that recorded
/// errors; every stage itself runs to completion and reports everything it
/// found.
pub fn compile(input: &str, package: &str) -> Result<Compilation, CompileError> {
    let parsed = parse::parse_source(input);
    if !parsed.errors.is_empty() {
        return Err(CompileError::Syntax(parsed.errors));
    }

    let semantic = sem::analyze(&parsed);
    if !semantic.errors.is_empty() {
        return Err(CompileError::Semantic(semantic.errors));
    }

    let optimized = opt::optimize(&semantic);
    let node = gen::generate(&optimized);
    let code = GoImplementer::new(package).implement(&node);

    Ok(Compilation {
        code,
        warnings: semantic.warnings,
    })
}

/// Compile Error: The diagnostics which halted a compile.
///
/// # Types
///
/// * `Syntax` - the lexer or parser rejected the input.
/// * `Semantic` - the analyzer rejected the parsed FSM.
#[derive(Debug)]
pub enum CompileError {
    Syntax(Vec<SyntaxError>),
    Semantic(Vec<SemanticError>),
}

impl CompileError {
    /// Returns the formatted diagnostic lines, one per failure.
    pub fn diagnostics(&self) -> Vec<String> {
        match *self {
            CompileError::Syntax(ref errors) => errors.iter().map(|e| e.to_string()).collect(),
            CompileError::Semantic(ref errors) => errors.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for diagnostic in self.diagnostics() {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{}", diagnostic)?;
            first = false;
        }
        Ok(())
    }
}

impl error::Error for CompileError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
