pub mod block;
pub mod class;
pub mod diagnostic;
pub mod expression;
pub mod jsx;
pub mod lexer;
pub mod parser;
pub mod position;
pub mod precedence;
pub mod program;
pub mod statement;
pub mod token;
pub mod token_type;

pub type Identifier = String;

use diagnostic::Diagnostic;
use lexer::Lexer;
use parser::Parser;
use program::Program;

/// Parse a complete source text. The program is returned even when errors
/// were reported; callers decide whether errors are fatal.
pub fn parse(source: &str) -> (Program, Vec<Diagnostic>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    (program, parser.errors)
}
