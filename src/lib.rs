mod parser;

pub use parser::tokenizer::{tokenize_line, Token, Tokenizer};
pub use parser::{parse, Error, ParseResult};

/// Checks one line (or short block) of source text against the grammar.
/// Nothing is evaluated; the answer is only whether the text forms a valid
/// statement.
pub fn validate(input: &str) -> Result<(), Error> {
    let tokens = tokenize_line(input);
    match parse(&tokens) {
        ParseResult::Ok(_) => Ok(()),
        ParseResult::Err => {
            let line = tokens.first().map(|t| t.line).unwrap_or(1);
            Err(Error::new(line, "syntax error"))
        }
    }
}
