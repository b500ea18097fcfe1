use const_format::concatcp;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub(crate) typ: TokenType,
    pub(crate) lexeme: String,
    pub(crate) value: TokenValue,
    pub(crate) line: usize,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}('{}')", self.typ, self.lexeme)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum TokenValue {
    None,
    Int(i64),
    Str(String),
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) enum TokenType {
    NUMBER,
    NAME,
    STRING,
    LPAR,
    RPAR,
    LBRACE,
    RBRACE,
    LSQB,
    RSQB,
    COLON,
    COMMA,
    PLUS,
    MINUS,
    STAR,
    SLASH,
    PERCENT,
    LESS,
    GREATER,
    EQUAL,
    EQEQUAL,
    NOTEQUAL,
    LESSEQUAL,
    GREATEREQUAL,
    DOUBLESTAR,
    DOUBLESLASH,
    WHILE,
    FOR,
    DEF,
    RETURN,
    IN,
    IF,
    ELSE,
    PRINT,
}

const EQEQUAL: (&str, TokenType) = ("==", TokenType::EQEQUAL);
const NOTEQUAL: (&str, TokenType) = ("!=", TokenType::NOTEQUAL);
const LESSEQUAL: (&str, TokenType) = ("<=", TokenType::LESSEQUAL);
const GREATEREQUAL: (&str, TokenType) = (">=", TokenType::GREATEREQUAL);
const DOUBLESTAR: (&str, TokenType) = ("**", TokenType::DOUBLESTAR);
const DOUBLESLASH: (&str, TokenType) = ("//", TokenType::DOUBLESLASH);
const LPAR: (&str, TokenType) = ("(", TokenType::LPAR);
const RPAR: (&str, TokenType) = (")", TokenType::RPAR);
const LBRACE: (&str, TokenType) = ("{", TokenType::LBRACE);
const RBRACE: (&str, TokenType) = ("}", TokenType::RBRACE);
const LSQB: (&str, TokenType) = ("[", TokenType::LSQB);
const RSQB: (&str, TokenType) = ("]", TokenType::RSQB);
const COLON: (&str, TokenType) = (":", TokenType::COLON);
const COMMA: (&str, TokenType) = (",", TokenType::COMMA);
const PLUS: (&str, TokenType) = ("+", TokenType::PLUS);
const MINUS: (&str, TokenType) = ("-", TokenType::MINUS);
const STAR: (&str, TokenType) = ("*", TokenType::STAR);
const SLASH: (&str, TokenType) = ("/", TokenType::SLASH);
const PERCENT: (&str, TokenType) = ("%", TokenType::PERCENT);
const LESS: (&str, TokenType) = ("<", TokenType::LESS);
const GREATER: (&str, TokenType) = (">", TokenType::GREATER);
const EQUAL: (&str, TokenType) = ("=", TokenType::EQUAL);

// Two-character operators must precede their one-character prefixes, else
// `==` scans as two `=` tokens.
const SIMPLE_TOKENS: [(&str, TokenType); 22] = [
    EQEQUAL,
    NOTEQUAL,
    LESSEQUAL,
    GREATEREQUAL,
    DOUBLESTAR,
    DOUBLESLASH,
    LPAR,
    RPAR,
    LBRACE,
    RBRACE,
    LSQB,
    RSQB,
    COLON,
    COMMA,
    PLUS,
    MINUS,
    STAR,
    SLASH,
    PERCENT,
    LESS,
    GREATER,
    EQUAL,
];

macro_rules! alternative {
    ($t:expr) => {{
        $t
    }};
    ($t:expr, $($ts:expr),+) => {{
        concatcp!($t, "|", alternative!($($ts),+))
    }}
}

macro_rules! group {
    ($($ts:expr),+) => {{
        concatcp!(r"(", alternative!($($ts),+), ")")
    }}
}

const S_WHITESPACE: &str = r"^[ \f\t]+";
const S_NEWLINE: &str = "^\n+";
const S_NUMBER: &str = r"^[0-9]+";
const S_NAME: &str = r"^[A-Za-z_][A-Za-z0-9_]*";
const S_STRING: &str = concatcp!("^\"", group!(r#"[^"\\\n]"#, r"\\."), r#"*""#);

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(S_WHITESPACE).expect("Error compiling regex."));
static NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(S_NEWLINE).expect("Error compiling regex."));
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(S_NUMBER).expect("Error compiling regex."));
static NAME: Lazy<Regex> = Lazy::new(|| Regex::new(S_NAME).expect("Error compiling regex."));
static STRING: Lazy<Regex> = Lazy::new(|| Regex::new(S_STRING).expect("Error compiling regex."));

// Reserved spellings scan as their own token type instead of NAME. The word
// literals True/False/None share the NUMBER type and the built-in type names
// stay plain NAMEs, both inherited from the recognized language.
static KEYWORDS: Lazy<HashMap<&'static str, TokenType>> = Lazy::new(|| {
    HashMap::from([
        ("while", TokenType::WHILE),
        ("for", TokenType::FOR),
        ("def", TokenType::DEF),
        ("return", TokenType::RETURN),
        ("in", TokenType::IN),
        ("if", TokenType::IF),
        ("else", TokenType::ELSE),
        ("print", TokenType::PRINT),
        ("True", TokenType::NUMBER),
        ("False", TokenType::NUMBER),
        ("None", TokenType::NUMBER),
        ("list", TokenType::NAME),
        ("tuple", TokenType::NAME),
        ("dict", TokenType::NAME),
    ])
});

pub struct Tokenizer {
    tokens: Vec<Token>,
    start: usize,
    line: usize,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            tokens: vec![],
            start: 0,
            line: 1,
        }
    }

    pub fn tokenize(mut self, input: &str) -> Vec<Token> {
        while self.start < input.len() {
            let rest = &input[self.start..];
            if let Some(m) = NEWLINE.find(rest) {
                self.line += m.end();
                self.start += m.end();
                continue;
            }
            if let Some(m) = WHITESPACE.find(rest) {
                self.start += m.end();
                continue;
            }
            if let Some(m) = NUMBER.find(rest) {
                let value = m
                    .as_str()
                    .parse()
                    .map(TokenValue::Int)
                    .unwrap_or(TokenValue::None);
                self.push(TokenType::NUMBER, m.as_str(), value);
                continue;
            }
            if let Some(m) = NAME.find(rest) {
                let typ = KEYWORDS.get(m.as_str()).copied().unwrap_or(TokenType::NAME);
                self.push(typ, m.as_str(), TokenValue::None);
                continue;
            }
            if let Some(m) = STRING.find(rest) {
                let content = m.as_str()[1..m.as_str().len() - 1].to_string();
                self.push(TokenType::STRING, m.as_str(), TokenValue::Str(content));
                continue;
            }
            if self.find_operator(rest) {
                continue;
            }
            // Anything unclassifiable is dropped one character at a time and
            // scanning continues.
            self.start += rest.chars().next().map_or(1, char::len_utf8);
        }
        self.tokens
    }

    fn find_operator(&mut self, rest: &str) -> bool {
        for (lexeme, typ) in SIMPLE_TOKENS {
            if rest.starts_with(lexeme) {
                self.push(typ, lexeme, TokenValue::None);
                return true;
            }
        }
        false
    }

    fn push(&mut self, typ: TokenType, lexeme: &str, value: TokenValue) {
        self.start += lexeme.len();
        self.tokens.push(Token {
            typ,
            lexeme: lexeme.to_string(),
            value,
            line: self.line,
        });
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn tokenize_line(input: &str) -> Vec<Token> {
    Tokenizer::new().tokenize(input)
}
