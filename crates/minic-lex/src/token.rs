//! Token type definitions.
//!
//! This module defines the token model produced by the scanner: the
//! [`TokenKind`] tagged union, the position-carrying [`Token`] record,
//! and the reserved-word lookup table.
//!
//! Kinds that carry a value (identifiers, integer literals, string
//! literals) carry it directly in their variant; every other kind is
//! payload-free. This makes it impossible to ask a keyword token for a
//! literal value, which is the point.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// The kind of a token, including any decoded value.
///
/// The set is closed: fifteen reserved words, twenty operator and
/// punctuation kinds, three literal kinds, and the end-of-input marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    // Reserved words
    /// `boolean`
    Boolean,
    /// `class`
    Class,
    /// `do`
    Do,
    /// `else`
    Else,
    /// `false`
    False,
    /// `if`
    If,
    /// `int`
    Int,
    /// `print`
    Print,
    /// `public`
    Public,
    /// `return`
    Return,
    /// `static`
    Static,
    /// `String`
    StringType,
    /// `true`
    True,
    /// `void`
    Void,
    /// `while`
    While,

    // Literals
    /// An identifier, carrying the matched lexeme text
    Ident(String),
    /// An integer literal, carrying the decoded (possibly saturated) value
    IntLit(i32),
    /// A string literal, carrying the decoded (possibly truncated) value
    StrLit(String),

    // Punctuation
    /// `{`
    LCurly,
    /// `}`
    RCurly,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// `;`
    Semicolon,

    // Operators
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Divide,
    /// `!`
    Not,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `=`
    Assign,
    /// `==`
    Equals,
    /// `!=`
    NotEquals,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEq,
    /// `>=`
    GreaterEq,

    /// End of input; returned forever once the source is exhausted
    Eof,
}

impl TokenKind {
    /// Returns the stable, human-readable name of this kind.
    ///
    /// These are the names the token-dump harness prints; they do not
    /// include the payload.
    ///
    /// # Example
    ///
    /// ```
    /// use minic_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::Class.name(), "CLASS");
    /// assert_eq!(TokenKind::LessEq.name(), "LESSEQ");
    /// assert_eq!(TokenKind::Ident("x".to_string()).name(), "ID");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Class => "CLASS",
            TokenKind::Do => "DO",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Int => "INT",
            TokenKind::Print => "PRINT",
            TokenKind::Public => "PUBLIC",
            TokenKind::Return => "RETURN",
            TokenKind::Static => "STATIC",
            TokenKind::StringType => "STRING",
            TokenKind::True => "TRUE",
            TokenKind::Void => "VOID",
            TokenKind::While => "WHILE",
            TokenKind::Ident(_) => "ID",
            TokenKind::IntLit(_) => "INTLITERAL",
            TokenKind::StrLit(_) => "STRINGLITERAL",
            TokenKind::LCurly => "LCURLY",
            TokenKind::RCurly => "RCURLY",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Not => "NOT",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Equals => "EQUALS",
            TokenKind::NotEquals => "NOTEQUALS",
            TokenKind::Less => "LESS",
            TokenKind::Greater => "GREATER",
            TokenKind::LessEq => "LESSEQ",
            TokenKind::GreaterEq => "GREATEREQ",
            TokenKind::Eof => "EOF",
        }
    }

    /// Returns true for the end-of-input marker.
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned token: a kind plus the position of its first character.
///
/// `line` and `column` are 1-based and always refer to the first
/// character of the lexeme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The classified kind, including any decoded value
    pub kind: TokenKind,
    /// Line of the lexeme's first character (1-based)
    pub line: u32,
    /// Column of the lexeme's first character (1-based)
    pub column: u32,
}

impl Token {
    /// Creates a token at the given position.
    pub fn new(kind: TokenKind, line: u32, column: u32) -> Self {
        Self { kind, line, column }
    }

    /// Returns true for the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind.is_eof()
    }
}

/// The reserved-word table, built on first use.
fn keyword_table() -> &'static FxHashMap<&'static str, TokenKind> {
    static KEYWORDS: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    KEYWORDS.get_or_init(|| {
        let mut table = FxHashMap::default();
        table.insert("boolean", TokenKind::Boolean);
        table.insert("class", TokenKind::Class);
        table.insert("do", TokenKind::Do);
        table.insert("else", TokenKind::Else);
        table.insert("false", TokenKind::False);
        table.insert("if", TokenKind::If);
        table.insert("int", TokenKind::Int);
        table.insert("print", TokenKind::Print);
        table.insert("public", TokenKind::Public);
        table.insert("return", TokenKind::Return);
        table.insert("static", TokenKind::Static);
        table.insert("String", TokenKind::StringType);
        table.insert("true", TokenKind::True);
        table.insert("void", TokenKind::Void);
        table.insert("while", TokenKind::While);
        table
    })
}

/// Looks up an identifier lexeme in the reserved-word table.
///
/// The match is exact and case-sensitive: `While` and `CLASS` are plain
/// identifiers.
///
/// # Example
///
/// ```
/// use minic_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("while"), Some(TokenKind::While));
/// assert_eq!(keyword_from_ident("While"), None);
/// assert_eq!(keyword_from_ident("classify"), None);
/// ```
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    keyword_table().get(text).cloned()
}
