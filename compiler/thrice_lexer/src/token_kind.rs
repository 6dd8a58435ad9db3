//! The closed set of token kinds produced by the scanner.

use std::fmt;

/// Classification of a lexeme.
///
/// Variants are grouped the way the mark and keyword tables group them:
/// delimiters, operators, markers, literals, keywords, then the two
/// catch-all kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // === Delimiters ===
    OpeningParenthesis,
    ClosingParenthesis,
    OpeningBrace,
    ClosingBrace,
    OpeningBracket,
    ClosingBracket,
    /// `'`, the character literal delimiter.
    Prime,
    /// `"`, the string literal delimiter.
    Quote,
    /// `` ` ``, the raw string literal delimiter.
    Backtick,

    // === Arithmetic ===
    CaretEquals,
    Caret,
    StarEquals,
    Star,
    SlashEquals,
    Slash,
    PlusEquals,
    Plus,
    MinusEquals,
    Minus,

    // === Logical ===
    AmpersandEquals,
    Ampersand,
    PipeEquals,
    Pipe,
    Exclamation,

    // === Comparison ===
    LeftArrowEquals,
    LeftArrow,
    RightArrowEquals,
    RightArrow,
    ExclamationEquals,
    EqualsEquals,

    // === Other Operators ===
    Dollar,
    Tilde,
    Dot,

    // === Markers ===
    Equals,
    Comma,
    Colon,
    Semicolon,
    At,

    // === Literals ===
    Character,
    String,
    RawString,
    Decimal,

    // === Visibility Keywords ===
    Private,
    Protected,
    Public,
    Import,

    // === Definition Keywords ===
    Const,
    Var,
    Func,
    Proc,
    Entrypoint,
    Free,

    // === Type Keywords ===
    Interface,
    Struct,
    Class,
    Enum,
    Union,
    Variant,

    // === Control-Flow Keywords ===
    If,
    Else,
    For,
    While,
    Do,
    Switch,
    Case,
    Default,
    Fallthrough,
    Break,
    Continue,
    Return,

    // === Qualifier Keywords ===
    Mutable,
    Shared,
    Volatile,
    Alignas,
    Threadlocal,

    Identifier,
    /// A single codepoint no rule could classify.
    Unknown,
}

impl TokenKind {
    /// Upper-case name used in token dumps, e.g. `EQUALS_EQUALS`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::OpeningParenthesis => "OPENING_PARENTHESIS",
            Self::ClosingParenthesis => "CLOSING_PARENTHESIS",
            Self::OpeningBrace => "OPENING_BRACE",
            Self::ClosingBrace => "CLOSING_BRACE",
            Self::OpeningBracket => "OPENING_BRACKET",
            Self::ClosingBracket => "CLOSING_BRACKET",
            Self::Prime => "PRIME",
            Self::Quote => "QUOTE",
            Self::Backtick => "BACKTICK",
            Self::CaretEquals => "CARET_EQUALS",
            Self::Caret => "CARET",
            Self::StarEquals => "STAR_EQUALS",
            Self::Star => "STAR",
            Self::SlashEquals => "SLASH_EQUALS",
            Self::Slash => "SLASH",
            Self::PlusEquals => "PLUS_EQUALS",
            Self::Plus => "PLUS",
            Self::MinusEquals => "MINUS_EQUALS",
            Self::Minus => "MINUS",
            Self::AmpersandEquals => "AMPERSAND_EQUALS",
            Self::Ampersand => "AMPERSAND",
            Self::PipeEquals => "PIPE_EQUALS",
            Self::Pipe => "PIPE",
            Self::Exclamation => "EXCLAMATION",
            Self::LeftArrowEquals => "LEFT_ARROW_EQUALS",
            Self::LeftArrow => "LEFT_ARROW",
            Self::RightArrowEquals => "RIGHT_ARROW_EQUALS",
            Self::RightArrow => "RIGHT_ARROW",
            Self::ExclamationEquals => "EXCLAMATION_EQUALS",
            Self::EqualsEquals => "EQUALS_EQUALS",
            Self::Dollar => "DOLLAR",
            Self::Tilde => "TILDE",
            Self::Dot => "DOT",
            Self::Equals => "EQUALS",
            Self::Comma => "COMMA",
            Self::Colon => "COLON",
            Self::Semicolon => "SEMICOLON",
            Self::At => "AT",
            Self::Character => "CHARACTER",
            Self::String => "STRING",
            Self::RawString => "RAW_STRING",
            Self::Decimal => "DECIMAL",
            Self::Private => "PRIVATE",
            Self::Protected => "PROTECTED",
            Self::Public => "PUBLIC",
            Self::Import => "IMPORT",
            Self::Const => "CONST",
            Self::Var => "VAR",
            Self::Func => "FUNC",
            Self::Proc => "PROC",
            Self::Entrypoint => "ENTRYPOINT",
            Self::Free => "FREE",
            Self::Interface => "INTERFACE",
            Self::Struct => "STRUCT",
            Self::Class => "CLASS",
            Self::Enum => "ENUM",
            Self::Union => "UNION",
            Self::Variant => "VARIANT",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::For => "FOR",
            Self::While => "WHILE",
            Self::Do => "DO",
            Self::Switch => "SWITCH",
            Self::Case => "CASE",
            Self::Default => "DEFAULT",
            Self::Fallthrough => "FALLTHROUGH",
            Self::Break => "BREAK",
            Self::Continue => "CONTINUE",
            Self::Return => "RETURN",
            Self::Mutable => "MUTABLE",
            Self::Shared => "SHARED",
            Self::Volatile => "VOLATILE",
            Self::Alignas => "ALIGNAS",
            Self::Threadlocal => "THREADLOCAL",
            Self::Identifier => "IDENTIFIER",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Returns `true` for the four literal kinds.
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::Character | Self::String | Self::RawString | Self::Decimal
        )
    }

}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
