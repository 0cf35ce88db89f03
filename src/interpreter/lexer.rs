use std::fmt;

use logos::Logos;

use crate::{ast::Number, error::LexError};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// The kind of a lexical token.
///
/// Every rune, operator and separator is a single glyph except `==` and `<-`.
/// The derive compiles this table into one immutable automaton; longest match
/// makes the two-character operators win over their one-character prefixes.
///
/// Identifiers may not *start* with a letter that is itself a rune (`Y`, `Q`,
/// `I`, `Π`, `Λ`): the rune table is consulted before identifiers, so `Index`
/// lexes as `False` followed by `ndex`.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"\s+")]
pub enum TokenKind {
    /// `Π`
    #[token("Π")]
    FuncDef,
    /// `↑`
    #[token("↑")]
    EntryPoint,
    /// `Y`
    #[token("Y")]
    If,
    /// `Q`
    #[token("Q")]
    True,
    /// `I`
    #[token("I")]
    False,
    /// `↻`
    #[token("↻")]
    Loop,
    /// `→`
    #[token("→")]
    Return,
    /// `⁞`
    #[token("⁞")]
    Log,
    /// `—`
    #[token("—")]
    Var,
    /// `Λ`
    #[token("Λ")]
    Const,
    /// `□`
    #[token("□")]
    TypeInt,
    /// `⊡`
    #[token("⊡")]
    TypeFloat,
    /// `∞`
    #[token("∞")]
    TypeStr,
    /// `◇`
    #[token("◇")]
    TypeChar,
    /// `≡`
    #[token("≡")]
    TypeCollection,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `:`
    #[token(":")]
    Assign,
    /// `@`
    #[token("@")]
    At,
    /// `#`
    #[token("#")]
    Hash,
    /// `∈`
    #[token("∈")]
    In,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `<-`, the push operator (rendered `←`).
    #[token("<-")]
    Push,
    /// Float literal tokens such as `2.5` or `7.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    Float(f64),
    /// Integer literal tokens such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Identifier tokens; variable or function names such as `total`.
    #[regex(r"[\p{L}&&[^YQIΠΛ]][\p{L}\p{N}]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// End of input. Never produced by the automaton itself.
    Eof,
}

impl TokenKind {
    /// The source glyph of a rune, operator or separator.
    ///
    /// Returns `None` for literals, identifiers and `Eof`.
    ///
    /// # Example
    /// ```
    /// use tengri::interpreter::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::Const.glyph(), Some("Λ"));
    /// assert_eq!(TokenKind::Push.glyph(), Some("<-"));
    /// assert_eq!(TokenKind::Integer(3).glyph(), None);
    /// ```
    #[must_use]
    pub const fn glyph(&self) -> Option<&'static str> {
        let glyph = match self {
            Self::FuncDef => "Π",
            Self::EntryPoint => "↑",
            Self::If => "Y",
            Self::True => "Q",
            Self::False => "I",
            Self::Loop => "↻",
            Self::Return => "→",
            Self::Log => "⁞",
            Self::Var => "—",
            Self::Const => "Λ",
            Self::TypeInt => "□",
            Self::TypeFloat => "⊡",
            Self::TypeStr => "∞",
            Self::TypeChar => "◇",
            Self::TypeCollection => "≡",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Assign => ":",
            Self::At => "@",
            Self::Hash => "#",
            Self::In => "∈",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Comma => ",",
            Self::EqualEqual => "==",
            Self::Push => "<-",
            Self::Float(_) | Self::Integer(_) | Self::Identifier(_) | Self::Comment | Self::Eof => {
                return None;
            },
        };
        Some(glyph)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Identifier(name) => f.write_str(name),
            Self::Comment => f.write_str("comment"),
            Self::Eof => f.write_str("end of input"),
            other => f.write_str(other.glyph().unwrap_or_default()),
        }
    }
}

/// The literal value carried by a token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal<'a> {
    /// Numeric literal value.
    Number(Number),
    /// Identifier name or rune glyph.
    Text(&'a str),
}

/// A token together with its 1-based source position.
///
/// Columns count characters, not bytes, so `— □ a` puts `a` in column 5.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What was recognized.
    pub kind:   TokenKind,
    /// Source line.
    pub line:   usize,
    /// Source column.
    pub column: usize,
}

impl Token {
    /// The literal value of the token, if it has one.
    ///
    /// Runes and operators carry their glyph, except the push operator `<-`,
    /// which carries `←`.
    ///
    /// # Example
    /// ```
    /// use tengri::{
    ///     ast::Number,
    ///     interpreter::lexer::{Literal, Token, TokenKind},
    /// };
    ///
    /// let token = Token { kind:   TokenKind::Integer(10),
    ///                     line:   1,
    ///                     column: 7, };
    /// assert_eq!(token.literal(), Some(Literal::Number(Number::Integer(10))));
    ///
    /// let eof = Token { kind:   TokenKind::Eof,
    ///                   line:   1,
    ///                   column: 9, };
    /// assert_eq!(eof.literal(), None);
    /// ```
    #[must_use]
    pub fn literal(&self) -> Option<Literal<'_>> {
        match &self.kind {
            TokenKind::Integer(n) => Some(Literal::Number(Number::Integer(*n))),
            TokenKind::Float(x) => Some(Literal::Number(Number::Float(*x))),
            TokenKind::Identifier(name) => Some(Literal::Text(name)),
            TokenKind::Push => Some(Literal::Text("←")),
            kind => kind.glyph().map(Literal::Text),
        }
    }
}

/// A lazy, single-pass tokenizer over a source string.
///
/// `next_token` never re-lexes: every call advances past exactly one token.
/// The iterator yields the final `Eof` token once and stops after it, or right
/// after the first error.
pub struct Lexer<'src> {
    inner:    logos::Lexer<'src, TokenKind>,
    /// Byte offset up to which `line` and `column` have been computed.
    cursor:   usize,
    line:     usize,
    column:   usize,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:    TokenKind::lexer(source),
               cursor:   0,
               line:     1,
               column:   1,
               finished: false, }
    }

    /// Produces the next token.
    ///
    /// Whitespace and `//` comments are skipped. At the end of input an `Eof`
    /// token is returned, on every subsequent call as well.
    ///
    /// # Errors
    /// - `UnrecognizedCharacter` if no token rule matches the input.
    /// - `NumberTooLarge` if an integer literal does not fit in `i64`.
    pub fn next_token(&mut self) -> LexResult<Token> {
        let Some(result) = self.inner.next() else {
            let (line, column) = self.locate(self.inner.source().len());
            return Ok(Token { kind: TokenKind::Eof,
                              line,
                              column });
        };

        let (line, column) = self.locate(self.inner.span().start);

        match result {
            Ok(kind) => {
                log::trace!("{line}:{column}: {kind:?}");
                Ok(Token { kind, line, column })
            },
            Err(()) => {
                let slice = self.inner.slice();
                let character = slice.chars().next().unwrap_or_default();
                if character.is_ascii_digit() {
                    Err(LexError::NumberTooLarge { literal: slice.to_string(),
                                                   line,
                                                   column })
                } else {
                    Err(LexError::UnrecognizedCharacter { character,
                                                          line,
                                                          column })
                }
            },
        }
    }

    /// Advances the position bookkeeping to byte `offset` and returns the line
    /// and column found there.
    fn locate(&mut self, offset: usize) -> (usize, usize) {
        let source = self.inner.source();
        for c in source[self.cursor..offset].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.cursor = offset;
        (self.line, self.column)
    }
}

impl Iterator for Lexer<'_> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = matches!(&token, Err(_) | Ok(Token { kind: TokenKind::Eof, .. }));
        Some(token)
    }
}

/// Tokenizes a whole source string.
///
/// The returned vector always ends with an `Eof` token. On failure no partial
/// token list is returned.
///
/// # Errors
/// Returns the first [`LexError`] encountered.
///
/// # Example
/// ```
/// use tengri::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("— □ a : 10").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Var,
///                 TokenKind::TypeInt,
///                 TokenKind::Identifier("a".into()),
///                 TokenKind::Assign,
///                 TokenKind::Integer(10),
///                 TokenKind::Eof]);
///
/// assert!(tokenize("— □ a : $").is_err());
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let tokens = Lexer::new(source).collect::<LexResult<Vec<_>>>()?;
    log::debug!("lexed {} tokens", tokens.len());
    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice.
fn parse_float(lex: &logos::Lexer<TokenKind>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the literal overflows `i64`, which surfaces as a lexer
/// error.
fn parse_integer(lex: &logos::Lexer<TokenKind>) -> Option<i64> {
    lex.slice().parse().ok()
}
