//! Lexer (tokenizer) for story filter strings.

use std::fmt;

use super::error::{FilterError, FilterResult};

/// The kind of a [`FilterToken`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Free text or a field value.
    Literal,
    /// A field name (text that was followed by `:`).
    Field,
}

impl TokenKind {
    /// Returns the lowercase name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Literal => "literal",
            TokenKind::Field => "field",
        }
    }
}

/// A token in a filter string.
///
/// The text is already decoded: quotes are stripped and surrounding
/// whitespace is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterToken {
    /// A bare word or a quoted phrase.
    Literal(String),

    /// A field name, e.g. `author` in `author:someone`.
    Field(String),
}

impl FilterToken {
    /// Creates a literal token.
    pub fn literal(text: impl Into<String>) -> Self {
        FilterToken::Literal(text.into())
    }

    /// Creates a field token.
    pub fn field(name: impl Into<String>) -> Self {
        FilterToken::Field(name.into())
    }

    /// Returns the token kind.
    pub fn kind(&self) -> TokenKind {
        match self {
            FilterToken::Literal(_) => TokenKind::Literal,
            FilterToken::Field(_) => TokenKind::Field,
        }
    }

    /// Returns the decoded token text.
    pub fn text(&self) -> &str {
        match self {
            FilterToken::Literal(text) | FilterToken::Field(text) => text,
        }
    }

    /// Returns true if this is a literal token.
    pub fn is_literal(&self) -> bool {
        matches!(self, FilterToken::Literal(_))
    }

    /// Returns true if this is a field token.
    pub fn is_field(&self) -> bool {
        matches!(self, FilterToken::Field(_))
    }
}

impl fmt::Display for FilterToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterToken::Literal(text) => write!(f, "LITERAL({text})"),
            FilterToken::Field(text) => write!(f, "FIELD({text})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    /// Inside a quoted literal; holds the byte offset of the opening quote.
    InLiteral(usize),
}

/// Lexer for tokenizing filter strings.
///
/// The lexer makes a single left-to-right pass, keeping a mark at the start of
/// the pending token. Outside quotes, `:` ends a field name, a space ends a
/// literal, and `"` opens a quoted literal. Inside quotes only the closing `"`
/// is significant. The lexer never looks at neighbouring tokens: every
/// colon-terminated segment is a field, whatever precedes it.
pub struct Lexer<'a> {
    input: &'a str,
    /// Byte offset where the pending token starts.
    mark: usize,
    state: ScanState,
    tokens: Vec<FilterToken>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            mark: 0,
            state: ScanState::Normal,
            tokens: Vec::new(),
        }
    }

    /// Pushes the trimmed text between the mark and `end`, if any.
    fn flush(&mut self, end: usize, make: fn(String) -> FilterToken) {
        let input = self.input;
        let text = input[self.mark..end].trim();
        if !text.is_empty() {
            self.tokens.push(make(text.to_string()));
        }
    }

    /// Collects all tokens.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::UnterminatedLiteral` if a quoted literal is still
    /// open at the end of input.
    pub fn tokenize(mut self) -> FilterResult<Vec<FilterToken>> {
        let input = self.input;

        for (pos, c) in input.char_indices() {
            match self.state {
                ScanState::InLiteral(_) => {
                    if c == '"' {
                        self.flush(pos, FilterToken::Literal);
                        self.state = ScanState::Normal;
                        self.mark = pos + 1;
                    }
                }
                ScanState::Normal => match c {
                    ':' => {
                        self.flush(pos, FilterToken::Field);
                        self.mark = pos + 1;
                    }
                    ' ' => {
                        self.flush(pos, FilterToken::Literal);
                        self.mark = pos + 1;
                    }
                    '"' => {
                        self.flush(pos, FilterToken::Literal);
                        self.state = ScanState::InLiteral(pos);
                        self.mark = pos + 1;
                    }
                    _ => {}
                },
            }
        }

        if let ScanState::InLiteral(opened_at) = self.state {
            tracing::debug!(position = opened_at, "filter has an unterminated quote");
            return Err(FilterError::unterminated_literal(opened_at));
        }

        self.flush(input.len(), FilterToken::Literal);
        tracing::trace!(count = self.tokens.len(), "tokenized filter");
        Ok(self.tokens)
    }
}

/// Tokenizes a filter string.
///
/// Shorthand for `Lexer::new(input).tokenize()`.
///
/// # Example
///
/// ```
/// use btell_filter::filter::{tokenize, FilterToken};
///
/// let tokens = tokenize("author:\"Some Fancypants\"").unwrap();
/// assert_eq!(
///     tokens,
///     vec![FilterToken::field("author"), FilterToken::literal("Some Fancypants")]
/// );
/// ```
pub fn tokenize(input: &str) -> FilterResult<Vec<FilterToken>> {
    Lexer::new(input).tokenize()
}
