//! Text syntax for propositional sentences.
//!
//! ```text
//! sentence := implies ( ("<=>" | "↔" | "iff") implies )*
//! implies  := or ( ("=>" | "→" | "implies") implies )?
//! or       := and ( ("or" | "∨" | "|" | "||") and )*
//! and      := unary ( ("and" | "∧" | "&" | "&&") unary )*
//! unary    := ("not" | "¬" | "!" | "~") unary | atom
//! atom     := IDENT | "\"" any text "\"" | "(" sentence ")"
//! ```
//!
//! Keywords are case-insensitive and reserved: a symbol named `and`, `or`,
//! `not`, `implies` or `iff` must be quoted. Nesting through `not`,
//! parentheses, `=>` and `<=>` is limited to [`MAX_DEPTH`] levels.

use crate::errors::{AiError, Result};
use crate::logic::sentence::Sentence;

/// Deepest nesting a formula may have.
pub const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
enum TokenKind {
    Symbol(String),
    LParen,
    RParen,
    Not,
    And,
    Or,
    Implies,
    Iff,
}

#[derive(Debug, Clone)]
struct Token {
    kind: TokenKind,
    offset: usize,
}

/// Parse a formula into a sentence.
///
/// # Errors
///
/// Returns `Parse` with the byte offset of the offending input.
///
/// # Example
///
/// ```
/// use cs50ai_core::logic::{parse, Sentence};
///
/// let s = parse("rain => not sunny").unwrap();
/// assert_eq!(
///     s,
///     Sentence::implication(
///         Sentence::symbol("rain"),
///         Sentence::not(Sentence::symbol("sunny"))
///     )
/// );
/// ```
pub fn parse(input: &str) -> Result<Sentence> {
    let tokens = tokenize(input)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        input_len: input.len(),
    };
    let sentence = parser.biconditional()?;
    if let Some(token) = parser.peek() {
        return Err(parse_error(
            token.offset,
            format!("unexpected {}", describe(&token.kind)),
        ));
    }
    Ok(sentence)
}

fn parse_error(offset: usize, reason: impl Into<String>) -> AiError {
    AiError::Parse {
        offset,
        reason: reason.into(),
    }
}

fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Symbol(name) => format!("symbol `{}`", name),
        TokenKind::LParen => "`(`".to_string(),
        TokenKind::RParen => "`)`".to_string(),
        TokenKind::Not => "`not`".to_string(),
        TokenKind::And => "`and`".to_string(),
        TokenKind::Or => "`or`".to_string(),
        TokenKind::Implies => "`=>`".to_string(),
        TokenKind::Iff => "`<=>`".to_string(),
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        let kind = match c {
            c if c.is_whitespace() => continue,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '¬' | '!' | '~' => TokenKind::Not,
            '∧' => TokenKind::And,
            '∨' => TokenKind::Or,
            '→' => TokenKind::Implies,
            '↔' => TokenKind::Iff,
            '&' | '|' => {
                // `&&` and `||` are accepted as well
                if chars.peek().map(|(_, next)| *next) == Some(c) {
                    chars.next();
                }
                if c == '&' {
                    TokenKind::And
                } else {
                    TokenKind::Or
                }
            }
            '=' => match chars.next() {
                Some((_, '>')) => TokenKind::Implies,
                _ => return Err(parse_error(offset, "expected `=>`")),
            },
            '<' => match (chars.next(), chars.next()) {
                (Some((_, '=')), Some((_, '>'))) => TokenKind::Iff,
                _ => return Err(parse_error(offset, "expected `<=>`")),
            },
            '"' => {
                let mut name = String::new();
                let mut closed = false;
                for (_, inner) in chars.by_ref() {
                    if inner == '"' {
                        closed = true;
                        break;
                    }
                    name.push(inner);
                }
                if !closed {
                    return Err(parse_error(offset, "unterminated quoted symbol"));
                }
                if name.trim().is_empty() {
                    return Err(parse_error(offset, "empty quoted symbol"));
                }
                TokenKind::Symbol(name)
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut word = String::from(c);
                while let Some((_, next)) = chars.peek() {
                    if next.is_alphanumeric() || *next == '_' {
                        word.push(*next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                match word.to_ascii_lowercase().as_str() {
                    "not" => TokenKind::Not,
                    "and" => TokenKind::And,
                    "or" => TokenKind::Or,
                    "implies" => TokenKind::Implies,
                    "iff" => TokenKind::Iff,
                    _ => TokenKind::Symbol(word),
                }
            }
            other => {
                return Err(parse_error(
                    offset,
                    format!("unexpected character `{}`", other),
                ))
            }
        };
        tokens.push(Token { kind, offset });
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    input_len: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        self.eat_at(kind).is_some()
    }

    /// Consume a token of `kind`, returning its offset.
    fn eat_at(&mut self, kind: &TokenKind) -> Option<usize> {
        let token = self.peek().filter(|t| &t.kind == kind)?;
        let offset = token.offset;
        self.pos += 1;
        Some(offset)
    }

    fn descend(&mut self, offset: usize) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(parse_error(
                offset,
                format!("nesting deeper than {} levels", MAX_DEPTH),
            ));
        }
        Ok(())
    }

    fn biconditional(&mut self) -> Result<Sentence> {
        let mut left = self.implication()?;
        // A chain `a <=> b <=> c` nests to the left, one level per link.
        let mut links = 0;
        while let Some(offset) = self.eat_at(&TokenKind::Iff) {
            self.descend(offset)?;
            links += 1;
            let right = self.implication()?;
            left = Sentence::biconditional(left, right);
        }
        self.depth -= links;
        Ok(left)
    }

    fn implication(&mut self) -> Result<Sentence> {
        let antecedent = self.disjunction()?;
        if let Some(offset) = self.eat_at(&TokenKind::Implies) {
            self.descend(offset)?;
            let consequent = self.implication()?;
            self.depth -= 1;
            return Ok(Sentence::implication(antecedent, consequent));
        }
        Ok(antecedent)
    }

    fn disjunction(&mut self) -> Result<Sentence> {
        let first = self.conjunction()?;
        let mut parts = vec![first];
        while self.eat(&TokenKind::Or) {
            parts.push(self.conjunction()?);
        }
        Ok(collapse(parts, Sentence::or))
    }

    fn conjunction(&mut self) -> Result<Sentence> {
        let first = self.unary()?;
        let mut parts = vec![first];
        while self.eat(&TokenKind::And) {
            parts.push(self.unary()?);
        }
        Ok(collapse(parts, Sentence::and))
    }

    fn unary(&mut self) -> Result<Sentence> {
        if let Some(offset) = self.eat_at(&TokenKind::Not) {
            self.descend(offset)?;
            let operand = self.unary()?;
            self.depth -= 1;
            return Ok(Sentence::not(operand));
        }
        self.atom()
    }

    fn atom(&mut self) -> Result<Sentence> {
        let Some(token) = self.tokens.get(self.pos).cloned() else {
            return Err(parse_error(self.input_len, "unexpected end of input"));
        };
        self.pos += 1;
        match token.kind {
            TokenKind::Symbol(name) => Ok(Sentence::Symbol(name)),
            TokenKind::LParen => {
                self.descend(token.offset)?;
                let inner = self.biconditional()?;
                if !self.eat(&TokenKind::RParen) {
                    let offset = self.peek().map_or(self.input_len, |t| t.offset);
                    return Err(parse_error(offset, "expected `)`"));
                }
                self.depth -= 1;
                Ok(inner)
            }
            other => Err(parse_error(
                token.offset,
                format!("expected a symbol or `(`, found {}", describe(&other)),
            )),
        }
    }
}

fn collapse(mut parts: Vec<Sentence>, build: fn(Vec<Sentence>) -> Sentence) -> Sentence {
    if parts.len() == 1 {
        parts.remove(0)
    } else {
        build(parts)
    }
}
