//! Query tokenization and validation (spec.md §4.5.1, §4.5.2).

/// A parsed query token: either an operator or a search word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    And,
    Or,
    Word(String),
}

impl Token {
    fn is_operator(&self) -> bool {
        matches!(self, Token::And | Token::Or)
    }
}

/// Tokenizes a raw query line (spec.md §4.5.1).
///
/// Returns `None` if any raw token contains a non-ASCII-alphabetic
/// character (the whole query is invalid in that case). Otherwise:
/// tokens are folded to lowercase; tokens shorter than 3 characters are
/// dropped unless they are the literal `or` (note: this drop happens
/// *before* implicit-AND insertion, so `a and dog` becomes just `dog` —
/// spec.md §9's documented, intentionally-preserved quirk); an implicit
/// `and` is then inserted between any two adjacent kept non-operator
/// tokens.
pub fn tokenize(line: &str) -> Option<Vec<Token>> {
    let mut kept = Vec::new();

    for raw in line.split(|c: char| c == ' ' || c == '\t').filter(|t| !t.is_empty()) {
        if !raw.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        let lower = raw.to_ascii_lowercase();

        if lower.len() < 3 && lower != "or" {
            continue;
        }

        kept.push(match lower.as_str() {
            "and" => Token::And,
            "or" => Token::Or,
            _ => Token::Word(lower),
        });
    }

    Some(insert_implicit_and(kept))
}

/// Inserts the literal `and` between any two adjacent non-operator tokens
/// (spec.md §4.5.1's "implicit AND").
fn insert_implicit_and(tokens: Vec<Token>) -> Vec<Token> {
    let mut result = Vec::with_capacity(tokens.len());
    let mut prev_was_operand = false;

    for token in tokens {
        let is_operand = !token.is_operator();
        if is_operand && prev_was_operand {
            result.push(Token::And);
        }
        prev_was_operand = is_operand;
        result.push(token);
    }

    result
}

/// Validates a tokenized query (spec.md §4.5.2): non-empty, first and
/// last tokens are not operators, and no two operators are adjacent.
pub fn validate(tokens: &[Token]) -> bool {
    if tokens.is_empty() {
        return false;
    }
    if tokens.first().unwrap().is_operator() || tokens.last().unwrap().is_operator() {
        return false;
    }
    tokens.windows(2).all(|pair| !(pair[0].is_operator() && pair[1].is_operator()))
}
