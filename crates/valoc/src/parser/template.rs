//! Template string parser using winnow.
//!
//! Parses message templates into an AST. Handles:
//! - Literal text segments
//! - Named placeholders: `{field}`, `{min}`
//! - Bare positional placeholders: `{0}`
//! - Position-prefixed placeholders: `0:{min}` (the prefix is part of the token)
//! - Escape sequences: {{ }}
//!
//! Parsing never fails. Templates are free-form translator text, so any
//! sequence that does not form a well-shaped token (a lone `{`, an
//! unclosed brace, an invalid key) stays in the output as literal text.

use winnow::combinator::{alt, delimited};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use super::ast::{Segment, Template};

/// Parse a template string into an AST.
pub fn parse_template(input: &str) -> Template {
    let mut remaining = input;
    let mut segments = Vec::new();

    while !remaining.is_empty() {
        match segment(&mut remaining) {
            Ok(seg) => segments.push(seg),
            Err(_) => {
                // Unparseable tail becomes literal text.
                segments.push(Segment::Literal(remaining.to_string()));
                remaining = "";
            }
        }
    }

    Template {
        segments: merge_literals(segments),
    }
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result: Vec<Segment> = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse a single segment: escape, placeholder, or one literal character.
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((
        escape_sequence,
        prefixed_placeholder,
        bare_placeholder,
        literal_char,
    ))
    .parse_next(input)
}

/// Parse escape sequences: {{ -> {, }} -> }
fn escape_sequence(input: &mut &str) -> ModalResult<Segment> {
    alt((
        "{{".value(Segment::Literal("{".to_string())),
        "}}".value(Segment::Literal("}".to_string())),
    ))
    .parse_next(input)
}

/// Parse a position-prefixed placeholder: 0:{min}
///
/// The whole sequence including the `0:` prefix is one token and is
/// substituted (or restored) as a unit.
fn prefixed_placeholder(input: &mut &str) -> ModalResult<Segment> {
    (index, ':', delimited('{', identifier, '}'))
        .with_taken()
        .map(|((position, _, name), raw)| Segment::Placeholder {
            position: Some(position),
            name: name.to_string(),
            raw: raw.to_string(),
        })
        .parse_next(input)
}

/// Parse a braced placeholder: {field}, {min}, {0}
fn bare_placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited('{', placeholder_key, '}')
        .with_taken()
        .map(|((position, name), raw)| Segment::Placeholder {
            position,
            name: name.to_string(),
            raw: raw.to_string(),
        })
        .parse_next(input)
}

/// The key inside braces: an identifier, or a bare zero-based index.
fn placeholder_key<'i>(input: &mut &'i str) -> ModalResult<(Option<usize>, &'i str)> {
    alt((
        identifier.map(|name| (None, name)),
        index.with_taken().map(|(n, digits)| (Some(n), digits)),
    ))
    .parse_next(input)
}

/// Parse a zero-based decimal index.
fn index(input: &mut &str) -> ModalResult<usize> {
    take_while(1.., |c: char| c.is_ascii_digit())
        .try_map(str::parse)
        .parse_next(input)
}

/// Parse an identifier: a letter or underscore, then alphanumerics or
/// underscores.
fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        take_while(1, |c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
    )
        .take()
        .parse_next(input)
}

/// Any single character as literal text.
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}
