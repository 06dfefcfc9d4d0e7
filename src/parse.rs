//! Parser for multi-candidate image source attributes.
//!
//! The attribute grammar is `entry (',' entry)*` where each entry is a
//! whitespace-separated source reference followed by zero or more
//! descriptors: `300w` (width), `200h` (height), `1.5x` (density).
//! Parsing is a pure function of the attribute string and never fails;
//! irregular entries simply contribute no candidate.

use crate::Candidate;

/// Parse a `srcset`-style attribute into an ordered candidate set.
///
/// Entry order is preserved. An empty or blank attribute yields an empty
/// set, which downstream selection treats as "leave the image untouched".
pub fn parse_srcset(attr: &str) -> Vec<Candidate> {
    attr.split(',').filter_map(parse_entry).collect()
}

fn parse_entry(entry: &str) -> Option<Candidate> {
    let mut tokens = entry.split_ascii_whitespace();
    let source = tokens.next()?;

    let mut width = None;
    let mut height = None;
    let mut density = None;

    for token in tokens {
        if let Some(value) = token.strip_suffix('w') {
            width = width.or_else(|| parse_dimension(value));
        } else if let Some(value) = token.strip_suffix('h') {
            height = height.or_else(|| parse_dimension(value));
        } else if let Some(value) = token.strip_suffix('x') {
            density = density.or_else(|| parse_density(value));
        }
        // Tokens with an unrecognized suffix are ignored
    }

    Some(Candidate {
        source: source.to_string(),
        width,
        height,
        density: density.unwrap_or(1.0),
    })
}

// Malformed or non-positive numeric prefixes are treated as if the
// descriptor were absent; the first parseable descriptor of a kind wins.
fn parse_dimension(value: &str) -> Option<u32> {
    value.parse::<u32>().ok().filter(|n| *n > 0)
}

fn parse_density(value: &str) -> Option<f32> {
    value
        .parse::<f32>()
        .ok()
        .filter(|d| d.is_finite() && *d > 0.0)
}
