//! Splits a stylesheet into its top-level `@layer` blocks.
//!
//! The scanner makes a single forward pass over the text and counts braces to
//! find where each `@layer <name> { ... }` block ends. It does not tokenize
//! CSS: braces inside strings or comments are counted like any other brace.
//!
//! Everything outside a layer block is collected under [`OTHERS_KEY`].

use crate::error::{SplitError, SplitResult};
use indexmap::IndexMap;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// Key under which content outside any layer block is stored.
pub const OTHERS_KEY: &str = "others";

/// Layer name to trimmed block text, in first-seen order.
pub type LayerMap = IndexMap<String, String>;

/// Matches `@layer <name> {` at the start of the haystack.
static LAYER_OPENER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@layer\s+([\w-]+)\s*\{").expect("valid regex for layer opener")
});

/// Outcome of a scan that was not aborted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerSplit {
    /// Extracted layers, plus [`OTHERS_KEY`] when ungrouped text was seen.
    pub layers: LayerMap,
    /// Layer still open when the input ended. Its content is not in `layers`.
    pub unterminated: Option<String>,
}

impl LayerSplit {
    /// The non-fatal diagnostic raised by the scan, if any.
    pub fn diagnostic(&self) -> Option<SplitError> {
        self.unterminated.as_deref().map(SplitError::unterminated)
    }
}

/// A layer opener found at some cursor position.
struct Opener<'a> {
    /// Full matched text, `@layer <name> {`
    text: &'a str,
    name: &'a str,
}

/// Try to match a layer opener at the very start of `rest`.
fn match_opener(rest: &str) -> Option<Opener<'_>> {
    // Cheap prefix test so the regex only runs where an opener can start
    if !rest.starts_with("@layer") {
        return None;
    }

    let caps = LAYER_OPENER.captures(rest)?;
    Some(Opener {
        text: caps.get(0)?.as_str(),
        name: caps.get(1)?.as_str(),
    })
}

/// Split `css` into its top-level layers.
///
/// Each layer's text is kept verbatim, including its `@layer <name> {` opener
/// and closing brace, and trimmed of surrounding whitespace. A layer name
/// that appears twice keeps only the later block.
///
/// # Returns
/// - `Ok(LayerSplit)` - the layers found; `unterminated` is set when the input
///   ended inside a layer, which is then left out
/// - `Err(SplitError::Nested)` - a layer opener appeared inside another layer
pub fn split_layers(css: &str) -> SplitResult<LayerSplit> {
    let mut layers = LayerMap::new();
    let mut depth: usize = 0;
    let mut current: Option<&str> = None;
    let mut buffer = String::new();
    let mut others = String::new();
    let mut cursor = 0;

    while cursor < css.len() {
        let rest = &css[cursor..];

        if let Some(opener) = match_opener(rest) {
            if let Some(open) = current {
                return Err(SplitError::nested(open));
            }

            debug!("Opening layer {} at byte {}", opener.name, cursor);
            current = Some(opener.name);
            depth += 1;
            buffer.push_str(opener.text);
            cursor += opener.text.len();
            continue;
        }

        let Some(ch) = rest.chars().next() else {
            break;
        };

        match ch {
            '{' => depth += 1,
            '}' => {
                // An unmatched `}` leaves depth at zero and lands in `others`
                depth = depth.saturating_sub(1);

                if depth == 0 {
                    match current.take() {
                        Some(name) => {
                            buffer.push('}');
                            debug!("Closing layer {} at byte {}", name, cursor);
                            layers.insert(name.to_string(), buffer.trim().to_string());
                        }
                        None => others.push('}'),
                    }
                    buffer.clear();
                    cursor += 1;
                    continue;
                }
            }
            _ => {}
        }

        if current.is_some() {
            buffer.push(ch);
        } else {
            others.push(ch);
        }
        cursor += ch.len_utf8();
    }

    let unterminated = current.map(|name| {
        debug!(
            "Layer {} still open at end of input; dropping {} buffered bytes",
            name,
            buffer.len()
        );
        name.to_string()
    });

    if !others.is_empty() {
        debug!("Collected {} bytes outside layers", others.len());
        layers.insert(OTHERS_KEY.to_string(), others.trim().to_string());
    }

    Ok(LayerSplit {
        layers,
        unterminated,
    })
}
