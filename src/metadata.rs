//! Metadata block extraction for issue bodies.
//!
//! An issue body may start with a YAML block fenced by `---` lines (or `«««` / `»»»`),
//! followed by regular markdown:
//!
//! ```text
//! ---
//! image: tarte.png
//! durée: 1h
//! personnes: 4
//! ingrédients:
//!   - 1kg pommes
//!   - sel
//! ---
//! Éplucher les pommes...
//! ```
//!
//! The block is parsed into [`Metadata`] and excluded from the rendered HTML.

use log::debug;
use once_cell::sync::Lazy;
use pulldown_cmark::{html, Options, Parser};
use regex::Regex;
use serde::Deserialize;

use crate::error::RecipeError;

static METADATA_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:---+\S*\n(?s:(.+?))\n---+|«««+\S*\n(?s:(.+?))\n»»»+)(?:\n|$)")
        .expect("Invalid metadata block pattern")
});

/// Fields recognised in a metadata block. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub image: Option<String>,
    pub duration: Option<String>,
    pub servings: Option<u32>,
    pub ingredients: Option<Vec<String>>,
}

// Key names are French because existing issues are written that way.
#[derive(Debug, Default, Deserialize)]
struct MetadataWire {
    #[serde(default)]
    image: Option<ScalarText>,
    #[serde(default, rename = "durée")]
    duree: Option<ScalarText>,
    #[serde(default)]
    personnes: Option<u32>,
    #[serde(default, rename = "ingrédients")]
    ingredients: Option<Vec<ScalarText>>,
}

/// A plain YAML scalar read back as text, so `image: 123` or `- 3` stay usable.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScalarText {
    Text(String),
    Integer(i64),
    Decimal(f64),
    Flag(bool),
}

impl From<ScalarText> for String {
    fn from(scalar: ScalarText) -> Self {
        match scalar {
            ScalarText::Text(text) => text,
            ScalarText::Integer(n) => n.to_string(),
            ScalarText::Decimal(n) => n.to_string(),
            ScalarText::Flag(b) => b.to_string(),
        }
    }
}

impl From<MetadataWire> for Metadata {
    fn from(wire: MetadataWire) -> Self {
        Metadata {
            image: wire.image.map(String::from),
            duration: wire.duree.map(String::from),
            servings: wire.personnes,
            ingredients: wire
                .ingredients
                .map(|items| items.into_iter().map(String::from).collect()),
        }
    }
}

/// An issue body split into rendered content and metadata
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataDocument {
    pub html: String,
    pub metadata: Metadata,
}

/// Split a leading metadata block off `text`.
///
/// Returns the raw block text (without fences) and the remaining markdown.
/// Expects `\n` line endings.
pub fn split_metadata_block(text: &str) -> (Option<&str>, &str) {
    match METADATA_BLOCK.captures(text) {
        Some(captures) => {
            let block = captures.get(1).or_else(|| captures.get(2));
            let end = captures.get(0).map_or(0, |m| m.end());
            (block.map(|m| m.as_str()), &text[end..])
        }
        None => (None, text),
    }
}

/// Render GitHub-flavoured markdown to HTML.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

/// Parse the raw text of a metadata block.
///
/// Only malformed YAML is an error. A block that is empty, comment-only, or
/// holds something other than key/value pairs (a sentence, a list) yields
/// default metadata.
pub fn parse_metadata(raw: &str) -> Result<Metadata, RecipeError> {
    if raw.trim().is_empty() {
        return Ok(Metadata::default());
    }

    let value: serde_yaml::Value = serde_yaml::from_str(raw)?;
    match value {
        serde_yaml::Value::Mapping(_) => {
            let wire: MetadataWire = serde_yaml::from_value(value)?;
            Ok(wire.into())
        }
        other => {
            debug!("Ignoring metadata block that is not a mapping: {:?}", other);
            Ok(Metadata::default())
        }
    }
}

/// Extract metadata from an issue body and render the rest of it.
pub fn extract(body: &str) -> Result<MetadataDocument, RecipeError> {
    let normalized = body.replace("\r\n", "\n");
    let (raw, content) = split_metadata_block(&normalized);

    let metadata = match raw {
        Some(raw) => {
            debug!("Found metadata block: {:?}", raw);
            parse_metadata(raw)?
        }
        None => Metadata::default(),
    };

    Ok(MetadataDocument {
        html: render_markdown(content),
        metadata,
    })
}
