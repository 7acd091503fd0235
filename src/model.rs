use serde::Serialize;

use crate::github::Label;

/// A recipe derived from one open issue
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub details_html: String,
    pub details_markdown: String,
    pub issue_link: String,
    pub comments: Vec<Comment>,
}

/// One ingredient line. `unit` is only ever set together with `quantity`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub name: String,
}

impl Ingredient {
    /// An ingredient with no quantity, e.g. "sel"
    pub fn named(name: impl Into<String>) -> Self {
        Ingredient {
            quantity: None,
            unit: None,
            name: name.into(),
        }
    }
}

/// Display tag, color is `#RRGGBB`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub name: String,
    pub color: String,
}

impl From<&Label> for Tag {
    fn from(label: &Label) -> Self {
        Tag {
            name: label.name.clone(),
            color: format!("#{}", label.color),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub user: String,
    pub body: String,
}
