use serde::{Deserialize, Serialize};

/// Attributes of a bookmark as stored in the entity table.
///
/// The normalizer copies the resource `id` into the attributes so consumers
/// can work with a bookmark independently of its entity-table key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkAttributes {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A bookmark as handed to the gateway for saving.
///
/// `id` is absent until the server assigns one on first save; its presence is
/// the sole create-vs-update disambiguation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkDraft {
    pub id: Option<String>,
    pub title: String,
    pub url: String,
    pub description: String,
    pub tags: TagsField,
}

/// Tags as carried by a draft: either the form's comma-joined text or an
/// already-split list. The wire format only ever carries the list form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagsField {
    Text(String),
    List(Vec<String>),
}

impl TagsField {
    /// Returns the wire representation, splitting comma-joined text on commas
    /// with optional surrounding whitespace.
    pub fn to_list(&self) -> Vec<String> {
        match self {
            TagsField::List(tags) => tags.clone(),
            TagsField::Text(text) => split_tags(text),
        }
    }
}

/// Splits `"a, b,c"` into `["a", "b", "c"]`. An empty or whitespace-only
/// string yields no tags.
pub fn split_tags(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.split(',').map(|tag| tag.trim().to_string()).collect()
}
