//! Read-only tag catalog: named SQL fragments organized in a group tree.
//!
//! The catalog is built by the persistence layer and only read here. Group
//! lookup is an indexed map lookup; the renderer needs nothing more than
//! [`Catalog::resolve`] and [`Catalog::tags`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Kind of an individual tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Table,
    Field,
    Condition,
    History,
    Book,
}

/// Kind of a tag group. Only `Table` groups go through full clause assembly;
/// every other kind renders as a pass-through fragment join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    Root,
    Table,
    Condition,
    History,
    Book,
    Field,
}

/// A named, reusable SQL fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub fragment: String,
    #[serde(default)]
    pub description: String,
    pub kind: TagKind,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Tag {
    pub fn new(name: impl Into<String>, fragment: impl Into<String>, kind: TagKind) -> Self {
        Self {
            name: name.into(),
            fragment: fragment.into(),
            description: String::new(),
            kind,
            created_at: None,
            updated_at: None,
        }
    }
}

/// A node in the category tree. Depth is at most three:
/// root group, category group, field group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagGroup {
    pub name: String,
    pub kind: GroupKind,
    #[serde(default)]
    pub description: String,
    /// Name of the parent group, if any.
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TagGroup {
    pub fn new(name: impl Into<String>, kind: GroupKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: String::new(),
            parent: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn child_of(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }
}

/// JSON snapshot shape exported by the persistence layer.
#[derive(Deserialize)]
struct CatalogSnapshot {
    #[serde(default)]
    groups: Vec<TagGroup>,
    /// Tags keyed by group name, in declaration order.
    #[serde(default)]
    tags: HashMap<String, Vec<Tag>>,
}

/// Indexed, read-only view of tag groups and their tags.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    groups: Vec<TagGroup>,
    index: HashMap<String, usize>,
    tags: HashMap<String, Vec<Tag>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON snapshot.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let snapshot: CatalogSnapshot = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for group in snapshot.groups {
            catalog.add_group(group);
        }
        for (group, tags) in snapshot.tags {
            for tag in tags {
                catalog.add_tag(&group, tag);
            }
        }
        Ok(catalog)
    }

    /// Register a group. A duplicate name shadows the earlier entry.
    pub fn add_group(&mut self, group: TagGroup) {
        self.index.insert(group.name.clone(), self.groups.len());
        self.groups.push(group);
    }

    /// Register a tag under a group name, preserving declaration order.
    pub fn add_tag(&mut self, group: impl Into<String>, tag: Tag) {
        self.tags.entry(group.into()).or_default().push(tag);
    }

    /// Resolve a group by name.
    pub fn resolve(&self, name: &str) -> Option<&TagGroup> {
        self.index.get(name).map(|&i| &self.groups[i])
    }

    /// Tags belonging to a group, in declaration order. Empty for unknown groups.
    pub fn tags(&self, group: &str) -> &[Tag] {
        self.tags.get(group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All registered groups, in registration order.
    pub fn groups(&self) -> &[TagGroup] {
        &self.groups
    }
}
