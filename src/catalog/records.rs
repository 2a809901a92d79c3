//! Publication record projections
//!
//! Read-only views of the catalog entities the engine searches. The
//! surrounding application owns the real entities; these structs carry
//! only the fields the search pipeline looks at and are tolerant of
//! missing optional data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identity of a publication in the external store.
pub type PublicationId = i64;

/// The person a publication is credited to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub username: String,
}

impl Person {
    /// Display name as shown in the catalog UI: "First Last".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A project related to a publication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub summary: String,
}

/// A publication as projected for search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub id: PublicationId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub editor: Person,
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Publication type label (thesis, article, report, ...).
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub author_id: Option<i64>,
    #[serde(default)]
    pub published_at: Option<NaiveDate>,
}
