//! Wiki and block types as they travel over the API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WikiKind {
    Region,
    General,
}

impl WikiKind {
    pub fn as_str(self) -> &'static str {
        match self {
            WikiKind::Region => "region",
            WikiKind::General => "general",
        }
    }
}

impl fmt::Display for WikiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WikiKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "region" => Ok(WikiKind::Region),
            "general" => Ok(WikiKind::General),
            other => Err(format!("unknown wiki type '{}'", other)),
        }
    }
}

/// A content fragment of a wiki page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Block {
    pub id: i32,
    pub title: String,
    pub content: String,
}

/// A wiki row on its own, as returned by create, update and delete.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WikiRecord {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub full_title: String,
    #[serde(rename = "type")]
    pub kind: WikiKind,
}

/// A wiki page with its blocks, ordered by block id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Wiki {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub full_title: String,
    #[serde(rename = "type")]
    pub kind: WikiKind,
    pub block: Vec<Block>,
}

impl Wiki {
    pub fn record(&self) -> WikiRecord {
        WikiRecord {
            id: self.id,
            slug: self.slug.clone(),
            title: self.title.clone(),
            full_title: self.full_title.clone(),
            kind: self.kind,
        }
    }
}

/// Request body for POST /v1/wiki and PATCH /v1/wiki/:id.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct WikiPayload {
    /// Present (and positive) on POST means update instead of insert.
    #[serde(default)]
    pub id: Option<i32>,
    pub slug: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: WikiKind,
    #[serde(default)]
    pub full_title: Option<String>,
}

/// Validated column values handed to the store.
#[derive(Clone, Debug, PartialEq)]
pub struct WikiFields {
    pub slug: String,
    pub title: String,
    pub kind: WikiKind,
    pub full_title: String,
}
