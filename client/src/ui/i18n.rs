//! Translation catalog for the header's display strings.
//!
//! A catalog is a flat JSON object from English msgid to translation.
//! Lookups that miss fall back to the msgid itself, so an empty catalog
//! renders English.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::errors::{HeaderError, HeaderResult};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(path: &Path, json: &str) -> HeaderResult<Self> {
        serde_json::from_str(json).map_err(|source| HeaderError::CatalogParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> HeaderResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| HeaderError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &json)
    }

    pub fn insert(&mut self, msgid: impl Into<String>, translation: impl Into<String>) {
        self.entries.insert(msgid.into(), translation.into());
    }

    pub fn tr<'a>(&'a self, msgid: &'a str) -> &'a str {
        self.entries.get(msgid).map(String::as_str).unwrap_or(msgid)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
