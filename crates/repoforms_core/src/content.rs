/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the repoforms authors
*/

//! Content-type editing context.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The language context a content type is being edited under.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct ContentTypeData {
    /// The language being edited.
    pub language_code: String,
    /// The content type's default language.
    pub main_language_code: String,
}

impl ContentTypeData {
    /// Whether the session edits a translation rather than the main
    /// language. Structural settings are locked down for translations.
    pub fn is_translation(&self) -> bool {
        self.language_code != self.main_language_code
    }
}

/// Minimal reference to a repository location, carried through post-submit
/// events so listeners can redirect back to where editing started.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct Location {
    pub id: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
}
