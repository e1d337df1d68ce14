/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the repoforms authors
*/

//! Field definitions and field values.
//!
//! A field definition is the content-type-level schema for one field; a
//! field value is a content-item-level instance of it. Selection fields
//! keep their configurable choice list in [`FieldSettings`], either as a
//! single flat sequence or as a per-language mapping.

use indexmap::IndexMap;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::content::ContentTypeData;

/// Per-language option sequences, keyed by language code.
///
/// Insertion order is preserved so serialized settings stay stable across
/// edit sessions.
pub type LanguageOptions = IndexMap<String, Vec<String>>;

/// Settings of a selection field definition.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct FieldSettings {
    /// Whether more than one option may be selected at once.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_multiple: bool,
    /// Single-language choice list, in presentation order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Per-language choice lists. Presence of the mapping, even empty,
    /// switches definition editing into multilingual mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multilingual_options: Option<LanguageOptions>,
}

impl FieldSettings {
    /// Whether the settings carry per-language options.
    ///
    /// This is a presence check, not an emptiness check: an empty mapping
    /// still selects the multilingual property path.
    pub fn is_multilingual(&self) -> bool {
        self.multilingual_options.is_some()
    }

    /// The stored option sequence for one language, if any.
    pub fn language_options(&self, language_code: &str) -> Option<&[String]> {
        self.multilingual_options
            .as_ref()?
            .get(language_code)
            .map(Vec::as_slice)
    }
}

/// A field definition as edited through the content-type form.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct FieldDefinitionData {
    /// Stable identifier of the field within its content type.
    pub identifier: String,
    /// Human-readable name, used as the value widget's label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether content items must carry a value for this field.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_required: bool,
    /// The content type's default language.
    pub main_language_code: String,
    #[serde(default)]
    pub field_settings: FieldSettings,
    /// The content-type editing context this definition is edited under.
    #[serde(default)]
    pub content_type: ContentTypeData,
}

impl FieldDefinitionData {
    /// Label for the value widget: the name, or the identifier when the
    /// definition is unnamed.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.identifier)
    }
}

/// A field value instance for one content item.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct FieldData {
    pub field_definition: FieldDefinitionData,
    /// Selected options, as indices into the resolved choice sequence.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<usize>,
}
