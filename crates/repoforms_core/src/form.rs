/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the repoforms authors
*/

//! Declarative form-field model.
//!
//! The mappers emit these descriptions; an external form engine renders
//! and validates them. No rendering logic lives here.

use indexmap::IndexMap;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a form field binds on the edited data.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum PropertyPath {
    /// `field_settings.options`
    Options,
    /// `field_settings.multilingual-options`
    MultilingualOptions,
    /// `field_settings.is-multiple`
    IsMultiple,
    /// A named field of the content item (thumbnail sources).
    Field(String),
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyPath::Options => write!(f, "field_settings.options"),
            PropertyPath::MultilingualOptions => {
                write!(f, "field_settings.multilingual-options")
            }
            PropertyPath::IsMultiple => write!(f, "field_settings.is-multiple"),
            PropertyPath::Field(identifier) => write!(f, "fields.{identifier}"),
        }
    }
}

/// One field of a mapped form.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(tag = "widget", rename_all = "kebab-case")]
pub enum FormField {
    /// A boolean toggle.
    Checkbox {
        property_path: PropertyPath,
        label: String,
        checked: bool,
        disabled: bool,
    },
    /// A growable/shrinkable list of text entries.
    Collection {
        property_path: PropertyPath,
        label: String,
        /// Stored entries plus the trailing template slot.
        entries: Vec<String>,
        /// Placeholder in the template slot's position key.
        prototype_name: String,
        allow_add: bool,
        allow_delete: bool,
    },
    /// A choice widget; `choices` maps each label to its stored value.
    Choice {
        label: String,
        required: bool,
        multiple: bool,
        choices: IndexMap<String, usize>,
    },
    /// A plain text entry.
    Text {
        property_path: PropertyPath,
        label: String,
        required: bool,
    },
}
