/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the repoforms authors
*/

//! Thumbnail field configuration for content-type metadata forms.
//!
//! Each thumbnail-capable field of a content type is edited as a plain
//! text entry; there is deliberately nothing more to it.

use repoforms_core::{FormField, PropertyPath};

/// One text entry per thumbnail-capable field identifier.
pub fn thumbnail_fields(field_identifiers: &[String]) -> Vec<FormField> {
    field_identifiers
        .iter()
        .map(|identifier| FormField::Text {
            property_path: PropertyPath::Field(identifier.clone()),
            label: identifier.clone(),
            required: false,
        })
        .collect()
}
