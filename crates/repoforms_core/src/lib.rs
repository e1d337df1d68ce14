/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the repoforms authors
*/

//! Data model for content-repository form mapping.
//!
//! This crate defines the plain structured data exchanged between the
//! content repository and the form layer: field definitions and their
//! settings, the content-type editing context, field value instances, and
//! the declarative form-field model the mappers emit. All types are pure
//! serde data; persistence and rendering live with the caller.

pub mod content;
pub mod field;
pub mod form;

pub use content::{ContentTypeData, Location};
pub use field::{FieldData, FieldDefinitionData, FieldSettings, LanguageOptions};
pub use form::{FormField, PropertyPath};
