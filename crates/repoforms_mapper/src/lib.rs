/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the repoforms authors
*/

//! Form mapping for content-repository selection fields.
//!
//! This crate binds field definitions and content-type metadata into a
//! declarative form-field model, and dispatches post-submit actions for
//! content editing to registered listeners. The two pieces of policy it
//! owns are the multilingual option resolution chain (requested language,
//! then main language, then the flat option list) and the add/remove
//! contract for editable option lists.
//!
//! # Example
//!
//! ```rust
//! use repoforms_core::{FieldData, FieldDefinitionData, FieldSettings};
//! use repoforms_mapper::{FieldValueFormMapper, SelectionFormMapper};
//!
//! let definition = FieldDefinitionData {
//!     identifier: "topic".to_string(),
//!     name: Some("Topic".to_string()),
//!     is_required: true,
//!     main_language_code: "eng-GB".to_string(),
//!     field_settings: FieldSettings {
//!         options: vec!["News".to_string(), "Opinion".to_string()],
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! let data = FieldData {
//!     field_definition: definition,
//!     value: vec![],
//! };
//!
//! let widget = SelectionFormMapper.map_field_value_form(&data, "eng-GB");
//! if let repoforms_core::FormField::Choice { choices, required, .. } = widget {
//!     assert!(required);
//!     assert_eq!(choices["News"], 0);
//!     assert_eq!(choices["Opinion"], 1);
//! } else {
//!     panic!("expected a choice widget");
//! }
//! ```

pub mod dispatcher;
pub mod error;
pub mod io;
pub mod multilingual;
pub mod option_list;
pub mod selection;
pub mod thumbnail;

pub use dispatcher::{ContentDispatcher, ContentEditEvent, CONTENT_EDIT};
pub use error::{MapperError, Result};
pub use io::load_field_definition;
pub use multilingual::{seed_language_options, to_model, to_view};
pub use option_list::OptionListEditor;
pub use selection::{
    resolve_choices, FieldDefinitionFormMapper, FieldValueFormMapper, SelectionFormMapper,
};
pub use thumbnail::thumbnail_fields;
