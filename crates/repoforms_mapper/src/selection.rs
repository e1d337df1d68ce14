/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the repoforms authors
*/

//! Selection field mapping.
//!
//! Two concerns meet here: resolving the effective choice set for a given
//! language, and describing the definition-editing and value-entry forms
//! for a selection field.

use indexmap::IndexMap;
use repoforms_core::{FieldData, FieldDefinitionData, FormField, PropertyPath};

use crate::multilingual::seed_language_options;
use crate::option_list::OptionListEditor;

/// The effective choice set for rendering a selection value widget.
///
/// Resolution chain: the requested language's option set if present and
/// non-empty, else the main language's, else the flat single-language
/// options. Ordering is preserved; duplicates are not removed.
pub fn resolve_choices<'a>(
    field_definition: &'a FieldDefinitionData,
    language_code: &str,
) -> &'a [String] {
    let settings = &field_definition.field_settings;

    if let Some(choices) = settings.language_options(language_code) {
        if !choices.is_empty() {
            return choices;
        }
    }
    if let Some(choices) = settings.language_options(&field_definition.main_language_code) {
        if !choices.is_empty() {
            return choices;
        }
    }
    &settings.options
}

/// Label → stored-index map for a choice widget.
///
/// Inverts the resolved sequence so the label becomes the lookup key and
/// the original position the stored value. Duplicate labels collide;
/// the last occurrence wins, which is treated as caller error.
pub fn invert_choices(choices: &[String]) -> IndexMap<String, usize> {
    choices
        .iter()
        .enumerate()
        .map(|(index, label)| (label.clone(), index))
        .collect()
}

/// Maps a field definition into its definition-editing form.
pub trait FieldDefinitionFormMapper {
    fn map_field_definition_form(
        &self,
        data: &FieldDefinitionData,
        language_code: &str,
    ) -> Vec<FormField>;
}

/// Maps a field value into its value-entry widget.
pub trait FieldValueFormMapper {
    fn map_field_value_form(&self, data: &FieldData, language_code: &str) -> FormField;
}

/// Form mapper for selection fields.
///
/// Definition editing uses a growable/shrinkable collection for the option
/// values: an empty template slot is always present, a filled template slot
/// becomes a new entry, and a cleared entry is removed on submit. Which
/// property path the collection binds to depends on whether per-language
/// options are present at all.
pub struct SelectionFormMapper;

impl FieldDefinitionFormMapper for SelectionFormMapper {
    fn map_field_definition_form(
        &self,
        data: &FieldDefinitionData,
        language_code: &str,
    ) -> Vec<FormField> {
        let settings = &data.field_settings;
        let is_translation = data.content_type.is_translation();
        let is_multilingual = settings.is_multilingual();

        // Decided once per form construction; immutable for the form's
        // lifetime.
        let (property_path, stored) = if is_multilingual {
            (
                PropertyPath::MultilingualOptions,
                seed_language_options(settings, language_code),
            )
        } else {
            (PropertyPath::Options, settings.options.clone())
        };

        vec![
            FormField::Checkbox {
                property_path: PropertyPath::IsMultiple,
                label: "field_definition.selection.is_multiple".to_string(),
                checked: settings.is_multiple,
                disabled: is_translation,
            },
            FormField::Collection {
                property_path,
                label: "field_definition.selection.options".to_string(),
                entries: OptionListEditor::for_editing(&stored),
                prototype_name: OptionListEditor::PROTOTYPE_NAME.to_string(),
                allow_add: true,
                allow_delete: true,
            },
        ]
    }
}

impl FieldValueFormMapper for SelectionFormMapper {
    fn map_field_value_form(&self, data: &FieldData, language_code: &str) -> FormField {
        let field_definition = &data.field_definition;
        let choices = invert_choices(resolve_choices(field_definition, language_code));

        // An empty resolved sequence yields a widget with zero choices;
        // the enclosing framework decides what a selection attempt means.
        FormField::Choice {
            label: field_definition.display_name().to_string(),
            required: field_definition.is_required,
            multiple: field_definition.field_settings.is_multiple,
            choices,
        }
    }
}
