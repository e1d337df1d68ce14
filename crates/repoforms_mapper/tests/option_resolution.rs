/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the repoforms authors
*/

//! Integration tests for option resolution and the option editing cycle.
//!
//! Exercises the language fallback chain, the definition/value form
//! mappers, and the flat-view/mapping-model transform through a full edit
//! session.

use repoforms_core::{
    ContentTypeData, FieldData, FieldDefinitionData, FieldSettings, FormField, LanguageOptions,
    PropertyPath,
};
use repoforms_mapper::{
    resolve_choices, to_model, to_view, FieldDefinitionFormMapper, FieldValueFormMapper,
    OptionListEditor, SelectionFormMapper,
};

fn multilingual_definition() -> FieldDefinitionData {
    let mut mapping = LanguageOptions::new();
    mapping.insert("eng-GB".into(), vec!["News".into(), "Opinion".into()]);
    mapping.insert("ger-DE".into(), vec!["Nachrichten".into(), "Meinung".into()]);

    FieldDefinitionData {
        identifier: "topic".into(),
        name: Some("Topic".into()),
        is_required: true,
        main_language_code: "eng-GB".into(),
        field_settings: FieldSettings {
            is_multiple: true,
            options: vec!["News".into(), "Opinion".into()],
            multilingual_options: Some(mapping),
        },
        content_type: ContentTypeData {
            language_code: "ger-DE".into(),
            main_language_code: "eng-GB".into(),
        },
    }
}

#[test]
fn resolution_prefers_the_requested_language() {
    let fd = multilingual_definition();
    assert_eq!(resolve_choices(&fd, "ger-DE"), ["Nachrichten", "Meinung"]);
}

#[test]
fn resolution_falls_back_to_the_main_language() {
    let fd = multilingual_definition();
    assert_eq!(resolve_choices(&fd, "fre-FR"), ["News", "Opinion"]);
}

#[test]
fn resolution_falls_back_to_flat_options_when_all_sequences_are_empty() {
    let mut fd = multilingual_definition();
    let mapping = fd.field_settings.multilingual_options.as_mut().unwrap();
    mapping.insert("eng-GB".into(), vec![]);
    mapping.insert("ger-DE".into(), vec![]);

    assert_eq!(resolve_choices(&fd, "ger-DE"), ["News", "Opinion"]);
}

#[test]
fn value_form_inverts_the_resolved_sequence() {
    let data = FieldData {
        field_definition: multilingual_definition(),
        value: vec![],
    };

    let widget = SelectionFormMapper.map_field_value_form(&data, "ger-DE");
    let FormField::Choice {
        label,
        required,
        multiple,
        choices,
    } = widget
    else {
        panic!("expected a choice widget");
    };

    assert_eq!(label, "Topic");
    assert!(required);
    assert!(multiple);
    assert_eq!(choices["Nachrichten"], 0);
    assert_eq!(choices["Meinung"], 1);
}

#[test]
fn value_form_with_no_options_has_zero_choices() {
    let data = FieldData {
        field_definition: FieldDefinitionData {
            identifier: "topic".into(),
            main_language_code: "eng-GB".into(),
            ..Default::default()
        },
        value: vec![],
    };

    let widget = SelectionFormMapper.map_field_value_form(&data, "eng-GB");
    let FormField::Choice { choices, .. } = widget else {
        panic!("expected a choice widget");
    };
    assert!(choices.is_empty());
}

#[test]
fn definition_form_locks_is_multiple_for_translations() {
    let fd = multilingual_definition();
    let fields = SelectionFormMapper.map_field_definition_form(&fd, "ger-DE");

    let FormField::Checkbox {
        property_path,
        checked,
        disabled,
        ..
    } = &fields[0]
    else {
        panic!("expected the is-multiple checkbox first");
    };
    assert_eq!(*property_path, PropertyPath::IsMultiple);
    assert!(*checked);
    assert!(*disabled);
}

#[test]
fn definition_form_binds_the_multilingual_path_and_seeds_one_language() {
    let fd = multilingual_definition();
    let fields = SelectionFormMapper.map_field_definition_form(&fd, "ger-DE");

    let FormField::Collection {
        property_path,
        entries,
        prototype_name,
        allow_add,
        allow_delete,
        ..
    } = &fields[1]
    else {
        panic!("expected the options collection second");
    };

    assert_eq!(*property_path, PropertyPath::MultilingualOptions);
    // Seeded from ger-DE only, plus the template slot.
    assert_eq!(entries.as_slice(), ["Nachrichten", "Meinung", ""]);
    assert_eq!(prototype_name, "__number__");
    assert!(*allow_add);
    assert!(*allow_delete);
}

#[test]
fn definition_form_binds_flat_options_without_a_multilingual_mapping() {
    let mut fd = multilingual_definition();
    fd.field_settings.multilingual_options = None;
    let fields = SelectionFormMapper.map_field_definition_form(&fd, "ger-DE");

    let FormField::Collection {
        property_path,
        entries,
        ..
    } = &fields[1]
    else {
        panic!("expected the options collection second");
    };
    assert_eq!(*property_path, PropertyPath::Options);
    assert_eq!(entries.as_slice(), ["News", "Opinion", ""]);
}

#[test]
fn full_edit_cycle_touches_only_the_edited_language() {
    let fd = multilingual_definition();
    let mapping = fd.field_settings.multilingual_options.clone().unwrap();

    // Open the editor for ger-DE, clear the first entry, fill the
    // template slot.
    let mut edited = OptionListEditor::for_editing(&to_view(&mapping, "ger-DE"));
    edited[0].clear();
    *edited.last_mut().unwrap() = "Kultur".to_string();

    let persisted = OptionListEditor::submit(edited);
    let updated = to_model(persisted, "ger-DE", &mapping);

    assert_eq!(updated["ger-DE"], vec!["Meinung", "Kultur"]);
    assert_eq!(updated["eng-GB"], vec!["News", "Opinion"]);
}

#[test]
fn edit_cycle_without_changes_is_identity() {
    let fd = multilingual_definition();
    let mapping = fd.field_settings.multilingual_options.clone().unwrap();

    let edited = OptionListEditor::for_editing(&to_view(&mapping, "ger-DE"));
    let persisted = OptionListEditor::submit(edited);
    let updated = to_model(persisted, "ger-DE", &mapping);

    assert_eq!(updated, mapping);
}
