/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the repoforms authors
*/

//! View/model transforms for multilingual option editing.
//!
//! The generic list editor works on a flat sequence, while the model keeps
//! a per-language mapping. These pure functions adapt between the two;
//! an edit session only ever touches the language it was opened for.

use repoforms_core::{FieldSettings, LanguageOptions};

/// Pre-population hook, called once per form build: the sequence the
/// editable list is seeded with for the given language. Absent languages
/// seed an empty list.
pub fn seed_language_options(settings: &FieldSettings, language_code: &str) -> Vec<String> {
    settings
        .language_options(language_code)
        .map(<[String]>::to_vec)
        .unwrap_or_default()
}

/// Extract one language's sequence from the mapping (view representation).
pub fn to_view(mapping: &LanguageOptions, language_code: &str) -> Vec<String> {
    mapping.get(language_code).cloned().unwrap_or_default()
}

/// Write the edited sequence back into the mapping (model representation).
///
/// Replaces only the `language_code` entry; every other language's
/// sequence is carried over untouched.
pub fn to_model(
    edited: Vec<String>,
    language_code: &str,
    existing: &LanguageOptions,
) -> LanguageOptions {
    let mut mapping = existing.clone();
    mapping.insert(language_code.to_string(), edited);
    mapping
}
