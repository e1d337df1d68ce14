/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the repoforms authors
*/

use std::fs;
use std::path::Path;

use repoforms_core::FieldDefinitionData;

use crate::{MapperError, Result};

/// Load a field definition from a file.
/// Supports YAML and JSON, chosen by extension.
pub fn load_field_definition(path: &Path) -> Result<FieldDefinitionData> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let definition: FieldDefinitionData = match ext {
        "json" => serde_json::from_slice(&bytes)
            .map_err(|e| MapperError::Parse("JSON".to_string(), e.to_string()))?,
        _ => {
            let content = String::from_utf8_lossy(&bytes);
            serde_yaml::from_str(&content)
                .map_err(|e| MapperError::Parse("YAML".to_string(), e.to_string()))?
        }
    };

    validate_shape(&definition)?;
    Ok(definition)
}

/// Reject malformed input shape at the boundary rather than letting it
/// surface later as silent fallback behavior.
fn validate_shape(definition: &FieldDefinitionData) -> Result<()> {
    if definition.main_language_code.is_empty() {
        return Err(MapperError::InvalidFieldSettings {
            identifier: definition.identifier.clone(),
            reason: "main-language-code is empty".to_string(),
        });
    }
    if let Some(mapping) = &definition.field_settings.multilingual_options {
        if mapping.keys().any(|language| language.is_empty()) {
            return Err(MapperError::InvalidFieldSettings {
                identifier: definition.identifier.clone(),
                reason: "multilingual-options contains an empty language code".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_the_selection_fixture() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../tests/fixtures/selection-field.yaml");
        let definition = load_field_definition(&path).expect("fixture should parse");

        assert_eq!(definition.identifier, "topic");
        assert!(definition.field_settings.is_multilingual());
        assert_eq!(
            definition.field_settings.language_options("ger-DE"),
            Some(["Nachrichten".to_string(), "Meinung".to_string()].as_slice())
        );
    }

    #[test]
    fn empty_language_key_fails_fast() {
        let definition: FieldDefinitionData = serde_yaml::from_str(
            r#"
identifier: topic
main-language-code: eng-GB
field-settings:
  multilingual-options:
    "": [x]
"#,
        )
        .unwrap();

        let error = validate_shape(&definition).unwrap_err();
        assert!(matches!(
            error,
            MapperError::InvalidFieldSettings { .. }
        ));
    }
}
