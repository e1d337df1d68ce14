/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the repoforms authors
*/

//! The add/remove contract for editable option lists.
//!
//! The bound collection is an ordered sequence of text entries keyed by
//! position. One empty template slot trails the stored entries; filling it
//! adds a value, clearing a stored entry removes it on submit. Only one new
//! entry can be added per submit cycle without client-side scripting, since
//! only one template slot exists at a time.

/// Stateless list-editing rules.
pub struct OptionListEditor;

impl OptionListEditor {
    /// Placeholder used as the template slot's position key until it is
    /// rendered. Must stay unique within the form when no scripting
    /// substitutes it client-side.
    pub const PROTOTYPE_NAME: &'static str = "__number__";

    /// The editable sequence: stored entries plus one empty template slot.
    pub fn for_editing(stored: &[String]) -> Vec<String> {
        let mut entries = stored.to_vec();
        entries.push(String::new());
        entries
    }

    /// The numeric index the template slot takes once rendered.
    pub fn next_index(stored: &[String]) -> usize {
        stored.len()
    }

    /// Substitute the prototype placeholder with a concrete index.
    pub fn render_slot_name(name_template: &str, index: usize) -> String {
        name_template.replace(Self::PROTOTYPE_NAME, &index.to_string())
    }

    /// The sequence to persist after a submit: empty slots are dropped,
    /// non-empty slots kept in submitted order. A filled template slot is
    /// persisted like any other entry.
    pub fn submit(edited: Vec<String>) -> Vec<String> {
        edited.into_iter().filter(|entry| !entry.is_empty()).collect()
    }
}
