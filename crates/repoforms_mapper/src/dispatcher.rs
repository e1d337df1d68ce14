/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the repoforms authors
*/

//! Post-submit action dispatch for content editing.
//!
//! Listeners are registered against event names at configuration time and
//! invoked synchronously when a content-edit form is submitted: first under
//! the base name, then — if the submit carried a named action such as
//! `publish` or `saveDraft` — under the action-qualified name. A listener
//! that settles the request stops further propagation.

use std::collections::HashMap;

use repoforms_core::{FieldData, Location};

/// Base event name for content editing.
pub const CONTENT_EDIT: &str = "content.edit";

/// Payload passed through the dispatch chain after a content-edit submit.
#[derive(Default)]
pub struct ContentEditEvent {
    /// The submitted field values.
    pub fields: Vec<FieldData>,
    /// Language the content was edited in.
    pub language_code: String,
    /// Where editing started, for listeners that redirect afterwards.
    pub referrer_location: Option<Location>,
    action: Option<String>,
    stopped: bool,
}

impl ContentEditEvent {
    pub fn new(fields: Vec<FieldData>, language_code: impl Into<String>) -> Self {
        ContentEditEvent {
            fields,
            language_code: language_code.into(),
            ..Default::default()
        }
    }

    /// The named action the submit button carried, if any.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_referrer_location(mut self, location: Location) -> Self {
        self.referrer_location = Some(location);
        self
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Stop the dispatch chain; later listeners are not invoked.
    pub fn stop_propagation(&mut self) {
        self.stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.stopped
    }
}

type Listener = Box<dyn FnMut(&mut ContentEditEvent)>;

/// Dispatches content-edit events to listeners registered at
/// configuration time.
#[derive(Default)]
pub struct ContentDispatcher {
    listeners: HashMap<String, Vec<Listener>>,
}

impl ContentDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for one event name. Listeners for the same
    /// name run in registration order.
    pub fn on<F>(&mut self, event_name: impl Into<String>, listener: F)
    where
        F: FnMut(&mut ContentEditEvent) + 'static,
    {
        self.listeners
            .entry(event_name.into())
            .or_default()
            .push(Box::new(listener));
    }

    /// Fire the base event, then the action-qualified event when the
    /// submit carried an action. Names without listeners are skipped
    /// silently.
    pub fn dispatch(&mut self, event: &mut ContentEditEvent) {
        self.fire(CONTENT_EDIT, event);
        if event.is_propagation_stopped() {
            return;
        }
        if let Some(action) = event.action().map(str::to_string) {
            self.fire(&format!("{CONTENT_EDIT}.{action}"), event);
        }
    }

    fn fire(&mut self, event_name: &str, event: &mut ContentEditEvent) {
        if let Some(listeners) = self.listeners.get_mut(event_name) {
            for listener in listeners {
                if event.is_propagation_stopped() {
                    return;
                }
                listener(event);
            }
        }
    }
}
