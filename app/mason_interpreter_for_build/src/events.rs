/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use std::fmt;
use std::fmt::Display;
use std::sync::Mutex;

use crate::syntax::ast::FileSpan;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Severity {
    Warning,
    Error,
}

/// One diagnostic produced while evaluating a declaration file. Diagnostics
/// flow through a sink rather than unwinding evaluation, so one file can
/// report several independent problems in a single pass.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Event {
    pub severity: Severity,
    pub span: FileSpan,
    pub message: String,
}

impl Event {
    pub fn error(span: FileSpan, message: impl Into<String>) -> Event {
        Event {
            severity: Severity::Error,
            span,
            message: message.into(),
        }
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}: {}: {}", self.span, severity, self.message)
    }
}

pub trait EventSink {
    fn handle(&self, event: Event);
}

/// Buffers events for callers that aggregate, and for tests.
#[derive(Default)]
pub struct CollectingEventSink {
    events: Mutex<Vec<Event>>,
}

impl CollectingEventSink {
    pub fn new() -> CollectingEventSink {
        CollectingEventSink::default()
    }

    pub fn take_events(&self) -> Vec<Event> {
        std::mem::take(&mut self.events.lock().unwrap())
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.severity == Severity::Error)
            .map(|e| e.message.clone())
            .collect()
    }
}

impl EventSink for CollectingEventSink {
    fn handle(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}
