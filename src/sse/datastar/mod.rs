//! [🚀 Datastar] event support.
//!
//! Datastar helps you build reactive web applications with the simplicity
//! of server-side rendering and the power of a full-stack SPA framework.
//!
//! It's the combination of a small js library which makes use of SSE among other utilities.
//! This module implements the event data types used by the server side
//! to drive that JS library. Each builder renders its options into the payload
//! of an [`Event`], following the same rules:
//!
//! - options are written first, one `<keyword> <value>` line each,
//!   and only when they differ from their [default](consts);
//! - the body (fragments, signals or script) follows,
//!   one `<keyword> <line>` line per line of the body.
//!
//! ```
//! use datastar_sse::sse::datastar::{FragmentMergeMode, MergeFragments};
//!
//! let event = MergeFragments::new("<div id=\"hello\">\nhi\n</div>")
//!     .with_merge_mode(FragmentMergeMode::Append)
//!     .try_into_event()
//!     .unwrap();
//!
//! assert_eq!(
//!     event.to_string(),
//!     "event: datastar-merge-fragments\n\
//!      data: mergeMode append\n\
//!      data: fragments <div id=\"hello\">\n\
//!      data: fragments hi\n\
//!      data: fragments </div>\n\n",
//! );
//! ```
//!
//! [🚀 Datastar]: https://data-star.dev/

use std::fmt;

use super::{
    Event, EventBuildError,
    lines::{contains_line_break, split_lines},
};

pub mod consts;

mod enums;
pub use enums::{EventType, FragmentMergeMode};

mod merge_fragments;
pub use merge_fragments::MergeFragments;

mod remove_fragments;
pub use remove_fragments::RemoveFragments;

mod merge_signals;
pub use merge_signals::{MergeSignals, Signals};

mod remove_signals;
pub use remove_signals::RemoveSignals;

pub mod execute_script;
pub use execute_script::{ExecuteScript, ScriptAttribute};

/// Any of the datastar event builders.
///
/// Useful when events of different types are produced by a single stream.
#[derive(Debug, Clone, PartialEq)]
pub enum EventData<T = Signals> {
    /// [`MergeFragments`]: merges HTML fragments into the DOM
    MergeFragments(MergeFragments),
    /// [`RemoveFragments`]: removes HTML fragments from the DOM
    RemoveFragments(RemoveFragments),
    /// [`MergeSignals`]: merges signals into the signal store
    MergeSignals(MergeSignals<T>),
    /// [`RemoveSignals`]: removes signals from the signal store
    RemoveSignals(RemoveSignals),
    /// [`ExecuteScript`]: executes a script in the browser
    ExecuteScript(ExecuteScript),
}

macro_rules! into_event_data {
    ($($t:ident),+ $(,)?) => {
        $(
            impl<T> From<$t> for EventData<T> {
                fn from(value: $t) -> Self {
                    EventData::$t(value)
                }
            }
        )+
    };
}

into_event_data! {
    MergeFragments,
    RemoveFragments,
    RemoveSignals,
    ExecuteScript,
}

impl<T> From<MergeSignals<T>> for EventData<T> {
    fn from(value: MergeSignals<T>) -> Self {
        Self::MergeSignals(value)
    }
}

impl<T> EventData<T> {
    /// Return the [`EventType`] for the current data.
    #[must_use]
    pub fn event_type(&self) -> EventType {
        match self {
            Self::MergeFragments(_) => MergeFragments::TYPE,
            Self::RemoveFragments(_) => RemoveFragments::TYPE,
            Self::MergeSignals(_) => MergeSignals::<T>::TYPE,
            Self::RemoveSignals(_) => RemoveSignals::TYPE,
            Self::ExecuteScript(_) => ExecuteScript::TYPE,
        }
    }
}

impl<T: serde::Serialize> EventData<T> {
    /// Consume `self` as an [`Event`].
    pub fn try_into_event(self) -> Result<Event, EventBuildError> {
        match self {
            Self::MergeFragments(data) => data.try_into_event(),
            Self::RemoveFragments(data) => data.try_into_event(),
            Self::MergeSignals(data) => data.try_into_event(),
            Self::RemoveSignals(data) => data.try_into_event(),
            Self::ExecuteScript(data) => data.try_into_event(),
        }
    }
}

impl<T: serde::Serialize> TryFrom<EventData<T>> for Event {
    type Error = EventBuildError;

    #[inline]
    fn try_from(value: EventData<T>) -> Result<Self, Self::Error> {
        value.try_into_event()
    }
}

/// Payload lines of an event under construction.
#[derive(Debug, Default)]
struct Payload {
    lines: Vec<String>,
}

impl Payload {
    fn new() -> Self {
        Self::default()
    }

    /// Push a single `<keyword> <value>` line.
    ///
    /// The value must not contain line breaks, see [`single_line`].
    fn push_option(&mut self, keyword: &str, value: impl fmt::Display) {
        self.lines.push(format!("{keyword} {value}"));
    }

    /// Push one `<keyword> <line>` line per line of `body`.
    fn push_body(&mut self, keyword: &str, body: &str) {
        for line in split_lines(body) {
            self.push_option(keyword, line);
        }
    }

    fn into_event(self, event_type: EventType) -> Event {
        Event::new(event_type, self.lines)
    }
}

/// Ensure a value which has to fit on a single payload line has no line breaks.
fn single_line<'a>(field: &'static str, value: &'a str) -> Result<&'a str, EventBuildError> {
    if contains_line_break(value) {
        return Err(EventBuildError::invalid_characters(field, value));
    }
    Ok(value)
}
