use bytes::{BufMut as _, Bytes, BytesMut};
use smol_str::SmolStr;
use std::{fmt, time::Duration};

use super::datastar::{EventType, consts::DEFAULT_RETRY};
use super::lines::contains_line_break;

/// Server-sent event carrying a datastar payload.
///
/// An [`Event`] is created by one of the [`datastar`](super::datastar) builders,
/// which render their options and body into the payload lines. Once created
/// the event type and payload can no longer be changed; only the id and retry
/// fields, which are not part of the payload, can still be set.
///
/// Rendering is pure: formatting the same event twice yields the same output.
///
/// ```text
/// event: <event-type>
/// id: <id>            (only if an id is set)
/// retry: <millis>     (only if not the default of 1000ms)
/// data: <payload line>
/// ...
/// <empty line>
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Event {
    event_type: EventType,
    payload: Vec<String>,
    id: Option<SmolStr>,
    retry: Duration,
}

#[derive(Debug)]
/// Error returned when an [`Event`] cannot be built from the given input.
pub struct EventBuildError {
    kind: EventBuildErrorKind,
}

#[derive(Debug)]
enum EventBuildErrorKind {
    MissingSelector,
    MissingScript,
    InvalidCharacter {
        field: &'static str,
        value: SmolStr,
    },
    InvalidSignalPath(SmolStr),
    Json(serde_json::Error),
}

impl EventBuildError {
    pub(crate) fn missing_selector() -> Self {
        Self {
            kind: EventBuildErrorKind::MissingSelector,
        }
    }

    pub(crate) fn missing_script() -> Self {
        Self {
            kind: EventBuildErrorKind::MissingScript,
        }
    }

    pub(crate) fn invalid_characters(field: &'static str, value: impl Into<SmolStr>) -> Self {
        Self {
            kind: EventBuildErrorKind::InvalidCharacter {
                field,
                value: value.into(),
            },
        }
    }

    pub(crate) fn invalid_signal_path(path: impl Into<SmolStr>) -> Self {
        Self {
            kind: EventBuildErrorKind::InvalidSignalPath(path.into()),
        }
    }

    pub(crate) fn json(err: serde_json::Error) -> Self {
        Self {
            kind: EventBuildErrorKind::Json(err),
        }
    }

    /// Returns true if a required value (selector or script) was missing or empty.
    #[must_use]
    pub fn is_missing_value(&self) -> bool {
        matches!(
            self.kind,
            EventBuildErrorKind::MissingSelector | EventBuildErrorKind::MissingScript
        )
    }

    /// Returns true if a single-line value contained a line terminator
    /// or another character which cannot be framed.
    #[must_use]
    pub fn is_invalid_character(&self) -> bool {
        matches!(self.kind, EventBuildErrorKind::InvalidCharacter { .. })
    }

    /// Returns true if a signal path was empty or contained whitespace.
    #[must_use]
    pub fn is_invalid_signal_path(&self) -> bool {
        matches!(self.kind, EventBuildErrorKind::InvalidSignalPath(_))
    }

    /// Returns true if the signals could not be serialized as JSON.
    #[must_use]
    pub fn is_json(&self) -> bool {
        matches!(self.kind, EventBuildErrorKind::Json(_))
    }
}

impl fmt::Display for EventBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            EventBuildErrorKind::MissingSelector => {
                f.write_str("event build error: selector must be provided and non-empty")
            }
            EventBuildErrorKind::MissingScript => {
                f.write_str("event build error: script must be provided and non-empty")
            }
            EventBuildErrorKind::InvalidCharacter { field, value } => {
                write!(
                    f,
                    "event build error: invalid character(s) in {field}: {value:?}"
                )
            }
            EventBuildErrorKind::InvalidSignalPath(path) => write!(
                f,
                "event build error: signal path must be non-empty and contain no whitespace: {path:?}"
            ),
            EventBuildErrorKind::Json(err) => {
                write!(f, "event build error: serialize signals as json: {err}")
            }
        }
    }
}

impl std::error::Error for EventBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            EventBuildErrorKind::Json(err) => Some(err),
            EventBuildErrorKind::MissingSelector
            | EventBuildErrorKind::MissingScript
            | EventBuildErrorKind::InvalidCharacter { .. }
            | EventBuildErrorKind::InvalidSignalPath(_) => None,
        }
    }
}

impl Event {
    pub(crate) fn new(event_type: EventType, payload: Vec<String>) -> Self {
        Self {
            event_type,
            payload,
            id: None,
            retry: DEFAULT_RETRY,
        }
    }

    /// Return the event's type field (`event: <event-type>`).
    #[must_use]
    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    /// Return the payload lines, each written as a `data: <line>` field.
    #[must_use]
    pub fn payload(&self) -> &[String] {
        &self.payload
    }

    /// Return the event's identifier field (`id: <identifier>`).
    ///
    /// This corresponds to [`MessageEvent`'s `lastEventId` field].
    ///
    /// [`MessageEvent`'s `lastEventId` field]: https://developer.mozilla.org/en-US/docs/Web/API/MessageEvent/lastEventId
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    crate::macros::generate_set_and_with! {
        /// Set the event's identifier field (`id: <identifier>`).
        ///
        /// An empty identifier is the same as no identifier at all.
        /// Previously set value will be overwritten.
        pub fn id(mut self, id: impl Into<SmolStr>) -> Result<Self, EventBuildError> {
            let id = id.into();
            if contains_line_break(&id) || id.contains('\0') {
                return Err(EventBuildError::invalid_characters("id", id));
            }
            self.id = (!id.is_empty()).then_some(id);
            Ok(self)
        }
    }

    /// Return the event's retry field (`retry: <millis>`).
    ///
    /// This is only a hint for the client on how long to wait
    /// before reconnecting. Defaults to [`DEFAULT_RETRY`].
    #[must_use]
    pub fn retry(&self) -> Duration {
        self.retry
    }

    crate::macros::generate_set_and_with! {
        /// Set the event's retry field in milliseconds (`retry: <millis>`).
        ///
        /// The field is only written when it differs from [`DEFAULT_RETRY`].
        pub fn retry(mut self, millis: u64) -> Self {
            self.retry = Duration::from_millis(millis);
            self
        }
    }

    fn write_retry(&self) -> bool {
        self.retry != DEFAULT_RETRY
    }

    /// Render the event as the bytes of a single SSE message.
    ///
    /// Same output as the [`Display`](fmt::Display) implementation.
    #[must_use]
    pub fn serialize(&self) -> Bytes {
        let mut buffer = BytesMut::with_capacity(
            32 + self.payload.iter().map(|line| line.len() + 7).sum::<usize>(),
        );

        let mut serialize = |name: &[u8], value: &[u8]| {
            buffer.extend_from_slice(name);
            buffer.put_u8(b':');
            buffer.put_u8(b' ');
            buffer.extend_from_slice(value);
            buffer.put_u8(b'\n');
        };

        serialize(b"event", self.event_type.as_str().as_bytes());

        if let Some(ref id) = self.id {
            serialize(b"id", id.as_bytes());
        }

        if self.write_retry() {
            let mut buf = itoa::Buffer::new();
            serialize(b"retry", buf.format(self.retry.as_millis()).as_bytes());
        }

        for line in &self.payload {
            serialize(b"data", line.as_bytes());
        }

        buffer.put_u8(b'\n');
        buffer.freeze()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "event: {}", self.event_type)?;
        if let Some(ref id) = self.id {
            writeln!(f, "id: {id}")?;
        }
        if self.write_retry() {
            writeln!(f, "retry: {}", self.retry.as_millis())?;
        }
        for line in &self.payload {
            writeln!(f, "data: {line}")?;
        }
        f.write_str("\n")
    }
}

impl From<Event> for Bytes {
    fn from(event: Event) -> Self {
        event.serialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(payload: &[&str]) -> Event {
        Event::new(
            EventType::MergeFragments,
            payload.iter().map(|line| (*line).to_owned()).collect(),
        )
    }

    #[test]
    fn test_serialize_minimal() {
        let event = event(&["fragments <div>hi</div>"]);
        assert_eq!(
            event.to_string(),
            "event: datastar-merge-fragments\ndata: fragments <div>hi</div>\n\n"
        );
    }

    #[test]
    fn test_serialize_all_fields() {
        let event = event(&["selector #foo", "fragments <b>a</b>", "fragments <b>b</b>"])
            .try_with_id("42")
            .unwrap()
            .with_retry(2500);
        assert_eq!(
            event.to_string(),
            "event: datastar-merge-fragments\n\
             id: 42\n\
             retry: 2500\n\
             data: selector #foo\n\
             data: fragments <b>a</b>\n\
             data: fragments <b>b</b>\n\n"
        );
    }

    #[test]
    fn test_serialize_empty_payload() {
        let event = Event::new(EventType::RemoveSignals, Vec::new());
        assert_eq!(event.to_string(), "event: datastar-remove-signals\n\n");
    }

    #[test]
    fn test_retry_only_written_when_not_default() {
        let default_retry = event(&["fragments x"]).with_retry(1000);
        assert!(!default_retry.to_string().contains("retry:"));

        let zero_retry = event(&["fragments x"]).with_retry(0);
        assert!(zero_retry.to_string().contains("\nretry: 0\n"));
    }

    #[test]
    fn test_id_only_written_when_not_empty() {
        let event = event(&["fragments x"]).try_with_id("").unwrap();
        assert_eq!(event.id(), None);
        assert!(!event.to_string().contains("id:"));

        let mut event = event.try_with_id("a").unwrap();
        assert_eq!(event.id(), Some("a"));
        event.try_set_id("").unwrap();
        assert_eq!(event.id(), None);
    }

    #[test]
    fn test_id_rejects_line_breaks_and_nul() {
        for id in ["a\nb", "a\rb", "a\0b"] {
            let err = event(&[]).try_with_id(id).unwrap_err();
            assert!(err.is_invalid_character(), "id: {id:?}");
        }
    }

    #[test]
    fn test_serialize_matches_display() {
        let event = event(&["selector body", "fragments é ü"])
            .try_with_id("id-1")
            .unwrap()
            .with_retry(10);
        assert_eq!(event.serialize(), Bytes::from(event.to_string()));
        assert_eq!(event.serialize(), event.serialize());
        assert_eq!(Bytes::from(event.clone()), event.serialize());
    }

    #[test]
    fn test_event_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<Event>();
        assert_send_sync::<EventBuildError>();
    }
}
