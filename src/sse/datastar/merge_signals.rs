use super::{EventType, Payload, consts::DEFAULT_ONLY_IF_MISSING};
use crate::sse::{Event, EventBuildError};
use serde::Serialize;

/// Signals as a JSON object, keys kept in insertion order.
pub type Signals = serde_json::Map<String, serde_json::Value>;

/// [`MergeSignals`] merges signals into the signal store
///
/// See the [Datastar documentation](https://data-star.dev/reference/sse_events#datastar-merge-signals)
/// for more information.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MergeSignals<T = Signals> {
    /// `signals` is serialized as JSON and
    /// sent to the browser to update signals in the signal store.
    ///
    /// Object keys are written in the order the serializer visits them,
    /// which for [`Signals`] is insertion order.
    pub signals: T,
    /// Whether to merge the signal only if it does not already exist.
    ///
    /// If not provided, the Datastar client side will default to false,
    /// which will cause the data to be merged into the signals.
    pub only_if_missing: bool,
    /// Whether to write the signals as indented, multi-line JSON.
    ///
    /// Compact JSON, the default, always fits on a single `signals` line.
    pub pretty: bool,
}

impl<T> MergeSignals<T> {
    pub const TYPE: EventType = EventType::MergeSignals;

    /// Create a new [`MergeSignals`] data blob.
    pub fn new(signals: T) -> Self {
        Self {
            signals,
            only_if_missing: DEFAULT_ONLY_IF_MISSING,
            pretty: false,
        }
    }

    crate::macros::generate_set_and_with! {
        /// Sets whether to merge the signal only if it does not already exist.
        pub fn only_if_missing(mut self, only_if_missing: bool) -> Self {
            self.only_if_missing = only_if_missing;
            self
        }
    }

    crate::macros::generate_set_and_with! {
        /// Sets whether to write the signals as indented, multi-line JSON.
        pub fn pretty(mut self, pretty: bool) -> Self {
            self.pretty = pretty;
            self
        }
    }
}

impl<T: Serialize> MergeSignals<T> {
    /// Consume `self` as an [`Event`].
    ///
    /// Fails if the signals cannot be serialized as JSON,
    /// e.g. a map with non-string keys.
    pub fn try_into_event(self) -> Result<Event, EventBuildError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(&self.signals)
        } else {
            serde_json::to_string(&self.signals)
        }
        .map_err(EventBuildError::json)?;

        let mut payload = Payload::new();

        if self.only_if_missing {
            payload.push_option("onlyIfMissing", true);
        }

        payload.push_body("signals", &json);

        Ok(payload.into_event(Self::TYPE))
    }
}

impl<T: Serialize> TryFrom<MergeSignals<T>> for Event {
    type Error = EventBuildError;

    #[inline]
    fn try_from(value: MergeSignals<T>) -> Result<Self, Self::Error> {
        value.try_into_event()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn signals(value: serde_json::Value) -> Signals {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected json object, got: {other}"),
        }
    }

    #[test]
    fn test_minimal() {
        let event = MergeSignals::new(signals(json!({"foo": 1})))
            .try_into_event()
            .unwrap();
        assert_eq!(
            event.to_string(),
            "event: datastar-merge-signals\ndata: signals {\"foo\":1}\n\n"
        );
    }

    #[test]
    fn test_only_if_missing_comes_first() {
        let event = MergeSignals::new(signals(json!({"foo": 1})))
            .with_only_if_missing(true)
            .try_into_event()
            .unwrap();
        assert_eq!(event.payload(), ["onlyIfMissing true", "signals {\"foo\":1}"]);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut data = Signals::new();
        data.insert("zeta".to_owned(), json!(true));
        data.insert("alpha".to_owned(), json!(null));
        data.insert("mid".to_owned(), json!([1, "two", {"three": 3.5}]));
        let event = MergeSignals::new(data).try_into_event().unwrap();
        assert_eq!(
            event.payload(),
            [r#"signals {"zeta":true,"alpha":null,"mid":[1,"two",{"three":3.5}]}"#]
        );
    }

    #[test]
    fn test_pretty_json_is_split_per_line() {
        let event = MergeSignals::new(signals(json!({"foo": 1, "bar": {"baz": false}})))
            .with_pretty(true)
            .try_into_event()
            .unwrap();
        assert_eq!(
            event.payload(),
            [
                "signals {",
                "signals   \"foo\": 1,",
                "signals   \"bar\": {",
                "signals     \"baz\": false",
                "signals   }",
                "signals }",
            ]
        );
    }

    #[test]
    fn test_line_breaks_in_values_stay_escaped() {
        let event = MergeSignals::new(signals(json!({"text": "a\nb"})))
            .try_into_event()
            .unwrap();
        assert_eq!(event.payload(), [r#"signals {"text":"a\nb"}"#]);
    }

    #[test]
    fn test_typed_signals() {
        #[derive(Serialize)]
        struct Counter {
            count: u32,
            label: &'static str,
        }

        let mut data = MergeSignals::new(Counter {
            count: 3,
            label: "clicks",
        });
        data.set_only_if_missing(false);
        let event = Event::try_from(data).unwrap();
        assert_eq!(
            event.payload(),
            [r#"signals {"count":3,"label":"clicks"}"#]
        );
    }

    #[test]
    fn test_non_string_keys_are_rejected() {
        let mut data = BTreeMap::new();
        data.insert(vec![1u8], 1);
        let err = MergeSignals::new(data).try_into_event().unwrap_err();
        assert!(err.is_json());
    }
}
