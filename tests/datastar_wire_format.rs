use datastar_sse::sse::{
    Event,
    datastar::{
        EventData, ExecuteScript, FragmentMergeMode, MergeFragments, MergeSignals,
        RemoveFragments, RemoveSignals, Signals,
    },
};
use serde_json::json;
use std::time::Duration;

fn signals(value: serde_json::Value) -> Signals {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected json object, got {other}"),
    }
}

fn all_kinds() -> Vec<EventData> {
    vec![
        MergeFragments::new("<div id=\"a\">\n  hi\n</div>")
            .with_selector("#a")
            .with_merge_mode(FragmentMergeMode::Inner)
            .with_settle_duration(Duration::from_millis(500))
            .with_use_view_transition(true)
            .into(),
        RemoveFragments::try_new("#a")
            .unwrap()
            .with_settle_duration(Duration::from_millis(0))
            .into(),
        MergeSignals::new(signals(json!({"foo": 1, "bar": {"baz": [1, 2]}})))
            .with_only_if_missing(true)
            .into(),
        RemoveSignals::new_multi(["a.b", "c.d"]).into(),
        ExecuteScript::try_new("console.log(1);\nconsole.log(2);")
            .unwrap()
            .with_auto_remove(false)
            .into(),
    ]
}

#[test]
fn test_rendering_is_deterministic() {
    for (first, second) in all_kinds().into_iter().zip(all_kinds()) {
        let first = first.try_into_event().unwrap().try_with_id("7").unwrap();
        let second = second.try_into_event().unwrap().try_with_id("7").unwrap();
        assert_eq!(first.to_string(), second.to_string());
        assert_eq!(first.serialize(), second.serialize());
        assert_eq!(first.serialize(), first.to_string().as_bytes());
    }
}

#[test]
fn test_every_message_is_terminated_by_an_empty_line() {
    for data in all_kinds() {
        let message = data.try_into_event().unwrap().to_string();
        assert!(message.ends_with("\n\n"), "message: {message:?}");
        assert!(!message.ends_with("\n\n\n"), "message: {message:?}");
        assert!(!message.contains('\r'), "message: {message:?}");
    }
}

#[test]
fn test_retry_and_id_lines_only_when_not_default() {
    for data in all_kinds() {
        let event = data.try_into_event().unwrap();

        let message = event.clone().with_retry(1000).try_with_id("").unwrap().to_string();
        assert!(!message.contains("\nretry: "), "message: {message:?}");
        assert!(!message.contains("\nid: "), "message: {message:?}");

        let message = event.with_retry(3000).try_with_id("abc").unwrap().to_string();
        assert!(message.contains("\nretry: 3000\n"), "message: {message:?}");
        assert!(message.contains("\nid: abc\n"), "message: {message:?}");
    }
}

#[test]
fn test_merge_fragments_minimal() {
    let event = MergeFragments::new("<div>hi</div>").try_into_event().unwrap();
    assert_eq!(event.payload(), ["fragments <div>hi</div>"]);
    assert_eq!(
        event.to_string(),
        "event: datastar-merge-fragments\ndata: fragments <div>hi</div>\n\n"
    );
}

#[test]
fn test_merge_fragments_all_options() {
    let event = MergeFragments::new("<div id=\"a\">\n  hi\n</div>")
        .with_selector("#a")
        .with_merge_mode(FragmentMergeMode::UpsertAttributes)
        .with_settle_duration(Duration::from_millis(500))
        .with_use_view_transition(true)
        .try_into_event()
        .unwrap()
        .try_with_id("1")
        .unwrap()
        .with_retry(2000);

    assert_eq!(
        event.to_string(),
        "event: datastar-merge-fragments\n\
         id: 1\n\
         retry: 2000\n\
         data: selector #a\n\
         data: mergeMode upsert_attributes\n\
         data: settleDuration 500\n\
         data: useViewTransition true\n\
         data: fragments <div id=\"a\">\n\
         data: fragments   hi\n\
         data: fragments </div>\n\n"
    );
}

#[test]
fn test_remove_fragments_requires_selector() {
    let err = RemoveFragments::try_new("").unwrap_err();
    assert!(err.is_missing_value());

    let event = RemoveFragments::try_new("#foo")
        .unwrap()
        .try_into_event()
        .unwrap();
    assert_eq!(
        event.to_string(),
        "event: datastar-remove-fragments\ndata: selector #foo\n\n"
    );
}

#[test]
fn test_merge_signals_only_if_missing() {
    let event = MergeSignals::new(signals(json!({"foo": 1})))
        .with_only_if_missing(true)
        .try_into_event()
        .unwrap();
    assert_eq!(event.payload(), ["onlyIfMissing true", "signals {\"foo\":1}"]);
}

#[test]
fn test_merge_signals_keeps_insertion_order() {
    let mut map = Signals::new();
    map.insert("zeta".to_owned(), json!(1));
    map.insert("alpha".to_owned(), json!(2));
    let event = MergeSignals::new(map).try_into_event().unwrap();
    assert_eq!(event.payload(), ["signals {\"zeta\":1,\"alpha\":2}"]);
}

#[test]
fn test_remove_signals_single_line() {
    let event = RemoveSignals::new_multi(["a.b", "c.d"])
        .try_into_event()
        .unwrap();
    assert_eq!(event.payload(), ["paths a.b c.d"]);

    let err = RemoveSignals::new("a b").try_into_event().unwrap_err();
    assert!(err.is_invalid_signal_path());
}

#[test]
fn test_execute_script_defaults() {
    let event = ExecuteScript::try_new("alert(1)")
        .unwrap()
        .try_into_event()
        .unwrap();
    assert_eq!(event.payload(), ["attributes type module", "script alert(1)"]);

    let err = ExecuteScript::try_new("").unwrap_err();
    assert!(err.is_missing_value());
}

#[test]
fn test_multi_line_bodies_keep_every_line() {
    let inputs = [
        "one",
        "one\ntwo",
        "one\r\ntwo\rthree",
        "one\n\nthree",
        "  indented\n\ttabbed\n",
    ];

    for input in inputs {
        let expected: Vec<&str> = input.lines().flat_map(|line| line.split('\r')).collect();

        let event = MergeFragments::new(input).try_into_event().unwrap();
        let fragments: Vec<&str> = event
            .payload()
            .iter()
            .map(|line| line.strip_prefix("fragments ").unwrap())
            .collect();
        assert_eq!(fragments, expected, "input: {input:?}");

        let event = ExecuteScript::try_new(input)
            .unwrap()
            .try_into_event()
            .unwrap();
        let script: Vec<&str> = event
            .payload()
            .iter()
            .filter_map(|line| line.strip_prefix("script "))
            .collect();
        assert_eq!(script, expected, "input: {input:?}");
    }
}

#[test]
fn test_event_data_converts_into_event() {
    let events: Vec<Event> = all_kinds()
        .into_iter()
        .map(|data| Event::try_from(data).unwrap())
        .collect();
    let types: Vec<String> = events.iter().map(|e| e.event_type().to_string()).collect();
    assert_eq!(
        types,
        [
            "datastar-merge-fragments",
            "datastar-remove-fragments",
            "datastar-merge-signals",
            "datastar-remove-signals",
            "datastar-execute-script",
        ]
    );
}
