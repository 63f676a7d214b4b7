use super::*;

fn flow(focus: Option<&str>, highlight: Option<&str>) -> Flow {
    Flow {
        id: "ignored".to_string(),
        html: String::new(),
        seconds: 1.0,
        centered: None,
        focus: focus.map(str::to_string),
        highlight: highlight.map(str::to_string),
    }
}

#[test]
fn records_only_flows_with_directives() {
    let mut m = CompiledMapping::new();
    m.compile_flow("a__1", &flow(None, None)).unwrap();
    m.compile_flow("b__2", &flow(Some("0,0,1,1 0 1"), None)).unwrap();
    m.compile_flow("c__3", &flow(None, Some("0,0,1,1 #fff 1 1 0 1")))
        .unwrap();

    assert_eq!(m.len(), 2);
    assert!(m.get("a__1").is_none());
    assert!(m.get("b__2").unwrap().focus.is_some());
    assert!(m.get("b__2").unwrap().highlight.is_none());
    assert!(m.get("c__3").unwrap().highlight.is_some());
}

#[test]
fn rejects_repeated_qualified_id() {
    let mut m = CompiledMapping::new();
    m.compile_flow("a__1", &flow(None, None)).unwrap();
    let err = m.compile_flow("a__1", &flow(Some("0,0,1,1 0 1"), None)).unwrap_err();
    assert!(matches!(err, FlowdeckError::DuplicateFlowId(ref id) if id == "a__1"));
    assert_eq!(err.kind(), crate::foundation::error::ErrorKind::Internal);
}

#[test]
fn serializes_in_insertion_order_without_empty_fields() {
    let mut m = CompiledMapping::new();
    m.compile_flow("z__1", &flow(Some("0,0,1,1 0 1"), None)).unwrap();
    m.compile_flow("a__2", &flow(None, Some("0,0,1,1 #fff 1 1 0 1")))
        .unwrap();

    let json = serde_json::to_string(&m).unwrap();
    assert!(json.starts_with(r#"{"z__1":{"focus":"#), "{json}");
    assert!(json.find("z__1").unwrap() < json.find("a__2").unwrap());
    assert!(!json.contains("null"));
    let keys: Vec<&str> = m.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["z__1", "a__2"]);
}

#[test]
fn propagates_directive_errors() {
    let mut m = CompiledMapping::new();
    let err = m.compile_flow("a__1", &flow(Some("0,0,1,1 2 1"), None)).unwrap_err();
    assert!(matches!(err, FlowdeckError::NegativeDuration { .. }));
    assert!(m.is_empty());
}
