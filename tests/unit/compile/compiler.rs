use super::*;

const DOC: &str = r#"
min: 1em
max: 2em
sections:
  - flows:
      - id: intro
        html: Hello
        seconds: 2
        centered: true
      - id: chart
        html: Zoom
        seconds: 3
        focus: "0,0,1000,1000;200,200,400,400 1 3"
    subsections:
      - flows:
          - id: chart
            html: Mark
            seconds: 2
            highlight: "10,10,5,5;20,20,5,5 #ffffff 2 0;1 0 2"
"#;

#[test]
fn runs_all_passes() {
    let doc = Document::from_yaml_str(DOC).unwrap();
    let out = compile_document(doc).unwrap();

    let flows: Vec<&Flow> = out.narration.flows().collect();
    assert_eq!(flows[0].id, "intro__1");
    assert_eq!(flows[0].html, r#"<div class="centered">Hello</div>"#);
    assert_eq!(flows[1].id, "chart__2");
    assert_eq!(flows[2].id, "chart__3");
    assert!(flows.iter().all(|f| f.focus.is_none() && f.highlight.is_none()));

    assert_eq!(out.roots, ["intro", "chart"]);
    assert_eq!(out.mapping.len(), 2);
    assert!(
        out.mapping
            .get("chart__2")
            .unwrap()
            .focus
            .as_deref()
            .unwrap()
            .contains(r#"values="0 0 1000 1000;200 200 400 400""#)
    );
    assert_eq!(
        out.mapping
            .get("chart__3")
            .unwrap()
            .highlight
            .as_deref()
            .unwrap()
            .matches("<rect ")
            .count(),
        2
    );
}

#[test]
fn narration_json_has_no_directive_keys() {
    let out = compile_document(Document::from_yaml_str(DOC).unwrap()).unwrap();
    let json = serde_json::to_string(&out.narration).unwrap();
    assert!(!json.contains("\"focus\""));
    assert!(!json.contains("\"highlight\""));
}

#[test]
fn inverted_directive_aborts_with_qualified_flow() {
    let src = DOC.replace("1 3\"", "3 1\"");
    let err = compile_document(Document::from_yaml_str(&src).unwrap()).unwrap_err();
    assert!(matches!(err, FlowdeckError::NegativeDuration { ref flow, .. } if flow == "chart__2"));
}

#[test]
fn strip_directives_clears_both_fields() {
    let mut f = Flow {
        id: "a".to_string(),
        html: String::new(),
        seconds: 0.0,
        centered: None,
        focus: Some("x".to_string()),
        highlight: Some("y".to_string()),
    };
    strip_directives(&mut f);
    assert_eq!((f.focus, f.highlight), (None, None));
}
