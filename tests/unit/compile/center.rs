use super::*;

fn flow(centered: Option<bool>) -> Flow {
    Flow {
        id: "a__1".to_string(),
        html: "<b>Hi</b>".to_string(),
        seconds: 1.0,
        centered,
        focus: None,
        highlight: None,
    }
}

#[test]
fn wraps_only_when_centered_is_true() {
    let mut f = flow(Some(true));
    center_flow(&mut f);
    assert_eq!(f.html, r#"<div class="centered"><b>Hi</b></div>"#);

    for c in [None, Some(false)] {
        let mut f = flow(c);
        center_flow(&mut f);
        assert_eq!(f.html, "<b>Hi</b>");
    }
}
