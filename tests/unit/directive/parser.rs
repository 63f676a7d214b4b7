use super::*;

#[test]
fn focus_parses_keyframes_and_time() {
    let d = parse_focus("0,0,1000,1000;200,200,400,400 1 3").unwrap();
    assert_eq!(d.keyframes.len(), 2);
    assert_eq!(d.keyframes[1].w.as_str(), "400");
    assert_eq!(d.time.start.value(), 1.0);
    assert_eq!(d.time.end.value(), 3.0);
    assert_eq!(d.time.duration(), 2.0);
}

#[test]
fn focus_tolerates_surrounding_and_repeated_whitespace() {
    let d = parse_focus("  1.5,2,3,4 \t 0.5   0.75 ").unwrap();
    assert_eq!(d.keyframes.len(), 1);
    assert_eq!(d.time.start.as_str(), "0.5");
}

#[test]
fn focus_rejects_malformed_input() {
    for bad in [
        "",
        "0,0,1000 1 3",
        "0,0,1000,1000 1",
        "0,0,1000,1000 1 3 4",
        "0,0,1000,1000; 1 3",
        "0,0,1000,1000;;1,1,1,1 1 3",
        "0,0,1000,1000,5 1 3",
        "0 0 1000 1000 1 3",
        "0,0,1000,1000 a 3",
    ] {
        assert!(parse_focus(bad).is_err(), "{bad:?} should not parse");
    }
}

#[test]
fn focus_error_mentions_expectation() {
    let err = parse_focus("0,0,1000 1 3").unwrap_err();
    assert_eq!(err.offset, 8);
    assert_eq!(err.message, "expected ',' after width, found whitespace");
}

#[test]
fn highlight_parses_all_six_fields() {
    let d = parse_highlight("10,10,5,5;20,20,5,5 #ffffff 2 0;1 0 2").unwrap();
    assert_eq!(d.rects.len(), 2);
    assert_eq!(d.color, "#ffffff");
    assert_eq!(d.thickness.as_str(), "2");
    assert_eq!(d.opacity.len(), 2);
    assert_eq!(d.opacity_src, "0;1");
    assert_eq!(d.time.duration(), 2.0);
}

#[test]
fn highlight_keeps_comma_separated_opacities_verbatim() {
    let d = parse_highlight("1,1,1,1 #000 1 0,0.5,1 0 1").unwrap();
    assert_eq!(d.opacity_src, "0,0.5,1");
    assert_eq!(d.opacity.len(), 3);
}

#[test]
fn highlight_rejects_missing_or_extra_fields() {
    for bad in [
        "10,10,5,5 #ffffff 2 0;1 0",
        "10,10,5,5 2 0;1 0 2",
        "10,10,5,5 #ffffff 2 0;1 0 2 9",
        "10,10,5 #ffffff 2 0;1 0 2",
        "10,10,5,5 ffffff 2 0;1 0 2",
        "10,10,5,5 #ffffff 2 0; 0 2",
    ] {
        assert!(parse_highlight(bad).is_err(), "{bad:?} should not parse");
    }
}
