use crate::directive::parser::{parse_focus, parse_highlight};

#[test]
fn focus_markup_uses_space_separated_keyframes() {
    let d = parse_focus("0,0,1000,1000;200,200,400,400 1 3").unwrap();
    assert_eq!(d.values(), "0 0 1000 1000;200 200 400 400");
    assert_eq!(
        d.to_markup(),
        r#"<animate attributeName="viewBox" values="0 0 1000 1000;200 200 400 400" begin="1s" dur="2s" fill="freeze"/>"#
    );
}

#[test]
fn focus_keeps_decimal_text_and_formats_fractional_times() {
    let d = parse_focus("0.50,0,10,10 0.1 0.3").unwrap();
    let m = d.to_markup();
    assert!(m.contains(r#"values="0.50 0 10 10""#));
    assert!(m.contains(r#"begin="0.1s""#));
    assert!(m.contains(r#"dur="0.2s""#));
}

#[test]
fn highlight_fans_out_one_rect_per_quad() {
    let d = parse_highlight("10,10,5,5;20,20,5,5 #ffffff 2 0;1 0 2").unwrap();
    let m = d.to_markup();
    assert_eq!(m.matches("<rect ").count(), 2);
    assert_eq!(m.matches("</rect>").count(), 2);
    assert_eq!(m.matches(r##"stroke="#ffffff""##).count(), 2);
    assert_eq!(m.matches(r#"stroke-width="2""#).count(), 2);
    assert_eq!(
        m.matches(r#"<animate attributeName="stroke-opacity" values="0;1" begin="0s" dur="2s" fill="freeze"/>"#)
            .count(),
        2
    );
    let first = m.find(r#"x="10""#).unwrap();
    let second = m.find(r#"x="20""#).unwrap();
    assert!(first < second);
}

#[test]
fn highlight_rect_attributes() {
    let d = parse_highlight("1,2,3,4 #abc 1.5 0.25;1 0 1").unwrap();
    assert_eq!(
        d.to_markup(),
        concat!(
            r#"<rect x="1" y="2" width="3" height="4" rx="10" ry="10" fill="transparent" "#,
            r##"stroke="#abc" stroke-width="1.5" stroke-opacity="0.25">"##,
            r#"<animate attributeName="stroke-opacity" values="0.25;1" begin="0s" dur="1s" fill="freeze"/>"#,
            r#"</rect>"#,
        )
    );
}
