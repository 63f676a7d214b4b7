use super::*;

fn kinds(src: &str) -> Vec<TokenKind> {
    lex(src).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn lexes_quads_and_collapses_whitespace() {
    let k = kinds("1,2.5;3  4");
    assert!(matches!(k[0], TokenKind::Number(ref d) if d.as_str() == "1"));
    assert_eq!(k[1], TokenKind::Comma);
    assert!(matches!(k[2], TokenKind::Number(ref d) if d.as_str() == "2.5"));
    assert_eq!(k[3], TokenKind::Semicolon);
    assert_eq!(k[5], TokenKind::Space);
    assert_eq!(k.len(), 8);
    assert_eq!(k[7], TokenKind::Eof);
}

#[test]
fn lexes_colors() {
    let k = kinds("#FFaa00");
    assert_eq!(k[0], TokenKind::Color("#FFaa00".to_string()));
}

#[test]
fn spans_cover_source() {
    let toks = lex("10,20").unwrap();
    assert_eq!(toks[0].span, Span { start: 0, end: 2 });
    assert_eq!(toks[2].span, Span { start: 3, end: 5 });
    assert_eq!(toks[3].span, Span { start: 5, end: 5 });
}

#[test]
fn rejects_bad_numbers_and_characters() {
    assert_eq!(lex("1.2.3").unwrap_err().offset, 0);
    assert!(lex("1,-2").unwrap_err().message.contains("negative"));
    assert!(lex("1,x").unwrap_err().message.contains("'x'"));
    assert!(lex("# 1").unwrap_err().message.contains("hex"));
    assert!(lex("1é").unwrap_err().message.contains("'é'"));
}
