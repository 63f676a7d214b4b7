use crate::directive::ast::{FocusDirective, HighlightDirective, Quad, TimeRange};
use crate::directive::error::DirectiveError;
use crate::directive::lexer::{Span, Token, TokenKind, lex};
use crate::foundation::core::Decimal;

/// Parse `"<x,y,w,h>[;<x,y,w,h>...] <start> <end>"`.
pub fn parse_focus(src: &str) -> Result<FocusDirective, DirectiveError> {
    let mut p = Parser::new(src)?;
    let keyframes = p.parse_quads()?;
    p.expect_space("start time")?;
    let time = p.parse_time_range()?;
    p.expect_eof()?;
    Ok(FocusDirective { keyframes, time })
}

/// Parse `"<quads> <#color> <thickness> <opacity>[;<opacity>...] <start> <end>"`.
pub fn parse_highlight(src: &str) -> Result<HighlightDirective, DirectiveError> {
    let mut p = Parser::new(src)?;
    let rects = p.parse_quads()?;
    p.expect_space("color")?;
    let color = p.expect_color()?;
    p.expect_space("thickness")?;
    let thickness = p.expect_number("thickness")?;
    p.expect_space("opacity keyframes")?;
    let (opacity, opacity_span) = p.parse_opacities()?;
    p.expect_space("start time")?;
    let time = p.parse_time_range()?;
    p.expect_eof()?;
    Ok(HighlightDirective {
        rects,
        color,
        thickness,
        opacity,
        opacity_src: p.src[opacity_span.start..opacity_span.end].to_owned(),
        time,
    })
}

struct Parser<'a> {
    src: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Result<Self, DirectiveError> {
        let src = src.trim();
        if src.is_empty() {
            return Err(DirectiveError::new(0, "directive is empty"));
        }
        Ok(Self {
            src,
            tokens: lex(src)?,
            pos: 0,
        })
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn bump(&mut self) -> Token {
        let t = self.tokens[self.pos].clone();
        // Eof is sticky.
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        t
    }

    fn consume(&mut self, kind: &TokenKind) -> bool {
        if &self.peek().kind == kind {
            self.bump();
            true
        } else {
            false
        }
    }

    fn unexpected(&self, what: &str) -> DirectiveError {
        let t = self.peek();
        DirectiveError::new(t.span.start, format!("expected {what}, found {}", t.kind))
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<(), DirectiveError> {
        if self.consume(&kind) {
            Ok(())
        } else {
            Err(self.unexpected(what))
        }
    }

    fn expect_space(&mut self, next: &str) -> Result<(), DirectiveError> {
        if self.consume(&TokenKind::Space) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("whitespace before {next}")))
        }
    }

    fn expect_eof(&mut self) -> Result<(), DirectiveError> {
        if self.peek().kind == TokenKind::Eof {
            Ok(())
        } else {
            Err(self.unexpected("end of directive"))
        }
    }

    fn expect_number(&mut self, what: &str) -> Result<Decimal, DirectiveError> {
        if let TokenKind::Number(d) = &self.peek().kind {
            let d = d.clone();
            self.bump();
            Ok(d)
        } else {
            Err(self.unexpected(what))
        }
    }

    fn expect_color(&mut self) -> Result<String, DirectiveError> {
        if let TokenKind::Color(c) = &self.peek().kind {
            let c = c.clone();
            self.bump();
            Ok(c)
        } else {
            Err(self.unexpected("'#' color"))
        }
    }

    fn parse_quads(&mut self) -> Result<Vec<Quad>, DirectiveError> {
        let mut out = vec![self.parse_quad()?];
        while self.consume(&TokenKind::Semicolon) {
            out.push(self.parse_quad()?);
        }
        Ok(out)
    }

    fn parse_quad(&mut self) -> Result<Quad, DirectiveError> {
        let x = self.expect_number("x coordinate")?;
        self.expect(TokenKind::Comma, "',' after x")?;
        let y = self.expect_number("y coordinate")?;
        self.expect(TokenKind::Comma, "',' after y")?;
        let w = self.expect_number("width")?;
        self.expect(TokenKind::Comma, "',' after width")?;
        let h = self.expect_number("height")?;
        Ok(Quad { x, y, w, h })
    }

    fn parse_opacities(&mut self) -> Result<(Vec<Decimal>, Span), DirectiveError> {
        let start = self.peek().span.start;
        let mut out = vec![self.expect_number("opacity")?];
        let mut end = self.tokens[self.pos - 1].span.end;
        while matches!(self.peek().kind, TokenKind::Semicolon | TokenKind::Comma) {
            self.bump();
            out.push(self.expect_number("opacity")?);
            end = self.tokens[self.pos - 1].span.end;
        }
        Ok((out, Span { start, end }))
    }

    fn parse_time_range(&mut self) -> Result<TimeRange, DirectiveError> {
        let start = self.expect_number("start time")?;
        self.expect_space("end time")?;
        let end = self.expect_number("end time")?;
        Ok(TimeRange { start, end })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/directive/parser.rs"]
mod tests;
