//! Compiler for the compact `focus` / `highlight` flow directives.
//!
//! Each directive string goes through `lex -> parse -> check -> lower`. Parsing yields a typed
//! [`ast::Directive`]; lowering turns it into SVG animation markup.

pub(crate) mod ast;
pub(crate) mod error;
pub(crate) mod lexer;
pub(crate) mod lower;
pub(crate) mod parser;

use crate::{
    directive::ast::Directive,
    foundation::error::{DirectiveKind, FlowdeckError, FlowdeckResult},
};

/// Parse a directive string of the given kind.
pub fn parse_directive(kind: DirectiveKind, src: &str) -> Result<Directive, error::DirectiveError> {
    match kind {
        DirectiveKind::Focus => parser::parse_focus(src).map(Directive::Focus),
        DirectiveKind::Highlight => parser::parse_highlight(src).map(Directive::Highlight),
    }
}

/// Parse, check and lower one directive belonging to flow `flow` (a qualified id).
///
/// Fails on malformed grammar and on an end time before the start time.
pub fn compile_directive(flow: &str, kind: DirectiveKind, src: &str) -> FlowdeckResult<String> {
    let directive = parse_directive(kind, src)
        .map_err(|e| FlowdeckError::directive(flow, kind, e.to_string()))?;

    let time = directive.time();
    if time.duration() < 0.0 {
        return Err(FlowdeckError::NegativeDuration {
            flow: flow.to_owned(),
            kind,
            start: time.start.value(),
            end: time.end.value(),
        });
    }

    Ok(directive.to_markup())
}

#[cfg(test)]
#[path = "../../tests/unit/directive/compile.rs"]
mod tests;
