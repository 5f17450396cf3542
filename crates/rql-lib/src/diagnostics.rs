//! Source-annotated rendering of errors.

use std::borrow::Cow;
use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

use crate::Error;
use crate::parser::decode;

/// Builder for rendering one error against the query it came from.
///
/// Pass the raw (still percent-encoded) query as `source`: parse errors are
/// positioned in the decoded text, so the printer decodes it again to match.
pub struct ErrorPrinter<'e, 's> {
    error: &'e Error,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> ErrorPrinter<'e, 's> {
    pub fn new(error: &'e Error) -> Self {
        Self {
            error,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let (Some(source), Some(span)) = (self.annotated_source(), self.error.span()) else {
            return writeln!(w, "error: {}", self.error);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let range = adjust_range(span, source.len());
        let mut snippet = Snippet::source(&*source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(range).label(self.label()));
        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let message = self.error.to_string();
        let report = vec![Level::ERROR.primary_title(&message).element(snippet)];
        writeln!(w, "{}", renderer.render(&report))
    }

    fn annotated_source(&self) -> Option<Cow<'s, str>> {
        let source = self.source?;
        match self.error {
            Error::Lex(_) => Some(Cow::Borrowed(source)),
            Error::Parse(_) => decode(source).ok(),
            Error::RecursionLimitExceeded => None,
        }
    }

    fn label(&self) -> &'static str {
        match self.error {
            Error::Lex(_) => "expected '%' followed by two hex digits",
            Error::Parse(e) => e.kind.label(),
            Error::RecursionLimitExceeded => "",
        }
    }
}

/// Widens empty spans to one character so the caret has something to point at.
fn adjust_range(range: Range<usize>, limit: usize) -> Range<usize> {
    if range.start == range.end {
        return range.start..(range.start + 1).min(limit);
    }
    range.start..range.end.min(limit)
}

impl Error {
    /// Byte range of the offending text: raw query for lex errors,
    /// decoded query for parse errors.
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            Error::Lex(e) => e.span(),
            Error::Parse(e) => Some(e.span.clone()),
            Error::RecursionLimitExceeded => None,
        }
    }

    pub fn printer(&self) -> ErrorPrinter<'_, '_> {
        ErrorPrinter::new(self)
    }
}
