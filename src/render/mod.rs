//! The PDF rendering pipeline.
//!
//! Rendering is composed of two distinct stages:
//! 1. Shell evaluation - the caller's data (a converted Markdown fragment, or
//!    certificate fields) is substituted into the fixed HTML shell selected by
//!    [`TemplateKind`].
//! 2. PDF generation - the completed hypertext is handed to the external
//!    HTML-to-PDF engine, which lays it out and writes the document into an
//!    in-memory byte buffer.
//!
//! The pipeline holds no state between calls, so it is safe to invoke from any
//! number of requests concurrently.

mod pdf;
pub mod pulldown;
mod template;

use crate::prelude::*;

/// Selects which of the built-in HTML shells a render call evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// The plain A4 document shell, wrapping a converted Markdown fragment.
    Document,
    /// The landscape participation certificate shell.
    Certificate,
}

impl TemplateKind {
    fn template_name(self) -> &'static str {
        match self {
            Self::Document => "document.html",
            Self::Certificate => "certificate.html",
        }
    }
}

/// Evaluates the shell selected by `kind` against `ctx`, then renders the
/// result to PDF. Returns the complete document as an in-memory byte buffer.
pub fn render(kind: TemplateKind, ctx: minijinja::Value) -> Result<Vec<u8>> {
    let shell = template::environment()
        .get_template(kind.template_name())
        .wrap_err("Built-in shell is missing from the template environment.")?;

    let html = shell
        .render(ctx)
        .wrap_err("Shell evaluation failed.")?;

    pdf::convert(&html)
}

#[cfg(test)]
mod tests {
    use minijinja::context;

    use super::*;

    #[test]
    fn document_shell_renders_to_pdf() {
        let bytes = render(
            TemplateKind::Document,
            context! { content => "<h1>Hello</h1><p>World.</p>" },
        )
        .unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn certificate_shell_renders_to_pdf() {
        let bytes = render(
            TemplateKind::Certificate,
            context! {
                participant_name => "Jane Doe",
                course_name => "Deploying AI Solutions",
                completion_date => "2026-01-01",
                instructor_name => "IntelliForge AI Team",
                certificate_id => "IF-0123456789ABCDEF",
            },
        )
        .unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn equal_input_produces_equal_sized_output() {
        let ctx = || context! { content => "<p>deterministic</p>" };

        let first = render(TemplateKind::Document, ctx()).unwrap();
        let second = render(TemplateKind::Document, ctx()).unwrap();

        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn certificate_fields_are_escaped() {
        // A participant name containing markup must not inject tags into the shell.
        let result = render(
            TemplateKind::Certificate,
            context! {
                participant_name => "<script>alert(1)</script>",
                course_name => "Deploying AI Solutions",
                completion_date => "2026-01-01",
                instructor_name => "IntelliForge AI Team",
                certificate_id => "IF-0123456789ABCDEF",
            },
        );

        assert!(result.is_ok());
    }
}
