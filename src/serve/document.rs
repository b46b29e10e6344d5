use axum::extract::State;
use axum::response::Response;
use serde::Deserialize;

use super::error::{ApiError, Json};
use super::{attachment, render_blocking, Server};
use crate::prelude::*;
use crate::render::{pulldown, TemplateKind};

/// Suggested download name when the client doesn't provide one.
const DEFAULT_FILENAME: &str = "document.pdf";

#[derive(Debug, Deserialize)]
pub struct ConversionRequest {
    #[serde(default)]
    pub markdown: String,
    #[serde(default)]
    pub filename: Option<String>,
}

/// `POST /api/convert` - converts a Markdown payload into a downloadable PDF.
pub async fn convert(
    State(server): State<Server>,
    Json(request): Json<ConversionRequest>,
) -> std::result::Result<Response, ApiError> {
    if request.markdown.trim().is_empty() {
        return Err(ApiError::validation("markdown must not be empty"));
    }

    info!(
        "Converting Markdown to PDF ({} chars)...",
        request.markdown.len()
    );

    let fragment = pulldown::to_html(&request.markdown, &server.config.render);

    let bytes = render_blocking(
        TemplateKind::Document,
        minijinja::context! { content => fragment },
    )
    .await?;

    info!("PDF generated successfully ({} bytes).", bytes.len());

    let filename = sanitize_filename(request.filename.as_deref());
    Ok(attachment(bytes, &filename))
}

/// Reduces a client-supplied filename to something safe to echo back inside a
/// `Content-Disposition` header. Falls back to the default name when nothing
/// usable remains.
fn sanitize_filename(filename: Option<&str>) -> String {
    let cleaned: String = filename
        .map(str::trim)
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
        .collect();

    if cleaned.is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_passes_through() {
        assert_eq!(sanitize_filename(Some("notes.pdf")), "notes.pdf");
    }

    #[test]
    fn filename_defaults_when_absent() {
        assert_eq!(sanitize_filename(None), DEFAULT_FILENAME);
    }

    #[test]
    fn filename_defaults_when_blank() {
        assert_eq!(sanitize_filename(Some("   ")), DEFAULT_FILENAME);
    }

    #[test]
    fn filename_strips_header_breaking_characters() {
        assert_eq!(
            sanitize_filename(Some("we\"ird\r\nname.pdf")),
            "weirdname.pdf"
        );
    }
}
