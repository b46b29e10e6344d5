use std::collections::BTreeMap;

use printpdf::{GeneratePdfOptions, PdfDocument, PdfSaveOptions};

use crate::prelude::*;

/// Hands the completed hypertext to the PDF engine and collects the resulting
/// byte buffer.
///
/// On failure, nothing of the engine's partial output is preserved - callers
/// get the whole document or an error.
pub fn convert(html: &str) -> Result<Vec<u8>> {
    let images = BTreeMap::new();
    let fonts = BTreeMap::new();
    let mut warnings = Vec::new();

    let document = PdfDocument::from_html(
        html,
        &images,
        &fonts,
        &GeneratePdfOptions::default(),
        &mut warnings,
    )
    .map_err(|err| eyre!("The PDF engine rejected the generated markup: {err}"))?;

    for warning in &warnings {
        debug!("PDF generation warning: {warning:?}");
    }

    let mut save_warnings = Vec::new();
    let bytes = document.save(&PdfSaveOptions::default(), &mut save_warnings);

    ensure!(
        !bytes.is_empty(),
        "The PDF engine produced an empty byte buffer."
    );

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_markup() {
        let bytes = convert("<html><body><p>Hello.</p></body></html>").unwrap();

        assert!(bytes.starts_with(b"%PDF"));
        assert!(!bytes.is_empty());
    }
}
