//! The driver: renders a list of requests to PDF files in order.

use std::fs;
use std::path::{Path, PathBuf};

use oxidize_pdf::{Document, Page};
use tracing::debug;

use crate::error::Result;
use crate::forms::{self, FormType};
use crate::manifest::ManifestEntry;
use crate::request::DocumentRequest;

/// Renders fixture requests into an output directory.
///
/// Single-threaded and strictly ordered: each document is rendered and
/// flushed before the next begins, and manifest order matches request
/// order. Existing files with the same names are overwritten. The
/// first failure aborts the run.
pub struct FixtureGenerator {
    output_dir: PathBuf,
}

impl FixtureGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Generates one PDF per request and returns the manifest.
    ///
    /// Creates the output directory if absent. Prints one progress line
    /// per file plus a final count; the printed lines are observability
    /// only, the returned manifest is the contract.
    pub fn generate(&self, requests: &[DocumentRequest]) -> Result<Vec<ManifestEntry>> {
        fs::create_dir_all(&self.output_dir)?;

        let mut manifest = Vec::with_capacity(requests.len());
        for request in requests {
            let filename = request.filename();
            let path = self.output_dir.join(&filename);

            let mut document = Document::new();
            document.set_title(request.form.title(&request.year));
            document.set_creator("taxdocgen");

            let mut page = Page::letter();
            forms::render(&mut page, request)?;
            document.add_page(page);
            document.save(&path)?;

            debug!(
                form = %request.form,
                file = %path.display(),
                amount = request.amount,
                "fixture written"
            );
            println!("✓ Created {filename}");
            manifest.push(ManifestEntry::from_request(request, filename));
        }

        println!(
            "\n✅ Generated {} tax documents in {}/",
            manifest.len(),
            self.output_dir.display()
        );
        Ok(manifest)
    }
}

/// The fixed fixture set the downstream evaluation suite expects:
/// eight populated forms plus the blank-template and low-quality W-2
/// edge cases, ten documents in all.
pub fn standard_requests() -> Vec<DocumentRequest> {
    vec![
        DocumentRequest::new(FormType::W2, "Acme Corp", "acme", 75432.00),
        DocumentRequest::new(FormType::W2, "TechStart Inc", "techstart", 92150.00),
        DocumentRequest::new(FormType::W2, "GlobalCo LLC", "globalco", 55000.00),
        DocumentRequest::new(FormType::Nec1099, "Consulting Partners", "consult", 45000.00),
        DocumentRequest::new(FormType::Nec1099, "Freelance Hub", "freelance", 28500.00),
        DocumentRequest::new(FormType::Int1099, "Big Bank", "bigbank", 1234.00),
        DocumentRequest::new(FormType::Div1099, "Investment Corp", "invest", 5678.00),
        DocumentRequest::new(FormType::Mortgage1098, "Home Loans Inc", "mortgage", 12345.00),
        DocumentRequest::new(FormType::W2, "", "blank", 0.0).blank(),
        DocumentRequest::new(FormType::W2, "Faded Corp", "faded", 48750.00).low_quality(),
    ]
}
