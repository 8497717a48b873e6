//! The per-document fixture request.

use crate::forms::FormType;

/// Tax year printed on a form when the request does not override it.
pub const DEFAULT_YEAR: &str = "2024";

/// Rendering quality of a fixture.
///
/// `Blank` leaves every value box empty (captions only), producing an
/// empty template. `LowQuality` lightens selected value text to mimic a
/// degraded scan. Both exist purely to exercise downstream extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Normal,
    Blank,
    LowQuality,
}

/// Everything needed to render one fixture document.
///
/// Immutable once built. The counterparty is the employer, payer or
/// lender depending on the form type; `amount` is the single primary
/// figure (wages, compensation, interest or dividends) every other
/// monetary box is derived from. No validation is performed: negative
/// amounts and empty names render as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRequest {
    pub form: FormType,
    pub counterparty: String,
    /// Short token used in the output filename (`acme`, `bigbank`, ...).
    /// Hand-picked per request, not derived from the counterparty name.
    pub slug: String,
    pub amount: f64,
    pub year: String,
    pub quality: Quality,
    /// Employer EIN / payer TIN / lender TIN override.
    pub tax_id: Option<String>,
    /// Employee / recipient / borrower name override.
    pub recipient: Option<String>,
    /// Employee SSN / recipient TIN / borrower TIN override.
    pub recipient_tax_id: Option<String>,
}

impl DocumentRequest {
    pub fn new(
        form: FormType,
        counterparty: impl Into<String>,
        slug: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            form,
            counterparty: counterparty.into(),
            slug: slug.into(),
            amount,
            year: DEFAULT_YEAR.to_string(),
            quality: Quality::Normal,
            tax_id: None,
            recipient: None,
            recipient_tax_id: None,
        }
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    pub fn with_tax_id(mut self, tax_id: impl Into<String>) -> Self {
        self.tax_id = Some(tax_id.into());
        self
    }

    pub fn with_recipient(mut self, name: impl Into<String>) -> Self {
        self.recipient = Some(name.into());
        self
    }

    pub fn with_recipient_tax_id(mut self, tax_id: impl Into<String>) -> Self {
        self.recipient_tax_id = Some(tax_id.into());
        self
    }

    /// Marks the request as an empty template.
    pub fn blank(mut self) -> Self {
        self.quality = Quality::Blank;
        self
    }

    /// Marks the request as a simulated degraded scan.
    pub fn low_quality(mut self) -> Self {
        self.quality = Quality::LowQuality;
        self
    }

    pub fn is_blank(&self) -> bool {
        self.quality == Quality::Blank
    }

    pub fn is_low_quality(&self) -> bool {
        self.quality == Quality::LowQuality
    }

    /// Deterministic output filename for this request.
    pub fn filename(&self) -> String {
        match self.quality {
            Quality::Blank => format!("{}-blank-template.pdf", self.form.slug()),
            Quality::LowQuality => format!("{}-lowquality-{}.pdf", self.form.slug(), self.year),
            Quality::Normal => format!("{}-{}-{}.pdf", self.form.slug(), self.slug, self.year),
        }
    }
}
