//! Per-document field summaries.
//!
//! One entry is appended per generated file, in generation order, and
//! never mutated afterwards. Serialized keys match what the downstream
//! evaluation pipeline expects (`type`, `isBlank`, `isLowQuality`).

use serde::Serialize;

use crate::forms::FormType;
use crate::request::DocumentRequest;

fn is_false(value: &bool) -> bool {
    !*value
}

/// Summary of one generated fixture.
///
/// Only the fields relevant to the form type are populated: a W-2 has
/// `employer`/`wages`, a 1099 has `payer` plus its amount, a 1098 has
/// `lender`/`interest`. A blank template carries only the flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub filename: String,
    #[serde(rename = "type")]
    pub form_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wages: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compensation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dividends: Option<f64>,
    #[serde(skip_serializing_if = "is_false")]
    pub is_blank: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_low_quality: bool,
}

impl ManifestEntry {
    pub fn from_request(request: &DocumentRequest, filename: impl Into<String>) -> Self {
        let mut entry = ManifestEntry {
            filename: filename.into(),
            form_type: request.form.label().to_string(),
            ..ManifestEntry::default()
        };

        if request.is_blank() {
            entry.is_blank = true;
            return entry;
        }

        let name = Some(request.counterparty.clone());
        let amount = Some(request.amount);
        match request.form {
            FormType::W2 => {
                entry.employer = name;
                entry.wages = amount;
            }
            FormType::Nec1099 => {
                entry.payer = name;
                entry.compensation = amount;
            }
            FormType::Int1099 => {
                entry.payer = name;
                entry.interest = amount;
            }
            FormType::Div1099 => {
                entry.payer = name;
                entry.dividends = amount;
            }
            FormType::Mortgage1098 => {
                entry.lender = name;
                entry.interest = amount;
            }
        }
        entry.is_low_quality = request.is_low_quality();
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_w2_entry_fields() {
        let request = DocumentRequest::new(FormType::W2, "Acme Corp", "acme", 75432.00);
        let entry = ManifestEntry::from_request(&request, request.filename());
        assert_eq!(
            entry,
            ManifestEntry {
                filename: "w2-acme-2024.pdf".to_string(),
                form_type: "W-2".to_string(),
                employer: Some("Acme Corp".to_string()),
                wages: Some(75432.00),
                ..ManifestEntry::default()
            }
        );
    }

    #[test]
    fn test_blank_entry_carries_only_the_flag() {
        let request = DocumentRequest::new(FormType::W2, "", "blank", 0.0).blank();
        let entry = ManifestEntry::from_request(&request, request.filename());
        assert!(entry.is_blank);
        assert_eq!(entry.employer, None);
        assert_eq!(entry.wages, None);
    }

    #[test]
    fn test_low_quality_entry_keeps_fields() {
        let request =
            DocumentRequest::new(FormType::W2, "Faded Corp", "faded", 48750.00).low_quality();
        let entry = ManifestEntry::from_request(&request, request.filename());
        assert!(entry.is_low_quality);
        assert_eq!(entry.employer.as_deref(), Some("Faded Corp"));
        assert_eq!(entry.wages, Some(48750.00));
    }

    #[test]
    fn test_per_form_amount_slots() {
        let nec = DocumentRequest::new(FormType::Nec1099, "Consulting Partners", "consult", 45000.0);
        let entry = ManifestEntry::from_request(&nec, nec.filename());
        assert_eq!(entry.compensation, Some(45000.0));
        assert_eq!(entry.payer.as_deref(), Some("Consulting Partners"));

        let mortgage = DocumentRequest::new(FormType::Mortgage1098, "Home Loans Inc", "mortgage", 12345.0);
        let entry = ManifestEntry::from_request(&mortgage, mortgage.filename());
        assert_eq!(entry.interest, Some(12345.0));
        assert_eq!(entry.lender.as_deref(), Some("Home Loans Inc"));
    }

    #[test]
    fn test_serialized_keys_are_camel_case() {
        let request =
            DocumentRequest::new(FormType::W2, "Faded Corp", "faded", 48750.00).low_quality();
        let entry = ManifestEntry::from_request(&request, request.filename());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "W-2");
        assert_eq!(json["isLowQuality"], true);
        assert!(json.get("isBlank").is_none());
        assert!(json.get("compensation").is_none());
    }
}
