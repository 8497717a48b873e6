//! Layout-level assertions across form types: the rendered text for the
//! key boxes, the blank/low-quality behaviors, and the shared page
//! furniture every form carries.

use oxidize_pdf::Color;

use taxdocgen::forms::{self, FormType, INCH, PAGE_HEIGHT, PAGE_WIDTH};
use taxdocgen::{standard_requests, DocumentRequest};

#[test]
fn test_every_standard_layout_has_title_border_and_footer() {
    for request in standard_requests() {
        let layout = forms::layout(&request);
        assert!(layout.title.text.starts_with("Form "));
        assert!(layout.title.text.ends_with(&request.year));
        assert!(layout.border.width > 0.0 && layout.border.height > 0.0);
        assert_eq!(layout.footer.len(), 2, "{}", request.form);
    }
}

#[test]
fn test_blank_template_renders_captions_only() {
    let request = DocumentRequest::new(FormType::W2, "", "blank", 0.0).blank();
    let layout = forms::layout(&request);
    assert_eq!(layout.value_runs().count(), 0);
    assert!(!layout.fields.is_empty());
}

#[test]
fn test_blank_flag_applies_to_every_form_type() {
    let forms_list = [
        FormType::W2,
        FormType::Nec1099,
        FormType::Int1099,
        FormType::Div1099,
        FormType::Mortgage1098,
    ];
    for form in forms_list {
        let request = DocumentRequest::new(form, "Nobody", "nobody", 100.0).blank();
        let layout = forms::layout(&request);
        assert_eq!(layout.value_runs().count(), 0, "{form}");
    }
}

#[test]
fn test_low_quality_layouts_use_lighter_fills() {
    let request =
        DocumentRequest::new(FormType::W2, "Faded Corp", "faded", 48750.00).low_quality();
    let layout = forms::layout(&request);
    let faded: Vec<_> = layout
        .value_runs()
        .filter(|run| run.color != Color::black())
        .collect();
    assert_eq!(faded.len(), 3); // SSN, employer name, box 1 wages
    assert!(faded.iter().any(|run| run.text == "$48,750.00"));
}

#[test]
fn test_normal_layouts_are_all_black() {
    let request = DocumentRequest::new(FormType::W2, "Acme Corp", "acme", 75432.00);
    let layout = forms::layout(&request);
    assert!(layout.value_runs().all(|run| run.color == Color::black()));
}

#[test]
fn test_key_box_text_per_form() {
    let cases = [
        (FormType::W2, 75432.00, "1 ", "$75,432.00"),
        (FormType::Nec1099, 45000.00, "1 ", "$45,000.00"),
        (FormType::Int1099, 1234.00, "1 ", "$1,234.00"),
        (FormType::Div1099, 5678.00, "1a ", "$5,678.00"),
        (FormType::Mortgage1098, 12345.00, "1 ", "$12,345.00"),
    ];
    for (form, amount, prefix, expected) in cases {
        let request = DocumentRequest::new(form, "Counterparty", "cp", amount);
        let layout = forms::layout(&request);
        let field = layout.field(prefix).unwrap();
        assert_eq!(field.value_text(), Some(expected), "{form}");
    }
}

#[test]
fn test_layouts_stay_inside_the_page() {
    for request in standard_requests() {
        let layout = forms::layout(&request);
        for field in &layout.fields {
            for run in std::iter::once(&field.caption).chain(field.values.iter()) {
                assert!(run.x >= 0.0 && run.x <= PAGE_WIDTH, "{}", run.text);
                assert!(run.y >= 0.0 && run.y <= PAGE_HEIGHT, "{}", run.text);
            }
        }
        assert!(layout.border.x >= 0.25 * INCH);
    }
}

#[test]
fn test_year_override_flows_into_title_and_footer() {
    let request =
        DocumentRequest::new(FormType::Int1099, "Big Bank", "bigbank", 1234.00).with_year("2023");
    let layout = forms::layout(&request);
    assert_eq!(layout.title.text, "Form 1099-INT Interest Income 2023");
    assert!(layout.footer.iter().any(|run| run.text.contains("(2023)")));
}
