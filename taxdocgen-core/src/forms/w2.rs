//! W-2 Wage and Tax Statement layout.
//!
//! Identity boxes a/b/c/e/f on the left half, money boxes 1-6 on the
//! right, separated by a vertical divider and six horizontal rules.
//! Boxes 2/4/6 are fixed ratios of the wages figure.

use oxidize_pdf::Font;

use crate::money::{self, format_usd};
use crate::request::DocumentRequest;

use super::layout::{
    field, light_gray, mid_gray, FormLayout, Rect, Rule, TextRun, INCH, PAGE_HEIGHT as H,
    PAGE_WIDTH as W, TITLE_SIZE,
};

const EMPLOYEE_NAME: &str = "John Q. Taxpayer";
const EMPLOYEE_SSN: &str = "XXX-XX-1234";
const EMPLOYER_EIN: &str = "12-3456789";

pub fn layout(request: &DocumentRequest) -> FormLayout {
    let blank = request.is_blank();
    let faded = request.is_low_quality();
    let wages = request.amount;

    let ssn = request.recipient_tax_id.as_deref().unwrap_or(EMPLOYEE_SSN);
    let ein = request.tax_id.as_deref().unwrap_or(EMPLOYER_EIN);
    let employee = request.recipient.as_deref().unwrap_or(EMPLOYEE_NAME);

    let left = 0.6 * INCH;
    let mut fields = Vec::new();

    // Box a - employee SSN
    let mut ssn_value = TextRun::value(ssn, left, H - 1.7 * INCH, 11.0);
    if faded {
        ssn_value = ssn_value.with_color(light_gray());
    }
    fields.push(field(
        TextRun::caption("a Employee's social security number", left, H - 1.35 * INCH),
        vec![ssn_value],
        blank,
    ));

    // Box b - employer EIN
    fields.push(field(
        TextRun::caption("b Employer identification number (EIN)", left, H - 2.35 * INCH),
        vec![TextRun::value(ein, left, H - 2.7 * INCH, 11.0)],
        blank,
    ));

    // Box c - employer name and address
    let mut employer = TextRun::value(&request.counterparty, left, H - 3.7 * INCH, 11.0);
    if faded {
        employer = employer.with_color(mid_gray());
    }
    fields.push(field(
        TextRun::caption("c Employer's name, address, and ZIP code", left, H - 3.35 * INCH),
        vec![
            employer,
            TextRun::address("123 Business Ave", left, H - 3.95 * INCH),
            TextRun::address("Anytown, ST 12345", left, H - 4.15 * INCH),
        ],
        blank,
    ));

    // Box e - employee name
    fields.push(field(
        TextRun::caption(
            "e Employee's first name and initial    Last name",
            left,
            H - 4.85 * INCH,
        ),
        vec![TextRun::value(employee, left, H - 5.2 * INCH, 11.0)],
        blank,
    ));

    // Box f - employee address
    fields.push(field(
        TextRun::caption("f Employee's address and ZIP code", left, H - 5.85 * INCH),
        vec![TextRun::address(
            "456 Home Street, Hometown, ST 67890",
            left,
            H - 6.2 * INCH,
        )],
        blank,
    ));

    // Money boxes 1-6; only box 1 fades on low-quality fixtures
    let money_x = W / 2.0 + 0.1 * INCH;
    let boxes: [(&str, f64, bool); 6] = [
        ("1 Wages, tips, other compensation", wages, true),
        ("2 Federal income tax withheld", money::federal_withholding(wages), false),
        ("3 Social security wages", wages, false),
        ("4 Social security tax withheld", money::social_security_tax(wages), false),
        ("5 Medicare wages and tips", wages, false),
        ("6 Medicare tax withheld", money::medicare_tax(wages), false),
    ];
    for (i, (caption, amount, fades)) in boxes.iter().enumerate() {
        let offset = i as f64 * INCH;
        let mut value = TextRun::value(
            format_usd(*amount),
            money_x,
            H - 1.7 * INCH - offset,
            12.0,
        );
        if faded && *fades {
            value = value.with_color(light_gray());
        }
        fields.push(field(
            TextRun::caption(*caption, money_x, H - 1.35 * INCH - offset),
            vec![value],
            blank,
        ));
    }

    // Six horizontal rules plus the center divider
    let mut rules: Vec<Rule> = (0..6)
        .map(|i| {
            Rule::horizontal(0.5 * INCH, W - 0.5 * INCH, H - (1.5 + i as f64) * INCH)
        })
        .collect();
    rules.push(Rule::vertical(W / 2.0, H - 6.5 * INCH, H - 1.5 * INCH));

    FormLayout {
        title: TextRun::new(
            request.form.title(&request.year),
            INCH,
            H - 0.75 * INCH,
            Font::HelveticaBold,
            TITLE_SIZE,
        ),
        border: Rect::new(0.5 * INCH, INCH, W - INCH, H - 1.5 * INCH),
        rules,
        frames: Vec::new(),
        fields,
        footer: vec![
            TextRun::caption(
                "Department of the Treasury - Internal Revenue Service",
                left,
                0.6 * INCH,
            ),
            TextRun::caption(format!("Form W-2 ({})", request.year), W - 2.5 * INCH, 0.6 * INCH),
        ],
    }
}
