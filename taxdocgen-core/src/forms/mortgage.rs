//! 1098 Mortgage Interest Statement layout.
//!
//! Lender block top-left, borrower block below, box 1 (interest
//! received) and box 2 (outstanding principal at the fixed 25x
//! multiple of the annual interest).

use oxidize_pdf::Font;

use crate::money::{format_usd, outstanding_principal};
use crate::request::DocumentRequest;

use super::layout::{
    field, light_gray, mid_gray, FormLayout, Rect, TextRun, INCH, PAGE_HEIGHT as H,
    PAGE_WIDTH as W, TITLE_SIZE,
};

const BORROWER_NAME: &str = "John Q. Taxpayer";
const BORROWER_TIN: &str = "XXX-XX-1234";
const LENDER_TIN: &str = "77-8899001";

pub fn layout(request: &DocumentRequest) -> FormLayout {
    let blank = request.is_blank();
    let faded = request.is_low_quality();

    let lender_tin = request.tax_id.as_deref().unwrap_or(LENDER_TIN);
    let borrower = request.recipient.as_deref().unwrap_or(BORROWER_NAME);
    let borrower_tin = request.recipient_tax_id.as_deref().unwrap_or(BORROWER_TIN);

    let mut fields = Vec::new();

    let mut lender = TextRun::value(&request.counterparty, 0.7 * INCH, H - 1.6 * INCH, 11.0);
    if faded {
        lender = lender.with_color(mid_gray());
    }
    fields.push(field(
        TextRun::caption(
            "RECIPIENT'S/LENDER'S name, address, and telephone number",
            0.7 * INCH,
            H - 1.2 * INCH,
        ),
        vec![
            lender,
            TextRun::address("200 Mortgage Way", 0.7 * INCH, H - 1.85 * INCH),
            TextRun::address("Lending City, ST 44444", 0.7 * INCH, H - 2.05 * INCH),
        ],
        blank,
    ));

    fields.push(field(
        TextRun::caption("RECIPIENT'S TIN", 0.7 * INCH, H - 2.5 * INCH),
        vec![TextRun::value(lender_tin, 0.7 * INCH, H - 2.8 * INCH, 11.0)],
        blank,
    ));

    fields.push(field(
        TextRun::caption("PAYER'S/BORROWER'S TIN", 0.6 * INCH, H - 3.5 * INCH),
        vec![TextRun::value(borrower_tin, 0.6 * INCH, H - 3.8 * INCH, 11.0)],
        blank,
    ));
    fields.push(field(
        TextRun::caption("PAYER'S/BORROWER'S name", 0.6 * INCH, H - 4.2 * INCH),
        vec![
            TextRun::value(borrower, 0.6 * INCH, H - 4.5 * INCH, 11.0),
            TextRun::address("456 Home Street", 0.6 * INCH, H - 4.9 * INCH),
            TextRun::address("Hometown, ST 67890", 0.6 * INCH, H - 5.1 * INCH),
        ],
        blank,
    ));

    // Box 1 - mortgage interest received
    let mut interest = TextRun::value(
        format_usd(request.amount),
        W / 2.0 + 0.6 * INCH,
        H - 2.0 * INCH,
        14.0,
    );
    if faded {
        interest = interest.with_color(light_gray());
    }
    fields.push(field(
        TextRun::caption(
            "1 Mortgage interest received from payer(s)/borrower(s)",
            W / 2.0 + 0.6 * INCH,
            H - 1.5 * INCH,
        ),
        vec![interest],
        blank,
    ));

    // Box 2 - outstanding principal at the fixed multiple
    fields.push(field(
        TextRun::caption(
            "2 Outstanding mortgage principal",
            W / 2.0 + 0.6 * INCH,
            H - 3.0 * INCH,
        ),
        vec![TextRun::value(
            format_usd(outstanding_principal(request.amount)),
            W / 2.0 + 0.6 * INCH,
            H - 3.5 * INCH,
            12.0,
        )],
        blank,
    ));

    FormLayout {
        title: TextRun::new(
            request.form.title(&request.year),
            INCH,
            H - 0.75 * INCH,
            Font::HelveticaBold,
            TITLE_SIZE,
        ),
        border: Rect::new(0.5 * INCH, 2.0 * INCH, W - INCH, H - 2.5 * INCH),
        rules: Vec::new(),
        frames: vec![
            Rect::new(0.6 * INCH, H - 3.0 * INCH, 3.5 * INCH, 2.0 * INCH),
            Rect::new(W / 2.0 + 0.5 * INCH, H - 2.5 * INCH, 2.5 * INCH, 1.2 * INCH),
            Rect::new(W / 2.0 + 0.5 * INCH, H - 4.0 * INCH, 2.5 * INCH, 1.2 * INCH),
        ],
        fields,
        footer: vec![
            TextRun::caption(format!("Form 1098 ({})", request.year), 0.6 * INCH, 1.6 * INCH),
            TextRun::caption(
                "Department of the Treasury - Internal Revenue Service",
                0.6 * INCH,
                1.4 * INCH,
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormType;

    #[test]
    fn test_principal_is_twenty_five_times_interest() {
        let request =
            DocumentRequest::new(FormType::Mortgage1098, "Home Loans Inc", "mortgage", 12345.00);
        let layout = layout(&request);
        assert_eq!(layout.field("1 ").unwrap().value_text(), Some("$12,345.00"));
        assert_eq!(layout.field("2 ").unwrap().value_text(), Some("$308,625.00"));
    }

    #[test]
    fn test_borrower_block_defaults() {
        let request =
            DocumentRequest::new(FormType::Mortgage1098, "Home Loans Inc", "mortgage", 12345.00);
        let layout = layout(&request);
        assert_eq!(
            layout.field("PAYER'S/BORROWER'S name").unwrap().value_text(),
            Some("John Q. Taxpayer")
        );
        assert_eq!(
            layout.field("RECIPIENT'S TIN").unwrap().value_text(),
            Some("77-8899001")
        );
    }
}
