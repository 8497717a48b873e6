//! 1099-NEC Nonemployee Compensation layout.
//!
//! Payer block in a framed box top-left, recipient block below it,
//! and two framed amount boxes on the right: box 1 (the compensation
//! figure, the one downstream extraction cares about) and box 4, which
//! is always `$0.00` on these fixtures.

use oxidize_pdf::Font;

use crate::money::format_usd;
use crate::request::DocumentRequest;

use super::layout::{
    field, light_gray, mid_gray, FieldBox, FormLayout, Rect, TextRun, INCH, PAGE_HEIGHT as H,
    PAGE_WIDTH as W, TITLE_SIZE,
};

const RECIPIENT_NAME: &str = "Jane D. Contractor";
const RECIPIENT_TIN: &str = "XXX-XX-5678";
const PAYER_TIN: &str = "98-7654321";

pub fn layout(request: &DocumentRequest) -> FormLayout {
    let blank = request.is_blank();
    let faded = request.is_low_quality();

    let payer_tin = request.tax_id.as_deref().unwrap_or(PAYER_TIN);
    let recipient = request.recipient.as_deref().unwrap_or(RECIPIENT_NAME);
    let recipient_tin = request.recipient_tax_id.as_deref().unwrap_or(RECIPIENT_TIN);

    let mut fields = Vec::new();

    // Payer block (two caption lines, then name, address, TIN)
    let mut payer = TextRun::value(&request.counterparty, 0.7 * INCH, H - 1.7 * INCH, 11.0);
    if faded {
        payer = payer.with_color(mid_gray());
    }
    fields.push(field(
        TextRun::caption(
            "PAYER'S name, street address, city or town, state or province,",
            0.7 * INCH,
            H - 1.2 * INCH,
        ),
        vec![
            payer,
            TextRun::address("789 Client Road", 0.7 * INCH, H - 1.95 * INCH),
            TextRun::address("Business City, ST 11111", 0.7 * INCH, H - 2.15 * INCH),
        ],
        blank,
    ));
    fields.push(FieldBox::note(TextRun::caption(
        "country, ZIP or foreign postal code, and telephone no.",
        0.7 * INCH,
        H - 1.35 * INCH,
    )));

    fields.push(field(
        TextRun::caption("PAYER'S TIN", 0.7 * INCH, H - 2.5 * INCH),
        vec![TextRun::value(payer_tin, 0.7 * INCH, H - 2.8 * INCH, 11.0)],
        blank,
    ));

    // Recipient block
    fields.push(field(
        TextRun::caption("RECIPIENT'S TIN", 0.6 * INCH, H - 3.5 * INCH),
        vec![TextRun::value(recipient_tin, 0.6 * INCH, H - 3.8 * INCH, 11.0)],
        blank,
    ));
    fields.push(field(
        TextRun::caption("RECIPIENT'S name", 0.6 * INCH, H - 4.2 * INCH),
        vec![
            TextRun::value(recipient, 0.6 * INCH, H - 4.5 * INCH, 11.0),
            TextRun::address("321 Freelance Lane", 0.6 * INCH, H - 4.9 * INCH),
            TextRun::address("Worktown, ST 22222", 0.6 * INCH, H - 5.1 * INCH),
        ],
        blank,
    ));

    // Box 1 - nonemployee compensation
    let mut compensation = TextRun::value(
        format_usd(request.amount),
        W / 2.0 + 0.6 * INCH,
        H - 2.0 * INCH,
        14.0,
    );
    if faded {
        compensation = compensation.with_color(light_gray());
    }
    fields.push(field(
        TextRun::caption("1 Nonemployee compensation", W / 2.0 + 0.6 * INCH, H - 1.5 * INCH),
        vec![compensation],
        blank,
    ));

    // Box 4 - federal withholding, fixed at zero
    fields.push(field(
        TextRun::caption(
            "4 Federal income tax withheld",
            W / 2.0 + 0.6 * INCH,
            H - 3.0 * INCH,
        ),
        vec![TextRun::value(
            format_usd(0.0),
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
            TextRun::caption(
                format!("Form 1099-NEC (Rev. 1-{})", request.year),
                0.6 * INCH,
                1.6 * INCH,
            ),
            TextRun::caption(
                "Department of the Treasury - Internal Revenue Service",
                0.6 * INCH,
                1.4 * INCH,
            ),
        ],
    }
}
