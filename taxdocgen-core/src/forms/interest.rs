//! 1099-INT Interest Income layout.
//!
//! Same statement shape as the 1099-NEC: framed payer block, recipient
//! block, box 1 (interest income) and box 2 (early withdrawal penalty,
//! always `$0.00` on these fixtures).

use oxidize_pdf::Font;

use crate::money::format_usd;
use crate::request::DocumentRequest;

use super::layout::{
    field, light_gray, mid_gray, FormLayout, Rect, TextRun, INCH, PAGE_HEIGHT as H,
    PAGE_WIDTH as W, TITLE_SIZE,
};

const RECIPIENT_NAME: &str = "John Q. Taxpayer";
const RECIPIENT_TIN: &str = "XXX-XX-1234";
const PAYER_TIN: &str = "11-2233445";

pub fn layout(request: &DocumentRequest) -> FormLayout {
    let blank = request.is_blank();
    let faded = request.is_low_quality();

    let payer_tin = request.tax_id.as_deref().unwrap_or(PAYER_TIN);
    let recipient = request.recipient.as_deref().unwrap_or(RECIPIENT_NAME);
    let recipient_tin = request.recipient_tax_id.as_deref().unwrap_or(RECIPIENT_TIN);

    let mut fields = Vec::new();

    let mut payer = TextRun::value(&request.counterparty, 0.7 * INCH, H - 1.6 * INCH, 11.0);
    if faded {
        payer = payer.with_color(mid_gray());
    }
    fields.push(field(
        TextRun::caption(
            "PAYER'S name, street address, city, state, ZIP code",
            0.7 * INCH,
            H - 1.2 * INCH,
        ),
        vec![
            payer,
            TextRun::address("100 Finance Boulevard", 0.7 * INCH, H - 1.85 * INCH),
            TextRun::address("Banking City, ST 33333", 0.7 * INCH, H - 2.05 * INCH),
        ],
        blank,
    ));

    fields.push(field(
        TextRun::caption("PAYER'S TIN", 0.7 * INCH, H - 2.5 * INCH),
        vec![TextRun::value(payer_tin, 0.7 * INCH, H - 2.8 * INCH, 11.0)],
        blank,
    ));

    fields.push(field(
        TextRun::caption("RECIPIENT'S TIN", 0.6 * INCH, H - 3.5 * INCH),
        vec![TextRun::value(recipient_tin, 0.6 * INCH, H - 3.8 * INCH, 11.0)],
        blank,
    ));
    fields.push(field(
        TextRun::caption("RECIPIENT'S name", 0.6 * INCH, H - 4.2 * INCH),
        vec![TextRun::value(recipient, 0.6 * INCH, H - 4.5 * INCH, 11.0)],
        blank,
    ));

    // Box 1 - interest income
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
        TextRun::caption("1 Interest income", W / 2.0 + 0.6 * INCH, H - 1.5 * INCH),
        vec![interest],
        blank,
    ));

    // Box 2 - early withdrawal penalty, fixed at zero
    fields.push(field(
        TextRun::caption("2 Early withdrawal penalty", W / 2.0 + 0.6 * INCH, H - 3.0 * INCH),
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
            TextRun::caption(format!("Form 1099-INT ({})", request.year), 0.6 * INCH, 1.6 * INCH),
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
    fn test_box_1_and_penalty() {
        let request = DocumentRequest::new(FormType::Int1099, "Big Bank", "bigbank", 1234.00);
        let layout = layout(&request);
        assert_eq!(layout.field("1 ").unwrap().value_text(), Some("$1,234.00"));
        assert_eq!(layout.field("2 ").unwrap().value_text(), Some("$0.00"));
        assert_eq!(
            layout.field("PAYER'S name").unwrap().value_text(),
            Some("Big Bank")
        );
    }

    #[test]
    fn test_title_line() {
        let request = DocumentRequest::new(FormType::Int1099, "Big Bank", "bigbank", 1234.00);
        let layout = layout(&request);
        assert_eq!(layout.title.text, "Form 1099-INT Interest Income 2024");
    }
}
