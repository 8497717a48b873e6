//! 1099-DIV Dividends and Distributions layout.
//!
//! Box 1a carries the total ordinary dividends; box 1b reports the
//! qualified portion at the fixed 80% share.

use oxidize_pdf::Font;

use crate::money::{format_usd, qualified_dividends};
use crate::request::DocumentRequest;

use super::layout::{
    field, light_gray, mid_gray, FormLayout, Rect, TextRun, INCH, PAGE_HEIGHT as H,
    PAGE_WIDTH as W, TITLE_SIZE,
};

const RECIPIENT_NAME: &str = "John Q. Taxpayer";
const RECIPIENT_TIN: &str = "XXX-XX-1234";
const PAYER_TIN: &str = "55-6677889";

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
            TextRun::address("500 Investment Plaza", 0.7 * INCH, H - 1.85 * INCH),
            TextRun::address("Wall Street, NY 10001", 0.7 * INCH, H - 2.05 * INCH),
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

    // Box 1a - total ordinary dividends
    let mut total = TextRun::value(
        format_usd(request.amount),
        W / 2.0 + 0.6 * INCH,
        H - 2.0 * INCH,
        14.0,
    );
    if faded {
        total = total.with_color(light_gray());
    }
    fields.push(field(
        TextRun::caption("1a Total ordinary dividends", W / 2.0 + 0.6 * INCH, H - 1.5 * INCH),
        vec![total],
        blank,
    ));

    // Box 1b - qualified dividends at the fixed share
    fields.push(field(
        TextRun::caption("1b Qualified dividends", W / 2.0 + 0.6 * INCH, H - 3.0 * INCH),
        vec![TextRun::value(
            format_usd(qualified_dividends(request.amount)),
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
            TextRun::caption(format!("Form 1099-DIV ({})", request.year), 0.6 * INCH, 1.6 * INCH),
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
    fn test_qualified_share_is_eighty_percent() {
        let request =
            DocumentRequest::new(FormType::Div1099, "Investment Corp", "invest", 5678.00);
        let layout = layout(&request);
        assert_eq!(layout.field("1a ").unwrap().value_text(), Some("$5,678.00"));
        assert_eq!(layout.field("1b ").unwrap().value_text(), Some("$4,542.40"));
    }

    #[test]
    fn test_payer_defaults() {
        let request =
            DocumentRequest::new(FormType::Div1099, "Investment Corp", "invest", 5678.00);
        let layout = layout(&request);
        assert_eq!(
            layout.field("PAYER'S TIN").unwrap().value_text(),
            Some("55-6677889")
        );
        assert_eq!(
            layout.field("RECIPIENT'S name").unwrap().value_text(),
            Some("John Q. Taxpayer")
        );
    }
}
