//! Form layout routines - one per supported tax form.
//!
//! Each routine turns a [`DocumentRequest`](crate::request::DocumentRequest)
//! into a [`FormLayout`]: the title run, the outer border, grid rules,
//! thin-stroked frames, captioned field boxes and footer lines, all at
//! fixed absolute coordinates on a US Letter page. A single painter then
//! walks the layout and emits the draw calls. The split keeps every
//! coordinate explicit per form while letting tests assert on rendered
//! text without parsing PDF bytes.

pub mod dividends;
pub mod interest;
mod layout;
pub mod mortgage;
pub mod nec;
pub mod w2;

pub use layout::{FieldBox, FormLayout, Rect, Rule, TextRun, INCH, PAGE_HEIGHT, PAGE_WIDTH};

use std::fmt;

use oxidize_pdf::Page;

use crate::error::Result;
use crate::request::DocumentRequest;

/// The closed set of supported synthetic tax forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormType {
    W2,
    Nec1099,
    Int1099,
    Div1099,
    Mortgage1098,
}

impl FormType {
    /// Filename token (`w2-acme-2024.pdf` starts with `w2`).
    pub fn slug(&self) -> &'static str {
        match self {
            FormType::W2 => "w2",
            FormType::Nec1099 => "1099nec",
            FormType::Int1099 => "1099int",
            FormType::Div1099 => "1099div",
            FormType::Mortgage1098 => "1098",
        }
    }

    /// Short form name as reported in the manifest.
    pub fn label(&self) -> &'static str {
        match self {
            FormType::W2 => "W-2",
            FormType::Nec1099 => "1099-NEC",
            FormType::Int1099 => "1099-INT",
            FormType::Div1099 => "1099-DIV",
            FormType::Mortgage1098 => "1098",
        }
    }

    /// Official-sounding subtitle used in the page title line.
    pub fn subtitle(&self) -> &'static str {
        match self {
            FormType::W2 => "Wage and Tax Statement",
            FormType::Nec1099 => "Nonemployee Compensation",
            FormType::Int1099 => "Interest Income",
            FormType::Div1099 => "Dividends and Distributions",
            FormType::Mortgage1098 => "Mortgage Interest Statement",
        }
    }

    /// Full title line for a given tax year.
    pub fn title(&self, year: &str) -> String {
        format!("Form {} {} {}", self.label(), self.subtitle(), year)
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Builds the layout for a request, dispatching on its form type.
pub fn layout(request: &DocumentRequest) -> FormLayout {
    match request.form {
        FormType::W2 => w2::layout(request),
        FormType::Nec1099 => nec::layout(request),
        FormType::Int1099 => interest::layout(request),
        FormType::Div1099 => dividends::layout(request),
        FormType::Mortgage1098 => mortgage::layout(request),
    }
}

/// Renders a request onto a fresh page.
pub fn render(page: &mut Page, request: &DocumentRequest) -> Result<()> {
    layout(request).paint(page)
}
