//! The layout plan a form routine produces and the painter that draws it.

use oxidize_pdf::{Color, Font, Page};

use crate::error::Result;

/// Points per inch; all form coordinates are written in inches.
pub const INCH: f64 = 72.0;

/// US Letter page width in points.
pub const PAGE_WIDTH: f64 = 612.0;

/// US Letter page height in points.
pub const PAGE_HEIGHT: f64 = 792.0;

pub(crate) const TITLE_SIZE: f64 = 16.0;
pub(crate) const CAPTION_SIZE: f64 = 8.0;
pub(crate) const ADDRESS_SIZE: f64 = 10.0;

const BORDER_WIDTH: f64 = 2.0;
const RULE_WIDTH: f64 = 0.5;
const FRAME_WIDTH: f64 = 1.0;

/// Fill used for heavily washed-out value text on low-quality fixtures.
pub(crate) fn light_gray() -> Color {
    Color::gray(0.83)
}

/// Fill used for moderately faded value text on low-quality fixtures.
pub(crate) fn mid_gray() -> Color {
    Color::gray(0.5)
}

/// One positioned piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font: Font,
    pub size: f64,
    pub color: Color,
}

impl TextRun {
    pub(crate) fn new(text: impl Into<String>, x: f64, y: f64, font: Font, size: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font,
            size,
            color: Color::black(),
        }
    }

    /// Small field caption, always black.
    pub(crate) fn caption(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self::new(text, x, y, Font::Helvetica, CAPTION_SIZE)
    }

    /// Bold value text at the given size.
    pub(crate) fn value(text: impl Into<String>, x: f64, y: f64, size: f64) -> Self {
        Self::new(text, x, y, Font::HelveticaBold, size)
    }

    /// Regular-weight address line.
    pub(crate) fn address(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self::new(text, x, y, Font::Helvetica, ADDRESS_SIZE)
    }

    pub(crate) fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Axis-aligned rectangle (stroked, never filled).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub(crate) fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// A thin grid or divider line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rule {
    pub(crate) fn horizontal(x1: f64, x2: f64, y: f64) -> Self {
        Self { x1, y1: y, x2, y2: y }
    }

    pub(crate) fn vertical(x: f64, y1: f64, y2: f64) -> Self {
        Self { x1: x, y1, x2: x, y2 }
    }
}

/// A caption plus the value runs below it.
///
/// Blank fixtures keep the caption and drop every value run, so an
/// empty `values` list is the normal state for a template.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBox {
    pub caption: TextRun,
    pub values: Vec<TextRun>,
}

impl FieldBox {
    /// Caption-only box (continuation caption lines use this too).
    pub(crate) fn note(caption: TextRun) -> Self {
        Self {
            caption,
            values: Vec::new(),
        }
    }

    /// First value run's text, if any.
    pub fn value_text(&self) -> Option<&str> {
        self.values.first().map(|run| run.text.as_str())
    }
}

/// Builds a field box, dropping the values when the form is blank.
pub(crate) fn field(caption: TextRun, values: Vec<TextRun>, blank: bool) -> FieldBox {
    FieldBox {
        caption,
        values: if blank { Vec::new() } else { values },
    }
}

/// Complete plan for one rendered form page.
#[derive(Debug, Clone, PartialEq)]
pub struct FormLayout {
    pub title: TextRun,
    pub border: Rect,
    pub rules: Vec<Rule>,
    pub frames: Vec<Rect>,
    pub fields: Vec<FieldBox>,
    pub footer: Vec<TextRun>,
}

impl FormLayout {
    /// Looks up a field box by caption prefix (`"1 "`, `"PAYER'S TIN"`).
    pub fn field(&self, caption_prefix: &str) -> Option<&FieldBox> {
        self.fields
            .iter()
            .find(|f| f.caption.text.starts_with(caption_prefix))
    }

    /// All value runs across every field box.
    pub fn value_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.fields.iter().flat_map(|f| f.values.iter())
    }

    fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        std::iter::once(&self.title)
            .chain(
                self.fields
                    .iter()
                    .flat_map(|f| std::iter::once(&f.caption).chain(f.values.iter())),
            )
            .chain(self.footer.iter())
    }

    /// Emits the draw calls for this layout onto a page.
    ///
    /// Black text goes through the page text context; faded text is
    /// drawn through the graphics context, which carries a fill color,
    /// inside a saved graphics state so the page ends on black.
    pub fn paint(&self, page: &mut Page) -> Result<()> {
        let graphics = page.graphics();

        graphics
            .set_stroke_color(Color::black())
            .set_line_width(BORDER_WIDTH)
            .rect(
                self.border.x,
                self.border.y,
                self.border.width,
                self.border.height,
            )
            .stroke();

        graphics.set_line_width(RULE_WIDTH);
        for rule in &self.rules {
            graphics
                .move_to(rule.x1, rule.y1)
                .line_to(rule.x2, rule.y2)
                .stroke();
        }

        graphics.set_line_width(FRAME_WIDTH);
        for frame in &self.frames {
            graphics
                .rect(frame.x, frame.y, frame.width, frame.height)
                .stroke();
        }

        for run in self.text_runs() {
            if run.color == Color::black() {
                page.text()
                    .set_font(run.font.clone(), run.size)
                    .at(run.x, run.y)
                    .write(&run.text)?;
            } else {
                let graphics = page.graphics();
                graphics.save_state();
                graphics.set_fill_color(run.color);
                graphics.set_font(run.font.clone(), run.size);
                graphics.begin_text();
                graphics.set_text_position(run.x, run.y);
                graphics.show_text(&run.text)?;
                graphics.end_text();
                graphics.restore_state();
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_drops_values_when_blank() {
        let caption = TextRun::caption("1 Wages", 10.0, 20.0);
        let value = TextRun::value("$1.00", 10.0, 10.0, 12.0);
        let kept = field(caption.clone(), vec![value.clone()], false);
        let dropped = field(caption, vec![value], true);
        assert_eq!(kept.value_text(), Some("$1.00"));
        assert_eq!(dropped.value_text(), None);
    }

    #[test]
    fn test_runs_default_to_black() {
        let run = TextRun::value("$1.00", 0.0, 0.0, 12.0);
        assert_eq!(run.color, Color::black());
        let faded = run.with_color(light_gray());
        assert_ne!(faded.color, Color::black());
    }

    #[test]
    fn test_rule_constructors() {
        let h = Rule::horizontal(1.0, 5.0, 3.0);
        assert_eq!((h.y1, h.y2), (3.0, 3.0));
        let v = Rule::vertical(2.0, 1.0, 4.0);
        assert_eq!((v.x1, v.x2), (2.0, 2.0));
    }
}
