//! Format types for PPTX presentations.

use crate::common::RGBColor;

/// Run-level text formatting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Font family (`<a:latin typeface>`)
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Text color
    pub color: Option<RGBColor>,
}

impl TextFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn with_color(mut self, color: RGBColor) -> Self {
        self.color = Some(color);
        self
    }
}

/// Paragraph alignment (`algn` attribute of `<a:pPr>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
        }
    }
}

/// Position and size of a shape, in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Layouts available in the built-in slide master.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideLayout {
    /// Centered title and subtitle
    Title,
    /// Title with a content area
    TitleAndContent,
}

impl SlideLayout {
    /// 1-based index of the layout part (`slideLayoutN.xml`).
    pub fn part_index(&self) -> usize {
        match self {
            Self::Title => 1,
            Self::TitleAndContent => 2,
        }
    }

    /// Placeholder type used for the slide title.
    pub fn title_placeholder(&self) -> &'static str {
        match self {
            Self::Title => "ctrTitle",
            Self::TitleAndContent => "title",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_format_builder() {
        let format = TextFormat::new()
            .with_font("Calibri")
            .with_size(18.0)
            .with_bold(true)
            .with_color(RGBColor::WHITE);
        assert_eq!(format.font.as_deref(), Some("Calibri"));
        assert_eq!(format.size, Some(18.0));
        assert_eq!(format.bold, Some(true));
        assert_eq!(format.color, Some(RGBColor::WHITE));
    }

    #[test]
    fn test_align_attr() {
        assert_eq!(TextAlign::default().as_attr(), "l");
        assert_eq!(TextAlign::Center.as_attr(), "ctr");
    }

    #[test]
    fn test_layout_placeholders() {
        assert_eq!(SlideLayout::Title.title_placeholder(), "ctrTitle");
        assert_eq!(SlideLayout::TitleAndContent.part_index(), 2);
    }
}
