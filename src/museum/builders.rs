//! Shape helpers shared by every museum slide.

use crate::common::RGBColor;
use crate::ooxml::Result;
use crate::ooxml::pptx::{MutableSlide, Rect, ShapeRef, TextAlign, TextBody, TextFormat};

pub const TITLE_FONT_SIZE: f64 = 32.0;
pub const BODY_FONT_SIZE: f64 = 18.0;
pub const BODY_FONT: &str = "Calibri";

/// Fill and label size of a button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub font_size: f64,
    pub fill: RGBColor,
}

impl ButtonStyle {
    /// Menu buttons
    pub const DEFAULT: ButtonStyle = ButtonStyle::new(RGBColor::new(0, 112, 192));
    /// "Inicio" buttons
    pub const HOME: ButtonStyle = ButtonStyle::new(RGBColor::new(80, 80, 80));
    /// "Ver video" buttons
    pub const VIDEO: ButtonStyle = ButtonStyle::new(RGBColor::new(220, 20, 60));

    pub const fn new(fill: RGBColor) -> Self {
        Self {
            font_size: 14.0,
            fill,
        }
    }

    pub const fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Set the slide title in bold 32 pt.
pub fn add_title(slide: &mut MutableSlide, title: &str) {
    slide.set_title(title);
    slide.set_title_format(TextFormat::new().with_size(TITLE_FONT_SIZE).with_bold(true));
}

/// Add a word-wrapped, left-aligned Calibri text box.
///
/// `font_size` defaults to 18 pt. An empty `text` still produces the box.
pub fn add_text_box(
    slide: &mut MutableSlide,
    rect: Rect,
    text: &str,
    font_size: Option<f64>,
) -> Result<ShapeRef> {
    let format = TextFormat::new()
        .with_font(BODY_FONT)
        .with_size(font_size.unwrap_or(BODY_FONT_SIZE));
    let body = TextBody::new(text)
        .with_align(TextAlign::Left)
        .with_format(format);
    slide.add_text_box(rect, body)
}

/// Draw a solid rectangle with a centered, bold, white label.
pub fn make_button(
    slide: &mut MutableSlide,
    rect: Rect,
    label: &str,
    style: ButtonStyle,
) -> Result<ShapeRef> {
    let format = TextFormat::new()
        .with_size(style.font_size)
        .with_bold(true)
        .with_color(RGBColor::WHITE);
    let body = TextBody::new(label)
        .with_align(TextAlign::Center)
        .with_format(format);
    slide.add_rectangle(rect, Some(style.fill), Some(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::inches;
    use crate::ooxml::OoxmlError;
    use crate::ooxml::pptx::{MutablePresentation, SlideLayout};

    fn rect() -> Rect {
        Rect::new(inches(0.5), inches(1.9), inches(9.0), inches(3.0))
    }

    #[test]
    fn test_title_format() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide(SlideLayout::TitleAndContent);
        add_title(slide, "Huayno — Historia");
        assert_eq!(slide.title(), Some("Huayno — Historia"));
        assert_eq!(slide.title_format().size, Some(32.0));
        assert_eq!(slide.title_format().bold, Some(true));
    }

    #[test]
    fn test_text_box_defaults() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide(SlideLayout::TitleAndContent);
        let shape = add_text_box(slide, rect(), "uno\ndos", None).unwrap();

        let body = slide.shape(shape.index).and_then(|s| s.text_body()).unwrap();
        assert_eq!(body.text, "uno\ndos");
        assert_eq!(body.align, Some(TextAlign::Left));
        assert_eq!(body.format.size, Some(18.0));
        assert_eq!(body.format.font.as_deref(), Some("Calibri"));
        assert!(body.word_wrap);
    }

    #[test]
    fn test_empty_text_box() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide(SlideLayout::TitleAndContent);
        let shape = add_text_box(slide, rect(), "", Some(12.0)).unwrap();
        assert_eq!(slide.shape(shape.index).map(|s| s.text()), Some(""));
    }

    #[test]
    fn test_button_styles() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide(SlideLayout::TitleAndContent);
        let home = make_button(slide, rect(), "Inicio", ButtonStyle::HOME).unwrap();
        let menu = make_button(slide, rect(), "Saya", ButtonStyle::default()).unwrap();

        let home = slide.shape(home.index).unwrap();
        assert_eq!(home.fill(), Some(RGBColor::new(80, 80, 80)));
        let body = home.text_body().unwrap();
        assert_eq!(body.align, Some(TextAlign::Center));
        assert_eq!(body.format.bold, Some(true));
        assert_eq!(body.format.size, Some(14.0));
        assert_eq!(body.format.color, Some(RGBColor::WHITE));

        assert_eq!(
            slide.shape(menu.index).and_then(|s| s.fill()),
            Some(RGBColor::new(0, 112, 192))
        );
        assert_eq!(ButtonStyle::VIDEO.with_font_size(20.0).font_size, 20.0);
    }

    #[test]
    fn test_button_rejects_zero_size() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide(SlideLayout::TitleAndContent);
        let err = make_button(slide, Rect::new(0, 0, 0, 10), "x", ButtonStyle::DEFAULT).unwrap_err();
        assert!(matches!(err, OoxmlError::InvalidGeometry { .. }));
        assert_eq!(slide.shape_count(), 0);
    }
}
