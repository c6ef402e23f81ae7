/// Slides of a PPTX presentation.
use crate::common::RGBColor;
use crate::ooxml::error::Result;
use crate::ooxml::pptx::format::{Rect, SlideLayout, TextFormat};
use std::fmt::Write as FmtWrite;

use super::relmap::RelationshipMapper;
use super::shape::{MutableShape, TextBody};

/// Handle to a slide: its 0-based position in the presentation.
///
/// Slides are never removed, so a handle stays valid for the lifetime of the
/// presentation that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideRef(usize);

impl SlideRef {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// 1-based slide number, as shown in the slide show.
    #[inline]
    pub const fn number(&self) -> usize {
        self.0 + 1
    }
}

/// Handle to a shape: the slide it lives on and its index among the slide's
/// shapes (the title placeholder is not counted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeRef {
    pub slide: SlideRef,
    pub index: usize,
}

impl ShapeRef {
    pub const fn new(slide: SlideRef, index: usize) -> Self {
        Self { slide, index }
    }
}

/// A mutable slide in a presentation.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    slide_ref: SlideRef,
    /// Slide ID written to `<p:sldId id>` (256 and up)
    pub(crate) slide_id: u32,
    pub(crate) layout: SlideLayout,
    /// Slide title (stored in the title placeholder)
    pub(crate) title: Option<String>,
    pub(crate) title_format: TextFormat,
    pub(crate) shapes: Vec<MutableShape>,
}

impl MutableSlide {
    pub(crate) fn new(slide_ref: SlideRef, slide_id: u32, layout: SlideLayout) -> Self {
        Self {
            slide_ref,
            slide_id,
            layout,
            title: None,
            title_format: TextFormat::default(),
            shapes: Vec::new(),
        }
    }

    #[inline]
    pub fn slide_ref(&self) -> SlideRef {
        self.slide_ref
    }

    #[inline]
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    #[inline]
    pub fn layout(&self) -> SlideLayout {
        self.layout
    }

    /// Set the text of the title placeholder.
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the run formatting of the title.
    pub fn set_title_format(&mut self, format: TextFormat) {
        self.title_format = format;
    }

    pub fn title_format(&self) -> &TextFormat {
        &self.title_format
    }

    // IDs: 1=group, 2=title, 3+=shapes
    fn next_shape_id(&self) -> u32 {
        (self.shapes.len() + 3) as u32
    }

    fn push(&mut self, shape: MutableShape) -> ShapeRef {
        self.shapes.push(shape);
        ShapeRef::new(self.slide_ref, self.shapes.len() - 1)
    }

    /// Add a text box.
    pub fn add_text_box(&mut self, rect: Rect, body: TextBody) -> Result<ShapeRef> {
        let shape = MutableShape::new_text_box(self.next_shape_id(), rect, body)?;
        Ok(self.push(shape))
    }

    /// Add a rectangle with an optional solid fill and label.
    pub fn add_rectangle(
        &mut self,
        rect: Rect,
        fill: Option<RGBColor>,
        body: Option<TextBody>,
    ) -> Result<ShapeRef> {
        let shape = MutableShape::new_rectangle(self.next_shape_id(), rect, fill, body)?;
        Ok(self.push(shape))
    }

    pub fn shape(&self, index: usize) -> Option<&MutableShape> {
        self.shapes.get(index)
    }

    pub fn shape_mut(&mut self, index: usize) -> Option<&mut MutableShape> {
        self.shapes.get_mut(index)
    }

    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Generate slide XML, looking up click-action relationships in `rel_mapper`.
    pub(crate) fn to_xml_with_rels(&self, rel_mapper: &RelationshipMapper) -> Result<String> {
        let mut xml = String::with_capacity(2048 + self.shapes.len() * 1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
        );
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
        );
        xml.push_str(r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#);

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        // Group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        if let Some(ref title) = self.title {
            self.write_title_shape(&mut xml, title)?;
        }

        let slide_index = self.slide_ref.index();
        for (shape_index, shape) in self.shapes.iter().enumerate() {
            let rid = rel_mapper.get_click_id(slide_index, shape_index);
            shape.to_xml(&mut xml, rid)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }

    /// Write the title placeholder shape.
    fn write_title_shape(&self, xml: &mut String, title: &str) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        // Group shape uses id=1, so the title uses id=2
        xml.push_str(r#"<p:cNvPr id="2" name="Title 1"/>"#);
        xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
        write!(
            xml,
            r#"<p:nvPr><p:ph type="{}"/></p:nvPr>"#,
            self.layout.title_placeholder()
        )?;
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr/>");

        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr/>");
        xml.push_str("<a:lstStyle/>");
        let body = TextBody::new(single_line(title)).with_format(self.title_format.clone());
        body.write_paragraph(xml)?;
        xml.push_str("</p:txBody>");

        xml.push_str("</p:sp>");

        Ok(())
    }
}

/// Title text as written into the title placeholder.
///
/// Titles are single-line; line feeds become spaces.
pub fn single_line(title: &str) -> String {
    title.replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::hyperlinks::ClickAction;

    fn slide() -> MutableSlide {
        MutableSlide::new(SlideRef::new(2), 258, SlideLayout::TitleAndContent)
    }

    #[test]
    fn test_shape_refs_are_sequential() {
        let mut slide = slide();
        let a = slide
            .add_text_box(Rect::new(0, 0, 10, 10), TextBody::new("a"))
            .unwrap();
        let b = slide
            .add_rectangle(Rect::new(0, 0, 10, 10), None, None)
            .unwrap();
        assert_eq!(a, ShapeRef::new(SlideRef::new(2), 0));
        assert_eq!(b, ShapeRef::new(SlideRef::new(2), 1));
        assert_eq!(slide.shape(0).unwrap().shape_id(), 3);
        assert_eq!(slide.shape(1).unwrap().shape_id(), 4);
    }

    #[test]
    fn test_failed_add_leaves_slide_unchanged() {
        let mut slide = slide();
        assert!(slide.add_rectangle(Rect::new(0, 0, 0, 0), None, None).is_err());
        assert_eq!(slide.shape_count(), 0);
    }

    #[test]
    fn test_title_xml() {
        let mut slide = slide();
        slide.set_title("Huayno — Historia");
        slide.set_title_format(TextFormat::new().with_size(32.0).with_bold(true));

        let xml = slide.to_xml_with_rels(&RelationshipMapper::new()).unwrap();
        assert!(xml.contains(r#"<p:ph type="title"/>"#));
        assert!(xml.contains("<a:t>Huayno — Historia</a:t>"));
        assert!(xml.contains(r#"sz="3200" b="1""#));
    }

    #[test]
    fn test_click_relationship_lookup() {
        let mut slide = slide();
        let button = slide
            .add_rectangle(Rect::new(0, 0, 10, 10), None, None)
            .unwrap();
        slide
            .shape_mut(button.index)
            .unwrap()
            .set_click_action(ClickAction::slide(SlideRef::new(1)));

        let mut mapper = RelationshipMapper::new();
        mapper.add_click(2, 0, "rId2".to_string());
        let xml = slide.to_xml_with_rels(&mapper).unwrap();
        assert!(xml.contains(r#"r:id="rId2""#));

        // Without a mapped relationship the action cannot be written
        assert!(slide.to_xml_with_rels(&RelationshipMapper::new()).is_err());
    }

    #[test]
    fn test_slide_ref_number() {
        assert_eq!(SlideRef::new(0).number(), 1);
        assert_eq!(SlideRef::new(22).index(), 22);
    }
}
