/// Shapes written onto PPTX slides.
use crate::common::RGBColor;
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::pptx::format::{Rect, TextAlign, TextFormat};
use crate::ooxml::pptx::hyperlinks::ClickAction;
use std::fmt::Write as FmtWrite;

/// Largest absolute value of `ST_Coordinate`.
const MAX_COORDINATE: u64 = 27_273_042_316_900;

/// Text content of a shape: one paragraph with a single formatting.
///
/// Line feeds in `text` become `<a:br/>` line breaks inside the paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBody {
    pub text: String,
    /// Paragraph alignment; inherited from the layout when unset
    pub align: Option<TextAlign>,
    pub format: TextFormat,
    pub word_wrap: bool,
}

impl TextBody {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            align: None,
            format: TextFormat::default(),
            word_wrap: true,
        }
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    pub fn with_format(mut self, format: TextFormat) -> Self {
        self.format = format;
        self
    }

    /// Write `<a:p>` for this body.
    pub(crate) fn write_paragraph(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");
        if let Some(align) = self.align {
            write!(xml, r#"<a:pPr algn="{}"/>"#, align.as_attr())?;
        }

        if !self.text.is_empty() {
            for (i, line) in self.text.split('\n').enumerate() {
                if i > 0 {
                    xml.push_str("<a:br>");
                    self.write_run_properties(xml, "a:rPr")?;
                    xml.push_str("</a:br>");
                }
                if line.is_empty() {
                    continue;
                }
                xml.push_str("<a:r>");
                self.write_run_properties(xml, "a:rPr")?;
                write!(xml, "<a:t>{}</a:t>", escape_xml(line))?;
                xml.push_str("</a:r>");
            }
        }

        self.write_run_properties(xml, "a:endParaRPr")?;
        xml.push_str("</a:p>");
        Ok(())
    }

    fn write_run_properties(&self, xml: &mut String, tag: &str) -> Result<()> {
        let format = &self.format;
        write!(xml, r#"<{} lang="es-PE" dirty="0""#, tag)?;

        if let Some(size) = format.size {
            write!(xml, r#" sz="{}""#, pt_to_centipoints(size))?;
        }
        if let Some(bold) = format.bold {
            xml.push_str(if bold { r#" b="1""# } else { r#" b="0""# });
        }

        if format.color.is_none() && format.font.is_none() {
            xml.push_str("/>");
            return Ok(());
        }
        xml.push('>');

        // CT_TextCharacterProperties: fill comes before the font elements
        if let Some(color) = format.color {
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.to_hex()
            )?;
        }
        if let Some(ref font) = format.font {
            write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(font))?;
        }

        write!(xml, "</{}>", tag)?;
        Ok(())
    }
}

/// A shape on a slide.
#[derive(Debug, Clone, PartialEq)]
pub struct MutableShape {
    /// Shape ID, unique within the slide
    pub(crate) shape_id: u32,
    pub(crate) shape_type: ShapeType,
    /// Click action attached to the shape
    pub(crate) click: Option<ClickAction>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ShapeType {
    TextBox {
        rect: Rect,
        body: TextBody,
    },
    Rectangle {
        rect: Rect,
        fill: Option<RGBColor>,
        body: Option<TextBody>,
    },
}

impl MutableShape {
    pub(crate) fn new_text_box(shape_id: u32, rect: Rect, body: TextBody) -> Result<Self> {
        validate_rect("text box", &rect)?;
        Ok(Self {
            shape_id,
            shape_type: ShapeType::TextBox { rect, body },
            click: None,
        })
    }

    pub(crate) fn new_rectangle(
        shape_id: u32,
        rect: Rect,
        fill: Option<RGBColor>,
        body: Option<TextBody>,
    ) -> Result<Self> {
        validate_rect("rectangle", &rect)?;
        Ok(Self {
            shape_id,
            shape_type: ShapeType::Rectangle { rect, fill, body },
            click: None,
        })
    }

    #[inline]
    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    pub fn rect(&self) -> Rect {
        match &self.shape_type {
            ShapeType::TextBox { rect, .. } | ShapeType::Rectangle { rect, .. } => *rect,
        }
    }

    /// Text of the shape, empty when it has none.
    pub fn text(&self) -> &str {
        match &self.shape_type {
            ShapeType::TextBox { body, .. }
            | ShapeType::Rectangle {
                body: Some(body), ..
            } => &body.text,
            ShapeType::Rectangle { body: None, .. } => "",
        }
    }

    pub fn text_body(&self) -> Option<&TextBody> {
        match &self.shape_type {
            ShapeType::TextBox { body, .. } => Some(body),
            ShapeType::Rectangle { body, .. } => body.as_ref(),
        }
    }

    pub fn fill(&self) -> Option<RGBColor> {
        match &self.shape_type {
            ShapeType::Rectangle { fill, .. } => *fill,
            ShapeType::TextBox { .. } => None,
        }
    }

    pub fn is_text_box(&self) -> bool {
        matches!(self.shape_type, ShapeType::TextBox { .. })
    }

    /// Set the click action, replacing any previous one.
    pub fn set_click_action(&mut self, action: ClickAction) -> &mut Self {
        self.click = Some(action);
        self
    }

    pub fn clear_click_action(&mut self) -> &mut Self {
        self.click = None;
        self
    }

    pub fn click_action(&self) -> Option<&ClickAction> {
        self.click.as_ref()
    }

    /// Generate `<p:sp>` XML for this shape.
    ///
    /// `click_rel_id` is the slide relationship backing the click action; it
    /// is required whenever the shape has one.
    pub(crate) fn to_xml(&self, xml: &mut String, click_rel_id: Option<&str>) -> Result<()> {
        let (kind, rect) = match &self.shape_type {
            ShapeType::TextBox { rect, .. } => ("TextBox", rect),
            ShapeType::Rectangle { rect, .. } => ("Rectangle", rect),
        };

        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{} {}""#,
            self.shape_id,
            kind,
            self.shape_id.saturating_sub(1)
        )?;
        match (&self.click, click_rel_id) {
            (Some(action), Some(rid)) => {
                write!(xml, r#"><a:hlinkClick r:id="{}""#, rid)?;
                if let Some(ppaction) = action.ppaction() {
                    write!(xml, r#" action="{}""#, ppaction)?;
                }
                xml.push_str("/></p:cNvPr>");
            },
            (Some(_), None) => {
                return Err(OoxmlError::Xml(format!(
                    "shape {} has a click action but no relationship",
                    self.shape_id
                )));
            },
            (None, _) => xml.push_str("/>"),
        }
        if self.is_text_box() {
            xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
        } else {
            xml.push_str("<p:cNvSpPr/>");
        }
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr>");
        xml.push_str("<a:xfrm>");
        write!(xml, r#"<a:off x="{}" y="{}"/>"#, rect.x, rect.y)?;
        write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, rect.width, rect.height)?;
        xml.push_str("</a:xfrm>");
        xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
        if let Some(color) = self.fill() {
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.to_hex()
            )?;
        }
        xml.push_str("</p:spPr>");

        match &self.shape_type {
            ShapeType::TextBox { body, .. } => {
                xml.push_str("<p:txBody>");
                let wrap = if body.word_wrap { "square" } else { "none" };
                write!(xml, r#"<a:bodyPr wrap="{}" rtlCol="0"><a:noAutofit/></a:bodyPr>"#, wrap)?;
                xml.push_str("<a:lstStyle/>");
                body.write_paragraph(xml)?;
                xml.push_str("</p:txBody>");
            },
            ShapeType::Rectangle {
                body: Some(body), ..
            } => {
                xml.push_str("<p:txBody>");
                xml.push_str(r#"<a:bodyPr rtlCol="0" anchor="ctr"/>"#);
                xml.push_str("<a:lstStyle/>");
                body.write_paragraph(xml)?;
                xml.push_str("</p:txBody>");
            },
            ShapeType::Rectangle { body: None, .. } => {},
        }

        xml.push_str("</p:sp>");
        Ok(())
    }
}

fn validate_rect(shape: &str, rect: &Rect) -> Result<()> {
    let reason = if rect.width <= 0 || rect.height <= 0 {
        Some(format!(
            "size must be positive, got {}x{}",
            rect.width, rect.height
        ))
    } else if rect.x.unsigned_abs() > MAX_COORDINATE || rect.y.unsigned_abs() > MAX_COORDINATE {
        Some(format!("offset ({}, {}) is out of range", rect.x, rect.y))
    } else {
        None
    };

    match reason {
        Some(reason) => Err(OoxmlError::InvalidGeometry {
            shape: shape.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
