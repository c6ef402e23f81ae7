/// Presentation writer for PPTX.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackURI, PackageWriter, Part};
use crate::ooxml::pptx::format::SlideLayout;
use crate::ooxml::pptx::hyperlinks::ClickAction;
use crate::ooxml::pptx::template;
use std::fmt::Write as FmtWrite;
use std::path::Path;

use super::relmap::RelationshipMapper;
use super::shape::MutableShape;
use super::slide::{MutableSlide, ShapeRef, SlideRef};

const PRESENTATION_URI: &str = "/ppt/presentation.xml";
const SLIDE_MASTER_URI: &str = "/ppt/slideMasters/slideMaster1.xml";
const THEME_URI: &str = "/ppt/theme/theme1.xml";

/// A mutable PowerPoint presentation for writing.
///
/// Slides are addressed by [`SlideRef`] and shapes by [`ShapeRef`]. Handles
/// can be stored and resolved later, which lets callers create every slide
/// first and wire click actions between them afterwards.
#[derive(Debug)]
pub struct MutablePresentation {
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    /// Document title for the core properties
    title: Option<String>,
    /// Application name for the core and extended properties
    application: String,
}

impl MutablePresentation {
    /// Create a new empty presentation.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: 9_144_000,
            slide_height: 6_858_000,
            title: None,
            application: env!("CARGO_PKG_NAME").to_string(),
        }
    }

    /// Append a slide using `layout` and return it.
    pub fn add_slide(&mut self, layout: SlideLayout) -> &mut MutableSlide {
        let index = self.slides.len();
        let slide_id = (index + 256) as u32;
        self.slides
            .push(MutableSlide::new(SlideRef::new(index), slide_id, layout));
        &mut self.slides[index]
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slide(&self, slide: SlideRef) -> Option<&MutableSlide> {
        self.slides.get(slide.index())
    }

    pub fn slide_mut(&mut self, slide: SlideRef) -> Option<&mut MutableSlide> {
        self.slides.get_mut(slide.index())
    }

    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    /// Resolve a shape handle.
    pub fn shape(&self, shape: ShapeRef) -> Result<&MutableShape> {
        self.slide(shape.slide)
            .ok_or(OoxmlError::SlideNotFound(shape.slide.index()))?
            .shape(shape.index)
            .ok_or(OoxmlError::ShapeNotFound {
                slide: shape.slide.index(),
                index: shape.index,
            })
    }

    /// Resolve a shape handle for modification.
    pub fn shape_mut(&mut self, shape: ShapeRef) -> Result<&mut MutableShape> {
        self.slides
            .get_mut(shape.slide.index())
            .ok_or(OoxmlError::SlideNotFound(shape.slide.index()))?
            .shape_mut(shape.index)
            .ok_or(OoxmlError::ShapeNotFound {
                slide: shape.slide.index(),
                index: shape.index,
            })
    }

    /// Attach a click action to a shape, replacing any previous one.
    ///
    /// Jump targets must be slides of this presentation.
    pub fn set_click_action(&mut self, shape: ShapeRef, action: ClickAction) -> Result<()> {
        if let Some(target) = action.target_slide()
            && target.index() >= self.slides.len()
        {
            return Err(OoxmlError::SlideNotFound(target.index()));
        }
        self.shape_mut(shape)?.set_click_action(action);
        Ok(())
    }

    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    pub fn set_slide_width(&mut self, width: i64) {
        self.slide_width = width;
    }

    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    pub fn set_slide_height(&mut self, height: i64) {
        self.slide_height = height;
    }

    /// Set the document title stored in the core properties.
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Save the presentation, overwriting `path` if it exists.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let package = self.to_package()?;
        PackageWriter::write(path, &package)?;
        Ok(())
    }

    /// Serialize the presentation to the bytes of a .pptx file.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(PackageWriter::to_bytes(&self.to_package()?)?)
    }

    fn slide_partname(slide: SlideRef) -> Result<PackURI> {
        Ok(PackURI::new(format!("/ppt/slides/slide{}.xml", slide.number()))?)
    }

    fn layout_partname(layout: SlideLayout) -> Result<PackURI> {
        Ok(PackURI::new(format!(
            "/ppt/slideLayouts/slideLayout{}.xml",
            layout.part_index()
        ))?)
    }

    /// Build the OPC package for this presentation.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let mut package = OpcPackage::new();

        let pres_uri = PackURI::new(PRESENTATION_URI)?;
        let master_uri = PackURI::new(SLIDE_MASTER_URI)?;
        let theme_uri = PackURI::new(THEME_URI)?;
        let core_uri = PackURI::new("/docProps/core.xml")?;
        let app_uri = PackURI::new("/docProps/app.xml")?;

        package.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
        package.relate_to(&core_uri, rt::CORE_PROPERTIES);
        package.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        // Presentation part: master first so it is rId1, then slides in order
        let mut pres_part = Part::new(pres_uri, ct::PML_PRESENTATION_MAIN, Vec::new());
        let master_rid = pres_part.relate_to(&master_uri, rt::SLIDE_MASTER);
        let mut slide_rel_ids = Vec::with_capacity(self.slides.len());
        for slide in &self.slides {
            let slide_uri = Self::slide_partname(slide.slide_ref())?;
            slide_rel_ids.push(pres_part.relate_to(&slide_uri, rt::SLIDE));
        }
        for (uri, reltype) in [
            ("/ppt/presProps.xml", rt::PRES_PROPS),
            ("/ppt/viewProps.xml", rt::VIEW_PROPS),
            (THEME_URI, rt::THEME),
            ("/ppt/tableStyles.xml", rt::TABLE_STYLES),
        ] {
            pres_part.relate_to(&PackURI::new(uri)?, reltype);
        }
        pres_part.set_xml(self.generate_presentation_xml(&master_rid, &slide_rel_ids)?);
        package.add_part(pres_part)?;

        // Slides
        let mut rel_mapper = RelationshipMapper::new();
        let mut slide_parts = Vec::with_capacity(self.slides.len());
        for slide in &self.slides {
            let slide_uri = Self::slide_partname(slide.slide_ref())?;
            let mut part = Part::new(slide_uri, ct::PML_SLIDE, Vec::new());
            part.relate_to(&Self::layout_partname(slide.layout())?, rt::SLIDE_LAYOUT);

            for (shape_index, shape) in slide.shapes().iter().enumerate() {
                let rid = match shape.click_action() {
                    Some(ClickAction::Slide(target)) => {
                        if target.index() >= self.slides.len() {
                            return Err(OoxmlError::SlideNotFound(target.index()));
                        }
                        part.relate_to(&Self::slide_partname(*target)?, rt::SLIDE)
                    },
                    Some(ClickAction::Hyperlink { url }) => {
                        part.rels_mut().get_or_add_ext_rel(rt::HYPERLINK, url)
                    },
                    None => continue,
                };
                rel_mapper.add_click(slide.slide_ref().index(), shape_index, rid);
            }
            slide_parts.push(part);
        }
        for (slide, mut part) in self.slides.iter().zip(slide_parts) {
            part.set_xml(slide.to_xml_with_rels(&rel_mapper)?);
            package.add_part(part)?;
        }

        // Master, layouts and theme
        let mut master = Part::from_xml(
            master_uri.clone(),
            ct::PML_SLIDE_MASTER,
            template::default_slide_master_xml(),
        );
        for (layout, xml) in [
            (SlideLayout::Title, template::title_slide_layout_xml()),
            (
                SlideLayout::TitleAndContent,
                template::title_and_content_layout_xml(),
            ),
        ] {
            let layout_uri = Self::layout_partname(layout)?;
            master.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
            let mut layout_part = Part::from_xml(layout_uri, ct::PML_SLIDE_LAYOUT, xml);
            layout_part.relate_to(&master_uri, rt::SLIDE_MASTER);
            package.add_part(layout_part)?;
        }
        master.relate_to(&theme_uri, rt::THEME);
        package.add_part(master)?;
        package.add_part(Part::from_xml(
            theme_uri,
            ct::OFC_THEME,
            template::default_theme_xml(),
        ))?;

        // Presentation-level property parts
        package.add_part(Part::from_xml(
            PackURI::new("/ppt/presProps.xml")?,
            ct::PML_PRES_PROPS,
            template::default_pres_props_xml(),
        ))?;
        package.add_part(Part::from_xml(
            PackURI::new("/ppt/viewProps.xml")?,
            ct::PML_VIEW_PROPS,
            template::default_view_props_xml(),
        ))?;
        package.add_part(Part::from_xml(
            PackURI::new("/ppt/tableStyles.xml")?,
            ct::PML_TABLE_STYLES,
            template::default_table_styles_xml(),
        ))?;

        // Document properties
        package.add_part(Part::from_xml(
            core_uri,
            ct::OPC_CORE_PROPERTIES,
            template::core_props_xml(self.title.as_deref().unwrap_or(""), &self.application),
        ))?;
        package.add_part(Part::from_xml(
            app_uri,
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_props_xml(&self.application, self.slides.len()),
        ))?;

        Ok(package)
    }

    /// Generate presentation.xml content.
    ///
    /// # Arguments
    /// * `master_rel_id` - Relationship ID of the slide master
    /// * `slide_rel_ids` - Relationship ID of each slide, in slide order
    pub(crate) fn generate_presentation_xml(
        &self,
        master_rel_id: &str,
        slide_rel_ids: &[String],
    ) -> Result<String> {
        if slide_rel_ids.len() != self.slides.len() {
            return Err(OoxmlError::Xml(format!(
                "expected {} slide relationship IDs, got {}",
                self.slides.len(),
                slide_rel_ids.len()
            )));
        }

        let mut xml = String::with_capacity(1024 + self.slides.len() * 48);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#);

        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="2147483648" r:id="{}"/>"#,
            master_rel_id
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}" type="screen4x3"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::ooxml::opc::constants::relationship_type;
    use crate::ooxml::pptx::format::Rect;

    fn button(pres: &mut MutablePresentation, slide: SlideRef) -> ShapeRef {
        pres.slide_mut(slide)
            .unwrap()
            .add_rectangle(Rect::new(0, 0, 100, 100), Some(RGBColor::new(0, 112, 192)), None)
            .unwrap()
    }

    #[test]
    fn test_create_presentation() {
        let pres = MutablePresentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width(), 9_144_000);
        assert_eq!(pres.slide_height(), 6_858_000);
    }

    #[test]
    fn test_add_slide_assigns_handles() {
        let mut pres = MutablePresentation::new();
        let first = pres.add_slide(SlideLayout::Title).slide_ref();
        let second = pres.add_slide(SlideLayout::TitleAndContent).slide_ref();
        assert_eq!(first, SlideRef::new(0));
        assert_eq!(second, SlideRef::new(1));
        assert_eq!(pres.slide(second).unwrap().slide_id(), 257);
    }

    #[test]
    fn test_forward_link_wired_after_creation() {
        let mut pres = MutablePresentation::new();
        let menu = pres.add_slide(SlideLayout::TitleAndContent).slide_ref();
        let menu_button = button(&mut pres, menu);

        // The target does not exist yet
        assert!(
            pres.set_click_action(menu_button, ClickAction::slide(SlideRef::new(1)))
                .is_err()
        );

        let target = pres.add_slide(SlideLayout::TitleAndContent).slide_ref();
        pres.set_click_action(menu_button, ClickAction::slide(target))
            .unwrap();
        assert_eq!(
            pres.shape(menu_button).unwrap().click_action(),
            Some(&ClickAction::Slide(target))
        );
    }

    #[test]
    fn test_dangling_shape_handle() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide(SlideLayout::Title).slide_ref();
        let err = pres
            .set_click_action(ShapeRef::new(slide, 5), ClickAction::url("https://x"))
            .unwrap_err();
        assert!(matches!(err, OoxmlError::ShapeNotFound { .. }));
        assert!(matches!(
            pres.shape(ShapeRef::new(SlideRef::new(9), 0)),
            Err(OoxmlError::SlideNotFound(9))
        ));
    }

    #[test]
    fn test_presentation_xml() {
        let mut pres = MutablePresentation::new();
        pres.add_slide(SlideLayout::Title).set_title("Test");

        let xml = pres
            .generate_presentation_xml("rId1", &["rId2".to_string()])
            .unwrap();
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000""#));
        assert!(pres.generate_presentation_xml("rId1", &[]).is_err());
    }

    #[test]
    fn test_package_relationships() {
        let mut pres = MutablePresentation::new();
        let home = pres.add_slide(SlideLayout::TitleAndContent).slide_ref();
        let content = pres.add_slide(SlideLayout::TitleAndContent).slide_ref();
        let back = button(&mut pres, content);
        let video = button(&mut pres, content);
        pres.set_click_action(back, ClickAction::slide(home)).unwrap();
        pres.set_click_action(video, ClickAction::url("https://example.com/v"))
            .unwrap();

        let package = pres.to_package().unwrap();
        let slide2 = package
            .part(&PackURI::new("/ppt/slides/slide2.xml").unwrap())
            .unwrap();
        let rels: Vec<_> = slide2.rels().iter().collect();
        assert_eq!(rels.len(), 3);
        assert_eq!(rels[0].reltype(), relationship_type::SLIDE_LAYOUT);
        assert_eq!(rels[1].reltype(), relationship_type::SLIDE);
        assert_eq!(rels[1].target_ref(), "slide1.xml");
        assert_eq!(rels[2].reltype(), relationship_type::HYPERLINK);
        assert!(rels[2].is_external());

        let xml = slide2.xml().unwrap();
        assert!(xml.contains(r#"<a:hlinkClick r:id="rId2" action="ppaction://hlinksldjump"/>"#));
        assert!(xml.contains(r#"<a:hlinkClick r:id="rId3"/>"#));
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");
        std::fs::write(&path, b"stale").unwrap();

        let mut pres = MutablePresentation::new();
        pres.add_slide(SlideLayout::Title).set_title("Hola");
        pres.save(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
        assert_eq!(bytes, pres.to_bytes().unwrap());
    }
}
