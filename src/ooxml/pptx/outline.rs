//! Logical outline of a written presentation.
//!
//! Reads a .pptx back and recovers, for every slide in presentation order,
//! the title, the text-box bodies and the buttons with their click actions.
//! Paragraphs and `<a:br/>` breaks both come back as `'\n'`.

use crate::common::RGBColor;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::opc::{OpcPackage, PackURI, Part};
use quick_xml::Reader;
use quick_xml::escape::{EscapeError, resolve_predefined_entity};
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;
use std::path::Path;

/// Where a button leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutline {
    /// Zero-based index of the target slide
    Slide(usize),
    /// External address
    External(String),
}

/// A non-placeholder shape that is not a text box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonOutline {
    pub label: String,
    pub fill: Option<RGBColor>,
    pub click: Option<LinkOutline>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideOutline {
    pub title: Option<String>,
    pub text_boxes: Vec<String>,
    pub buttons: Vec<ButtonOutline>,
}

impl SlideOutline {
    /// Buttons whose label equals `label`.
    pub fn buttons_labelled<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a ButtonOutline> {
        self.buttons.iter().filter(move |b| b.label == label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresentationOutline {
    pub slides: Vec<SlideOutline>,
}

impl PresentationOutline {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let package = OpcPackage::from_bytes(data)?;
        Self::from_package(&package)
    }

    pub fn from_package(package: &OpcPackage) -> Result<Self> {
        let pres = package.main_part(rt::OFFICE_DOCUMENT)?;
        let slide_uris = slide_partnames(pres)?;

        let index_of: HashMap<&str, usize> = slide_uris
            .iter()
            .enumerate()
            .map(|(i, uri)| (uri.as_str(), i))
            .collect();

        let mut slides = Vec::with_capacity(slide_uris.len());
        for uri in &slide_uris {
            let part = package.part(uri)?;
            slides.push(read_slide(part, &index_of)?);
        }

        Ok(Self { slides })
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Index of the first slide titled `title`.
    pub fn find_slide(&self, title: &str) -> Option<usize> {
        self.slides
            .iter()
            .position(|s| s.title.as_deref() == Some(title))
    }
}

fn attr_value(e: &BytesStart, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Slide partnames in `<p:sldIdLst>` order.
fn slide_partnames(pres: &Part) -> Result<Vec<PackURI>> {
    let mut reader = Reader::from_str(pres.xml()?);
    let mut uris = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"sldId" => {
                let r_id = attr_value(&e, b"r:id")?
                    .ok_or_else(|| OoxmlError::InvalidFormat("sldId without r:id".to_string()))?;
                let rel = pres
                    .rels()
                    .get(&r_id)
                    .ok_or_else(|| OoxmlError::PartNotFound(r_id.clone()))?;
                uris.push(rel.target_partname(pres.partname().base_uri())?);
            },
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(uris)
}

#[derive(Default)]
struct ShapeState {
    is_title: bool,
    is_text_box: bool,
    fill: Option<RGBColor>,
    click_rid: Option<String>,
    text: String,
    paragraphs: usize,
}

fn read_slide(part: &Part, index_of: &HashMap<&str, usize>) -> Result<SlideOutline> {
    let mut reader = Reader::from_str(part.xml()?);
    let mut outline = SlideOutline::default();
    let mut shape: Option<ShapeState> = None;
    let mut in_sp_pr = false;
    let mut in_text = false;

    loop {
        let event = reader.read_event()?;
        let Some(state) = shape.as_mut() else {
            match event {
                Event::Start(e) if e.local_name().as_ref() == b"sp" => {
                    shape = Some(ShapeState::default());
                },
                Event::Eof => break,
                _ => {},
            }
            continue;
        };

        match event {
            // `<p:spPr/>` has no children, so only a start tag opens it
            Event::Start(e) if e.local_name().as_ref() == b"spPr" => in_sp_pr = true,
            Event::Start(e) | Event::Empty(e) => match e.local_name().as_ref() {
                b"ph" => {
                    let ph_type = attr_value(&e, b"type")?;
                    state.is_title = matches!(ph_type.as_deref(), Some("title" | "ctrTitle"));
                },
                b"cNvSpPr" => {
                    state.is_text_box = attr_value(&e, b"txBox")?.as_deref() == Some("1");
                },
                b"hlinkClick" => state.click_rid = attr_value(&e, b"r:id")?,
                b"srgbClr" if in_sp_pr && state.fill.is_none() => {
                    state.fill = attr_value(&e, b"val")?.and_then(|v| RGBColor::from_hex(&v));
                },
                b"p" => {
                    if state.paragraphs > 0 {
                        state.text.push('\n');
                    }
                    state.paragraphs += 1;
                },
                b"br" => state.text.push('\n'),
                b"t" => in_text = true,
                _ => {},
            },
            Event::Text(e) if in_text => {
                state.text.push_str(std::str::from_utf8(&e)?);
            },
            Event::GeneralRef(e) if in_text => match e.resolve_char_ref()? {
                Some(ch) => state.text.push(ch),
                None => {
                    let name = std::str::from_utf8(&e)?;
                    let text = resolve_predefined_entity(name).ok_or_else(|| {
                        EscapeError::UnrecognizedEntity(0..name.len(), name.to_string())
                    })?;
                    state.text.push_str(text);
                },
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"spPr" => in_sp_pr = false,
                b"sp" => {
                    if let Some(done) = shape.take() {
                        finish_shape(part, index_of, done, &mut outline)?;
                    }
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(outline)
}

fn finish_shape(
    part: &Part,
    index_of: &HashMap<&str, usize>,
    state: ShapeState,
    outline: &mut SlideOutline,
) -> Result<()> {
    if state.is_title {
        outline.title = Some(state.text);
    } else if state.is_text_box {
        outline.text_boxes.push(state.text);
    } else {
        let click = match state.click_rid {
            Some(r_id) => Some(resolve_click(part, index_of, &r_id)?),
            None => None,
        };
        outline.buttons.push(ButtonOutline {
            label: state.text,
            fill: state.fill,
            click,
        });
    }
    Ok(())
}

fn resolve_click(part: &Part, index_of: &HashMap<&str, usize>, r_id: &str) -> Result<LinkOutline> {
    let rel = part
        .rels()
        .get(r_id)
        .ok_or_else(|| OoxmlError::PartNotFound(format!("{} in {}", r_id, part.partname())))?;

    if rel.is_external() {
        return Ok(LinkOutline::External(rel.target_ref().to_string()));
    }

    let target = rel.target_partname(part.partname().base_uri())?;
    index_of
        .get(target.as_str())
        .map(|&i| LinkOutline::Slide(i))
        .ok_or_else(|| OoxmlError::PartNotFound(target.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::inches;
    use crate::ooxml::pptx::format::{Rect, SlideLayout, TextFormat};
    use crate::ooxml::pptx::hyperlinks::ClickAction;
    use crate::ooxml::pptx::writer::{MutablePresentation, TextBody};

    fn rect() -> Rect {
        Rect::new(inches(1.0), inches(1.0), inches(2.0), inches(0.5))
    }

    fn sample() -> MutablePresentation {
        let mut pres = MutablePresentation::new();
        let first = pres.add_slide(SlideLayout::Title);
        first.set_title("Ñandú & <Co>");
        first
            .add_text_box(rect(), TextBody::new("línea uno\nlínea dos"))
            .unwrap();
        let home = first.slide_ref();

        let second = pres.add_slide(SlideLayout::TitleAndContent);
        second.set_title("Second");
        let back = second
            .add_rectangle(
                rect(),
                Some(RGBColor::new(80, 80, 80)),
                Some(TextBody::new("Inicio").with_format(TextFormat::new().with_color(RGBColor::WHITE))),
            )
            .unwrap();
        let link = second
            .add_rectangle(rect(), Some(RGBColor::new(220, 20, 60)), Some(TextBody::new("Ver")))
            .unwrap();
        second
            .add_rectangle(rect(), None, Some(TextBody::new("Plain")))
            .unwrap();

        pres.set_click_action(back, ClickAction::slide(home)).unwrap();
        pres.set_click_action(link, ClickAction::url("https://example.com/?a=1&b=2"))
            .unwrap();
        pres
    }

    #[test]
    fn test_titles_and_text_boxes() {
        let outline = PresentationOutline::from_bytes(&sample().to_bytes().unwrap()).unwrap();
        assert_eq!(outline.slide_count(), 2);
        assert_eq!(outline.slides[0].title.as_deref(), Some("Ñandú & <Co>"));
        assert_eq!(outline.slides[0].text_boxes, vec!["línea uno\nlínea dos"]);
        assert!(outline.slides[0].buttons.is_empty());
        assert_eq!(outline.find_slide("Second"), Some(1));
    }

    #[test]
    fn test_buttons_and_links() {
        let outline = PresentationOutline::from_bytes(&sample().to_bytes().unwrap()).unwrap();
        let buttons = &outline.slides[1].buttons;
        assert_eq!(buttons.len(), 3);

        assert_eq!(buttons[0].label, "Inicio");
        assert_eq!(buttons[0].fill, Some(RGBColor::new(80, 80, 80)));
        assert_eq!(buttons[0].click, Some(LinkOutline::Slide(0)));

        assert_eq!(buttons[1].fill, Some(RGBColor::new(220, 20, 60)));
        assert_eq!(
            buttons[1].click,
            Some(LinkOutline::External("https://example.com/?a=1&b=2".to_string()))
        );

        assert_eq!(buttons[2].fill, None);
        assert_eq!(buttons[2].click, None);
        assert_eq!(outline.slides[1].buttons_labelled("Inicio").count(), 1);
    }

    #[test]
    fn test_open_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.pptx");
        sample().save(&path).unwrap();

        let outline = PresentationOutline::open(&path).unwrap();
        assert_eq!(outline.slide_count(), 2);
    }

    fn slide_part(text: &str) -> Part {
        let xml = format!(
            concat!(
                r#"<p:sld xmlns:a="a" xmlns:p="p"><p:cSld><p:spTree><p:sp>"#,
                r#"<p:nvSpPr><p:cNvPr id="2" name="T"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>"#,
                "<p:txBody><a:p><a:r><a:t>{}</a:t></a:r></a:p></p:txBody>",
                "</p:sp></p:spTree></p:cSld></p:sld>"
            ),
            text
        );
        Part::from_xml(
            PackURI::new("/ppt/slides/slide1.xml").unwrap(),
            crate::ooxml::opc::constants::content_type::PML_SLIDE,
            xml,
        )
    }

    #[test]
    fn test_entity_references_in_text() {
        let part = slide_part("&#x41;&#66; &amp; &lt;C&gt; &apos;&quot;");
        let outline = read_slide(&part, &HashMap::new()).unwrap();
        assert_eq!(outline.text_boxes, vec![r#"AB & <C> '""#]);
    }

    #[test]
    fn test_unknown_entity_in_text_rejected() {
        let part = slide_part("a&bogus;b");
        assert!(matches!(
            read_slide(&part, &HashMap::new()),
            Err(OoxmlError::Escape(EscapeError::UnrecognizedEntity(_, ref name))) if name == "bogus"
        ));
    }

    #[test]
    fn test_unknown_entity_in_attribute_rejected() {
        let part = slide_part("");
        let xml = part.xml().unwrap().replace(r#"name="T""#, r#"name="T&bogus;""#);
        let mut reader = Reader::from_str(&xml);
        loop {
            match reader.read_event().unwrap() {
                Event::Empty(e) if e.local_name().as_ref() == b"cNvPr" => {
                    assert!(attr_value(&e, b"name").is_err());
                    break;
                },
                Event::Eof => panic!("cNvPr not found"),
                _ => {},
            }
        }
    }

    #[test]
    fn test_not_a_package() {
        assert!(PresentationOutline::from_bytes(b"not a zip").is_err());
    }
}
