//! Presentation template module.
//!
//! Minimal valid parts for a new presentation: one slide master with two
//! layouts (Title Slide, Title and Content), a theme, and the presentation,
//! view and table-style properties PowerPoint expects to find.
//!
//! The master's relationships are fixed: `rId1` and `rId2` are the layouts in
//! [`SlideLayout::part_index`] order and `rId3` is the theme.
//!
//! [`SlideLayout::part_index`]: crate::ooxml::pptx::format::SlideLayout::part_index

use crate::common::xml::escape_xml;

const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n";

const NS_DECLS: &str = concat!(
    r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#,
);

const GROUP_PROPS: &str = concat!(
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
);

/// A placeholder shape with an explicit position, as used by the master and layouts.
fn placeholder(id: u32, name: &str, ph: &str, rect: (i64, i64, i64, i64)) -> String {
    format!(
        concat!(
            r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{name}"/>"#,
            r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr>{ph}</p:nvPr></p:nvSpPr>"#,
            r#"<p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm>"#,
            r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>"#,
            r#"<p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang="es-PE"/></a:p></p:txBody></p:sp>"#,
        ),
        id = id,
        name = name,
        ph = ph,
        x = rect.0,
        y = rect.1,
        cx = rect.2,
        cy = rect.3,
    )
}

/// Slide master with title and body placeholders.
pub fn default_slide_master_xml() -> String {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECL);
    xml.push_str("<p:sldMaster ");
    xml.push_str(NS_DECLS);
    xml.push('>');
    xml.push_str(r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg><p:spTree>"#);
    xml.push_str(GROUP_PROPS);
    xml.push_str(&placeholder(
        2,
        "Title Placeholder 1",
        r#"<p:ph type="title"/>"#,
        (457_200, 274_638, 8_229_600, 1_143_000),
    ));
    xml.push_str(&placeholder(
        3,
        "Text Placeholder 2",
        r#"<p:ph type="body" idx="1"/>"#,
        (457_200, 1_600_200, 8_229_600, 4_525_963),
    ));
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str(concat!(
        r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
        r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" "#,
        r#"hlink="hlink" folHlink="folHlink"/>"#,
    ));
    xml.push_str(concat!(
        r#"<p:sldLayoutIdLst>"#,
        r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#,
        r#"<p:sldLayoutId id="2147483650" r:id="rId2"/>"#,
        r#"</p:sldLayoutIdLst>"#,
    ));
    xml.push_str(concat!(
        r#"<p:txStyles>"#,
        r#"<p:titleStyle><a:lvl1pPr algn="ctr"><a:defRPr sz="4400"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
        r#"<a:latin typeface="+mj-lt"/></a:defRPr></a:lvl1pPr></p:titleStyle>"#,
        r#"<p:bodyStyle><a:lvl1pPr><a:defRPr sz="3200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
        r#"<a:latin typeface="+mn-lt"/></a:defRPr></a:lvl1pPr></p:bodyStyle>"#,
        r#"<p:otherStyle><a:lvl1pPr><a:defRPr sz="1800"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
        r#"<a:latin typeface="+mn-lt"/></a:defRPr></a:lvl1pPr></p:otherStyle>"#,
        r#"</p:txStyles>"#,
    ));
    xml.push_str("</p:sldMaster>");
    xml
}

/// Slide layout 1 XML (Title Slide)
pub fn title_slide_layout_xml() -> String {
    layout_xml(
        "title",
        "Title Slide",
        &[
            placeholder(
                2,
                "Title 1",
                r#"<p:ph type="ctrTitle"/>"#,
                (685_800, 2_130_425, 7_772_400, 1_470_025),
            ),
            placeholder(
                3,
                "Subtitle 2",
                r#"<p:ph type="subTitle" idx="1"/>"#,
                (1_371_600, 3_886_200, 6_400_800, 1_752_600),
            ),
        ],
    )
}

/// Slide layout 2 XML (Title and Content)
pub fn title_and_content_layout_xml() -> String {
    layout_xml(
        "obj",
        "Title and Content",
        &[
            placeholder(
                2,
                "Title 1",
                r#"<p:ph type="title"/>"#,
                (457_200, 274_638, 8_229_600, 1_143_000),
            ),
            placeholder(
                3,
                "Content Placeholder 2",
                r#"<p:ph idx="1"/>"#,
                (457_200, 1_600_200, 8_229_600, 4_525_963),
            ),
        ],
    )
}

fn layout_xml(layout_type: &str, name: &str, shapes: &[String]) -> String {
    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECL);
    xml.push_str(&format!(
        r#"<p:sldLayout {} type="{}" preserve="1">"#,
        NS_DECLS, layout_type
    ));
    xml.push_str(&format!(r#"<p:cSld name="{}"><p:spTree>"#, escape_xml(name)));
    xml.push_str(GROUP_PROPS);
    for shape in shapes {
        xml.push_str(shape);
    }
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
    xml.push_str("</p:sldLayout>");
    xml
}

/// Office theme with the standard colour, font and format schemes.
pub fn default_theme_xml() -> String {
    let solid = |c: &str| format!(r#"<a:solidFill><a:schemeClr val="{}"/></a:solidFill>"#, c);
    let line = |w: u32| {
        format!(
            r#"<a:ln w="{}" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/></a:ln>"#,
            w
        )
    };
    let phclr = solid("phClr");

    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECL);
    xml.push_str(r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme">"#);
    xml.push_str("<a:themeElements>");
    xml.push_str(concat!(
        r#"<a:clrScheme name="Office">"#,
        r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#,
        r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#,
        r#"<a:dk2><a:srgbClr val="1F497D"/></a:dk2>"#,
        r#"<a:lt2><a:srgbClr val="EEECE1"/></a:lt2>"#,
        r#"<a:accent1><a:srgbClr val="4F81BD"/></a:accent1>"#,
        r#"<a:accent2><a:srgbClr val="C0504D"/></a:accent2>"#,
        r#"<a:accent3><a:srgbClr val="9BBB59"/></a:accent3>"#,
        r#"<a:accent4><a:srgbClr val="8064A2"/></a:accent4>"#,
        r#"<a:accent5><a:srgbClr val="4BACC6"/></a:accent5>"#,
        r#"<a:accent6><a:srgbClr val="F79646"/></a:accent6>"#,
        r#"<a:hlink><a:srgbClr val="0000FF"/></a:hlink>"#,
        r#"<a:folHlink><a:srgbClr val="800080"/></a:folHlink>"#,
        r#"</a:clrScheme>"#,
        r#"<a:fontScheme name="Office">"#,
        r#"<a:majorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
        r#"<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
        r#"</a:fontScheme>"#,
    ));
    xml.push_str(r#"<a:fmtScheme name="Office">"#);
    xml.push_str(&format!(
        "<a:fillStyleLst>{p}{p}{p}</a:fillStyleLst>",
        p = phclr
    ));
    xml.push_str(&format!(
        "<a:lnStyleLst>{}{}{}</a:lnStyleLst>",
        line(9525),
        line(25400),
        line(38100)
    ));
    xml.push_str(concat!(
        "<a:effectStyleLst>",
        "<a:effectStyle><a:effectLst/></a:effectStyle>",
        "<a:effectStyle><a:effectLst/></a:effectStyle>",
        "<a:effectStyle><a:effectLst/></a:effectStyle>",
        "</a:effectStyleLst>",
    ));
    xml.push_str(&format!(
        "<a:bgFillStyleLst>{p}{p}{p}</a:bgFillStyleLst>",
        p = phclr
    ));
    xml.push_str("</a:fmtScheme>");
    xml.push_str("</a:themeElements>");
    xml.push_str("<a:objectDefaults/><a:extraClrSchemeLst/>");
    xml.push_str("</a:theme>");
    xml
}

pub fn default_pres_props_xml() -> String {
    format!("{}<p:presentationPr {}/>", XML_DECL, NS_DECLS)
}

pub fn default_view_props_xml() -> String {
    format!(
        "{}<p:viewPr {} lastView=\"sldView\"><p:gridSpacing cx=\"76200\" cy=\"76200\"/></p:viewPr>",
        XML_DECL, NS_DECLS
    )
}

pub fn default_table_styles_xml() -> String {
    format!(
        "{}<a:tblStyleLst xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" def=\"{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}\"/>",
        XML_DECL
    )
}

/// Core document properties (`docProps/core.xml`).
pub fn core_props_xml(title: &str, creator: &str) -> String {
    format!(
        concat!(
            "{decl}",
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            "<dc:title>{title}</dc:title><dc:creator>{creator}</dc:creator>",
            "</cp:coreProperties>",
        ),
        decl = XML_DECL,
        title = escape_xml(title),
        creator = escape_xml(creator),
    )
}

/// Extended (application) properties (`docProps/app.xml`).
pub fn app_props_xml(application: &str, slide_count: usize) -> String {
    format!(
        concat!(
            "{decl}",
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
            r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
            "<Application>{app}</Application><PresentationFormat>On-screen Show (4:3)</PresentationFormat>",
            "<Slides>{slides}</Slides>",
            "</Properties>",
        ),
        decl = XML_DECL,
        app = escape_xml(application),
        slides = slide_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::Reader;
    use quick_xml::events::Event;

    fn assert_well_formed(xml: &str) {
        let mut reader = Reader::from_str(xml);
        let mut depth = 0i32;
        loop {
            match reader.read_event() {
                Ok(Event::Start(_)) => depth += 1,
                Ok(Event::End(_)) => depth -= 1,
                Ok(Event::Eof) => break,
                Ok(_) => {},
                Err(e) => panic!("malformed XML: {e}"),
            }
        }
        assert_eq!(depth, 0);
    }

    #[test]
    fn test_templates_are_well_formed() {
        for xml in [
            default_slide_master_xml(),
            title_slide_layout_xml(),
            title_and_content_layout_xml(),
            default_theme_xml(),
            default_pres_props_xml(),
            default_view_props_xml(),
            default_table_styles_xml(),
            core_props_xml("A & B", "museo-danzas"),
            app_props_xml("museo-danzas", 23),
        ] {
            assert_well_formed(&xml);
        }
    }

    #[test]
    fn test_master_references_layouts() {
        let xml = default_slide_master_xml();
        assert!(xml.contains(r#"r:id="rId1""#));
        assert!(xml.contains(r#"r:id="rId2""#));
        assert!(xml.contains(r#"<p:ph type="title"/>"#));
    }

    #[test]
    fn test_layouts_have_title_placeholders() {
        assert!(title_slide_layout_xml().contains(r#"<p:ph type="ctrTitle"/>"#));
        assert!(title_and_content_layout_xml().contains(r#"<p:ph type="title"/>"#));
    }

    #[test]
    fn test_props_are_escaped() {
        assert!(core_props_xml("A & B", "x").contains("<dc:title>A &amp; B</dc:title>"));
        assert!(app_props_xml("x", 23).contains("<Slides>23</Slides>"));
    }
}
