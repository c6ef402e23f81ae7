/// Relationship objects for OPC packages.
///
/// A part (or the package itself) owns a `Relationships` collection; each
/// entry points at another part or, for hyperlinks, at an external URL.
use crate::common::xml::escape_xml;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use quick_xml::Reader;
use quick_xml::events::Event;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,
    /// Relationship type URI
    reltype: String,
    /// Target reference - either a relative part reference or an external URL
    target_ref: String,
    /// Whether this is an external relationship
    is_external: bool,
}

impl Relationship {
    pub fn new(r_id: String, reltype: String, target_ref: String, is_external: bool) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
            is_external,
        }
    }

    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Target reference.
    ///
    /// For internal relationships this is relative to the source part's
    /// directory; for external relationships it is an absolute URL.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        self.is_external
    }

    /// Absolute partname of the target, resolved against `base_uri`.
    pub fn target_partname(&self, base_uri: &str) -> Result<PackURI> {
        if self.is_external {
            return Err(OpcError::InvalidPackUri(format!(
                "Relationship {} targets an external resource",
                self.r_id
            )));
        }
        PackURI::from_rel_ref(base_uri, &self.target_ref)
    }
}

/// Ordered collection of relationships belonging to one source.
///
/// IDs are allocated sequentially (`rId1`, `rId2`, ...) in insertion order so
/// that the same sequence of calls always yields the same `.rels` XML.
#[derive(Debug, Clone)]
pub struct Relationships {
    /// Directory of the source part, used to compute relative targets
    base_uri: String,
    rels: Vec<Relationship>,
}

impl Relationships {
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            rels: Vec::new(),
        }
    }

    #[inline]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Get a relationship by its ID.
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    /// Get or add an internal relationship to `target`, returning its rId.
    pub fn get_or_add(&mut self, reltype: &str, target: &PackURI) -> String {
        let target_ref = target.relative_ref(&self.base_uri);
        if let Some(rel) = self
            .rels
            .iter()
            .find(|rel| !rel.is_external && rel.reltype == reltype && rel.target_ref == target_ref)
        {
            return rel.r_id.clone();
        }
        self.push(reltype, target_ref, false)
    }

    /// Get or add an external relationship, returning its rId.
    pub fn get_or_add_ext_rel(&mut self, reltype: &str, url: &str) -> String {
        if let Some(rel) = self
            .rels
            .iter()
            .find(|rel| rel.is_external && rel.reltype == reltype && rel.target_ref == url)
        {
            return rel.r_id.clone();
        }
        self.push(reltype, url.to_string(), true)
    }

    fn push(&mut self, reltype: &str, target_ref: String, is_external: bool) -> String {
        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship::new(
            r_id.clone(),
            reltype.to_string(),
            target_ref,
            is_external,
        ));
        r_id
    }

    /// Iterate relationships in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize to the XML of a `.rels` item.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        for rel in &self.rels {
            let target_mode = if rel.is_external {
                r#" TargetMode="External""#
            } else {
                ""
            };

            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"{}/>"#,
                escape_xml(&rel.r_id),
                escape_xml(&rel.reltype),
                escape_xml(&rel.target_ref),
                target_mode
            ));
        }

        xml.push_str("</Relationships>");

        xml
    }

    /// Parse the XML of a `.rels` item.
    pub fn from_xml(base_uri: impl Into<String>, xml: &str) -> Result<Self> {
        let mut rels = Self::new(base_uri);
        let mut reader = Reader::from_str(xml);

        loop {
            match reader.read_event()? {
                Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                    let mut r_id = String::new();
                    let mut reltype = String::new();
                    let mut target_ref = String::new();
                    let mut is_external = false;

                    for attr in e.attributes() {
                        let attr = attr?;
                        let value = attr.unescape_value()?.into_owned();
                        match attr.key.as_ref() {
                            b"Id" => r_id = value,
                            b"Type" => reltype = value,
                            b"Target" => target_ref = value,
                            b"TargetMode" => is_external = value == "External",
                            _ => {},
                        }
                    }

                    rels.rels
                        .push(Relationship::new(r_id, reltype, target_ref, is_external));
                },
                Event::Eof => break,
                _ => {},
            }
        }

        Ok(rels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut rels = Relationships::new("/ppt/slides");
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout2.xml").unwrap();
        let slide = PackURI::new("/ppt/slides/slide2.xml").unwrap();

        assert_eq!(rels.get_or_add("layout", &layout), "rId1");
        assert_eq!(rels.get_or_add("slide", &slide), "rId2");
        assert_eq!(rels.get_or_add_ext_rel("link", "https://example.com"), "rId3");
        assert_eq!(rels.len(), 3);
    }

    #[test]
    fn test_get_or_add_reuses_existing() {
        let mut rels = Relationships::new("/ppt/slides");
        let slide = PackURI::new("/ppt/slides/slide2.xml").unwrap();

        let first = rels.get_or_add("slide", &slide);
        let second = rels.get_or_add("slide", &slide);
        assert_eq!(first, second);
        assert_eq!(rels.len(), 1);
        assert_eq!(rels.get(&first).unwrap().target_ref(), "slide2.xml");
    }

    #[test]
    fn test_external_marked_in_xml() {
        let mut rels = Relationships::new("/ppt/slides");
        rels.get_or_add_ext_rel("link", "https://example.com/?a=1&b=2");
        let xml = rels.to_xml();
        assert!(xml.contains(r#"TargetMode="External""#));
        assert!(xml.contains("a=1&amp;b=2"));
    }

    #[test]
    fn test_xml_round_trip_preserves_targets() {
        let mut rels = Relationships::new("/ppt/slides");
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout1.xml").unwrap();
        rels.get_or_add("layout", &layout);
        rels.get_or_add_ext_rel("link", "https://example.com/?a=1&b=2");

        let parsed = Relationships::from_xml("/ppt/slides", &rels.to_xml()).unwrap();
        assert_eq!(parsed.len(), 2);

        let internal = parsed.get("rId1").unwrap();
        assert!(!internal.is_external());
        assert_eq!(
            internal.target_partname("/ppt/slides").unwrap(),
            layout
        );

        let external = parsed.get("rId2").unwrap();
        assert!(external.is_external());
        assert_eq!(external.target_ref(), "https://example.com/?a=1&b=2");
        assert!(external.target_partname("/ppt/slides").is_err());
    }

    #[test]
    fn test_unknown_entity_in_target_rejected() {
        let xml = r#"<Relationships><Relationship Id="rId1" Type="t" Target="a&bogus;b"/></Relationships>"#;
        assert!(Relationships::from_xml("/ppt/slides", xml).is_err());
    }

    #[test]
    fn test_character_references_in_target() {
        let xml = r#"<Relationships><Relationship Id="rId1" Type="t" Target="a&#x26;b&#61;c" TargetMode="External"/></Relationships>"#;
        let rels = Relationships::from_xml("/", xml).unwrap();
        assert_eq!(rels.get("rId1").unwrap().target_ref(), "a&b=c");
    }
}
