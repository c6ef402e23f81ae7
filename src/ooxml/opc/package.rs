/// In-memory OPC package.
///
/// `OpcPackage` holds the package-level relationships and an ordered list of
/// parts. Writers build one and hand it to [`PackageWriter`]; readers load one
/// back with [`OpcPackage::from_bytes`].
///
/// [`PackageWriter`]: crate::ooxml::opc::PackageWriter
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::opc::rel::Relationships;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::HashMap;
use std::path::Path;

/// A part of the package: a blob with a partname, a content type, and the
/// relationships it owns.
#[derive(Debug, Clone)]
pub struct Part {
    partname: PackURI,
    content_type: String,
    blob: Vec<u8>,
    rels: Relationships,
}

impl Part {
    pub fn new(partname: PackURI, content_type: impl Into<String>, blob: Vec<u8>) -> Self {
        let rels = Relationships::new(partname.base_uri());
        Self {
            partname,
            content_type: content_type.into(),
            blob,
            rels,
        }
    }

    /// Build a part from XML text.
    pub fn from_xml(partname: PackURI, content_type: impl Into<String>, xml: String) -> Self {
        Self::new(partname, content_type, xml.into_bytes())
    }

    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    #[inline]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// Replace the part's content with XML text, keeping its relationships.
    pub fn set_xml(&mut self, xml: String) {
        self.blob = xml.into_bytes();
    }

    /// The blob interpreted as UTF-8 XML.
    pub fn xml(&self) -> Result<&str> {
        Ok(std::str::from_utf8(&self.blob)?)
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    #[inline]
    pub fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }

    /// Add (or reuse) a relationship to another part, returning its rId.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels.get_or_add(reltype, target)
    }
}

/// Main API type for an OPC package.
#[derive(Debug, Clone)]
pub struct OpcPackage {
    /// Package-level relationships (`/_rels/.rels`)
    rels: Relationships,
    /// Parts in insertion order; the writer emits them in this order
    parts: Vec<Part>,
}

impl OpcPackage {
    /// Create a new empty package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI),
            parts: Vec::new(),
        }
    }

    /// Load a package from a file on disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Load a package from the bytes of a ZIP archive.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut phys = PhysPkgReader::new(data)?;
        let content_types_uri = PackURI::new(CONTENT_TYPES_URI)?;
        let content_types = ContentTypeMap::from_xml(&phys.blob_string(&content_types_uri)?)?;

        let mut package = Self::new();
        let pkg_rels_uri = PackURI::new(PACKAGE_URI)?.rels_uri()?;
        if phys.contains(&pkg_rels_uri) {
            package.rels = Relationships::from_xml(PACKAGE_URI, &phys.blob_string(&pkg_rels_uri)?)?;
        }

        for member in phys.member_names() {
            if member.ends_with(".rels") || member == CONTENT_TYPES_URI[1..] {
                continue;
            }
            let partname = PackURI::new(format!("/{}", member))?;
            let blob = phys.blob_for(&partname)?;
            let content_type = content_types.lookup(&partname).unwrap_or_default();
            let mut part = Part::new(partname.clone(), content_type, blob);

            let rels_uri = partname.rels_uri()?;
            if phys.contains(&rels_uri) {
                part.rels = Relationships::from_xml(partname.base_uri(), &phys.blob_string(&rels_uri)?)?;
            }
            package.parts.push(part);
        }

        Ok(package)
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package to a part (e.g. the main document), returning the rId.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels.get_or_add(reltype, target)
    }

    /// Add a part. Partnames must be unique.
    pub fn add_part(&mut self, part: Part) -> Result<()> {
        if self.parts.iter().any(|p| p.partname == part.partname) {
            return Err(OpcError::DuplicatePart(part.partname.to_string()));
        }
        self.parts.push(part);
        Ok(())
    }

    pub fn part(&self, partname: &PackURI) -> Result<&Part> {
        self.parts
            .iter()
            .find(|p| &p.partname == partname)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Follow the package relationship of type `reltype` to its part.
    pub fn main_part(&self, reltype: &str) -> Result<&Part> {
        let rel = self
            .rels
            .iter()
            .find(|rel| rel.reltype() == reltype && !rel.is_external())
            .ok_or_else(|| OpcError::RelationshipNotFound(reltype.to_string()))?;
        self.part(&rel.target_partname(PACKAGE_URI)?)
    }

    #[inline]
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    #[inline]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

/// Content types read back from `[Content_Types].xml`.
#[derive(Debug, Default)]
struct ContentTypeMap {
    defaults: HashMap<String, String>,
    overrides: HashMap<String, String>,
}

impl ContentTypeMap {
    fn from_xml(xml: &str) -> Result<Self> {
        let mut map = Self::default();
        let mut reader = Reader::from_str(xml);

        loop {
            match reader.read_event()? {
                Event::Start(e) | Event::Empty(e) => {
                    let name = e.local_name();
                    let is_default = name.as_ref() == b"Default";
                    if !is_default && name.as_ref() != b"Override" {
                        continue;
                    }

                    let mut key = String::new();
                    let mut content_type = String::new();
                    for attr in e.attributes() {
                        let attr = attr?;
                        match attr.key.as_ref() {
                            b"Extension" | b"PartName" => key = attr.unescape_value()?.into_owned(),
                            b"ContentType" => content_type = attr.unescape_value()?.into_owned(),
                            _ => {},
                        }
                    }

                    if is_default {
                        map.defaults.insert(key.to_ascii_lowercase(), content_type);
                    } else {
                        map.overrides.insert(key, content_type);
                    }
                },
                Event::Eof => break,
                _ => {},
            }
        }

        Ok(map)
    }

    fn lookup(&self, partname: &PackURI) -> Option<String> {
        self.overrides
            .get(partname.as_str())
            .or_else(|| self.defaults.get(&partname.ext().to_ascii_lowercase()))
            .cloned()
    }
}
