//! Package writer for OPC packages.
//!
//! Serializes an [`OpcPackage`] to a ZIP archive: `[Content_Types].xml`,
//! package relationships, then every part followed by its relationships.

use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::content_type as ct;
use crate::ooxml::opc::error::Result;
use crate::ooxml::opc::package::OpcPackage;
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use crate::ooxml::opc::phys_pkg::PhysPkgWriter;
use std::collections::BTreeMap;
use std::path::Path;

/// Package writer that serializes an OPC package to a ZIP file.
pub struct PackageWriter;

impl PackageWriter {
    /// Write an OPC package to a file, replacing any existing file.
    ///
    /// The archive is fully built in memory first, so a failure before the
    /// final write leaves no file behind.
    pub fn write<P: AsRef<Path>>(path: P, package: &OpcPackage) -> Result<()> {
        let bytes = Self::to_bytes(package)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Write an OPC package to a stream.
    pub fn write_to_stream<W: std::io::Write>(mut writer: W, package: &OpcPackage) -> Result<()> {
        let bytes = Self::to_bytes(package)?;
        writer.write_all(&bytes)?;
        Ok(())
    }

    /// Serialize an OPC package to bytes.
    pub fn to_bytes(package: &OpcPackage) -> Result<Vec<u8>> {
        let mut phys_writer = PhysPkgWriter::new();

        Self::write_content_types(&mut phys_writer, package)?;
        Self::write_pkg_rels(&mut phys_writer, package)?;
        Self::write_parts(&mut phys_writer, package)?;

        phys_writer.finish()
    }

    fn write_content_types(phys_writer: &mut PhysPkgWriter, package: &OpcPackage) -> Result<()> {
        let cti = ContentTypesItem::from_package(package);
        phys_writer.write(&PackURI::new(CONTENT_TYPES_URI)?, cti.to_xml().as_bytes())
    }

    fn write_pkg_rels(phys_writer: &mut PhysPkgWriter, package: &OpcPackage) -> Result<()> {
        let rels_uri = PackURI::new(PACKAGE_URI)?.rels_uri()?;
        phys_writer.write(&rels_uri, package.rels().to_xml().as_bytes())
    }

    fn write_parts(phys_writer: &mut PhysPkgWriter, package: &OpcPackage) -> Result<()> {
        for part in package.iter_parts() {
            phys_writer.write(part.partname(), part.blob())?;

            if !part.rels().is_empty() {
                let rels_uri = part.partname().rels_uri()?;
                phys_writer.write(&rels_uri, part.rels().to_xml().as_bytes())?;
            }
        }

        Ok(())
    }
}

/// Default and Override entries of `[Content_Types].xml`.
///
/// Ordered maps keep the output stable between runs.
struct ContentTypesItem {
    defaults: BTreeMap<String, String>,
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    fn from_package(package: &OpcPackage) -> Self {
        let mut cti = Self::new();
        for part in package.iter_parts() {
            cti.add_content_type(part.partname(), part.content_type());
        }
        cti
    }

    fn add_content_type(&mut self, partname: &PackURI, content_type: &str) {
        let ext = partname.ext().to_ascii_lowercase();
        if self.defaults.get(&ext).is_some_and(|d| d == content_type) {
            return;
        }
        self.overrides
            .insert(partname.to_string(), content_type.to_string());
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );

        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            ));
        }

        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            ));
        }

        xml.push_str("</Types>");

        xml
    }
}
