/// The PackURI value type.
///
/// A PackURI is a part name within an OPC package: it always begins with a
/// forward slash and uses forward slashes as separators.
use crate::ooxml::opc::error::{OpcError, Result};
use std::fmt;

/// Pseudo-partname of the package itself.
pub const PACKAGE_URI: &str = "/";

/// Partname of the content types item.
pub const CONTENT_TYPES_URI: &str = "/[Content_Types].xml";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackURI {
    uri: String,
}

impl PackURI {
    /// Create a new PackURI, which must begin with a forward slash.
    pub fn new<S: Into<String>>(uri: S) -> Result<Self> {
        let uri = uri.into();
        if !uri.starts_with('/') {
            return Err(OpcError::InvalidPackUri(format!(
                "PackURI must begin with slash, got '{}'",
                uri
            )));
        }
        Ok(PackURI { uri })
    }

    /// Resolve a relative reference (like `"../slideLayouts/slideLayout1.xml"`)
    /// against a base URI (like `"/ppt/slides"`).
    pub fn from_rel_ref(base_uri: &str, relative_ref: &str) -> Result<Self> {
        let joined = if relative_ref.starts_with('/') {
            relative_ref.to_string()
        } else if base_uri.ends_with('/') {
            format!("{}{}", base_uri, relative_ref)
        } else {
            format!("{}/{}", base_uri, relative_ref)
        };

        let mut segments: Vec<&str> = Vec::new();
        for segment in joined.split('/') {
            match segment {
                "" | "." => {},
                ".." => {
                    segments.pop();
                },
                s => segments.push(s),
            }
        }

        Self::new(format!("/{}", segments.join("/")))
    }

    /// Directory portion, e.g. `"/ppt/slides"` for `"/ppt/slides/slide1.xml"`.
    pub fn base_uri(&self) -> &str {
        match self.uri.rfind('/') {
            Some(0) | None => "/",
            Some(pos) => &self.uri[..pos],
        }
    }

    /// Filename portion, e.g. `"slide1.xml"`.
    pub fn filename(&self) -> &str {
        match self.uri.rfind('/') {
            Some(pos) => &self.uri[pos + 1..],
            None => "",
        }
    }

    /// Extension without the leading period, e.g. `"xml"`.
    pub fn ext(&self) -> &str {
        let filename = self.filename();
        match filename.rfind('.') {
            Some(pos) => &filename[pos + 1..],
            None => "",
        }
    }

    /// The URI with the leading slash stripped, as used for ZIP member names.
    pub fn membername(&self) -> &str {
        &self.uri[1..]
    }

    /// Relative reference from `base_uri` to this part.
    ///
    /// `"/ppt/slideLayouts/slideLayout1.xml"` relative to `"/ppt/slides"` is
    /// `"../slideLayouts/slideLayout1.xml"`.
    pub fn relative_ref(&self, base_uri: &str) -> String {
        if base_uri == PACKAGE_URI {
            return self.membername().to_string();
        }

        let base: Vec<&str> = base_uri.split('/').filter(|s| !s.is_empty()).collect();
        let target: Vec<&str> = self.uri.split('/').filter(|s| !s.is_empty()).collect();

        let common = base
            .iter()
            .zip(target.iter())
            .take_while(|(a, b)| a == b)
            .count();

        let mut parts: Vec<&str> = vec![".."; base.len() - common];
        parts.extend_from_slice(&target[common..]);
        parts.join("/")
    }

    /// Partname of the relationships item for this part.
    ///
    /// `"/ppt/slides/slide1.xml"` maps to `"/ppt/slides/_rels/slide1.xml.rels"`
    /// and the package pseudo-partname to `"/_rels/.rels"`.
    pub fn rels_uri(&self) -> Result<PackURI> {
        if self.uri == PACKAGE_URI {
            return PackURI::new("/_rels/.rels");
        }
        let base = self.base_uri();
        let sep = if base == "/" { "" } else { "/" };
        PackURI::new(format!("{}{}_rels/{}.rels", base, sep, self.filename()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.uri
    }
}

impl fmt::Display for PackURI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_leading_slash() {
        assert!(PackURI::new("ppt/presentation.xml").is_err());
        assert!(PackURI::new("/ppt/presentation.xml").is_ok());
    }

    #[test]
    fn test_components() {
        let uri = PackURI::new("/ppt/slides/slide12.xml").unwrap();
        assert_eq!(uri.base_uri(), "/ppt/slides");
        assert_eq!(uri.filename(), "slide12.xml");
        assert_eq!(uri.ext(), "xml");
        assert_eq!(uri.membername(), "ppt/slides/slide12.xml");
    }

    #[test]
    fn test_rels_uri() {
        let uri = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        assert_eq!(
            uri.rels_uri().unwrap().as_str(),
            "/ppt/slides/_rels/slide1.xml.rels"
        );
        let pkg = PackURI::new(PACKAGE_URI).unwrap();
        assert_eq!(pkg.rels_uri().unwrap().as_str(), "/_rels/.rels");
    }

    #[test]
    fn test_relative_ref() {
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout1.xml").unwrap();
        assert_eq!(
            layout.relative_ref("/ppt/slides"),
            "../slideLayouts/slideLayout1.xml"
        );
        let slide = PackURI::new("/ppt/slides/slide3.xml").unwrap();
        assert_eq!(slide.relative_ref("/ppt/slides"), "slide3.xml");
        assert_eq!(slide.relative_ref("/ppt"), "slides/slide3.xml");
        assert_eq!(slide.relative_ref("/"), "ppt/slides/slide3.xml");
    }

    #[test]
    fn test_from_rel_ref() {
        let uri = PackURI::from_rel_ref("/ppt/slides", "../slideLayouts/slideLayout2.xml").unwrap();
        assert_eq!(uri.as_str(), "/ppt/slideLayouts/slideLayout2.xml");
        let uri = PackURI::from_rel_ref("/", "ppt/presentation.xml").unwrap();
        assert_eq!(uri.as_str(), "/ppt/presentation.xml");
    }
}
