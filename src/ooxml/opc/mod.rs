/// Open Packaging Conventions (OPC) writer.
///
/// The subset of OPC needed to emit a PresentationML package:
///
/// - Package structure (parts, relationships)
/// - `[Content_Types].xml` generation
/// - ZIP-based physical packaging, plus a small reader used to load packages back
pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::{OpcPackage, Part};
pub use packuri::PackURI;
pub use phys_pkg::{PhysPkgReader, PhysPkgWriter};
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
