/// Physical (ZIP) layer of an OPC package.
use crate::ooxml::opc::error::Result;
use crate::ooxml::opc::packuri::PackURI;
use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipArchive, ZipWriter};

/// Physical package writer.
///
/// Every member is deflated and stamped with the fixed DOS epoch, so writing
/// the same parts twice yields identical archives.
pub struct PhysPkgWriter {
    archive: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl PhysPkgWriter {
    /// Create a new package writer that writes to memory.
    pub fn new() -> Self {
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
            options: SimpleFileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .last_modified_time(DateTime::default()),
        }
    }

    /// Write a part to the package.
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        self.archive.start_file(pack_uri.membername(), self.options)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish writing and return the archive bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        Ok(self.archive.finish()?.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Physical package reader over an in-memory archive.
pub struct PhysPkgReader<'data> {
    archive: ZipArchive<Cursor<&'data [u8]>>,
}

impl<'data> PhysPkgReader<'data> {
    pub fn new(data: &'data [u8]) -> Result<Self> {
        Ok(Self {
            archive: ZipArchive::new(Cursor::new(data))?,
        })
    }

    /// Member names in archive order, directories excluded.
    pub fn member_names(&self) -> Vec<String> {
        self.archive
            .file_names()
            .filter(|name| !name.ends_with('/'))
            .map(String::from)
            .collect()
    }

    pub fn contains(&self, pack_uri: &PackURI) -> bool {
        self.archive.index_for_name(pack_uri.membername()).is_some()
    }

    /// Decompressed contents of a member.
    pub fn blob_for(&mut self, pack_uri: &PackURI) -> Result<Vec<u8>> {
        let mut file = self.archive.by_name(pack_uri.membername())?;
        let mut blob = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut blob)?;
        Ok(blob)
    }

    /// Decompressed contents of a member as UTF-8 text.
    pub fn blob_string(&mut self, pack_uri: &PackURI) -> Result<String> {
        let blob = self.blob_for(pack_uri)?;
        Ok(std::str::from_utf8(&blob)?.to_string())
    }
}
