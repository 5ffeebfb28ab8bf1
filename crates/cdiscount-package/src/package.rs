//! Package archive layout
//!
//! A package is an Open Packaging Convention zip holding a single document
//! under `Content/`.

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::debug;
use zip::{ZipWriter, write::SimpleFileOptions};

use crate::error::{PackageError, Result};

pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
pub const RELATIONSHIPS_PART: &str = "_rels/.rels";
pub const CONTENT_DIR: &str = "Content";

/// XAML namespace carried by both package documents
pub const XAML_NAMESPACE: &str = "http://schemas.microsoft.com/winfx/2006/xaml";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="utf-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="text/xml" /><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml" /></Types>"#;

/// Ordered `name="value"` pairs written on an element
pub type Attributes = Vec<(String, String)>;

/// A document that can be rendered and archived as an integration package
pub trait Package {
    /// File name of the document under `Content/`
    const CONTENT: &'static str;

    /// Render the package document
    fn render(&self) -> Result<String>;

    /// Write `<path>.zip` and return its path
    ///
    /// Fails with `AlreadyExists` when the archive is present and `overwrite`
    /// is false, and with `NotFound` when the parent directory is missing.
    fn generate(&self, path: impl AsRef<Path>, overwrite: bool) -> Result<PathBuf> {
        let content = self.render()?;
        write_archive(path.as_ref(), Self::CONTENT, &content, overwrite)
    }
}

/// Returns the archive path for `path`, appending `.zip` when needed
pub fn archive_path(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == "zip") {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_owned();
    name.push(".zip");
    PathBuf::from(name)
}

fn write_archive(
    path: &Path,
    content_name: &str,
    content: &str,
    overwrite: bool,
) -> Result<PathBuf> {
    let zip_path = archive_path(path);

    if let Some(parent) = zip_path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.is_dir()
    {
        return Err(PackageError::NotFound(parent.to_path_buf()));
    }

    if zip_path.exists() && !overwrite {
        return Err(PackageError::AlreadyExists(zip_path));
    }

    let bytes = archive_bytes(content_name, content)?;
    std::fs::write(&zip_path, bytes)?;

    debug!("Package written to {}", zip_path.display());
    Ok(zip_path)
}

fn relationships(content_name: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Type="http://cdiscount.com/uri/document" Target="/{}/{}" Id="R1" /></Relationships>"#,
        CONTENT_DIR, content_name
    )
}

/// Build the zip archive in memory
pub(crate) fn archive_bytes(content_name: &str, content: &str) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    let mut zip = ZipWriter::new(&mut buffer);
    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);

    zip.start_file(CONTENT_TYPES_PART, options)?;
    zip.write_all(CONTENT_TYPES.as_bytes())?;

    zip.start_file(RELATIONSHIPS_PART, options)?;
    zip.write_all(relationships(content_name).as_bytes())?;

    zip.start_file(format!("{}/{}", CONTENT_DIR, content_name), options)?;
    zip.write_all(content.as_bytes())?;

    zip.finish()?;

    Ok(buffer.into_inner())
}

/// Indented XML writer shared by the package documents
pub(crate) struct Document {
    writer: Writer<Vec<u8>>,
}

impl Document {
    pub(crate) fn new() -> Result<Self> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        Ok(Self { writer })
    }

    pub(crate) fn start(&mut self, name: &str, attributes: &[(String, String)]) -> Result<()> {
        self.writer.write_event(Event::Start(element(name, attributes)))?;
        Ok(())
    }

    pub(crate) fn end(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    pub(crate) fn empty(&mut self, name: &str, attributes: &[(String, String)]) -> Result<()> {
        self.writer.write_event(Event::Empty(element(name, attributes)))?;
        Ok(())
    }

    pub(crate) fn text(
        &mut self,
        name: &str,
        attributes: &[(String, String)],
        text: &str,
    ) -> Result<()> {
        self.writer.write_event(Event::Start(element(name, attributes)))?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Write `<Parent.Property><List Capacity="n">..</List></Parent.Property>`
    pub(crate) fn collection(
        &mut self,
        property: &str,
        list: &str,
        items: &[Attributes],
        item: &str,
    ) -> Result<()> {
        if items.is_empty() {
            return Ok(());
        }
        self.start(property, &[])?;
        self.start(list, &[capacity(items.len())])?;
        for attributes in items {
            self.empty(item, attributes)?;
        }
        self.end(list)?;
        self.end(property)
    }

    /// Write `<Parent.Property>` holding the items directly
    pub(crate) fn property(
        &mut self,
        property: &str,
        items: &[Attributes],
        item: &str,
    ) -> Result<()> {
        if items.is_empty() {
            return Ok(());
        }
        self.start(property, &[])?;
        for attributes in items {
            self.empty(item, attributes)?;
        }
        self.end(property)
    }

    pub(crate) fn finish(self) -> Result<String> {
        Ok(String::from_utf8(self.writer.into_inner())?)
    }
}

fn element<'a>(name: &'a str, attributes: &[(String, String)]) -> BytesStart<'a> {
    let mut start = BytesStart::new(name);
    for (key, value) in attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }
    start
}

pub(crate) fn capacity(len: usize) -> (String, String) {
    ("Capacity".to_string(), len.to_string())
}
