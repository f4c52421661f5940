use crate::domain::model::ListingDocument;
use crate::domain::ports::DocumentWriter;
use crate::utils::error::{ListingError, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::borrow::Cow;
use std::io::Write;
use zip::write::{SimpleFileOptions, ZipWriter};

pub const DOCX_FILE_NAME: &str = "formatted_inventory.docx";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
</Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
</Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:rPr><w:sz w:val="22"/></w:rPr></w:style>
<w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:pPr><w:keepNext/><w:spacing w:before="480"/><w:outlineLvl w:val="0"/></w:pPr><w:rPr><w:b/><w:sz w:val="28"/></w:rPr></w:style>
<w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:pPr><w:keepNext/><w:spacing w:before="200"/><w:outlineLvl w:val="1"/></w:pPr><w:rPr><w:b/><w:sz w:val="26"/></w:rPr></w:style>
</w:styles>"#;

const WORDPROCESSING_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Minimal WordprocessingML package: a title heading, one level-2 heading
/// per sheet, one paragraph per listing line.
#[derive(Debug, Clone, Default)]
pub struct DocxWriter;

impl DocxWriter {
    pub fn new() -> Self {
        Self
    }

    fn document_xml(document: &ListingDocument) -> Result<Vec<u8>> {
        let mut writer = Writer::new(Vec::new());
        write_declaration(&mut writer)?;

        write_event(
            &mut writer,
            Event::Start(
                BytesStart::new("w:document").with_attributes([("xmlns:w", WORDPROCESSING_NS)]),
            ),
        )?;
        write_event(&mut writer, Event::Start(BytesStart::new("w:body")))?;

        write_paragraph(&mut writer, &document.title, Some("Heading1"))?;
        for section in &document.sections {
            write_paragraph(&mut writer, &section.heading, Some("Heading2"))?;
            for line in &section.lines {
                write_paragraph(&mut writer, line, None)?;
            }
        }

        write_event(&mut writer, Event::Empty(BytesStart::new("w:sectPr")))?;
        write_event(&mut writer, Event::End(BytesEnd::new("w:body")))?;
        write_event(&mut writer, Event::End(BytesEnd::new("w:document")))?;

        Ok(writer.into_inner())
    }

    fn core_xml(document: &ListingDocument) -> Result<Vec<u8>> {
        let created = chrono::Utc::now()
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string();

        let mut writer = Writer::new(Vec::new());
        write_declaration(&mut writer)?;

        write_event(
            &mut writer,
            Event::Start(BytesStart::new("cp:coreProperties").with_attributes([
                (
                    "xmlns:cp",
                    "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
                ),
                ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
                ("xmlns:dcterms", "http://purl.org/dc/terms/"),
                ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
            ])),
        )?;

        write_event(&mut writer, Event::Start(BytesStart::new("dc:title")))?;
        write_event(&mut writer, Event::Text(BytesText::new(&document.title)))?;
        write_event(&mut writer, Event::End(BytesEnd::new("dc:title")))?;

        write_event(
            &mut writer,
            Event::Start(
                BytesStart::new("dcterms:created").with_attributes([("xsi:type", "dcterms:W3CDTF")]),
            ),
        )?;
        write_event(&mut writer, Event::Text(BytesText::new(&created)))?;
        write_event(&mut writer, Event::End(BytesEnd::new("dcterms:created")))?;

        write_event(&mut writer, Event::End(BytesEnd::new("cp:coreProperties")))?;

        Ok(writer.into_inner())
    }
}

impl DocumentWriter for DocxWriter {
    fn file_name(&self) -> &str {
        DOCX_FILE_NAME
    }

    fn render(&self, document: &ListingDocument) -> Result<Vec<u8>> {
        tracing::debug!(
            "Rendering DOCX with {} sections, {} lines",
            document.sections.len(),
            document.line_count()
        );

        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        let parts: [(&str, Cow<'_, [u8]>); 6] = [
            ("[Content_Types].xml", Cow::Borrowed(CONTENT_TYPES_XML.as_bytes())),
            ("_rels/.rels", Cow::Borrowed(ROOT_RELS_XML.as_bytes())),
            (
                "word/_rels/document.xml.rels",
                Cow::Borrowed(DOCUMENT_RELS_XML.as_bytes()),
            ),
            ("word/styles.xml", Cow::Borrowed(STYLES_XML.as_bytes())),
            ("docProps/core.xml", Cow::Owned(Self::core_xml(document)?)),
            ("word/document.xml", Cow::Owned(Self::document_xml(document)?)),
        ];
        for (name, content) in parts {
            zip.start_file(name, options)?;
            zip.write_all(&content)?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| ListingError::DocumentError {
            message: e.to_string(),
        })
}

fn write_declaration(writer: &mut Writer<Vec<u8>>) -> Result<()> {
    write_event(
        writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))),
    )
}

// <w:p>[<w:pPr><w:pStyle/></w:pPr>]<w:r><w:t>text</w:t></w:r></w:p>
fn write_paragraph(writer: &mut Writer<Vec<u8>>, text: &str, style: Option<&str>) -> Result<()> {
    write_event(writer, Event::Start(BytesStart::new("w:p")))?;

    if let Some(style) = style {
        write_event(writer, Event::Start(BytesStart::new("w:pPr")))?;
        write_event(
            writer,
            Event::Empty(BytesStart::new("w:pStyle").with_attributes([("w:val", style)])),
        )?;
        write_event(writer, Event::End(BytesEnd::new("w:pPr")))?;
    }

    write_event(writer, Event::Start(BytesStart::new("w:r")))?;
    write_event(
        writer,
        Event::Start(BytesStart::new("w:t").with_attributes([("xml:space", "preserve")])),
    )?;
    write_event(writer, Event::Text(BytesText::new(text)))?;
    write_event(writer, Event::End(BytesEnd::new("w:t")))?;
    write_event(writer, Event::End(BytesEnd::new("w:r")))?;

    write_event(writer, Event::End(BytesEnd::new("w:p")))
}
