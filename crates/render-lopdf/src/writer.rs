use lopdf::content::Content;
use lopdf::{Dictionary, Object, ObjectId, Stream, StringFormat, dictionary};
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Buffers indirect objects and writes them in ascending id order.
///
/// Nothing time- or environment-dependent goes into the output, so identical
/// object graphs produce identical files.
pub struct StreamingPdfWriter<W: Write> {
    writer: W,
    version: String,
    max_id: u32,
    pub catalog_id: ObjectId,
    pub pages_id: ObjectId,
    pub resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    buffered_objects: BTreeMap<ObjectId, Object>,
}

impl<W: Write> StreamingPdfWriter<W> {
    pub fn new(writer: W, version: &str, resources: Dictionary) -> io::Result<Self> {
        let resources_id = (1, 0);
        let mut buffered_objects = BTreeMap::new();
        buffered_objects.insert(resources_id, Object::Dictionary(resources));

        Ok(Self {
            writer,
            version: version.to_string(),
            max_id: 3,
            catalog_id: (3, 0),
            pages_id: (2, 0),
            resources_id,
            page_ids: Vec::new(),
            buffered_objects,
        })
    }

    pub fn new_object_id(&mut self) -> ObjectId {
        self.max_id += 1;
        (self.max_id, 0)
    }

    pub fn buffer_object(&mut self, object: Object) -> ObjectId {
        let id = self.new_object_id();
        self.buffered_objects.insert(id, object);
        id
    }

    pub fn buffer_object_at_id(&mut self, id: ObjectId, object: Object) {
        self.max_id = self.max_id.max(id.0);
        self.buffered_objects.insert(id, object);
    }

    pub fn buffer_content_stream(&mut self, content: Content) -> io::Result<ObjectId> {
        let bytes = content
            .encode()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
        Ok(self.buffer_object(Object::Stream(Stream::new(dictionary! {}, bytes))))
    }

    /// Adds a page whose resources are the shared resource dictionary.
    pub fn buffer_page(&mut self, content_id: ObjectId, width_pt: f32, height_pt: f32) -> ObjectId {
        let page = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![Object::Integer(0), Object::Integer(0), Object::Real(width_pt), Object::Real(height_pt)],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        let page_id = self.buffer_object(page.into());
        self.page_ids.push(page_id);
        page_id
    }

    /// Writes the header, every buffered object, the cross-reference table and the trailer.
    pub fn finish(mut self) -> io::Result<W> {
        let kids: Vec<Object> = self.page_ids.iter().copied().map(Object::Reference).collect();
        let pages = dictionary! { "Type" => "Pages", "Kids" => kids, "Count" => self.page_ids.len() as i64 };
        self.buffer_object_at_id(self.pages_id, pages.into());
        let catalog = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        self.buffer_object_at_id(self.catalog_id, catalog.into());

        let mut out = format!("%PDF-{}\n%âãÏÓ\n", self.version).into_bytes();
        let mut offsets = BTreeMap::new();
        for (id, object) in &self.buffered_objects {
            offsets.insert(id.0, out.len());
            out.extend_from_slice(format!("{} {} obj\n", id.0, id.1).as_bytes());
            encode::object(&mut out, object);
            out.extend_from_slice(b"\nendobj\n");
        }

        // Free entries fill any gap in the id range.
        let xref_start = out.len();
        let size = self.max_id + 1;
        out.extend_from_slice(format!("xref\n0 {}\n0000000000 65535 f \n", size).as_bytes());
        for id in 1..size {
            let entry = match offsets.get(&id) {
                Some(offset) => format!("{:010} 00000 n \n", offset),
                None => "0000000000 65535 f \n".to_string(),
            };
            out.extend_from_slice(entry.as_bytes());
        }

        out.extend_from_slice(b"trailer\n");
        encode::dictionary(&mut out, &dictionary! { "Size" => size as i64, "Root" => self.catalog_id });
        out.extend_from_slice(format!("\nstartxref\n{}\n%%EOF", xref_start).as_bytes());

        self.writer.write_all(&out)?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Object syntax for the subset of PDF an invoice page uses.
mod encode {
    use super::*;

    pub fn object(out: &mut Vec<u8>, obj: &Object) {
        match obj {
            Object::Null => out.extend_from_slice(b"null"),
            Object::Boolean(b) => out.extend_from_slice(b.to_string().as_bytes()),
            Object::Integer(i) => out.extend_from_slice(i.to_string().as_bytes()),
            Object::Real(r) => out.extend_from_slice(format!("{:.3}", r).as_bytes()),
            Object::Name(name) => {
                out.push(b'/');
                out.extend_from_slice(name);
            }
            Object::String(bytes, StringFormat::Literal) => {
                out.push(b'(');
                for &byte in bytes {
                    if matches!(byte, b'(' | b')' | b'\\') {
                        out.push(b'\\');
                    }
                    out.push(byte);
                }
                out.push(b')');
            }
            Object::String(bytes, StringFormat::Hexadecimal) => {
                out.push(b'<');
                for byte in bytes {
                    out.extend_from_slice(format!("{:02X}", byte).as_bytes());
                }
                out.push(b'>');
            }
            Object::Array(items) => {
                out.push(b'[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(b' ');
                    }
                    object(out, item);
                }
                out.push(b']');
            }
            Object::Dictionary(dict) => dictionary(out, dict),
            Object::Stream(stream) => {
                let mut dict = stream.dict.clone();
                dict.set("Length", stream.content.len() as i64);
                dictionary(out, &dict);
                out.extend_from_slice(b"\nstream\n");
                out.extend_from_slice(&stream.content);
                out.extend_from_slice(b"\nendstream");
            }
            Object::Reference(id) => out.extend_from_slice(format!("{} {} R", id.0, id.1).as_bytes()),
        }
    }

    /// Keys are written in sorted order.
    pub fn dictionary(out: &mut Vec<u8>, dict: &Dictionary) {
        let sorted: BTreeMap<_, _> = dict.iter().collect();
        out.extend_from_slice(b"<<");
        for (key, value) in sorted {
            out.push(b'/');
            out.extend_from_slice(key);
            out.push(b' ');
            object(out, value);
            out.push(b' ');
        }
        out.extend_from_slice(b">>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn empty_page_pdf() -> Vec<u8> {
        let mut writer =
            StreamingPdfWriter::new(Cursor::new(Vec::new()), "1.7", Dictionary::new()).unwrap();
        let content_id = writer.buffer_content_stream(Content { operations: vec![] }).unwrap();
        writer.buffer_page(content_id, 595.28, 841.89);
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_writer_output_is_loadable() {
        let bytes = empty_page_pdf();
        assert!(bytes.starts_with(b"%PDF-1.7"));
        assert!(bytes.ends_with(b"%%EOF"));
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_writer_is_deterministic() {
        assert_eq!(empty_page_pdf(), empty_page_pdf());
    }

    #[test]
    fn test_literal_strings_are_escaped() {
        let mut out = Vec::new();
        encode::object(&mut out, &Object::String(b"a(b)\\c".to_vec(), StringFormat::Literal));
        assert_eq!(out, b"(a\\(b\\)\\\\c)");
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let bytes = empty_page_pdf();
        let text = String::from_utf8_lossy(&bytes);
        let xref = text.find("xref\n").unwrap();
        let first_entry = text[xref..].lines().nth(3).unwrap();
        let offset: usize = first_entry[..10].parse().unwrap();
        assert!(bytes[offset..].starts_with(b"1 0 obj"));
    }
}
