//! Byte-exact PDF file assembly
//!
//! Objects are serialized to their final bytes first; offsets are computed
//! afterwards by walking the concatenation. The two steps never interleave.

use crate::{PdfError, Result};

/// File header: version line plus a binary marker comment
pub const PDF_HEADER: &[u8] = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n";

/// Length of every cross-reference entry, line terminator included
pub const XREF_ENTRY_LEN: usize = 20;

/// Body of an indirect object
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectBody {
    /// A dictionary, already written as `<< ... >>`
    Dictionary(String),
    /// A stream; `/Length` is added when serializing
    Stream {
        /// Extra dictionary entries, e.g. `/Filter /FlateDecode`
        entries: String,
        /// Raw stream bytes
        data: Vec<u8>,
    },
}

/// An indirect object with its 1-based id (generation is always 0)
#[derive(Debug, Clone, PartialEq)]
pub struct IndirectObject {
    pub id: u32,
    pub body: ObjectBody,
}

impl IndirectObject {
    /// Create a dictionary object
    pub fn dictionary(id: u32, dictionary: impl Into<String>) -> Self {
        Self {
            id,
            body: ObjectBody::Dictionary(dictionary.into()),
        }
    }

    /// Create a stream object
    pub fn stream(id: u32, entries: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id,
            body: ObjectBody::Stream {
                entries: entries.into(),
                data,
            },
        }
    }

    /// Serialize to `<id> 0 obj ... endobj\n`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = format!("{} 0 obj\n", self.id).into_bytes();
        match &self.body {
            ObjectBody::Dictionary(dict) => {
                out.extend_from_slice(dict.as_bytes());
                out.push(b'\n');
            }
            ObjectBody::Stream { entries, data } => {
                let dict = if entries.is_empty() {
                    format!("<< /Length {} >>", data.len())
                } else {
                    format!("<< /Length {} {} >>", data.len(), entries)
                };
                out.extend_from_slice(dict.as_bytes());
                out.extend_from_slice(b"\nstream\n");
                out.extend_from_slice(data);
                out.extend_from_slice(b"\nendstream\n");
            }
        }
        out.extend_from_slice(b"endobj\n");
        out
    }
}

/// Trailer references
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trailer {
    /// Catalog object id
    pub root: u32,
    /// Document information dictionary id
    pub info: Option<u32>,
}

/// A fully assembled file together with its bookkeeping
#[derive(Debug, Clone)]
pub struct AssembledPdf {
    /// Complete file bytes
    pub bytes: Vec<u8>,
    /// Byte offset of object `i + 1`
    pub offsets: Vec<usize>,
    /// Byte offset of the `xref` keyword
    pub xref_offset: usize,
}

/// Format one cross-reference entry (always [`XREF_ENTRY_LEN`] bytes)
pub fn xref_entry(offset: usize, generation: u16, in_use: bool) -> String {
    let flag = if in_use { 'n' } else { 'f' };
    format!("{offset:010} {generation:05} {flag} \n")
}

/// Assemble header, objects, cross-reference table and trailer
///
/// Object ids must run from 1 to `objects.len()` in order so a single xref
/// subsection can index them.
pub fn assemble(objects: &[IndirectObject], trailer: Trailer) -> Result<AssembledPdf> {
    for (idx, object) in objects.iter().enumerate() {
        let expected = idx as u32 + 1;
        if object.id != expected {
            return Err(PdfError::InvalidObjectGraph(format!(
                "object at position {idx} has id {}, expected {expected}",
                object.id
            )));
        }
    }
    let count = objects.len() as u32;
    for id in std::iter::once(trailer.root).chain(trailer.info) {
        if id == 0 || id > count {
            return Err(PdfError::InvalidObjectGraph(format!(
                "trailer references missing object {id}"
            )));
        }
    }

    // 1. Serialize every object
    let serialized: Vec<Vec<u8>> = objects.iter().map(IndirectObject::to_bytes).collect();

    // 2. Offsets from the concatenation
    let mut offsets = Vec::with_capacity(serialized.len());
    let mut position = PDF_HEADER.len();
    for body in &serialized {
        offsets.push(position);
        position += body.len();
    }
    let xref_offset = position;

    // 3. Concatenate
    let mut bytes = Vec::with_capacity(position + (objects.len() + 1) * XREF_ENTRY_LEN + 128);
    bytes.extend_from_slice(PDF_HEADER);
    for body in &serialized {
        bytes.extend_from_slice(body);
    }

    bytes.extend_from_slice(format!("xref\n0 {}\n", count + 1).as_bytes());
    bytes.extend_from_slice(xref_entry(0, 65535, false).as_bytes());
    for offset in &offsets {
        bytes.extend_from_slice(xref_entry(*offset, 0, true).as_bytes());
    }

    let mut trailer_dict = format!("<< /Size {} /Root {} 0 R", count + 1, trailer.root);
    if let Some(info) = trailer.info {
        trailer_dict.push_str(&format!(" /Info {info} 0 R"));
    }
    trailer_dict.push_str(" >>");
    bytes.extend_from_slice(
        format!("trailer\n{trailer_dict}\nstartxref\n{xref_offset}\n%%EOF\n").as_bytes(),
    );

    log::debug!(
        "assembled PDF: {} objects, {} bytes, xref at {}",
        count,
        bytes.len(),
        xref_offset
    );

    Ok(AssembledPdf {
        bytes,
        offsets,
        xref_offset,
    })
}
