//! Incremental top-level element stream.
//!
//! [`ElementStream`] pulls XML events from any `BufRead` and yields each
//! completed direct child of the document root as a self-contained snippet,
//! re-wrapped in the root's start tag so namespace declarations made on the
//! root stay resolvable. Only one element is held in memory at a time; the
//! dispatcher consumes each snippet fully before the next is produced.

use std::io::BufRead;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{ExtractError, Result};

/// Pull parser over the top-level elements of one XML document.
pub struct ElementStream<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    /// Rendered root start tag, captured when the root opens.
    root_start: Vec<u8>,
    /// Rendered root end tag.
    root_end: Vec<u8>,
    /// Number of currently open elements (root included).
    depth: usize,
    done: bool,
}

impl<R: BufRead> ElementStream<R> {
    /// Create a stream over a reader positioned at the start of a document.
    pub fn new(source: R) -> Self {
        Self {
            reader: Reader::from_reader(source),
            buf: Vec::new(),
            root_start: Vec::new(),
            root_end: Vec::new(),
            depth: 0,
            done: false,
        }
    }

    /// Produce the next top-level element snippet, or `None` at end of
    /// document.
    fn next_snippet(&mut self) -> Result<Option<String>> {
        // Bytes of the element currently being captured, already prefixed
        // with the root start tag. None while between top-level elements.
        let mut capture: Option<Vec<u8>> = None;

        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(e) => {
                    if self.depth == 0 {
                        self.root_start = render_open(&e, false);
                        self.root_end = render_close(e.name().as_ref());
                    } else if self.depth == 1 {
                        let mut snippet = self.root_start.clone();
                        snippet.extend_from_slice(&render_open(&e, false));
                        capture = Some(snippet);
                    } else if let Some(cap) = capture.as_mut() {
                        cap.extend_from_slice(&render_open(&e, false));
                    }
                    self.depth += 1;
                }
                Event::Empty(e) => {
                    if self.depth == 1 {
                        let mut snippet = self.root_start.clone();
                        snippet.extend_from_slice(&render_open(&e, true));
                        snippet.extend_from_slice(&self.root_end);
                        return Ok(Some(into_utf8(snippet)?));
                    }
                    if let Some(cap) = capture.as_mut() {
                        cap.extend_from_slice(&render_open(&e, true));
                    }
                }
                Event::End(e) => {
                    self.depth = self.depth.saturating_sub(1);
                    if self.depth >= 1 {
                        if let Some(cap) = capture.as_mut() {
                            cap.extend_from_slice(&render_close(&e));
                        }
                        if self.depth == 1 {
                            if let Some(mut snippet) = capture.take() {
                                snippet.extend_from_slice(&self.root_end);
                                return Ok(Some(into_utf8(snippet)?));
                            }
                        }
                    }
                }
                Event::Text(t) => {
                    if let Some(cap) = capture.as_mut() {
                        cap.extend_from_slice(&t);
                    }
                }
                Event::CData(t) => {
                    if let Some(cap) = capture.as_mut() {
                        cap.extend_from_slice(b"<![CDATA[");
                        cap.extend_from_slice(&t);
                        cap.extend_from_slice(b"]]>");
                    }
                }
                Event::Eof => {
                    if self.depth > 0 {
                        return Err(ExtractError::UnexpectedEof { open: self.depth });
                    }
                    self.done = true;
                    return Ok(None);
                }
                // Declaration, comments, processing instructions and
                // doctype carry no extractable content.
                _ => {}
            }
        }
    }
}

impl<R: BufRead> Iterator for ElementStream<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_snippet() {
            Ok(Some(snippet)) => Some(Ok(snippet)),
            Ok(None) => None,
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// Render a start or self-closing tag from its raw inner bytes.
fn render_open(inner: &[u8], self_closing: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(inner.len() + 3);
    out.push(b'<');
    out.extend_from_slice(inner);
    if self_closing {
        out.push(b'/');
    }
    out.push(b'>');
    out
}

/// Render a closing tag from a tag name.
fn render_close(name: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(name.len() + 3);
    out.extend_from_slice(b"</");
    out.extend_from_slice(name);
    out.push(b'>');
    out
}

fn into_utf8(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|_| ExtractError::NonUtf8)
}
