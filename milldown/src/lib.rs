// Copyright 2015 Google Inc. All rights reserved.
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! CommonMark to HTML, byte-for-byte compatible with the reference test
//! suite for the covered grammar.
//!
//! Parsing runs in two passes: a block pass that segments the line-oriented
//! input into a tree of block nodes while harvesting link reference
//! definitions, and an inline pass, run at render time, that turns the raw
//! text of paragraphs and headings into HTML.
//!
//! # Example
//! ```rust
//! let markdown_input = "Hello world, this is a *very simple* example.";
//!
//! let html_output = milldown::convert(markdown_input);
//!
//! assert_eq!(html_output, "<p>Hello world, this is a <em>very simple</em> example.</p>\n");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod html;

mod ast;
mod entities;
mod firstpass;
mod inlines;
mod linklabel;
mod puncttable;
mod refdef;
mod scanners;

pub use crate::ast::{Block, LinkDef, ListItem, RefDefs};

/// A parsed document: the block tree plus the harvested reference map.
/// Both live only as long as the document; nothing is cached across
/// parses.
#[derive(Debug)]
pub struct Document {
    pub(crate) blocks: Vec<Block>,
    pub(crate) refdefs: RefDefs,
}

impl Document {
    /// The top-level blocks, in source order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The link reference definitions, keyed by normalized label.
    pub fn reference_definitions(&self) -> &RefDefs {
        &self.refdefs
    }
}

/// Parses a CommonMark document into its block tree.
///
/// CR and CRLF line endings are normalized to LF. All input is accepted;
/// there is no error case.
pub fn parse_document(input: &str) -> Document {
    let normalized;
    let input = if input.contains('\r') {
        normalized = input.replace("\r\n", "\n").replace('\r', "\n");
        normalized.as_str()
    } else {
        input
    };
    let mut lines: Vec<String> = input.split('\n').map(str::to_owned).collect();
    // a trailing newline terminates the last line rather than opening a
    // blank one
    if lines.last().map_or(false, |l| l.is_empty()) {
        lines.pop();
    }
    let (lines, refdefs) = refdef::extract_refdefs(lines);
    let blocks = firstpass::parse_blocks(&lines);
    Document { blocks, refdefs }
}

/// Converts a CommonMark document to an HTML fragment.
///
/// The output is terminated by a newline when the input produces at least
/// one block, and is empty otherwise.
pub fn convert(input: &str) -> String {
    let doc = parse_document(input);
    let mut out = String::new();
    html::push_html(&mut out, &doc);
    out
}
