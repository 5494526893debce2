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

//! HTML renderer that walks the block tree.

use std::io::{self, Write};

use crate::ast::{Block, ListItem, RefDefs};
use crate::inlines::render_inlines;
use crate::Document;

use milldown_escape::escape_html;

/// Renders a parsed document and pushes the HTML onto a `String`.
///
/// # Examples
///
/// ```
/// let doc = milldown::parse_document("hello\n=====\n\n* alpha\n* beta\n");
///
/// let mut html_buf = String::new();
/// milldown::html::push_html(&mut html_buf, &doc);
///
/// assert_eq!(html_buf, "<h1>hello</h1>\n<ul>\n<li>alpha</li>\n<li>beta</li>\n</ul>\n");
/// ```
pub fn push_html(s: &mut String, doc: &Document) {
    let renderer = HtmlRenderer {
        refdefs: &doc.refdefs,
    };
    for block in &doc.blocks {
        s.push_str(&renderer.render_block(block, false));
        s.push('\n');
    }
}

/// Renders a parsed document into an I/O stream.
///
/// **Note**: using this function with an unbuffered writer like a file or
/// socket will result in poor performance. Wrap these in a
/// [`BufWriter`](https://doc.rust-lang.org/std/io/struct.BufWriter.html) to
/// prevent unnecessary slowdowns.
pub fn write_html_io<W: Write>(mut writer: W, doc: &Document) -> io::Result<()> {
    let mut s = String::new();
    push_html(&mut s, doc);
    writer.write_all(s.as_bytes())
}

struct HtmlRenderer<'a> {
    refdefs: &'a RefDefs,
}

impl<'a> HtmlRenderer<'a> {
    /// Renders one block without a trailing newline. `tight` elides the
    /// paragraph wrapper inside tight list items.
    fn render_block(&self, block: &Block, tight: bool) -> String {
        match block {
            Block::ThematicBreak => "<hr />".to_owned(),
            Block::Heading { level, text } => {
                let inline = render_inlines(text, self.refdefs);
                format!("<h{}>{}</h{}>", level, inline, level)
            }
            Block::Paragraph { text } => {
                let inline = render_inlines(text, self.refdefs);
                if tight {
                    inline
                } else {
                    format!("<p>{}</p>", inline)
                }
            }
            Block::CodeBlock { info, literal } => {
                let mut out = String::from("<pre><code");
                if let Some(info) = info {
                    let lang = info.split_whitespace().next().unwrap_or("");
                    if !lang.is_empty() {
                        out.push_str(" class=\"language-");
                        escape_html(&mut out, lang).unwrap();
                        out.push('"');
                    }
                }
                out.push('>');
                escape_html(&mut out, literal).unwrap();
                out.push_str("</code></pre>");
                out
            }
            Block::BlockQuote(children) => {
                let mut out = String::from("<blockquote>\n");
                for child in children {
                    out.push_str(&self.render_block(child, false));
                    out.push('\n');
                }
                out.push_str("</blockquote>");
                out
            }
            Block::List {
                ordered,
                start,
                loose,
                items,
            } => {
                let mut out = String::new();
                if *ordered {
                    if *start != 1 {
                        out.push_str(&format!("<ol start=\"{}\">\n", start));
                    } else {
                        out.push_str("<ol>\n");
                    }
                } else {
                    out.push_str("<ul>\n");
                }
                for item in items {
                    out.push_str(&self.render_item(item, *loose));
                    out.push('\n');
                }
                out.push_str(if *ordered { "</ol>" } else { "</ul>" });
                out
            }
            Block::Html { literal } => literal.clone(),
        }
    }

    /// List items distinguish a leading paragraph, the list's looseness,
    /// and the shape of the remaining children.
    fn render_item(&self, item: &ListItem, loose: bool) -> String {
        let blocks = &item.blocks;
        if blocks.is_empty() {
            return "<li></li>".to_owned();
        }
        if let Block::Paragraph { text } = &blocks[0] {
            let inline = render_inlines(text, self.refdefs);
            let rest = &blocks[1..];
            let mut out = String::from("<li>");
            if loose {
                out.push_str("\n<p>");
                out.push_str(&inline);
                out.push_str("</p>\n");
            } else {
                out.push_str(&inline);
                if !rest.is_empty() {
                    out.push('\n');
                }
            }
            for child in rest {
                out.push_str(&self.render_block(child, !loose));
                out.push('\n');
            }
            out.push_str("</li>");
            out
        } else {
            let mut out = String::from("<li>\n");
            for (k, child) in blocks.iter().enumerate() {
                let rendered = self.render_block(child, !loose);
                out.push_str(&rendered);
                let last = k + 1 == blocks.len();
                let tight_paragraph = !loose && matches!(child, Block::Paragraph { .. });
                if !(last && tight_paragraph) {
                    out.push('\n');
                }
            }
            out.push_str("</li>");
            out
        }
    }
}
