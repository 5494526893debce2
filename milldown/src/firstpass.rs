//! The first pass resolves all block structure, generating the block tree.
//! Leaf content is stored raw; inline markup is handled at render time.
//!
//! Works line by line with an explicit stack of open containers. Each line
//! first has to match the markers of the open containers (quote markers,
//! item indentation), then may continue an open leaf, open new containers,
//! or open a new leaf, in that order.

use crate::ast::{Block, ListItem};
use crate::scanners::*;

/// Runs the first pass over the (refdef-filtered) line array.
pub(crate) fn parse_blocks(lines: &[String]) -> Vec<Block> {
    let mut parser = FirstPass::new();
    for line in lines {
        parser.incorporate(line);
    }
    parser.finish()
}

enum FrameKind {
    Root,
    Quote,
    List {
        ordered: bool,
        start: u64,
        delim: u8,
    },
    Item {
        indent: usize,
        began_blank: bool,
    },
}

/// Loose-classification inputs collected per item while it is open.
struct ItemMeta {
    ends_blank: bool,
    internal_blank: bool,
    para_count: usize,
}

struct Frame {
    kind: FrameKind,
    children: Vec<Block>,
    // populated on list frames only
    items: Vec<ListItem>,
    metas: Vec<ItemMeta>,
    last_line_blank: bool,
    last_child_ends_blank: bool,
    blank_before_child: bool,
    internal_blank: bool,
    para_count: usize,
}

impl Frame {
    fn new(kind: FrameKind) -> Frame {
        Frame {
            kind,
            children: Vec::new(),
            items: Vec::new(),
            metas: Vec::new(),
            last_line_blank: false,
            last_child_ends_blank: false,
            blank_before_child: false,
            internal_blank: false,
            para_count: 0,
        }
    }
}

enum HtmlEnd {
    /// Ends on a line containing the needle (conditions 1-5), which is
    /// part of the block.
    Tag(&'static str),
    /// Ends at the next blank line (conditions 6 and 7), which is not.
    Blank,
}

enum Leaf {
    Paragraph {
        text: String,
    },
    IndentedCode {
        content: String,
        /// blank lines that only survive if more code follows
        pending: String,
        trailing_blank: bool,
    },
    FencedCode {
        ch: u8,
        len: usize,
        indent: usize,
        info: String,
        content: String,
        closed: bool,
    },
    Html {
        end: HtmlEnd,
        content: String,
    },
}

struct FirstPass {
    stack: Vec<Frame>,
    leaf: Option<Leaf>,
}

impl FirstPass {
    fn new() -> FirstPass {
        FirstPass {
            stack: vec![Frame::new(FrameKind::Root)],
            leaf: None,
        }
    }

    fn incorporate(&mut self, line: &str) {
        let blank = self.incorporate_inner(line);
        let frame = self.stack.last_mut().unwrap();
        frame.last_line_blank = blank;
        if blank {
            frame.blank_before_child = true;
        }
    }

    /// Returns true when the line counts as blank for the container it
    /// ends up attributed to (the input to loose classification).
    fn incorporate_inner(&mut self, line: &str) -> bool {
        let bytes = line.as_bytes();
        let mut cursor = LineStart::new(bytes);

        // Match the markers of the open containers.
        let mut matched = 1;
        for ix in 1..self.stack.len() {
            match self.stack[ix].kind {
                FrameKind::Root => unreachable!(),
                FrameKind::Quote => {
                    let save = cursor.clone();
                    if cursor.scan_blockquote_marker() {
                        matched += 1;
                    } else {
                        cursor = save;
                        break;
                    }
                }
                FrameKind::List { .. } => {
                    matched += 1;
                }
                FrameKind::Item {
                    indent,
                    began_blank,
                } => {
                    if scan_blank_line(cursor.rest_bytes()).is_some() {
                        // A blank line matches the item, except when the
                        // item started with one and is still empty: an
                        // item can begin with at most one blank line.
                        let empty = began_blank
                            && self.stack[ix].children.is_empty()
                            && ix == self.stack.len() - 1
                            && self.leaf.is_none();
                        if empty {
                            break;
                        }
                        matched += 1;
                    } else {
                        let save = cursor.clone();
                        if cursor.scan_space(indent) {
                            matched += 1;
                        } else {
                            cursor = save;
                            break;
                        }
                    }
                }
            }
        }
        let all_matched = matched == self.stack.len();

        // Open verbatim leaves consume the line before anything else.
        if all_matched {
            match self.leaf {
                Some(Leaf::FencedCode { .. }) => return self.fenced_code_line(line, cursor),
                Some(Leaf::Html { .. }) => return self.html_line(line, cursor),
                Some(Leaf::IndentedCode { .. }) => {
                    if let Some(done) = self.indented_code_line(line, &mut cursor) {
                        return done;
                    }
                    // line ends the code block, keep going
                }
                _ => {}
            }
        }

        // Blank lines close paragraphs and unmatched containers.
        if scan_blank_line(cursor.rest_bytes()).is_some() {
            if !all_matched {
                self.close_to(matched);
            }
            if matches!(self.leaf, Some(Leaf::Paragraph { .. })) {
                self.close_leaf();
            }
            return true;
        }

        // Paragraph continuation, including lazily continued lines whose
        // container markers are missing.
        if let Some(Leaf::Paragraph { .. }) = self.leaf {
            if all_matched {
                let mut probe = cursor.clone();
                if probe.scan_space(4) {
                    self.append_paragraph_line(cursor, line);
                    return false;
                }
                if let Some((_, level)) = scan_setext_heading(probe.rest_bytes()) {
                    self.close_paragraph_as_heading(level);
                    return false;
                }
                if !scan_paragraph_interrupt(probe.rest_bytes(), true) {
                    self.append_paragraph_line(cursor, line);
                    return false;
                }
                // interrupted; the new block opens below
            } else {
                let mut probe = cursor.clone();
                let interrupt =
                    !probe.scan_space(4) && scan_paragraph_interrupt(probe.rest_bytes(), false);
                if !interrupt {
                    self.append_paragraph_line(cursor, line);
                    return false;
                }
                self.close_to(matched);
            }
        } else if !all_matched {
            self.close_to(matched);
        }

        // Open new containers.
        loop {
            if cursor.scan_blockquote_marker() {
                self.close_leaf();
                self.close_trailing_list();
                self.stack.push(Frame::new(FrameKind::Quote));
                continue;
            }
            if let Some((c, start, indent)) = cursor.scan_list_marker() {
                self.close_leaf();
                if let FrameKind::List { delim, .. } = self.stack.last().unwrap().kind {
                    if delim != c {
                        self.close_top();
                    }
                }
                if !matches!(self.stack.last().unwrap().kind, FrameKind::List { .. }) {
                    let ordered = c == b'.' || c == b')';
                    self.stack.push(Frame::new(FrameKind::List {
                        ordered,
                        start,
                        delim: c,
                    }));
                }
                let began_blank = scan_blank_line(cursor.rest_bytes()).is_some();
                self.stack.push(Frame::new(FrameKind::Item {
                    indent,
                    began_blank,
                }));
                if began_blank {
                    return false;
                }
                continue;
            }
            break;
        }

        // A freshly opened container may have nothing after its marker.
        if scan_blank_line(cursor.rest_bytes()).is_some() {
            return false;
        }

        // Open a new leaf, or extend the open paragraph.
        let html_rest = cursor.rest(line);
        let save = cursor.clone();
        if cursor.scan_space(4) {
            debug_assert!(!matches!(self.leaf, Some(Leaf::IndentedCode { .. })));
            if matches!(self.leaf, Some(Leaf::Paragraph { .. })) {
                // indented code cannot interrupt a paragraph
                self.append_paragraph_line(cursor, line);
            } else {
                self.close_trailing_list();
                let mut content = cursor.rest(line).into_owned();
                content.push('\n');
                self.leaf = Some(Leaf::IndentedCode {
                    content,
                    pending: String::new(),
                    trailing_blank: false,
                });
            }
            return false;
        }
        cursor = save;
        let indent = cursor.scan_space_upto(4);
        debug_assert!(indent < 4);
        let rest = cursor.rest_bytes();

        if scan_hrule(rest).is_ok() {
            self.close_leaf();
            self.close_trailing_list();
            self.append_block(Block::ThematicBreak, false);
            return false;
        }
        if let Some(level) = scan_atx_heading(rest) {
            self.close_leaf();
            self.close_trailing_list();
            let text = atx_heading_text(rest, level);
            self.append_block(Block::Heading { level, text }, false);
            return false;
        }
        if let Some((n, ch)) = scan_code_fence(rest) {
            self.close_leaf();
            self.close_trailing_list();
            let info_raw = std::str::from_utf8(&rest[n..]).unwrap().trim();
            let info = unescape(info_raw).into_owned();
            self.leaf = Some(Leaf::FencedCode {
                ch,
                len: n,
                indent,
                info,
                content: String::new(),
                closed: false,
            });
            return false;
        }
        if rest.first() == Some(&b'<') {
            let paragraph_open = matches!(self.leaf, Some(Leaf::Paragraph { .. }));
            let end = if let Some(end) = get_html_end_tag(&rest[1..]) {
                Some(HtmlEnd::Tag(end))
            } else if starts_html_block_type_6(&rest[1..]) {
                Some(HtmlEnd::Blank)
            } else if !paragraph_open && scan_html_type_7(rest).is_some() {
                Some(HtmlEnd::Blank)
            } else {
                None
            };
            if let Some(end) = end {
                self.close_leaf();
                self.close_trailing_list();
                let mut content = html_rest.into_owned();
                content.push('\n');
                let done = match end {
                    HtmlEnd::Tag(tag) => contains_ignore_ascii_case(rest, tag.as_bytes()),
                    HtmlEnd::Blank => false,
                };
                self.leaf = Some(Leaf::Html { end, content });
                if done {
                    self.close_leaf();
                }
                return false;
            }
        }

        if matches!(self.leaf, Some(Leaf::Paragraph { .. })) {
            self.append_paragraph_line(cursor, line);
        } else {
            self.close_trailing_list();
            let mut cursor = cursor.clone();
            cursor.scan_all_space();
            self.leaf = Some(Leaf::Paragraph {
                text: cursor.rest(line).into_owned(),
            });
        }
        false
    }

    /// Continuation line for an open fenced code block.
    fn fenced_code_line<'a>(&mut self, line: &'a str, cursor: LineStart<'a>) -> bool {
        let (ch, len, fence_indent) = match &self.leaf {
            Some(Leaf::FencedCode {
                ch, len, indent, ..
            }) => (*ch, *len, *indent),
            _ => unreachable!(),
        };
        let mut probe = cursor.clone();
        let close_indent = probe.scan_space_upto(4);
        let rest = probe.rest_bytes();
        if close_indent < 4
            && !rest.is_empty()
            && scan_closing_code_fence(rest, ch, len).is_some()
        {
            if let Some(Leaf::FencedCode { closed, .. }) = &mut self.leaf {
                *closed = true;
            }
            self.close_leaf();
            return false;
        }
        let mut cursor = cursor;
        let _ = cursor.scan_space_upto(fence_indent);
        let text = cursor.rest(line);
        if let Some(Leaf::FencedCode { content, .. }) = &mut self.leaf {
            content.push_str(&text);
            content.push('\n');
        }
        false
    }

    /// Continuation line for an open HTML block.
    fn html_line<'a>(&mut self, line: &'a str, cursor: LineStart<'a>) -> bool {
        let rest = cursor.rest(line);
        match &self.leaf {
            Some(Leaf::Html {
                end: HtmlEnd::Blank,
                ..
            }) => {
                if scan_blank_line(rest.as_bytes()).is_some() {
                    // the blank line ends the block without joining it
                    self.close_leaf();
                    return true;
                }
                if let Some(Leaf::Html { content, .. }) = &mut self.leaf {
                    content.push_str(&rest);
                    content.push('\n');
                }
                false
            }
            Some(Leaf::Html {
                end: HtmlEnd::Tag(tag),
                ..
            }) => {
                let done = contains_ignore_ascii_case(rest.as_bytes(), tag.as_bytes());
                if let Some(Leaf::Html { content, .. }) = &mut self.leaf {
                    content.push_str(&rest);
                    content.push('\n');
                }
                if done {
                    self.close_leaf();
                }
                false
            }
            _ => unreachable!(),
        }
    }

    /// Continuation line for an open indented code block. Returns `None`
    /// when the line ends the block instead.
    fn indented_code_line<'a>(&mut self, line: &'a str, cursor: &mut LineStart<'a>) -> Option<bool> {
        if scan_blank_line(cursor.rest_bytes()).is_some() {
            let mut probe = cursor.clone();
            let _ = probe.scan_space_upto(4);
            let text = probe.rest(line).into_owned();
            if let Some(Leaf::IndentedCode {
                pending,
                trailing_blank,
                ..
            }) = &mut self.leaf
            {
                pending.push_str(&text);
                pending.push('\n');
                *trailing_blank = true;
            }
            return Some(false);
        }
        let save = cursor.clone();
        if cursor.scan_space(4) {
            let text = cursor.rest(line).into_owned();
            if let Some(Leaf::IndentedCode {
                content,
                pending,
                trailing_blank,
            }) = &mut self.leaf
            {
                content.push_str(pending);
                pending.clear();
                content.push_str(&text);
                content.push('\n');
                *trailing_blank = false;
            }
            return Some(false);
        }
        *cursor = save;
        self.close_leaf();
        None
    }

    fn append_paragraph_line<'a>(&mut self, mut cursor: LineStart<'a>, line: &'a str) {
        cursor.scan_all_space();
        let rest = cursor.rest(line);
        if let Some(Leaf::Paragraph { text }) = &mut self.leaf {
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(&rest);
        } else {
            unreachable!();
        }
    }

    fn close_paragraph_as_heading(&mut self, level: u32) {
        if let Some(Leaf::Paragraph { text }) = self.leaf.take() {
            let text = text.trim_end().to_owned();
            self.append_block(Block::Heading { level, text }, false);
        } else {
            unreachable!();
        }
    }

    /// Closes the open leaf, if any, into the innermost frame.
    fn close_leaf(&mut self) {
        let Some(leaf) = self.leaf.take() else {
            return;
        };
        match leaf {
            Leaf::Paragraph { text } => {
                let text = text.trim_end().to_owned();
                debug_assert!(!text.is_empty());
                self.append_block(Block::Paragraph { text }, false);
            }
            Leaf::IndentedCode {
                content,
                trailing_blank,
                ..
            } => {
                self.append_block(
                    Block::CodeBlock {
                        info: None,
                        literal: content,
                    },
                    trailing_blank,
                );
            }
            Leaf::FencedCode {
                info,
                mut content,
                closed,
                ..
            } => {
                if !closed {
                    trim_trailing_blank_lines(&mut content);
                }
                let info = if info.is_empty() { None } else { Some(info) };
                self.append_block(
                    Block::CodeBlock {
                        info,
                        literal: content,
                    },
                    false,
                );
            }
            Leaf::Html { mut content, .. } => {
                if content.ends_with('\n') {
                    content.pop();
                }
                self.append_block(Block::Html { literal: content }, false);
            }
        }
    }

    /// Closes the innermost frame, appending the finished block to its
    /// parent.
    fn close_top(&mut self) {
        self.close_leaf();
        let frame = self.stack.pop().unwrap();
        match frame.kind {
            FrameKind::Root => unreachable!("root frame never closes"),
            FrameKind::Quote => {
                self.append_block(Block::BlockQuote(frame.children), false);
            }
            FrameKind::Item { .. } => {
                let ends_blank = frame.last_line_blank || frame.last_child_ends_blank;
                let parent = self.stack.last_mut().unwrap();
                debug_assert!(matches!(parent.kind, FrameKind::List { .. }));
                parent.items.push(ListItem {
                    blocks: frame.children,
                    loose: false,
                });
                parent.metas.push(ItemMeta {
                    ends_blank,
                    internal_blank: frame.internal_blank,
                    para_count: frame.para_count,
                });
            }
            FrameKind::List { ordered, start, .. } => {
                let mut items = frame.items;
                let n = items.len();
                let mut loose = false;
                for (k, (item, meta)) in items.iter_mut().zip(&frame.metas).enumerate() {
                    item.loose = meta.internal_blank
                        || meta.para_count >= 2
                        || (meta.ends_blank && k + 1 < n);
                    loose |= item.loose;
                }
                if loose {
                    for item in &mut items {
                        item.loose = true;
                    }
                }
                let ends_blank = frame.last_line_blank
                    || frame.metas.last().map_or(false, |m| m.ends_blank);
                self.append_block(
                    Block::List {
                        ordered,
                        start,
                        loose,
                        items,
                    },
                    ends_blank,
                );
            }
        }
    }

    fn close_to(&mut self, depth: usize) {
        while self.stack.len() > depth {
            self.close_top();
        }
    }

    /// A list cannot own non-item children; close it before appending
    /// anything else at its level.
    fn close_trailing_list(&mut self) {
        while matches!(self.stack.last().unwrap().kind, FrameKind::List { .. }) {
            self.close_top();
        }
    }

    fn append_block(&mut self, block: Block, ends_blank: bool) {
        let frame = self.stack.last_mut().unwrap();
        if !frame.children.is_empty() && frame.blank_before_child {
            frame.internal_blank = true;
        }
        frame.blank_before_child = false;
        if matches!(block, Block::Paragraph { .. }) {
            frame.para_count += 1;
        }
        frame.last_child_ends_blank = ends_blank;
        frame.children.push(block);
    }

    fn finish(mut self) -> Vec<Block> {
        self.close_to(1);
        self.close_leaf();
        self.stack.pop().unwrap().children
    }
}

/// Extracts the text of an ATX heading: everything after the opening run,
/// trimmed, with an optional closing run of `#` removed.
fn atx_heading_text(rest: &[u8], level: u32) -> String {
    let after = &rest[level as usize..];
    let text = std::str::from_utf8(after).unwrap().trim();
    let hashes = scan_rev_while(text.as_bytes(), |b| b == b'#');
    if hashes > 0 {
        let before = &text[..text.len() - hashes];
        if before.is_empty() {
            String::new()
        } else if before.ends_with(' ') || before.ends_with('\t') {
            before.trim_end().to_owned()
        } else {
            text.to_owned()
        }
    } else {
        text.to_owned()
    }
}

/// Removes trailing blank lines from unclosed fenced code content.
fn trim_trailing_blank_lines(content: &mut String) {
    loop {
        let without_nl = match content.strip_suffix('\n') {
            Some(s) => s,
            None => break,
        };
        let last_line_start = without_nl.rfind('\n').map(|p| p + 1).unwrap_or(0);
        if without_nl[last_line_start..].trim().is_empty() {
            content.truncate(last_line_start);
        } else {
            break;
        }
    }
}
