//! The first textual pass: harvesting link reference definitions.
//!
//! Walks the raw line array before block parsing, collecting every line
//! run that legally forms a `[label]: destination "title"` definition and
//! removing it from the array. A small per-line state machine keeps the
//! pass out of fenced code, HTML blocks, open paragraphs and list item
//! continuations, so block structure is left undisturbed.

use std::borrow::Cow;

use crate::ast::{LinkDef, RefDefs};
use crate::linklabel::{normalize_label, scan_link_label_rest};
use crate::scanners::*;

/// End condition for an HTML block region the extractor must skip.
enum HtmlRegion {
    /// Ends on a line containing the given needle (conditions 1-5).
    EndTag(&'static str),
    /// Ends at the next blank line (conditions 6 and 7).
    Blank,
}

struct Extractor {
    out: Vec<String>,
    defs: RefDefs,
    /// Open fence: character, length and quote depth at the opening line.
    fence: Option<(u8, usize, usize)>,
    html: Option<(HtmlRegion, usize)>,
    paragraph_open: bool,
    in_list: bool,
    prev_depth: usize,
}

/// Removes every link reference definition from `lines`, returning the
/// surviving lines and the harvested map. First definition wins.
pub(crate) fn extract_refdefs(lines: Vec<String>) -> (Vec<String>, RefDefs) {
    let mut ex = Extractor {
        out: Vec::with_capacity(lines.len()),
        defs: RefDefs::default(),
        fence: None,
        html: None,
        paragraph_open: false,
        in_list: false,
        prev_depth: 0,
    };

    let mut i = 0;
    while i < lines.len() {
        i += ex.step(&lines, i);
    }
    (ex.out, ex.defs)
}

impl Extractor {
    /// Processes the line at `i`, returning how many lines were consumed.
    fn step(&mut self, lines: &[String], i: usize) -> usize {
        let line = &lines[i];
        let (depth, content) = strip_quote_prefixes(line);

        // Verbatim regions first: their content never opens a definition.
        if let Some((ch, len, fence_depth)) = self.fence {
            if depth < fence_depth {
                self.fence = None;
            } else {
                self.out.push(line.clone());
                let bytes = content.as_bytes();
                let (_, spaces) = calc_indent(bytes, 4);
                if spaces < 4 {
                    let (n, _) = calc_indent(bytes, 3);
                    if scan_closing_code_fence(&bytes[n..], ch, len).is_some() {
                        self.fence = None;
                    }
                }
                return 1;
            }
        }
        if let Some((region, html_depth)) = &self.html {
            if depth >= *html_depth {
                let done = match region {
                    HtmlRegion::EndTag(end) => {
                        contains_ignore_ascii_case(content.as_bytes(), end.as_bytes())
                    }
                    HtmlRegion::Blank => scan_blank_line(content.as_bytes()).is_some(),
                };
                if done {
                    self.html = None;
                    if scan_blank_line(content.as_bytes()).is_some() {
                        // a blank terminator is not part of the block
                        return self.step_plain(lines, i, depth, &content);
                    }
                }
                self.out.push(line.clone());
                return 1;
            }
            self.html = None;
        }

        self.step_plain(lines, i, depth, &content)
    }

    fn step_plain(&mut self, lines: &[String], i: usize, depth: usize, content: &str) -> usize {
        let bytes = content.as_bytes();

        if depth > self.prev_depth {
            // a fresh quote level is a fresh paragraph position
            self.paragraph_open = false;
        }
        self.prev_depth = depth;

        if scan_blank_line(bytes).is_some() {
            self.paragraph_open = false;
            self.out.push(lines[i].clone());
            return 1;
        }

        let (n_indent, spaces) = calc_indent(bytes, 4);
        if spaces >= 4 {
            // indented code or paragraph continuation, never a definition
            self.out.push(lines[i].clone());
            return 1;
        }
        let rest = &bytes[n_indent..];

        if let Some((len, ch)) = scan_code_fence(rest) {
            self.fence = Some((ch, len, depth));
            self.paragraph_open = false;
            self.in_list = false;
            self.out.push(lines[i].clone());
            return 1;
        }
        if scan_atx_heading(rest).is_some()
            || scan_hrule(rest).is_ok()
            || (self.paragraph_open && scan_setext_heading(rest).is_some())
        {
            self.paragraph_open = false;
            self.out.push(lines[i].clone());
            return 1;
        }
        if rest.first() == Some(&b'<') {
            let region = if let Some(end) = get_html_end_tag(&rest[1..]) {
                Some(HtmlRegion::EndTag(end))
            } else if starts_html_block_type_6(&rest[1..]) {
                Some(HtmlRegion::Blank)
            } else if !self.paragraph_open && scan_html_type_7(rest).is_some() {
                Some(HtmlRegion::Blank)
            } else {
                None
            };
            if let Some(region) = region {
                let done = match &region {
                    // conditions 1-5 may end on their own opening line
                    HtmlRegion::EndTag(end) => contains_ignore_ascii_case(rest, end.as_bytes()),
                    HtmlRegion::Blank => false,
                };
                if !done {
                    self.html = Some((region, depth));
                }
                self.paragraph_open = false;
                self.in_list = false;
                self.out.push(lines[i].clone());
                return 1;
            }
        }
        if let Some((ix, _, _, _)) = scan_listitem(rest) {
            self.in_list = true;
            self.paragraph_open = scan_blank_line(&rest[ix..]).is_none();
            self.out.push(lines[i].clone());
            return 1;
        }

        if spaces == 0 {
            self.in_list = false;
        }

        let legal = !self.paragraph_open
            && !(self.in_list && spaces >= 1)
            && rest.first() == Some(&b'[');
        if legal {
            if let Some(consumed) = self.try_definition(lines, i, depth, n_indent) {
                self.paragraph_open = false;
                return consumed;
            }
        }

        self.paragraph_open = true;
        self.out.push(lines[i].clone());
        1
    }

    /// Attempts to parse a definition starting at line `i`. On success the
    /// consumed lines are replaced by empty quote continuations (when a
    /// quote prefix was present) and the definition is recorded.
    fn try_definition(
        &mut self,
        lines: &[String],
        i: usize,
        depth: usize,
        n_indent: usize,
    ) -> Option<usize> {
        // Gather the candidate region: same quote depth, no blank lines.
        let mut region = String::new();
        let mut region_lines = 0;
        for line in &lines[i..] {
            let (d, content) = strip_quote_prefixes(line);
            if region_lines > 0 && (d != depth || scan_blank_line(content.as_bytes()).is_some()) {
                break;
            }
            if region_lines > 0 {
                region.push('\n');
                region.push_str(&content);
            } else {
                region.push_str(&content[n_indent..]);
            }
            region_lines += 1;
        }

        let (bytes_consumed, label, def) = scan_refdef(&region)?;
        let lines_consumed = region[..bytes_consumed].matches('\n').count() + 1;
        self.defs.insert(label, def);
        for _ in 0..lines_consumed {
            if depth > 0 {
                self.out.push(">".repeat(depth));
            }
        }
        Some(lines_consumed)
    }
}

/// Strips leading `> ` block quote markers, returning how many were
/// consumed and the remaining content with partial tabs expanded.
fn strip_quote_prefixes(line: &str) -> (usize, Cow<'_, str>) {
    let mut ls = LineStart::new(line.as_bytes());
    let mut depth = 0;
    while ls.scan_blockquote_marker() {
        depth += 1;
    }
    (depth, ls.rest(line))
}

/// Parses one complete definition at the start of `text` (which holds the
/// candidate lines joined by newlines, container prefixes stripped).
/// Returns bytes consumed, the normalized label, and the definition.
fn scan_refdef(text: &str) -> Option<(usize, unicase::UniCase<String>, LinkDef)> {
    let bytes = text.as_bytes();
    if scan_ch(bytes, b'[') == 0 {
        return None;
    }
    let (label_bytes, label) = scan_link_label_rest(&text[1..], &|bytes| {
        // a label may span a line break as long as the next line could
        // not start a block of its own
        let (n, spaces) = calc_indent(bytes, 4);
        if spaces >= 4 {
            return Some(n);
        }
        if scan_paragraph_interrupt(&bytes[n..], true)
            || scan_setext_heading(&bytes[n..]).is_some()
        {
            None
        } else {
            Some(n)
        }
    })?;
    let mut i = 1 + label_bytes;
    if scan_ch(&bytes[i..], b':') == 0 {
        return None;
    }
    i += 1;

    // whitespace between label and url (including up to one newline)
    let (mut i, _newlines) = scan_refdef_space(bytes, i)?;

    // scan link dest
    let (dest_length, dest) = scan_link_dest(text, i, LINK_MAX_NESTED_PARENS)?;
    if dest_length == 0 {
        return None;
    }
    let dest = unescape(dest).into_owned();
    i += dest_length;

    // no title
    let mut backup = (
        i,
        normalize_label(&label),
        LinkDef { dest, title: None },
    );

    // scan whitespace between dest and title
    let (i, newlines) = if let Some((new_i, mut newlines)) = scan_refdef_space(bytes, i) {
        if i == text.len() {
            newlines += 1;
        }
        if new_i == i && newlines == 0 {
            return None;
        }
        if newlines > 1 {
            return Some(backup);
        }
        (new_i, newlines)
    } else {
        return Some(backup);
    };

    // scan title
    // if this fails but newline == 1, return also a refdef without title
    if let Some((title_length, title)) = scan_refdef_title(&text[i..]) {
        if scan_blank_line(&bytes[i + title_length..]).is_some() {
            backup.0 = i + title_length;
            backup.2.title = Some(unescape(&title).into_owned());
            return Some(backup);
        }
    }
    if newlines > 0 {
        Some(backup)
    } else {
        None
    }
}

/// Returns number of bytes and number of newlines
fn scan_refdef_space(bytes: &[u8], mut i: usize) -> Option<(usize, usize)> {
    let mut newlines = 0;
    loop {
        let whitespaces = scan_whitespace_no_nl(&bytes[i..]);
        i += whitespaces;
        if i == bytes.len() {
            // the end of the candidate region ends the line
            newlines += 1;
            break;
        }
        if let Some(eol_bytes) = scan_eol(&bytes[i..]) {
            i += eol_bytes;
            newlines += 1;
            if newlines > 1 {
                return None;
            }
        } else {
            break;
        }
        let (n, spaces) = calc_indent(&bytes[i..], 4);
        if spaces < 4
            && (scan_paragraph_interrupt(&bytes[i + n..], true)
                || scan_setext_heading(&bytes[i + n..]).is_some())
        {
            return None;
        }
        i += n;
    }
    Some((i, newlines))
}

// returns (bytelength, title_str)
fn scan_refdef_title(text: &str) -> Option<(usize, Cow<'_, str>)> {
    let bytes = text.as_bytes();
    let closing_delim = match bytes.first()? {
        b'\'' => b'\'',
        b'"' => b'"',
        b'(' => b')',
        _ => return None,
    };
    let mut bytecount = 1;
    let mut linestart = 1;

    let mut linebuf: Option<String> = None;

    while let Some(&c) = bytes.get(bytecount) {
        match c {
            b'(' if closing_delim == b')' => {
                // parenthesized titles may contain ( or ) only when
                // backslash-escaped
                return None;
            }
            b'\n' => {
                let linebuf = if let Some(linebuf) = &mut linebuf {
                    linebuf
                } else {
                    linebuf = Some(String::new());
                    linebuf.as_mut().unwrap()
                };
                linebuf.push_str(&text[linestart..bytecount]);
                linebuf.push('\n');
                bytecount += 1;
                let (n, spaces) = calc_indent(&bytes[bytecount..], 4);
                if spaces < 4
                    && (scan_paragraph_interrupt(&bytes[bytecount + n..], true)
                        || scan_setext_heading(&bytes[bytecount + n..]).is_some())
                {
                    return None;
                }
                bytecount += n;
                bytecount += scan_whitespace_no_nl(&bytes[bytecount..]);
                linestart = bytecount;
                if scan_blank_line(&bytes[bytecount..]).is_some() {
                    // blank line - not allowed
                    return None;
                }
            }
            b'\\' => {
                bytecount += 1;
                if let Some(c) = bytes.get(bytecount) {
                    if *c != b'\n' {
                        bytecount += 1;
                    }
                }
            }
            c if c == closing_delim => {
                let cow = if let Some(mut linebuf) = linebuf {
                    linebuf.push_str(&text[linestart..bytecount]);
                    Cow::from(linebuf)
                } else {
                    Cow::from(&text[linestart..bytecount])
                };
                return Some((bytecount + 1, cow));
            }
            _ => {
                bytecount += 1;
            }
        }
    }
    None
}
