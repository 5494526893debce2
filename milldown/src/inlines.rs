//! The second pass: inline markup inside paragraphs and headings.
//!
//! The leaf text is scanned once left to right into a token list: literal
//! text spans, fully rendered fragments (code spans, autolinks, raw HTML,
//! escaped characters, character references), bracket and emphasis
//! delimiter candidates, and line breaks. Brackets are resolved against
//! the raw source when their `]` is reached, emphasis delimiters are
//! paired with the CommonMark delimiter-run algorithm, and the final HTML
//! is the concatenation of the walked token list.

use crate::ast::RefDefs;
use crate::linklabel::normalize_label;
use crate::scanners::*;

use memchr::memchr;

use milldown_escape::{escape_href, escape_html};

/// Tracks the farthest in-text index of bytes where we have already failed
/// to scan a comment, declaration or CDATA, so the quadratic rescan on
/// pathological input is avoided.
#[derive(Clone, Debug, Default)]
pub(crate) struct HtmlScanGuard {
    pub cdata: usize,
    pub processing: usize,
    pub declaration: usize,
}

/// Renders the inline content of one leaf block to HTML.
pub(crate) fn render_inlines(text: &str, refdefs: &RefDefs) -> String {
    let mut parser = InlineParser::new(text, refdefs);
    parser.scan();
    parser.process_emphasis(0);
    parser.render(0, parser.toks.len())
}

enum Tok {
    /// Literal source text, HTML-escaped at render time.
    Text {
        start: usize,
        end: usize,
    },
    /// A rendered fragment, with a plain-text form for image alt text.
    Fragment {
        html: String,
        plain: String,
    },
    /// An unresolved `[` or `![`.
    Bracket {
        image: bool,
    },
    /// An emphasis delimiter run; `count` delimiters remain unconsumed.
    Delim {
        start: usize,
        c: u8,
        count: usize,
        orig: usize,
        can_open: bool,
        can_close: bool,
        open_tags: Vec<&'static str>,
        close_tags: Vec<&'static str>,
    },
    SoftBreak,
    HardBreak,
}

struct BracketEntry {
    tok: usize,
    image: bool,
    active: bool,
    /// length of the delimiter list when the bracket was pushed
    delim_bottom: usize,
    /// byte position just past the opening bracket
    source_pos: usize,
    /// another bracket opened inside this one (blocks shortcut lookup)
    bracket_inside: bool,
}

struct InlineParser<'a> {
    text: &'a str,
    refdefs: &'a RefDefs,
    toks: Vec<Tok>,
    /// token indices of emphasis delimiter runs, in source order
    delims: Vec<usize>,
    brackets: Vec<BracketEntry>,
    scan_guard: HtmlScanGuard,
}

impl<'a> InlineParser<'a> {
    fn new(text: &'a str, refdefs: &'a RefDefs) -> Self {
        InlineParser {
            text,
            refdefs,
            toks: Vec::new(),
            delims: Vec::new(),
            brackets: Vec::new(),
            scan_guard: HtmlScanGuard::default(),
        }
    }

    fn scan(&mut self) {
        let bytes = self.text.as_bytes();
        let mut ix = 0;
        let mut text_start = 0;
        while ix < bytes.len() {
            match bytes[ix] {
                b'`' => {
                    let n = scan_ch_repeat(&bytes[ix..], b'`');
                    if let Some(close) = self.find_code_span_close(ix + n, n) {
                        self.flush_text(text_start, ix);
                        self.push_code_span(ix + n, close);
                        ix = close + n;
                        text_start = ix;
                    } else {
                        ix += n;
                    }
                }
                b'<' => {
                    if let Some((end, html, plain)) = self.try_autolink(ix) {
                        self.flush_text(text_start, ix);
                        self.toks.push(Tok::Fragment { html, plain });
                        ix = end;
                        text_start = ix;
                    } else if let Some(end) = self.try_inline_html(ix) {
                        self.flush_text(text_start, ix);
                        self.toks.push(Tok::Fragment {
                            html: self.text[ix..end].to_owned(),
                            plain: String::new(),
                        });
                        ix = end;
                        text_start = ix;
                    } else {
                        ix += 1;
                    }
                }
                b'&' => match scan_entity(&bytes[ix..]) {
                    (n, Some(value)) => {
                        self.flush_text(text_start, ix);
                        let mut html = String::new();
                        escape_html(&mut html, &value).unwrap();
                        self.toks.push(Tok::Fragment {
                            html,
                            plain: value.into_owned(),
                        });
                        ix += n;
                        text_start = ix;
                    }
                    _ => ix += 1,
                },
                b'\\' => match bytes.get(ix + 1) {
                    Some(&c) if is_ascii_punctuation(c) => {
                        self.flush_text(text_start, ix);
                        let ch = &self.text[ix + 1..ix + 2];
                        let mut html = String::new();
                        escape_html(&mut html, ch).unwrap();
                        self.toks.push(Tok::Fragment {
                            html,
                            plain: ch.to_owned(),
                        });
                        ix += 2;
                        text_start = ix;
                    }
                    Some(&b'\n') => {
                        self.flush_text(text_start, ix);
                        self.toks.push(Tok::HardBreak);
                        ix += 2;
                        text_start = ix;
                    }
                    _ => ix += 1,
                },
                b'\n' => {
                    let trailing_spaces = scan_rev_while(&bytes[text_start..ix], |b| b == b' ');
                    let trailing_ws =
                        scan_rev_while(&bytes[text_start..ix], is_ascii_whitespace_no_nl);
                    self.flush_text(text_start, ix - trailing_ws);
                    if trailing_spaces >= 2 {
                        self.toks.push(Tok::HardBreak);
                    } else {
                        self.toks.push(Tok::SoftBreak);
                    }
                    ix += 1;
                    text_start = ix;
                }
                b'[' => {
                    self.flush_text(text_start, ix);
                    self.push_bracket(false, ix + 1);
                    ix += 1;
                    text_start = ix;
                }
                b'!' => {
                    if bytes.get(ix + 1) == Some(&b'[') {
                        self.flush_text(text_start, ix);
                        self.push_bracket(true, ix + 2);
                        ix += 2;
                        text_start = ix;
                    } else {
                        ix += 1;
                    }
                }
                b']' => {
                    self.flush_text(text_start, ix);
                    ix = self.close_bracket(ix);
                    text_start = ix;
                }
                b'*' | b'_' => {
                    let c = bytes[ix];
                    let n = scan_ch_repeat(&bytes[ix..], c);
                    self.flush_text(text_start, ix);
                    self.push_delim(ix, c, n);
                    ix += n;
                    text_start = ix;
                }
                _ => ix += 1,
            }
        }
        let trailing_ws = scan_rev_while(&bytes[text_start..], is_ascii_whitespace_no_nl);
        self.flush_text(text_start, bytes.len() - trailing_ws);
    }

    fn flush_text(&mut self, start: usize, end: usize) {
        if start < end {
            self.toks.push(Tok::Text { start, end });
        }
    }

    /// Finds the start of the matching closer: the next run of exactly
    /// `n` backticks.
    fn find_code_span_close(&self, mut scan: usize, n: usize) -> Option<usize> {
        let bytes = self.text.as_bytes();
        loop {
            let pos = memchr(b'`', &bytes[scan..])?;
            let run_start = scan + pos;
            let m = scan_ch_repeat(&bytes[run_start..], b'`');
            if m == n {
                return Some(run_start);
            }
            scan = run_start + m;
        }
    }

    fn push_code_span(&mut self, content_start: usize, content_end: usize) {
        let mut content: String = self.text[content_start..content_end]
            .chars()
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        if content.starts_with(' ')
            && content.ends_with(' ')
            && content.len() > 1
            && !content.bytes().all(|b| b == b' ')
        {
            content = content[1..content.len() - 1].to_owned();
        }
        let mut html = String::from("<code>");
        escape_html(&mut html, &content).unwrap();
        html.push_str("</code>");
        self.toks.push(Tok::Fragment {
            html,
            plain: content,
        });
    }

    fn try_autolink(&self, ix: usize) -> Option<(usize, String, String)> {
        if let Some((end, uri)) = scan_uri(self.text, ix + 1) {
            let mut html = String::from("<a href=\"");
            escape_href(&mut html, uri).unwrap();
            html.push_str("\">");
            escape_html(&mut html, uri).unwrap();
            html.push_str("</a>");
            return Some((end, html, uri.to_owned()));
        }
        if let Some((end, email)) = scan_email(self.text, ix + 1) {
            let mut html = String::from("<a href=\"mailto:");
            escape_href(&mut html, email).unwrap();
            html.push_str("\">");
            escape_html(&mut html, email).unwrap();
            html.push_str("</a>");
            return Some((end, html, email.to_owned()));
        }
        None
    }

    fn try_inline_html(&mut self, ix: usize) -> Option<usize> {
        let bytes = self.text.as_bytes();
        match bytes.get(ix + 1)? {
            b'!' => scan_inline_html_comment(bytes, ix + 2, &mut self.scan_guard),
            b'?' => scan_inline_html_processing(bytes, ix + 2, &mut self.scan_guard),
            _ => scan_html_block_inner(&bytes[ix..], true).map(|n| ix + n),
        }
    }

    fn push_bracket(&mut self, image: bool, source_pos: usize) {
        if let Some(top) = self.brackets.last_mut() {
            top.bracket_inside = true;
        }
        self.brackets.push(BracketEntry {
            tok: self.toks.len(),
            image,
            active: true,
            delim_bottom: self.delims.len(),
            source_pos,
            bracket_inside: false,
        });
        self.toks.push(Tok::Bracket { image });
    }

    fn push_delim(&mut self, ix: usize, c: u8, n: usize) {
        let char_before = self.text[..ix].chars().next_back().unwrap_or('\n');
        let char_after = self.text[ix + n..].chars().next().unwrap_or('\n');
        let ws_before = char_before.is_whitespace();
        let ws_after = char_after.is_whitespace();
        let punct_before = is_punctuation(char_before);
        let punct_after = is_punctuation(char_after);
        let left_flanking = !ws_after && (!punct_after || ws_before || punct_before);
        let right_flanking = !ws_before && (!punct_before || ws_after || punct_after);
        let (can_open, can_close) = if c == b'_' {
            (
                left_flanking && (!right_flanking || punct_before),
                right_flanking && (!left_flanking || punct_after),
            )
        } else {
            (left_flanking, right_flanking)
        };
        if !can_open && !can_close {
            self.toks.push(Tok::Text {
                start: ix,
                end: ix + n,
            });
            return;
        }
        self.delims.push(self.toks.len());
        self.toks.push(Tok::Delim {
            start: ix,
            c,
            count: n,
            orig: n,
            can_open,
            can_close,
            open_tags: Vec::new(),
            close_tags: Vec::new(),
        });
    }

    /// Handles a `]`: closes the innermost bracket as a link, image or
    /// literal text. Returns the position to continue scanning from.
    fn close_bracket(&mut self, ix: usize) -> usize {
        let Some(entry) = self.brackets.pop() else {
            self.toks.push(Tok::Text { start: ix, end: ix + 1 });
            return ix + 1;
        };
        if !entry.active {
            self.toks.push(Tok::Text { start: ix, end: ix + 1 });
            return ix + 1;
        }
        let bytes = self.text.as_bytes();

        // inline form: [text](dest "title")
        if bytes.get(ix + 1) == Some(&b'(') {
            if let Some((end, dest, title)) = self.scan_inline_link(ix + 1) {
                self.make_link_or_image(entry, &dest, &title);
                return end;
            }
        }

        // reference forms
        let mut label = None;
        let mut end = ix + 1;
        if bytes.get(ix + 1) == Some(&b'[') {
            if bytes.get(ix + 2) == Some(&b']') {
                // collapsed
                label = Some(self.text[entry.source_pos..ix].to_owned());
                end = ix + 3;
            } else if let Some((n, full)) =
                crate::linklabel::scan_link_label_rest(&self.text[ix + 2..], &|_| Some(0))
            {
                label = Some(full.into_owned());
                end = ix + 2 + n;
            } else if !entry.bracket_inside {
                label = Some(self.text[entry.source_pos..ix].to_owned());
            }
        } else if !entry.bracket_inside {
            // shortcut
            label = Some(self.text[entry.source_pos..ix].to_owned());
        }

        if let Some(label) = label {
            if !label.trim().is_empty() {
                if let Some(def) = self.refdefs.get(&normalize_label(&label)) {
                    let dest = def.dest.clone();
                    let title = def.title.clone().unwrap_or_default();
                    self.make_link_or_image(entry, &dest, &title);
                    return end;
                }
            }
        }

        // not a link; the opener stays literal
        self.toks.push(Tok::Text { start: ix, end: ix + 1 });
        ix + 1
    }

    /// Parses `(dest "title")` directly from the source, starting at the
    /// opening parenthesis. Returns the next byte offset, the unescaped
    /// destination, and the (possibly empty) title.
    fn scan_inline_link(&self, mut ix: usize) -> Option<(usize, String, String)> {
        let bytes = self.text.as_bytes();
        if scan_ch(&bytes[ix..], b'(') == 0 {
            return None;
        }
        ix += 1;
        ix += scan_while(&bytes[ix..], is_ascii_whitespace);

        let (dest_length, dest) = scan_link_dest(self.text, ix, LINK_MAX_NESTED_PARENS)?;
        let dest = unescape(dest).into_owned();
        ix += dest_length;

        let sep = scan_while(&bytes[ix..], is_ascii_whitespace);
        ix += sep;

        let title = if sep > 0 {
            if let Some((bytes_scanned, t)) = self.scan_link_title(ix) {
                ix += bytes_scanned;
                ix += scan_while(&bytes[ix..], is_ascii_whitespace);
                t
            } else {
                String::new()
            }
        } else {
            String::new()
        };
        if scan_ch(&bytes[ix..], b')') == 0 {
            return None;
        }
        Some((ix + 1, dest, title))
    }

    // returns (bytes scanned, title)
    fn scan_link_title(&self, start_ix: usize) -> Option<(usize, String)> {
        let text = self.text;
        let bytes = text.as_bytes();
        let open = match bytes.get(start_ix) {
            Some(b @ b'\'') | Some(b @ b'\"') | Some(b @ b'(') => *b,
            _ => return None,
        };
        let close = if open == b'(' { b')' } else { open };

        let mut title = String::new();
        let mut mark = start_ix + 1;
        let mut i = start_ix + 1;

        while i < bytes.len() {
            let c = bytes[i];

            if c == close {
                title.push_str(&text[mark..i]);
                return Some((i - start_ix + 1, title));
            }
            if c == open {
                return None;
            }
            if c == b'&' {
                if let (n, Some(value)) = scan_entity(&bytes[i..]) {
                    title.push_str(&text[mark..i]);
                    title.push_str(&value);
                    i += n;
                    mark = i;
                    continue;
                }
            }
            if c == b'\\' && i + 1 < bytes.len() && is_ascii_punctuation(bytes[i + 1]) {
                title.push_str(&text[mark..i]);
                i += 1;
                mark = i;
            }

            i += 1;
        }

        None
    }

    fn make_link_or_image(&mut self, entry: BracketEntry, dest: &str, title: &str) {
        self.process_emphasis(entry.delim_bottom);
        if entry.image {
            let plain = self.plain(entry.tok + 1, self.toks.len());
            let mut html = String::from("<img src=\"");
            escape_href(&mut html, dest).unwrap();
            html.push_str("\" alt=\"");
            escape_html(&mut html, &plain).unwrap();
            if !title.is_empty() {
                html.push_str("\" title=\"");
                escape_html(&mut html, title).unwrap();
            }
            html.push_str("\" />");
            self.toks.truncate(entry.tok);
            self.toks.push(Tok::Fragment { html, plain });
        } else {
            let mut open = String::from("<a href=\"");
            escape_href(&mut open, dest).unwrap();
            if !title.is_empty() {
                open.push_str("\" title=\"");
                escape_html(&mut open, title).unwrap();
            }
            open.push_str("\">");
            self.toks[entry.tok] = Tok::Fragment {
                html: open,
                plain: String::new(),
            };
            self.toks.push(Tok::Fragment {
                html: "</a>".to_owned(),
                plain: String::new(),
            });
            // no links inside links, anywhere up the chain
            for bracket in &mut self.brackets {
                if !bracket.image {
                    bracket.active = false;
                }
            }
        }
    }

    fn delim_info(&self, tok: usize) -> (u8, usize, usize, bool, bool) {
        match &self.toks[tok] {
            Tok::Delim {
                c,
                count,
                orig,
                can_open,
                can_close,
                ..
            } => (*c, *count, *orig, *can_open, *can_close),
            _ => panic!("delimiter token expected"),
        }
    }

    /// The delimiter-run pairing algorithm, over delimiters at list
    /// positions >= `bottom`. Delimiters inside a finished link or image
    /// can never pair with ones outside it, so the processed tail of the
    /// list is dropped afterwards.
    fn process_emphasis(&mut self, bottom: usize) {
        // openers_bottom, keyed by delimiter char, closer length mod 3,
        // and whether the closer can also open; holds token indices, which
        // stay stable when the delimiter list shrinks
        let mut bottoms = [0usize; 12];
        let mut i = bottom;
        while i < self.delims.len() {
            let closer_tok = self.delims[i];
            let (c, ccount, corig, ccan_open, ccan_close) = self.delim_info(closer_tok);
            if !ccan_close || ccount == 0 {
                i += 1;
                continue;
            }
            let key = usize::from(c == b'_') * 6 + usize::from(ccan_open) * 3 + corig % 3;

            let mut opener = None;
            let mut j = i;
            while j > bottom {
                j -= 1;
                let otok = self.delims[j];
                if otok < bottoms[key] {
                    // everything below already failed to pair with this
                    // kind of closer
                    break;
                }
                let (oc, ocount, oorig, ocan_open, ocan_close) = self.delim_info(otok);
                if oc != c || !ocan_open || ocount == 0 {
                    continue;
                }
                // the "multiple of three" rule
                let forbidden = (ccan_open || ocan_close)
                    && (oorig + corig) % 3 == 0
                    && !(oorig % 3 == 0 && corig % 3 == 0);
                if !forbidden {
                    opener = Some(j);
                    break;
                }
            }

            let Some(j) = opener else {
                bottoms[key] = closer_tok;
                i += 1;
                continue;
            };

            let opener_tok = self.delims[j];
            let (_, ocount, _, _, _) = self.delim_info(opener_tok);
            let take = if ocount >= 2 && ccount >= 2 { 2 } else { 1 };
            let (open_tag, close_tag) = if take == 2 {
                ("<strong>", "</strong>")
            } else {
                ("<em>", "</em>")
            };
            let mut opener_exhausted = false;
            let mut closer_exhausted = false;
            if let Tok::Delim {
                count, open_tags, ..
            } = &mut self.toks[opener_tok]
            {
                *count -= take;
                open_tags.push(open_tag);
                opener_exhausted = *count == 0;
            }
            if let Tok::Delim {
                count, close_tags, ..
            } = &mut self.toks[closer_tok]
            {
                *count -= take;
                close_tags.push(close_tag);
                closer_exhausted = *count == 0;
            }

            // delimiters between opener and closer can no longer match
            self.delims.drain(j + 1..i);
            let mut next = j + 1;
            if opener_exhausted {
                self.delims.remove(j);
                next -= 1;
            }
            if closer_exhausted {
                self.delims.remove(next);
            }
            i = next;
        }
        self.delims.truncate(bottom);
    }

    /// Renders a token range to HTML.
    fn render(&self, from: usize, to: usize) -> String {
        let mut out = String::new();
        for tok in &self.toks[from..to] {
            match tok {
                Tok::Text { start, end } => {
                    escape_html(&mut out, &self.text[*start..*end]).unwrap();
                }
                Tok::Fragment { html, .. } => out.push_str(html),
                Tok::Bracket { image } => out.push_str(if *image { "![" } else { "[" }),
                Tok::Delim {
                    start,
                    count,
                    open_tags,
                    close_tags,
                    ..
                } => {
                    for tag in close_tags {
                        out.push_str(tag);
                    }
                    out.push_str(&self.text[*start..*start + *count]);
                    for tag in open_tags.iter().rev() {
                        out.push_str(tag);
                    }
                }
                Tok::SoftBreak => out.push('\n'),
                Tok::HardBreak => out.push_str("<br />\n"),
            }
        }
        out
    }

    /// Renders a token range as plain text, for image alt attributes.
    fn plain(&self, from: usize, to: usize) -> String {
        let mut out = String::new();
        for tok in &self.toks[from..to] {
            match tok {
                Tok::Text { start, end } => out.push_str(&self.text[*start..*end]),
                Tok::Fragment { plain, .. } => out.push_str(plain),
                Tok::Bracket { image } => out.push_str(if *image { "![" } else { "[" }),
                Tok::Delim { start, count, .. } => {
                    out.push_str(&self.text[*start..*start + *count]);
                }
                Tok::SoftBreak | Tok::HardBreak => out.push(' '),
            }
        }
        out
    }
}
