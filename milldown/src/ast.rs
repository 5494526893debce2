//! The block tree produced by the first pass and consumed by the renderer.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::linklabel::LinkLabel;

/// A block-level node. Leaf content is kept as raw text; inline
/// processing happens at render time and never touches code or HTML
/// blocks.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Block {
    ThematicBreak,
    Heading {
        level: u32,
        text: String,
    },
    Paragraph {
        text: String,
    },
    /// `info` is the decoded info string of a fenced block; `None` for
    /// indented code. `literal` ends with a newline when non-empty.
    CodeBlock {
        info: Option<String>,
        literal: String,
    },
    BlockQuote(Vec<Block>),
    List {
        ordered: bool,
        start: u64,
        loose: bool,
        items: Vec<ListItem>,
    },
    /// Raw HTML, emitted verbatim by the renderer.
    Html {
        literal: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ListItem {
    pub blocks: Vec<Block>,
    pub loose: bool,
}

/// A link reference definition: destination plus optional title, both
/// already unescaped.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkDef {
    pub dest: String,
    pub title: Option<String>,
}

/// The reference map harvested by the definition extractor. Keys are
/// normalized labels; the first definition for a key wins.
#[derive(Debug, Default)]
pub struct RefDefs(HashMap<LinkLabel, LinkDef>);

impl RefDefs {
    pub(crate) fn insert(&mut self, label: LinkLabel, def: LinkDef) {
        self.0.entry(label).or_insert(def);
    }

    pub(crate) fn get(&self, label: &LinkLabel) -> Option<&LinkDef> {
        self.0.get(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
