pub use super::test_markdown_html;

mod backslash_escapes;
mod code_spans;
mod emphasis;
mod entities;
mod hard_breaks;
mod images;
mod indented_code;
mod link_reference_definitions;
mod links;
mod list_items;
mod lists;
mod raw_html;
mod setext_headings;
mod tabs;
mod thematic_breaks;
