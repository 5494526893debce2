use super::test_markdown_html;

#[test]
fn simple_code_block() {
    let original = "    a simple\n      indented code block\n";
    let expected = "<pre><code>a simple\n  indented code block\n</code></pre>\n";

    test_markdown_html(original, expected);
}

#[test]
fn contents_are_literal() {
    let original = "    <a/>\n    *hi*\n\n    - one\n";
    let expected = "<pre><code>&lt;a/&gt;\n*hi*\n\n- one\n</code></pre>\n";

    test_markdown_html(original, expected);
}

#[test]
fn blank_lines_inside() {
    let original = "    chunk1\n\n    chunk2\n  \n \n \n    chunk3\n";
    let expected = "<pre><code>chunk1\n\nchunk2\n\n\n\nchunk3\n</code></pre>\n";

    test_markdown_html(original, expected);
}

#[test]
fn extra_indent_is_content() {
    let original = "    chunk1\n      \n      chunk2\n";
    let expected = "<pre><code>chunk1\n  \n  chunk2\n</code></pre>\n";

    test_markdown_html(original, expected);
}

#[test]
fn cannot_interrupt_paragraph() {
    let original = "Foo\n    bar\n";
    let expected = "<p>Foo\nbar</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn paragraph_can_follow_immediately() {
    let original = "    foo\nbar\n";
    let expected = "<pre><code>foo\n</code></pre>\n<p>bar</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn only_four_columns_are_stripped() {
    let original = "        foo\n    bar\n";
    let expected = "<pre><code>    foo\nbar\n</code></pre>\n";

    test_markdown_html(original, expected);
}

#[test]
fn trailing_spaces_survive() {
    let original = "    foo  \n";
    let expected = "<pre><code>foo  \n</code></pre>\n";

    test_markdown_html(original, expected);
}
