use super::test_markdown_html;

#[test]
fn simple_headings() {
    let original = "Foo *bar*\n=========\n\nFoo *bar*\n---------\n";
    let expected = "<h1>Foo <em>bar</em></h1>\n<h2>Foo <em>bar</em></h2>\n";

    test_markdown_html(original, expected);
}

#[test]
fn content_may_span_lines() {
    let original = "Foo *bar\nbaz*\n====\n";
    let expected = "<h1>Foo <em>bar\nbaz</em></h1>\n";

    test_markdown_html(original, expected);
}

#[test]
fn underline_length_is_free() {
    let original = "Foo\n-------------------------\n\nFoo\n=\n";
    let expected = "<h2>Foo</h2>\n<h1>Foo</h1>\n";

    test_markdown_html(original, expected);
}

#[test]
fn content_indent_is_free() {
    let original = "   Foo\n---\n";
    let expected = "<h2>Foo</h2>\n";

    test_markdown_html(original, expected);
}

#[test]
fn four_spaces_is_code() {
    let original = "    Foo\n    ---\n\n    Foo\n---\n";
    let expected = "<pre><code>Foo\n---\n\nFoo\n</code></pre>\n<hr />\n";

    test_markdown_html(original, expected);
}

#[test]
fn underline_cannot_contain_interior_spaces() {
    let original = "Foo\n= =\n\nFoo\n--- -\n";
    let expected = "<p>Foo\n= =</p>\n<p>Foo</p>\n<hr />\n";

    test_markdown_html(original, expected);
}

#[test]
fn multiline_content_then_paragraph() {
    let original = "Foo\nbar\n---\nbaz\n";
    let expected = "<h2>Foo\nbar</h2>\n<p>baz</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn lazy_line_is_not_an_underline() {
    let original = "> foo\nbar\n===\n";
    let expected = "<blockquote>\n<p>foo\nbar\n===</p>\n</blockquote>\n";

    test_markdown_html(original, expected);
}

#[test]
fn list_item_paragraph_is_not_taken() {
    let original = "- Foo\n---\n";
    let expected = "<ul>\n<li>Foo</li>\n</ul>\n<hr />\n";

    test_markdown_html(original, expected);
}
