use super::test_markdown_html;

#[test]
fn two_trailing_spaces() {
    let original = "foo  \nbaz\n";
    let expected = "<p>foo<br />\nbaz</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn trailing_backslash() {
    let original = "foo\\\nbaz\n";
    let expected = "<p>foo<br />\nbaz</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn many_trailing_spaces() {
    let original = "foo       \nbaz\n";
    let expected = "<p>foo<br />\nbaz</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn next_line_leading_spaces_are_stripped() {
    let original = "foo  \n     bar\n";
    let expected = "<p>foo<br />\nbar</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn break_inside_emphasis() {
    let original = "*foo  \nbar*\n";
    let expected = "<p><em>foo<br />\nbar</em></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn single_trailing_space_is_soft() {
    let original = "foo \n baz\n";
    let expected = "<p>foo\nbaz</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn no_break_at_paragraph_end() {
    let original = "foo  \n\nfoo\\\n";
    let expected = "<p>foo</p>\n<p>foo\\</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn no_break_in_heading() {
    let original = "### foo\\\n";
    let expected = "<h3>foo\\</h3>\n";

    test_markdown_html(original, expected);
}

#[test]
fn breaks_do_not_apply_in_code_spans() {
    let original = "`code  \nspan`\n";
    let expected = "<p><code>code   span</code></p>\n";

    test_markdown_html(original, expected);
}
