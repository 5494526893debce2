use super::test_markdown_html;

#[test]
fn leading_tab_opens_code() {
    let original = "\tfoo\tbaz\t\tbim\n";
    let expected = "<pre><code>foo\tbaz\t\tbim\n</code></pre>\n";

    test_markdown_html(original, expected);
}

#[test]
fn spaces_and_tab_combine_to_a_tab_stop() {
    let original = "  \tfoo\tbaz\t\tbim\n";
    let expected = "<pre><code>foo\tbaz\t\tbim\n</code></pre>\n";

    test_markdown_html(original, expected);
}

#[test]
fn interior_tabs_are_content() {
    let original = "    a\ta\n    ὐ\ta\n";
    let expected = "<pre><code>a\ta\nὐ\ta\n</code></pre>\n";

    test_markdown_html(original, expected);
}

#[test]
fn tab_continues_a_list_item() {
    let original = "  - foo\n\n\tbar\n";
    let expected = "<ul>\n<li>\n<p>foo</p>\n<p>bar</p>\n</li>\n</ul>\n";

    test_markdown_html(original, expected);
}

#[test]
fn partially_consumed_tab_becomes_spaces() {
    let original = "- foo\n\n\t\tbar\n";
    let expected = "<ul>\n<li>\n<p>foo</p>\n<pre><code>  bar\n</code></pre>\n</li>\n</ul>\n";

    test_markdown_html(original, expected);
}

#[test]
fn tab_after_quote_marker() {
    let original = ">\t\tfoo\n";
    let expected = "<blockquote>\n<pre><code>  foo\n</code></pre>\n</blockquote>\n";

    test_markdown_html(original, expected);
}

#[test]
fn tab_after_list_marker() {
    let original = "-\t\tfoo\n";
    let expected = "<ul>\n<li>\n<pre><code>  foo\n</code></pre>\n</li>\n</ul>\n";

    test_markdown_html(original, expected);
}
