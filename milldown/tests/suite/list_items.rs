use super::test_markdown_html;

#[test]
fn item_with_several_blocks() {
    let original = "1.  A paragraph\n    with two lines.\n\n        indented code\n\n    > A block quote.\n";
    let expected = "<ol>\n<li>\n<p>A paragraph\nwith two lines.</p>\n<pre><code>indented code\n</code></pre>\n<blockquote>\n<p>A block quote.</p>\n</blockquote>\n</li>\n</ol>\n";

    test_markdown_html(original, expected);
}

#[test]
fn under_indented_content_falls_out() {
    let original = "- one\n\n two\n";
    let expected = "<ul>\n<li>one</li>\n</ul>\n<p>two</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn properly_indented_second_paragraph() {
    let original = "- one\n\n  two\n";
    let expected = "<ul>\n<li>\n<p>one</p>\n<p>two</p>\n</li>\n</ul>\n";

    test_markdown_html(original, expected);
}

#[test]
fn indent_is_relative_to_the_marker() {
    let original = " -    one\n\n     two\n";
    let expected = "<ul>\n<li>one</li>\n</ul>\n<pre><code> two\n</code></pre>\n";

    test_markdown_html(original, expected);
}

#[test]
fn list_nested_in_quotes() {
    let original = "> > 1.  one\n>>\n>>     two\n";
    let expected = "<blockquote>\n<blockquote>\n<ol>\n<li>\n<p>one</p>\n<p>two</p>\n</li>\n</ol>\n</blockquote>\n</blockquote>\n";

    test_markdown_html(original, expected);
}

#[test]
fn under_indented_content_in_quotes() {
    let original = ">>- one\n>>\n  >  > two\n";
    let expected = "<blockquote>\n<blockquote>\n<ul>\n<li>one</li>\n</ul>\n<p>two</p>\n</blockquote>\n</blockquote>\n";

    test_markdown_html(original, expected);
}

#[test]
fn space_after_marker_is_required() {
    let original = "-one\n\n2.two\n";
    let expected = "<p>-one</p>\n<p>2.two</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn item_may_contain_several_blank_lines() {
    let original = "- foo\n\n\n  bar\n";
    let expected = "<ul>\n<li>\n<p>foo</p>\n<p>bar</p>\n</li>\n</ul>\n";

    test_markdown_html(original, expected);
}

#[test]
fn item_with_fence_paragraph_and_quote() {
    let original = "1.  foo\n\n    ```\n    bar\n    ```\n\n    baz\n\n    > bam\n";
    let expected = "<ol>\n<li>\n<p>foo</p>\n<pre><code>bar\n</code></pre>\n<p>baz</p>\n<blockquote>\n<p>bam</p>\n</blockquote>\n</li>\n</ol>\n";

    test_markdown_html(original, expected);
}

#[test]
fn start_numbers_up_to_nine_digits() {
    let original = "123456789. ok\n";
    let expected = "<ol start=\"123456789\">\n<li>ok</li>\n</ol>\n";

    test_markdown_html(original, expected);
}

#[test]
fn ten_digit_numbers_are_text() {
    let original = "1234567890. not ok\n";
    let expected = "<p>1234567890. not ok</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn start_may_be_zero() {
    let original = "0. ok\n\n003. ok\n";
    let expected = "<ol start=\"0\">\n<li>ok</li>\n</ol>\n<ol start=\"3\">\n<li>ok</li>\n</ol>\n";

    test_markdown_html(original, expected);
}

#[test]
fn negative_numbers_are_text() {
    let original = "-1. not ok\n";
    let expected = "<p>-1. not ok</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn code_block_in_item() {
    let original = "- foo\n\n      bar\n";
    let expected = "<ul>\n<li>\n<p>foo</p>\n<pre><code>bar\n</code></pre>\n</li>\n</ul>\n";

    test_markdown_html(original, expected);
}

#[test]
fn wide_marker_widens_the_indent() {
    let original = "  10.  foo\n\n           bar\n";
    let expected = "<ol start=\"10\">\n<li>\n<p>foo</p>\n<pre><code>bar\n</code></pre>\n</li>\n</ol>\n";

    test_markdown_html(original, expected);
}

#[test]
fn item_starting_with_indented_code() {
    let original = "1.     indented code\n\n   paragraph\n\n       more code\n";
    let expected = "<ol>\n<li>\n<pre><code>indented code\n</code></pre>\n<p>paragraph</p>\n<pre><code>more code\n</code></pre>\n</li>\n</ol>\n";

    test_markdown_html(original, expected);
}

#[test]
fn empty_item_in_the_middle() {
    let original = "- foo\n-\n- bar\n";
    let expected = "<ul>\n<li>foo</li>\n<li></li>\n<li>bar</li>\n</ul>\n";

    test_markdown_html(original, expected);
}

#[test]
fn empty_markers_cannot_interrupt() {
    let original = "foo\n*\n\nfoo\n1.\n";
    let expected = "<p>foo\n*</p>\n<p>foo\n1.</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn item_beginning_with_a_blank_line() {
    let original = "- \n  foo\n";
    let expected = "<ul>\n<li>foo</li>\n</ul>\n";

    test_markdown_html(original, expected);
}

#[test]
fn at_most_one_leading_blank_line() {
    let original = "-\n\n  foo\n";
    let expected = "<ul>\n<li></li>\n</ul>\n<p>foo</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn changing_the_delimiter_starts_a_new_list() {
    let original = "1. foo\n2. bar\n3) baz\n";
    let expected = "<ol>\n<li>foo</li>\n<li>bar</li>\n</ol>\n<ol start=\"3\">\n<li>baz</li>\n</ol>\n";

    test_markdown_html(original, expected);
}
