use super::test_markdown_html;

#[test]
fn changing_bullet_starts_a_new_list() {
    let original = "- foo\n- bar\n+ baz\n";
    let expected = "<ul>\n<li>foo</li>\n<li>bar</li>\n</ul>\n<ul>\n<li>baz</li>\n</ul>\n";

    test_markdown_html(original, expected);
}

#[test]
fn bullet_list_interrupts_paragraph() {
    let original = "Foo\n- bar\n- baz\n";
    let expected = "<p>Foo</p>\n<ul>\n<li>bar</li>\n<li>baz</li>\n</ul>\n";

    test_markdown_html(original, expected);
}

#[test]
fn ordered_list_interrupts_only_when_starting_at_one() {
    let original = "The number of windows in my house is\n14.  The number of doors is 6.\n";
    let expected = "<p>The number of windows in my house is\n14.  The number of doors is 6.</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn ordered_list_starting_at_one_interrupts() {
    let original = "The number of windows in my house is\n1.  The number of doors is 6.\n";
    let expected =
        "<p>The number of windows in my house is</p>\n<ol>\n<li>The number of doors is 6.</li>\n</ol>\n";

    test_markdown_html(original, expected);
}

#[test]
fn tight_list() {
    let original = "- a\n- b\n";
    let expected = "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n";

    test_markdown_html(original, expected);
}

#[test]
fn blank_line_between_items_makes_the_list_loose() {
    let original = "- a\n\n- b\n";
    let expected = "<ul>\n<li>\n<p>a</p>\n</li>\n<li>\n<p>b</p>\n</li>\n</ul>\n";

    test_markdown_html(original, expected);
}

#[test]
fn blank_lines_anywhere_make_every_item_loose() {
    let original = "- foo\n\n- bar\n\n\n- baz\n";
    let expected = "<ul>\n<li>\n<p>foo</p>\n</li>\n<li>\n<p>bar</p>\n</li>\n<li>\n<p>baz</p>\n</li>\n</ul>\n";

    test_markdown_html(original, expected);
}

#[test]
fn blank_line_deep_inside_stays_local() {
    let original = "- foo\n  - bar\n    - baz\n\n\n      bim\n";
    let expected = "<ul>\n<li>foo\n<ul>\n<li>bar\n<ul>\n<li>\n<p>baz</p>\n<p>bim</p>\n</li>\n</ul>\n</li>\n</ul>\n</li>\n</ul>\n";

    test_markdown_html(original, expected);
}

#[test]
fn second_paragraph_in_one_item() {
    let original = "- a\n- b\n\n  c\n- d\n";
    let expected = "<ul>\n<li>\n<p>a</p>\n</li>\n<li>\n<p>b</p>\n<p>c</p>\n</li>\n<li>\n<p>d</p>\n</li>\n</ul>\n";

    test_markdown_html(original, expected);
}

#[test]
fn small_indent_variations_stay_in_one_list() {
    let original = "- a\n - b\n  - c\n   - d\n  - e\n - f\n- g\n";
    let expected =
        "<ul>\n<li>a</li>\n<li>b</li>\n<li>c</li>\n<li>d</li>\n<li>e</li>\n<li>f</li>\n<li>g</li>\n</ul>\n";

    test_markdown_html(original, expected);
}

#[test]
fn ordered_items_with_growing_indent() {
    let original = "1. a\n\n  2. b\n\n   3. c\n";
    let expected =
        "<ol>\n<li>\n<p>a</p>\n</li>\n<li>\n<p>b</p>\n</li>\n<li>\n<p>c</p>\n</li>\n</ol>\n";

    test_markdown_html(original, expected);
}

#[test]
fn quote_inside_tight_item() {
    let original = "* a\n  > b\n  >\n* c\n";
    let expected =
        "<ul>\n<li>a\n<blockquote>\n<p>b</p>\n</blockquote>\n</li>\n<li>c</li>\n</ul>\n";

    test_markdown_html(original, expected);
}

#[test]
fn nested_list_keeps_outer_tight() {
    let original = "- a\n  - b\n";
    let expected = "<ul>\n<li>a\n<ul>\n<li>b</li>\n</ul>\n</li>\n</ul>\n";

    test_markdown_html(original, expected);
}

#[test]
fn trailing_blank_line_keeps_the_list_tight() {
    let original = "- a\n- b\n\nc\n";
    let expected = "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n<p>c</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn headings_inside_list_items() {
    let original = "- # Foo\n- Bar\n  ---\n  baz\n";
    let expected = "<ul>\n<li>\n<h1>Foo</h1>\n</li>\n<li>\n<h2>Bar</h2>\nbaz</li>\n</ul>\n";

    test_markdown_html(original, expected);
}
