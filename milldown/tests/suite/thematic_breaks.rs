use super::test_markdown_html;

#[test]
fn three_markers() {
    let original = "***\n---\n___\n";
    let expected = "<hr />\n<hr />\n<hr />\n";

    test_markdown_html(original, expected);
}

#[test]
fn wrong_character() {
    let original = "+++\n";
    let expected = "<p>+++</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn up_to_three_spaces_of_indent() {
    let original = " ***\n  ***\n   ***\n";
    let expected = "<hr />\n<hr />\n<hr />\n";

    test_markdown_html(original, expected);
}

#[test]
fn four_spaces_is_code() {
    let original = "    ***\n";
    let expected = "<pre><code>***\n</code></pre>\n";

    test_markdown_html(original, expected);
}

#[test]
fn interior_spaces_allowed() {
    let original = " - - -\n";
    let expected = "<hr />\n";

    test_markdown_html(original, expected);
}

#[test]
fn no_other_characters_allowed() {
    let original = "_ _ _ _ a\n\na------\n\n---a---\n";
    let expected = "<p>_ _ _ _ a</p>\n<p>a------</p>\n<p>---a---</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn interrupts_paragraph() {
    let original = "Foo\n***\nbar\n";
    let expected = "<p>Foo</p>\n<hr />\n<p>bar</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn setext_heading_wins_over_break() {
    let original = "Foo\n---\nbar\n";
    let expected = "<h2>Foo</h2>\n<p>bar</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn break_wins_over_list_item() {
    let original = "* Foo\n* * *\n* Bar\n";
    let expected = "<ul>\n<li>Foo</li>\n</ul>\n<hr />\n<ul>\n<li>Bar</li>\n</ul>\n";

    test_markdown_html(original, expected);
}

#[test]
fn indented_break_continues_paragraph() {
    let original = "Foo\n    ***\n";
    let expected = "<p>Foo\n***</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn emphasized_dash_is_not_a_break() {
    let original = "*-*\n";
    let expected = "<p><em>-</em></p>\n";

    test_markdown_html(original, expected);
}
