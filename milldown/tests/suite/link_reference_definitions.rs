use super::test_markdown_html;

#[test]
fn simple_definition() {
    let original = "[foo]: /url \"title\"\n\n[foo]\n";
    let expected = "<p><a href=\"/url\" title=\"title\">foo</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn definition_may_span_lines() {
    let original = "   [foo]: \n      /url  \n           'the title'  \n\n[foo]\n";
    let expected = "<p><a href=\"/url\" title=\"the title\">foo</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn label_with_escapes_and_special_characters() {
    let original = "[Foo*bar\\]]:my_(url) 'title (with parens)'\n\n[Foo*bar\\]]\n";
    let expected = "<p><a href=\"my_(url)\" title=\"title (with parens)\">Foo*bar]</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn angle_bracketed_destination() {
    let original = "[Foo bar]:\n<my url>\n'title'\n\n[Foo bar]\n";
    let expected = "<p><a href=\"my%20url\" title=\"title\">Foo bar</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn title_may_span_lines() {
    let original = "[foo]: /url '\ntitle\nline1\nline2\n'\n\n[foo]\n";
    let expected = "<p><a href=\"/url\" title=\"\ntitle\nline1\nline2\n\">foo</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn title_may_not_contain_a_blank_line() {
    let original = "[foo]: /url 'title\n\nwith blank line'\n\n[foo]\n";
    let expected = "<p>[foo]: /url 'title</p>\n<p>with blank line'</p>\n<p>[foo]</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn destination_on_next_line() {
    let original = "[foo]:\n/url\n\n[foo]\n";
    let expected = "<p><a href=\"/url\">foo</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn destination_is_required() {
    let original = "[foo]:\n\n[foo]\n";
    let expected = "<p>[foo]:</p>\n<p>[foo]</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn empty_pointy_destination() {
    let original = "[foo]: <>\n\n[foo]\n";
    let expected = "<p><a href=\"\">foo</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn garbage_after_destination() {
    let original = "[foo]: <bar>(baz)\n\n[foo]\n";
    let expected = "<p>[foo]: <bar>(baz)</p>\n<p>[foo]</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn escapes_in_destination_and_title() {
    let original = "[foo]: /url\\bar\\*baz \"foo\\\"bar\\baz\"\n\n[foo]\n";
    let expected = "<p><a href=\"/url%5Cbar*baz\" title=\"foo&quot;bar\\baz\">foo</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn definition_may_follow_its_use() {
    let original = "[foo]\n\n[foo]: url\n";
    let expected = "<p><a href=\"url\">foo</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn first_definition_wins() {
    let original = "[foo]: first\n[foo]: second\n\n[foo]\n";
    let expected = "<p><a href=\"first\">foo</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn labels_are_case_folded() {
    let original = "[FOO]: /url\n\n[Foo]\n";
    let expected = "<p><a href=\"/url\">Foo</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn unicode_case_fold() {
    let original = "[ΑΓΩ]: /φου\n\n[αγω]\n";
    let expected = "<p><a href=\"/%CF%86%CE%BF%CF%85\">αγω</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn cannot_interrupt_a_paragraph() {
    let original = "Foo\n[bar]: /baz\n\n[bar]\n";
    let expected = "<p>Foo\n[bar]: /baz</p>\n<p>[bar]</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn may_directly_follow_other_blocks() {
    let original = "# [Foo]\n[foo]: /url\n> bar\n";
    let expected = "<h1><a href=\"/url\">Foo</a></h1>\n<blockquote>\n<p>bar</p>\n</blockquote>\n";

    test_markdown_html(original, expected);
}

#[test]
fn setext_underline_after_definition() {
    let original = "[foo]: /url\nbar\n===\n[foo]\n";
    let expected = "<h1>bar</h1>\n<p><a href=\"/url\">foo</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn definition_inside_block_quote() {
    let original = "[foo]\n\n> [foo]: /url\n";
    let expected = "<p><a href=\"/url\">foo</a></p>\n<blockquote>\n</blockquote>\n";

    test_markdown_html(original, expected);
}

#[test]
fn several_definitions() {
    let original = "[foo]: /foo-url \"foo\"\n[bar]: /bar-url\n  \"bar\"\n[baz]: /baz-url\n\n[foo],\n[bar],\n[baz]\n";
    let expected = "<p><a href=\"/foo-url\" title=\"foo\">foo</a>,\n<a href=\"/bar-url\" title=\"bar\">bar</a>,\n<a href=\"/baz-url\">baz</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn dest_only_definition_keeps_following_line() {
    let original = "[foo]: /url\n\"title\" ok\n";
    let expected = "<p>&quot;title&quot; ok</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn title_with_trailing_garbage_is_no_definition() {
    let original = "[foo]: /url \"title\" ok\n";
    let expected = "<p>[foo]: /url &quot;title&quot; ok</p>\n";

    test_markdown_html(original, expected);
}
