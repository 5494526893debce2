use super::test_markdown_html;

#[test]
fn inline_link_with_title() {
    let original = "[link](/uri \"title\")\n";
    let expected = "<p><a href=\"/uri\" title=\"title\">link</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn inline_link_without_title() {
    let original = "[link](/uri)\n";
    let expected = "<p><a href=\"/uri\">link</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn empty_destination() {
    let original = "[link]()\n\n[link](<>)\n";
    let expected = "<p><a href=\"\">link</a></p>\n<p><a href=\"\">link</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn destination_may_not_contain_spaces() {
    let original = "[link](/my uri)\n";
    let expected = "<p>[link](/my uri)</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn pointy_destination_may_contain_spaces() {
    let original = "[link](</my uri>)\n";
    let expected = "<p><a href=\"/my%20uri\">link</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn destination_may_not_contain_line_breaks() {
    let original = "[link](foo\nbar)\n";
    let expected = "<p>[link](foo\nbar)</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn escaped_parens_in_destination() {
    let original = "[link](\\(foo\\))\n";
    let expected = "<p><a href=\"(foo)\">link</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn balanced_parens_in_destination() {
    let original = "[link](foo(and(bar)))\n";
    let expected = "<p><a href=\"foo(and(bar))\">link</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn escapes_and_fragment() {
    let original = "[link](foo\\)\\:)\n\n[link](#fragment)\n";
    let expected = "<p><a href=\"foo):\">link</a></p>\n<p><a href=\"#fragment\">link</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn titles_in_all_three_quote_styles() {
    let original = "[link](/url \"title\")\n[link](/url 'title')\n[link](/url (title))\n";
    let expected = "<p><a href=\"/url\" title=\"title\">link</a>\n<a href=\"/url\" title=\"title\">link</a>\n<a href=\"/url\" title=\"title\">link</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn title_with_escaped_and_entity_quotes() {
    let original = "[link](/url \"title \\\"&quot;\")\n";
    let expected = "<p><a href=\"/url\" title=\"title &quot;&quot;\">link</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn two_titles_is_no_link() {
    let original = "[link](/url \"title\" \"title\")\n";
    let expected = "<p>[link](/url &quot;title&quot; &quot;title&quot;)</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn whitespace_around_destination() {
    let original = "[link](   /uri\n  \"title\"  )\n";
    let expected = "<p><a href=\"/uri\" title=\"title\">link</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn full_reference_link() {
    let original = "[foo][bar]\n\n[bar]: /url \"title\"\n";
    let expected = "<p><a href=\"/url\" title=\"title\">foo</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn collapsed_reference_link() {
    let original = "[foo][]\n\n[foo]: /url \"title\"\n";
    let expected = "<p><a href=\"/url\" title=\"title\">foo</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn shortcut_reference_link() {
    let original = "[foo]\n\n[foo]: /url \"title\"\n";
    let expected = "<p><a href=\"/url\" title=\"title\">foo</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn undefined_label_is_literal() {
    let original = "[foo] [bar]\n\n[bar]: /url \"title\"\n";
    let expected = "<p>[foo] <a href=\"/url\" title=\"title\">bar</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn no_links_inside_links() {
    let original = "[foo [bar](/uri)](/other)\n";
    let expected = "<p>[foo <a href=\"/uri\">bar</a>](/other)</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn emphasis_does_not_cross_link_boundaries() {
    let original = "*[foo*](/uri)\n";
    let expected = "<p>*<a href=\"/uri\">foo*</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn delimiters_in_destination_stay_literal() {
    let original = "[foo *bar](baz*)\n";
    let expected = "<p><a href=\"baz*\">foo *bar</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn full_reference_labels_are_case_folded() {
    let original = "[foo][BaR]\n\n[bar]: /url \"title\"\n";
    let expected = "<p><a href=\"/url\" title=\"title\">foo</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn sharp_s_case_folds_to_ss() {
    let original = "[ẞ]\n\n[SS]: /url\n";
    let expected = "<p><a href=\"/url\">ẞ</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn failed_inline_parse_falls_back_to_shortcut() {
    let original = "[foo](not a link)\n\n[foo]: /url1\n";
    let expected = "<p><a href=\"/url1\">foo</a>(not a link)</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn balanced_brackets_in_link_text() {
    let original = "[link [foo [bar]]](/uri)\n";
    let expected = "<p><a href=\"/uri\">link [foo [bar]]</a></p>\n";

    test_markdown_html(original, expected);
}
