use super::test_markdown_html;

#[test]
fn simple_image() {
    let original = "![foo](/url \"title\")\n";
    let expected = "<p><img src=\"/url\" alt=\"foo\" title=\"title\" /></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn image_without_title() {
    let original = "![bar](/path)\n";
    let expected = "<p><img src=\"/path\" alt=\"bar\" /></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn alt_text_is_plain_text() {
    let original = "![foo *bar*]\n\n[foo *bar*]: train.jpg \"train & tracks\"\n";
    let expected = "<p><img src=\"train.jpg\" alt=\"foo bar\" title=\"train &amp; tracks\" /></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn nested_image_in_alt_text() {
    let original = "![foo ![bar](/url)](/url2)\n";
    let expected = "<p><img src=\"/url2\" alt=\"foo bar\" /></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn link_in_alt_text() {
    let original = "![foo [bar](/url)](/url2)\n";
    let expected = "<p><img src=\"/url2\" alt=\"foo bar\" /></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn whitespace_around_arguments() {
    let original = "My ![foo bar](/path/to/train.jpg  \"title\"   )\n";
    let expected = "<p>My <img src=\"/path/to/train.jpg\" alt=\"foo bar\" title=\"title\" /></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn deeply_nested_brackets() {
    let original = "![[[foo](uri1)](uri2)](uri3)\n";
    let expected = "<p><img src=\"uri3\" alt=\"[foo](uri2)\" /></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn escaped_bang_makes_a_link() {
    let original = "\\![foo]\n\n[foo]: /url \"title\"\n";
    let expected = "<p>!<a href=\"/url\" title=\"title\">foo</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn escaped_bracket_makes_plain_text() {
    let original = "!\\[foo]\n\n[foo]: /url \"title\"\n";
    let expected = "<p>![foo]</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn collapsed_and_shortcut_images() {
    let original = "![foo][]\n\n![foo]\n\n[foo]: /url \"title\"\n";
    let expected = "<p><img src=\"/url\" alt=\"foo\" title=\"title\" /></p>\n<p><img src=\"/url\" alt=\"foo\" title=\"title\" /></p>\n";

    test_markdown_html(original, expected);
}
