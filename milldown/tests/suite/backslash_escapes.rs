use super::test_markdown_html;

#[test]
fn any_ascii_punctuation_may_be_escaped() {
    let original =
        "\\!\\\"\\#\\$\\%\\&\\'\\(\\)\\*\\+\\,\\-\\.\\/\\:\\;\\<\\=\\>\\?\\@\\[\\\\\\]\\^\\_\\`\\{\\|\\}\\~\n";
    let expected = "<p>!&quot;#$%&amp;'()*+,-./:;&lt;=&gt;?@[\\]^_`{|}~</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn other_characters_keep_their_backslash() {
    let original = "\\→\\A\\a\\ \\3\\φ\\«\n";
    let expected = "<p>\\→\\A\\a\\ \\3\\φ\\«</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn escaped_delimiters_are_inert() {
    let original = "\\*not emphasized*\n\\[not a link](/foo)\n\\`not code`\n1\\. not a list\n";
    let expected =
        "<p>*not emphasized*\n[not a link](/foo)\n`not code`\n1. not a list</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn escapes_are_literal_in_code_spans() {
    let original = "`` \\[\\` ``\n";
    let expected = "<p><code>\\[\\`</code></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn escapes_are_literal_in_code_blocks() {
    let original = "    \\[\\]\n";
    let expected = "<pre><code>\\[\\]\n</code></pre>\n";

    test_markdown_html(original, expected);
}

#[test]
fn escapes_work_in_destinations_and_titles() {
    let original = "[foo](/bar\\* \"ti\\*tle\")\n";
    let expected = "<p><a href=\"/bar*\" title=\"ti*tle\">foo</a></p>\n";

    test_markdown_html(original, expected);
}
