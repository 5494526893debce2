use super::test_markdown_html;

#[test]
fn named_entities() {
    let original = "&nbsp; &amp; &copy; &AElig; &Dcaron;\n&frac34; &HilbertSpace; &DifferentialD;\n&ClockwiseContourIntegral; &ngE;\n";
    let expected = "<p>\u{a0} &amp; \u{a9} \u{c6} \u{10e}\n\u{be} \u{210b} \u{2146}\n\u{2232} \u{2267}\u{338}</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn decimal_references() {
    let original = "&#35; &#1234; &#992; &#0;\n";
    let expected = "<p># \u{4d2} \u{3e0} \u{fffd}</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn hex_references() {
    let original = "&#X22; &#XD06; &#xcab;\n";
    let expected = "<p>&quot; \u{d06} \u{cab}</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn invalid_forms_stay_as_written() {
    let original = "&nbsp &x; &#; &#x;\n&#87654321;\n&#abcdef0;\n&ThisIsNotDefined; &hi?;\n";
    let expected = "<p>&amp;nbsp &amp;x; &amp;#; &amp;#x;\n&amp;#87654321;\n&amp;#abcdef0;\n&amp;ThisIsNotDefined; &amp;hi?;</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn trailing_semicolon_is_required() {
    let original = "&copy\n";
    let expected = "<p>&amp;copy</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn out_of_range_references_become_replacement() {
    let original = "&#xFFFFFF; &#xD800;\n";
    let expected = "<p>\u{fffd} \u{fffd}</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn entities_in_link_destination_and_title() {
    let original = "[foo](/f&ouml;&ouml; \"f&ouml;&ouml;\")\n";
    let expected = "<p><a href=\"/f%C3%B6%C3%B6\" title=\"f\u{f6}\u{f6}\">foo</a></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn entities_in_info_strings() {
    let original = "``` f&ouml;&ouml;\nfoo\n```\n";
    let expected = "<pre><code class=\"language-f\u{f6}\u{f6}\">foo\n</code></pre>\n";

    test_markdown_html(original, expected);
}

#[test]
fn entities_are_literal_in_code() {
    let original = "`f&ouml;&ouml;`\n\n    f&ouml;f&ouml;\n";
    let expected =
        "<p><code>f&amp;ouml;&amp;ouml;</code></p>\n<pre><code>f&amp;ouml;f&amp;ouml;\n</code></pre>\n";

    test_markdown_html(original, expected);
}
