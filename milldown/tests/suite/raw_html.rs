use super::test_markdown_html;

#[test]
fn open_tags() {
    let original = "<a><bab><c2c>\n";
    let expected = "<p><a><bab><c2c></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn empty_elements() {
    let original = "<a/><b2/>\n";
    let expected = "<p><a/><b2/></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn tags_may_span_lines() {
    let original = "<a  /><b2\ndata=\"foo\" >\n";
    let expected = "<p><a  /><b2\ndata=\"foo\" ></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn custom_tag_with_attributes() {
    let original = "Foo <responsive-image src=\"foo.jpg\" />\n";
    let expected = "<p>Foo <responsive-image src=\"foo.jpg\" /></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn illegal_tag_names_are_text() {
    let original = "<33> <__>\n";
    let expected = "<p>&lt;33&gt; &lt;__&gt;</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn illegal_attributes_are_text() {
    let original = "<a href=\"hi'> <a href=hi'>\n";
    let expected = "<p>&lt;a href=&quot;hi'&gt; &lt;a href=hi'&gt;</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn close_tags() {
    let original = "</a></foo >\n";
    let expected = "<p></a></foo ></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn comment_spans_lines() {
    let original = "foo <!-- this is a\ncomment - with hyphen -->\n";
    let expected = "<p>foo <!-- this is a\ncomment - with hyphen --></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn short_comment_forms_are_verbatim() {
    let original = "foo <!--> foo -->\n\nfoo <!---> foo -->\n";
    let expected = "<p>foo <!--> foo --&gt;</p>\n<p>foo <!---> foo --&gt;</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn processing_instruction() {
    let original = "foo <?php echo $a; ?>\n";
    let expected = "<p>foo <?php echo $a; ?></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn declaration() {
    let original = "foo <!ELEMENT br EMPTY>\n";
    let expected = "<p>foo <!ELEMENT br EMPTY></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn cdata_section() {
    let original = "foo <![CDATA[>&<]]>\n";
    let expected = "<p>foo <![CDATA[>&<]]></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn entities_inside_attributes_are_kept() {
    let original = "foo <a href=\"&ouml;\">\n";
    let expected = "<p>foo <a href=\"&ouml;\"></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn escaped_angle_is_not_a_tag() {
    let original = "\\<a href=\"foo\">\n";
    let expected = "<p>&lt;a href=&quot;foo&quot;&gt;</p>\n";

    test_markdown_html(original, expected);
}
