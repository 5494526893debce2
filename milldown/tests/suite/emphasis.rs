use super::test_markdown_html;

#[test]
fn simple_emphasis() {
    let original = "*foo bar*\n";
    let expected = "<p><em>foo bar</em></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn opening_delimiter_needs_left_flank() {
    let original = "a * foo bar*\n";
    let expected = "<p>a * foo bar*</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn punctuation_after_intraword_opener() {
    let original = "a*\"foo\"*\n";
    let expected = "<p>a*&quot;foo&quot;*</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn intraword_star_emphasis() {
    let original = "foo*bar*\n\n5*6*78\n";
    let expected = "<p>foo<em>bar</em></p>\n<p>5<em>6</em>78</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn simple_underscore_emphasis() {
    let original = "_foo bar_\n";
    let expected = "<p><em>foo bar</em></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn no_intraword_underscore_emphasis() {
    let original = "foo_bar_\n\nпристаням_стремятся_\n";
    let expected = "<p>foo_bar_</p>\n<p>пристаням_стремятся_</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn underscore_emphasis_after_punctuation() {
    let original = "foo-_(bar)_\n";
    let expected = "<p>foo-<em>(bar)</em></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn closing_delimiter_needs_right_flank() {
    let original = "*foo bar *\n";
    let expected = "<p>*foo bar *</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn nested_emphasis() {
    let original = "*(*foo*)*\n";
    let expected = "<p><em>(<em>foo</em>)</em></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn strong_emphasis() {
    let original = "**foo bar**\n\n__foo bar__\n";
    let expected = "<p><strong>foo bar</strong></p>\n<p><strong>foo bar</strong></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn em_with_nested_strong() {
    let original = "***foo***\n";
    let expected = "<p><em><strong>foo</strong></em></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn rule_of_three_with_greedy_pairing() {
    let original = "*foo**bar***\n";
    let expected = "<p><em>foo<strong>bar</strong></em></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn unmatched_inner_run_stays_literal() {
    let original = "*foo**bar*\n";
    let expected = "<p><em>foo**bar</em></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn leftover_delimiters_stay_literal() {
    let original = "**foo*\n\n*foo**\n";
    let expected = "<p>*<em>foo</em></p>\n<p><em>foo</em>*</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn unmatched_opening_run() {
    let original = "**foo **bar baz**\n";
    let expected = "<p>**foo <strong>bar baz</strong></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn emphasis_spans_a_code_span() {
    let original = "*a `*`*\n";
    let expected = "<p><em>a <code>*</code></em></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn strong_inside_emphasis() {
    let original = "_foo __bar__ baz_\n";
    let expected = "<p><em>foo <strong>bar</strong> baz</em></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn emphasis_closes_before_text() {
    let original = "*foo*bar\n";
    let expected = "<p><em>foo</em>bar</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn emphasis_with_link_inside() {
    let original = "*foo [bar](/url)*\n";
    let expected = "<p><em>foo <a href=\"/url\">bar</a></em></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn currency_symbols_are_punctuation() {
    let original = "*$*alpha.\n\n*£*bravo.\n\n*€*charlie.\n";
    let expected = "<p>*$*alpha.</p>\n<p>*£*bravo.</p>\n<p>*€*charlie.</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn strong_nested_in_emphasis_with_parens() {
    let original = "*(**foo**)*\n";
    let expected = "<p><em>(<strong>foo</strong>)</em></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn delimiters_next_to_spaces_stay_literal() {
    let original = "** is not an empty emphasis\n\n**** is not an empty strong emphasis\n";
    let expected = "<p>** is not an empty emphasis</p>\n<p>**** is not an empty strong emphasis</p>\n";

    test_markdown_html(original, expected);
}
