use super::test_markdown_html;

#[test]
fn simple_span() {
    let original = "`foo`\n";
    let expected = "<p><code>foo</code></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn backticks_inside() {
    let original = "`` foo ` bar ``\n";
    let expected = "<p><code>foo ` bar</code></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn stripping_needs_both_spaces() {
    let original = "` `` `\n\n` a`\n";
    let expected = "<p><code>``</code></p>\n<p><code> a</code></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn only_one_space_is_stripped() {
    let original = "`  ``  `\n";
    let expected = "<p><code> `` </code></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn all_spaces_are_kept() {
    let original = "` `\n`  `\n";
    let expected = "<p><code> </code>\n<code>  </code></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn newlines_become_spaces() {
    let original = "``\nfoo\nbar  \nbaz\n``\n";
    let expected = "<p><code>foo bar   baz</code></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn interior_spaces_are_not_collapsed() {
    let original = "`foo   bar \nbaz`\n";
    let expected = "<p><code>foo   bar  baz</code></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn backslashes_are_literal() {
    let original = "`foo\\`bar`\n";
    let expected = "<p><code>foo\\</code>bar`</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn run_lengths_must_match() {
    let original = "``foo`bar``\n";
    let expected = "<p><code>foo`bar</code></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn span_wins_over_emphasis() {
    let original = "*foo`*`\n";
    let expected = "<p>*foo<code>*</code></p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn span_wins_over_link() {
    let original = "[not a `link](/foo`)\n";
    let expected = "<p>[not a <code>link](/foo</code>)</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn earlier_span_wins_over_html_tag() {
    let original = "`<a href=\"`\">`\n";
    let expected = "<p><code>&lt;a href=&quot;</code>&quot;&gt;`</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn earlier_span_wins_over_autolink() {
    let original = "`<http://foo.bar.`baz>`\n";
    let expected = "<p><code>&lt;http://foo.bar.</code>baz&gt;`</p>\n";

    test_markdown_html(original, expected);
}

#[test]
fn unmatched_openers_are_literal() {
    let original = "```foo``\n\n`foo\n";
    let expected = "<p>```foo``</p>\n<p>`foo</p>\n";

    test_markdown_html(original, expected);
}
