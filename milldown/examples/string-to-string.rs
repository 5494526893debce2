fn main() {
    let markdown_input: &str = "Hello world, this is a *very simple* example.";
    println!("Parsing the following markdown string:\n{}", markdown_input);

    // Convert to an HTML fragment.
    let html_output: String = milldown::convert(markdown_input);

    // Check that the output is what we expected.
    let expected_html: &str = "<p>Hello world, this is a <em>very simple</em> example.</p>\n";
    assert_eq!(expected_html, &html_output);

    // Write result to stdout.
    println!("\nHTML output:\n{}", &html_output);
}
