use pulldown_cmark::{html, Options, Parser};

/// Renders markdown source to an HTML fragment. Sanitization is the
/// caller's concern.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::all());
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}
