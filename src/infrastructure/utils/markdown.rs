use pulldown_cmark::{html, Options, Parser};
use ammonia::{Builder, UrlRelative};

/// Converts site-authored Markdown to sanitized HTML.
///
/// Relative links are kept so pages can point at each other (`/projects`).
pub fn page_markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(markdown, options);

    let mut raw_html = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut raw_html, parser);

    sanitize_html(&raw_html)
}

/// Strips scripts, event handlers and other unsafe markup.
pub fn sanitize_html(content: &str) -> String {
    Builder::default()
        .link_rel(Some("noopener noreferrer"))
        .url_relative(UrlRelative::PassThrough)
        .clean(content)
        .to_string()
}

/// Escapes free text for interpolation into markup or attribute values.
pub fn escape_text(text: &str) -> String {
    ammonia::clean_text(text)
}
