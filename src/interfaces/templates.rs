//! HTML pages for the public site.

pub mod pages;

pub use pages::*;

use crate::utils::markdown::escape_text;

const SITE_NAME: &str = "Portfolio";

/// Wraps `body` in the shared page shell. `body` must already be safe HTML.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | {site}</title>
    <link rel="stylesheet" href="/static/css/style.css">
</head>
<body>
    <header>
        <nav>
            <a href="/">Home</a>
            <a href="/about">About</a>
            <a href="/projects">Projects</a>
            <a href="/resume">Resume</a>
            <a href="/contact">Contact</a>
            <a href="/add_project">Add Project</a>
        </nav>
    </header>
    <main>
{body}
    </main>
    <footer>{site} &middot; v{version}</footer>
</body>
</html>"#,
        title = escape_text(title),
        site = SITE_NAME,
        body = body,
        version = env!("CARGO_PKG_VERSION"),
    )
}

pub fn error_page(heading: &str, detail: &str) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to the home page</a></p>",
        escape_text(heading),
        escape_text(detail),
    );
    layout(heading, &body)
}
