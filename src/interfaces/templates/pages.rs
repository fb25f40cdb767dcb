use crate::{
    entities::project::Project,
    templates::layout,
    utils::markdown::{escape_text, page_markdown_to_html},
};

const HOME_MD: &str = include_str!("../../../content/index.md");
const ABOUT_MD: &str = include_str!("../../../content/about.md");
const RESUME_MD: &str = include_str!("../../../content/resume.md");

pub fn home_page() -> String {
    layout("Home", &page_markdown_to_html(HOME_MD))
}

pub fn about_page() -> String {
    layout("About", &page_markdown_to_html(ABOUT_MD))
}

pub fn resume_page() -> String {
    layout("Resume", &page_markdown_to_html(RESUME_MD))
}

pub fn projects_page(projects: &[Project]) -> String {
    let mut body = String::from("<h1>Projects</h1>\n");

    if projects.is_empty() {
        body.push_str("<p>No projects yet. <a href=\"/add_project\">Add the first one</a>.</p>\n");
    }

    for project in projects {
        body.push_str(&project_card(project));
    }

    layout("Projects", &body)
}

fn project_card(project: &Project) -> String {
    let mut card = format!(
        "<article class=\"project\">\n<h2>{}</h2>\n",
        escape_text(&project.title)
    );

    if let Some(image) = non_empty(&project.image_file_name) {
        card.push_str(&format!(
            "<img src=\"/static/images/{}\" alt=\"{}\">\n",
            escape_text(image),
            escape_text(&project.title)
        ));
    }
    if let Some(description) = non_empty(&project.description) {
        card.push_str(&format!("<p>{}</p>\n", escape_text(description)));
    }
    if let Some(tech) = non_empty(&project.technologies_used) {
        card.push_str(&format!("<p class=\"meta\">Built with: {}</p>\n", escape_text(tech)));
    }

    let links: Vec<String> = [
        ("Live site", &project.project_url),
        ("Source on GitHub", &project.github_url),
    ]
    .into_iter()
    .filter_map(|(label, url)| {
        non_empty(url).map(|url| format!("<a href=\"{}\">{}</a>", escape_text(url), label))
    })
    .collect();
    if !links.is_empty() {
        card.push_str(&format!("<p>{}</p>\n", links.join(" &middot; ")));
    }

    if let Some(created) = project.date_created {
        card.push_str(&format!(
            "<p class=\"meta\">Added {}</p>\n",
            created.format("%B %-d, %Y")
        ));
    }

    card.push_str("</article>\n");
    card
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

pub fn contact_page() -> String {
    let body = r#"<h1>Contact</h1>
<form method="post" action="/contact">
    <label for="name">Name</label>
    <input id="name" name="name" type="text">
    <label for="email">Email</label>
    <input id="email" name="email" type="email">
    <label for="message">Message</label>
    <textarea id="message" name="message" rows="6"></textarea>
    <button type="submit">Send</button>
</form>"#;
    layout("Contact", body)
}

pub fn add_project_page() -> String {
    let body = r#"<h1>Add a Project</h1>
<form method="post" action="/add_project">
    <label for="title">Title</label>
    <input id="title" name="title" type="text">
    <label for="description">Description</label>
    <textarea id="description" name="description" rows="4"></textarea>
    <label for="imagefilename">Image file name</label>
    <input id="imagefilename" name="imagefilename" type="text">
    <label for="technologies">Technologies used</label>
    <input id="technologies" name="technologies" type="text">
    <label for="projecturl">Project URL</label>
    <input id="projecturl" name="projecturl" type="url">
    <label for="githuburl">GitHub URL</label>
    <input id="githuburl" name="githuburl" type="url">
    <button type="submit">Save project</button>
</form>"#;
    layout("Add Project", body)
}

pub fn project_added_page() -> String {
    let body = "<h1>Project added</h1>\n<p>Your project has been saved. \
        <a href=\"/projects\">See all projects</a>.</p>";
    layout("Project Added", body)
}

pub fn thanks_page() -> String {
    let body = "<h1>Thanks!</h1>\n<p>Your message was received. \
        <a href=\"/\">Back to the home page</a>.</p>";
    layout("Thanks", body)
}
