use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::db::value::{FieldMap, Record};

// ───── Table layout ──────────────────────────────────────────────────
pub const PROJECTS_TABLE: &str = "projects";

pub const PROJECTS_SCHEMA: &str = "
    ProjectID INTEGER PRIMARY KEY AUTOINCREMENT,
    Title TEXT NOT NULL,
    Description TEXT,
    ImageFileName TEXT,
    TechnologiesUsed TEXT,
    ProjectURL TEXT,
    GitHubURL TEXT,
    DateCreated TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    IsActive INTEGER DEFAULT 1
";

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub image_file_name: Option<String>,
    pub technologies_used: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub date_created: Option<NaiveDateTime>,
    pub is_active: bool,
}

impl From<&Record> for Project {
    fn from(row: &Record) -> Self {
        let owned = |column: &str| row.text(column).map(str::to_owned);

        Project {
            id: row.integer("ProjectID").unwrap_or_default(),
            title: owned("Title").unwrap_or_default(),
            description: owned("Description"),
            image_file_name: owned("ImageFileName"),
            technologies_used: owned("TechnologiesUsed"),
            project_url: owned("ProjectURL"),
            github_url: owned("GitHubURL"),
            date_created: row.timestamp("DateCreated"),
            is_active: row.integer("IsActive").unwrap_or(1) != 0,
        }
    }
}

// ───── Form Input ────────────────────────────────────────────────────

/// Fields of the "add project" form, keyed by their HTML input names.
///
/// Nothing is validated; absent fields are forwarded as NULL or empty text.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct NewProjectForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub imagefilename: Option<String>,
    pub technologies: Option<String>,
    pub projecturl: Option<String>,
    pub githuburl: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectInsert {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_file_name: Option<String>,
    pub technologies_used: String,
    pub project_url: String,
    pub github_url: String,
    pub is_active: bool,
}

impl NewProjectForm {
    pub fn prepare_for_insert(self) -> ProjectInsert {
        ProjectInsert {
            title: self.title,
            description: self.description,
            image_file_name: self.imagefilename,
            technologies_used: self.technologies.unwrap_or_default(),
            project_url: self.projecturl.unwrap_or_default(),
            github_url: self.githuburl.unwrap_or_default(),
            is_active: true,
        }
    }
}

impl ProjectInsert {
    pub fn to_fields(&self) -> FieldMap {
        FieldMap::new()
            .with("Title", self.title.clone())
            .with("Description", self.description.clone())
            .with("ImageFileName", self.image_file_name.clone())
            .with("TechnologiesUsed", &self.technologies_used)
            .with("ProjectURL", &self.project_url)
            .with("GitHubURL", &self.github_url)
            .with("IsActive", self.is_active)
    }
}
