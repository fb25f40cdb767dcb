use serde::{Deserialize, Serialize};

/// Contact form submission. Accepted and dropped; never stored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactMeForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}
