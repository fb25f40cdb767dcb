pub mod contact;
pub mod projects;
