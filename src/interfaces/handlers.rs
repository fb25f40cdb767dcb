pub mod contact_me;
pub mod pages;
pub mod projects;
pub mod system;
