pub mod dal;
pub mod sqlite;
pub mod value;

pub use dal::Dal;
pub use value::{FieldMap, Record, SqlValue};
