use crate::db::dal::Dal;

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub dal: Dal,
}
