use serde::Serialize;
use uuid::Uuid;

use crate::repos::category_repo::CategoryRow;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub image_url: Option<String>,
}

impl From<CategoryRow> for CategoryResponse {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            image_url: row.image_url,
        }
    }
}
