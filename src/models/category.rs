use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Hand-authored display number from the data file; responses carry a
    /// computed count instead.
    pub product_count: u32,
    pub subcategories: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub product_count: u32,
    pub subcategories: Vec<String>,
}
