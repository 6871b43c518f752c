use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStatusResponse {
    pub error: bool,
    /// Zero when the catalog failed to load.
    pub images_count: usize,
}
