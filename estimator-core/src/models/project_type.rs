use serde::{Deserialize, Serialize};

/// A kind of construction project the wizard can estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectType {
    pub id: String,
    pub title: String,
    pub description: String,
}
