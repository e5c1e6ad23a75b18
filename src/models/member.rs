use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Member {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub vacation: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Member {
    pub fn new(id: impl Into<String>, name: impl Into<String>, vacation: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            vacation,
            created_at: None,
        }
    }
}
