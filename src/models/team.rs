use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub last_winner_member_id: Option<String>,
}
