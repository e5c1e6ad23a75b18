use serde::{Deserialize, Serialize};

/// Error body returned by PostgREST on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct RestError {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl RestError {
    pub fn describe(&self) -> String {
        let mut text = self.message.clone();
        if let Some(code) = &self.code {
            text = format!("{} ({})", text, code);
        }
        if let Some(details) = self.details.as_deref().filter(|d| !d.is_empty()) {
            text.push_str(&format!(": {}", details));
        }
        if let Some(hint) = self.hint.as_deref().filter(|h| !h.is_empty()) {
            text.push_str(&format!(" [hint: {}]", hint));
        }
        text
    }
}

// Insert payloads
#[derive(Debug, Serialize)]
pub struct NewTeam<'a> {
    pub name: &'a str,
    pub slug: &'a str,
}

#[derive(Debug, Serialize)]
pub struct NewMember<'a> {
    pub team_id: &'a str,
    pub name: &'a str,
}

// Update payloads
#[derive(Debug, Serialize)]
pub struct TeamNamePatch<'a> {
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct LastWinnerPatch<'a> {
    pub last_winner_member_id: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct VacationPatch {
    pub vacation: bool,
}

/// Minimal row used by existence checks.
#[derive(Debug, Deserialize)]
pub struct IdRow {
    pub id: String,
}
