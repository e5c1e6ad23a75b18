use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::store::RoomStore;
use crate::config::StoreCredentials;
use crate::constants::{MEMBERS_TABLE, MEMBER_FIELDS, REST_PATH, TEAMS_TABLE, TEAM_FIELDS};
use crate::error::{WheelError, WheelResult};
use crate::logging::{log_debug, log_error};
use crate::models::rest::{
    IdRow, LastWinnerPatch, NewMember, NewTeam, TeamNamePatch, VacationPatch,
};
use crate::models::{Member, RestError, Team};

const PREFER: &str = "Prefer";

/// A PostgREST error body becomes a `StoreError`; anything else (a proxy
/// page, an empty body) is reported with its HTTP status.
pub(crate) fn status_error(what: &str, status: StatusCode, body: &str) -> WheelError {
    match serde_json::from_str::<RestError>(body) {
        Ok(rest_error) => WheelError::StoreError(format!("{}: {}", what, rest_error.describe())),
        Err(_) => WheelError::ApiError(format!("{}: HTTP {} {}", what, status, body)),
    }
}
const RETURN_REPRESENTATION: &str = "return=representation";

/// PostgREST client for the `teams` and `members` tables.
pub struct StoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl StoreClient {
    pub fn new(credentials: &StoreCredentials) -> WheelResult<Self> {
        let invalid_key = |_| WheelError::ConfigError("Invalid API key format".to_string());

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static("apikey"),
            HeaderValue::from_str(&credentials.api_key).map_err(invalid_key)?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", credentials.api_key)).map_err(invalid_key)?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: credentials.url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/{}/{}", self.base_url, REST_PATH, table)
    }

    async fn check(response: Response, what: &str) -> WheelResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        log_error(&format!("{} failed with status {}: {}", what, status, body));
        Err(status_error(what, status, &body))
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder, what: &str) -> WheelResult<T> {
        log_debug(&format!("Store request: {}", what));
        let response = Self::check(request.send().await?, what).await?;
        Ok(response.json::<T>().await?)
    }

    async fn execute(&self, request: RequestBuilder, what: &str) -> WheelResult<()> {
        log_debug(&format!("Store request: {}", what));
        Self::check(request.send().await?, what).await?;
        Ok(())
    }

    /// Inserts return an array of created rows; we always insert one.
    fn single<T>(rows: Vec<T>, what: &str) -> WheelResult<T> {
        rows.into_iter()
            .next()
            .ok_or_else(|| WheelError::ApiError(format!("{} returned no rows", what)))
    }
}

fn eq(value: &str) -> String {
    format!("eq.{}", value)
}

impl RoomStore for StoreClient {
    async fn find_team_by_slug(&self, slug: &str) -> WheelResult<Option<Team>> {
        let request = self
            .client
            .get(self.table_url(TEAMS_TABLE))
            .query(&[("select", TEAM_FIELDS.to_string()), ("slug", eq(slug)), ("limit", "1".to_string())]);
        let teams: Vec<Team> = self.fetch(request, "load team").await?;
        Ok(teams.into_iter().next())
    }

    async fn slug_exists(&self, slug: &str) -> WheelResult<bool> {
        let request = self
            .client
            .get(self.table_url(TEAMS_TABLE))
            .query(&[("select", "id".to_string()), ("slug", eq(slug)), ("limit", "1".to_string())]);
        let rows: Vec<IdRow> = self.fetch(request, "check slug").await?;
        Ok(!rows.is_empty())
    }

    async fn insert_team(&self, name: &str, slug: &str) -> WheelResult<Team> {
        let request = self
            .client
            .post(self.table_url(TEAMS_TABLE))
            .header(PREFER, RETURN_REPRESENTATION)
            .query(&[("select", TEAM_FIELDS)])
            .json(&[NewTeam { name, slug }]);
        let rows: Vec<Team> = self.fetch(request, "create team").await?;
        Self::single(rows, "create team")
    }

    async fn update_team_name(&self, team_id: &str, name: &str) -> WheelResult<()> {
        let request = self
            .client
            .patch(self.table_url(TEAMS_TABLE))
            .query(&[("id", eq(team_id))])
            .json(&TeamNamePatch { name });
        self.execute(request, "rename team").await
    }

    async fn set_last_winner(&self, team_id: &str, member_id: Option<&str>) -> WheelResult<()> {
        let request = self
            .client
            .patch(self.table_url(TEAMS_TABLE))
            .query(&[("id", eq(team_id))])
            .json(&LastWinnerPatch { last_winner_member_id: member_id });
        self.execute(request, "save last winner").await
    }

    async fn list_members(&self, team_id: &str) -> WheelResult<Vec<Member>> {
        let request = self.client.get(self.table_url(MEMBERS_TABLE)).query(&[
            ("select", MEMBER_FIELDS.to_string()),
            ("team_id", eq(team_id)),
            ("order", "created_at.asc".to_string()),
        ]);
        self.fetch(request, "load members").await
    }

    async fn insert_member(&self, team_id: &str, name: &str) -> WheelResult<Member> {
        let request = self
            .client
            .post(self.table_url(MEMBERS_TABLE))
            .header(PREFER, RETURN_REPRESENTATION)
            .query(&[("select", MEMBER_FIELDS)])
            .json(&[NewMember { team_id, name }]);
        let rows: Vec<Member> = self.fetch(request, "add member").await?;
        Self::single(rows, "add member")
    }

    async fn set_vacation(&self, member_id: &str, vacation: bool) -> WheelResult<()> {
        let request = self
            .client
            .patch(self.table_url(MEMBERS_TABLE))
            .query(&[("id", eq(member_id))])
            .json(&VacationPatch { vacation });
        self.execute(request, "update vacation").await
    }

    async fn delete_member(&self, member_id: &str) -> WheelResult<()> {
        let request = self
            .client
            .delete(self.table_url(MEMBERS_TABLE))
            .query(&[("id", eq(member_id))]);
        self.execute(request, "delete member").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(url: &str) -> StoreCredentials {
        StoreCredentials {
            url: url.to_string(),
            api_key: "anon-key".to_string(),
        }
    }

    #[test]
    fn test_table_urls() {
        let client = StoreClient::new(&credentials("https://abc.supabase.co/")).unwrap();
        assert_eq!(client.base_url(), "https://abc.supabase.co");
        assert_eq!(client.table_url(TEAMS_TABLE), "https://abc.supabase.co/rest/v1/teams");
        assert_eq!(client.table_url(MEMBERS_TABLE), "https://abc.supabase.co/rest/v1/members");
    }

    #[test]
    fn test_rejects_unprintable_key() {
        let creds = StoreCredentials {
            url: "https://abc.supabase.co".to_string(),
            api_key: "bad\nkey".to_string(),
        };
        assert!(matches!(StoreClient::new(&creds), Err(WheelError::ConfigError(_))));
    }

    #[test]
    fn test_single_row() {
        assert_eq!(StoreClient::single(vec![7], "x").unwrap(), 7);
        assert!(StoreClient::single(Vec::<u8>::new(), "x").is_err());
    }

    #[test]
    fn test_rest_error_description() {
        let body = r#"{"code":"23505","message":"duplicate key value","details":"Key (slug)=(core) already exists.","hint":null}"#;
        let error: RestError = serde_json::from_str(body).unwrap();
        assert_eq!(
            error.describe(),
            "duplicate key value (23505): Key (slug)=(core) already exists."
        );
    }
}
