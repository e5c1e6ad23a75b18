use std::sync::Mutex;

use crate::client::RoomStore;
use crate::error::{WheelError, WheelResult};
use crate::models::{Member, Team};

#[derive(Default)]
struct State {
    teams: Vec<Team>,
    // (team_id, member) in insertion order
    members: Vec<(String, Member)>,
    next_id: u32,
    fail_writes: bool,
}

/// Room store kept in memory, with a switch that makes every write fail.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.state.lock().unwrap().fail_writes = fail;
    }

    pub fn team(&self, team_id: &str) -> Option<Team> {
        self.state.lock().unwrap().teams.iter().find(|t| t.id == team_id).cloned()
    }

    fn write(&self) -> WheelResult<std::sync::MutexGuard<'_, State>> {
        let state = self.state.lock().unwrap();
        if state.fail_writes {
            return Err(WheelError::StoreError("write rejected".to_string()));
        }
        Ok(state)
    }
}

impl RoomStore for MemoryStore {
    async fn find_team_by_slug(&self, slug: &str) -> WheelResult<Option<Team>> {
        let state = self.state.lock().unwrap();
        Ok(state.teams.iter().find(|t| t.slug == slug).cloned())
    }

    async fn insert_team(&self, name: &str, slug: &str) -> WheelResult<Team> {
        let mut state = self.write()?;
        state.next_id += 1;
        let team = Team {
            id: format!("team-{}", state.next_id),
            name: name.to_string(),
            slug: slug.to_string(),
            last_winner_member_id: None,
        };
        state.teams.push(team.clone());
        Ok(team)
    }

    async fn update_team_name(&self, team_id: &str, name: &str) -> WheelResult<()> {
        let mut state = self.write()?;
        let team = state
            .teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or_else(|| WheelError::NotFound(team_id.to_string()))?;
        team.name = name.to_string();
        Ok(())
    }

    async fn set_last_winner(&self, team_id: &str, member_id: Option<&str>) -> WheelResult<()> {
        let mut state = self.write()?;
        let team = state
            .teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or_else(|| WheelError::NotFound(team_id.to_string()))?;
        team.last_winner_member_id = member_id.map(str::to_string);
        Ok(())
    }

    async fn list_members(&self, team_id: &str) -> WheelResult<Vec<Member>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .members
            .iter()
            .filter(|(team, _)| team == team_id)
            .map(|(_, member)| member.clone())
            .collect())
    }

    async fn insert_member(&self, team_id: &str, name: &str) -> WheelResult<Member> {
        let mut state = self.write()?;
        state.next_id += 1;
        let member = Member::new(format!("member-{}", state.next_id), name, false);
        state.members.push((team_id.to_string(), member.clone()));
        Ok(member)
    }

    async fn set_vacation(&self, member_id: &str, vacation: bool) -> WheelResult<()> {
        let mut state = self.write()?;
        let (_, member) = state
            .members
            .iter_mut()
            .find(|(_, m)| m.id == member_id)
            .ok_or_else(|| WheelError::NotFound(member_id.to_string()))?;
        member.vacation = vacation;
        Ok(())
    }

    async fn delete_member(&self, member_id: &str) -> WheelResult<()> {
        let mut state = self.write()?;
        state.members.retain(|(_, m)| m.id != member_id);
        Ok(())
    }
}
