pub mod service;

use serde::Serialize;

use crate::engine::{pool_for_today, RepeatPolicy};
use crate::error::{WheelError, WheelResult};
use crate::models::{Member, Team};

pub use service::{RoomService, SpinOutcome};

/// A team together with its members in wheel order.
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    pub team: Team,
    pub members: Vec<Member>,
}

impl Room {
    pub fn new(team: Team, members: Vec<Member>) -> Self {
        Self { team, members }
    }

    /// The members shown on the wheel and eligible for the next draw.
    pub fn pool(&self, policy: RepeatPolicy) -> Vec<&Member> {
        pool_for_today(&self.members, self.team.last_winner_member_id.as_deref(), policy)
    }

    pub fn last_winner(&self) -> Option<&Member> {
        let id = self.team.last_winner_member_id.as_deref()?;
        self.members.iter().find(|m| m.id == id)
    }

    pub fn is_last_winner(&self, member: &Member) -> bool {
        self.team.last_winner_member_id.as_deref() == Some(member.id.as_str())
    }

    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Look a member up by id, or by name ignoring case.
    pub fn find_member(&self, query: &str) -> WheelResult<&Member> {
        let query = query.trim();
        if let Some(member) = self.member(query) {
            return Ok(member);
        }

        let needle = query.to_lowercase();
        let mut matches = self.members.iter().filter(|m| m.name.to_lowercase() == needle);
        match (matches.next(), matches.next()) {
            (Some(member), None) => Ok(member),
            (Some(_), Some(_)) => Err(WheelError::InvalidInput(format!(
                "Several members are called '{}'; use the member id instead",
                query
            ))),
            (None, _) => Err(WheelError::NotFound(format!(
                "No member '{}' in {}",
                query, self.team.name
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> Room {
        Room::new(
            Team {
                id: "t1".to_string(),
                name: "Core".to_string(),
                slug: "core".to_string(),
                last_winner_member_id: Some("2".to_string()),
            },
            vec![
                Member::new("1", "Ann", false),
                Member::new("2", "Bob", false),
                Member::new("3", "Cid", true),
                Member::new("4", "bob", false),
            ],
        )
    }

    #[test]
    fn test_pool_keeps_last_winner() {
        let room = room();
        let ids: Vec<&str> = room.pool(RepeatPolicy::AllowRepeat).iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "4"]);
    }

    #[test]
    fn test_last_winner_lookup() {
        let room = room();
        assert_eq!(room.last_winner().map(|m| m.name.as_str()), Some("Bob"));
        assert!(room.is_last_winner(&room.members[1]));
        assert!(!room.is_last_winner(&room.members[0]));
    }

    #[test]
    fn test_find_member_by_id_or_name() {
        let room = room();
        assert_eq!(room.find_member("3").unwrap().name, "Cid");
        assert_eq!(room.find_member("  ANN ").unwrap().id, "1");
        assert!(matches!(room.find_member("bob"), Err(WheelError::InvalidInput(_))));
        assert!(matches!(room.find_member("Dan"), Err(WheelError::NotFound(_))));
    }
}
