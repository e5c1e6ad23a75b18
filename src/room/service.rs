use serde::Serialize;

use super::Room;
use crate::client::RoomStore;
use crate::constants::{MSG_FAILED_TO_SAVE_RESULT, MSG_TEAM_NOT_FOUND, SLUG_FALLBACK};
use crate::engine::{draw, slugify, RandomSource, WheelSettings};
use crate::error::{WheelError, WheelResult};
use crate::logging::log_info;
use crate::models::{Member, Team};

/// A finished spin. `saved` reports whether the winner reached the store.
#[derive(Debug, Clone, Serialize)]
pub struct SpinOutcome {
    pub winner: Member,
    pub winner_index: usize,
    pub from_rotation: f64,
    pub full_rotations: u32,
    pub target_rotation: f64,
    pub saved: bool,
}

/// Room operations over a store. Every mutation reloads the member list so
/// the caller's `Room` always matches what the store holds.
pub struct RoomService<S> {
    store: S,
}

impl<S: RoomStore> RoomService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// `base`, or `base-2`, `base-3`, ... whichever is free first.
    pub async fn unique_slug(&self, base: &str) -> WheelResult<String> {
        let base = if base.is_empty() { SLUG_FALLBACK } else { base };
        let mut candidate = base.to_string();
        let mut suffix = 2;

        while self.store.slug_exists(&candidate).await? {
            candidate = format!("{}-{}", base, suffix);
            suffix += 1;
        }

        Ok(candidate)
    }

    pub async fn create_team(&self, name: &str) -> WheelResult<Team> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(WheelError::InvalidInput("Team name cannot be empty".to_string()));
        }

        let slug = self.unique_slug(&slugify(trimmed)).await?;
        let team = self.store.insert_team(trimmed, &slug).await?;
        log_info(&format!("Created team '{}' at slug {}", team.name, team.slug));
        Ok(team)
    }

    pub async fn open_room(&self, slug: &str) -> WheelResult<Room> {
        let team = self
            .store
            .find_team_by_slug(slug)
            .await?
            .ok_or_else(|| WheelError::NotFound(format!("{} ({})", MSG_TEAM_NOT_FOUND, slug)))?;
        let members = self.store.list_members(&team.id).await?;
        Ok(Room::new(team, members))
    }

    pub async fn refresh_members(&self, room: &mut Room) -> WheelResult<()> {
        room.members = self.store.list_members(&room.team.id).await?;
        Ok(())
    }

    pub async fn add_member(&self, room: &mut Room, name: &str) -> WheelResult<Member> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(WheelError::InvalidInput("Member name cannot be empty".to_string()));
        }

        let member = self.store.insert_member(&room.team.id, trimmed).await?;
        log_info(&format!("Added member '{}' to {}", member.name, room.team.slug));
        self.refresh_members(room).await?;
        Ok(member)
    }

    pub async fn set_vacation(&self, room: &mut Room, member_id: &str, vacation: bool) -> WheelResult<()> {
        self.store.set_vacation(member_id, vacation).await?;
        log_info(&format!("Member {} vacation set to {}", member_id, vacation));
        self.refresh_members(room).await
    }

    /// Deleting the last winner also clears the team's winner pointer.
    pub async fn delete_member(&self, room: &mut Room, member_id: &str) -> WheelResult<()> {
        self.store.delete_member(member_id).await?;
        log_info(&format!("Deleted member {} from {}", member_id, room.team.slug));

        if room.team.last_winner_member_id.as_deref() == Some(member_id) {
            self.store.set_last_winner(&room.team.id, None).await?;
            room.team.last_winner_member_id = None;
        }

        self.refresh_members(room).await
    }

    /// Returns `false` when the trimmed name is empty or unchanged.
    pub async fn rename_team(&self, room: &mut Room, name: &str) -> WheelResult<bool> {
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed == room.team.name {
            return Ok(false);
        }

        self.store.update_team_name(&room.team.id, trimmed).await?;
        log_info(&format!("Renamed team {} to '{}'", room.team.slug, trimmed));
        room.team.name = trimmed.to_string();
        Ok(true)
    }

    pub async fn record_winner(&self, room: &mut Room, member_id: &str) -> WheelResult<()> {
        self.store.set_last_winner(&room.team.id, Some(member_id)).await?;
        log_info(&format!("Recorded winner {} for {}", member_id, room.team.slug));
        room.team.last_winner_member_id = Some(member_id.to_string());
        Ok(())
    }

    /// Draw from today's pool and, when `persist` is set, record the winner
    /// before returning. `None` means nobody is on the wheel.
    pub async fn spin<R>(
        &self,
        room: &mut Room,
        current_rotation: f64,
        settings: &WheelSettings,
        rng: &mut R,
        persist: bool,
    ) -> WheelResult<Option<SpinOutcome>>
    where
        R: RandomSource + ?Sized,
    {
        let outcome = {
            let pool = room.pool(settings.repeat_policy);
            draw(&pool, current_rotation, settings, rng).map(|result| SpinOutcome {
                winner: result.winner.clone(),
                winner_index: result.winner_index,
                from_rotation: result.from_rotation,
                full_rotations: result.full_rotations,
                target_rotation: result.target_rotation,
                saved: false,
            })
        };
        let Some(mut outcome) = outcome else {
            return Ok(None);
        };

        if persist {
            self.record_winner(room, &outcome.winner.id)
                .await
                .map_err(|e| WheelError::StoreError(format!("{}: {}", MSG_FAILED_TO_SAVE_RESULT, e)))?;
            outcome.saved = true;
        }

        Ok(Some(outcome))
    }
}
