use crate::error::WheelResult;
use crate::models::{Member, Team};

/// Persistence the room service needs from the hosted store.
///
/// Members come back in creation order; that order is the wheel's sector
/// order, so implementations must keep it stable.
#[allow(async_fn_in_trait)]
pub trait RoomStore {
    async fn find_team_by_slug(&self, slug: &str) -> WheelResult<Option<Team>>;

    async fn slug_exists(&self, slug: &str) -> WheelResult<bool> {
        Ok(self.find_team_by_slug(slug).await?.is_some())
    }

    async fn insert_team(&self, name: &str, slug: &str) -> WheelResult<Team>;

    async fn update_team_name(&self, team_id: &str, name: &str) -> WheelResult<()>;

    async fn set_last_winner(&self, team_id: &str, member_id: Option<&str>) -> WheelResult<()>;

    async fn list_members(&self, team_id: &str) -> WheelResult<Vec<Member>>;

    async fn insert_member(&self, team_id: &str, name: &str) -> WheelResult<Member>;

    async fn set_vacation(&self, member_id: &str, vacation: bool) -> WheelResult<()>;

    async fn delete_member(&self, member_id: &str) -> WheelResult<()>;
}

impl<T: RoomStore> RoomStore for std::sync::Arc<T> {
    async fn find_team_by_slug(&self, slug: &str) -> WheelResult<Option<Team>> {
        (**self).find_team_by_slug(slug).await
    }

    async fn slug_exists(&self, slug: &str) -> WheelResult<bool> {
        (**self).slug_exists(slug).await
    }

    async fn insert_team(&self, name: &str, slug: &str) -> WheelResult<Team> {
        (**self).insert_team(name, slug).await
    }

    async fn update_team_name(&self, team_id: &str, name: &str) -> WheelResult<()> {
        (**self).update_team_name(team_id, name).await
    }

    async fn set_last_winner(&self, team_id: &str, member_id: Option<&str>) -> WheelResult<()> {
        (**self).set_last_winner(team_id, member_id).await
    }

    async fn list_members(&self, team_id: &str) -> WheelResult<Vec<Member>> {
        (**self).list_members(team_id).await
    }

    async fn insert_member(&self, team_id: &str, name: &str) -> WheelResult<Member> {
        (**self).insert_member(team_id, name).await
    }

    async fn set_vacation(&self, member_id: &str, vacation: bool) -> WheelResult<()> {
        (**self).set_vacation(member_id, vacation).await
    }

    async fn delete_member(&self, member_id: &str) -> WheelResult<()> {
        (**self).delete_member(member_id).await
    }
}
