use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::animation::SpinAnimation;
use crate::client::RoomStore;
use crate::constants::{MSG_ADD_MEMBERS, MSG_FAILED_TO_SAVE_RESULT};
use crate::engine::{draw, RandomSource, WheelSettings};
use crate::logging::{log_debug, log_error, log_info};
use crate::models::Member;
use crate::room::{Room, RoomService};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMode {
    Normal,
    AddMember,
    Rename,
    ConfirmDelete,
}

/// Store work requested by a key press, run by the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    Refresh,
    AddMember(String),
    SetVacation { member_id: String, vacation: bool },
    DeleteMember(String),
    RenameTeam(String),
    SaveWinner(String),
}

/// A spin in flight. The wheel keeps showing the pool it was drawn from.
#[derive(Debug, Clone)]
pub struct ActiveSpin {
    pub animation: SpinAnimation,
    pub started: Instant,
    pub wheel: Vec<Member>,
    pub winner: Member,
    pub winner_index: usize,
}

/// Cumulative wheel rotation plus the spin currently animating, if any.
#[derive(Debug, Clone, Default)]
pub struct WheelState {
    pub rotation: f64,
    pub spin: Option<ActiveSpin>,
    /// Wheel the last spin landed on. Shown until the next spin or member
    /// edit, so the winner stays under the pointer after it is saved.
    pub settled: Option<Vec<Member>>,
}

impl WheelState {
    pub fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }

    pub fn angle_at(&self, now: Instant) -> f64 {
        match &self.spin {
            Some(spin) => spin
                .animation
                .angle_at(now.saturating_duration_since(spin.started)),
            None => self.rotation,
        }
    }
}

pub struct RoomApp {
    pub mode: AppMode,
    pub room: Room,
    pub settings: WheelSettings,
    pub selected_index: usize,
    pub input: String,
    pub wheel: WheelState,
    pub status: Option<String>,
    pub error_message: Option<String>,
    pub pending: Option<PendingAction>,
    pub should_quit: bool,
    rng: Box<dyn RandomSource>,
}

impl RoomApp {
    pub fn new(room: Room, settings: WheelSettings) -> Self {
        Self::with_random_source(room, settings, Box::new(rand::rng()))
    }

    pub fn with_random_source(
        room: Room,
        settings: WheelSettings,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            mode: AppMode::Normal,
            room,
            settings,
            selected_index: 0,
            input: String::new(),
            wheel: WheelState::default(),
            status: None,
            error_message: None,
            pending: None,
            should_quit: false,
            rng,
        }
    }

    /// Members drawn on the wheel right now.
    pub fn wheel_members(&self) -> Vec<&Member> {
        if let Some(spin) = &self.wheel.spin {
            return spin.wheel.iter().collect();
        }
        match &self.wheel.settled {
            Some(wheel) => wheel.iter().collect(),
            None => self.room.pool(self.settings.repeat_policy),
        }
    }

    pub fn selected_member(&self) -> Option<&Member> {
        self.room.members.get(self.selected_index)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.mode {
            AppMode::Normal => self.handle_normal_mode_key(key.code),
            AppMode::AddMember | AppMode::Rename => self.handle_input_mode_key(key.code),
            AppMode::ConfirmDelete => self.handle_confirm_delete_key(key.code),
        }
    }

    fn handle_normal_mode_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.move_selection_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection_up(),
            KeyCode::Char('s') => self.start_spin(Instant::now()),
            KeyCode::Char(' ') => {
                if self.edits_blocked() {
                    return;
                }
                if let Some(member) = self.selected_member() {
                    self.pending = Some(PendingAction::SetVacation {
                        member_id: member.id.clone(),
                        vacation: !member.vacation,
                    });
                }
            }
            KeyCode::Char('a') => {
                if self.edits_blocked() {
                    return;
                }
                self.input.clear();
                self.mode = AppMode::AddMember;
            }
            KeyCode::Char('e') => {
                if self.edits_blocked() {
                    return;
                }
                self.input = self.room.team.name.clone();
                self.mode = AppMode::Rename;
            }
            KeyCode::Char('d') => {
                if self.edits_blocked() {
                    return;
                }
                if self.selected_member().is_some() {
                    self.mode = AppMode::ConfirmDelete;
                }
            }
            KeyCode::Char('r') => {
                if self.edits_blocked() {
                    return;
                }
                self.pending = Some(PendingAction::Refresh);
            }
            _ => {}
        }
    }

    fn handle_input_mode_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.input.clear();
                self.mode = AppMode::Normal;
            }
            KeyCode::Enter => {
                let value = self.input.trim().to_string();
                if !value.is_empty() {
                    self.pending = Some(match self.mode {
                        AppMode::Rename => PendingAction::RenameTeam(value),
                        _ => PendingAction::AddMember(value),
                    });
                }
                self.input.clear();
                self.mode = AppMode::Normal;
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    fn handle_confirm_delete_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                if let Some(member) = self.selected_member() {
                    self.pending = Some(PendingAction::DeleteMember(member.id.clone()));
                }
                self.mode = AppMode::Normal;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.mode = AppMode::Normal;
            }
            _ => {}
        }
    }

    fn edits_blocked(&mut self) -> bool {
        if self.wheel.is_spinning() {
            self.status = Some("Wait for the wheel to stop".to_string());
            return true;
        }
        false
    }

    fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.room.members.len() {
            self.selected_index += 1;
        }
    }

    fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        if self.selected_index >= self.room.members.len() {
            self.selected_index = self.room.members.len().saturating_sub(1);
        }
    }

    /// Draw a winner and start animating towards it.
    pub fn start_spin(&mut self, now: Instant) {
        if self.wheel.is_spinning() {
            return;
        }

        let pool = self.room.pool(self.settings.repeat_policy);
        let Some(result) = draw(&pool, self.wheel.rotation, &self.settings, self.rng.as_mut()) else {
            self.status = Some(MSG_ADD_MEMBERS.to_string());
            return;
        };

        log_debug(&format!(
            "Spinning {} from {:.1} to {:.1}",
            self.room.team.slug, result.from_rotation, result.target_rotation
        ));

        let spin = ActiveSpin {
            animation: SpinAnimation::new(result.from_rotation, result.target_rotation),
            started: now,
            wheel: pool.iter().map(|m| (*m).clone()).collect(),
            winner: result.winner.clone(),
            winner_index: result.winner_index,
        };

        self.wheel.spin = Some(spin);
        self.wheel.settled = None;
        self.status = Some("Spinning...".to_string());
        self.error_message = None;
    }

    /// Finish a spin once its reveal time has passed.
    pub fn tick(&mut self, now: Instant) {
        let revealed = match &self.wheel.spin {
            Some(spin) => spin
                .animation
                .is_revealed(now.saturating_duration_since(spin.started)),
            None => false,
        };
        if !revealed {
            return;
        }

        if let Some(spin) = self.wheel.spin.take() {
            self.wheel.rotation = spin.animation.to;
            self.status = Some(format!("Lucky you, {}! 🎉", spin.winner.name));
            self.pending = Some(PendingAction::SaveWinner(spin.winner.id));
            self.wheel.settled = Some(spin.wheel);
        }
    }

    /// Run the queued store action and fold its outcome into the status line.
    pub async fn apply_pending<S: RoomStore>(&mut self, rooms: &RoomService<S>) {
        let Some(action) = self.pending.take() else {
            return;
        };

        let outcome = match &action {
            PendingAction::Refresh => rooms
                .refresh_members(&mut self.room)
                .await
                .map(|_| Some("Refreshed".to_string())),
            PendingAction::AddMember(name) => rooms
                .add_member(&mut self.room, name)
                .await
                .map(|member| Some(format!("Added {}", member.name))),
            PendingAction::SetVacation { member_id, vacation } => rooms
                .set_vacation(&mut self.room, member_id, *vacation)
                .await
                .map(|_| {
                    let name = self
                        .room
                        .member(member_id)
                        .map(|m| m.name.clone())
                        .unwrap_or_default();
                    Some(if *vacation {
                        format!("{} is on vacation", name)
                    } else {
                        format!("{} is back in the pool", name)
                    })
                }),
            PendingAction::DeleteMember(member_id) => {
                let name = self.room.member(member_id).map(|m| m.name.clone()).unwrap_or_default();
                rooms
                    .delete_member(&mut self.room, member_id)
                    .await
                    .map(|_| Some(format!("Removed {}", name)))
            }
            PendingAction::RenameTeam(name) => rooms
                .rename_team(&mut self.room, name)
                .await
                .map(|renamed| renamed.then(|| format!("Renamed to {}", name))),
            // The announcement is already on screen.
            PendingAction::SaveWinner(member_id) => rooms
                .record_winner(&mut self.room, member_id)
                .await
                .map(|_| None),
        };

        match outcome {
            Ok(message) => {
                self.error_message = None;
                if !matches!(action, PendingAction::SaveWinner(_) | PendingAction::RenameTeam(_)) {
                    self.wheel.settled = None;
                }
                if let Some(message) = message {
                    log_info(&message);
                    self.status = Some(message);
                }
            }
            Err(e) => {
                log_error(&format!("{:?} failed: {}", action, e));
                self.error_message = Some(match action {
                    PendingAction::SaveWinner(_) => MSG_FAILED_TO_SAVE_RESULT.to_string(),
                    _ => e.to_string(),
                });
            }
        }

        self.clamp_selection();
    }
}
