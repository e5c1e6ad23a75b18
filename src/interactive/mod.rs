pub mod animation;
pub mod app;
pub mod event;
pub mod handlers;
pub mod ui;

pub use app::{AppMode, PendingAction, RoomApp, WheelState};
pub use handlers::run_room_mode;
