pub mod auth;
pub mod create;
pub mod members;
pub mod open;
pub mod rename;
pub mod room;
pub mod spin;

pub use auth::handle_auth;
pub use create::{handle_create, handle_use};
pub use members::{handle_add, handle_remove, handle_vacation};
pub use open::handle_open;
pub use rename::handle_rename;
pub use room::handle_room;
pub use spin::handle_spin;
