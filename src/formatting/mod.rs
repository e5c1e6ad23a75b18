pub mod room;
pub mod utils;

pub use room::{print_draw, print_members, print_room};
pub use utils::{display_name, format_angle, format_relative_time, format_vacation};
