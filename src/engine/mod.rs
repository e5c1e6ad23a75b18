//! Pure computation behind a draw: who is eligible, who wins, and how far the
//! wheel turns so the winner stops under the pointer.

pub mod palette;
pub mod random;
pub mod selection;
pub mod slug;
pub mod wheel;

pub use palette::sector_colors;
pub use random::{RandomSource, SequenceSource};
pub use selection::{pick_random, pick_random_index, pool_for_today, RepeatPolicy};
pub use slug::{slugify, slugify_with_limit};
pub use wheel::{calculate_wheel_rotation, draw, rotation_for, DrawResult, WheelSettings};
