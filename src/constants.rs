pub const CONFIG_FILE: &str = ".team-wheel-config.json";

pub const STORE_URL_ENV: &str = "WHEEL_STORE_URL";
pub const STORE_KEY_ENV: &str = "WHEEL_STORE_KEY";

// PostgREST layout of the hosted store
pub const REST_PATH: &str = "rest/v1";
pub const TEAMS_TABLE: &str = "teams";
pub const MEMBERS_TABLE: &str = "members";
pub const TEAM_FIELDS: &str = "id,name,slug,last_winner_member_id";
pub const MEMBER_FIELDS: &str = "id,name,vacation,created_at";

// Wheel geometry and spin
pub const WHEEL_POINTER_ANGLE: f64 = 90.0; // degrees, right side
pub const WHEEL_MIN_ROTATIONS: u32 = 5;
pub const WHEEL_MAX_ROTATIONS: u32 = 8;
pub const WHEEL_ANIMATION_DURATION_MS: u64 = 4000;
pub const WHEEL_ANIMATION_DELAY_MS: u64 = 500; // before the winner is shown
pub const WHEEL_TEXT_RADIUS_RATIO: f64 = 0.65;
pub const WHEEL_MAX_NAME_LENGTH: usize = 20;
pub const WHEEL_NAME_TRUNCATE_LENGTH: usize = 18;

pub const WHEEL_COLORS: [&str; 10] = [
    "#6366f1",
    "#f59e0b",
    "#10b981",
    "#f43f5e",
    "#06b6d4",
    "#a855f7",
    "#ec4899",
    "#14b8a6",
    "#8b5cf6",
    "#f97316",
];

// Slugs
pub const SLUG_MAX_LEN: usize = 50;
pub const SLUG_FALLBACK: &str = "team";

// User-facing messages
pub const MSG_TEAM_NOT_FOUND: &str = "Team not found. Create a new one with 'wheel create'.";
pub const MSG_ADD_MEMBERS: &str = "Add members first";
pub const MSG_EMPTY_WHEEL: &str = "Add members to spin the wheel";
pub const MSG_FAILED_TO_SAVE_RESULT: &str = "Failed to save the result";
