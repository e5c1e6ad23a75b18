pub mod member;
pub mod rest;
pub mod team;

// Re-export commonly used types
pub use member::Member;
pub use rest::RestError;
pub use team::Team;
