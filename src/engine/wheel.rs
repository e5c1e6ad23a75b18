use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use super::selection::{pick_random_index, RepeatPolicy};
use crate::constants::{WHEEL_MAX_ROTATIONS, WHEEL_MIN_ROTATIONS, WHEEL_POINTER_ANGLE};
use crate::error::{WheelError, WheelResult};
use crate::models::Member;

/// Tunables for a spin. Angles are in degrees, measured clockwise from the top
/// of the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelSettings {
    pub pointer_angle: f64,
    pub min_rotations: u32,
    pub max_rotations: u32,
    pub repeat_policy: RepeatPolicy,
}

impl Default for WheelSettings {
    fn default() -> Self {
        Self {
            pointer_angle: WHEEL_POINTER_ANGLE,
            min_rotations: WHEEL_MIN_ROTATIONS,
            max_rotations: WHEEL_MAX_ROTATIONS,
            repeat_policy: RepeatPolicy::default(),
        }
    }
}

impl WheelSettings {
    /// Zero full rotations is allowed; the wheel then only turns by the
    /// offset to the winner, which may be none at all.
    pub fn validate(&self) -> WheelResult<()> {
        if !self.pointer_angle.is_finite() {
            return Err(WheelError::ConfigError(
                "wheel.pointer_angle must be a finite number".to_string(),
            ));
        }
        if self.min_rotations > self.max_rotations {
            return Err(WheelError::ConfigError(format!(
                "wheel.min_rotations ({}) is greater than wheel.max_rotations ({})",
                self.min_rotations, self.max_rotations
            )));
        }
        Ok(())
    }

    /// Uniform integer in `min_rotations..=max_rotations`, one draw.
    pub fn draw_full_rotations<R>(&self, rng: &mut R) -> u32
    where
        R: RandomSource + ?Sized,
    {
        let span = self.max_rotations.saturating_sub(self.min_rotations) + 1;
        let offset = (rng.next_unit() * span as f64).floor() as u32;
        self.min_rotations + offset.min(span - 1)
    }
}

/// Target rotation for a known number of full turns.
///
/// The winner's sector bisector sits at `index * slice + slice / 2` in the
/// wheel's own frame; the result is the smallest forward turn that carries it
/// under `pointer_angle`, plus `full_rotations` whole turns.
pub fn rotation_for(
    winner_index: usize,
    wheel_member_count: usize,
    current_rotation: f64,
    pointer_angle: f64,
    full_rotations: u32,
) -> f64 {
    if wheel_member_count == 0 {
        return current_rotation;
    }
    debug_assert!(winner_index < wheel_member_count);

    let slice = 360.0 / wheel_member_count as f64;
    let bisector_angle = winner_index as f64 * slice + slice / 2.0;

    let normalized_current = ((current_rotation % 360.0) + 360.0) % 360.0;
    let current_bisector_position = (bisector_angle + normalized_current) % 360.0;

    let mut delta = pointer_angle - current_bisector_position;
    if delta < 0.0 {
        delta += 360.0;
    }

    current_rotation + full_rotations as f64 * 360.0 + delta
}

/// Next cumulative rotation for a spin that lands on `winner_index`.
///
/// An empty wheel leaves the rotation untouched and draws nothing.
pub fn calculate_wheel_rotation<R>(
    winner_index: usize,
    wheel_member_count: usize,
    current_rotation: f64,
    settings: &WheelSettings,
    rng: &mut R,
) -> f64
where
    R: RandomSource + ?Sized,
{
    if wheel_member_count == 0 {
        return current_rotation;
    }
    let full_rotations = settings.draw_full_rotations(rng);
    rotation_for(
        winner_index,
        wheel_member_count,
        current_rotation,
        settings.pointer_angle,
        full_rotations,
    )
}

#[derive(Debug, Clone, Serialize)]
pub struct DrawResult<'a> {
    pub winner: &'a Member,
    pub winner_index: usize,
    pub from_rotation: f64,
    pub full_rotations: u32,
    pub target_rotation: f64,
}

/// One spin over the displayed pool: winner first, then the rotation count.
///
/// The same slice is used for picking and for the geometry, so the winner's
/// index is always the sector the wheel renders for it.
pub fn draw<'a, R>(
    pool: &[&'a Member],
    current_rotation: f64,
    settings: &WheelSettings,
    rng: &mut R,
) -> Option<DrawResult<'a>>
where
    R: RandomSource + ?Sized,
{
    let winner_index = pick_random_index(pool.len(), rng)?;
    let full_rotations = settings.draw_full_rotations(rng);
    let target_rotation = rotation_for(
        winner_index,
        pool.len(),
        current_rotation,
        settings.pointer_angle,
        full_rotations,
    );

    Some(DrawResult {
        winner: pool[winner_index],
        winner_index,
        from_rotation: current_rotation,
        full_rotations,
        target_rotation,
    })
}
