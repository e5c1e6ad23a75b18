use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use crate::models::Member;

/// How the previous winner is treated when the pool is built.
///
/// Rooms run with `AllowRepeat`: vacation is the only exclusion and the last
/// winner stays eligible. `ExcludeLastWinner` keeps the older rule available
/// for rooms that opt into it through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatPolicy {
    #[default]
    AllowRepeat,
    ExcludeLastWinner,
}

/// Members eligible for the next draw, in their original order.
///
/// `last_winner_id` only has an effect under `RepeatPolicy::ExcludeLastWinner`.
pub fn pool_for_today<'a>(
    members: &'a [Member],
    last_winner_id: Option<&str>,
    policy: RepeatPolicy,
) -> Vec<&'a Member> {
    members
        .iter()
        .filter(|member| !member.vacation)
        .filter(|member| match (policy, last_winner_id) {
            (RepeatPolicy::ExcludeLastWinner, Some(last)) => member.id != last,
            _ => true,
        })
        .collect()
}

/// Uniform index into a sequence of `len` items: `floor(r * len)`.
///
/// Returns `None` without consuming a draw when `len` is zero.
pub fn pick_random_index<R>(len: usize, rng: &mut R) -> Option<usize>
where
    R: RandomSource + ?Sized,
{
    if len == 0 {
        return None;
    }
    let index = (rng.next_unit() * len as f64).floor() as usize;
    Some(index.min(len - 1))
}

pub fn pick_random<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: RandomSource + ?Sized,
{
    pick_random_index(items.len(), rng).map(|index| &items[index])
}
