use colored::*;

use super::utils::{display_name, format_angle, format_relative_time, format_vacation};
use crate::constants::{MSG_EMPTY_WHEEL, WHEEL_COLORS};
use crate::engine::{sector_colors, RepeatPolicy};
use crate::engine::palette::hex_to_rgb;
use crate::room::{Room, SpinOutcome};

fn sector_swatch(color_index: usize) -> ColoredString {
    match hex_to_rgb(WHEEL_COLORS[color_index]) {
        Some((r, g, b)) => "●".truecolor(r, g, b),
        None => "●".normal(),
    }
}

pub fn print_room(room: &Room, policy: RepeatPolicy) {
    println!("{} {}", room.team.name.bold(), format!("({})", room.team.slug).dimmed());
    if let Some(winner) = room.last_winner() {
        println!("{}: {}", "Last winner".bold(), winner.name.bright_blue());
    }
    println!();
    print_members(room);
    println!();

    let pool = room.pool(policy);
    if pool.is_empty() {
        println!("{}", MSG_EMPTY_WHEEL.dimmed());
        return;
    }

    println!("{} {}", "In the pool:".bold(), pool.len());
    for (member, color) in pool.iter().zip(sector_colors(pool.len())) {
        println!("  {} {}", sector_swatch(color), display_name(&member.name));
    }
}

pub fn print_members(room: &Room) {
    if room.members.is_empty() {
        println!("{}", "No members yet.".dimmed());
        return;
    }

    println!("{}", "Members:".bold());
    for member in &room.members {
        let checkbox = if member.vacation { "[x]" } else { "[ ]" };
        let marker = if room.is_last_winner(member) {
            " last time".yellow().to_string()
        } else {
            String::new()
        };
        let added = member
            .created_at
            .as_deref()
            .map(|ts| format!(" added {}", format_relative_time(ts)).dimmed().to_string())
            .unwrap_or_default();

        println!(
            "  {} {} - {}{}{} {}",
            checkbox,
            member.name,
            format_vacation(member.vacation),
            marker,
            added,
            member.id.dimmed()
        );
    }
}

pub fn print_draw(draw: &SpinOutcome) {
    println!("{} {}", "🎉".green(), format!("Lucky you, {}!", draw.winner.name).green().bold());
    println!("{}: {}", "Sector".bold(), draw.winner_index + 1);
    println!(
        "{}: {} → {} ({} full turns)",
        "Rotation".bold(),
        format_angle(draw.from_rotation),
        format_angle(draw.target_rotation),
        draw.full_rotations
    );
    if !draw.saved {
        println!("{}", "Dry run: the result was not saved.".dimmed());
    }
}
