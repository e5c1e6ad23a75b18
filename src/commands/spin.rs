use clap::ArgMatches;
use colored::*;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde_json::json;
use crate::cli_context::CliContext;
use crate::constants::MSG_ADD_MEMBERS;
use crate::formatting::print_draw;

pub async fn handle_spin(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load()?;
    let slug = context.room_slug(matches.get_one::<String>("room").map(String::as_str))?;
    let settings = context.spin_settings()?;
    let rooms = context.rooms()?;

    let current_rotation = match matches.get_one::<String>("rotation") {
        Some(value) => value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("Invalid rotation '{}': expected degrees", value))?,
        None => 0.0,
    };
    let dry_run = matches.get_flag("dry-run");
    let as_json = matches.get_one::<String>("format").map(String::as_str) == Some("json");

    let mut rng: Box<dyn RngCore> = match matches.get_one::<String>("seed") {
        Some(seed) => {
            let seed = seed
                .parse::<u64>()
                .map_err(|_| format!("Invalid seed '{}'", seed))?;
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(rand::rng()),
    };

    let mut room = rooms.open_room(&slug).await?;

    // Saved before anything is printed, so the output reflects the store.
    let outcome = rooms
        .spin(&mut room, current_rotation, &settings, rng.as_mut(), !dry_run)
        .await?;

    let Some(outcome) = outcome else {
        if as_json {
            println!("{}", json!({ "winner": null, "message": MSG_ADD_MEMBERS }));
        } else {
            println!("{}", MSG_ADD_MEMBERS.yellow());
        }
        return Ok(());
    };

    if as_json {
        let output = json!({
            "team": room.team.slug,
            "winner": outcome.winner,
            "winner_index": outcome.winner_index,
            "from_rotation": outcome.from_rotation,
            "full_rotations": outcome.full_rotations,
            "target_rotation": outcome.target_rotation,
            "saved": outcome.saved,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_draw(&outcome);
    }

    Ok(())
}
