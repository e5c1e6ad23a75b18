use clap::ArgMatches;
use crate::cli_context::CliContext;
use crate::error::ErrorContext;
use crate::formatting::print_room;

pub async fn handle_room(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load()?;
    let slug = context.room_slug(matches.get_one::<String>("room").map(String::as_str))?;
    let rooms = context.rooms()?;

    let room = rooms
        .open_room(&slug)
        .await
        .with_context(|| format!("Loading room {}", slug))?;

    match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => println!("{}", serde_json::to_string_pretty(&room)?),
        _ => print_room(&room, context.wheel_settings().repeat_policy),
    }

    Ok(())
}
