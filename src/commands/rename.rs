use clap::ArgMatches;
use colored::*;
use crate::cli_context::CliContext;

pub async fn handle_rename(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load()?;
    let slug = context.room_slug(matches.get_one::<String>("room").map(String::as_str))?;
    let rooms = context.rooms()?;

    let name = matches.get_one::<String>("name")
        .ok_or("Team name is required")?;

    let mut room = rooms.open_room(&slug).await?;
    if rooms.rename_team(&mut room, name).await? {
        println!("{} Room renamed to {}", "✅".green(), room.team.name.bold());
    } else {
        println!("{}", "Nothing to rename.".dimmed());
    }
    Ok(())
}
