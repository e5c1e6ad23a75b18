use clap::ArgMatches;
use colored::*;
use crate::cli_context::CliContext;

pub async fn handle_create(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load()?;
    let rooms = context.rooms()?;

    let name = matches.get_one::<String>("name")
        .ok_or("Team name is required")?;

    let team = rooms.create_team(name).await?;
    context.set_default_room(&team.slug)?;

    println!("{} {}", "✅".green(), "Room created successfully!".green().bold());
    println!("{}: {}", "Name".bold(), team.name);
    println!("{}: {}", "Slug".bold(), team.slug.bright_blue().bold());
    println!("{}", format!("'{}' is now your default room.", team.slug).dimmed());

    Ok(())
}

pub async fn handle_use(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load()?;
    let rooms = context.rooms()?;

    let slug = matches.get_one::<String>("slug")
        .ok_or("Room slug is required")?;

    let room = rooms.open_room(slug).await?;
    context.set_default_room(&room.team.slug)?;

    println!("Default room set to {} ({})", room.team.name.bold(), room.team.slug);
    Ok(())
}
