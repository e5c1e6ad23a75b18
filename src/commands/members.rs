use clap::ArgMatches;
use colored::*;
use crate::cli_context::CliContext;
use crate::formatting::format_vacation;

fn room_arg(matches: &ArgMatches) -> Option<&str> {
    matches.get_one::<String>("room").map(String::as_str)
}

pub async fn handle_add(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load()?;
    let slug = context.room_slug(room_arg(matches))?;
    let rooms = context.rooms()?;

    let name = matches.get_one::<String>("name")
        .ok_or("Member name is required")?;

    let mut room = rooms.open_room(&slug).await?;
    let member = rooms.add_member(&mut room, name).await?;

    println!("{} Added {} to {}", "✅".green(), member.name.bold(), room.team.name);
    println!("{}: {}", "Members".bold(), room.members.len());
    Ok(())
}

pub async fn handle_vacation(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load()?;
    let slug = context.room_slug(room_arg(matches))?;
    let rooms = context.rooms()?;

    let query = matches.get_one::<String>("member")
        .ok_or("Member is required")?;
    let vacation = !matches.get_flag("off");

    let mut room = rooms.open_room(&slug).await?;
    let member = room.find_member(query)?.clone();
    rooms.set_vacation(&mut room, &member.id, vacation).await?;

    println!("{} {} is now {}", "✅".green(), member.name.bold(), format_vacation(vacation));
    Ok(())
}

pub async fn handle_remove(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load()?;
    let slug = context.room_slug(room_arg(matches))?;
    let rooms = context.rooms()?;

    let query = matches.get_one::<String>("member")
        .ok_or("Member is required")?;

    let mut room = rooms.open_room(&slug).await?;
    let member = room.find_member(query)?.clone();
    rooms.delete_member(&mut room, &member.id).await?;

    println!("{} Removed {} from {}", "✅".green(), member.name.bold(), room.team.name);
    Ok(())
}
