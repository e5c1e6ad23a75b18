use clap::ArgMatches;
use crate::cli_context::CliContext;
use crate::interactive::handlers::run_room_mode;

pub async fn handle_open(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load()?;
    let slug = context.room_slug(matches.get_one::<String>("room").map(String::as_str))?;
    run_room_mode(&mut context, &slug).await
}
