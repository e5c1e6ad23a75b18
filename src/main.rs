use std::process;

use clap::{Arg, ArgAction, Command};

use team_wheel::commands::{
    handle_add, handle_auth, handle_create, handle_open, handle_remove, handle_rename, handle_room,
    handle_spin, handle_use, handle_vacation,
};
use team_wheel::logging::{get_log_file_path, init_logging, log_error};

fn room_arg() -> Arg {
    Arg::new("room")
        .short('r')
        .long("room")
        .value_name("SLUG")
        .help("Team slug (defaults to the room set with 'wheel use')")
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .help("Output format")
        .value_parser(["simple", "json"])
        .default_value("simple")
}

fn build_cli() -> Command {
    Command::new("wheel")
        .about("Team wheel - spin a fortune wheel to pick today's team member")
        .version("1.0.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("auth")
                .about("Configure the room store")
                .arg(
                    Arg::new("url")
                        .long("url")
                        .value_name("URL")
                        .help("Store base URL")
                        .requires("key")
                )
                .arg(
                    Arg::new("key")
                        .long("key")
                        .value_name("KEY")
                        .help("Store API key")
                        .requires("url")
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the current store settings")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("create")
                .about("Create a team and remember it as the default room")
                .arg(
                    Arg::new("name")
                        .value_name("NAME")
                        .help("Team name")
                        .required(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("use")
                .about("Set the default room")
                .arg(
                    Arg::new("slug")
                        .value_name("SLUG")
                        .help("Team slug")
                        .required(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("room")
                .about("Show a team, its members and today's pool")
                .arg(room_arg())
                .arg(format_arg())
        )
        .subcommand(
            Command::new("add")
                .about("Add a member to the wheel")
                .arg(room_arg())
                .arg(
                    Arg::new("name")
                        .value_name("NAME")
                        .help("Member name")
                        .required(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("vacation")
                .about("Send a member on vacation, or bring them back with --off")
                .arg(room_arg())
                .arg(
                    Arg::new("member")
                        .value_name("MEMBER")
                        .help("Member id or name")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("off")
                        .long("off")
                        .help("End the vacation")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("remove")
                .about("Remove a member from the team")
                .arg(room_arg())
                .arg(
                    Arg::new("member")
                        .value_name("MEMBER")
                        .help("Member id or name")
                        .required(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("rename")
                .about("Rename the team")
                .arg(room_arg())
                .arg(
                    Arg::new("name")
                        .value_name("NAME")
                        .help("New team name")
                        .required(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("spin")
                .about("Spin the wheel and record the winner")
                .arg(room_arg())
                .arg(
                    Arg::new("rotation")
                        .long("rotation")
                        .value_name("DEG")
                        .help("Current wheel rotation in degrees")
                        .allow_negative_numbers(true)
                )
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .help("Draw without saving the winner")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_name("SEED")
                        .help("Seed the draw for a reproducible result")
                )
                .arg(format_arg())
        )
        .subcommand(
            Command::new("open")
                .about("Open the interactive room")
                .arg(room_arg())
        )
}

#[tokio::main]
async fn main() {
    let _ = init_logging();

    let matches = build_cli().get_matches();

    let result = match matches.subcommand() {
        Some(("auth", sub_matches)) => handle_auth(sub_matches).await,
        Some(("create", sub_matches)) => handle_create(sub_matches).await,
        Some(("use", sub_matches)) => handle_use(sub_matches).await,
        Some(("room", sub_matches)) => handle_room(sub_matches).await,
        Some(("add", sub_matches)) => handle_add(sub_matches).await,
        Some(("vacation", sub_matches)) => handle_vacation(sub_matches).await,
        Some(("remove", sub_matches)) => handle_remove(sub_matches).await,
        Some(("rename", sub_matches)) => handle_rename(sub_matches).await,
        Some(("spin", sub_matches)) => handle_spin(sub_matches).await,
        Some(("open", sub_matches)) => handle_open(sub_matches).await,
        _ => {
            eprintln!("Unknown command. Use 'wheel --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        log_error(&e.to_string());
        eprintln!("Error: {}", e);
        if let Some(path) = get_log_file_path() {
            eprintln!("Details: {}", path.display());
        }
        process::exit(1);
    }
}
