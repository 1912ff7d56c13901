use clap::{Arg, ArgAction, Command};

fn username_arg() -> Arg {
    Arg::new("username")
        .required(true)
        .help("Discogs username to query")
}

fn folder_arg() -> Arg {
    Arg::new("folder")
        .long("folder")
        .num_args(1)
        .default_value("0")
        .help("Collection folder id (0 = all items)")
}

pub fn build_cli() -> Command {
    Command::new("discogs-client")
        .about("Rate-limited Discogs collection/wantlist fetcher")
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .num_args(1)
                .help("Override RUST_LOG level (e.g., info, debug)"),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .help("Print version and exit")
                .action(ArgAction::SetTrue),
        )
        .subcommand(Command::new("identity").about("Show the authenticated account identity"))
        .subcommand(
            Command::new("collection-count")
                .about("Item count of the all-items folder")
                .arg(username_arg()),
        )
        .subcommand(
            Command::new("folders")
                .about("List collection folders")
                .arg(username_arg()),
        )
        .subcommand(
            Command::new("lists")
                .about("List user-curated lists")
                .arg(username_arg()),
        )
        .subcommand(
            Command::new("wantlist-count")
                .about("Wantlist size (count-only probe)")
                .arg(username_arg()),
        )
        .subcommand(
            Command::new("value")
                .about("Collection valuation (min/median/max)")
                .arg(username_arg()),
        )
        .subcommand(
            Command::new("random")
                .about("Sample one random release from a folder")
                .arg(username_arg())
                .arg(folder_arg())
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .num_args(1)
                        .help("Seed the sampler for a reproducible draw"),
                ),
        )
        .subcommand(
            Command::new("collection")
                .about("Export the full collection (basic information)")
                .arg(username_arg())
                .arg(folder_arg()),
        )
        .subcommand(
            Command::new("wantlist")
                .about("Export the full wantlist (basic information)")
                .arg(username_arg()),
        )
        .subcommand(
            Command::new("list-items")
                .about("Export all items of one list")
                .arg(Arg::new("list-id").required(true).help("Numeric list id")),
        )
        .subcommand(Command::new("status").about("Probe API availability"))
}

pub fn init_logging(level: Option<&str>) {
    // Respect explicit level, else default to info, allow env override via RUST_LOG
    if let Some(lvl) = level {
        std::env::set_var("RUST_LOG", lvl);
    } else if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
