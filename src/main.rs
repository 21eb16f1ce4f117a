use clap::Parser;
use tracing_subscriber::EnvFilter;

use passman::cli::commands::edit::Changes;
use passman::cli::{Cli, Commands};

fn main() {
    // Diagnostics go to stderr; RUST_LOG=passman=debug shows store activity.
    // Events never carry password values.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("passman=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Register => passman::cli::commands::register::execute(&cli),
        Commands::RemoveUser { force } => passman::cli::commands::remove_user::execute(&cli, force),
        Commands::Passwd => passman::cli::commands::passwd::execute(&cli),
        Commands::Add {
            ref name,
            ref website,
            ref login,
            ref password,
        } => passman::cli::commands::add::execute(
            &cli,
            name,
            website.as_deref(),
            login.as_deref(),
            password.as_deref(),
        ),
        Commands::Get { ref name } => passman::cli::commands::get::execute(&cli, name),
        Commands::Edit {
            ref name,
            ref rename,
            ref website,
            ref login,
            ref password,
        } => {
            let changes = Changes {
                rename: rename.as_deref(),
                website: website.as_deref(),
                login: login.as_deref(),
                password: password.as_deref(),
            };
            passman::cli::commands::edit::execute(&cli, name, &changes)
        }
        Commands::Delete { ref name, force } => {
            passman::cli::commands::delete::execute(&cli, name, force)
        }
        Commands::Search { ref query } => passman::cli::commands::search::execute(&cli, query),
        Commands::List => passman::cli::commands::list::execute(&cli),
        Commands::Menu => passman::cli::commands::menu::execute(&cli),
        Commands::Completions { shell } => passman::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        passman::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
