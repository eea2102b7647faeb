mod alerts;
mod cli;
mod db;
mod derive;
mod error;
mod fmt;
mod importer;
mod models;
mod reports;
mod schedule;
mod settings;

use clap::Parser;

use cli::{Cli, Commands, ReportCommands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Add {
            name,
            price,
            frequency,
            start_date,
            category,
            commitment,
        } => cli::add::run(&name, price, frequency, start_date.as_deref(), &category, commitment),
        Commands::List {
            search,
            category,
            commitment,
            sort,
        } => cli::list::run(search, category, commitment, sort),
        Commands::Remove { id } => cli::remove::run(id),
        Commands::Alerts => cli::alerts::run(),
        Commands::Report { command } => match command {
            ReportCommands::Summary => cli::report::summary(),
            ReportCommands::Categories => cli::report::categories(),
        },
        Commands::Import { file } => cli::import::run(&file),
        Commands::Export { output } => cli::export::run(output),
        Commands::Demo => cli::demo::run(),
        Commands::Backup { output } => cli::backup::run(output),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
