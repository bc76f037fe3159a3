use anyhow::Result;
use clap::{Parser, Subcommand};

use layak_cli::cli::{
    handle_choice_command, handle_event_command, handle_export_command, handle_ledger_command,
    handle_simulate_command, ChoiceCommands, EventCommands, ExportCommands, LedgerCommands,
    SimulateArgs,
};
use layak_cli::config::{paths::LayakPaths, settings::Settings};
use layak_cli::display::format_city_reference;
use layak_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "layak",
    version,
    about = "Terminal cost-of-living simulator and monthly money tracker for Indonesia",
    long_about = "layak-cli helps you explore what hidup layak (a decent standard of \
                  living) costs in Indonesian cities, simulate a monthly budget for a \
                  chosen city and role, and track your own income and expenses month \
                  by month."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a monthly budget for a city and role
    #[command(alias = "sim")]
    Simulate(SimulateArgs),

    /// Monthly income and expense tracker
    #[command(subcommand, alias = "catatan")]
    Ledger(LedgerCommands),

    /// Reflective future choices per month
    #[command(subcommand)]
    Choice(ChoiceCommands),

    /// Random life events
    #[command(subcommand)]
    Event(EventCommands),

    /// Show the city reference tables (income baselines, cost ranges)
    Cities,

    /// Export data to CSV, JSON, or YAML
    #[command(subcommand)]
    Export(ExportCommands),

    /// Initialize the data directory and default settings
    Init {
        /// Default city for the simulator
        #[arg(short, long)]
        city: Option<String>,
        /// Default role for the simulator
        #[arg(short, long)]
        role: Option<String>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LayakPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Simulate(args)) => {
            handle_simulate_command(&settings, args)?;
        }
        Some(Commands::Ledger(cmd)) => {
            handle_ledger_command(&storage, cmd)?;
        }
        Some(Commands::Choice(cmd)) => {
            handle_choice_command(&storage, cmd)?;
        }
        Some(Commands::Event(cmd)) => {
            handle_event_command(cmd)?;
        }
        Some(Commands::Cities) => {
            print!("{}", format_city_reference());
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Init { city, role }) => {
            let mut settings = settings;
            if let Some(city) = city {
                settings.default_city = city.parse()?;
            }
            if let Some(role) = role {
                settings.default_role = role.parse()?;
            }

            println!("Initializing layak-cli at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialization complete!");
            println!();
            println!(
                "Default profile: {} / {}",
                settings.default_city, settings.default_role
            );
            println!();
            println!("Run 'layak simulate' to try the budget simulator.");
            println!("Run 'layak ledger income <month> <amount>' to start tracking.");
        }
        Some(Commands::Config) => {
            println!("layak-cli Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Default city: {}", settings.default_city);
            println!("  Default role: {}", settings.default_role);
        }
        None => {
            println!("layak - cost-of-living simulator and money tracker");
            println!();
            println!("Run 'layak --help' for usage information.");
            println!("Run 'layak cities' to see the reference data.");
            println!("Run 'layak simulate' to try the budget simulator.");
        }
    }

    Ok(())
}
