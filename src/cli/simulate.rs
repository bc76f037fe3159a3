//! Simulator and life-event CLI commands
//!
//! The simulator is a one-shot calculation: pick a city and role, optionally
//! adjust costs and apply events, and print the resulting verdict.

use clap::{Args, Subcommand};

use crate::config::Settings;
use crate::display::{format_event, format_rupiah_signed, format_simulation};
use crate::error::{LayakError, LayakResult};
use crate::models::Money;
use crate::reference::{find_event, random_event, City, CostDimension, Role, RANDOM_EVENTS};
use crate::services::Simulation;

/// Arguments for the simulate command
#[derive(Args)]
pub struct SimulateArgs {
    /// City (jakarta, yogyakarta, cirebon); defaults to the configured city
    #[arg(short, long, env = "LAYAK_CITY")]
    pub city: Option<String>,

    /// Role (student, "university student", worker); defaults to the
    /// configured role
    #[arg(short, long, env = "LAYAK_ROLE")]
    pub role: Option<String>,

    /// Override a cost dimension, e.g. --set food=1500000 (repeatable)
    #[arg(short, long = "set", value_name = "DIMENSION=AMOUNT")]
    pub set: Vec<String>,

    /// Apply a specific life event by id (repeatable)
    #[arg(short, long = "event", value_name = "EVENT_ID")]
    pub event: Vec<String>,

    /// Draw and apply one random life event
    #[arg(long)]
    pub random_event: bool,
}

/// Life-event subcommands
#[derive(Subcommand)]
pub enum EventCommands {
    /// Draw one random event from the catalog
    Draw,
    /// List all events in the catalog
    List,
}

/// Handle the simulate command
pub fn handle_simulate_command(settings: &Settings, args: SimulateArgs) -> LayakResult<()> {
    let city: City = match &args.city {
        Some(c) => c.parse()?,
        None => settings.default_city,
    };
    let role: Role = match &args.role {
        Some(r) => r.parse()?,
        None => settings.default_role,
    };

    let mut sim = Simulation::new(city, role);

    for assignment in &args.set {
        let (dimension, amount) = parse_assignment(assignment)?;
        sim.set_cost(dimension, amount)?;
    }

    for id in &args.event {
        let event = find_event(id).ok_or_else(|| {
            LayakError::InvalidInput(format!(
                "unknown event id: '{}'. Run 'layak event list' for the catalog.",
                id
            ))
        })?;
        sim.apply_event(event);
    }

    if args.random_event {
        sim.apply_event(random_event());
    }

    print!("{}", format_simulation(&sim));
    Ok(())
}

/// Handle an event command
pub fn handle_event_command(cmd: EventCommands) -> LayakResult<()> {
    match cmd {
        EventCommands::Draw => {
            print!("{}", format_event(random_event()));
        }
        EventCommands::List => {
            for event in &RANDOM_EVENTS {
                println!(
                    "{:<20}  {} {:<24}  {}",
                    event.id,
                    event.emoji,
                    event.title,
                    format_rupiah_signed(event.impact)
                );
            }
        }
    }

    Ok(())
}

fn parse_assignment(input: &str) -> LayakResult<(CostDimension, Money)> {
    let (dim, amount) = input.split_once('=').ok_or_else(|| {
        LayakError::InvalidInput(format!(
            "invalid cost override '{}'. Use DIMENSION=AMOUNT, e.g. food=1500000",
            input
        ))
    })?;

    Ok((dim.parse()?, Money::parse(amount)?))
}
