//! Future-choice CLI commands
//!
//! Lists the fixed choice catalog and manages the one saved choice per month.

use clap::Subcommand;

use crate::display::format_choice;
use crate::engine::StatusTier;
use crate::error::{LayakError, LayakResult};
use crate::models::Month;
use crate::reference::{find_choice, FUTURE_CHOICES};
use crate::services::LedgerService;
use crate::storage::Storage;

/// Future-choice subcommands
#[derive(Subcommand)]
pub enum ChoiceCommands {
    /// List all choices in the catalog
    List,
    /// Show one choice with its outcome
    Show {
        /// Choice id (e.g., saving-small)
        id: String,
    },
    /// Save a choice for a month
    Set {
        /// Month name (e.g., juli) or number (1-12)
        month: String,
        /// Choice id (e.g., saving-small)
        id: String,
    },
    /// Show the saved choice for a month
    Status {
        /// Month name or number
        month: String,
    },
    /// Remove the saved choice for a month
    Clear {
        /// Month name or number
        month: String,
    },
}

/// Handle a choice command
pub fn handle_choice_command(storage: &Storage, cmd: ChoiceCommands) -> LayakResult<()> {
    match cmd {
        ChoiceCommands::List => {
            for choice in &FUTURE_CHOICES {
                println!("{:<16}  {}", choice.id, choice.title);
            }
        }

        ChoiceCommands::Show { id } => {
            let choice = find_choice(&id).ok_or_else(|| LayakError::UnknownChoice(id.clone()))?;
            print!("{}", format_choice(choice));
        }

        ChoiceCommands::Set { month, id } => {
            let month: Month = month.parse()?;
            storage.choices.set(month, &id)?;
            storage.choices.save()?;

            // set() validates the id, so the lookup cannot fail here
            if let Some(choice) = find_choice(&id) {
                println!("Pilihan untuk {} disimpan:", month);
                print!("{}", format_choice(choice));
            }

            // Choices are meant for tight months; saving one on a Layak
            // month is allowed but worth flagging.
            let summary = LedgerService::new(storage).summary(month)?;
            if let Some(verdict) = summary.verdict {
                if verdict.tier == StatusTier::Adequate {
                    println!();
                    println!(
                        "Catatan: bulan {} berstatus {}, pilihan ini biasanya untuk bulan yang lebih ketat.",
                        month,
                        verdict.tier.label()
                    );
                }
            }
        }

        ChoiceCommands::Status { month } => {
            let month: Month = month.parse()?;
            match storage.choices.get(month)? {
                Some(choice) => print!("{}", format_choice(choice)),
                None => println!("Belum ada pilihan untuk {}.", month),
            }
        }

        ChoiceCommands::Clear { month } => {
            let month: Month = month.parse()?;
            if storage.choices.clear(month)? {
                storage.choices.save()?;
                println!("Pilihan untuk {} dihapus.", month);
            } else {
                println!("Belum ada pilihan untuk {}.", month);
            }
        }
    }

    Ok(())
}
