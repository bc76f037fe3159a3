//! Static reference dataset
//!
//! Read-only tables: per-city income baselines and cost ranges, the random
//! life-event catalog, and the future-choice catalog. Nothing here is mutated
//! at runtime; the engine uses this data only for defaults.

pub mod choices;
pub mod cities;
pub mod events;

pub use choices::{find_choice, FutureChoice, OutcomeState, FUTURE_CHOICES};
pub use cities::{city_profile, default_costs, City, CityProfile, CostDimension, CostRange, Role};
pub use events::{find_event, pick_random_event, random_event, EventKind, RandomEvent, RANDOM_EVENTS};
