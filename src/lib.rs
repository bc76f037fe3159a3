//! layak-cli - Terminal cost-of-living simulator and money tracker
//!
//! This library provides the core functionality for layak-cli, a terminal
//! tool for exploring what a decent standard of living costs in Indonesian
//! cities and for tracking monthly income and expenses against that standard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, months, ledgers, expense records)
//! - `reference`: Static reference tables (cities, events, future choices)
//! - `engine`: Pure calculations (status verdicts, aggregation, insights)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `display`: Terminal formatting, including Rupiah rendering
//! - `export`: CSV, JSON, and YAML export
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use layak_cli::config::{paths::LayakPaths, settings::Settings};
//!
//! let paths = LayakPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod reference;
pub mod services;
pub mod storage;

pub use error::LayakError;
