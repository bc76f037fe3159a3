//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::LayakPaths;
pub use settings::Settings;
