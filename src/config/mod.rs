//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::EerisPaths;
pub use settings::Settings;
