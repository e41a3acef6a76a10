//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, logging setup,
//! and the main application runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod logging;
pub mod models_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{load_merged_config, run_generate, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, FormatArg, GenerateOptions};
pub use config_cmd::handle_config_command;
pub use logging::init_logging;
pub use models_cmd::handle_models_command;
pub use presenter::Presenter;
