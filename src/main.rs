//! ShortsTitler CLI entry point

use std::process::ExitCode;

use clap::Parser;

use shorts_titler::cli::{
    args::{Cli, Commands, GenerateOptions},
    handle_config_command, handle_models_command, init_logging, load_merged_config,
    run_generate, Presenter, EXIT_ERROR,
};
use shorts_titler::domain::config::AppConfig;
use shorts_titler::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let presenter = Presenter::new();
    let store = XdgConfigStore::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Models) => {
            let config = load_merged_config(&store, AppConfig::empty()).await;
            if let Err(e) = handle_models_command(&config, &presenter).await {
                presenter.error(&e);
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        None => {}
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        api_key: None, // API key comes from env/file only
        model: cli.model.clone(),
        base_url: None,
        clipboard: if cli.clipboard { Some(true) } else { None },
    };

    // Merge config
    let config = load_merged_config(&store, cli_config).await;

    let options = GenerateOptions {
        text: cli.text,
        file: cli.file,
        format: cli.format.forced(),
        dry_run: cli.dry_run,
    };

    run_generate(options, config).await
}
