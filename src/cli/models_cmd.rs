//! Models command handler

use crate::application::ListModelsUseCase;
use crate::domain::config::AppConfig;
use crate::domain::generation::DEFAULT_MODEL;
use crate::infrastructure::OpenAiGenerator;

use super::app::require_api_key;
use super::presenter::Presenter;

/// List the GPT models available to the configured API key
pub async fn handle_models_command(config: &AppConfig, presenter: &Presenter) -> Result<(), String> {
    let api_key = require_api_key(config)?;
    let generator = OpenAiGenerator::with_base_url(api_key, config.base_url_or_default());

    presenter.start_spinner("Fetching models...");
    let result = ListModelsUseCase::new(generator).execute().await;
    presenter.stop_spinner();

    let catalog = match result {
        Ok(catalog) => catalog,
        Err(e) => {
            log::warn!("Model listing failed: {}", e);
            presenter.warn(&format!("Using default model: {}", DEFAULT_MODEL));
            return Err(format!("Could not fetch models: {}", e));
        }
    };

    if catalog.is_empty() {
        presenter.warn(&format!(
            "No GPT models available. Using default model: {}",
            DEFAULT_MODEL
        ));
        return Ok(());
    }

    let default_choice = catalog.default_choice();
    for model in catalog.models() {
        presenter.model_entry(model, Some(model.as_str()) == default_choice);
    }

    if let Some(configured) = config.model.as_deref() {
        if !catalog.contains(configured) {
            presenter.warn(&format!(
                "Configured model '{}' is not in the list",
                configured
            ));
        }
    }

    Ok(())
}
