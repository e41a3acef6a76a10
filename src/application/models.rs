//! List models use case

use crate::domain::generation::ModelCatalog;

use super::ports::{GenerationError, TextGenerator};

/// Lists the chat models a generator offers
pub struct ListModelsUseCase<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> ListModelsUseCase<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Fetch the provider's model ids and narrow them to the selectable catalog
    pub async fn execute(&self) -> Result<ModelCatalog, GenerationError> {
        let ids = self.generator.list_models().await?;
        log::debug!("Provider reported {} models", ids.len());
        Ok(ModelCatalog::from_ids(ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generation::{ModelId, Prompt};
    use async_trait::async_trait;

    struct StaticGenerator(Result<Vec<String>, GenerationError>);

    #[async_trait]
    impl TextGenerator for StaticGenerator {
        async fn generate(
            &self,
            _prompt: &Prompt,
            _model: &ModelId,
        ) -> Result<String, GenerationError> {
            Ok(String::new())
        }

        async fn list_models(&self) -> Result<Vec<String>, GenerationError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn execute_filters_catalog() {
        let ids = vec!["whisper-1".to_string(), "gpt-4o".to_string()];
        let use_case = ListModelsUseCase::new(StaticGenerator(Ok(ids)));

        let catalog = use_case.execute().await.unwrap();
        assert_eq!(catalog.models(), ["gpt-4o"]);
    }

    #[tokio::test]
    async fn execute_propagates_errors() {
        let use_case = ListModelsUseCase::new(StaticGenerator(Err(GenerationError::InvalidApiKey)));
        assert!(matches!(
            use_case.execute().await,
            Err(GenerationError::InvalidApiKey)
        ));
    }
}
