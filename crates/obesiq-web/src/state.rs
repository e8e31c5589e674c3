//! Shared application state for the web server.

use std::path::PathBuf;
use std::sync::Arc;

use obesiq_common::{ObesiqError, Result};
use obesiq_config::Config;
use obesiq_model::{Classifier, MlpClassifier, MockClassifier};
use tokio::sync::RwLock;
use tracing::warn;

/// Shared state injected into every handler.
///
/// The classifier slot starts empty and is filled on first use; a failed
/// artifact load stays fatal only to the request that hit it, and a later
/// request retries the load.
pub struct AppState {
    pub config: Config,
    classifier: RwLock<Option<Arc<dyn Classifier>>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            classifier: RwLock::new(None),
        }
    }

    /// Build state with a pre-loaded classifier. Used by tests and by
    /// callers that manage artifact loading themselves.
    pub fn with_classifier(config: Config, classifier: Arc<dyn Classifier>) -> Self {
        Self {
            config,
            classifier: RwLock::new(Some(classifier)),
        }
    }

    /// Get the classifier, loading the artifact on first use.
    pub async fn classifier(&self) -> Result<Arc<dyn Classifier>> {
        if let Some(loaded) = self.classifier.read().await.as_ref() {
            return Ok(Arc::clone(loaded));
        }

        let mut slot = self.classifier.write().await;
        // Another request may have won the race while we waited.
        if let Some(loaded) = slot.as_ref() {
            return Ok(Arc::clone(loaded));
        }

        let model = &self.config.model;
        // Artifact loading mmaps weights from disk; keep it off the
        // async workers even while the write guard is held.
        let manifest = PathBuf::from(&model.manifest_path);
        let weights = PathBuf::from(&model.weights_path);
        let use_gpu = model.use_gpu;
        let loaded =
            tokio::task::spawn_blocking(move || MlpClassifier::load(&manifest, &weights, use_gpu))
                .await
                .map_err(|err| ObesiqError::Other(anyhow::anyhow!(err)))?;
        match loaded {
            Ok(classifier) => {
                let classifier: Arc<dyn Classifier> = Arc::new(classifier);
                *slot = Some(Arc::clone(&classifier));
                Ok(classifier)
            }
            Err(err) if model.mock_fallback => {
                warn!(error = %err, "artifact load failed, falling back to mock classifier");
                let classifier: Arc<dyn Classifier> = Arc::new(MockClassifier::new());
                *slot = Some(Arc::clone(&classifier));
                Ok(classifier)
            }
            Err(err) => Err(err),
        }
    }

    pub async fn classifier_loaded(&self) -> bool {
        self.classifier.read().await.is_some()
    }
}

pub type SharedState = Arc<AppState>;

#[cfg(test)]
mod tests {
    use super::*;
    use obesiq_config::ModelConfig;

    #[tokio::test]
    async fn test_missing_artifact_without_fallback_is_an_error() {
        let config = Config {
            model: ModelConfig {
                manifest_path: "/nonexistent/classifier.json".to_string(),
                weights_path: "/nonexistent/classifier.safetensors".to_string(),
                ..ModelConfig::default()
            },
            ..Config::default()
        };
        let state = AppState::new(config);
        assert!(state.classifier().await.is_err());
        assert!(!state.classifier_loaded().await);
    }

    #[tokio::test]
    async fn test_mock_fallback_fills_the_slot() {
        let config = Config {
            model: ModelConfig {
                manifest_path: "/nonexistent/classifier.json".to_string(),
                weights_path: "/nonexistent/classifier.safetensors".to_string(),
                mock_fallback: true,
                ..ModelConfig::default()
            },
            ..Config::default()
        };
        let state = AppState::new(config);
        assert!(state.classifier().await.is_ok());
        assert!(state.classifier_loaded().await);
    }
}
