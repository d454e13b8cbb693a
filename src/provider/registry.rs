//! Provider registry keyed by provider type.

use std::collections::HashMap;
use std::sync::Arc;

use super::{Provider, RequestPayload, VerifiedPayload};
use crate::error::ProviderError;

/// Set of providers, selected by the payload's `type` tag.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn Provider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider, replacing any previous one with the same type.
    pub fn register(&mut self, provider: impl Provider + 'static) {
        self.providers
            .insert(provider.provider_type().to_string(), Arc::new(provider));
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, provider: impl Provider + 'static) -> Self {
        self.register(provider);
        self
    }

    pub fn get(&self, provider_type: &str) -> Option<Arc<dyn Provider>> {
        self.providers.get(provider_type).cloned()
    }

    pub fn contains(&self, provider_type: &str) -> bool {
        self.providers.contains_key(provider_type)
    }

    /// Registered type tags, sorted.
    pub fn provider_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    /// Dispatch `payload` to the provider named by its `type`.
    pub async fn verify(&self, payload: &RequestPayload) -> Result<VerifiedPayload, ProviderError> {
        let provider = self
            .providers
            .get(&payload.provider_type)
            .ok_or_else(|| ProviderError::UnknownProvider(payload.provider_type.clone()))?;

        tracing::debug!(provider = %payload.provider_type, "Dispatching verification");
        Ok(provider.verify(payload).await)
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.provider_types())
            .finish()
    }
}
