use crate::catalog::BookCatalog;
use crate::config::Config;
use crate::extract::FeatExtractor;
use crate::fetcher::{CancelSignal, Fetcher};
use crate::loader::{EntityKind, EntityList, Loader};
use crate::HarvestError;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinError;

/// Outcome of a registry run, keyed by entity kind
pub type RunResults = BTreeMap<EntityKind, Result<EntityList, HarvestError>>;

/// Holds one loader per entity kind and runs them
#[derive(Default)]
pub struct LoaderRegistry {
    loaders: Vec<Arc<dyn Loader>>,
    concurrent: bool,
}

impl LoaderRegistry {
    /// Creates an empty registry
    ///
    /// When `concurrent` is true every loader runs on its own tokio task;
    /// otherwise loaders run one after another in registration order.
    pub fn new(concurrent: bool) -> Self {
        Self {
            loaders: Vec::new(),
            concurrent,
        }
    }

    /// Builds a registry with every built-in loader
    ///
    /// All loaders share one fetcher and one book catalog, so the root page
    /// is fetched at most once per run.
    pub fn from_config(
        config: &Config,
        cancel: Option<CancelSignal>,
    ) -> Result<Self, HarvestError> {
        let mut fetcher = Fetcher::from_config(config)?;
        if let Some(signal) = cancel {
            fetcher = fetcher.with_cancel_signal(signal);
        }
        let fetcher = Arc::new(fetcher);
        let catalog = Arc::new(BookCatalog::new(
            Arc::clone(&fetcher),
            config.site.menu_class.clone(),
        ));

        let mut registry = Self::new(config.loader.concurrent);
        registry.register(Arc::new(FeatExtractor::new(
            fetcher,
            catalog,
            config.site.feat_index.clone(),
        )));
        Ok(registry)
    }

    /// Adds a loader, replacing any loader already registered for its kind
    pub fn register(&mut self, loader: Arc<dyn Loader>) {
        let kind = loader.kind();
        if let Some(existing) = self.loaders.iter_mut().find(|l| l.kind() == kind) {
            tracing::warn!("Replacing loader for {}", kind);
            *existing = loader;
        } else {
            self.loaders.push(loader);
        }
    }

    /// Registered kinds, in registration order
    pub fn kinds(&self) -> Vec<EntityKind> {
        self.loaders.iter().map(|l| l.kind()).collect()
    }

    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }

    /// Runs every loader to completion
    ///
    /// Each loader is initialized and then loaded. Errors and panics are
    /// recorded against the loader's kind; they never abort the run.
    pub async fn run_all(&self) -> RunResults {
        let start_time = Instant::now();
        tracing::info!(
            "Running {} loader(s) {}",
            self.loaders.len(),
            if self.concurrent { "concurrently" } else { "sequentially" }
        );

        let mut results = RunResults::new();

        if self.concurrent {
            let handles: Vec<_> = self
                .loaders
                .iter()
                .map(|loader| {
                    let loader = Arc::clone(loader);
                    (loader.kind(), tokio::spawn(run_loader(loader)))
                })
                .collect();

            for (kind, handle) in handles {
                let result = handle.await.unwrap_or_else(|e| Err(panicked(kind, e)));
                results.insert(kind, result);
            }
        } else {
            for loader in &self.loaders {
                let kind = loader.kind();
                // Spawned so a panic is captured the same way in both modes
                let result = tokio::spawn(run_loader(Arc::clone(loader)))
                    .await
                    .unwrap_or_else(|e| Err(panicked(kind, e)));
                results.insert(kind, result);
            }
        }

        let failed = results.values().filter(|r| r.is_err()).count();
        tracing::info!(
            "Loaders finished in {:?}: {} succeeded, {} failed",
            start_time.elapsed(),
            results.len() - failed,
            failed
        );

        results
    }
}

async fn run_loader(loader: Arc<dyn Loader>) -> Result<EntityList, HarvestError> {
    let kind = loader.kind();
    let start_time = Instant::now();

    let result = async {
        loader.initialize().await?;
        loader.load().await
    }
    .await;

    match &result {
        Ok(entities) => tracing::info!(
            "Loaded {} {} entities in {:?}",
            entities.len(),
            kind,
            start_time.elapsed()
        ),
        Err(e) => tracing::error!("Loader {} failed: {}", kind, e),
    }

    result
}

fn panicked(kind: EntityKind, error: JoinError) -> HarvestError {
    let message = if error.is_panic() {
        let payload = error.into_panic();
        payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string())
    } else {
        error.to_string()
    };

    tracing::error!("Loader {} panicked: {}", kind, message);
    HarvestError::LoaderPanicked {
        kind: kind.to_string(),
        message,
    }
}
