use crate::config::{Catalog, Defaults, LocaleConfig};
use crate::error::I18nError;
use crate::store::{FileStore, MemoryStore, ParameterStore};
use crate::taboo::Taboo;
use glossa_domain::config::GlossaConfig;
use parking_lot::Mutex;
use private::Sealed;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

#[derive(Debug, Default)]
pub struct NoStore;
#[derive(Debug)]
pub struct WithStore(Arc<dyn ParameterStore>);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoStore {}
impl Sealed for WithStore {}

/// Builds a [`LocaleConfig`]; a parameter store is required before [`build`](Self::build).
///
/// ```rust
/// use glossa_system::{LocaleConfig, MemoryStore};
///
/// let config = LocaleConfig::builder().store(MemoryStore::new()).build();
/// assert_eq!(config.get_system_locale(), "zh-Hans-CN");
/// ```
#[allow(private_bounds)]
#[derive(Debug, Default)]
pub struct LocaleConfigBuilder<S: Sealed = NoStore> {
    state: S,
    config: GlossaConfig,
}

#[allow(private_bounds)]
impl<S: Sealed> LocaleConfigBuilder<S> {
    #[must_use = "Sets the catalog, defaults and taboo data"]
    pub fn config(mut self, config: GlossaConfig) -> Self {
        self.config = config;
        self
    }

    fn transition<N: Sealed>(self, state: N) -> LocaleConfigBuilder<N> {
        LocaleConfigBuilder { state, config: self.config }
    }
}

impl LocaleConfigBuilder<NoStore> {
    #[must_use = "Creates a new builder with the built-in defaults"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Sets the parameter store"]
    pub fn store(self, store: impl ParameterStore + 'static) -> LocaleConfigBuilder<WithStore> {
        self.transition(WithStore(Arc::new(store)))
    }

    #[must_use = "Sets a shared parameter store"]
    pub fn shared_store(self, store: Arc<dyn ParameterStore>) -> LocaleConfigBuilder<WithStore> {
        self.transition(WithStore(store))
    }

    /// Uses a [`FileStore`] at `system.parameters_path`, or a [`MemoryStore`] when unset.
    ///
    /// # Errors
    /// Propagates [`FileStore::open`] failures.
    pub fn configured_store(self) -> Result<LocaleConfigBuilder<WithStore>, I18nError> {
        let store: Arc<dyn ParameterStore> = match &self.config.system.parameters_path {
            Some(path) => Arc::new(FileStore::open(path)?),
            None => Arc::new(MemoryStore::new()),
        };
        Ok(self.transition(WithStore(store)))
    }
}

impl LocaleConfigBuilder<WithStore> {
    #[must_use]
    pub fn build(self) -> LocaleConfig {
        let Self { state: WithStore(store), config } = self;

        let catalog = Catalog::new(&config.catalog);
        let taboo = Taboo::new(&config.taboo);
        info!(
            locales = catalog.supported_locales.len(),
            regions = catalog.supported_regions.len(),
            taboo = !taboo.is_empty(),
            "Locale catalog loaded"
        );

        let (snapshot, _) = watch::channel(Arc::default());
        let locale_config = LocaleConfig {
            catalog,
            defaults: Defaults::new(&config.system),
            taboo,
            store,
            snapshot,
            mutation: Mutex::new(()),
        };
        locale_config.publish();
        locale_config
    }
}
