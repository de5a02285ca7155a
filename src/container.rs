use alloc::{
    boxed::Box,
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};
use parking_lot::Mutex;
use tracing::{debug, error, info_span};

use crate::{
    any::TypeInfo,
    cache::Cache,
    config::Config,
    definition::BeanDefinition,
    errors::{ResolveErrorKind, ScanErrorKind},
    registry::Registry,
    scan::scan,
    scope::BeanScope,
    utils::thread_safety::{RcAnyThreadSafety, RcThreadSafety, SendSafety, SyncSafety},
};

/// The container: scans its configured root once at construction to populate
/// the bean-definition registry, then serves fully-injected bean instances by
/// name.
#[derive(Clone)]
pub struct Container {
    inner: RcThreadSafety<ContainerInner>,
}

impl core::fmt::Debug for Container {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Container")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

pub(crate) struct ContainerInner {
    config: Config,
    registry: Registry,
    cache: Mutex<Cache>,
    creation_locks: BTreeMap<String, Mutex<()>>,
}

impl Container {
    /// Creates the container, scanning the configured root (when present) to
    /// populate the bean-definition registry. Beans themselves are created
    /// lazily, on first request.
    ///
    /// # Errors
    /// Returns [`ScanErrorKind::Load`] if a scanned entry fails to load.
    pub fn new(config: Config) -> Result<Self, ScanErrorKind> {
        let registry = match config.scan_root() {
            Some(root) => {
                let span = info_span!("scan", root);
                let _guard = span.enter();

                Registry::from_handles(scan(root)?)
            }
            None => {
                debug!("No scan root configured, registry stays empty");
                Registry::new()
            }
        };

        let creation_locks = registry
            .singleton_names()
            .map(|name| (name.to_string(), Mutex::new(())))
            .collect();

        Ok(Self {
            inner: RcThreadSafety::new(ContainerInner {
                config,
                registry,
                cache: Mutex::new(Cache::new()),
                creation_locks,
            }),
        })
    }

    /// Startup configuration this container was built with.
    #[inline]
    #[must_use]
    pub fn config(&self) -> Config {
        self.inner.config
    }

    /// Whether a bean definition is registered under `name`.
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.inner.registry.contains(name)
    }

    /// Names of all registered bean definitions.
    #[must_use]
    pub fn bean_names(&self) -> Vec<String> {
        self.inner.registry.names().map(ToString::to_string).collect()
    }

    /// Gets a bean by name: the shared instance for singletons, a fresh one
    /// for prototypes, declared dependencies injected either way.
    ///
    /// # Errors
    /// - [`ResolveErrorKind::NotFound`] if no definition is registered under
    ///   `name`
    /// - [`ResolveErrorKind::CyclicDependency`] if the dependency graph loops
    ///   back into a bean already being constructed
    /// - [`ResolveErrorKind::Construction`], [`ResolveErrorKind::Injection`]
    ///   and [`ResolveErrorKind::Assignment`] if construction or wiring fails
    pub fn get(&self, name: &str) -> Result<RcAnyThreadSafety, ResolveErrorKind> {
        let span = info_span!("get", bean = name);
        let _guard = span.enter();

        self.get_inner(name, &mut ResolutionChain::new())
    }

    /// Typed [`Self::get`], downcasting the resolved instance.
    ///
    /// # Errors
    /// Everything [`Self::get`] returns, plus
    /// [`ResolveErrorKind::IncorrectType`] if the bean registered under
    /// `name` isn't a `Bean`.
    pub fn get_typed<Bean: SendSafety + SyncSafety + 'static>(
        &self,
        name: &str,
    ) -> Result<RcThreadSafety<Bean>, ResolveErrorKind> {
        let bean = self.get(name)?;
        match bean.downcast::<Bean>() {
            Ok(bean) => Ok(bean),
            Err(_) => {
                let actual = self
                    .inner
                    .registry
                    .get(name)
                    .expect("Definition should be present for resolved bean")
                    .type_info();
                let err = ResolveErrorKind::IncorrectType {
                    expected: TypeInfo::of::<Bean>(),
                    actual,
                };
                error!("{}", err);
                Err(err)
            }
        }
    }

    fn get_inner(&self, name: &str, chain: &mut ResolutionChain) -> Result<RcAnyThreadSafety, ResolveErrorKind> {
        let Some(definition) = self.inner.registry.get(name) else {
            let err = ResolveErrorKind::NotFound { name: name.to_string() };
            error!("{}", err);
            return Err(err);
        };

        // The cycle guard must run before any lock is taken: re-entering a
        // name whose creation lock this thread already holds would deadlock.
        chain.enter(name)?;
        let result = match definition.scope {
            BeanScope::Singleton => self.get_singleton(definition, chain),
            BeanScope::Prototype => {
                debug!("Constructing prototype instance");
                self.construct(definition, chain)
            }
        };
        chain.exit();

        result
    }

    fn get_singleton(
        &self,
        definition: &BeanDefinition,
        chain: &mut ResolutionChain,
    ) -> Result<RcAnyThreadSafety, ResolveErrorKind> {
        let name = definition.name();

        if let Some(bean) = self.inner.cache.lock().get(name) {
            debug!("Found in cache");
            return Ok(bean);
        }
        debug!("Not found in cache");

        let creation_lock = self
            .inner
            .creation_locks
            .get(name)
            .expect("Creation lock should be present for a singleton definition");
        let _creation_guard = creation_lock.lock();

        // another caller may have finished construction while we waited
        if let Some(bean) = self.inner.cache.lock().get(name) {
            debug!("Found in cache after waiting for creation");
            return Ok(bean);
        }

        let bean = self.construct(definition, chain)?;
        self.inner.cache.lock().insert(definition.name.clone(), bean.clone());
        debug!("Cached");

        Ok(bean)
    }

    fn construct(
        &self,
        definition: &BeanDefinition,
        chain: &mut ResolutionChain,
    ) -> Result<RcAnyThreadSafety, ResolveErrorKind> {
        let mut instance = match (definition.constructor)() {
            Ok(instance) => instance,
            Err(err) => {
                let err = ResolveErrorKind::Construction {
                    name: definition.name.clone(),
                    source: err,
                };
                error!("{}", err);
                return Err(err);
            }
        };

        for injector in definition.injectors {
            let dependency_name = injector.bean_name();
            let dependency = match self.get_inner(&dependency_name, chain) {
                Ok(dependency) => dependency,
                Err(err) => {
                    let err = ResolveErrorKind::Injection {
                        name: definition.name.clone(),
                        dependency: dependency_name,
                        source: Box::new(err),
                    };
                    error!("{}", err);
                    return Err(err);
                }
            };

            match injector.assign(instance.as_mut(), dependency) {
                Ok(()) => debug!(dependency = %dependency_name, "Injected"),
                Err(err) => {
                    let err = ResolveErrorKind::Assignment {
                        name: definition.name.clone(),
                        dependency: dependency_name,
                        source: err,
                    };
                    error!("{}", err);
                    return Err(err);
                }
            }
        }

        Ok(RcThreadSafety::from(instance))
    }
}

/// Bean names in progress on the current resolution call stack, used to fail
/// fast on dependency cycles.
struct ResolutionChain {
    names: Vec<String>,
}

impl ResolutionChain {
    #[inline]
    #[must_use]
    const fn new() -> Self {
        Self { names: Vec::new() }
    }

    fn enter(&mut self, name: &str) -> Result<(), ResolveErrorKind> {
        if self.names.iter().any(|in_progress| in_progress == name) {
            let mut chain = self.names.clone();
            chain.push(name.to_string());

            let err = ResolveErrorKind::CyclicDependency { chain };
            error!("{}", err);
            return Err(err);
        }

        self.names.push(name.to_string());
        Ok(())
    }

    #[inline]
    fn exit(&mut self) {
        self.names.pop();
    }
}
