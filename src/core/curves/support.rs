/*!
Curve support context and the process-wide entry points.

A [`CurveSupport`] pairs one engine with the answers derived from it: the
supported curve set and the declaration shape. Both are computed at most once
per context. The process keeps one context for its own engine and registry.
*/

use once_cell::sync::{Lazy, OnceCell};

use crate::core::curves::compat::HostLibrary;
use crate::core::curves::config::RegistrationConfig;
use crate::core::curves::descriptor::DeclarationShape;
use crate::core::curves::discovery::{discover, SupportedCurveSet};
use crate::core::curves::injector::{inject_curves, RegistrationReport};
use crate::core::curves::registry::manager::DefaultHost;
use crate::core::engine::{platform_engine, CurveEngine};
use crate::core::error::{Error, Result};

/// Engine together with its memoized discovery results
#[derive(Debug)]
pub struct CurveSupport<E> {
    engine: E,
    supported: OnceCell<SupportedCurveSet>,
    shape: OnceCell<DeclarationShape>,
}

impl<E: CurveEngine> CurveSupport<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            supported: OnceCell::new(),
            shape: OnceCell::new(),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Curves the engine supports. The engine is queried on the first
    /// successful call only; a failed query is not cached.
    pub fn supported_curve_names(&self) -> Result<&SupportedCurveSet> {
        self.supported.get_or_try_init(|| discover(&self.engine))
    }

    /// Declaration shape for this context, detected from the first host
    /// it is asked about
    pub fn declaration_shape<H: HostLibrary + ?Sized>(&self, host: &H) -> DeclarationShape {
        *self.shape.get_or_init(|| DeclarationShape::detect(host))
    }

    /// Register the configured extension curves the host registry is
    /// missing and the engine supports
    pub fn register_missing_curves<H: HostLibrary + ?Sized>(
        &self,
        host: &mut H,
        config: &RegistrationConfig,
    ) -> Result<RegistrationReport> {
        config.validate()?;

        let supported = self.supported_curve_names()?;
        let shape = self.declaration_shape(host);
        let descriptors = config.curves.iter().map(|curve| curve.descriptor(shape));

        let report = inject_curves(host.curve_registry(), supported, descriptors);
        log::info!(
            "Registered {} extension curves ({} shape), skipped {}",
            report.registered().len(),
            shape,
            report.skipped().len()
        );
        Ok(report)
    }
}

type ProcessEngine = dyn CurveEngine + Send + Sync;

static ENGINE: OnceCell<Box<ProcessEngine>> = OnceCell::new();

static CURVE_SUPPORT: Lazy<CurveSupport<&'static ProcessEngine>> =
    Lazy::new(|| CurveSupport::new(&**ENGINE.get_or_init(platform_engine)));

/// Use `engine` for the process-wide context. Must run before the first
/// discovery; afterwards the engine is fixed.
pub fn install_engine(engine: Box<ProcessEngine>) -> Result<()> {
    ENGINE
        .set(engine)
        .map_err(|_| Error::AlreadyInitialized("curve engine"))
}

/// Process-wide curve support context
pub fn curve_support() -> &'static CurveSupport<&'static ProcessEngine> {
    &CURVE_SUPPORT
}

/// Curves the process-wide engine supports
pub fn supported_curve_names() -> Result<&'static SupportedCurveSet> {
    curve_support().supported_curve_names()
}

/// Register missing extension curves in the process-wide registry
pub fn register_missing_curves() -> Result<RegistrationReport> {
    register_missing_curves_with(&RegistrationConfig::default())
}

/// Like [`register_missing_curves`] with an explicit configuration
pub fn register_missing_curves_with(config: &RegistrationConfig) -> Result<RegistrationReport> {
    let mut host = DefaultHost::lock()?;
    curve_support().register_missing_curves(&mut host, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::curves::compat::HostSymbol;
    use crate::core::curves::descriptor::ExtensionCurve;
    use crate::core::curves::registry::{CurveRegistry, CurveType, CurveTypeRegistry};
    use crate::core::engine::{BuiltinCurve, Nid, TableEngine};
    use crate::core::error::EngineError;
    use std::cell::Cell;

    struct Host {
        legacy: bool,
        registry: CurveTypeRegistry,
    }

    impl HostLibrary for Host {
        fn lookup_symbol(&self, name: &str) -> Option<HostSymbol> {
            (self.legacy && name == "register_interface").then_some(HostSymbol::Callable)
        }

        fn curve_registry(&mut self) -> &mut dyn CurveRegistry {
            &mut self.registry
        }
    }

    #[test]
    fn test_discovery_is_memoized() -> Result<()> {
        let support = CurveSupport::new(TableEngine::from_names(["brainpoolP256r1"]));

        let first = support.supported_curve_names()?.clone();
        let second = support.supported_curve_names()?;
        assert_eq!(&first, second);
        // count + fill, once
        assert_eq!(support.engine().query_count(), 2);
        Ok(())
    }

    #[test]
    fn test_failed_discovery_is_not_cached() {
        struct FlakyEngine {
            calls: Cell<usize>,
        }

        impl CurveEngine for FlakyEngine {
            fn builtin_curve_count(&self) -> Result<usize> {
                self.calls.set(self.calls.get() + 1);
                if self.calls.get() == 1 {
                    return Err(EngineError::QueryFailed { call: "count" }.into());
                }
                Ok(0)
            }

            fn builtin_curves(&self, _out: &mut [BuiltinCurve]) -> Result<usize> {
                Ok(0)
            }

            fn short_name(&self, nid: Nid) -> Result<String> {
                Err(EngineError::UnknownIdentifier(nid).into())
            }
        }

        let support = CurveSupport::new(FlakyEngine { calls: Cell::new(0) });
        assert!(matches!(support.supported_curve_names(), Err(Error::Engine(_))));
        assert_eq!(support.supported_curve_names().map(|s| s.len()), Ok(2));
    }

    #[test]
    fn test_shape_fixed_by_first_resolution() {
        let support = CurveSupport::new(TableEngine::default());
        let legacy_host = Host { legacy: true, registry: CurveTypeRegistry::empty() };
        let modern_host = Host { legacy: false, registry: CurveTypeRegistry::empty() };

        assert_eq!(support.declaration_shape(&legacy_host), DeclarationShape::Legacy);
        assert_eq!(support.declaration_shape(&modern_host), DeclarationShape::Legacy);
    }

    #[test]
    fn test_host_without_symbol_always_gets_group_order() -> Result<()> {
        let support = CurveSupport::new(TableEngine::from_names(["brainpoolP256r1"]));
        let restricted = RegistrationConfig::new().with_curves([ExtensionCurve::X25519]);

        for config in [restricted, RegistrationConfig::default()] {
            let mut host = Host { legacy: false, registry: CurveTypeRegistry::empty() };
            let report = support.register_missing_curves(&mut host, &config)?;
            assert!(!report.registered().is_empty());

            for name in report.registered() {
                let descriptor = host.registry.get(name).and_then(CurveType::descriptor);
                assert!(
                    descriptor.and_then(|d| d.group_order()).is_some(),
                    "{} registered without a group order",
                    name
                );
            }
        }
        Ok(())
    }

    #[test]
    fn test_register_with_restricted_curves() -> Result<()> {
        let support = CurveSupport::new(TableEngine::from_names(["brainpoolP256r1", "brainpoolP384r1"]));
        let mut host = Host { legacy: false, registry: CurveTypeRegistry::new() };
        let config = RegistrationConfig::new()
            .with_curves([ExtensionCurve::BrainpoolP384R1]);

        let report = support.register_missing_curves(&mut host, &config)?;
        assert_eq!(report.registered(), ["brainpoolP384r1"]);
        assert!(!host.registry.contains("brainpoolP256r1"));
        Ok(())
    }

    #[test]
    fn test_invalid_config_rejected_before_discovery() {
        let support = CurveSupport::new(TableEngine::default());
        let mut host = Host { legacy: false, registry: CurveTypeRegistry::empty() };
        let mut config = RegistrationConfig::new();
        config.curves.reverse();

        assert!(matches!(
            support.register_missing_curves(&mut host, &config),
            Err(Error::Config(_))
        ));
        assert_eq!(support.engine().query_count(), 0);
    }
}
