/*!
Process-wide curve type registry.

The host library's registry lives for the whole process. It is created on
first use with the host's own curves and grows only by insertion.
*/

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::Lazy;

use crate::core::constants::REGISTER_INTERFACE_SYMBOL;
use crate::core::curves::compat::{HostLibrary, HostSymbol};
use crate::core::curves::registry::{CurveRegistry, CurveType, CurveTypeRegistry};
use crate::core::error::{Error, Result};
use crate::internal_err;

// Global registry instance
static CURVE_TYPES: Lazy<RwLock<CurveTypeRegistry>> =
    Lazy::new(|| RwLock::new(CurveTypeRegistry::new()));

/// Get a read-only view of the process-wide registry
pub fn get_registry() -> Result<RwLockReadGuard<'static, CurveTypeRegistry>> {
    match CURVE_TYPES.read() {
        Ok(guard) => Ok(guard),
        Err(_) => internal_err!("curve registry lock poisoned"),
    }
}

fn write_registry() -> Result<RwLockWriteGuard<'static, CurveTypeRegistry>> {
    match CURVE_TYPES.write() {
        Ok(guard) => Ok(guard),
        Err(_) => internal_err!("curve registry lock poisoned"),
    }
}

/// Register a curve type unless the name is already taken
pub fn register_curve(curve: CurveType) -> Result<bool> {
    let mut registry = write_registry()?;
    Ok(registry.insert(curve))
}

/// Get a curve type by name
pub fn get_curve(name: &str) -> Result<Option<CurveType>> {
    let registry = get_registry()?;
    Ok(registry.get(name).cloned())
}

/// Get a curve type by name, failing if it is not registered
pub fn get_curve_or_err(name: &str) -> Result<CurveType> {
    get_curve(name)?.ok_or_else(|| Error::UnsupportedCurve(name.to_string()))
}

/// List all registered curve names, sorted
pub fn list_curves() -> Result<Vec<String>> {
    let registry = get_registry()?;
    Ok(registry.names())
}

/// The host library as seen from this process: the process-wide registry,
/// held exclusively, plus the symbols this build exports.
pub struct DefaultHost {
    registry: RwLockWriteGuard<'static, CurveTypeRegistry>,
}

impl DefaultHost {
    /// Take exclusive access to the process-wide registry
    pub fn lock() -> Result<Self> {
        Ok(Self {
            registry: write_registry()?,
        })
    }
}

impl HostLibrary for DefaultHost {
    fn lookup_symbol(&self, name: &str) -> Option<HostSymbol> {
        if name == REGISTER_INTERFACE_SYMBOL && cfg!(feature = "legacy-interface") {
            Some(HostSymbol::Callable)
        } else {
            None
        }
    }

    fn curve_registry(&mut self) -> &mut dyn CurveRegistry {
        &mut *self.registry
    }
}
