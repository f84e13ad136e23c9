/*!
Native engine boundary.

The engine is the library that actually performs elliptic curve operations.
This crate only asks it which curves it has built in: first the size of its
builtin table, then the table itself, then a short name per identifier.
*/

use crate::core::error::Result;

pub mod table;

#[cfg(feature = "openssl")]
pub mod openssl;

pub use table::TableEngine;

#[cfg(feature = "openssl")]
pub use self::openssl::OpensslEngine;

/// Numeric curve identifier assigned by the engine
pub type Nid = i32;

/// One record of the engine's builtin curve table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuiltinCurve {
    /// Engine identifier for the curve
    pub nid: Nid,
}

impl BuiltinCurve {
    pub fn new(nid: Nid) -> Self {
        Self { nid }
    }
}

/// Builtin-curve enumeration as exposed by a native engine
pub trait CurveEngine {
    /// Number of curves in the builtin table
    fn builtin_curve_count(&self) -> Result<usize>;

    /// Fill `out` with up to `out.len()` builtin curves and return the number
    /// of records the engine reports
    fn builtin_curves(&self, out: &mut [BuiltinCurve]) -> Result<usize>;

    /// Canonical short name for a curve identifier
    fn short_name(&self, nid: Nid) -> Result<String>;
}

impl<E: CurveEngine + ?Sized> CurveEngine for Box<E> {
    fn builtin_curve_count(&self) -> Result<usize> {
        (**self).builtin_curve_count()
    }

    fn builtin_curves(&self, out: &mut [BuiltinCurve]) -> Result<usize> {
        (**self).builtin_curves(out)
    }

    fn short_name(&self, nid: Nid) -> Result<String> {
        (**self).short_name(nid)
    }
}

impl<E: CurveEngine + ?Sized> CurveEngine for &E {
    fn builtin_curve_count(&self) -> Result<usize> {
        (**self).builtin_curve_count()
    }

    fn builtin_curves(&self, out: &mut [BuiltinCurve]) -> Result<usize> {
        (**self).builtin_curves(out)
    }

    fn short_name(&self, nid: Nid) -> Result<String> {
        (**self).short_name(nid)
    }
}

/// Engine used by the process-wide context when none has been installed
#[cfg(feature = "openssl")]
pub(crate) fn platform_engine() -> Box<dyn CurveEngine + Send + Sync> {
    Box::new(OpensslEngine::new())
}

#[cfg(not(feature = "openssl"))]
pub(crate) fn platform_engine() -> Box<dyn CurveEngine + Send + Sync> {
    log::warn!("No native curve engine linked, builtin curve table is empty");
    Box::new(TableEngine::default())
}
