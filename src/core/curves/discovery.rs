/*!
Curve discovery.

Reads the engine's builtin curve table and turns it into the set of canonical
curve names this process can use.
*/

use std::collections::BTreeSet;

#[cfg(feature = "serde-support")]
use serde::Serialize;

use crate::core::constants::names::ALWAYS_PRESENT;
use crate::core::engine::{BuiltinCurve, CurveEngine};
use crate::core::error::{EngineError, Result};

/// Canonical names of every curve the engine can operate on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize))]
pub struct SupportedCurveSet {
    names: BTreeSet<String>,
}

impl SupportedCurveSet {
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SupportedCurveSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Query `engine` for its builtin curves.
///
/// The table is read twice: once for its size, once to fill it. A fill that
/// reports a different size than the first call is treated as an engine
/// failure. X25519 and ed25519 are always part of the result.
pub fn discover<E: CurveEngine + ?Sized>(engine: &E) -> Result<SupportedCurveSet> {
    let count = engine.builtin_curve_count()?;

    let mut table = vec![BuiltinCurve::default(); count];
    let filled = engine.builtin_curves(&mut table)?;
    if filled != count {
        return Err(EngineError::InconsistentTable {
            expected: count,
            actual: filled,
        }
        .into());
    }

    let mut names = table
        .iter()
        .map(|curve| engine.short_name(curve.nid))
        .collect::<Result<BTreeSet<String>>>()?;
    names.extend(ALWAYS_PRESENT.iter().map(|name| name.to_string()));

    log::debug!(
        "Engine reports {} builtin curves, {} usable curve names",
        count,
        names.len()
    );

    Ok(SupportedCurveSet { names })
}
