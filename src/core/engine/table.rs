/*!
In-memory builtin curve table.

Behaves like a native engine whose table is fixed at construction. Used on
platforms without a linked engine and to pin the engine's answers in tests.
*/

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::engine::{BuiltinCurve, CurveEngine, Nid};
use crate::core::error::{EngineError, Result};

/// First identifier handed out by [`TableEngine::from_names`]
const FIRST_NID: Nid = 1000;

/// Engine backed by a fixed `(identifier, short name)` table
#[derive(Debug, Default)]
pub struct TableEngine {
    entries: Vec<(Nid, String)>,
    queries: AtomicUsize,
}

impl TableEngine {
    /// Create an engine from explicit identifier/name pairs
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Nid, S)>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(nid, name)| (nid, name.into())).collect(),
            queries: AtomicUsize::new(0),
        }
    }

    /// Create an engine reporting `names`, with sequential identifiers
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new((FIRST_NID..).zip(names))
    }

    /// Number of table enumeration calls made so far
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::Relaxed)
    }
}

impl CurveEngine for TableEngine {
    fn builtin_curve_count(&self) -> Result<usize> {
        self.queries.fetch_add(1, Ordering::Relaxed);
        Ok(self.entries.len())
    }

    fn builtin_curves(&self, out: &mut [BuiltinCurve]) -> Result<usize> {
        self.queries.fetch_add(1, Ordering::Relaxed);
        for (slot, (nid, _)) in out.iter_mut().zip(&self.entries) {
            *slot = BuiltinCurve::new(*nid);
        }
        Ok(self.entries.len())
    }

    fn short_name(&self, nid: Nid) -> Result<String> {
        self.entries
            .iter()
            .find(|(id, _)| *id == nid)
            .map(|(_, name)| name.clone())
            .ok_or(EngineError::UnknownIdentifier(nid).into())
    }
}
