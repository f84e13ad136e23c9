/*!
Registry of curve types.

The host library resolves curve names through this registry. It starts out
holding the curves the host defines itself; extension curves are added to it
only if missing, and existing entries are never replaced.
*/

pub mod manager;

use std::collections::HashMap;

#[cfg(feature = "serde-support")]
use serde::Serialize;

use crate::core::curves::descriptor::CurveDescriptor;

/// A curve the host library defines natively
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize))]
pub struct HostCurve {
    pub name: String,
    pub key_size: u32,
}

impl HostCurve {
    pub fn new(name: impl Into<String>, key_size: u32) -> Self {
        Self {
            name: name.into(),
            key_size,
        }
    }
}

/// Registry entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize))]
pub enum CurveType {
    /// Defined by the host library
    Host(HostCurve),
    /// Added from an extension descriptor
    Extension(CurveDescriptor),
}

impl CurveType {
    pub fn name(&self) -> &str {
        match self {
            CurveType::Host(curve) => &curve.name,
            CurveType::Extension(descriptor) => descriptor.name(),
        }
    }

    pub fn key_size(&self) -> u32 {
        match self {
            CurveType::Host(curve) => curve.key_size,
            CurveType::Extension(descriptor) => descriptor.key_size(),
        }
    }

    /// The extension descriptor, if this entry came from one
    pub fn descriptor(&self) -> Option<&CurveDescriptor> {
        match self {
            CurveType::Host(_) => None,
            CurveType::Extension(descriptor) => Some(descriptor),
        }
    }
}

impl From<CurveDescriptor> for CurveType {
    fn from(descriptor: CurveDescriptor) -> Self {
        CurveType::Extension(descriptor)
    }
}

/// Name → curve type lookup owned by the host library
pub trait CurveRegistry {
    fn contains(&self, name: &str) -> bool;

    fn get(&self, name: &str) -> Option<&CurveType>;

    /// Add `curve` under its name. Returns `false` and leaves the registry
    /// untouched if the name is taken.
    fn insert(&mut self, curve: CurveType) -> bool;
}

/// Curves every host library build defines, with key sizes in bits
const HOST_CURVES: [(&str, u32); 18] = [
    ("prime192v1", 192),
    ("prime256v1", 256),
    ("secp192r1", 192),
    ("secp224r1", 224),
    ("secp256r1", 256),
    ("secp384r1", 384),
    ("secp521r1", 521),
    ("secp256k1", 256),
    ("sect163k1", 163),
    ("sect233k1", 233),
    ("sect283k1", 283),
    ("sect409k1", 409),
    ("sect571k1", 571),
    ("sect163r2", 163),
    ("sect233r1", 233),
    ("sect283r1", 283),
    ("sect409r1", 409),
    ("sect571r1", 571),
];

/// In-memory curve type registry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurveTypeRegistry {
    curves: HashMap<String, CurveType>,
}

impl CurveTypeRegistry {
    /// Create a registry holding the host library's own curves
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for (name, key_size) in HOST_CURVES {
            registry.insert(CurveType::Host(HostCurve::new(name, key_size)));
        }
        registry
    }

    /// Create a registry with no curves at all
    pub fn empty() -> Self {
        Self {
            curves: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Registered curve names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.curves.keys().cloned().collect();
        names.sort();
        names
    }
}

impl CurveRegistry for CurveTypeRegistry {
    fn contains(&self, name: &str) -> bool {
        self.curves.contains_key(name)
    }

    fn get(&self, name: &str) -> Option<&CurveType> {
        self.curves.get(name)
    }

    fn insert(&mut self, curve: CurveType) -> bool {
        if self.curves.contains_key(curve.name()) {
            return false;
        }
        self.curves.insert(curve.name().to_string(), curve);
        true
    }
}
