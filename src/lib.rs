/*!
# ECC Curve Registry

Elliptic curve capability discovery for a host cryptographic library.

## Overview

A native engine often supports more elliptic curves than the host library's
typed API exposes. This crate:

- Reads the engine's builtin curve table once and caches the supported names
- Describes five extension curves: brainpoolP256r1, brainpoolP384r1,
  brainpoolP512r1, X25519 and ed25519
- Picks the host library's declaration shape (legacy or modern) once
- Adds descriptors for supported curves the host registry is missing, never
  replacing an existing entry

It performs no curve arithmetic; it only publishes curve metadata.

```no_run
use ecc_curve_registry::{register_missing_curves, get_curve};

# fn main() -> ecc_curve_registry::Result<()> {
let report = register_missing_curves()?;
for name in report.registered() {
    let curve = get_curve(name)?;
    println!("{} -> {:?}", name, curve.map(|c| c.key_size()));
}
# Ok(())
# }
```
*/

// Core components
pub mod core;

// Re-export commonly used types for convenience
pub use crate::core::error::{Error, Result, EngineError};
pub use crate::core::constants::VERSION;

// Re-export the engine boundary
pub use crate::core::engine::{BuiltinCurve, CurveEngine, Nid, TableEngine};
#[cfg(feature = "openssl")]
pub use crate::core::engine::OpensslEngine;

// Re-export curve descriptors and registration
pub use crate::core::curves::{
    CurveDescriptor, Declaration, DeclarationShape, ExtensionCurve, GroupOrder, descriptor_set,
    SupportedCurveSet, discover,
    HostLibrary, HostSymbol, supports_legacy_interface_declaration,
    CurveRegistry, CurveType, CurveTypeRegistry, HostCurve,
    RegistrationOutcome, RegistrationReport, inject_curves,
    RegistrationConfig,
    CurveSupport,
};

// Re-export the process-wide entry points
pub use crate::core::curves::{
    supported_curve_names, register_missing_curves, register_missing_curves_with,
    install_engine, curve_support,
    get_registry, register_curve, get_curve, get_curve_or_err, list_curves, DefaultHost,
};
