/*!
Extension curves for the host library.

Discovers which curves the engine supports and adds descriptors for the ones
the host library's registry is missing.
*/

// Static descriptors for the extension curves
pub mod descriptor;

// Engine curve discovery
pub mod discovery;

// Host library declaration compatibility
pub mod compat;

// Curve type registry
pub mod registry;

// Registry injection
pub mod injector;

// Config
pub mod config;

// Memoized context and process-wide entry points
pub mod support;

pub use compat::{supports_legacy_interface_declaration, HostLibrary, HostSymbol};
pub use config::RegistrationConfig;
pub use descriptor::{descriptor_set, CurveDescriptor, Declaration, DeclarationShape, ExtensionCurve, GroupOrder};
pub use discovery::{discover, SupportedCurveSet};
pub use injector::{inject_curves, RegistrationOutcome, RegistrationReport};
pub use registry::{CurveRegistry, CurveType, CurveTypeRegistry, HostCurve};
pub use registry::manager::{
    get_registry,
    register_curve,
    get_curve,
    get_curve_or_err,
    list_curves,
    DefaultHost,
};
pub use support::{
    curve_support,
    install_engine,
    register_missing_curves,
    register_missing_curves_with,
    supported_curve_names,
    CurveSupport,
};
