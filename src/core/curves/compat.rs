/*!
Host library compatibility.

Older host libraries declare interface conformance through an exported
`register_interface` callable; newer ones dropped it in favor of declaring
conformance on the type itself. Which one applies is decided by looking for
the symbol, never by comparing version strings.
*/

use crate::core::constants::REGISTER_INTERFACE_SYMBOL;
use crate::core::curves::descriptor::DeclarationShape;
use crate::core::curves::registry::CurveRegistry;

/// Kind of value a host library exports under a symbol name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSymbol {
    Callable,
    Value,
}

/// Integration boundary with the host cryptographic library
pub trait HostLibrary {
    /// Look up an exported symbol
    fn lookup_symbol(&self, name: &str) -> Option<HostSymbol>;

    /// The host's curve name → curve type registry
    fn curve_registry(&mut self) -> &mut dyn CurveRegistry;
}

/// Whether `host` still exposes the legacy declaration mechanism
pub fn supports_legacy_interface_declaration<H: HostLibrary + ?Sized>(host: &H) -> bool {
    matches!(
        host.lookup_symbol(REGISTER_INTERFACE_SYMBOL),
        Some(HostSymbol::Callable)
    )
}

impl DeclarationShape {
    /// Select the declaration shape for `host`
    pub fn detect<H: HostLibrary + ?Sized>(host: &H) -> Self {
        if supports_legacy_interface_declaration(host) {
            DeclarationShape::Legacy
        } else {
            DeclarationShape::Modern
        }
    }
}
