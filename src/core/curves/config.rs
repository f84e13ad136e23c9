/*!
Registration configuration.

Selects which extension curves are considered. The declaration shape is not
configurable; it always follows the host library.
*/

use crate::core::curves::descriptor::ExtensionCurve;
use crate::core::error::{Error, Result};

/// Configuration for a registration run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationConfig {
    /// Extension curves to consider, in the order they are processed
    pub curves: Vec<ExtensionCurve>,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            curves: ExtensionCurve::ALL.to_vec(),
        }
    }
}

impl RegistrationConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict registration to `curves`; they are processed in declaration
    /// order regardless of the order given here
    pub fn with_curves<I: IntoIterator<Item = ExtensionCurve>>(mut self, curves: I) -> Self {
        let mut curves: Vec<ExtensionCurve> = curves.into_iter().collect();
        curves.sort();
        self.curves = curves;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for pair in self.curves.windows(2) {
            if pair[0] >= pair[1] {
                return Err(Error::Config(format!(
                    "curves must be unique and in declaration order, found {} before {}",
                    pair[0], pair[1]
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RegistrationConfig::new();
        assert_eq!(config.curves, ExtensionCurve::ALL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_curves_sorts() {
        let config = RegistrationConfig::new()
            .with_curves([ExtensionCurve::Ed25519, ExtensionCurve::BrainpoolP256R1]);

        assert_eq!(config.curves, [ExtensionCurve::BrainpoolP256R1, ExtensionCurve::Ed25519]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_duplicate_curves_rejected() {
        let config = RegistrationConfig::new()
            .with_curves([ExtensionCurve::X25519, ExtensionCurve::X25519]);

        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_out_of_order_curves_rejected() {
        let mut config = RegistrationConfig::new();
        config.curves.reverse();

        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
