/*!
Registry injection.

Adds extension curve descriptors to a curve registry. A descriptor is added
only when its name is free in the registry and the engine supports the curve;
anything else is skipped without error, so running it again is a no-op.
*/

use std::fmt;

#[cfg(feature = "serde-support")]
use serde::Serialize;

use crate::core::curves::descriptor::CurveDescriptor;
use crate::core::curves::discovery::SupportedCurveSet;
use crate::core::curves::registry::{CurveRegistry, CurveType};

/// What happened to one descriptor during injection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize))]
pub enum RegistrationOutcome {
    /// Added to the registry
    Registered,
    /// The registry already had an entry under this name
    AlreadyPresent,
    /// The engine does not report this curve
    UnsupportedByEngine,
}

impl fmt::Display for RegistrationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationOutcome::Registered => write!(f, "registered"),
            RegistrationOutcome::AlreadyPresent => write!(f, "already present"),
            RegistrationOutcome::UnsupportedByEngine => write!(f, "not supported by engine"),
        }
    }
}

/// Per-curve outcomes of one injection run, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize))]
pub struct RegistrationReport {
    outcomes: Vec<(&'static str, RegistrationOutcome)>,
}

impl RegistrationReport {
    pub fn outcomes(&self) -> &[(&'static str, RegistrationOutcome)] {
        &self.outcomes
    }

    pub fn outcome(&self, name: &str) -> Option<RegistrationOutcome> {
        self.outcomes
            .iter()
            .find(|(curve, _)| *curve == name)
            .map(|(_, outcome)| *outcome)
    }

    /// Names added by this run
    pub fn registered(&self) -> Vec<&'static str> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| *outcome == RegistrationOutcome::Registered)
            .map(|(name, _)| *name)
            .collect()
    }

    /// Names left alone by this run
    pub fn skipped(&self) -> Vec<&'static str> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| *outcome != RegistrationOutcome::Registered)
            .map(|(name, _)| *name)
            .collect()
    }
}

/// Add each descriptor to `registry` if its name is free and `supported`
/// contains it.
pub fn inject_curves<R, I>(
    registry: &mut R,
    supported: &SupportedCurveSet,
    descriptors: I,
) -> RegistrationReport
where
    R: CurveRegistry + ?Sized,
    I: IntoIterator<Item = CurveDescriptor>,
{
    let mut report = RegistrationReport::default();

    for descriptor in descriptors {
        let name = descriptor.name();
        let outcome = if registry.contains(name) {
            RegistrationOutcome::AlreadyPresent
        } else if !supported.contains(name) {
            RegistrationOutcome::UnsupportedByEngine
        } else if registry.insert(CurveType::Extension(descriptor)) {
            RegistrationOutcome::Registered
        } else {
            RegistrationOutcome::AlreadyPresent
        };

        log::debug!("Curve {} ({} shape): {}", name, descriptor.shape(), outcome);
        report.outcomes.push((name, outcome));
    }

    report
}
