/*!
Curve descriptors for the extension curves.

A descriptor only describes a curve: its canonical name, key size and, in the
modern declaration shape, its subgroup order. No arithmetic happens here.
*/

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde-support")]
use serde::Serialize;

use crate::core::constants::{key_sizes, names, orders};
use crate::core::error::{Error, Result};

/// How the host library expects curve types to declare conformance to its
/// elliptic curve interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize))]
pub enum DeclarationShape {
    /// Conformance registered through the host's `register_interface`
    /// symbol; descriptors carry no group order
    Legacy,
    /// Conformance through the interface itself; descriptors carry the
    /// subgroup order
    Modern,
}

impl fmt::Display for DeclarationShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationShape::Legacy => write!(f, "legacy"),
            DeclarationShape::Modern => write!(f, "modern"),
        }
    }
}

/// Subgroup order of a curve, as big-endian hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize))]
pub struct GroupOrder(&'static str);

impl GroupOrder {
    pub const fn from_hex(hex: &'static str) -> Self {
        Self(hex)
    }

    pub fn as_hex(&self) -> &'static str {
        self.0
    }

    /// Big-endian bytes of the order
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        hex::decode(self.0)
            .map_err(|e| Error::InvalidFormat(format!("group order {}: {}", self.0, e)))
    }

    /// Bit length of the order
    pub fn bits(&self) -> Result<u32> {
        let bytes = self.to_bytes()?;
        let bits = match bytes.iter().position(|&b| b != 0) {
            Some(first) => (bytes.len() - first) as u32 * 8 - bytes[first].leading_zeros(),
            None => 0,
        };
        Ok(bits)
    }
}

impl fmt::Display for GroupOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.0)
    }
}

/// Shape-specific part of a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize))]
pub enum Declaration {
    Legacy,
    Modern { group_order: GroupOrder },
}

/// Metadata record for one curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize))]
pub struct CurveDescriptor {
    name: &'static str,
    key_size: u32,
    declaration: Declaration,
}

impl CurveDescriptor {
    /// Canonical curve name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Key size in bits
    pub fn key_size(&self) -> u32 {
        self.key_size
    }

    /// Subgroup order, present only in the modern shape
    pub fn group_order(&self) -> Option<&GroupOrder> {
        match &self.declaration {
            Declaration::Legacy => None,
            Declaration::Modern { group_order } => Some(group_order),
        }
    }

    pub fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    pub fn shape(&self) -> DeclarationShape {
        match self.declaration {
            Declaration::Legacy => DeclarationShape::Legacy,
            Declaration::Modern { .. } => DeclarationShape::Modern,
        }
    }
}

/// Curves the engine may support but the host library does not define
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(Serialize))]
pub enum ExtensionCurve {
    BrainpoolP256R1,
    BrainpoolP384R1,
    BrainpoolP512R1,
    X25519,
    Ed25519,
}

impl ExtensionCurve {
    /// All extension curves in declaration order
    pub const ALL: [ExtensionCurve; 5] = [
        ExtensionCurve::BrainpoolP256R1,
        ExtensionCurve::BrainpoolP384R1,
        ExtensionCurve::BrainpoolP512R1,
        ExtensionCurve::X25519,
        ExtensionCurve::Ed25519,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ExtensionCurve::BrainpoolP256R1 => names::BRAINPOOL_P256R1,
            ExtensionCurve::BrainpoolP384R1 => names::BRAINPOOL_P384R1,
            ExtensionCurve::BrainpoolP512R1 => names::BRAINPOOL_P512R1,
            ExtensionCurve::X25519 => names::X25519,
            ExtensionCurve::Ed25519 => names::ED25519,
        }
    }

    pub fn key_size(&self) -> u32 {
        match self {
            ExtensionCurve::BrainpoolP256R1 => key_sizes::BRAINPOOL_P256R1,
            ExtensionCurve::BrainpoolP384R1 => key_sizes::BRAINPOOL_P384R1,
            ExtensionCurve::BrainpoolP512R1 => key_sizes::BRAINPOOL_P512R1,
            ExtensionCurve::X25519 => key_sizes::X25519,
            ExtensionCurve::Ed25519 => key_sizes::ED25519,
        }
    }

    pub fn group_order(&self) -> GroupOrder {
        let hex = match self {
            ExtensionCurve::BrainpoolP256R1 => orders::BRAINPOOL_P256R1,
            ExtensionCurve::BrainpoolP384R1 => orders::BRAINPOOL_P384R1,
            ExtensionCurve::BrainpoolP512R1 => orders::BRAINPOOL_P512R1,
            ExtensionCurve::X25519 | ExtensionCurve::Ed25519 => orders::CURVE25519,
        };
        GroupOrder::from_hex(hex)
    }

    /// Descriptor for this curve in the given shape
    pub fn descriptor(&self, shape: DeclarationShape) -> CurveDescriptor {
        let declaration = match shape {
            DeclarationShape::Legacy => Declaration::Legacy,
            DeclarationShape::Modern => Declaration::Modern {
                group_order: self.group_order(),
            },
        };

        CurveDescriptor {
            name: self.name(),
            key_size: self.key_size(),
            declaration,
        }
    }
}

impl fmt::Display for ExtensionCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExtensionCurve {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ExtensionCurve::ALL
            .into_iter()
            .find(|curve| curve.name() == s)
            .ok_or_else(|| Error::InvalidFormat(format!("not an extension curve: {}", s)))
    }
}

/// Descriptors for every extension curve, in declaration order
pub fn descriptor_set(shape: DeclarationShape) -> [CurveDescriptor; 5] {
    ExtensionCurve::ALL.map(|curve| curve.descriptor(shape))
}
