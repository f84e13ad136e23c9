/*!
Constants for curve discovery and registration.

Curve names are the engine's canonical short names. Subgroup orders are
big-endian hex and must match the published standards exactly.
*/

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Host library symbol whose presence selects the legacy declaration shape
pub const REGISTER_INTERFACE_SYMBOL: &str = "register_interface";

/// Canonical curve names
pub mod names {
    pub const BRAINPOOL_P256R1: &str = "brainpoolP256r1";
    pub const BRAINPOOL_P384R1: &str = "brainpoolP384r1";
    pub const BRAINPOOL_P512R1: &str = "brainpoolP512r1";
    pub const X25519: &str = "X25519";
    pub const ED25519: &str = "ed25519";

    /// Names the host library routes outside the engine's group table, so
    /// they are treated as supported whatever the engine reports.
    pub const ALWAYS_PRESENT: [&str; 2] = [X25519, ED25519];
}

/// Subgroup orders
pub mod orders {
    /// RFC 5639, section 3.4
    pub const BRAINPOOL_P256R1: &str =
        "a9fb57dba1eea9bc3e660a909d838d718c397aa3b561a6f7901e0e82974856a7";

    /// RFC 5639, section 3.6
    pub const BRAINPOOL_P384R1: &str = concat!(
        "8cb91e82a3386d280f5d6f7e50e641df152f7109ed5456b3",
        "1f166e6cac0425a7cf3ab6af6b7fc3103b883202e9046565",
    );

    /// RFC 5639, section 3.7
    pub const BRAINPOOL_P512R1: &str = concat!(
        "aadd9db8dbe9c48b3fd4e6ae33c9fc07cb308db3b3c9d20ed6639cca70330870",
        "553e5c414ca92619418661197fac10471db1d381085ddaddb58796829ca90069",
    );

    /// 2^252 + 27742317777372353535851937790883648493 (RFC 7748, RFC 8032).
    /// Curve25519 and edwards25519 are birationally equivalent and share it.
    pub const CURVE25519: &str =
        "1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed";
}

/// Key sizes in bits
pub mod key_sizes {
    pub const BRAINPOOL_P256R1: u32 = 256;
    pub const BRAINPOOL_P384R1: u32 = 384;
    pub const BRAINPOOL_P512R1: u32 = 512;
    pub const X25519: u32 = 256;
    pub const ED25519: u32 = 256;
}
