// Process-wide discovery and registration. Every test installs the same
// engine first, since the engine is fixed by whichever test runs first.
use std::sync::Once;

use ecc_curve_registry::{
    curve_support, get_curve, get_curve_or_err, install_engine, list_curves,
    register_missing_curves, supported_curve_names, Error, RegistrationOutcome, Result,
    TableEngine,
};

static ENGINE: Once = Once::new();

fn setup() {
    ENGINE.call_once(|| {
        let engine = TableEngine::from_names(["secp256r1", "secp384r1", "brainpoolP256r1"]);
        install_engine(Box::new(engine)).expect("engine installed before first use");
    });
}

#[test]
fn test_supported_names_are_stable() -> Result<()> {
    setup();

    let first = supported_curve_names()?;
    let second = supported_curve_names()?;
    assert_eq!(first, second);
    assert!(first.contains("brainpoolP256r1"));
    assert!(first.contains("X25519"));
    assert!(first.contains("ed25519"));
    assert!(!first.contains("brainpoolP512r1"));
    Ok(())
}

#[test]
fn test_engine_cannot_be_replaced() -> Result<()> {
    setup();
    supported_curve_names()?;

    let result = install_engine(Box::new(TableEngine::default()));
    assert_eq!(result, Err(Error::AlreadyInitialized("curve engine")));
    Ok(())
}

#[test]
fn test_register_missing_curves() -> Result<()> {
    setup();

    let first = register_missing_curves()?;
    let second = register_missing_curves()?;

    // Other tests may have registered first; either way nothing is added twice
    assert!(second.registered().is_empty());
    assert_eq!(
        first.outcome("brainpoolP512r1"),
        Some(RegistrationOutcome::UnsupportedByEngine)
    );

    assert_eq!(get_curve_or_err("brainpoolP256r1")?.key_size(), 256);
    assert!(get_curve("brainpoolP384r1")?.is_none());
    assert!(list_curves()?.contains(&"ed25519".to_string()));
    assert!(matches!(
        get_curve_or_err("brainpoolP512r1"),
        Err(Error::UnsupportedCurve(_))
    ));
    Ok(())
}

#[test]
fn test_process_shape_follows_feature() -> Result<()> {
    setup();
    register_missing_curves()?;

    let entry = get_curve_or_err("X25519")?;
    let descriptor = entry.descriptor().expect("X25519 is an extension curve");
    assert_eq!(
        descriptor.group_order().is_none(),
        cfg!(feature = "legacy-interface")
    );
    assert_eq!(curve_support().supported_curve_names()?.len(), 5);
    Ok(())
}
