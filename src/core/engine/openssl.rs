/*!
OpenSSL libcrypto engine.

Links against libcrypto and reads its builtin curve table through
`EC_get_builtin_curves`, resolving identifiers with `OBJ_nid2sn`.
*/

use std::ffi::CStr;

use libc::{c_char, c_int, size_t};

use crate::core::engine::{BuiltinCurve, CurveEngine, Nid};
use crate::core::error::{EngineError, Result};
use crate::engine_err;

#[repr(C)]
#[derive(Clone, Copy)]
struct EcBuiltinCurve {
    nid: c_int,
    // Only the identifier is used; the description stays in libcrypto
    _comment: *const c_char,
}

#[link(name = "crypto")]
unsafe extern "C" {
    fn EC_get_builtin_curves(r: *mut EcBuiltinCurve, nitems: size_t) -> size_t;
    fn OBJ_nid2sn(n: c_int) -> *const c_char;
}

/// Curve engine backed by the linked libcrypto
#[derive(Debug, Default, Clone, Copy)]
pub struct OpensslEngine;

impl OpensslEngine {
    pub fn new() -> Self {
        Self
    }
}

impl CurveEngine for OpensslEngine {
    fn builtin_curve_count(&self) -> Result<usize> {
        // A null table with zero items asks for the table size only
        let count = unsafe { EC_get_builtin_curves(std::ptr::null_mut(), 0) };
        Ok(count as usize)
    }

    fn builtin_curves(&self, out: &mut [BuiltinCurve]) -> Result<usize> {
        let mut raw = vec![
            EcBuiltinCurve {
                nid: 0,
                _comment: std::ptr::null(),
            };
            out.len()
        ];

        let count = unsafe { EC_get_builtin_curves(raw.as_mut_ptr(), raw.len() as size_t) };
        if count == 0 && !out.is_empty() {
            return engine_err!(EngineError::QueryFailed { call: "EC_get_builtin_curves" });
        }

        for (slot, curve) in out.iter_mut().zip(&raw) {
            *slot = BuiltinCurve::new(curve.nid);
        }

        Ok(count as usize)
    }

    fn short_name(&self, nid: Nid) -> Result<String> {
        let ptr = unsafe { OBJ_nid2sn(nid) };
        if ptr.is_null() {
            return engine_err!(EngineError::UnknownIdentifier(nid));
        }

        let name = unsafe { CStr::from_ptr(ptr) };
        name.to_str()
            .map(str::to_owned)
            .map_err(|_| EngineError::InvalidName(nid).into())
    }
}
