use std::ffi::{c_char, CStr};

use crate::errors::RasterError;

pub fn _string(raw_ptr: *const c_char) -> String {
    if raw_ptr.is_null() {
        return String::new();
    }
    let c_str = unsafe { CStr::from_ptr(raw_ptr) };
    c_str.to_string_lossy().into_owned()
}

pub fn _last_backend_err(method_name: &'static str) -> RasterError {
    let last_err_msg = _string(unsafe { gdal_sys::CPLGetLastErrorMsg() });
    unsafe { gdal_sys::CPLErrorReset() };
    RasterError::Backend {
        method_name,
        msg: last_err_msg,
    }
}
