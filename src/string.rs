//! Owned UTF-8 text handed across the boundary.

use core::fmt;
use core::ops::Deref;
use core::ptr::NonNull;

#[cfg(feature = "alloc")]
use alloc::string::String;
#[cfg(feature = "alloc")]
use core::mem::ManuallyDrop;

/// An owned UTF-8 buffer with a C layout: pointer, length, capacity.
///
/// Produced by the debug and display shims. The foreign side releases it
/// with [`bridge_string_free`]; on the Rust side it drops normally.
#[repr(C)]
pub struct BridgeString {
    ptr: *mut u8,
    len: usize,
    capacity: usize,
}

// SAFETY: uniquely owned heap text, like `String`.
unsafe impl Send for BridgeString {}
unsafe impl Sync for BridgeString {}

impl BridgeString {
    /// The empty string; owns no allocation.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling().as_ptr(),
            len: 0,
            capacity: 0,
        }
    }

    /// Decode `bytes` as UTF-8, replacing invalid sequences with U+FFFD.
    #[cfg(feature = "alloc")]
    pub fn lossy(bytes: &[u8]) -> Self {
        Self::from(String::from_utf8_lossy(bytes).into_owned())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: built only from `String` or the empty string.
        unsafe { core::str::from_utf8_unchecked(self.as_bytes()) }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: `ptr` is valid for `len` bytes, or dangling with `len == 0`.
        unsafe { core::slice::from_raw_parts(self.ptr, self.len) }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[cfg(feature = "alloc")]
    pub fn into_string(self) -> String {
        let this = ManuallyDrop::new(self);
        // SAFETY: the parts came from a `String` (or are the empty string,
        // which is a valid zero-capacity `String`).
        unsafe { String::from_raw_parts(this.ptr, this.len, this.capacity) }
    }
}

impl Default for BridgeString {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "alloc")]
impl From<String> for BridgeString {
    fn from(s: String) -> Self {
        let mut s = ManuallyDrop::new(s);
        Self {
            ptr: s.as_mut_ptr(),
            len: s.len(),
            capacity: s.capacity(),
        }
    }
}

#[cfg(feature = "alloc")]
impl From<&str> for BridgeString {
    fn from(s: &str) -> Self {
        Self::from(String::from(s))
    }
}

#[cfg(feature = "alloc")]
impl From<BridgeString> for String {
    fn from(s: BridgeString) -> Self {
        s.into_string()
    }
}

#[cfg(feature = "alloc")]
impl Clone for BridgeString {
    fn clone(&self) -> Self {
        Self::from(self.as_str())
    }
}

#[cfg(feature = "alloc")]
impl Drop for BridgeString {
    fn drop(&mut self) {
        if self.capacity != 0 {
            // SAFETY: a non-zero capacity means the parts came from a `String`.
            drop(unsafe { String::from_raw_parts(self.ptr, self.len, self.capacity) });
        }
    }
}

impl Deref for BridgeString {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq for BridgeString {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for BridgeString {}

impl PartialEq<str> for BridgeString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for BridgeString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Debug for BridgeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for BridgeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Release a string returned by a debug or display shim.
#[cfg(feature = "alloc")]
#[unsafe(no_mangle)]
pub extern "C" fn bridge_string_free(s: BridgeString) {
    drop(s);
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;

    #[test]
    fn lossy_replaces_invalid_sequences() {
        let s = BridgeString::lossy(b"ok \xFF\xFE end");
        assert_eq!(s, "ok \u{FFFD}\u{FFFD} end");
    }

    #[test]
    fn round_trips_through_string() {
        let s = BridgeString::from(String::from("bridge"));
        assert_eq!(s.len(), 6);
        assert_eq!(s.clone().into_string(), "bridge");
        assert!(BridgeString::new().is_empty());
        assert_eq!(BridgeString::default().into_string(), "");
    }
}
