//! Debug and display shims.
//!
//! Display text comes from the first available source, in this order:
//! 1. `Display` (`to_string`)
//! 2. a conversion into `String` ([`StringCast`])
//! 3. a byte view ([`StringView`]), decoded as lossy UTF-8

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt::{Debug, Display};

use crate::string::BridgeString;

/// Types convertible into an owned `String` by reference.
pub trait StringCast {
    fn string_cast(&self) -> String;
}

impl<T: ?Sized> StringCast for T
where
    for<'a> String: From<&'a T>,
{
    #[inline]
    fn string_cast(&self) -> String {
        String::from(self)
    }
}

/// Types with a byte view of their text.
pub trait StringView {
    fn string_view(&self) -> &[u8];
}

impl<T: ?Sized + AsRef<[u8]>> StringView for T {
    #[inline]
    fn string_view(&self) -> &[u8] {
        self.as_ref()
    }
}

#[inline]
pub extern "C" fn debug<T: Debug>(this: &T) -> BridgeString {
    BridgeString::from(format!("{this:?}"))
}

#[inline]
pub extern "C" fn display_to_string<T: Display>(this: &T) -> BridgeString {
    BridgeString::from(this.to_string())
}

#[inline]
pub extern "C" fn display_string_cast<T: StringCast>(this: &T) -> BridgeString {
    BridgeString::from(this.string_cast())
}

#[inline]
pub extern "C" fn display_string_view<T: StringView>(this: &T) -> BridgeString {
    BridgeString::lossy(this.string_view())
}
