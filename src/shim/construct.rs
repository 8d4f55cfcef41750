//! Lifecycle shims: construct in place, relocate, destroy.

use core::mem::{ManuallyDrop, MaybeUninit};
use core::ptr;

/// Default-construct a `T` into `this`.
///
/// # Safety
///
/// `this` must be valid for writes and aligned for `T`. Whatever it held
/// before is overwritten without being dropped.
#[inline]
#[cfg_attr(feature = "profiling", profiling::function)]
pub unsafe extern "C" fn default_new<T: Default>(this: *mut T) {
    unsafe { this.write(T::default()) }
}

/// Copy-construct into `this` from `that`. The source stays alive.
///
/// # Safety
///
/// `this` as for [`default_new`]; `that` must point to a live `T`.
#[inline]
#[cfg_attr(feature = "profiling", profiling::function)]
pub unsafe extern "C" fn copy_new<T: Clone>(this: *mut T, that: *const T) {
    unsafe { this.write((*that).clone()) }
}

/// Move-construct into `this` from `that`.
///
/// # Safety
///
/// `this` as for [`default_new`]; `that` must point to a live `T` that does
/// not overlap `this`. Afterwards `that` is logically uninitialized and must
/// not be destroyed or read as a `T` again.
#[inline]
#[cfg_attr(feature = "profiling", profiling::function)]
pub unsafe extern "C" fn move_new<T>(this: *mut T, that: *mut T) {
    unsafe { ptr::copy_nonoverlapping(that, this, 1) }
}

/// Destroy the value at `this` in place.
///
/// # Safety
///
/// `this` must point to a live `T`, which is dead afterwards.
#[inline]
#[cfg_attr(feature = "profiling", profiling::function)]
pub unsafe extern "C" fn destruct<T>(this: *mut T) {
    unsafe { ptr::drop_in_place(this) }
}

/// An owned place for one `T`, driven through the lifecycle shims.
///
/// Copies take `&T` and leave the source alive; moves take `T` by value and
/// consume it. Dropping the slot destroys a live value.
pub struct Slot<T> {
    value: MaybeUninit<T>,
    live: bool,
}

impl<T> Slot<T> {
    pub const fn empty() -> Self {
        Self {
            value: MaybeUninit::uninit(),
            live: false,
        }
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn default_new(&mut self) -> &mut T
    where
        T: Default,
    {
        self.clear();
        // SAFETY: the slot is empty and owned by us.
        unsafe { default_new(self.value.as_mut_ptr()) };
        self.finish()
    }

    pub fn copy_from(&mut self, that: &T) -> &mut T
    where
        T: Clone,
    {
        self.clear();
        // SAFETY: the slot is empty; `that` is a live reference.
        unsafe { copy_new(self.value.as_mut_ptr(), that) };
        self.finish()
    }

    pub fn move_from(&mut self, that: T) -> &mut T {
        self.clear();
        let mut that = ManuallyDrop::new(that);
        // SAFETY: `that` is never used again and never dropped.
        unsafe { move_new(self.value.as_mut_ptr(), &mut *that) };
        self.finish()
    }

    pub fn get(&self) -> Option<&T> {
        // SAFETY: `live` tracks initialization.
        self.live.then(|| unsafe { self.value.assume_init_ref() })
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.live {
            // SAFETY: as above.
            Some(unsafe { self.value.assume_init_mut() })
        } else {
            None
        }
    }

    /// Move the value out, leaving the slot empty.
    pub fn take(&mut self) -> Option<T> {
        if !self.live {
            return None;
        }
        self.live = false;
        // SAFETY: the value was live and the flag is already cleared.
        Some(unsafe { self.value.assume_init_read() })
    }

    /// Destroy a live value, if any.
    pub fn clear(&mut self) {
        if self.live {
            self.live = false;
            // SAFETY: the value was live and is never read again.
            unsafe { destruct(self.value.as_mut_ptr()) }
        }
    }

    fn finish(&mut self) -> &mut T {
        self.live = true;
        // SAFETY: just constructed.
        unsafe { self.value.assume_init_mut() }
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for Slot<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct Counted<'a>(&'a Cell<i32>);

    impl<'a> Counted<'a> {
        fn new(live: &'a Cell<i32>) -> Self {
            live.set(live.get() + 1);
            Counted(live)
        }
    }

    impl Clone for Counted<'_> {
        fn clone(&self) -> Self {
            Counted::new(self.0)
        }
    }

    impl Drop for Counted<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    #[test]
    fn copy_keeps_source_move_consumes_it() {
        let live = Cell::new(0);
        let source = Counted::new(&live);

        let mut slot = Slot::empty();
        slot.copy_from(&source);
        assert_eq!(live.get(), 2);

        slot.move_from(source);
        assert_eq!(live.get(), 1, "copy destroyed, source moved without a new instance");

        drop(slot);
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn take_and_clear() {
        let mut slot: Slot<u32> = Slot::default();
        assert!(slot.get().is_none());
        *slot.default_new() += 7;
        assert_eq!(slot.get(), Some(&7));
        assert_eq!(slot.take(), Some(7));
        assert!(!slot.is_live());
        slot.clear();
        assert_eq!(slot.take(), None);
    }
}
