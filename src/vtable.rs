//! The per-type table of bridge functions handed to the foreign side.

use core::fmt;

use crate::comparison::Comparison;
use crate::string::BridgeString;

pub type ConstructFn<T> = unsafe extern "C" fn(this: *mut T);
pub type CopyFn<T> = unsafe extern "C" fn(this: *mut T, that: *const T);
pub type MoveFn<T> = unsafe extern "C" fn(this: *mut T, that: *mut T);
pub type DestructFn<T> = unsafe extern "C" fn(this: *mut T);
pub type RelationFn<T> = extern "C" fn(lhs: &T, rhs: &T) -> bool;
pub type ThreeWayFn<T> = extern "C" fn(lhs: &T, rhs: &T) -> i8;
pub type HashFn<T> = extern "C" fn(this: &T) -> usize;
pub type FormatFn<T> = extern "C" fn(this: &T) -> BridgeString;

/// Bridge functions for one registered type.
///
/// Every slot is a nullable function pointer on the C side: `None` means the
/// type lacks the operation, and the foreign binding must not offer it. The
/// layout is fixed regardless of cargo features.
#[repr(C)]
pub struct BridgeVTable<T> {
    pub size: usize,
    pub align: usize,
    pub default_new: Option<ConstructFn<T>>,
    pub copy_new: Option<CopyFn<T>>,
    pub move_new: Option<MoveFn<T>>,
    pub destruct: Option<DestructFn<T>>,
    pub eq: Option<RelationFn<T>>,
    pub ne: Option<RelationFn<T>>,
    pub lt: Option<RelationFn<T>>,
    pub le: Option<RelationFn<T>>,
    pub gt: Option<RelationFn<T>>,
    pub ge: Option<RelationFn<T>>,
    pub three_way: Option<ThreeWayFn<T>>,
    pub hash: Option<HashFn<T>>,
    pub debug: Option<FormatFn<T>>,
    pub display: Option<FormatFn<T>>,
}

/// One bridged operation, named as in the manifest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "manifest", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "manifest", serde(rename_all = "snake_case"))]
pub enum Operation {
    DefaultNew,
    CopyNew,
    MoveNew,
    Destruct,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    ThreeWay,
    Hash,
    Debug,
    Display,
}

impl Operation {
    pub const ALL: [Operation; 14] = [
        Operation::DefaultNew,
        Operation::CopyNew,
        Operation::MoveNew,
        Operation::Destruct,
        Operation::Eq,
        Operation::Ne,
        Operation::Lt,
        Operation::Le,
        Operation::Gt,
        Operation::Ge,
        Operation::ThreeWay,
        Operation::Hash,
        Operation::Debug,
        Operation::Display,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Operation::DefaultNew => "default_new",
            Operation::CopyNew => "copy_new",
            Operation::MoveNew => "move_new",
            Operation::Destruct => "destruct",
            Operation::Eq => "eq",
            Operation::Ne => "ne",
            Operation::Lt => "lt",
            Operation::Le => "le",
            Operation::Gt => "gt",
            Operation::Ge => "ge",
            Operation::ThreeWay => "three_way",
            Operation::Hash => "hash",
            Operation::Debug => "debug",
            Operation::Display => "display",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T> BridgeVTable<T> {
    /// Whether the slot for `op` is filled.
    pub const fn has(&self, op: Operation) -> bool {
        match op {
            Operation::DefaultNew => self.default_new.is_some(),
            Operation::CopyNew => self.copy_new.is_some(),
            Operation::MoveNew => self.move_new.is_some(),
            Operation::Destruct => self.destruct.is_some(),
            Operation::Eq => self.eq.is_some(),
            Operation::Ne => self.ne.is_some(),
            Operation::Lt => self.lt.is_some(),
            Operation::Le => self.le.is_some(),
            Operation::Gt => self.gt.is_some(),
            Operation::Ge => self.ge.is_some(),
            Operation::ThreeWay => self.three_way.is_some(),
            Operation::Hash => self.hash.is_some(),
            Operation::Debug => self.debug.is_some(),
            Operation::Display => self.display.is_some(),
        }
    }

    /// The filled slots, in declaration order.
    pub fn operations(&self) -> impl Iterator<Item = Operation> + '_ {
        Operation::ALL.into_iter().filter(move |op| self.has(*op))
    }

    // Safe Rust-side calls. `None` when the type lacks the operation.

    pub fn equal(&self, lhs: &T, rhs: &T) -> Option<bool> {
        self.eq.map(|f| f(lhs, rhs))
    }

    pub fn not_equal(&self, lhs: &T, rhs: &T) -> Option<bool> {
        self.ne.map(|f| f(lhs, rhs))
    }

    pub fn less(&self, lhs: &T, rhs: &T) -> Option<bool> {
        self.lt.map(|f| f(lhs, rhs))
    }

    pub fn less_equal(&self, lhs: &T, rhs: &T) -> Option<bool> {
        self.le.map(|f| f(lhs, rhs))
    }

    pub fn greater(&self, lhs: &T, rhs: &T) -> Option<bool> {
        self.gt.map(|f| f(lhs, rhs))
    }

    pub fn greater_equal(&self, lhs: &T, rhs: &T) -> Option<bool> {
        self.ge.map(|f| f(lhs, rhs))
    }

    pub fn compare(&self, lhs: &T, rhs: &T) -> Option<Comparison> {
        self.three_way.map(|f| Comparison::from_raw(f(lhs, rhs)))
    }

    pub fn hash_of(&self, this: &T) -> Option<usize> {
        self.hash.map(|f| f(this))
    }

    pub fn debug_string(&self, this: &T) -> Option<BridgeString> {
        self.debug.map(|f| f(this))
    }

    pub fn display_string(&self, this: &T) -> Option<BridgeString> {
        self.display.map(|f| f(this))
    }
}

impl<T> Clone for BridgeVTable<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for BridgeVTable<T> {}

impl<T> fmt::Debug for BridgeVTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Ops<'a, T>(&'a BridgeVTable<T>);

        impl<T> fmt::Debug for Ops<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.operations()).finish()
            }
        }

        f.debug_struct("BridgeVTable")
            .field("size", &self.size)
            .field("align", &self.align)
            .field("operations", &Ops(self))
            .finish()
    }
}
