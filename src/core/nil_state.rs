//! Purpose: Per-type answer to "is this value itself nil?".
//! Exports: `NilState`.
//! Role: Capability consulted by `Nilable::from_value` before wrapping a value.
//! Invariants: Only pointer-like kinds (`Option`) and JSON `null` report nil.
//! Invariants: Sequences and maps are never nil; an empty collection is a set value.
//! Notes: Rust has no nil collection distinct from an empty one, so the broad
//! (pointer/sequence/map) and pointer-only policies give identical answers here.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

pub trait NilState {
    fn is_nil(&self) -> bool;
}

impl<T> NilState for Option<T> {
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl NilState for serde_json::Value {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

macro_rules! never_nil {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl NilState for $ty {
                #[inline]
                fn is_nil(&self) -> bool {
                    false
                }
            }
        )+
    };
}

never_nil!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, (),
    String, Date, Time, PrimitiveDateTime, OffsetDateTime,
);

impl NilState for str {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T> NilState for Vec<T> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T> NilState for VecDeque<T> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T> NilState for [T] {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<K, V, S> NilState for HashMap<K, V, S> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<K, V> NilState for BTreeMap<K, V> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T, S> NilState for HashSet<T, S> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T> NilState for BTreeSet<T> {
    fn is_nil(&self) -> bool {
        false
    }
}

// References and owning smart pointers can never be null; defer to the pointee.
impl<T: NilState + ?Sized> NilState for &T {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

impl<T: NilState + ?Sized> NilState for Box<T> {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

impl<T: NilState + ?Sized> NilState for Rc<T> {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

impl<T: NilState + ?Sized> NilState for Arc<T> {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}
