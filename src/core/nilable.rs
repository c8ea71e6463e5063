//! Purpose: The `Nilable<T>` container and its construction rules.
//! Exports: `Nilable`.
//! Role: Struct field type separating "unset" (JSON null / SQL NULL) from any set value.
//! Invariants: Exactly two states; the payload is unobservable while unset.
//! Invariants: A set item is never itself nil; every public constructor folds nil into unset.
//! Invariants: Only the inbound adapters (JSON unmarshal, SQL scan) change state.
//! Notes: Equality, hashing and cloning follow value semantics of the payload.

use crate::core::nil_state::NilState;

/// A value that is either unset or set to an item of type `T`.
///
/// Unset is what JSON `null` and SQL `NULL` decode to, and what they encode
/// from. A set value may still hold `T`'s zero value (`0`, `""`, `[]`), which
/// stays distinguishable from unset on both wires.
///
/// ```
/// use nilable::Nilable;
///
/// let unset = Nilable::<String>::default();
/// assert!(unset.is_unset());
///
/// let empty = Nilable::from_value(String::new());
/// assert_eq!(empty.get().map(String::as_str), Some(""));
/// assert_ne!(unset, empty);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Nilable<T> {
    item: Option<T>,
}

impl<T> Nilable<T> {
    pub const fn unset() -> Self {
        Self { item: None }
    }

    /// Same as [`Nilable::from_value`].
    pub fn new(item: T) -> Self
    where
        T: NilState,
    {
        Self::from_value(item)
    }

    /// Wraps `item` as set, unless the item is itself nil.
    ///
    /// A `None` option or a JSON `null` produces an unset container.
    /// Collections are never nil, so an empty `Vec` or map is a set value.
    pub fn from_value(item: T) -> Self
    where
        T: NilState,
    {
        Self::from_option(Some(item))
    }

    /// Snapshots the pointee, or yields unset for `None`.
    ///
    /// The container owns a clone, so later changes to the source are not seen.
    pub fn from_ptr(item: Option<&T>) -> Self
    where
        T: Clone + NilState,
    {
        Self::from_option(item.cloned())
    }

    /// `None` and `Some(nil)` both produce unset.
    pub fn from_option(item: Option<T>) -> Self
    where
        T: NilState,
    {
        Self {
            item: item.filter(|item| !item.is_nil()),
        }
    }

    pub fn is_set(&self) -> bool {
        self.item.is_some()
    }

    pub fn is_unset(&self) -> bool {
        self.item.is_none()
    }

    pub fn get(&self) -> Option<&T> {
        self.item.as_ref()
    }

    pub fn as_option(&self) -> &Option<T> {
        &self.item
    }

    pub fn into_option(self) -> Option<T> {
        self.item
    }

    /// The item, or `T`'s zero value when unset.
    pub fn item_or_default(self) -> T
    where
        T: Default,
    {
        self.item.unwrap_or_default()
    }

    pub fn as_ref(&self) -> Nilable<&T> {
        Nilable {
            item: self.item.as_ref(),
        }
    }

    pub fn map<U, F>(self, f: F) -> Nilable<U>
    where
        U: NilState,
        F: FnOnce(T) -> U,
    {
        Nilable::from_option(self.item.map(f))
    }

    // Inbound adapters only. Decoders never yield a nil item for a present value.
    pub(crate) fn assign(&mut self, item: Option<T>) {
        self.item = item;
    }

    pub(crate) fn decoded(item: Option<T>) -> Self {
        Self { item }
    }
}

impl<T: Clone> Nilable<&T> {
    pub fn cloned(self) -> Nilable<T> {
        Nilable {
            item: self.item.cloned(),
        }
    }
}

impl<T> Default for Nilable<T> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<T: NilState> From<T> for Nilable<T> {
    fn from(item: T) -> Self {
        Self::new(item)
    }
}

impl<T: NilState> From<Option<T>> for Nilable<T> {
    fn from(item: Option<T>) -> Self {
        Self::from_option(item)
    }
}

impl<T> From<Nilable<T>> for Option<T> {
    fn from(value: Nilable<T>) -> Self {
        value.item
    }
}
