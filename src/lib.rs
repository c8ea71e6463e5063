//! Purpose: `Nilable<T>`, a struct field type that keeps "unset" apart from any set value.
//! Exports: `core` (container, nil detection, errors), `json` (serde contract), `sql` (valuer/scanner).
//! Role: Lets models round-trip JSON `null` and SQL `NULL` without `Option` pointer chains.
//! Invariants: Unset is the only state that encodes as `null`/NULL, and the only one they decode to.
//! Invariants: Marshal and bind are pure observers; only unmarshal and scan change state.
//!
//! ```
//! use nilable::{Nilable, sql::{Scalar, Scanner, Valuer}};
//!
//! let name = Nilable::from_value("test".to_string());
//! assert_eq!(name.marshal_json().unwrap(), br#""test""#);
//! assert_eq!(name.driver_value().unwrap(), Some(Scalar::Text("test".into())));
//!
//! let mut scanned = Nilable::<String>::default();
//! scanned.scan(None).unwrap();
//! assert!(scanned.is_unset());
//! ```
pub mod core;
pub mod json;
pub mod sql;

pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::nil_state::NilState;
pub use crate::core::nilable::Nilable;
