//! Purpose: SQL binding and row-scanning contracts for `Nilable<T>`.
//! Exports: `Scalar`, `ScalarType`, `DriverScalar`, `Valuer`, `Scanner`.
//! Role: The valuer/scanner seam a host SQL layer calls for parameters and columns.
//! Invariants: Unset binds as NULL (`None`); NULL scans to unset from any prior state.
//! Invariants: A scanned scalar must match `T::SCALAR_TYPE` exactly; no coercion.
//! Notes: Only `T: DriverScalar` reaches this path, so non-primitive payloads do not compile.

mod scalar;

#[cfg(feature = "rusqlite")]
mod sqlite;

pub use crate::core::scalar_type::ScalarType;
pub use scalar::{DriverScalar, Scalar};

use crate::core::error::Error;
use crate::core::nilable::Nilable;

/// Produces the driver value bound for a query parameter; `None` is NULL.
pub trait Valuer {
    fn driver_value(&self) -> Result<Option<Scalar>, Error>;
}

/// Consumes a driver value read from a result column; `None` is NULL.
pub trait Scanner {
    fn scan(&mut self, value: Option<Scalar>) -> Result<(), Error>;
}

impl<T: DriverScalar> Nilable<T> {
    pub fn to_driver_value(&self) -> Option<Scalar> {
        self.get().map(T::to_scalar)
    }

    /// Replaces the state with the scanned driver value.
    ///
    /// On a type mismatch the container keeps its previous state.
    pub fn from_driver_value(&mut self, value: Option<Scalar>) -> Result<(), Error> {
        let Some(scalar) = value else {
            self.assign(None);
            return Ok(());
        };
        match T::from_scalar(scalar) {
            Ok(item) => {
                self.assign(Some(item));
                Ok(())
            }
            Err(rejected) => {
                let expected = T::SCALAR_TYPE;
                let found = rejected.scalar_type();
                tracing::debug!(%expected, %found, "rejected scanned value");
                Err(Error::scan_mismatch(expected, found))
            }
        }
    }

    pub fn scanned(value: Option<Scalar>) -> Result<Self, Error> {
        let mut out = Self::unset();
        out.from_driver_value(value)?;
        Ok(out)
    }
}

impl<T: DriverScalar> Valuer for Nilable<T> {
    fn driver_value(&self) -> Result<Option<Scalar>, Error> {
        Ok(self.to_driver_value())
    }
}

impl<T: DriverScalar> Scanner for Nilable<T> {
    fn scan(&mut self, value: Option<Scalar>) -> Result<(), Error> {
        self.from_driver_value(value)
    }
}
