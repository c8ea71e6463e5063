// Driver-level scalar values and the compile-time mapping from Rust primitives.
// A NULL is never a Scalar; the driver value is `Option<Scalar>`.
use time::OffsetDateTime;

use crate::core::scalar_type::ScalarType;

#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Text(String),
    Bytes(Vec<u8>),
    Timestamp(OffsetDateTime),
}

impl Scalar {
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            Scalar::Bool(_) => ScalarType::Bool,
            Scalar::Int32(_) => ScalarType::Int32,
            Scalar::Int64(_) => ScalarType::Int64,
            Scalar::Float32(_) => ScalarType::Float32,
            Scalar::Float64(_) => ScalarType::Float64,
            Scalar::Text(_) => ScalarType::Text,
            Scalar::Bytes(_) => ScalarType::Bytes,
            Scalar::Timestamp(_) => ScalarType::Timestamp,
        }
    }
}

/// A Rust type the SQL layer accepts natively, bound to exactly one [`ScalarType`].
///
/// `from_scalar` accepts only its own variant and hands any other scalar back
/// unchanged; there is no widening or parsing between types.
pub trait DriverScalar: Sized {
    const SCALAR_TYPE: ScalarType;

    fn to_scalar(&self) -> Scalar;

    fn from_scalar(value: Scalar) -> Result<Self, Scalar>;
}

macro_rules! driver_scalar {
    ($ty:ty, $variant:ident, |$v:ident| $to:expr) => {
        impl DriverScalar for $ty {
            const SCALAR_TYPE: ScalarType = ScalarType::$variant;

            fn to_scalar(&self) -> Scalar {
                let $v = self;
                Scalar::$variant($to)
            }

            fn from_scalar(value: Scalar) -> Result<Self, Scalar> {
                match value {
                    Scalar::$variant(inner) => Ok(inner),
                    other => Err(other),
                }
            }
        }
    };
}

driver_scalar!(bool, Bool, |v| *v);
driver_scalar!(i32, Int32, |v| *v);
driver_scalar!(i64, Int64, |v| *v);
driver_scalar!(f32, Float32, |v| *v);
driver_scalar!(f64, Float64, |v| *v);
driver_scalar!(String, Text, |v| v.clone());
driver_scalar!(Vec<u8>, Bytes, |v| v.clone());
driver_scalar!(OffsetDateTime, Timestamp, |v| *v);

#[cfg(test)]
mod tests {
    use super::{DriverScalar, Scalar, ScalarType};
    use time::macros::datetime;

    #[test]
    fn primitives_map_to_their_own_variant() {
        assert_eq!(42i64.to_scalar(), Scalar::Int64(42));
        assert_eq!(42i32.to_scalar(), Scalar::Int32(42));
        assert_eq!("x".to_string().to_scalar(), Scalar::Text("x".into()));
        assert_eq!(vec![1u8].to_scalar(), Scalar::Bytes(vec![1]));
        assert_eq!(<f64 as DriverScalar>::SCALAR_TYPE, ScalarType::Float64);
    }

    #[test]
    fn from_scalar_refuses_widening() {
        assert_eq!(i64::from_scalar(Scalar::Int32(5)), Err(Scalar::Int32(5)));
        assert_eq!(f64::from_scalar(Scalar::Float32(1.5)), Err(Scalar::Float32(1.5)));
        assert_eq!(
            String::from_scalar(Scalar::Bytes(b"abc".to_vec())),
            Err(Scalar::Bytes(b"abc".to_vec()))
        );
    }

    #[test]
    fn timestamps_pass_through() {
        let at = datetime!(2026-02-01 00:00:00 UTC);
        assert_eq!(at.to_scalar().scalar_type(), ScalarType::Timestamp);
        assert_eq!(time::OffsetDateTime::from_scalar(Scalar::Timestamp(at)), Ok(at));
    }
}
