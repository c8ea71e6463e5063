// rusqlite bridge: bind and read `Nilable<T>` columns directly.
// NULL <-> unset. A stored value must match T exactly: INTEGER -> i64,
// REAL -> f64, TEXT -> String, BLOB -> Vec<u8>; anything else is InvalidType.
use rusqlite::ToSql;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, Value, ValueRef};

use crate::core::nilable::Nilable;
use crate::sql::{DriverScalar, Scalar};

impl<T: ToSql> ToSql for Nilable<T> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self.get() {
            Some(item) => item.to_sql(),
            None => Ok(ToSqlOutput::Owned(Value::Null)),
        }
    }
}

impl<T: DriverScalar> FromSql for Nilable<T> {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let scalar = match value {
            ValueRef::Null => return Ok(Nilable::unset()),
            ValueRef::Integer(v) => Scalar::Int64(v),
            ValueRef::Real(v) => Scalar::Float64(v),
            ValueRef::Text(bytes) => {
                let text = std::str::from_utf8(bytes)
                    .map_err(|err| FromSqlError::Other(Box::new(err)))?;
                Scalar::Text(text.to_owned())
            }
            ValueRef::Blob(bytes) => Scalar::Bytes(bytes.to_vec()),
        };
        Nilable::scanned(Some(scalar)).map_err(|_| FromSqlError::InvalidType)
    }
}
