//! Purpose: Lock the valuer/scanner contract a host SQL layer relies on.
//! Exports: Integration tests only.
//! Role: Drive `Nilable<T>` through the traits the way a row mapper would.
//! Invariants: NULL <-> unset in both directions; scans never coerce between scalar types.
//! Notes: A debug subscriber is installed so rejected scans are visible with --nocapture.

use nilable::sql::{DriverScalar, Scalar, ScalarType, Scanner, Valuer};
use nilable::{ErrorKind, Nilable};
use time::macros::datetime;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nilable=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

// Minimal stand-in for a driver's row: one scalar or NULL per column.
struct Row(Vec<Option<Scalar>>);

impl Row {
    fn scan_into(&self, targets: &mut [&mut dyn Scanner]) -> Result<(), nilable::Error> {
        for (column, target) in self.0.iter().zip(targets.iter_mut()) {
            target.scan(column.clone())?;
        }
        Ok(())
    }
}

fn bind(params: &[&dyn Valuer]) -> Vec<Option<Scalar>> {
    params
        .iter()
        .map(|param| param.driver_value().expect("driver value"))
        .collect()
}

#[test]
fn concrete_string_scenario() {
    let value = Nilable::from_value("test".to_string());
    let bound = value.driver_value().unwrap();
    assert_eq!(bound, Some(Scalar::Text("test".to_string())));

    let mut back = Nilable::<String>::default();
    back.scan(bound).unwrap();
    assert_eq!(back, value);
}

#[test]
fn row_binds_and_scans_mixed_columns() {
    init_tracing();
    let created = datetime!(2026-02-01 12:30:00 UTC);
    let name = Nilable::from_value("neo".to_string());
    let score = Nilable::<f64>::unset();
    let at = Nilable::from_value(created);
    let blob = Nilable::from_value(Vec::<u8>::new());

    let params: [&dyn Valuer; 4] = [&name, &score, &at, &blob];
    let row = Row(bind(&params));
    assert_eq!(row.0[1], None);
    assert_eq!(row.0[3], Some(Scalar::Bytes(Vec::new())));

    let mut name_out = Nilable::<String>::unset();
    let mut score_out = Nilable::new(1.5f64);
    let mut at_out = Nilable::<time::OffsetDateTime>::unset();
    let mut blob_out = Nilable::<Vec<u8>>::unset();
    let mut targets: [&mut dyn Scanner; 4] =
        [&mut name_out, &mut score_out, &mut at_out, &mut blob_out];
    row.scan_into(&mut targets).unwrap();

    assert_eq!(name_out, name);
    assert_eq!(score_out, score);
    assert_eq!(at_out, at);
    assert_eq!(blob_out, blob);
}

#[test]
fn scan_rejects_every_foreign_scalar_type() {
    init_tracing();
    let foreign = [
        Scalar::Bool(true),
        Scalar::Int32(1),
        Scalar::Float32(1.0),
        Scalar::Float64(1.0),
        Scalar::Text("1".into()),
        Scalar::Bytes(vec![1]),
        Scalar::Timestamp(datetime!(2026-01-01 00:00:00 UTC)),
    ];
    for scalar in foreign {
        let found = scalar.scalar_type();
        let mut target = Nilable::<i64>::unset();
        let err = target.scan(Some(scalar)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ScanTypeMismatch);
        assert_eq!(err.expected(), Some(<i64 as DriverScalar>::SCALAR_TYPE));
        assert_eq!(err.found(), Some(found));
        assert!(target.is_unset());
    }
}

#[test]
fn mismatch_error_names_both_types() {
    let mut target = Nilable::<i64>::unset();
    let err = target.scan(Some(Scalar::Int32(32))).unwrap_err();
    assert_eq!(err.expected(), Some(ScalarType::Int64));
    assert_eq!(err.to_string(), "ScanTypeMismatch: cannot scan int32 into int64");
}

#[test]
fn zero_values_survive_the_driver_round_trip() {
    assert_eq!(
        Nilable::<bool>::scanned(Nilable::new(false).to_driver_value()).unwrap(),
        Nilable::new(false)
    );
    assert_eq!(
        Nilable::<i32>::scanned(Nilable::new(0i32).to_driver_value()).unwrap(),
        Nilable::new(0i32)
    );
    assert_eq!(
        Nilable::<String>::scanned(Nilable::new(String::new()).to_driver_value()).unwrap(),
        Nilable::new(String::new())
    );
}
