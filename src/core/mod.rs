// Container, nil detection, and error modeling.
pub mod error;
pub mod nil_state;
pub mod nilable;
pub mod scalar_type;
