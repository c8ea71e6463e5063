//! Purpose: JSON wire contract for `Nilable<T>`.
//! Exports: serde `Serialize`/`Deserialize` impls; `Nilable::marshal_json`/`unmarshal_json`.
//! Role: Hooks the host JSON codec calls during struct (de)serialization.
//! Invariants: Unset encodes as `null`; set encodes as T's own encoding, never wrapped.
//! Invariants: `null` or empty input decodes to unset; decoder errors surface unchanged.
//! Notes: Pair struct fields with `#[serde(default)]` so a missing key also decodes to unset.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::error::Error;
use crate::core::nilable::Nilable;

const NULL_LITERAL: &[u8] = b"null";

impl<T: Serialize> Serialize for Nilable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.get() {
            Some(item) => item.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nilable<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Nilable::decoded)
    }
}

impl<T: Serialize> Nilable<T> {
    pub fn marshal_json(&self) -> Result<Vec<u8>, Error> {
        serde_json::to_vec(self).map_err(Error::encode)
    }
}

impl<T: DeserializeOwned> Nilable<T> {
    /// Decodes `input` into this container.
    ///
    /// On failure the returned error wraps the `serde_json::Error` as-is and
    /// the container is not modified.
    pub fn unmarshal_json(&mut self, input: &[u8]) -> Result<(), Error> {
        let trimmed = input.trim_ascii();
        if trimmed.is_empty() || trimmed == NULL_LITERAL {
            self.assign(None);
            return Ok(());
        }
        match serde_json::from_slice::<T>(trimmed) {
            Ok(item) => {
                self.assign(Some(item));
                Ok(())
            }
            Err(err) => {
                tracing::debug!(error = %err, "rejected json payload");
                Err(Error::decode(err))
            }
        }
    }
}
