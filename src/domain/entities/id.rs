use std::fmt;
use std::marker::PhantomData;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::application::app_error::AppError;

/// Typed wrapper around a store-assigned object id. The phantom parameter
/// keeps ids of different entities from being mixed up at compile time.
pub struct Id<T> {
    pub value: ObjectId,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(value: ObjectId) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub fn generate() -> Id<T> {
        Id::new(ObjectId::new())
    }

    pub fn to_hex(&self) -> String {
        self.value.to_hex()
    }
}

// Manual impls so `T` does not need to satisfy any bounds.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value.to_hex())
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.to_hex())
    }
}

impl<T> TryFrom<String> for Id<T> {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let oid = ObjectId::parse_str(&value)
            .map_err(|e| AppError::InvalidId(format!("Invalid object id: {}", e)))?;
        Ok(Id::new(oid))
    }
}

// Ids are stored and transported as their 24-char hex form.
impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value.to_hex())
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let oid = ObjectId::parse_str(&raw).map_err(serde::de::Error::custom)?;
        Ok(Id::new(oid))
    }
}
