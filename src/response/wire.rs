//! JSON encoding and decoding of response documents.
//!
//! The serde layout of [`ResponseDocument`] is the platform contract, so
//! encoding is a direct `serde_json` call. Decoding is pass-through: absent
//! fields take their defaults and no builder validation runs.

use serde_json::Value;

use crate::response::{config::ResponseConfig, domain::ResponseDocument, error::WireError};

impl ResponseDocument {
    /// Encodes the document as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns `WireError::Encode` if serialisation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use palaver::response::domain::ResponseDocument;
    /// use serde_json::json;
    ///
    /// let mut reply = ResponseDocument::new();
    /// reply.tell("Goodbye");
    /// let wire = reply.to_json()?;
    /// assert_eq!(wire["speech"], json!("<speak>Goodbye</speak>"));
    /// assert_eq!(wire["data"]["google"]["expectUserResponse"], json!(false));
    /// # Ok::<(), palaver::response::error::WireError>(())
    /// ```
    pub fn to_json(&self) -> Result<Value, WireError> {
        serde_json::to_value(self).map_err(WireError::Encode)
    }

    /// Encodes the document as a compact JSON string.
    ///
    /// # Errors
    ///
    /// Returns `WireError::Encode` if serialisation fails.
    pub fn to_json_string(&self) -> Result<String, WireError> {
        serde_json::to_string(self).map_err(WireError::Encode)
    }

    /// Rehydrates a document from a JSON value using the default
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns `WireError::Decode` if the value does not fit the contract.
    pub fn from_json(value: Value) -> Result<Self, WireError> {
        Self::from_json_with_config(value, ResponseConfig::default())
    }

    /// Rehydrates a document from a JSON value with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `WireError::Decode` if the value does not fit the contract.
    pub fn from_json_with_config(value: Value, config: ResponseConfig) -> Result<Self, WireError> {
        let mut document: Self = serde_json::from_value(value).map_err(WireError::Decode)?;
        document.config = config;
        Ok(document)
    }

    /// Rehydrates a document from JSON text using the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `WireError::Decode` if the text is not valid JSON or does not
    /// fit the contract.
    pub fn from_json_str(text: &str) -> Result<Self, WireError> {
        serde_json::from_str(text).map_err(WireError::Decode)
    }
}
