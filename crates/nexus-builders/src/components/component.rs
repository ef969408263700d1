//! The contract shared by every component builder.

use serde::Serialize;

use crate::error::Result;

/// A builder that produces API-compatible JSON for one kind of component.
pub trait ComponentBuilder {
    /// The draft the builder mutates.
    type Data: Serialize;
    /// The validated snapshot handed to the transport layer.
    type Output: Serialize;

    fn data(&self) -> &Self::Data;

    /// Validate the whole draft and return a snapshot of it.
    ///
    /// Does not consume or modify the builder, so it can be called again
    /// after further changes.
    fn to_json(&self) -> Result<Self::Output>;

    fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.to_json()?)?)
    }
}
