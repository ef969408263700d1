//! Nexus component builders.
//!
//! Assemble message components with chained setters. Each setter validates its
//! own field; `to_json` checks that the fields fit together and returns the
//! wire shape.
//!
//! ```rust
//! use nexus_builders::{ButtonBuilder, ButtonStyle, ComponentBuilder};
//!
//! let mut button = ButtonBuilder::new();
//! button
//!     .set_style(ButtonStyle::Link)?
//!     .set_url("https://example.com")?
//!     .set_label("Open docs")?;
//!
//! let json = button.to_value()?;
//! assert_eq!(json["url"], "https://example.com");
//! # Ok::<(), nexus_builders::BuilderError>(())
//! ```

pub mod components;
pub mod error;

pub use components::button::ButtonBuilder;
pub use components::component::ComponentBuilder;
pub use components::types::{
    ApiButtonComponent, ButtonData, ButtonStyle, ButtonWithCustomId, ButtonWithSkuId,
    ButtonWithUrl, ComponentEmoji, ComponentType,
};
pub use error::{BuilderError, Result};
pub use nexus_common::Snowflake;
pub use nexus_common::validation::{disable_validators, enable_validators, is_validation_enabled};
