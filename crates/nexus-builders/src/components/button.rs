//! Button builder.

use nexus_common::ValidationError;

use super::assertions::{
    ButtonTarget, button_label_validator, button_style_validator, custom_id_validator,
    disabled_validator, emoji_validator, sku_id_validator, url_validator,
    validate_required_button_parameters,
};
use super::component::ComponentBuilder;
use super::types::{
    ApiButtonComponent, ButtonData, ButtonWithCustomId, ButtonWithSkuId, ButtonWithUrl,
    ComponentEmoji, ComponentType,
};
use crate::error::{BuilderError, Result};

/// Fluent builder for buttons.
///
/// Setters validate only their own field and leave the draft untouched when
/// they fail. Which fields may be combined is checked by [`to_json`].
///
/// ```rust
/// use nexus_builders::{ButtonBuilder, ButtonStyle, ComponentBuilder};
///
/// let mut button = ButtonBuilder::new();
/// button
///     .set_style(ButtonStyle::Primary)?
///     .set_custom_id("confirm")?
///     .set_label("Confirm")?
///     .set_emoji("✅")?;
///
/// let json = button.to_value()?;
/// assert_eq!(json["custom_id"], "confirm");
/// # Ok::<(), nexus_builders::BuilderError>(())
/// ```
///
/// [`to_json`]: ComponentBuilder::to_json
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ButtonBuilder {
    data: ButtonData,
}

fn rejected(err: ValidationError) -> BuilderError {
    tracing::debug!(field = err.field(), error = %err, "button field rejected");
    err.into()
}

impl ButtonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing button data. Nothing is validated until a setter
    /// or [`ComponentBuilder::to_json`] runs.
    pub fn from_data(mut data: ButtonData) -> Self {
        data.kind = ComponentType::BUTTON;
        Self { data }
    }

    /// Accepts a [`ButtonStyle`](super::types::ButtonStyle) or its raw integer value.
    pub fn set_style(&mut self, style: impl Into<u8>) -> Result<&mut Self> {
        self.data.style = Some(button_style_validator(style.into()).map_err(rejected)?);
        Ok(self)
    }

    /// Only `https://`, `http://`, and `discord://` URLs are accepted.
    /// Only legal on `Link` buttons.
    pub fn set_url(&mut self, url: impl Into<String>) -> Result<&mut Self> {
        self.data.url = Some(url_validator(url.into()).map_err(rejected)?);
        Ok(self)
    }

    /// Not legal on `Link` or `Premium` buttons.
    pub fn set_custom_id(&mut self, custom_id: impl Into<String>) -> Result<&mut Self> {
        self.data.custom_id = Some(custom_id_validator(custom_id.into()).map_err(rejected)?);
        Ok(self)
    }

    /// The purchasable SKU behind a `Premium` button.
    pub fn set_sku_id(&mut self, sku_id: impl ToString) -> Result<&mut Self> {
        self.data.sku_id = Some(sku_id_validator(&sku_id.to_string()).map_err(rejected)?);
        Ok(self)
    }

    pub fn set_emoji(&mut self, emoji: impl Into<ComponentEmoji>) -> Result<&mut Self> {
        self.data.emoji = Some(emoji_validator(emoji.into()).map_err(rejected)?);
        Ok(self)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.data.disabled = Some(disabled_validator(disabled));
        self
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> Result<&mut Self> {
        self.data.label = Some(button_label_validator(label.into()).map_err(rejected)?);
        Ok(self)
    }
}

impl ComponentBuilder for ButtonBuilder {
    type Data = ButtonData;
    type Output = ApiButtonComponent;

    fn data(&self) -> &ButtonData {
        &self.data
    }

    fn to_json(&self) -> Result<ApiButtonComponent> {
        let data = &self.data;
        let (style, target) = validate_required_button_parameters(
            data.style,
            data.label.as_deref(),
            data.emoji.as_ref(),
            data.custom_id.as_deref(),
            data.sku_id,
            data.url.as_deref(),
        )
        .inspect_err(|e| tracing::debug!(error = %e, "button failed consistency check"))?;

        tracing::trace!(%style, "serializing button");

        Ok(match target {
            ButtonTarget::CustomId(custom_id) => ApiButtonComponent::CustomId(ButtonWithCustomId {
                kind: data.kind,
                style,
                custom_id: custom_id.to_owned(),
                label: data.label.clone(),
                emoji: data.emoji.clone(),
                disabled: data.disabled,
            }),
            ButtonTarget::Url(url) => ApiButtonComponent::Url(ButtonWithUrl {
                kind: data.kind,
                style,
                url: url.to_owned(),
                label: data.label.clone(),
                emoji: data.emoji.clone(),
                disabled: data.disabled,
            }),
            ButtonTarget::SkuId(sku_id) => ApiButtonComponent::SkuId(ButtonWithSkuId {
                kind: data.kind,
                style,
                sku_id,
                disabled: data.disabled,
            }),
        })
    }
}

impl From<ButtonData> for ButtonBuilder {
    fn from(data: ButtonData) -> Self {
        Self::from_data(data)
    }
}

impl From<ApiButtonComponent> for ButtonBuilder {
    fn from(button: ApiButtonComponent) -> Self {
        Self::from_data(button.into())
    }
}
