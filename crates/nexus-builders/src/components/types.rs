//! Wire types for message components (snake_case field names).

use std::fmt;

use nexus_common::{Snowflake, ValidationError};
use serde::{Deserialize, Serialize};

// ── Component type ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentType(pub u8);

impl ComponentType {
    pub const ACTION_ROW: Self = Self(1);
    pub const BUTTON: Self = Self(2);
    pub const STRING_SELECT: Self = Self(3);
    pub const TEXT_INPUT: Self = Self(4);
    pub const USER_SELECT: Self = Self(5);
    pub const ROLE_SELECT: Self = Self(6);
    pub const MENTIONABLE_SELECT: Self = Self(7);
    pub const CHANNEL_SELECT: Self = Self(8);
}

fn default_button_type() -> ComponentType {
    ComponentType::BUTTON
}

// ── Button style ──────────────────────────────────────────────────────────────

/// How a button looks and what pressing it does.
///
/// `Link` buttons open a URL, `Premium` buttons start a SKU purchase, and every
/// other style sends an interaction carrying the button's custom id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum ButtonStyle {
    Primary = 1,
    Secondary = 2,
    Success = 3,
    Danger = 4,
    Link = 5,
    Premium = 6,
}

impl ButtonStyle {
    pub const ALL: [ButtonStyle; 6] = [
        Self::Primary,
        Self::Secondary,
        Self::Success,
        Self::Danger,
        Self::Link,
        Self::Premium,
    ];

    /// Styles that dispatch an interaction and therefore need a custom id.
    pub const INTERACTIVE: [ButtonStyle; 4] =
        [Self::Primary, Self::Secondary, Self::Success, Self::Danger];

    pub fn name(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Success => "Success",
            Self::Danger => "Danger",
            Self::Link => "Link",
            Self::Premium => "Premium",
        }
    }

    pub fn requires_custom_id(self) -> bool {
        !matches!(self, Self::Link | Self::Premium)
    }
}

impl From<ButtonStyle> for u8 {
    fn from(style: ButtonStyle) -> Self {
        style as u8
    }
}

impl TryFrom<u8> for ButtonStyle {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|s| *s as u8 == value)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "style",
                value: value.to_string(),
            })
    }
}

impl fmt::Display for ButtonStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Emoji ─────────────────────────────────────────────────────────────────────

/// Partial emoji shown on a component.
///
/// Unicode emojis only carry a `name`; custom emojis add their `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentEmoji {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,
}

impl ComponentEmoji {
    pub fn unicode(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn custom(name: impl Into<String>, id: Snowflake) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
            animated: None,
        }
    }

    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = Some(animated);
        self
    }
}

impl From<&str> for ComponentEmoji {
    fn from(name: &str) -> Self {
        Self::unicode(name)
    }
}

impl From<String> for ComponentEmoji {
    fn from(name: String) -> Self {
        Self::unicode(name)
    }
}

// ── Button draft ──────────────────────────────────────────────────────────────

/// The in-progress state of a button.
///
/// Every field is optional so a draft can be filled in any order. Which
/// combinations are legal depends on `style` and is only checked when the
/// draft is serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonData {
    #[serde(rename = "type", default = "default_button_type")]
    pub kind: ComponentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ButtonStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<ComponentEmoji>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl Default for ButtonData {
    fn default() -> Self {
        Self {
            kind: ComponentType::BUTTON,
            style: None,
            custom_id: None,
            url: None,
            sku_id: None,
            label: None,
            emoji: None,
            disabled: None,
        }
    }
}

// ── Serialized button ─────────────────────────────────────────────────────────

/// A button that passed the consistency check, ready to send.
///
/// Each variant holds exactly the fields its selector allows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiButtonComponent {
    CustomId(ButtonWithCustomId),
    Url(ButtonWithUrl),
    SkuId(ButtonWithSkuId),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonWithCustomId {
    #[serde(rename = "type")]
    pub kind: ComponentType,
    pub style: ButtonStyle,
    pub custom_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<ComponentEmoji>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonWithUrl {
    #[serde(rename = "type")]
    pub kind: ComponentType,
    pub style: ButtonStyle,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<ComponentEmoji>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonWithSkuId {
    #[serde(rename = "type")]
    pub kind: ComponentType,
    pub style: ButtonStyle,
    pub sku_id: Snowflake,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl ApiButtonComponent {
    pub fn style(&self) -> ButtonStyle {
        match self {
            Self::CustomId(b) => b.style,
            Self::Url(b) => b.style,
            Self::SkuId(b) => b.style,
        }
    }
}

impl From<ApiButtonComponent> for ButtonData {
    fn from(button: ApiButtonComponent) -> Self {
        match button {
            ApiButtonComponent::CustomId(b) => Self {
                kind: b.kind,
                style: Some(b.style),
                custom_id: Some(b.custom_id),
                label: b.label,
                emoji: b.emoji,
                disabled: b.disabled,
                ..Default::default()
            },
            ApiButtonComponent::Url(b) => Self {
                kind: b.kind,
                style: Some(b.style),
                url: Some(b.url),
                label: b.label,
                emoji: b.emoji,
                disabled: b.disabled,
                ..Default::default()
            },
            ApiButtonComponent::SkuId(b) => Self {
                kind: b.kind,
                style: Some(b.style),
                sku_id: Some(b.sku_id),
                disabled: b.disabled,
                ..Default::default()
            },
        }
    }
}
