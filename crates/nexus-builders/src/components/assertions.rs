//! Field validators and the cross-field button check.
//!
//! Validators are pure: they take a value and hand back the value to store,
//! or a [`ValidationError`]. Builders call them from setters. The cross-field
//! check runs only when a draft is serialized, since setters can be called in
//! any order.

use nexus_common::validation::{
    is_validation_enabled, validate_length, validate_present, validate_snowflake,
    validate_url_scheme,
};
use nexus_common::{Snowflake, ValidationError};

use super::types::{ButtonStyle, ComponentEmoji};
use crate::error::{BuilderError, Result};

pub const LABEL_MAX_LENGTH: u64 = 80;
pub const CUSTOM_ID_MAX_LENGTH: u64 = 100;
pub const ALLOWED_URL_SCHEMES: &[&str] = &["https", "http", "discord"];

/// Style membership is always checked; there is no `ButtonStyle` for an unknown value.
pub fn button_style_validator(style: u8) -> std::result::Result<ButtonStyle, ValidationError> {
    ButtonStyle::try_from(style)
}

pub fn button_label_validator(label: String) -> std::result::Result<String, ValidationError> {
    if is_validation_enabled() {
        validate_length("label", &label, 1, LABEL_MAX_LENGTH)?;
    }
    Ok(label)
}

pub fn custom_id_validator(custom_id: String) -> std::result::Result<String, ValidationError> {
    if is_validation_enabled() {
        validate_length("custom_id", &custom_id, 1, CUSTOM_ID_MAX_LENGTH)?;
    }
    Ok(custom_id)
}

/// Stores the caller's string unchanged once it parses with an allowed scheme.
pub fn url_validator(url: String) -> std::result::Result<String, ValidationError> {
    if is_validation_enabled() {
        validate_url_scheme("url", &url, ALLOWED_URL_SCHEMES)?;
    }
    Ok(url)
}

pub fn emoji_validator(
    emoji: ComponentEmoji,
) -> std::result::Result<ComponentEmoji, ValidationError> {
    if is_validation_enabled() {
        validate_present("emoji.name", emoji.name.as_deref())?;
    }
    Ok(emoji)
}

pub fn disabled_validator(disabled: bool) -> bool {
    disabled
}

pub fn sku_id_validator(sku_id: &str) -> std::result::Result<Snowflake, ValidationError> {
    validate_snowflake("sku_id", sku_id)
}

/// The field that decides what pressing a button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTarget<'a> {
    CustomId(&'a str),
    Url(&'a str),
    SkuId(Snowflake),
}

/// Check that the fields present on a button are the ones its style allows.
///
/// Rules are evaluated in order and the first violation is returned. On
/// success, yields the style together with the field selected by it.
pub fn validate_required_button_parameters<'a>(
    style: Option<ButtonStyle>,
    label: Option<&str>,
    emoji: Option<&ComponentEmoji>,
    custom_id: Option<&'a str>,
    sku_id: Option<Snowflake>,
    url: Option<&'a str>,
) -> Result<(ButtonStyle, ButtonTarget<'a>)> {
    let style = style.ok_or(BuilderError::MissingStyle)?;

    // Empty strings count as unset; the constructor and disabled validators let them through.
    let label = label.filter(|l| !l.is_empty());
    let custom_id = custom_id.filter(|c| !c.is_empty());
    let url = url.filter(|u| !u.is_empty());
    let has_display = label.is_some() || emoji.is_some();

    let target = if style.requires_custom_id() {
        let custom_id = custom_id.ok_or(BuilderError::MissingField {
            style: style.name(),
            field: "a custom id",
        })?;
        if url.is_some() {
            return Err(BuilderError::ForbiddenField {
                style: style.name(),
                field: "a URL",
            });
        }
        ButtonTarget::CustomId(custom_id)
    } else if style == ButtonStyle::Link {
        let url = url.ok_or(BuilderError::MissingField {
            style: style.name(),
            field: "a URL",
        })?;
        if custom_id.is_some() {
            return Err(BuilderError::ForbiddenField {
                style: style.name(),
                field: "a custom id",
            });
        }
        ButtonTarget::Url(url)
    } else {
        let sku_id = sku_id.ok_or(BuilderError::MissingField {
            style: style.name(),
            field: "an SKU id",
        })?;
        if custom_id.is_some() || has_display || url.is_some() {
            return Err(BuilderError::ForbiddenField {
                style: style.name(),
                field: "a custom id, label, URL, or emoji",
            });
        }
        return Ok((style, ButtonTarget::SkuId(sku_id)));
    };

    // Shared by Link and the interactive styles.
    if sku_id.is_some() {
        return Err(BuilderError::ForbiddenField {
            style: "Non-premium",
            field: "an SKU id",
        });
    }
    if !has_display {
        return Err(BuilderError::MissingLabelOrEmoji { style });
    }

    Ok((style, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKU: Snowflake = Snowflake::new(1_234_567_890_123);

    fn check(
        style: Option<ButtonStyle>,
        label: Option<&str>,
        custom_id: Option<&str>,
        sku_id: Option<Snowflake>,
        url: Option<&str>,
    ) -> Result<ButtonStyle> {
        validate_required_button_parameters(style, label, None, custom_id, sku_id, url)
            .map(|(style, _)| style)
    }

    #[test]
    fn style_is_required() {
        let err = check(None, Some("a"), Some("id"), None, None).unwrap_err();
        assert!(matches!(err, BuilderError::MissingStyle));
    }

    #[test]
    fn interactive_styles_need_custom_id_and_display() {
        for style in ButtonStyle::INTERACTIVE {
            let (_, target) = validate_required_button_parameters(
                Some(style),
                Some("Click"),
                None,
                Some("btn"),
                None,
                None,
            )
            .unwrap();
            assert_eq!(target, ButtonTarget::CustomId("btn"));

            assert!(matches!(
                check(Some(style), Some("Click"), None, None, None),
                Err(BuilderError::MissingField { field: "a custom id", .. })
            ));
            assert!(matches!(
                check(Some(style), Some("Click"), Some("btn"), None, Some("https://a.b")),
                Err(BuilderError::ForbiddenField { field: "a URL", .. })
            ));
            assert!(matches!(
                check(Some(style), Some("Click"), Some("btn"), Some(SKU), None),
                Err(BuilderError::ForbiddenField { field: "an SKU id", .. })
            ));
            assert!(matches!(
                check(Some(style), None, Some("btn"), None, None),
                Err(BuilderError::MissingLabelOrEmoji { .. })
            ));
        }
    }

    #[test]
    fn empty_strings_count_as_unset() {
        let primary = Some(ButtonStyle::Primary);
        assert!(matches!(
            check(primary, Some(""), Some("btn"), None, None),
            Err(BuilderError::MissingLabelOrEmoji { .. })
        ));
        assert!(matches!(
            check(primary, Some("Click"), Some(""), None, None),
            Err(BuilderError::MissingField { field: "a custom id", .. })
        ));
        assert!(matches!(
            check(Some(ButtonStyle::Link), Some("Docs"), None, None, Some("")),
            Err(BuilderError::MissingField { field: "a URL", .. })
        ));
        assert!(
            check(Some(ButtonStyle::Link), Some("Docs"), Some(""), None, Some("https://a.b"))
                .is_ok()
        );
    }

    #[test]
    fn emoji_alone_satisfies_display() {
        let emoji = ComponentEmoji::unicode("🙂");
        let result = validate_required_button_parameters(
            Some(ButtonStyle::Secondary),
            None,
            Some(&emoji),
            Some("btn"),
            None,
            None,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn link_rules() {
        let url = Some("https://example.com");
        assert_eq!(
            check(Some(ButtonStyle::Link), Some("Docs"), None, None, url).unwrap(),
            ButtonStyle::Link
        );

        assert!(matches!(
            check(Some(ButtonStyle::Link), Some("Docs"), None, None, None),
            Err(BuilderError::MissingField { field: "a URL", .. })
        ));
        assert!(matches!(
            check(Some(ButtonStyle::Link), Some("Docs"), Some("btn"), None, url),
            Err(BuilderError::ForbiddenField { field: "a custom id", .. })
        ));
        assert!(matches!(
            check(Some(ButtonStyle::Link), Some("Docs"), None, Some(SKU), url),
            Err(BuilderError::ForbiddenField { field: "an SKU id", .. })
        ));
        assert!(matches!(
            check(Some(ButtonStyle::Link), None, None, None, url),
            Err(BuilderError::MissingLabelOrEmoji { style: ButtonStyle::Link })
        ));
    }

    #[test]
    fn premium_rules() {
        let premium = Some(ButtonStyle::Premium);
        let (_, target) =
            validate_required_button_parameters(premium, None, None, None, Some(SKU), None)
                .unwrap();
        assert_eq!(target, ButtonTarget::SkuId(SKU));

        assert!(matches!(
            check(premium, None, None, None, None),
            Err(BuilderError::MissingField { field: "an SKU id", .. })
        ));
        for (label, custom_id, url) in [
            (Some("Buy"), None, None),
            (None, Some("btn"), None),
            (None, None, Some("https://example.com")),
        ] {
            assert!(matches!(
                check(premium, label, custom_id, Some(SKU), url),
                Err(BuilderError::ForbiddenField { style: "Premium", .. })
            ));
        }

        let emoji = ComponentEmoji::unicode("💎");
        let err = validate_required_button_parameters(
            premium,
            None,
            Some(&emoji),
            None,
            Some(SKU),
            None,
        )
        .unwrap_err();
        assert!(err.is_consistency());
    }

    #[test]
    fn messages_identify_the_rule() {
        let err = check(Some(ButtonStyle::Link), Some("Docs"), None, None, None).unwrap_err();
        assert_eq!(err.to_string(), "Link buttons must have a URL");

        let err = check(Some(ButtonStyle::Primary), Some("a"), Some("b"), Some(SKU), None)
            .unwrap_err();
        assert_eq!(err.to_string(), "Non-premium buttons cannot have an SKU id");
    }

    #[test]
    fn field_validators() {
        assert!(button_label_validator("x".repeat(80)).is_ok());
        assert!(button_label_validator("x".repeat(81)).is_err());
        assert!(button_label_validator(String::new()).is_err());

        assert!(custom_id_validator("x".repeat(100)).is_ok());
        assert!(custom_id_validator("x".repeat(101)).is_err());

        assert_eq!(
            url_validator("https://example.com".into()).unwrap(),
            "https://example.com"
        );
        assert!(url_validator("ftp://example.com".into()).is_err());

        assert!(emoji_validator(ComponentEmoji::unicode("🙂")).is_ok());
        assert!(emoji_validator(ComponentEmoji::default()).is_err());

        assert_eq!(button_style_validator(5).unwrap(), ButtonStyle::Link);
        assert!(button_style_validator(7).is_err());

        assert_eq!(sku_id_validator("42").unwrap(), Snowflake::new(42));
        assert!(sku_id_validator("sku-42").is_err());

        assert!(disabled_validator(true));
    }
}
