//! Token badges: small tinted icons that categorize code symbols.
//!
//! A token's look comes either from the built-in token map keyed by [`IconType`] or from
//! caller overrides, never from a mix of both. See [`resolve_token_display`].

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::primitives::{bool_token, merge_layout_class};
use crate::{Icon, IconSize, IconType};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Outline of a token badge.
pub enum TokenShape {
    /// Round badge.
    Circle,
    /// Square badge.
    #[default]
    Square,
    /// Wide badge for repository-level symbols.
    Rectangle,
}

impl TokenShape {
    /// Stable token used for the `data-ui-shape` hook.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Rectangle => "rectangle",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Background tint palette for token badges.
pub enum TokenTint {
    /// First tint.
    #[default]
    #[serde(rename = "tokenTint01")]
    Tint01,
    /// Second tint.
    #[serde(rename = "tokenTint02")]
    Tint02,
    /// Third tint.
    #[serde(rename = "tokenTint03")]
    Tint03,
    /// Fourth tint.
    #[serde(rename = "tokenTint04")]
    Tint04,
    /// Fifth tint.
    #[serde(rename = "tokenTint05")]
    Tint05,
    /// Sixth tint.
    #[serde(rename = "tokenTint06")]
    Tint06,
    /// Seventh tint.
    #[serde(rename = "tokenTint07")]
    Tint07,
    /// Eighth tint.
    #[serde(rename = "tokenTint08")]
    Tint08,
    /// Ninth tint.
    #[serde(rename = "tokenTint09")]
    Tint09,
    /// Tenth tint.
    #[serde(rename = "tokenTint10")]
    Tint10,
}

impl TokenTint {
    /// Stable token used for the `data-ui-tint` hook.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Tint01 => "tokenTint01",
            Self::Tint02 => "tokenTint02",
            Self::Tint03 => "tokenTint03",
            Self::Tint04 => "tokenTint04",
            Self::Tint05 => "tokenTint05",
            Self::Tint06 => "tokenTint06",
            Self::Tint07 => "tokenTint07",
            Self::Tint08 => "tokenTint08",
            Self::Tint09 => "tokenTint09",
            Self::Tint10 => "tokenTint10",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Token badge size.
pub enum TokenSize {
    /// Small badge.
    #[default]
    #[serde(rename = "s")]
    Small,
    /// Medium badge.
    #[serde(rename = "m")]
    Medium,
    /// Large badge.
    #[serde(rename = "l")]
    Large,
}

impl TokenSize {
    /// Stable token used for the `data-ui-size` hook.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Small => "s",
            Self::Medium => "m",
            Self::Large => "l",
        }
    }

    fn icon_size(self) -> IconSize {
        match self {
            Self::Small => IconSize::Xs,
            Self::Medium => IconSize::Sm,
            Self::Large => IconSize::Md,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Caller overrides for a token's look. Any set field replaces the whole token-map entry.
pub struct TokenDisplayOptions {
    /// Badge outline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<TokenShape>,
    /// Badge tint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<TokenTint>,
    /// Solid background instead of the translucent default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_opaque: Option<bool>,
}

impl TokenDisplayOptions {
    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.shape.is_none() && self.color.is_none() && self.is_opaque.is_none()
    }

    /// Sets the shape override.
    pub fn shape(mut self, shape: TokenShape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Sets the tint override.
    pub fn color(mut self, color: TokenTint) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the opacity override.
    pub fn opaque(mut self, is_opaque: bool) -> Self {
        self.is_opaque = Some(is_opaque);
        self
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Final look of a token badge.
pub struct ResolvedTokenDisplay {
    /// Badge outline.
    pub shape: TokenShape,
    /// Badge tint.
    pub color: TokenTint,
    /// Solid background.
    pub is_opaque: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TokenMapEntry {
    shape: TokenShape,
    color: TokenTint,
    is_opaque: Option<bool>,
}

const fn entry(shape: TokenShape, color: TokenTint) -> TokenMapEntry {
    TokenMapEntry {
        shape,
        color,
        is_opaque: None,
    }
}

const fn opaque_entry(shape: TokenShape, color: TokenTint) -> TokenMapEntry {
    TokenMapEntry {
        shape,
        color,
        is_opaque: Some(true),
    }
}

const fn token_map_entry(icon: IconType) -> Option<TokenMapEntry> {
    use TokenShape::{Circle, Rectangle, Square};
    use TokenTint::*;

    let entry = match icon {
        IconType::TokenClass => entry(Circle, Tint01),
        IconType::TokenProperty => entry(Circle, Tint02),
        IconType::TokenEnum => entry(Circle, Tint03),
        IconType::TokenVariable => entry(Circle, Tint04),
        IconType::TokenMethod => entry(Square, Tint02),
        IconType::TokenAnnotation => entry(Square, Tint06),
        IconType::TokenException => entry(Circle, Tint07),
        IconType::TokenInterface => entry(Circle, Tint08),
        IconType::TokenParameter => entry(Square, Tint09),
        IconType::TokenField => entry(Circle, Tint10),
        IconType::TokenElement => entry(Square, Tint03),
        IconType::TokenFunction => entry(Circle, Tint02),
        IconType::TokenBoolean => entry(Square, Tint05),
        IconType::TokenString => entry(Square, Tint07),
        IconType::TokenArray => entry(Square, Tint04),
        IconType::TokenNumber => entry(Circle, Tint05),
        IconType::TokenConstant => entry(Circle, Tint07),
        IconType::TokenObject => entry(Square, Tint03),
        IconType::TokenEvent => entry(Circle, Tint09),
        IconType::TokenKey => entry(Circle, Tint06),
        IconType::TokenNull => entry(Square, Tint02),
        IconType::TokenStruct => entry(Square, Tint01),
        IconType::TokenPackage => entry(Square, Tint10),
        IconType::TokenOperator => entry(Circle, Tint05),
        IconType::TokenEnumMember => entry(Square, Tint04),
        IconType::TokenRepo => opaque_entry(Rectangle, Tint05),
        IconType::TokenSymbol => opaque_entry(Rectangle, Tint07),
        IconType::TokenFile => opaque_entry(Rectangle, Tint09),
        _ => return None,
    };
    Some(entry)
}

/// Resolves the look of a token badge.
///
/// Empty overrides on a mapped icon return the token-map entry verbatim. Any other case
/// returns the overrides, with unset fields falling back to a translucent
/// [`TokenTint::Tint01`] square. Partial overrides are not merged with the map: setting a
/// single field discards the whole entry.
pub fn resolve_token_display(icon: IconType, overrides: &TokenDisplayOptions) -> ResolvedTokenDisplay {
    resolve_with_entry(token_map_entry(icon), overrides)
}

/// [`resolve_token_display`] for icon names that have not been parsed yet.
///
/// Names outside the [`IconType`] catalog have no token-map entry, so they resolve from
/// `overrides` alone.
pub fn resolve_token_display_str(icon: &str, overrides: &TokenDisplayOptions) -> ResolvedTokenDisplay {
    let entry = icon.parse::<IconType>().ok().and_then(token_map_entry);
    resolve_with_entry(entry, overrides)
}

fn resolve_with_entry(
    entry: Option<TokenMapEntry>,
    overrides: &TokenDisplayOptions,
) -> ResolvedTokenDisplay {
    match entry {
        Some(entry) if overrides.is_empty() => ResolvedTokenDisplay {
            shape: entry.shape,
            color: entry.color,
            is_opaque: entry.is_opaque.unwrap_or(false),
        },
        _ => ResolvedTokenDisplay {
            shape: overrides.shape.unwrap_or_default(),
            color: overrides.color.unwrap_or_default(),
            is_opaque: overrides.is_opaque.unwrap_or(false),
        },
    }
}

#[component]
/// Token badge for a code symbol.
pub fn Token(
    /// Icon shown inside the badge; also the token-map key.
    icon: IconType,
    /// Overrides that replace the token-map look.
    #[prop(optional)]
    display_options: TokenDisplayOptions,
    /// Badge size.
    #[prop(optional)]
    size: TokenSize,
    /// Extra classes.
    #[prop(optional, into)]
    layout_class: Option<String>,
) -> impl IntoView {
    let display = resolve_token_display(icon, &display_options);
    view! {
        <span
            class=merge_layout_class("ui-token", layout_class.as_deref())
            data-ui-primitive="true"
            data-ui-kind="token"
            data-ui-shape=display.shape.token()
            data-ui-tint=display.color.token()
            data-ui-opaque=bool_token(display.is_opaque)
            data-ui-size=size.token()
        >
            <Icon icon=icon size=size.icon_size() />
        </span>
    }
}
