//! Centralized icon catalog for shared primitives.
//!
//! [`IconType`] is the closed set of icon identifiers accepted by icon controls and tokens.
//! Glyph artwork is resolved by the stylesheet through the `data-ui-icon` hook, so the
//! component here only emits the tokenized placeholder element.

use std::fmt;
use std::str::FromStr;

use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! icon_catalog {
    ($($(#[$doc:meta])* $variant:ident => $token:literal,)+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        /// Semantic icon identifiers accepted by the component library.
        pub enum IconType {
            $(
                $(#[$doc])*
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl IconType {
            /// Every icon in the catalog, in declaration order.
            pub const ALL: &'static [IconType] = &[$(Self::$variant),+];

            /// Stable identifier used for serialization, CSS hooks and debugging.
            pub const fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }
    };
}

icon_catalog! {
    /// Left-pointing arrow.
    ArrowLeft => "arrowLeft",
    /// Right-pointing arrow.
    ArrowRight => "arrowRight",
    /// Dismiss cross.
    Cross => "cross",
    /// Generic document.
    Document => "document",
    /// Folder.
    Folder => "folder",
    /// Settings gear.
    Gear => "gear",
    /// Home.
    Home => "home",
    /// Pause transport control.
    Pause => "pause",
    /// Play transport control.
    Play => "play",
    /// Refresh.
    Refresh => "refresh",
    /// Search magnifier.
    Search => "search",
    /// Annotation token.
    TokenAnnotation => "tokenAnnotation",
    /// Array token.
    TokenArray => "tokenArray",
    /// Boolean token.
    TokenBoolean => "tokenBoolean",
    /// Class token.
    TokenClass => "tokenClass",
    /// Constant token.
    TokenConstant => "tokenConstant",
    /// Element token.
    TokenElement => "tokenElement",
    /// Enum token.
    TokenEnum => "tokenEnum",
    /// Enum member token.
    TokenEnumMember => "tokenEnumMember",
    /// Event token.
    TokenEvent => "tokenEvent",
    /// Exception token.
    TokenException => "tokenException",
    /// Field token.
    TokenField => "tokenField",
    /// File token.
    TokenFile => "tokenFile",
    /// Function token.
    TokenFunction => "tokenFunction",
    /// Interface token.
    TokenInterface => "tokenInterface",
    /// Key token.
    TokenKey => "tokenKey",
    /// Method token.
    TokenMethod => "tokenMethod",
    /// Module token. Has no token-map entry.
    TokenModule => "tokenModule",
    /// Namespace token. Has no token-map entry.
    TokenNamespace => "tokenNamespace",
    /// Null token.
    TokenNull => "tokenNull",
    /// Number token.
    TokenNumber => "tokenNumber",
    /// Object token.
    TokenObject => "tokenObject",
    /// Operator token.
    TokenOperator => "tokenOperator",
    /// Package token.
    TokenPackage => "tokenPackage",
    /// Parameter token.
    TokenParameter => "tokenParameter",
    /// Property token.
    TokenProperty => "tokenProperty",
    /// Repository token.
    TokenRepo => "tokenRepo",
    /// String token.
    TokenString => "tokenString",
    /// Struct token.
    TokenStruct => "tokenStruct",
    /// Symbol token.
    TokenSymbol => "tokenSymbol",
    /// Variable token.
    TokenVariable => "tokenVariable",
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown icon type `{0}`")]
/// Returned when an icon identifier is outside the [`IconType`] catalog.
pub struct UnknownIconType(pub String);

impl FromStr for IconType {
    type Err = UnknownIconType;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|icon| icon.token() == raw)
            .ok_or_else(|| UnknownIconType(raw.to_string()))
    }
}

impl fmt::Display for IconType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 12px icon for dense tokens.
    Xs,
    /// 16px standard icon.
    #[default]
    Sm,
    /// 20px medium icon.
    Md,
    /// 24px large icon.
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an icon placeholder from the centralized catalog.
pub fn Icon(
    /// Icon identifier.
    icon: IconType,
    /// Rendered icon size.
    #[prop(optional)]
    size: IconSize,
) -> impl IntoView {
    let px = size.px().to_string();
    view! {
        <span
            class="ui-icon"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
            style=format!("width:{px}px;height:{px}px")
        ></span>
    }
}
