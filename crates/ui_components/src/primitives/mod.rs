//! Shared control, typography, navigation, overlay, and layout primitives.

use std::collections::BTreeMap;

use leptos::ev::MouseEvent;
use leptos::html::ElementDescriptor;
use leptos::*;
use serde::{Deserialize, Serialize};

use crate::{Icon, IconSize, IconType};

mod controls;
mod data_display;
mod layout;
mod navigation;
mod overlays;

pub use controls::{Button, IconButton};
pub use data_display::{Heading, Panel, Text};
pub use layout::{Cluster, Stack};
pub use navigation::{
    collapse_breadcrumbs, Breadcrumb, BreadcrumbClick, BreadcrumbSlot, Breadcrumbs,
};
pub use overlays::OverlayPortal;

/// Declares presentation token enums with a default variant and a `data-ui-*` value.
macro_rules! ui_tokens {
    ($(
        $(#[$meta:meta])*
        pub enum $name:ident (default $default:ident) {
            $($(#[$variant_doc:meta])* $variant:ident => $token:literal,)+
        }
    )+) => {$(
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $(#[$meta])*
        pub enum $name {
            $(
                $(#[$variant_doc])*
                #[doc = concat!("Token `", $token, "`.")]
                $variant,
            )+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $name {
            /// Stable token written to the matching `data-ui-*` attribute.
            pub const fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }
    )+};
}

ui_tokens! {
    /// Color of buttons and icon buttons. Also the `color` field of button and icon controls.
    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum ButtonColor (default Ghost) {
        /// Emphasized action.
        Primary => "primary",
        Secondary => "secondary",
        Warning => "warning",
        /// Destructive action.
        Danger => "danger",
        /// Light-on-dark action for dark overlays such as the control bar.
        Ghost => "ghost",
        Text => "text",
    }

    /// Button density.
    pub enum ButtonSize (default Md) {
        Sm => "sm",
        Md => "md",
    }

    /// Typographic role of a text run.
    pub enum TextRole (default Body) {
        Body => "body",
        Small => "small",
        Title => "title",
        /// Monospace.
        Code => "code",
    }

    /// Text color intent.
    pub enum TextTone (default Primary) {
        Primary => "primary",
        Secondary => "secondary",
        Danger => "danger",
    }

    /// Spacing between children of layout primitives.
    pub enum LayoutGap (default Md) {
        None => "none",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
    }

    /// Cross-axis alignment of layout primitives.
    pub enum LayoutAlign (default Stretch) {
        Stretch => "stretch",
        Start => "start",
        Center => "center",
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Copies caller pass-through attributes onto a rendered element.
pub(crate) fn apply_attributes<El: ElementDescriptor + 'static>(
    element: HtmlElement<El>,
    attributes: &BTreeMap<String, String>,
) -> HtmlElement<El> {
    attributes
        .iter()
        .fold(element, |element, (name, value)| {
            element.attr(name.clone(), value.clone())
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn merge_layout_class_skips_empty_extras() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(
            merge_layout_class("ui-button", Some("ui-control-bar-button")),
            "ui-button ui-control-bar-button"
        );
    }

    #[test]
    fn button_color_defaults_to_ghost_and_uses_lowercase_json() {
        assert_eq!(ButtonColor::default(), ButtonColor::Ghost);
        let parsed: ButtonColor = serde_json::from_str("\"danger\"").expect("color");
        assert_eq!(parsed, ButtonColor::Danger);
        assert_eq!(parsed.token(), "danger");
    }
}
