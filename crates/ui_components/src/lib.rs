//! Overlay control bar and token badge components.
//!
//! The crate owns a small set of Leptos primitives, a centralized icon catalog, and the
//! stable `data-ui-*` DOM contract consumed by stylesheets and tests. The control bar and
//! token resolution logic live in pure model functions so they can be exercised without a
//! browser; the components are thin views over them.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod control_bar;
mod handler;
mod icon;
mod primitives;
mod token;

pub use control_bar::{
    attach_click_handler, controls_from_json, dispatch_click, prepare_click, render_controls,
    validate_controls, BreadcrumbsControl, ButtonControl, ClickHandler, Control, ControlBar,
    ControlBarError, ControlBarModel, ControlBarOptions, ControlBarSize, ControlBarState,
    ControlBarView, ControlClick, ControlElement, ControlKind, IconControl, NavDrawerOffset,
    PendingClick, RenderTarget, TabControl, TextControl,
};
pub use handler::Handler;
pub use icon::{Icon, IconSize, IconType, UnknownIconType};
pub use primitives::{
    collapse_breadcrumbs, Breadcrumb, BreadcrumbClick, BreadcrumbSlot, Breadcrumbs, Button,
    ButtonColor, ButtonSize, Cluster, Heading, IconButton, LayoutAlign, LayoutGap, OverlayPortal,
    Panel, Stack, Text, TextRole, TextTone,
};
pub use token::{
    resolve_token_display, resolve_token_display_str, ResolvedTokenDisplay, Token,
    TokenDisplayOptions, TokenShape, TokenSize, TokenTint,
};

/// Convenience imports for crates composing control bars and tokens.
pub mod prelude {
    pub use crate::{
        Breadcrumb, Breadcrumbs, Button, ButtonColor, Cluster, Control, ControlBar,
        ControlBarOptions, ControlBarState, ControlClick, Heading, Icon, IconButton, IconSize,
        IconType, Panel, Stack, Text, TextRole, TextTone, Token, TokenDisplayOptions, TokenSize,
    };
}
