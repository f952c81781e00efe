//! Fixture data rendered by the showcase routes.

use ui_components::{
    controls_from_json, Breadcrumb, Control, ControlBarError, IconType, TokenDisplayOptions,
    TokenShape, TokenTint,
};

/// Control bar fixture in the JSON wire format.
pub const CONTROL_BAR_JSON: &str = r##"[
    {
        "controlType": "breadcrumbs",
        "id": "trail",
        "breadcrumbs": [
            { "text": "Cluster", "href": "#/" },
            { "text": "Nodes", "href": "#/control-bar" },
            { "text": "node-04" }
        ]
    },
    { "controlType": "spacer" },
    { "controlType": "text", "id": "status", "label": "Last sync 2 minutes ago" },
    { "controlType": "divider" },
    { "controlType": "tab", "id": "logs", "label": "Logs" },
    { "controlType": "tab", "id": "metrics", "label": "Metrics" },
    { "controlType": "divider" },
    { "controlType": "button", "id": "refresh", "label": "Refresh", "color": "primary" },
    { "controlType": "icon", "id": "settings", "iconType": "gear", "label": "Settings" }
]"##;

/// Ids of the interactive controls in [`CONTROL_BAR_JSON`].
pub const INTERACTIVE_IDS: [&str; 4] = ["logs", "metrics", "refresh", "settings"];

/// Parses [`CONTROL_BAR_JSON`].
pub fn control_bar_fixture() -> Result<Vec<Control>, ControlBarError> {
    controls_from_json(CONTROL_BAR_JSON)
}

/// Token samples: every mapped symbol kind plus a few override combinations.
pub fn token_samples() -> Vec<(IconType, TokenDisplayOptions)> {
    let mut samples: Vec<(IconType, TokenDisplayOptions)> = IconType::ALL
        .iter()
        .copied()
        .filter(|icon| icon.token().starts_with("token"))
        .map(|icon| (icon, TokenDisplayOptions::default()))
        .collect();
    samples.extend([
        (
            IconType::TokenClass,
            TokenDisplayOptions::default().shape(TokenShape::Square),
        ),
        (
            IconType::TokenRepo,
            TokenDisplayOptions::default().color(TokenTint::Tint02),
        ),
        (
            IconType::TokenModule,
            TokenDisplayOptions::default()
                .shape(TokenShape::Circle)
                .color(TokenTint::Tint08)
                .opaque(true),
        ),
    ]);
    samples
}

/// Breadcrumb trail long enough to collapse.
pub fn breadcrumb_trail() -> Vec<Breadcrumb> {
    ["Home", "Projects", "ui", "crates", "ui_components", "src"]
        .into_iter()
        .map(Breadcrumb::new)
        .collect()
}
