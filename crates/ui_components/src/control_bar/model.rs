//! Control descriptors, tab selection state, and the pure control-to-element dispatch.
//!
//! Nothing in this module touches the DOM. The Leptos component in the parent module renders
//! the [`ControlElement`] list produced by [`render_controls`] and routes clicks through
//! [`prepare_click`], so the full behavior of the bar can be exercised on native targets.

use std::collections::{BTreeMap, HashSet};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::primitives::merge_layout_class;
use crate::{Breadcrumb, ButtonColor, Handler, IconType, UnknownIconType};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Payload passed to control click handlers.
///
/// `selected_tab` reflects the state after the click was applied.
pub struct ControlClick {
    /// Id of the clicked control.
    pub control_id: String,
    /// Selected tab id at the time the handler runs.
    pub selected_tab: String,
}

/// Click handler attached to interactive controls.
pub type ClickHandler = Handler<ControlClick>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Discriminant of a [`Control`].
pub enum ControlKind {
    /// Labeled action button.
    Button,
    /// Selectable tab.
    Tab,
    /// Breadcrumb trail.
    Breadcrumbs,
    /// Static text block.
    Text,
    /// Icon-only action.
    Icon,
    /// Flexible layout spacer.
    Spacer,
    /// Visual divider.
    Divider,
}

impl ControlKind {
    const ALL: [ControlKind; 7] = [
        Self::Button,
        Self::Tab,
        Self::Breadcrumbs,
        Self::Text,
        Self::Icon,
        Self::Spacer,
        Self::Divider,
    ];

    /// Wire name used by the `controlType` tag.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Tab => "tab",
            Self::Breadcrumbs => "breadcrumbs",
            Self::Text => "text",
            Self::Icon => "icon",
            Self::Spacer => "spacer",
            Self::Divider => "divider",
        }
    }

    /// Whether controls of this kind accept clicks.
    pub const fn is_interactive(self) -> bool {
        matches!(self, Self::Button | Self::Tab | Self::Icon)
    }
}

impl FromStr for ControlKind {
    type Err = ControlBarError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.token() == raw)
            .ok_or_else(|| ControlBarError::UnknownControlType(raw.to_string()))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Contract violations raised while building or driving a control bar.
pub enum ControlBarError {
    /// A control description carried a `controlType` outside the known set.
    #[error("unknown control type `{0}`")]
    UnknownControlType(String),
    /// A control description had no string `controlType` tag.
    #[error("control description is missing a `controlType` tag")]
    MissingControlType,
    /// A control description had the right tag but invalid fields.
    #[error("invalid `{control_type}` control: {message}")]
    InvalidControl {
        /// Tag of the rejected control.
        control_type: &'static str,
        /// Deserializer message.
        message: String,
    },
    /// The control list was not a JSON array of objects.
    #[error("malformed control list: {0}")]
    Malformed(String),
    /// Two interactive controls share an id.
    #[error("duplicate control id `{0}`")]
    DuplicateControlId(String),
    /// A click referenced an id that no control carries.
    #[error("no control with id `{0}`")]
    ControlNotFound(String),
    /// A click or handler targeted a non-interactive control.
    #[error("`{control_type}` control `{id}` is not interactive")]
    NotInteractive {
        /// Id of the targeted control.
        id: String,
        /// Tag of the targeted control.
        control_type: &'static str,
    },
    /// An icon control referenced an icon outside the catalog.
    #[error(transparent)]
    UnknownIconType(#[from] UnknownIconType),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Labeled action button.
pub struct ButtonControl {
    /// Control id, unique among interactive controls.
    pub id: String,
    /// Button label.
    pub label: String,
    /// Button color. Renders as [`ButtonColor::Ghost`] when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ButtonColor>,
    /// Extra classes appended to the rendered button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_names: Option<String>,
    /// Click handler.
    #[serde(skip)]
    pub on_click: Option<ClickHandler>,
    /// Pass-through DOM attributes.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl ButtonControl {
    /// Creates a ghost button.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color: None,
            class_names: None,
            on_click: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Sets the button color.
    pub fn color(mut self, color: ButtonColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the click handler.
    pub fn on_click(mut self, handler: impl Into<ClickHandler>) -> Self {
        self.on_click = Some(handler.into());
        self
    }

    /// Adds a pass-through attribute.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Selectable tab. Selecting it updates [`ControlBarState::selected_tab`].
pub struct TabControl {
    /// Control id, also the selection key.
    pub id: String,
    /// Tab label.
    pub label: String,
    /// Click handler, invoked after the selection is committed.
    #[serde(skip)]
    pub on_click: Option<ClickHandler>,
    /// Pass-through DOM attributes.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl TabControl {
    /// Creates a tab.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            on_click: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Sets the click handler.
    pub fn on_click(mut self, handler: impl Into<ClickHandler>) -> Self {
        self.on_click = Some(handler.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Breadcrumb trail rendered by the shared breadcrumbs primitive.
pub struct BreadcrumbsControl {
    /// Control id.
    pub id: String,
    /// Trail entries, root first.
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Responsive flag forwarded to the trail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive: Option<bool>,
    /// Truncation flag forwarded to the trail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncate: Option<bool>,
    /// Maximum visible entries forwarded to the trail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
    /// Pass-through DOM attributes.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl BreadcrumbsControl {
    /// Creates a trail control with the trail's own defaults.
    pub fn new(id: impl Into<String>, breadcrumbs: Vec<Breadcrumb>) -> Self {
        Self {
            id: id.into(),
            breadcrumbs,
            responsive: None,
            truncate: None,
            max: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Limits the number of visible entries.
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Non-interactive text block.
pub struct TextControl {
    /// Control id.
    pub id: String,
    /// Text content.
    pub label: String,
    /// Extra classes appended to the rendered block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Pass-through DOM attributes.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl TextControl {
    /// Creates a text block.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            class_name: None,
            attributes: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Icon-only action button.
pub struct IconControl {
    /// Control id, unique among interactive controls.
    pub id: String,
    /// Icon to render.
    pub icon_type: IconType,
    /// Accessible name, also used as the test subject.
    pub label: String,
    /// Button color. Renders as [`ButtonColor::Ghost`] when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ButtonColor>,
    /// Extra classes appended to the rendered button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_names: Option<String>,
    /// Optional click handler.
    #[serde(skip)]
    pub on_click: Option<ClickHandler>,
    /// Pass-through DOM attributes.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl IconControl {
    /// Creates a ghost icon button.
    pub fn new(id: impl Into<String>, icon_type: IconType, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            icon_type,
            label: label.into(),
            color: None,
            class_names: None,
            on_click: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Sets the button color.
    pub fn color(mut self, color: ButtonColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the click handler.
    pub fn on_click(mut self, handler: impl Into<ClickHandler>) -> Self {
        self.on_click = Some(handler.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "controlType", rename_all = "lowercase")]
/// One renderable unit of the control bar.
pub enum Control {
    /// Labeled action button.
    Button(ButtonControl),
    /// Selectable tab.
    Tab(TabControl),
    /// Breadcrumb trail.
    Breadcrumbs(BreadcrumbsControl),
    /// Static text block.
    Text(TextControl),
    /// Icon-only action.
    Icon(IconControl),
    /// Flexible layout spacer.
    Spacer,
    /// Visual divider.
    Divider,
}

impl Control {
    /// Parses one JSON control description.
    ///
    /// # Errors
    ///
    /// Fails with [`ControlBarError::UnknownControlType`] for an unknown tag,
    /// [`ControlBarError::UnknownIconType`] for an icon outside the catalog, and
    /// [`ControlBarError::InvalidControl`] when the fields do not match the tag.
    pub fn from_value(value: Value) -> Result<Self, ControlBarError> {
        let kind: ControlKind = value
            .get("controlType")
            .and_then(Value::as_str)
            .ok_or(ControlBarError::MissingControlType)?
            .parse()?;

        if kind == ControlKind::Icon {
            if let Some(raw) = value.get("iconType").and_then(Value::as_str) {
                raw.parse::<IconType>()?;
            }
        }

        serde_json::from_value(value).map_err(|err| ControlBarError::InvalidControl {
            control_type: kind.token(),
            message: err.to_string(),
        })
    }

    /// Discriminant of this control.
    pub fn kind(&self) -> ControlKind {
        match self {
            Self::Button(_) => ControlKind::Button,
            Self::Tab(_) => ControlKind::Tab,
            Self::Breadcrumbs(_) => ControlKind::Breadcrumbs,
            Self::Text(_) => ControlKind::Text,
            Self::Icon(_) => ControlKind::Icon,
            Self::Spacer => ControlKind::Spacer,
            Self::Divider => ControlKind::Divider,
        }
    }

    /// Control id. Layout controls carry none.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Button(control) => Some(&control.id),
            Self::Tab(control) => Some(&control.id),
            Self::Breadcrumbs(control) => Some(&control.id),
            Self::Text(control) => Some(&control.id),
            Self::Icon(control) => Some(&control.id),
            Self::Spacer | Self::Divider => None,
        }
    }

    /// Replaces the click handler of an interactive control.
    ///
    /// # Errors
    ///
    /// Returns [`ControlBarError::NotInteractive`] for text, breadcrumb, and layout controls.
    pub fn set_click_handler(&mut self, handler: ClickHandler) -> Result<(), ControlBarError> {
        let slot = match self {
            Self::Button(control) => &mut control.on_click,
            Self::Tab(control) => &mut control.on_click,
            Self::Icon(control) => &mut control.on_click,
            other => {
                return Err(ControlBarError::NotInteractive {
                    id: other.id().unwrap_or_default().to_string(),
                    control_type: other.kind().token(),
                })
            }
        };
        *slot = Some(handler);
        Ok(())
    }
}

impl From<ButtonControl> for Control {
    fn from(control: ButtonControl) -> Self {
        Self::Button(control)
    }
}

impl From<TabControl> for Control {
    fn from(control: TabControl) -> Self {
        Self::Tab(control)
    }
}

impl From<BreadcrumbsControl> for Control {
    fn from(control: BreadcrumbsControl) -> Self {
        Self::Breadcrumbs(control)
    }
}

impl From<TextControl> for Control {
    fn from(control: TextControl) -> Self {
        Self::Text(control)
    }
}

impl From<IconControl> for Control {
    fn from(control: IconControl) -> Self {
        Self::Icon(control)
    }
}

/// Parses a JSON array of control descriptions, failing on the first invalid entry.
///
/// # Errors
///
/// Returns [`ControlBarError::Malformed`] when the input is not a JSON array, otherwise the
/// first error reported by [`Control::from_value`].
pub fn controls_from_json(json: &str) -> Result<Vec<Control>, ControlBarError> {
    let value: Value =
        serde_json::from_str(json).map_err(|err| ControlBarError::Malformed(err.to_string()))?;
    let Value::Array(entries) = value else {
        return Err(ControlBarError::Malformed(
            "expected an array of controls".to_string(),
        ));
    };
    entries.into_iter().map(Control::from_value).collect()
}

/// Attaches a click handler to the control with `id`.
///
/// # Errors
///
/// Returns [`ControlBarError::ControlNotFound`] for an unknown id and
/// [`ControlBarError::NotInteractive`] for controls that cannot be clicked.
pub fn attach_click_handler(
    controls: &mut [Control],
    id: &str,
    handler: impl Into<ClickHandler>,
) -> Result<(), ControlBarError> {
    controls
        .iter_mut()
        .find(|control| control.id() == Some(id))
        .ok_or_else(|| ControlBarError::ControlNotFound(id.to_string()))?
        .set_click_handler(handler.into())
}

/// Checks that interactive control ids are unique.
///
/// # Errors
///
/// Returns [`ControlBarError::DuplicateControlId`] naming the first repeated id.
pub fn validate_controls(controls: &[Control]) -> Result<(), ControlBarError> {
    let mut seen = HashSet::new();
    for control in controls.iter().filter(|control| control.kind().is_interactive()) {
        if let Some(id) = control.id() {
            if !seen.insert(id) {
                return Err(ControlBarError::DuplicateControlId(id.to_string()));
            }
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Interactive state owned by one control bar.
pub struct ControlBarState {
    /// Id of the selected tab. Empty when no tab was selected yet.
    pub selected_tab: String,
}

impl ControlBarState {
    /// Marks `id` as the selected tab.
    pub fn select_tab(&mut self, id: &str) {
        if self.selected_tab != id {
            self.selected_tab = id.to_string();
        }
    }

    /// Whether `id` is the selected tab.
    pub fn is_selected(&self, id: &str) -> bool {
        !self.selected_tab.is_empty() && self.selected_tab == id
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Presentation-level description of one rendered control.
pub enum ControlElement {
    /// Labeled button.
    Button {
        /// Render key.
        key: String,
        /// Id routed back on click.
        control_id: String,
        /// Button label.
        label: String,
        /// Resolved color.
        color: ButtonColor,
        /// Extra classes.
        class_names: Option<String>,
        /// Pass-through attributes.
        attributes: BTreeMap<String, String>,
    },
    /// Icon-only button.
    IconButton {
        /// Render key.
        key: String,
        /// Id routed back on click.
        control_id: String,
        /// Icon to render.
        icon: IconType,
        /// Accessible name.
        aria_label: String,
        /// Test subject hook.
        test_subject: String,
        /// Resolved color.
        color: ButtonColor,
        /// Extra classes.
        class_names: Option<String>,
        /// Pass-through attributes.
        attributes: BTreeMap<String, String>,
    },
    /// Tab trigger.
    Tab {
        /// Render key.
        key: String,
        /// Id routed back on click.
        control_id: String,
        /// Tab label.
        label: String,
        /// Accessible name.
        aria_label: String,
        /// Test subject hook.
        test_subject: String,
        /// Whether this tab is the selected one.
        active: bool,
        /// Pass-through attributes.
        attributes: BTreeMap<String, String>,
    },
    /// Breadcrumb trail delegated to the breadcrumbs primitive.
    Breadcrumbs {
        /// Render key.
        key: String,
        /// Trail entries, unchanged.
        breadcrumbs: Vec<Breadcrumb>,
        /// Responsive flag, unchanged.
        responsive: Option<bool>,
        /// Truncation flag, unchanged.
        truncate: Option<bool>,
        /// Visible entry limit, unchanged.
        max: Option<usize>,
        /// Pass-through attributes.
        attributes: BTreeMap<String, String>,
    },
    /// Non-interactive text block.
    Text {
        /// Render key.
        key: String,
        /// Text content.
        label: String,
        /// Extra classes.
        class_name: Option<String>,
        /// Pass-through attributes.
        attributes: BTreeMap<String, String>,
    },
    /// Flexible spacer.
    Spacer {
        /// Render key.
        key: String,
    },
    /// Visual divider.
    Divider {
        /// Render key.
        key: String,
    },
}

impl ControlElement {
    /// Render key of the element.
    pub fn key(&self) -> &str {
        match self {
            Self::Button { key, .. }
            | Self::IconButton { key, .. }
            | Self::Tab { key, .. }
            | Self::Breadcrumbs { key, .. }
            | Self::Text { key, .. }
            | Self::Spacer { key }
            | Self::Divider { key } => key,
        }
    }
}

/// Maps each control to exactly one element, preserving input order.
pub fn render_controls(controls: &[Control], state: &ControlBarState) -> Vec<ControlElement> {
    controls
        .iter()
        .enumerate()
        .map(|(index, control)| render_control(index, control, state))
        .collect()
}

fn render_control(index: usize, control: &Control, state: &ControlBarState) -> ControlElement {
    match control {
        Control::Button(button) => ControlElement::Button {
            key: format!("{}-{index}", button.id),
            control_id: button.id.clone(),
            label: button.label.clone(),
            color: button.color.unwrap_or_default(),
            class_names: button.class_names.clone(),
            attributes: button.attributes.clone(),
        },
        Control::Icon(icon) => ControlElement::IconButton {
            key: format!("{}-{index}", icon.id),
            control_id: icon.id.clone(),
            icon: icon.icon_type,
            aria_label: icon.label.clone(),
            test_subject: icon.label.clone(),
            color: icon.color.unwrap_or_default(),
            class_names: icon.class_names.clone(),
            attributes: icon.attributes.clone(),
        },
        Control::Tab(tab) => ControlElement::Tab {
            key: format!("{}-{index}", tab.id),
            control_id: tab.id.clone(),
            label: tab.label.clone(),
            aria_label: format!("Control Bar - {}", tab.label),
            test_subject: tab.label.clone(),
            active: state.is_selected(&tab.id),
            attributes: tab.attributes.clone(),
        },
        Control::Breadcrumbs(trail) => ControlElement::Breadcrumbs {
            key: trail.id.clone(),
            breadcrumbs: trail.breadcrumbs.clone(),
            responsive: trail.responsive,
            truncate: trail.truncate,
            max: trail.max,
            attributes: trail.attributes.clone(),
        },
        Control::Text(text) => ControlElement::Text {
            key: text.id.clone(),
            label: text.label.clone(),
            class_name: text.class_name.clone(),
            attributes: text.attributes.clone(),
        },
        Control::Spacer => ControlElement::Spacer {
            key: format!("{}-{index}", ControlKind::Spacer.token()),
        },
        Control::Divider => ControlElement::Divider {
            key: format!("{}-{index}", ControlKind::Divider.token()),
        },
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A click whose state transition is already applied and whose handler has yet to run.
pub struct PendingClick {
    handler: Option<ClickHandler>,
    click: ControlClick,
}

impl PendingClick {
    /// Payload the handler will receive.
    pub fn click(&self) -> &ControlClick {
        &self.click
    }

    /// Runs the control's handler, if it has one.
    pub fn fire(self) {
        if let Some(handler) = self.handler {
            handler.call(self.click);
        }
    }
}

/// Applies the state transition for a click on `control_id` and returns the pending handler.
///
/// Tab clicks select the tab before the payload is captured, so the handler observes the
/// committed selection. Callers holding state behind a borrow should release it before
/// calling [`PendingClick::fire`].
///
/// # Errors
///
/// Returns [`ControlBarError::ControlNotFound`] for an unknown id and
/// [`ControlBarError::NotInteractive`] for text and breadcrumb controls.
pub fn prepare_click(
    controls: &[Control],
    state: &mut ControlBarState,
    control_id: &str,
) -> Result<PendingClick, ControlBarError> {
    let control = controls
        .iter()
        .find(|control| control.id() == Some(control_id))
        .ok_or_else(|| ControlBarError::ControlNotFound(control_id.to_string()))?;

    let handler = match control {
        Control::Tab(tab) => {
            state.select_tab(&tab.id);
            tab.on_click.clone()
        }
        Control::Button(button) => button.on_click.clone(),
        Control::Icon(icon) => icon.on_click.clone(),
        other => {
            return Err(ControlBarError::NotInteractive {
                id: control_id.to_string(),
                control_type: other.kind().token(),
            })
        }
    };

    Ok(PendingClick {
        handler,
        click: ControlClick {
            control_id: control_id.to_string(),
            selected_tab: state.selected_tab.clone(),
        },
    })
}

/// Applies a click and runs the control's handler.
///
/// # Errors
///
/// See [`prepare_click`].
pub fn dispatch_click(
    controls: &[Control],
    state: &mut ControlBarState,
    control_id: &str,
) -> Result<(), ControlBarError> {
    prepare_click(controls, state, control_id).map(PendingClick::fire)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Maximum overlay height of the content region.
pub enum ControlBarSize {
    /// A quarter of the viewport.
    #[serde(rename = "s")]
    Small,
    /// Half of the viewport.
    #[serde(rename = "m")]
    Medium,
    /// Viewport minus the page header.
    #[default]
    #[serde(rename = "l")]
    Large,
}

impl ControlBarSize {
    /// Stable token used for the `data-ui-size` hook.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Small => "s",
            Self::Medium => "m",
            Self::Large => "l",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Left offset that keeps the bar clear of a side navigation drawer.
pub enum NavDrawerOffset {
    /// Drawer collapsed to its icon rail.
    Collapsed,
    /// Drawer fully expanded.
    Expanded,
}

impl NavDrawerOffset {
    /// Stable token used for the `data-ui-nav-offset` hook.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Collapsed => "collapsed",
            Self::Expanded => "expanded",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Where the bar is mounted.
pub enum RenderTarget {
    /// Detached overlay root.
    #[default]
    Portal,
    /// In place, inside the calling layout.
    Inline,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Presentation options for a control bar.
pub struct ControlBarOptions {
    /// Show the content region below the controls row.
    pub show_content: bool,
    /// Content region height class.
    pub size: ControlBarSize,
    /// Side drawer offset, if the page has one.
    pub nav_drawer_offset: Option<NavDrawerOffset>,
    /// Keep the bar visible on narrow viewports.
    pub show_on_mobile: bool,
    /// Mount target.
    pub target: RenderTarget,
    /// Extra classes appended to the bar container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Pass-through DOM attributes for the bar container.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl ControlBarOptions {
    /// Appends `class` to [`ControlBarOptions::class_name`].
    pub fn push_class(&mut self, class: &str) {
        let class = class.trim();
        if class.is_empty() {
            return;
        }
        self.class_name = Some(match self.class_name.take() {
            Some(existing) if !existing.trim().is_empty() => format!("{} {class}", existing.trim()),
            _ => class.to_string(),
        });
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Fully resolved description of a control bar ready for mounting.
pub struct ControlBarView {
    /// Mount target.
    pub target: RenderTarget,
    /// Options the view was resolved with.
    pub options: ControlBarOptions,
    /// Rendered controls, in input order.
    pub elements: Vec<ControlElement>,
}

impl ControlBarView {
    /// Whether the content region is rendered.
    pub fn shows_content(&self) -> bool {
        self.options.show_content
    }

    /// Class list of the bar container.
    pub fn container_class(&self) -> String {
        merge_layout_class("ui-control-bar", self.options.class_name.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Validated control set together with the state it owns.
pub struct ControlBarModel {
    controls: Vec<Control>,
    state: ControlBarState,
    options: ControlBarOptions,
}

impl ControlBarModel {
    /// Validates `controls` and creates a model with no tab selected.
    ///
    /// # Errors
    ///
    /// Returns [`ControlBarError::DuplicateControlId`] when interactive ids repeat.
    pub fn new(controls: Vec<Control>, options: ControlBarOptions) -> Result<Self, ControlBarError> {
        validate_controls(&controls)?;
        Ok(Self {
            controls,
            state: ControlBarState::default(),
            options,
        })
    }

    /// Parses and validates a JSON control list.
    ///
    /// # Errors
    ///
    /// See [`controls_from_json`] and [`ControlBarModel::new`].
    pub fn from_json(json: &str, options: ControlBarOptions) -> Result<Self, ControlBarError> {
        Self::new(controls_from_json(json)?, options)
    }

    /// Controls in render order.
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Current interactive state.
    pub fn state(&self) -> &ControlBarState {
        &self.state
    }

    /// Current presentation options.
    pub fn options(&self) -> &ControlBarOptions {
        &self.options
    }

    /// Shows or hides the content region.
    pub fn set_show_content(&mut self, show_content: bool) {
        self.options.show_content = show_content;
    }

    /// Renders the current controls and state.
    pub fn view(&self) -> ControlBarView {
        self.view_with(&self.state, self.options.show_content)
    }

    /// Renders the controls against externally held state.
    ///
    /// `show_content` replaces [`ControlBarOptions::show_content`] in the returned view.
    pub fn view_with(&self, state: &ControlBarState, show_content: bool) -> ControlBarView {
        let mut options = self.options.clone();
        options.show_content = show_content;
        ControlBarView {
            target: options.target,
            options,
            elements: render_controls(&self.controls, state),
        }
    }

    /// Applies a click and runs the control's handler.
    ///
    /// # Errors
    ///
    /// See [`prepare_click`].
    pub fn click(&mut self, control_id: &str) -> Result<(), ControlBarError> {
        let pending = prepare_click(&self.controls, &mut self.state, control_id)?;
        pending.fire();
        Ok(())
    }

    /// [`prepare_click`] against externally held state.
    ///
    /// # Errors
    ///
    /// See [`prepare_click`].
    pub fn prepare_click_with(
        &self,
        state: &mut ControlBarState,
        control_id: &str,
    ) -> Result<PendingClick, ControlBarError> {
        prepare_click(&self.controls, state, control_id)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    fn mixed_controls() -> Vec<Control> {
        vec![
            ButtonControl::new("save", "Save").into(),
            Control::Divider,
            TabControl::new("logs", "Logs").into(),
            TextControl::new("status", "Idle").into(),
            Control::Spacer,
            IconControl::new("close", IconType::Cross, "Close").into(),
            BreadcrumbsControl::new(
                "trail",
                vec![Breadcrumb::new("Home").href("#/"), Breadcrumb::new("Logs")],
            )
            .max(4)
            .into(),
        ]
    }

    #[test]
    fn render_emits_one_element_per_control_in_order() {
        let controls = mixed_controls();
        let elements = render_controls(&controls, &ControlBarState::default());

        let keys: Vec<&str> = elements.iter().map(ControlElement::key).collect();
        assert_eq!(
            keys,
            vec!["save-0", "divider-1", "logs-2", "status", "spacer-4", "close-5", "trail"]
        );
    }

    #[test]
    fn buttons_and_icons_default_to_ghost() {
        let controls = vec![
            ButtonControl::new("a", "A").into(),
            ButtonControl::new("b", "B").color(ButtonColor::Danger).into(),
            IconControl::new("c", IconType::Gear, "Settings").into(),
        ];
        let elements = render_controls(&controls, &ControlBarState::default());

        let colors: Vec<ButtonColor> = elements
            .iter()
            .filter_map(|element| match element {
                ControlElement::Button { color, .. } | ControlElement::IconButton { color, .. } => {
                    Some(*color)
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            colors,
            vec![ButtonColor::Ghost, ButtonColor::Danger, ButtonColor::Ghost]
        );
    }

    #[test]
    fn icon_label_is_both_accessible_name_and_test_subject() {
        let controls = vec![IconControl::new("close", IconType::Cross, "Close panel").into()];
        let elements = render_controls(&controls, &ControlBarState::default());

        match &elements[0] {
            ControlElement::IconButton {
                aria_label,
                test_subject,
                icon,
                ..
            } => {
                assert_eq!(aria_label, "Close panel");
                assert_eq!(test_subject, "Close panel");
                assert_eq!(*icon, IconType::Cross);
            }
            other => panic!("unexpected element {other:?}"),
        }
    }

    #[test]
    fn breadcrumbs_are_forwarded_unchanged() {
        let trail = vec![Breadcrumb::new("Home").href("#/"), Breadcrumb::new("Logs")];
        let mut control = BreadcrumbsControl::new("trail", trail.clone()).max(4);
        control.responsive = Some(false);
        let elements = render_controls(&[control.into()], &ControlBarState::default());

        assert_eq!(
            elements,
            vec![ControlElement::Breadcrumbs {
                key: "trail".to_string(),
                breadcrumbs: trail,
                responsive: Some(false),
                truncate: None,
                max: Some(4),
                attributes: BTreeMap::new(),
            }]
        );
    }

    #[test]
    fn tab_click_commits_selection_before_handler_runs() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let controls = vec![TabControl::new("a", "Alpha")
            .on_click(move |click: ControlClick| sink.borrow_mut().push(click))
            .into()];
        let mut state = ControlBarState::default();

        dispatch_click(&controls, &mut state, "a").expect("click tab");

        assert_eq!(state.selected_tab, "a");
        assert_eq!(
            *seen.borrow(),
            vec![ControlClick {
                control_id: "a".to_string(),
                selected_tab: "a".to_string(),
            }]
        );
    }

    #[test]
    fn prepare_click_defers_the_handler() {
        let fired = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&fired);
        let controls = vec![ButtonControl::new("go", "Go")
            .on_click(move |_: ControlClick| *counter.borrow_mut() += 1)
            .into()];
        let mut state = ControlBarState::default();

        let pending = prepare_click(&controls, &mut state, "go").expect("prepare");
        assert_eq!(*fired.borrow(), 0);
        assert_eq!(pending.click().control_id, "go");

        pending.fire();
        assert_eq!(*fired.borrow(), 1);
        // Button clicks leave the tab selection alone.
        assert_eq!(state, ControlBarState::default());
    }

    #[test]
    fn clicks_on_missing_or_passive_controls_are_rejected() {
        let controls = mixed_controls();
        let mut state = ControlBarState::default();

        assert_eq!(
            dispatch_click(&controls, &mut state, "nope"),
            Err(ControlBarError::ControlNotFound("nope".to_string()))
        );
        assert_eq!(
            dispatch_click(&controls, &mut state, "status"),
            Err(ControlBarError::NotInteractive {
                id: "status".to_string(),
                control_type: "text",
            })
        );
        // An icon without a handler is a silent no-op.
        assert_eq!(dispatch_click(&controls, &mut state, "close"), Ok(()));
    }

    #[test]
    fn bogus_control_type_is_a_contract_violation() {
        let err = controls_from_json(r#"[{"controlType":"bogus","id":"x"}]"#).unwrap_err();
        assert_eq!(err, ControlBarError::UnknownControlType("bogus".to_string()));

        let err = Control::from_value(serde_json::json!({ "id": "x" })).unwrap_err();
        assert_eq!(err, ControlBarError::MissingControlType);
    }

    #[test]
    fn icon_outside_catalog_is_rejected_at_parse_time() {
        let err = controls_from_json(
            r#"[{"controlType":"icon","id":"i","iconType":"sparkles","label":"Shiny"}]"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ControlBarError::UnknownIconType(UnknownIconType("sparkles".to_string()))
        );
    }

    #[test]
    fn json_controls_parse_with_camel_case_fields() {
        let controls = controls_from_json(
            r#"[
                {"controlType":"button","id":"b","label":"Run","color":"primary","classNames":"wide"},
                {"controlType":"tab","id":"t","label":"Tab"},
                {"controlType":"breadcrumbs","id":"bc","breadcrumbs":[{"text":"Root"}],"max":2},
                {"controlType":"text","id":"x","label":"Hello","attributes":{"data-role":"hint"}},
                {"controlType":"icon","id":"i","iconType":"gear","label":"Settings"},
                {"controlType":"spacer"},
                {"controlType":"divider"}
            ]"#,
        )
        .expect("parse controls");

        let kinds: Vec<ControlKind> = controls.iter().map(Control::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ControlKind::Button,
                ControlKind::Tab,
                ControlKind::Breadcrumbs,
                ControlKind::Text,
                ControlKind::Icon,
                ControlKind::Spacer,
                ControlKind::Divider,
            ]
        );
        match &controls[0] {
            Control::Button(button) => {
                assert_eq!(button.color, Some(ButtonColor::Primary));
                assert_eq!(button.class_names.as_deref(), Some("wide"));
            }
            other => panic!("unexpected control {other:?}"),
        }
        match &controls[3] {
            Control::Text(text) => {
                assert_eq!(text.attributes.get("data-role").map(String::as_str), Some("hint"));
            }
            other => panic!("unexpected control {other:?}"),
        }
    }

    #[test]
    fn invalid_fields_name_the_control_type() {
        let err = controls_from_json(r#"[{"controlType":"tab","id":"t"}]"#).unwrap_err();
        assert!(matches!(
            err,
            ControlBarError::InvalidControl { control_type: "tab", .. }
        ));
        assert!(matches!(
            controls_from_json(r#"{"controlType":"tab"}"#),
            Err(ControlBarError::Malformed(_))
        ));
    }

    #[test]
    fn attaching_handlers_respects_interactivity() {
        let mut controls = mixed_controls();
        assert_eq!(
            attach_click_handler(&mut controls, "logs", |_: ControlClick| {}),
            Ok(())
        );
        assert_eq!(
            attach_click_handler(&mut controls, "trail", |_: ControlClick| {}),
            Err(ControlBarError::NotInteractive {
                id: "trail".to_string(),
                control_type: "breadcrumbs",
            })
        );
        assert_eq!(
            attach_click_handler(&mut controls, "missing", |_: ControlClick| {}),
            Err(ControlBarError::ControlNotFound("missing".to_string()))
        );
    }

    #[test]
    fn duplicate_interactive_ids_are_rejected() {
        let controls = vec![
            TabControl::new("a", "A").into(),
            ButtonControl::new("a", "Also A").into(),
        ];
        assert_eq!(
            ControlBarModel::new(controls, ControlBarOptions::default()).unwrap_err(),
            ControlBarError::DuplicateControlId("a".to_string())
        );

        // Text blocks are not interactive and may reuse an id.
        let controls = vec![
            TabControl::new("a", "A").into(),
            TextControl::new("a", "Caption").into(),
        ];
        assert!(ControlBarModel::new(controls, ControlBarOptions::default()).is_ok());
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: ControlBarOptions =
            serde_json::from_str(r#"{"size":"m","navDrawerOffset":"expanded"}"#).expect("options");
        assert_eq!(
            options,
            ControlBarOptions {
                show_content: false,
                size: ControlBarSize::Medium,
                nav_drawer_offset: Some(NavDrawerOffset::Expanded),
                show_on_mobile: false,
                target: RenderTarget::Portal,
                class_name: None,
                attributes: BTreeMap::new(),
            }
        );
    }

    #[test]
    fn model_view_targets_the_portal_and_tracks_content_flag() {
        let mut model =
            ControlBarModel::new(mixed_controls(), ControlBarOptions::default()).expect("model");
        assert_eq!(model.view().target, RenderTarget::Portal);
        assert!(!model.view().shows_content());

        model.set_show_content(true);
        assert!(model.view().shows_content());
        assert_eq!(model.view().elements.len(), model.controls().len());
    }

    #[test]
    fn content_flag_from_options_drives_the_initial_view() {
        let options = ControlBarOptions {
            show_content: true,
            ..ControlBarOptions::default()
        };
        let model = ControlBarModel::new(mixed_controls(), options).expect("model");
        assert!(model.view().shows_content());
    }

    #[test]
    fn view_with_uses_the_given_state_and_content_flag() {
        let model =
            ControlBarModel::new(mixed_controls(), ControlBarOptions::default()).expect("model");
        let state = ControlBarState {
            selected_tab: "logs".to_string(),
        };

        let view = model.view_with(&state, true);

        assert!(view.shows_content());
        assert!(!model.options().show_content);
        assert!(matches!(
            &view.elements[2],
            ControlElement::Tab { active: true, .. }
        ));
        assert!(matches!(
            &model.view().elements[2],
            ControlElement::Tab { active: false, .. }
        ));
    }

    #[test]
    fn inline_target_carries_into_the_view() {
        let options = ControlBarOptions {
            target: RenderTarget::Inline,
            ..ControlBarOptions::default()
        };
        let model = ControlBarModel::new(mixed_controls(), options).expect("model");
        assert_eq!(model.view().target, RenderTarget::Inline);
    }

    #[test]
    fn container_class_and_attributes_pass_through() {
        let mut options: ControlBarOptions =
            serde_json::from_str(r#"{"className":"wide","attributes":{"data-x":"1"}}"#)
                .expect("options");
        options.push_class("sticky");
        options.push_class("  ");
        let model = ControlBarModel::new(mixed_controls(), options).expect("model");
        let view = model.view();

        assert_eq!(view.container_class(), "ui-control-bar wide sticky");
        assert_eq!(
            view.options.attributes,
            BTreeMap::from([("data-x".to_string(), "1".to_string())])
        );

        let mut plain = ControlBarOptions::default();
        plain.push_class("dense");
        assert_eq!(plain.class_name.as_deref(), Some("dense"));
        let model = ControlBarModel::new(Vec::new(), ControlBarOptions::default()).expect("model");
        assert_eq!(model.view().container_class(), "ui-control-bar");
    }

    #[test]
    fn prepare_click_with_updates_external_state_only() {
        let model =
            ControlBarModel::new(mixed_controls(), ControlBarOptions::default()).expect("model");
        let mut state = ControlBarState::default();

        let pending = model.prepare_click_with(&mut state, "logs").expect("tab");
        pending.fire();

        assert_eq!(state.selected_tab, "logs");
        assert_eq!(model.state().selected_tab, "");
    }

    #[test]
    #[should_panic(expected = "tab handler failed")]
    fn panicking_tab_handler_runs_after_selection_commits() {
        let controls = vec![TabControl::new("a", "Alpha")
            .on_click(|click: ControlClick| {
                assert_eq!(click.selected_tab, "a");
                panic!("tab handler failed");
            })
            .into()];
        let mut state = ControlBarState::default();

        let pending = prepare_click(&controls, &mut state, "a").expect("prepare");
        assert_eq!(state.selected_tab, "a");
        pending.fire();
    }

    #[test]
    fn panicking_tab_handler_leaves_selection_committed() {
        let controls = vec![TabControl::new("a", "Alpha")
            .on_click(|_: ControlClick| panic!("tab handler failed"))
            .into()];
        let mut state = ControlBarState::default();

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            dispatch_click(&controls, &mut state, "a")
        }));

        assert!(outcome.is_err());
        assert_eq!(state.selected_tab, "a");
    }
}
