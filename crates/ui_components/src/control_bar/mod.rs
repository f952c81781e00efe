//! Overlay control bar: a row of heterogeneous controls with an optional content region.

use std::collections::BTreeMap;

use leptos::ev::MouseEvent;
use leptos::*;

use crate::primitives::{apply_attributes, bool_token, merge_layout_class};
use crate::{Breadcrumbs, Button, ButtonSize, IconButton, OverlayPortal, Text, TextRole};

mod model;

pub use model::{
    attach_click_handler, controls_from_json, dispatch_click, prepare_click, render_controls,
    validate_controls, BreadcrumbsControl, ButtonControl, ClickHandler, Control, ControlBarError,
    ControlBarModel, ControlBarOptions, ControlBarSize, ControlBarState, ControlBarView,
    ControlClick, ControlElement, ControlKind, IconControl, NavDrawerOffset, PendingClick,
    RenderTarget, TabControl, TextControl,
};

#[component]
/// Control bar component.
///
/// The bar is mounted on a detached overlay root unless `options.target` is
/// [`RenderTarget::Inline`]. `children` fill the content region, which renders only while
/// `show_content` is true.
pub fn ControlBar(
    /// Controls in render order.
    controls: Vec<Control>,
    /// Presentation options.
    #[prop(optional)]
    options: ControlBarOptions,
    /// Whether the content region is shown. Defaults to `options.show_content`.
    #[prop(optional, into)]
    show_content: Option<MaybeSignal<bool>>,
    /// Externally owned state. A private signal is created when omitted.
    #[prop(optional)]
    state: Option<RwSignal<ControlBarState>>,
    /// Accessible name of the bar.
    #[prop(optional, into)]
    aria_label: Option<String>,
    /// Extra classes for the bar container, appended to `options.class_name`.
    #[prop(optional, into)]
    layout_class: Option<String>,
    /// Pass-through attributes for the bar container, merged over `options.attributes`.
    #[prop(optional)]
    attributes: BTreeMap<String, String>,
    /// Content region.
    #[prop(optional)]
    children: Option<ChildrenFn>,
) -> impl IntoView {
    let mut options = options;
    if let Some(layout_class) = layout_class {
        options.push_class(&layout_class);
    }
    options.attributes.extend(attributes);

    let model = match ControlBarModel::new(controls, options) {
        Ok(model) => model,
        Err(err) => {
            logging::error!("control bar rejected its controls: {err}");
            return view! {
                <div role="alert" data-ui-primitive="true" data-ui-kind="control-bar-error">
                    {err.to_string()}
                </div>
            }
            .into_view();
        }
    };

    let show_content =
        show_content.unwrap_or(MaybeSignal::Static(model.options().show_content));
    let state = state.unwrap_or_else(|| create_rw_signal(model.state().clone()));
    let target = model.options().target;
    let model = store_value(model);
    let bar_view = create_memo(move |_| {
        let show_content = show_content.get();
        state.with(|state| model.with_value(|model| model.view_with(state, show_content)))
    });

    let on_control_click = Callback::new(move |control_id: String| {
        let prepared = model
            .with_value(|model| state.try_update(|state| model.prepare_click_with(state, &control_id)));
        match prepared {
            // The signal borrow is released here, so handlers may read the new selection.
            Some(Ok(pending)) => pending.fire(),
            Some(Err(err)) => logging::warn!("control bar click ignored: {err}"),
            None => logging::warn!("control bar click on disposed state: {control_id}"),
        }
    });

    let label = aria_label.unwrap_or_else(|| "Control bar".to_string());
    let bar = move || {
        let children = children.clone();
        let (class, attributes, size, nav_offset, mobile) = bar_view.with_untracked(|view| {
            (
                view.container_class(),
                view.options.attributes.clone(),
                view.options.size.token(),
                view.options.nav_drawer_offset.map(|offset| offset.token()),
                bool_token(view.options.show_on_mobile),
            )
        });
        let section = view! {
            <section
                class=class
                aria-label=label.clone()
                data-ui-primitive="true"
                data-ui-kind="control-bar"
                data-ui-state=move || {
                    if bar_view.with(ControlBarView::shows_content) { "open" } else { "closed" }
                }
                data-ui-size=size
                data-ui-nav-offset=nav_offset
                data-ui-mobile=mobile
            >
                <div data-ui-slot="controls">
                    {move || {
                        bar_view
                            .with(|view| view.elements.clone())
                            .into_iter()
                            .map(|element| control_element_view(element, on_control_click))
                            .collect_view()
                    }}
                </div>
                <Show when=move || bar_view.with(ControlBarView::shows_content) fallback=|| ()>
                    <div data-ui-slot="content">
                        {children.as_ref().map(|children| children())}
                    </div>
                </Show>
            </section>
        };
        apply_attributes(section, &attributes)
    };

    match target {
        RenderTarget::Portal => view! { <OverlayPortal>{bar()}</OverlayPortal> }.into_view(),
        RenderTarget::Inline => bar().into_view(),
    }
}

fn control_element_view(element: ControlElement, on_click: Callback<String>) -> View {
    let click = move |control_id: String| {
        Callback::new(move |_: MouseEvent| on_click.call(control_id.clone()))
    };

    match element {
        ControlElement::Button {
            control_id,
            label,
            color,
            class_names,
            attributes,
            ..
        } => view! {
            <Button
                color=color
                size=ButtonSize::Sm
                layout_class=merge_layout_class("ui-control-bar-button", class_names.as_deref())
                attributes=attributes
                on_click=click(control_id)
            >
                {label}
            </Button>
        }
        .into_view(),
        ControlElement::IconButton {
            control_id,
            icon,
            aria_label,
            test_subject,
            color,
            class_names,
            attributes,
            ..
        } => view! {
            <IconButton
                icon=icon
                aria_label=aria_label
                test_subject=test_subject
                color=color
                size=ButtonSize::Sm
                layout_class=merge_layout_class("ui-control-bar-icon", class_names.as_deref())
                attributes=attributes
                on_click=click(control_id)
            />
        }
        .into_view(),
        ControlElement::Tab {
            control_id,
            label,
            aria_label,
            test_subject,
            active,
            attributes,
            ..
        } => {
            let tab = view! {
                <button
                    type="button"
                    class="ui-control-bar-tab"
                    aria-label=aria_label
                    data-test-subj=test_subject
                    data-ui-primitive="true"
                    data-ui-kind="control-bar-tab"
                    data-ui-state=if active { "active" } else { "idle" }
                    data-ui-selected=bool_token(active)
                    on:click=move |_| on_click.call(control_id.clone())
                >
                    <Text role=TextRole::Small truncate=true>{label}</Text>
                </button>
            };
            apply_attributes(tab, &attributes).into_view()
        }
        ControlElement::Breadcrumbs {
            breadcrumbs,
            responsive,
            truncate,
            max,
            attributes,
            ..
        } => view! {
            <Breadcrumbs
                breadcrumbs=breadcrumbs
                responsive=responsive.unwrap_or(true)
                truncate=truncate.unwrap_or(true)
                max=max
                attributes=attributes
            />
        }
        .into_view(),
        ControlElement::Text {
            label,
            class_name,
            attributes,
            ..
        } => {
            let text = view! {
                <div
                    class=merge_layout_class("ui-control-bar-text", class_name.as_deref())
                    data-ui-primitive="true"
                    data-ui-kind="control-bar-text"
                >
                    {label}
                </div>
            };
            apply_attributes(text, &attributes).into_view()
        }
        ControlElement::Spacer { .. } => view! {
            <div class="ui-control-bar-spacer" data-ui-slot="spacer" aria-hidden="true"></div>
        }
        .into_view(),
        ControlElement::Divider { .. } => view! {
            <div class="ui-control-bar-divider" data-ui-slot="divider" aria-hidden="true"></div>
        }
        .into_view(),
    }
}
