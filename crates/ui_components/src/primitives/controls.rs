use super::*;

fn forward_click(on_click: Option<Callback<MouseEvent>>) -> impl Fn(MouseEvent) {
    move |ev| {
        if let Some(on_click) = on_click {
            on_click.call(ev);
        }
    }
}

#[component]
/// Labeled button. `selected` marks toggle-style buttons as pressed.
pub fn Button(
    #[prop(optional)] color: ButtonColor,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] test_subject: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] attributes: BTreeMap<String, String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let button = view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class.as_deref())
            aria-label=aria_label
            aria-pressed=move || selected.get().then_some("true")
            data-test-subj=test_subject
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-color=color.token()
            data-ui-size=size.token()
            data-ui-state=move || if selected.get() { "selected" } else { "idle" }
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=forward_click(on_click)
        >
            {children()}
        </button>
    };
    apply_attributes(button, &attributes)
}

#[component]
/// Square icon-only button. The accessible name is required.
pub fn IconButton(
    icon: IconType,
    #[prop(into)] aria_label: String,
    #[prop(optional)] color: ButtonColor,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional, into)] test_subject: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] attributes: BTreeMap<String, String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let icon_size = match size {
        ButtonSize::Sm => IconSize::Sm,
        ButtonSize::Md => IconSize::Md,
    };
    let button = view! {
        <button
            type="button"
            class=merge_layout_class("ui-icon-button", layout_class.as_deref())
            aria-label=aria_label
            data-test-subj=test_subject
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="icon-button"
            data-ui-color=color.token()
            data-ui-size=size.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=forward_click(on_click)
        >
            <Icon icon=icon size=icon_size />
        </button>
    };
    apply_attributes(button, &attributes)
}
