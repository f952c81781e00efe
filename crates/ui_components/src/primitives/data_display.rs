use super::*;

#[component]
/// Grouping surface with an optional title row.
pub fn Panel(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    let title = title.map(|title| view! { <Heading>{title}</Heading> });
    view! {
        <section
            class=merge_layout_class("ui-panel", layout_class.as_deref())
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="panel"
        >
            {title}
            {children()}
        </section>
    }
}

#[component]
/// Inline text run. `truncate` clips overflow with an ellipsis.
pub fn Text(
    #[prop(optional)] role: TextRole,
    #[prop(optional)] tone: TextTone,
    #[prop(optional)] truncate: bool,
    #[prop(optional, into)] layout_class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class.as_deref())
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
            data-ui-truncate=bool_token(truncate)
        >
            {children()}
        </span>
    }
}

#[component]
/// Section heading.
pub fn Heading(
    #[prop(optional)] tone: TextTone,
    #[prop(optional, into)] layout_class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <h2
            class=merge_layout_class("ui-heading", layout_class.as_deref())
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-variant=TextRole::Title.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </h2>
    }
}
