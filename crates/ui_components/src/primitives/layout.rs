use super::*;

fn flow(
    base: &'static str,
    kind: &'static str,
    gap: LayoutGap,
    align: LayoutAlign,
    layout_class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class(base, layout_class.as_deref())
            data-ui-primitive="true"
            data-ui-kind=kind
            data-ui-gap=gap.token()
            data-ui-align=align.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Vertical flow with uniform spacing.
pub fn Stack(
    #[prop(optional)] gap: LayoutGap,
    #[prop(optional)] align: LayoutAlign,
    #[prop(optional, into)] layout_class: Option<String>,
    children: Children,
) -> impl IntoView {
    flow("ui-stack", "stack", gap, align, layout_class, children)
}

#[component]
/// Horizontal wrapping row, centered on the cross axis by default.
pub fn Cluster(
    #[prop(default = LayoutGap::Sm)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Center)] align: LayoutAlign,
    #[prop(optional, into)] layout_class: Option<String>,
    children: Children,
) -> impl IntoView {
    flow("ui-cluster", "cluster", gap, align, layout_class, children)
}
