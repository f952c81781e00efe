use super::*;

#[component]
/// Mounts its children on a detached root so they overlay the page instead of nesting
/// inside the calling layout.
pub fn OverlayPortal(
    #[prop(optional, into)] layout_class: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let class = merge_layout_class("ui-overlay-portal", layout_class.as_deref());
    view! {
        <Portal>
            <div class=class.clone() data-ui-primitive="true" data-ui-kind="overlay-portal">
                {children()}
            </div>
        </Portal>
    }
}
