use super::*;

use crate::Handler;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Payload passed to a breadcrumb click handler.
pub struct BreadcrumbClick {
    /// Position of the breadcrumb in the full trail.
    pub index: usize,
    /// Breadcrumb text.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One entry of a breadcrumb trail.
pub struct Breadcrumb {
    /// Visible text.
    pub text: String,
    /// Optional link target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Optional click handler. Not serializable.
    #[serde(skip)]
    pub on_click: Option<Handler<BreadcrumbClick>>,
    /// Per-entry truncation override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncate: Option<bool>,
}

impl Breadcrumb {
    /// Creates a plain text breadcrumb.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: None,
            on_click: None,
            truncate: None,
        }
    }

    /// Sets the link target.
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Sets the click handler.
    pub fn on_click(mut self, handler: impl Into<Handler<BreadcrumbClick>>) -> Self {
        self.on_click = Some(handler.into());
        self
    }

    /// Overrides truncation for this entry.
    pub fn truncate(mut self, truncate: bool) -> Self {
        self.truncate = Some(truncate);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A visible position in a collapsed breadcrumb trail.
pub enum BreadcrumbSlot {
    /// The breadcrumb at this index of the full trail.
    Item(usize),
    /// Placeholder for the hidden middle of the trail.
    Overflow,
}

/// Computes which breadcrumbs stay visible under an optional `max`.
///
/// Visible entries are taken alternately from the start and the end of the trail, so the
/// root is always kept and the current page is kept once `max` is at least 2. Hidden
/// entries collapse into a single [`BreadcrumbSlot::Overflow`] between the two groups.
/// `max` of `None` or `0` keeps every entry.
pub fn collapse_breadcrumbs(len: usize, max: Option<usize>) -> Vec<BreadcrumbSlot> {
    let limit = match max {
        Some(max) if max > 0 && max < len => max,
        _ => return (0..len).map(BreadcrumbSlot::Item).collect(),
    };

    let mut front = 0;
    let mut back = len;
    for step in 0..limit {
        if step % 2 == 0 {
            front += 1;
        } else {
            back -= 1;
        }
    }

    let mut slots: Vec<BreadcrumbSlot> = (0..front).map(BreadcrumbSlot::Item).collect();
    slots.push(BreadcrumbSlot::Overflow);
    slots.extend((back..len).map(BreadcrumbSlot::Item));
    slots
}

#[component]
/// Breadcrumb trail. The last entry is marked as the current page.
pub fn Breadcrumbs(
    breadcrumbs: Vec<Breadcrumb>,
    #[prop(default = true)] responsive: bool,
    #[prop(default = true)] truncate: bool,
    #[prop(default = None)] max: Option<usize>,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional)] attributes: BTreeMap<String, String>,
) -> impl IntoView {
    let last = breadcrumbs.len().saturating_sub(1);
    let slots = collapse_breadcrumbs(breadcrumbs.len(), max);
    let slot_count = slots.len();

    let items = slots
        .into_iter()
        .enumerate()
        .map(|(position, slot)| {
            let separator = (position + 1 < slot_count).then(|| {
                view! { <span data-ui-slot="separator" aria-hidden="true">"/"</span> }
            });
            let entry = match slot {
                BreadcrumbSlot::Overflow => view! {
                    <span data-ui-slot="overflow" aria-label="See collapsed breadcrumbs">"…"</span>
                }
                .into_view(),
                BreadcrumbSlot::Item(index) => {
                    breadcrumb_entry(index, &breadcrumbs[index], index == last, truncate)
                }
            };
            view! { <>{entry}{separator}</> }
        })
        .collect_view();

    let trail = view! {
        <nav
            class=merge_layout_class("ui-breadcrumbs", layout_class.as_deref())
            aria-label="Breadcrumbs"
            data-ui-primitive="true"
            data-ui-kind="breadcrumbs"
            data-ui-responsive=bool_token(responsive)
            data-ui-truncate=bool_token(truncate)
        >
            {items}
        </nav>
    };
    apply_attributes(trail, &attributes)
}

fn breadcrumb_entry(
    index: usize,
    breadcrumb: &Breadcrumb,
    is_last: bool,
    trail_truncate: bool,
) -> View {
    let truncate = breadcrumb.truncate.unwrap_or(trail_truncate);
    let text = breadcrumb.text.clone();
    let on_click = breadcrumb.on_click.clone();
    let click_text = text.clone();

    view! {
        <a
            href=breadcrumb.href.clone()
            title=truncate.then(|| text.clone())
            aria-current=is_last.then_some("page")
            data-ui-slot="breadcrumb"
            data-ui-state=if is_last { "current" } else { "idle" }
            data-ui-truncate=bool_token(truncate)
            on:click=move |_| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(BreadcrumbClick {
                        index,
                        text: click_text.clone(),
                    });
                }
            }
        >
            {text}
        </a>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::BreadcrumbSlot::{Item, Overflow};
    use super::*;

    #[test]
    fn keeps_every_entry_without_a_usable_max() {
        assert_eq!(collapse_breadcrumbs(3, None), vec![Item(0), Item(1), Item(2)]);
        assert_eq!(collapse_breadcrumbs(3, Some(0)), vec![Item(0), Item(1), Item(2)]);
        assert_eq!(collapse_breadcrumbs(3, Some(3)), vec![Item(0), Item(1), Item(2)]);
        assert_eq!(collapse_breadcrumbs(0, Some(2)), Vec::new());
    }

    #[test]
    fn alternates_between_start_and_end_when_collapsing() {
        assert_eq!(
            collapse_breadcrumbs(5, Some(3)),
            vec![Item(0), Item(1), Overflow, Item(4)]
        );
        assert_eq!(
            collapse_breadcrumbs(6, Some(4)),
            vec![Item(0), Item(1), Overflow, Item(4), Item(5)]
        );
        assert_eq!(collapse_breadcrumbs(4, Some(1)), vec![Item(0), Overflow]);
    }

    #[test]
    fn breadcrumbs_deserialize_without_handlers() {
        let parsed: Breadcrumb =
            serde_json::from_str(r##"{"text":"Home","href":"#/"}"##).expect("breadcrumb");
        assert_eq!(parsed, Breadcrumb::new("Home").href("#/"));
        assert!(parsed.on_click.is_none());
    }
}
