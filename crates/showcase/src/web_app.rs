use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use ui_components::prelude::*;
use ui_components::{attach_click_handler, BreadcrumbClick, ControlBarError, LayoutGap};

use crate::demo_data::{breadcrumb_trail, control_bar_fixture, token_samples, INTERACTIVE_IDS};

#[component]
/// Root of the showcase: navigation plus one route per component family.
pub fn ShowcaseApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="UI Components Showcase" />
        <Meta name="description" content="Control bar, token, and breadcrumb demos." />

        <Router>
            <nav class="showcase-nav" aria-label="Showcase sections">
                <A href="/">"Overview"</A>
                <A href="/control-bar">"Control bar"</A>
                <A href="/token">"Tokens"</A>
                <A href="/breadcrumbs">"Breadcrumbs"</A>
            </nav>
            <main class="showcase-root">
                <Routes>
                    <Route path="" view=ShowcaseIndex />
                    <Route path="/control-bar" view=ControlBarDemo />
                    <Route path="/token" view=TokenDemo />
                    <Route path="/breadcrumbs" view=BreadcrumbsDemo />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn ShowcaseIndex() -> impl IntoView {
    view! {
        <Panel title="UI Components">
            <Text tone=TextTone::Secondary>
                "Each route renders one component family from shared fixtures."
            </Text>
        </Panel>
    }
}

#[component]
/// Control bar mounted from the JSON fixture, with a content toggle and click log.
pub fn ControlBarDemo() -> impl IntoView {
    let show_content = create_rw_signal(false);
    let state = create_rw_signal(ControlBarState::default());
    let last_click = create_rw_signal::<Option<String>>(None);

    let controls = control_bar_fixture().and_then(|mut controls| {
        for id in INTERACTIVE_IDS {
            attach_click_handler(&mut controls, id, move |click: ControlClick| {
                logging::log!(
                    "control bar click: {} (selected tab {:?})",
                    click.control_id,
                    click.selected_tab
                );
                last_click.set(Some(click.control_id));
            })?;
        }
        Ok::<_, ControlBarError>(controls)
    });

    let controls = match controls {
        Ok(controls) => controls,
        Err(err) => {
            logging::warn!("control bar fixture rejected: {err}");
            return view! {
                <Panel>
                    <Text tone=TextTone::Danger>{err.to_string()}</Text>
                </Panel>
            }
            .into_view();
        }
    };

    view! {
        <Panel title="Control bar">
            <Stack gap=LayoutGap::Md>
                <Cluster>
                    <Button
                        color=ButtonColor::Secondary
                        selected=Signal::derive(move || show_content.get())
                        on_click=Callback::new(move |_| show_content.update(|open| *open = !*open))
                    >
                        {move || if show_content.get() { "Hide content" } else { "Show content" }}
                    </Button>
                    <Text tone=TextTone::Secondary>
                        {move || match last_click.get() {
                            Some(id) => format!("Last click: {id}"),
                            None => "No clicks yet".to_string(),
                        }}
                    </Text>
                </Cluster>
            </Stack>
        </Panel>

        <ControlBar
            controls=controls
            show_content=Signal::derive(move || show_content.get())
            state=state
            aria_label="Node controls"
            layout_class="showcase-control-bar"
        >
            <Panel>
                <Text>
                    {move || {
                        let selected = state.with(|state| state.selected_tab.clone());
                        if selected.is_empty() {
                            "Pick a tab to load its panel.".to_string()
                        } else {
                            format!("Showing the {selected} panel.")
                        }
                    }}
                </Text>
            </Panel>
        </ControlBar>
    }
    .into_view()
}

#[component]
/// Every token icon with its mapped look, followed by override samples.
pub fn TokenDemo() -> impl IntoView {
    let samples = token_samples()
        .into_iter()
        .map(|(icon, display_options)| {
            let caption = if display_options.is_empty() {
                icon.token().to_string()
            } else {
                format!("{} (overridden)", icon.token())
            };
            view! {
                <Cluster>
                    <Token icon=icon display_options=display_options size=TokenSize::Medium />
                    <Text role=TextRole::Code>{caption}</Text>
                </Cluster>
            }
        })
        .collect_view();

    view! {
        <Panel title="Tokens">
            <Stack gap=LayoutGap::Sm>
                {samples}
            </Stack>
        </Panel>
    }
}

#[component]
/// Full and collapsed breadcrumb trails.
pub fn BreadcrumbsDemo() -> impl IntoView {
    let clickable = breadcrumb_trail()
        .into_iter()
        .map(|breadcrumb| {
            breadcrumb.on_click(|click: BreadcrumbClick| {
                logging::log!("breadcrumb {} clicked: {}", click.index, click.text);
            })
        })
        .collect::<Vec<_>>();

    view! {
        <Panel title="Breadcrumbs">
            <Stack gap=LayoutGap::Md>
                <Breadcrumbs breadcrumbs=breadcrumb_trail() />
                <Breadcrumbs breadcrumbs=clickable max=Some(3) />
            </Stack>
        </Panel>
    }
}
