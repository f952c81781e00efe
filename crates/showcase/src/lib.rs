//! Browser showcase for the `ui_components` crate.
//!
//! Each route mounts one component family from the fixtures in [`demo_data`], so visual and
//! interaction changes can be reviewed without wiring the components into a host app.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod demo_data;
mod web_app;

pub use web_app::{BreadcrumbsDemo, ControlBarDemo, ShowcaseApp, TokenDemo};

/// Mounts the showcase on the document body.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <ShowcaseApp /> })
}
