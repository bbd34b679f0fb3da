//! PageFrame — standard root wrapper for every page rendered inside the shell.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  — `"{entity}--{category}"`, e.g. `"a001_car--list"`
//!   - `data-page-category`  — one of the PAGE_CAT_* constants
//!
//! and the standard `page__header` / `page__content` structure.
//!
//! Usage:
//! ```ignore
//! use crate::shared::page_frame::PageFrame;
//! use crate::shared::page_standard::PAGE_CAT_LIST;
//!
//! #[component]
//! pub fn CarList() -> impl IntoView {
//!     view! {
//!         <PageFrame page_id="a001_car--list" category=PAGE_CAT_LIST title="Cars">
//!             <p>...</p>
//!         </PageFrame>
//!     }
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets standard metadata on every page.
///
/// Adds the BEM modifier class based on category:
/// - `list`      → `page`
/// - `detail`    → `page page--detail`
/// - `dashboard` → `page page--dashboard`
/// - `system`    → `page`
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a001_car--list"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Heading shown in `page__header`.
    #[prop(into)]
    title: String,
    /// Optional header actions (links, buttons).
    #[prop(optional)]
    actions: Option<AnyView>,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("Page id '{}' does not follow {{entity}}--{{category}}", page_id);
    }
    if !is_known_category(category) {
        log::warn!("Page '{}' uses unknown category '{}'", page_id, category);
    }

    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div
            id=page_id
            class=class
            data-page-category=category
        >
            <div class="page__header">
                <h1>{title}</h1>
                {actions.map(|actions| view! { <div class="page__actions">{actions}</div> })}
            </div>
            <div class="page__content">
                {children()}
            </div>
        </div>
    }
}
