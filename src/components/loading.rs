//! Loading Component
//!
//! Loading spinners.

use leptos::*;

/// Inline loading spinner for buttons
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}
