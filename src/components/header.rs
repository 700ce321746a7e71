//! Header Component
//!
//! Static app bar with logo and title.

use leptos::*;

/// Application header bar
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-blue-700 shadow">
            <div class="container mx-auto px-4">
                <div class="flex items-center h-16 space-x-3">
                    <span class="text-2xl">"💨"</span>
                    <span class="text-xl font-bold text-white">"Air Quality Predictor"</span>
                </div>
            </div>
        </header>
    }
}
