//! Top navigation bar.

use leptos::*;
use leptos_router::A;

use crate::config::APP_NAME;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <A href="/" class="navbar-brand">{APP_NAME}</A>
            <div class="navbar-links">
                <A href="/upload" class="navbar-link">"Upload"</A>
            </div>
        </nav>
    }
}
