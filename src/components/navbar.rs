//! Navigation Bar Component

use leptos::prelude::*;

/// Top navigation bar with the app glyph and a source link
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <span class="navbar-glyph">"☑"</span>
            <a
                href="https://github.com/rubenmate/todo-list"
                target="_blank"
                class="navbar-link"
            >
                "Source Code"
            </a>
        </nav>
    }
}
