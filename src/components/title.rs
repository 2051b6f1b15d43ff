//! Title Component

use leptos::prelude::*;

/// Page heading
#[component]
pub fn Title(children: Children) -> impl IntoView {
    view! { <h1 class="title">{children()}</h1> }
}
