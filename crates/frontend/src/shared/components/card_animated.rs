//! Thaw [`Card`] with the `card-appear` entrance animation from `app.css`.

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra CSS classes on the card
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.2s ease-out {}ms both;", delay_ms);
    let class = format!("card {}", class);

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}
