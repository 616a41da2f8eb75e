use contracts::shared::routes::AppRoute;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <a href=AppRoute::Landing.path()>"Back to the start page"</a>
        </div>
    }
}
