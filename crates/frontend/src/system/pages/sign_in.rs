//! Sign-in form. Not connected to any authentication: submitting does nothing.

use crate::shared::components::ui::{Button, TextField};
use crate::shared::components::CardAnimated;
use crate::shared::icons::icon;
use contracts::shared::routes::AppRoute;
use leptos::prelude::*;

#[component]
pub fn SignInPage() -> impl IntoView {
    let login = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log::debug!("sign-in submitted; no authentication is configured");
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__art">{icon("share")}</div>

            <div class="auth-page__form">
                <CardAnimated class="auth-card">
                    <h2 class="auth-card__title">"Sign In"</h2>
                    <form class="form" on:submit=on_submit>
                        <TextField
                            id="email"
                            label="Email or Username"
                            value=login
                            placeholder="Enter your email or username"
                            autocomplete="username"
                        />
                        <TextField
                            id="password"
                            label="Password"
                            value=password
                            input_type="password"
                            placeholder="Enter your password"
                            autocomplete="current-password"
                        />
                        <Button button_type="submit" class="full-width">"Sign In"</Button>
                    </form>
                    <a href=AppRoute::SignUp.path() class="button button--ghost full-width">
                        "Create an account"
                    </a>
                </CardAnimated>
            </div>
        </div>
    }
}
