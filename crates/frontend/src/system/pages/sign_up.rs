//! Account creation form. Fields are collected locally and never submitted.

use crate::shared::components::ui::{Button, TextField};
use crate::shared::components::CardAnimated;
use crate::shared::icons::icon;
use contracts::shared::routes::AppRoute;
use leptos::prelude::*;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log::debug!("sign-up submitted; no account backend is configured");
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__art">{icon("share")}</div>

            <div class="auth-page__form">
                <CardAnimated class="auth-card">
                    <h2 class="auth-card__title">"Create an Account"</h2>
                    <form class="form" on:submit=on_submit>
                        <TextField id="name" label="Full Name" value=full_name placeholder="Enter your full name" />
                        <TextField id="email" label="Email" value=email input_type="email" placeholder="Enter your email" />
                        <TextField id="username" label="Username" value=username placeholder="Enter a username" />
                        <TextField
                            id="password"
                            label="Password"
                            value=password
                            input_type="password"
                            placeholder="Create a password"
                            autocomplete="new-password"
                        />
                        <TextField
                            id="confirmPassword"
                            label="Confirm Password"
                            value=confirm_password
                            input_type="password"
                            placeholder="Confirm your password"
                            autocomplete="new-password"
                        />
                        <Button button_type="submit" class="full-width">"Create Account"</Button>
                    </form>
                    <a href=AppRoute::SignIn.path() class="button button--ghost full-width">
                        "Already have an account?"
                    </a>
                </CardAnimated>
            </div>
        </div>
    }
}
