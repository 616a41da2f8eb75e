use crate::shared::icons::icon;
use contracts::shared::routes::AppRoute;
use leptos::prelude::*;

const REPO_URL: &str = "#";

/// Marketing hero with the entry point into the dashboard
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <main class="hero">
                <div class="hero__art">{icon("share")}</div>
                <div class="hero__copy">
                    <h1 class="hero__title">"A File Sharing Platform"</h1>
                    <p class="hero__blurb">
                        "Blunk is a completely open source file sharing platform. "
                        "Share files effortlessly, seamlessly, and securely."
                    </p>
                    <div class="hero__actions">
                        <a href=AppRoute::Dashboard.path() class="button button--primary button--lg">
                            "Get Started"
                            {icon("step-forward")}
                        </a>
                        <a href=REPO_URL class="button button--outline button--lg">
                            {icon("github")}
                            "Github Repo"
                        </a>
                    </div>
                    <p class="hero__links">
                        <a href=AppRoute::SignIn.path()>"Sign in"</a>
                        " · "
                        <a href=AppRoute::SignUp.path()>"Create an account"</a>
                    </p>
                </div>
            </main>
        </div>
    }
}
