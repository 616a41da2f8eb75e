use crate::layout::DashboardPage;
use crate::system::pages::{LandingPage, NotFoundPage, SignInPage, SignUpPage};
use contracts::shared::routes::AppRoute;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::StaticSegment;

/// Logs navigation and keeps the document title in sync with the view.
#[component]
fn RouteTracker() -> impl IntoView {
    let location = use_location();

    Effect::new(move |_| {
        let path = location.pathname.get();
        match AppRoute::from_path(&path) {
            Some(route) => {
                log::debug!("navigated to {:?} ({})", route, path);
                document().set_title(route.title());
            }
            None => log::warn!("no view for path '{}'", path),
        }
    });
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <RouteTracker />
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=StaticSegment(AppRoute::Landing.segment()) view=LandingPage />
                <Route path=StaticSegment(AppRoute::SignIn.segment()) view=SignInPage />
                <Route path=StaticSegment(AppRoute::SignUp.segment()) view=SignUpPage />
                <Route path=StaticSegment(AppRoute::Dashboard.segment()) view=DashboardPage />
            </Routes>
        </Router>
    }
}
