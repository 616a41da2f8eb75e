use crate::layout::{ModalService, UploadModal};
use crate::routes::routes::AppRoutes;
use contracts::shared::config::UiConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: UiConfig) -> impl IntoView {
    provide_context(config);

    // Single upload overlay for the whole app
    provide_context(ModalService::new());

    view! {
        <AppRoutes />
        <UploadModal />
    }
}
