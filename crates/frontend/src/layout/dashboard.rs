//! Dashboard shell: file sidebar on the left, chat on the right.
//!
//! ```text
//! +-----------+------------------------------+
//! |  Sidebar  |          ChatPanel           |
//! |  (280px)  |                              |
//! +-----------+------------------------------+
//! ```
//!
//! On narrow screens the sidebar slides in over the chat and a dimming
//! backdrop closes it again.

use crate::domain::a001_chat::ui::ChatPanel;
use crate::domain::a002_file_metadata::ui::FileSidebar;
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let sidebar_open = RwSignal::new(false);

    let toggle_sidebar = Callback::new(move |_: ()| sidebar_open.update(|open| *open = !*open));

    view! {
        <div class="dashboard">
            <aside class="dashboard__sidebar" class:open=move || sidebar_open.get()>
                <FileSidebar />
            </aside>

            <Show when=move || sidebar_open.get()>
                <div class="dashboard__backdrop" on:click=move |_| sidebar_open.set(false)></div>
            </Show>

            <div class="dashboard__main">
                <ChatPanel on_toggle_sidebar=toggle_sidebar />
            </div>
        </div>
    }
}
