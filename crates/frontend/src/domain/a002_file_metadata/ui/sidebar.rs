//! File sidebar: the fixed sample listing and the upload entry point.

use crate::layout::use_modal;
use crate::shared::components::ui::Button;
use crate::shared::date_utils::{format_date, today};
use crate::shared::icons::icon;
use contracts::domain::a002_file_metadata::aggregate::sample_files;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

#[component]
pub fn FileSidebar() -> impl IntoView {
    let modal = use_modal();
    let files = sample_files(today());

    view! {
        <div class="file-sidebar">
            <h2 class="file-sidebar__title">"Files"</h2>
            <div class="file-sidebar__list">
                <For
                    each=move || files.clone()
                    key=|file| file.id.as_string()
                    let:file
                >
                    <div class="file-row">
                        <div class="file-row__line">
                            <span class="file-row__name">{file.name}</span>
                            <span class="muted">{file.size_label}</span>
                        </div>
                        <div class="file-row__line">
                            <span class="muted">{file.type_label}</span>
                            <span class="muted">{format_date(file.date)}</span>
                        </div>
                    </div>
                </For>
            </div>

            <div class="file-sidebar__actions">
                <Button class="full-width" on_click=Callback::new(move |_| modal.show())>
                    {icon("upload")}
                    "Upload New File"
                </Button>
            </div>
        </div>
    }
}
