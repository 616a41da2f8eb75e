//! Upload card shown inside the modal overlay.
//!
//! Accepts one image or PDF from the picker or a drop onto the dashed zone.
//! Nothing is transferred; staging a file only updates the card.

use super::file_input::{candidates_from_drop, candidates_from_input};
use crate::shared::components::ui::Button;
use crate::shared::components::CardAnimated;
use crate::shared::icons::icon;
use contracts::domain::a003_upload::aggregate::{FileCandidate, ACCEPT_ATTR};
use contracts::domain::a003_upload::form::{StageOutcome, UploadForm};
use leptos::prelude::*;
use web_sys::DragEvent;

const FILE_INPUT_ID: &str = "file-upload";

#[component]
pub fn UploadCard(
    /// Close request (header X button)
    on_close: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(UploadForm::new());

    let stage = move |candidates: Vec<FileCandidate>| {
        let outcome = form.try_update(|f| f.stage(candidates));
        match outcome {
            Some(StageOutcome::Accepted) => form.with_untracked(|f| {
                if let Some(file) = f.selected() {
                    log::info!("file staged: {} ({})", file.name(), file.media_type());
                }
            }),
            Some(StageOutcome::Rejected) => form.with_untracked(|f| {
                if let Some(err) = f.error() {
                    log::warn!("file rejected: {:?}", err);
                }
            }),
            Some(StageOutcome::Ignored) | None => {}
        }
    };

    // Both handlers must cancel the default, otherwise the browser navigates to the file
    let handle_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };

    let handle_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        stage(candidates_from_drop(&ev));
    };

    let handle_remove = Callback::new(move |_| {
        log::debug!("staged file removed");
        form.update(|f| f.remove());
    });

    view! {
        <CardAnimated class="upload-card">
            <div class="upload-card__header">
                <h3 class="upload-card__title">"Upload File"</h3>
                <Button
                    variant="ghost"
                    size="icon"
                    class="round"
                    sr_label="Close"
                    on_click=Callback::new(move |_| on_close.run(()))
                >
                    {icon("x")}
                </Button>
            </div>

            <div class="drop-zone" on:dragover=handle_drag_over on:drop=handle_drop>
                <input
                    id=FILE_INPUT_ID
                    type="file"
                    class="sr-only"
                    accept=ACCEPT_ATTR
                    on:change=move |ev| stage(candidates_from_input(&ev))
                />
                <label for=FILE_INPUT_ID class="drop-zone__label">
                    <span class="muted">{icon("upload-large")}</span>
                    <p class="drop-zone__hint">"Drag and drop your file here, or click to select"</p>
                    <span class="button button--outline button--sm">"Select File"</span>
                </label>
            </div>

            {move || {
                form.with(|f| f.error_message())
                    .map(|message| view! { <p class="upload-card__error">{message}</p> })
            }}

            {move || {
                form.with(|f| f.selected().map(|file| (file.name().to_string(), file.size_label())))
                    .map(|(name, size)| {
                        view! {
                            <div class="staged-file">
                                <div class="staged-file__info">
                                    {icon("file")}
                                    <span class="staged-file__name">{name}</span>
                                    <span class="muted">{size}</span>
                                </div>
                                <Button variant="ghost" size="sm" sr_label="Remove file" on_click=handle_remove>
                                    {icon("x")}
                                </Button>
                            </div>
                        }
                    })
            }}
        </CardAnimated>
    }
}
