use crate::domain::a003_upload::ui::UploadCard;
use leptos::ev;
use leptos::prelude::*;

/// Shared visibility flag of the upload overlay.
///
/// Provided once by `App`. Descendants may only show or hide the overlay;
/// there is no stacking, so `show` on an open overlay changes nothing.
#[derive(Clone, Copy)]
pub struct ModalService {
    is_visible: RwSignal<bool>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            is_visible: RwSignal::new(false),
        }
    }

    /// Open the upload overlay
    pub fn show(&self) {
        if self.is_visible.get_untracked() {
            log::debug!("upload modal already open");
            return;
        }
        log::debug!("upload modal shown");
        self.is_visible.set(true);
    }

    /// Close the upload overlay, discarding the card's state
    pub fn hide(&self) {
        if self.is_visible.get_untracked() {
            log::debug!("upload modal hidden");
            self.is_visible.set(false);
        }
    }

    /// Reactive read of the flag
    pub fn is_open(&self) -> bool {
        self.is_visible.get()
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal() -> ModalService {
    use_context::<ModalService>().expect("ModalService not provided in context")
}

/// Renders the upload overlay above everything else while the flag is set.
#[component]
pub fn UploadModal() -> impl IntoView {
    let modal = use_modal();

    view! {
        <Show when=move || modal.is_open()>
            <UploadOverlay />
        </Show>
    }
}

#[component]
fn UploadOverlay() -> impl IntoView {
    let modal = use_modal();

    // Only registered while the overlay is mounted
    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            modal.hide();
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <div class="modal-overlay" on:click=move |_| modal.hide()>
            <div class="modal-content" on:click=|e| e.stop_propagation()>
                <UploadCard on_close=Callback::new(move |_| modal.hide()) />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_is_idempotent() {
        let owner = Owner::new();
        owner.with(|| {
            let modal = ModalService::new();
            assert!(!modal.is_open());

            modal.show();
            modal.show();
            assert!(modal.is_open());

            modal.hide();
            assert!(!modal.is_open());
        });
    }

    #[test]
    fn test_hide_when_closed_stays_closed() {
        let owner = Owner::new();
        owner.with(|| {
            let modal = ModalService::new();
            modal.hide();
            assert!(!modal.is_open());
        });
    }
}
