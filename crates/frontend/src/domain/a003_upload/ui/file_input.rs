//! Converts browser file handles into [`FileCandidate`]s.

use contracts::domain::a003_upload::aggregate::FileCandidate;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, FileList, HtmlInputElement};

pub fn candidates_from_list(files: Option<FileList>) -> Vec<FileCandidate> {
    let Some(files) = files else {
        return Vec::new();
    };
    (0..files.length())
        .filter_map(|index| files.get(index))
        .map(|file| FileCandidate::new(file.name(), file.type_(), file.size() as u64))
        .collect()
}

/// Files of a `<input type="file">` change event. Resets the input so picking
/// the same file again fires another change.
pub fn candidates_from_input(ev: &Event) -> Vec<FileCandidate> {
    let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
    else {
        return Vec::new();
    };
    let candidates = candidates_from_list(input.files());
    input.set_value("");
    candidates
}

pub fn candidates_from_drop(ev: &DragEvent) -> Vec<FileCandidate> {
    candidates_from_list(ev.data_transfer().and_then(|dt| dt.files()))
}
