use super::aggregate::{FileCandidate, SelectedFile, UploadError};

/// What `UploadForm::stage` did with a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    /// Empty batch; state untouched
    Ignored,
    Accepted,
    Rejected,
}

/// State of the upload card: at most one staged file, or an error, or neither.
///
/// `selected` and `error` are never both set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    selected: Option<SelectedFile>,
    error: Option<UploadError>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn error(&self) -> Option<&UploadError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Consider the first candidate of a picker or drop batch. The rest are ignored.
    pub fn stage<I>(&mut self, candidates: I) -> StageOutcome
    where
        I: IntoIterator<Item = FileCandidate>,
    {
        let Some(first) = candidates.into_iter().next() else {
            return StageOutcome::Ignored;
        };
        match SelectedFile::try_from(first) {
            Ok(file) => {
                self.selected = Some(file);
                self.error = None;
                StageOutcome::Accepted
            }
            Err(err) => {
                self.selected = None;
                self.error = Some(err);
                StageOutcome::Rejected
            }
        }
    }

    /// Clear both the staged file and the error
    pub fn remove(&mut self) {
        self.selected = None;
        self.error = None;
    }
}
