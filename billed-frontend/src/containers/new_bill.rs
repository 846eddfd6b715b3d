//! Receipt staging and submission of one new bill.

use crate::error::{AppError, ValidationError};
use crate::models::{
    Bill, BillDraft, BillForm, BillStatus, FileChangeEvent, RoutePath, StagedFile, SubmitEvent,
    User,
};
use crate::services::{CreateBill, IdentityProvider, Navigator, ReceiptUpload, ResourceClient};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Receipt formats the store accepts, compared case-insensitively.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

const DEFAULT_PCT: i64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Empty,
    FileStaged,
    FileRejected,
    Submitting,
    Submitted,
    SubmissionFailed,
}

pub struct NewBillSubmission {
    store: Arc<dyn ResourceClient>,
    identity: Arc<dyn IdentityProvider>,
    navigator: Arc<dyn Navigator>,
    state: SubmissionState,
    staged: Option<StagedFile>,
    file_input: String,
    file_error: Option<ValidationError>,
    draft: Option<BillDraft>,
    submit_error: Option<String>,
}

impl NewBillSubmission {
    pub fn new(
        store: Arc<dyn ResourceClient>,
        identity: Arc<dyn IdentityProvider>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            store,
            identity,
            navigator,
            state: SubmissionState::Empty,
            staged: None,
            file_input: String::new(),
            file_error: None,
            draft: None,
            submit_error: None,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn staged_file(&self) -> Option<&StagedFile> {
        self.staged.as_ref()
    }

    /// Current value of the receipt input; empty once a file was rejected.
    pub fn file_input_value(&self) -> &str {
        &self.file_input
    }

    /// Inline format error for the receipt input, if any.
    pub fn file_error(&self) -> Option<&ValidationError> {
        self.file_error.as_ref()
    }

    /// Last draft sent to the store, kept after a failed submission.
    pub fn draft(&self) -> Option<&BillDraft> {
        self.draft.as_ref()
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Validate and stage the selected receipt. Never touches the store.
    pub fn handle_change_file(&mut self, event: &FileChangeEvent) -> SubmissionState {
        let Some(file) = event.files.first() else {
            self.staged = None;
            self.file_input.clear();
            self.file_error = None;
            self.state = SubmissionState::Empty;
            return self.state;
        };

        let checked = match file.extension() {
            None => Err(ValidationError::MissingExtension(file.name.clone())),
            Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(ext),
            Some(ext) => Err(ValidationError::UnsupportedExtension {
                file_name: file.name.clone(),
                extension: ext,
            }),
        };

        match checked {
            Ok(extension) => {
                tracing::debug!(file_name = %file.name, "Receipt staged");
                self.file_input = file.name.clone();
                self.file_error = None;
                self.staged = Some(StagedFile {
                    raw_file: file.clone(),
                    extension,
                    accepted_for_upload: true,
                });
                self.state = SubmissionState::FileStaged;
            }
            Err(e) => {
                tracing::warn!(file_name = %file.name, error = %e, "Receipt rejected");
                self.file_input.clear();
                self.file_error = Some(e);
                self.staged = None;
                self.state = SubmissionState::FileRejected;
            }
        }

        self.state
    }

    /// Package the form into a draft and persist it, then return to the list.
    ///
    /// Required fields are not enforced here. On failure the draft and the
    /// staged receipt are kept so the employee can submit again.
    pub async fn handle_submit(&mut self, event: &mut SubmitEvent) -> Result<Bill, AppError> {
        event.prevent_default();

        let user = self.identity.current_user();
        let draft = build_draft(&event.fields, user.as_ref().ok(), self.staged.as_ref());
        self.draft = Some(draft.clone());

        if let Err(e) = user {
            return Err(self.fail(e));
        }

        let request = CreateBill {
            draft,
            receipt: self.staged.as_ref().map(ReceiptUpload::from),
        };

        self.submit_error = None;
        self.state = SubmissionState::Submitting;

        match self.store.create(request).await {
            Ok(bill) => {
                tracing::info!(bill_id = %bill.id, email = %bill.email, "Bill submitted");
                self.state = SubmissionState::Submitted;
                self.staged = None;
                self.file_input.clear();
                self.navigator.navigate(RoutePath::Bills);
                Ok(bill)
            }
            Err(e) => {
                tracing::error!(error = %e, "Bill submission failed");
                Err(self.fail(e))
            }
        }
    }

    fn fail(&mut self, error: AppError) -> AppError {
        self.state = SubmissionState::SubmissionFailed;
        self.submit_error = Some(error.display_message());
        error
    }
}

fn build_draft(form: &BillForm, user: Option<&User>, staged: Option<&StagedFile>) -> BillDraft {
    BillDraft {
        email: user.map(|u| u.email_or_empty().to_string()).unwrap_or_default(),
        expense_type: form.expense_type.clone(),
        name: form.name.clone(),
        amount: form.amount.trim().parse::<Decimal>().ok(),
        date: form.date.clone(),
        vat: form.vat.clone(),
        // A blank or zero percentage falls back to the standard rate.
        pct: form
            .pct
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|pct| *pct != 0)
            .unwrap_or(DEFAULT_PCT),
        commentary: form.commentary.clone(),
        file_name: staged
            .map(|staged| staged.raw_file.name.clone())
            .unwrap_or_default(),
        status: BillStatus::Pending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SelectedFile;

    fn form() -> BillForm {
        BillForm {
            expense_type: "Transports".to_string(),
            name: "Vol Paris Londres".to_string(),
            amount: "348".to_string(),
            date: "2022-04-12".to_string(),
            vat: "70".to_string(),
            pct: "".to_string(),
            commentary: "déplacement client".to_string(),
        }
    }

    #[test]
    fn draft_takes_identity_email_and_staged_file_name() {
        let staged = StagedFile {
            raw_file: SelectedFile::new("billet.png", "image/png", vec![0]),
            extension: "png".to_string(),
            accepted_for_upload: true,
        };

        let draft = build_draft(&form(), Some(&User::employee("a@a")), Some(&staged));
        assert_eq!(draft.email, "a@a");
        assert_eq!(draft.file_name, "billet.png");
        assert_eq!(draft.amount, Some(Decimal::from(348)));
        assert_eq!(draft.pct, DEFAULT_PCT);
        assert_eq!(draft.status, BillStatus::Pending);
    }

    #[test]
    fn draft_tolerates_partial_form() {
        let user = User {
            user_type: crate::models::UserType::Employee,
            email: None,
        };
        let draft = build_draft(&BillForm::default(), Some(&user), None);

        assert_eq!(draft.email, "");
        assert!(draft.amount.is_none());
        assert_eq!(draft.pct, DEFAULT_PCT);
        assert!(draft.file_name.is_empty());
    }

    #[test]
    fn explicit_pct_is_kept() {
        let mut form = form();
        form.pct = " 10 ".to_string();
        assert_eq!(build_draft(&form, Some(&User::employee("a@a")), None).pct, 10);
    }
}
