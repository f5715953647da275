//! Create Study Group Controller
//!
//! Owns the form draft, validates it, sends the create request, and either
//! navigates to the details page or raises a notice.

use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::app::navigation::{Route, Router};
use crate::domain::{ApiErrorBody, DraftField, GroupHandoff, StudyGroupDraft};
use crate::eventing::Notifier;
use crate::i18n::{Locale, t};
use crate::services::StudyGroupApi;

/// Required fields were left empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub missing: Vec<DraftField>,
}

/// Terminal result of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Required fields empty; nothing was sent
    Rejected { missing: Vec<DraftField> },
    /// Backend accepted the group
    Created { handoff: GroupHandoff },
    /// Backend answered with a non-success status
    Failed { status: u16, message: Option<String> },
    /// The request did not complete
    NetworkError,
}

/// Check the required fields of a draft
pub fn validate(draft: &StudyGroupDraft) -> Result<(), ValidationError> {
    let missing = draft.missing_required();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { missing })
    }
}

/// Validate and send one draft, without touching any UI.
///
/// Makes no request when validation fails, otherwise exactly one.
pub async fn submit_draft<A>(api: &A, draft: &StudyGroupDraft) -> SubmitOutcome
where
    A: StudyGroupApi + ?Sized,
{
    if let Err(ValidationError { missing }) = validate(draft) {
        return SubmitOutcome::Rejected { missing };
    }

    let request = draft.to_request();
    match api.create_study_group(&request).await {
        Ok(reply) if reply.is_success() => {
            info!(status = reply.status, "Study group created");
            SubmitOutcome::Created {
                handoff: draft.handoff(),
            }
        }
        Ok(reply) => {
            let message = ApiErrorBody::from_value(&reply.body).message;
            warn!(status = reply.status, message = ?message, "Backend rejected study group");
            SubmitOutcome::Failed {
                status: reply.status,
                message,
            }
        }
        Err(e) => {
            warn!(error = %e, "Create study group request failed");
            SubmitOutcome::NetworkError
        }
    }
}

/// Create study group page controller
pub struct CreateGroupController<A, N, R> {
    api: A,
    notifier: N,
    router: R,
    locale: Locale,
    draft: StudyGroupDraft,
}

impl<A, N, R> CreateGroupController<A, N, R>
where
    A: StudyGroupApi,
    N: Notifier,
    R: Router,
{
    /// Create a new controller with an empty draft
    pub fn new(api: A, notifier: N, router: R, locale: Locale) -> Self {
        Self {
            api,
            notifier,
            router,
            locale,
            draft: StudyGroupDraft::new(),
        }
    }

    pub fn draft(&self) -> &StudyGroupDraft {
        &self.draft
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Submit the current draft.
    ///
    /// A rejected draft is kept so the user can complete it. Once a request
    /// is dispatched the draft is discarded, whatever the outcome. The
    /// exclusive borrow keeps a second submission from starting while one
    /// is pending.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if let Err(ValidationError { missing }) = validate(&self.draft) {
            info!(missing = ?missing, "Study group draft incomplete");
            let outcome = SubmitOutcome::Rejected { missing };
            self.apply(&outcome);
            return outcome;
        }

        let draft = std::mem::take(&mut self.draft);
        let span = info_span!("create_study_group", submission_id = %Uuid::now_v7());
        let outcome = submit_draft(&self.api, &draft).instrument(span).await;

        self.apply(&outcome);
        outcome
    }

    /// Turn an outcome into its single terminal effect
    fn apply(&mut self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Rejected { .. } => {
                self.notifier.notify(&t(self.locale, "notice-missing-fields"));
            }
            SubmitOutcome::Created { handoff } => {
                self.router.navigate(Route::StudyGroupDetails, Some(handoff.clone()));
            }
            SubmitOutcome::Failed { message, .. } => {
                let text = match message {
                    Some(message) => message.clone(),
                    None => t(self.locale, "notice-create-failed"),
                };
                self.notifier.notify(&text);
            }
            SubmitOutcome::NetworkError => {
                self.notifier.notify(&t(self.locale, "notice-network-error"));
            }
        }
    }
}
