//! Create Study Group Page
//!
//! Terminal rendering of the create form. Reads one line per field, hands the
//! values to the controller, and prints notices or the navigation result.

use std::io::{BufRead, Write};

use crate::app::navigation::{HistoryRouter, Route};
use crate::domain::DraftField;
use crate::domain::schedule::normalize_input;
use crate::error::Result;
use crate::eventing::NoticeQueue;
use crate::i18n::{Locale, t};
use crate::services::StudyGroupApi;
use crate::services::runtime::block_on;

use super::controller::{CreateGroupController, SubmitOutcome};

/// How the page was left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageExit {
    /// A study group was created and the router moved on
    Navigated(Route),
    /// Input ended before a group was created
    Closed,
}

/// Console view of the create form
pub struct CreateGroupPage<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> CreateGroupPage<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Prompt, submit, and repeat until a group is created or input ends.
    ///
    /// Empty input keeps the current value, so a rejected form only needs
    /// the missing fields re-entered.
    pub fn run<A>(
        &mut self,
        controller: &mut CreateGroupController<A, NoticeQueue, HistoryRouter>,
    ) -> Result<PageExit>
    where
        A: StudyGroupApi,
    {
        let locale = controller.locale();
        writeln!(self.output, "== {} ==", t(locale, Route::CreateStudyGroup.title_key()))?;

        loop {
            for field in DraftField::all() {
                let Some(value) = self.prompt_field(locale, *field, controller.draft().get(*field))?
                else {
                    return Ok(PageExit::Closed);
                };
                controller.set_field(*field, value);
            }

            writeln!(self.output, "{}", t(locale, "action-submitting"))?;
            self.output.flush()?;

            let outcome = block_on(controller.submit())?;

            for notice in controller.notifier_mut().drain() {
                writeln!(self.output, "! {}", notice.message)?;
            }

            if let SubmitOutcome::Created { handoff } = outcome {
                let route = controller.router().current();
                writeln!(
                    self.output,
                    "{}: {} ({})",
                    t(locale, "navigated-to"),
                    t(locale, route.title_key()),
                    route.path()
                )?;
                writeln!(self.output, "  {}: {}", t(locale, "field-name"), handoff.name)?;
                writeln!(self.output, "  {}: {}", t(locale, "field-subject"), handoff.subject)?;
                writeln!(self.output, "  {}: {}", t(locale, "field-topic"), handoff.topic)?;
                self.output.flush()?;
                return Ok(PageExit::Navigated(route));
            }
        }
    }

    /// Read one field. `None` when input has ended.
    fn prompt_field(&mut self, locale: Locale, field: DraftField, current: &str) -> Result<Option<String>> {
        let mut label = t(locale, field.label_key());
        if field.is_required() {
            label = format!("{label} ({})", t(locale, "field-required"));
        }

        loop {
            if current.is_empty() {
                write!(self.output, "{label}: ")?;
            } else {
                write!(self.output, "{label} [{current}]: ")?;
            }
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            let line = line.trim_end_matches(['\r', '\n']);
            let value = if line.is_empty() { current } else { line };

            if field != DraftField::ScheduledTime {
                return Ok(Some(value.to_string()));
            }

            // Stand-in for the datetime picker
            match normalize_input(value) {
                Some(normalized) => return Ok(Some(normalized)),
                None => writeln!(self.output, "! {}", t(locale, "field-invalid-time"))?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::create_group::testing::{FakeApi, Script};
    use serde_json::json;
    use std::io::Cursor;

    type Controller = CreateGroupController<FakeApi, NoticeQueue, HistoryRouter>;

    fn controller(script: Script) -> Controller {
        CreateGroupController::new(
            FakeApi::new(script),
            NoticeQueue::new(),
            HistoryRouter::default(),
            Locale::EnUS,
        )
    }

    fn run_page(controller: &mut Controller, input: &str) -> (PageExit, String) {
        let mut page = CreateGroupPage::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let exit = page.run(controller).expect("page run");
        let output = String::from_utf8(page.into_output()).expect("utf8 output");
        (exit, output)
    }

    #[test]
    fn rejected_form_is_reprompted_with_values_kept() {
        let mut c = controller(Script::Reply(200, json!({})));
        let input = concat!(
            "\nMath\nAlgebra\n\n\n",
            "Study A\n\n\n\n2024-05-01 10:00\n",
        );

        let (exit, output) = run_page(&mut c, input);

        assert_eq!(exit, PageExit::Navigated(Route::StudyGroupDetails));
        assert!(output.contains("! Please fill in all the required fields"));
        assert!(output.contains("Subject (required) [Math]: "));
        assert!(output.contains("Navigated to: Study Group Details (/study-group-details)"));
        assert!(output.contains("  Study Group Name: Study A"));

        let requests = c.api().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].subject, "Math");
        assert_eq!(requests[0].topic, "Algebra");
        assert_eq!(requests[0].scheduled_time, "2024-05-01T10:00");
    }

    #[test]
    fn invalid_time_is_reprompted() {
        let mut c = controller(Script::Reply(200, json!({})));
        let input = "Study A\nMath\nAlgebra\n\nsoon\n2024-05-01T10:00\n";

        let (exit, output) = run_page(&mut c, input);

        assert_eq!(exit, PageExit::Navigated(Route::StudyGroupDetails));
        assert!(output.contains("! Invalid date/time"));
        assert_eq!(c.api().requests()[0].scheduled_time, "2024-05-01T10:00");
    }

    #[test]
    fn network_error_then_end_of_input_closes() {
        let mut c = controller(Script::Transport);
        let input = "Study A\nMath\nAlgebra\nNotes\n\n";

        let (exit, output) = run_page(&mut c, input);

        assert_eq!(exit, PageExit::Closed);
        assert!(output.contains("! Network error: Unable to create study group"));
        assert!(!output.contains("Navigated to"));
        assert_eq!(c.api().requests().len(), 1);
        assert_eq!(c.router().current(), Route::CreateStudyGroup);
    }

    #[test]
    fn empty_input_closes_without_request() {
        let mut c = controller(Script::Reply(200, json!({})));
        let (exit, _) = run_page(&mut c, "");
        assert_eq!(exit, PageExit::Closed);
        assert!(c.api().requests().is_empty());
    }
}
