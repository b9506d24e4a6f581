use serde::{Deserialize, Serialize};

pub const NOT_FEDERAL_MESSAGE: &str =
    "We exclusively serve federal employees, retirees, and survivors.";
pub const WEBINAR_REDIRECT_PATH: &str = "/webinar";
pub const WEBINAR_REDIRECT_MESSAGE: &str =
    "Based on your answers, our free webinar would be a great fit for you!";

/// Answers to the screening questions of the call booking form. The form
/// submits every answer as `"yes"` or `"no"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreeningAnswers {
    pub is_federal_employee: String,
    pub wants_advisor: String,
    pub single_question: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScreeningOutcome {
    Qualified,
    /// Only federal employees, retirees and survivors are served
    NotFederal,
    /// The prospect is better served by the free webinar
    RedirectToWebinar,
}

fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

impl ScreeningAnswers {
    pub fn screen(&self) -> ScreeningOutcome {
        if !is_yes(&self.is_federal_employee) {
            return ScreeningOutcome::NotFederal;
        }
        if !is_yes(&self.wants_advisor) {
            return ScreeningOutcome::RedirectToWebinar;
        }
        // Prospects with a single question are sent to the webinar
        if is_yes(&self.single_question) {
            return ScreeningOutcome::RedirectToWebinar;
        }
        ScreeningOutcome::Qualified
    }
}

/// A call booking request from the website
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Prospect {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub topic: String,
    pub screening: ScreeningAnswers,
}

/// Entry of the call booking log, written for every submission
#[derive(Debug, Clone, PartialEq)]
pub struct CallBookingLogEntry {
    pub timestamp: String,
    pub prospect: Prospect,
    /// `None` when the prospect did not qualify
    pub assigned_to: Option<String>,
    pub qualified: bool,
}
