pub const CONTACT_FORM_SOURCE: &str = "contact_form";

/// A message sent through the website contact form. Advisors follow up
/// directly from the contact sheet, no emails are sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub submitted_at: String,
    pub source: String,
}
