use crate::{Advisor, Prospect, ReminderTier};

const SIGNATURE: &str = "The PlanWell Team

---
PlanWell Financial Planning
planwellfp.com
";

/// Plain text email ready to be handed to a mailer
#[derive(Debug, Clone, PartialEq)]
pub struct EmailContent {
    pub subject: String,
    pub body: String,
}

/// Values substituted into the webinar nurture emails
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateContext {
    pub first_name: String,
    /// E.g. "Tuesday, December 30"
    pub webinar_date: String,
    /// "EST" or "EDT"
    pub timezone: String,
    pub join_link: String,
}

impl EmailContent {
    pub fn for_tier(tier: ReminderTier, ctx: &TemplateContext) -> Self {
        match tier {
            ReminderTier::Confirmation => confirmation(ctx),
            ReminderTier::SevenDay => seven_day(ctx),
            ReminderTier::ThreeDay => three_day(ctx),
            ReminderTier::OneDay => one_day(ctx),
            ReminderTier::DayOf => day_of(ctx),
        }
    }

    /// Sent to a qualified prospect introducing the assigned advisor
    pub fn call_booking_confirmation(prospect: &Prospect, advisor: &Advisor) -> Self {
        let name = if prospect.name.trim().is_empty() {
            "there"
        } else {
            prospect.name.trim()
        };
        Self {
            subject: format!("Your Call with {} at PlanWell", advisor.name),
            body: format!(
                "Hi {name},

You're all set! {advisor} will be reaching out within 1 business day to schedule your call.

About {advisor}:
{advisor}, {title}
{bio}

In the meantime, you can prepare by:
• Gathering your latest SF-50
• Reviewing your TSP statement
• Writing down your top 2-3 questions

We look forward to speaking with you!

— {SIGNATURE}",
                name = name,
                advisor = advisor.name,
                title = advisor.title,
                bio = advisor.bio,
            ),
        }
    }

    /// Sent to the advisor that was assigned a new call booking
    pub fn advisor_notification(prospect: &Prospect, submitted_at: &str) -> Self {
        let name = if prospect.name.trim().is_empty() {
            "Unknown"
        } else {
            prospect.name.trim()
        };
        Self {
            subject: format!("New Call Booking: {}", name),
            body: format!(
                "New call booking request:

Name: {name}
Email: {email}
Phone: {phone}
Topic: {topic}

Screening Answers:
- Federal Employee: {federal}
- Wants Advisor: {wants_advisor}
- Single Question: {single}

Submitted: {submitted_at}

Please reach out within 1 business day to schedule the call.
",
                name = name,
                email = prospect.email,
                phone = prospect.phone,
                topic = prospect.topic,
                federal = prospect.screening.is_federal_employee,
                wants_advisor = prospect.screening.wants_advisor,
                single = prospect.screening.single_question,
                submitted_at = submitted_at,
            ),
        }
    }
}

fn confirmation(ctx: &TemplateContext) -> EmailContent {
    EmailContent {
        subject: format!(
            "You're registered for the FERS Workshop on {}",
            ctx.webinar_date
        ),
        body: format!(
            "Hi {first_name},

You're all set for the FERS Retirement Workshop!

Date: {date}
Time: 11:00 AM – 2:00 PM {tz}
Location: Online via Zoom

What we'll cover:
• Your FERS pension calculation and strategies
• TSP optimization and withdrawal options
• FEHB and Medicare coordination
• Survivor benefits decisions
• Live Q&A with our Certified Financial Planners

Your Zoom link will be sent the day before the workshop.

Questions? Just reply to this email.

See you there,
{SIGNATURE}",
            first_name = ctx.first_name,
            date = ctx.webinar_date,
            tz = ctx.timezone,
        ),
    }
}

fn seven_day(ctx: &TemplateContext) -> EmailContent {
    EmailContent {
        subject: "One week until the FERS Workshop – Here's what to expect".into(),
        body: format!(
            "Hi {first_name},

Your FERS Retirement Workshop is coming up in one week ({date}).

Here's a preview of what we'll cover:
• How your FERS pension is calculated and how to maximize it
• TSP withdrawal strategies and common mistakes to avoid
• Coordinating FEHB with Medicare
• Making the right survivor benefit election

To get the most out of the session, have your latest Leave and Earnings
Statement and TSP statement handy.

See you next week,
{SIGNATURE}",
            first_name = ctx.first_name,
            date = ctx.webinar_date,
        ),
    }
}

fn three_day(ctx: &TemplateContext) -> EmailContent {
    EmailContent {
        subject: "3 days until your FERS Workshop – Quick prep".into(),
        body: format!(
            "Hi {first_name},

Just 3 days until the FERS Retirement Workshop on {date} at 11:00 AM {tz}.

Quick prep checklist:
• Gather your latest SF-50 and Leave and Earnings Statement
• Review your TSP statement
• Write down your top questions for the live Q&A

Your Zoom link will arrive the day before the workshop.

See you soon,
{SIGNATURE}",
            first_name = ctx.first_name,
            date = ctx.webinar_date,
            tz = ctx.timezone,
        ),
    }
}

fn one_day(ctx: &TemplateContext) -> EmailContent {
    EmailContent {
        subject: "Tomorrow: Your FERS Workshop + Zoom Link".into(),
        body: format!(
            "Hi {first_name},

The FERS Retirement Workshop is tomorrow, {date}, from 11:00 AM – 2:00 PM {tz}.

Join on Zoom:
{link}

Save this email so you can find the link tomorrow. We recommend joining a
few minutes early to test your audio.

See you tomorrow,
{SIGNATURE}",
            first_name = ctx.first_name,
            date = ctx.webinar_date,
            tz = ctx.timezone,
            link = ctx.join_link,
        ),
    }
}

fn day_of(ctx: &TemplateContext) -> EmailContent {
    EmailContent {
        subject: "Starting in a few hours – Join the FERS Workshop".into(),
        body: format!(
            "Hi {first_name},

The FERS Retirement Workshop starts today at 11:00 AM {tz}.

Join on Zoom:
{link}

Bring your questions, our Certified Financial Planners will answer them live.

See you shortly,
{SIGNATURE}",
            first_name = ctx.first_name,
            tz = ctx.timezone,
            link = ctx.join_link,
        ),
    }
}
