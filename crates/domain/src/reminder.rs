use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One of the emails in the webinar nurture sequence.
///
/// `Confirmation` is sent when the `Registrant` signs up, the remaining
/// tiers are dispatched by the nurture scheduler as the webinar approaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReminderTier {
    Confirmation,
    SevenDay,
    ThreeDay,
    OneDay,
    DayOf,
}

impl ReminderTier {
    /// Tiers handled by the nurture scheduler, in priority order
    pub const NURTURE_SEQUENCE: [ReminderTier; 4] = [
        ReminderTier::SevenDay,
        ReminderTier::ThreeDay,
        ReminderTier::OneDay,
        ReminderTier::DayOf,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmation => "confirmation",
            Self::SevenDay => "7-day",
            Self::ThreeDay => "3-day",
            Self::OneDay => "1-day",
            Self::DayOf => "day-of",
        }
    }

    /// Whether this tier may fire `days_until` calendar days before the webinar
    /// at the given local hour.
    pub fn in_window(&self, days_until: i64, hour: u32) -> bool {
        match self {
            Self::Confirmation => false,
            Self::SevenDay => (6..=8).contains(&days_until),
            Self::ThreeDay => (2..=4).contains(&days_until),
            Self::OneDay => days_until == 1,
            // Day-of reminders only go out in the morning
            Self::DayOf => days_until == 0 && hour < 12,
        }
    }
}

impl Display for ReminderTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The guard flags of a `Registrant`. Each flag holds the raw timestamp
/// that was written when the corresponding email went out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentReminders {
    pub confirmation: Option<String>,
    pub seven_day: Option<String>,
    pub three_day: Option<String>,
    pub one_day: Option<String>,
    pub day_of: Option<String>,
}

impl SentReminders {
    fn slot(&self, tier: ReminderTier) -> &Option<String> {
        match tier {
            ReminderTier::Confirmation => &self.confirmation,
            ReminderTier::SevenDay => &self.seven_day,
            ReminderTier::ThreeDay => &self.three_day,
            ReminderTier::OneDay => &self.one_day,
            ReminderTier::DayOf => &self.day_of,
        }
    }

    fn slot_mut(&mut self, tier: ReminderTier) -> &mut Option<String> {
        match tier {
            ReminderTier::Confirmation => &mut self.confirmation,
            ReminderTier::SevenDay => &mut self.seven_day,
            ReminderTier::ThreeDay => &mut self.three_day,
            ReminderTier::OneDay => &mut self.one_day,
            ReminderTier::DayOf => &mut self.day_of,
        }
    }

    pub fn is_sent(&self, tier: ReminderTier) -> bool {
        matches!(self.slot(tier), Some(ts) if !ts.trim().is_empty())
    }

    pub fn sent_at(&self, tier: ReminderTier) -> Option<&str> {
        self.slot(tier).as_deref().filter(|ts| !ts.trim().is_empty())
    }

    /// Sets the flag for `tier`. A flag that is already set is never
    /// overwritten, returns `false` in that case.
    pub fn mark(&mut self, tier: ReminderTier, timestamp: String) -> bool {
        if self.is_sent(tier) {
            return false;
        }
        *self.slot_mut(tier) = Some(timestamp);
        true
    }

    /// Picks the nurture tier that should be dispatched now, if any.
    ///
    /// Tiers are checked in priority order and the first one that is inside
    /// its window and not yet sent wins. At most one tier is returned.
    pub fn due_tier(&self, days_until: i64, hour: u32) -> Option<ReminderTier> {
        if days_until < 0 {
            return None;
        }
        ReminderTier::NURTURE_SEQUENCE
            .iter()
            .find(|tier| tier.in_window(days_until, hour) && !self.is_sent(**tier))
            .copied()
    }
}
