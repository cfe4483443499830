//! Urgency classification of an expiry date

use crate::utils::dates;
use chrono::NaiveDate;

/// Days before expiry at which a date stops being healthy
pub const EXPIRING_SOON_DAYS: i64 = 30;

/// How urgently an expiry date needs attention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrgencyTier {
    Unavailable,
    Expired,
    ExpiringSoon,
    Healthy,
}

impl UrgencyTier {
    /// Classify an expiry date against `today`.
    ///
    /// Both sides are calendar dates, so an expiry of today is zero days away
    /// and counts as expired.
    pub fn classify(expiry: Option<NaiveDate>, today: NaiveDate) -> Self {
        let Some(expiry) = expiry else {
            return UrgencyTier::Unavailable;
        };

        let diff_days = days_until(expiry, today);
        if diff_days <= 0 {
            UrgencyTier::Expired
        } else if diff_days < EXPIRING_SOON_DAYS {
            UrgencyTier::ExpiringSoon
        } else {
            UrgencyTier::Healthy
        }
    }

    /// Classify against the current UTC date
    pub fn from_expiry(expiry: Option<NaiveDate>) -> Self {
        Self::classify(expiry, dates::today())
    }

    /// Short label for display
    pub fn label(&self) -> &'static str {
        match self {
            UrgencyTier::Unavailable => "Failed",
            UrgencyTier::Expired => "Expired",
            UrgencyTier::ExpiringSoon => "Soon",
            UrgencyTier::Healthy => "OK",
        }
    }

    /// Get the icon for this tier
    pub fn icon(&self) -> &'static str {
        match self {
            UrgencyTier::Unavailable | UrgencyTier::Expired => "✗",
            UrgencyTier::ExpiringSoon => "⚠",
            UrgencyTier::Healthy => "✓",
        }
    }

    /// Get the color name for this tier
    pub fn color_name(&self) -> &'static str {
        match self {
            UrgencyTier::Unavailable | UrgencyTier::Expired => "red",
            UrgencyTier::ExpiringSoon => "yellow",
            UrgencyTier::Healthy => "green",
        }
    }
}

/// Whole days from `today` until `expiry`, negative once past
pub fn days_until(expiry: NaiveDate, today: NaiveDate) -> i64 {
    (expiry - today).num_days()
}
