//! Wear arithmetic: remaining life, utilization, and urgency classes.
//!
//! Usage and intervals are tracked in minutes.  Remaining life never goes
//! negative: a part whose usage exceeds its interval is overdue and has zero
//! remaining life.

use std::fmt;

/// Minutes per hour, used for the hours carried in status messages.
pub const MINUTES_PER_HOUR: u32 = 60;

// ── WearThresholds ────────────────────────────────────────────────────────────

/// Urgency cutoffs and the minimum life a replacement candidate must have.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WearThresholds {
    /// Below this many remaining minutes a part is critical (100 h).
    pub critical_minutes:    u32,
    /// Below this many remaining minutes a part is in warning (500 h).
    pub warning_minutes:     u32,
    /// Replacement candidates need strictly more remaining hours than this.
    pub min_candidate_hours: u32,
}

impl Default for WearThresholds {
    fn default() -> Self {
        Self {
            critical_minutes:    6_000,
            warning_minutes:     30_000,
            min_candidate_hours: 1_000,
        }
    }
}

/// Remaining life in minutes, floored at zero.
#[inline]
pub fn remaining_minutes(operating_minutes: u32, threshold_minutes: u32) -> u32 {
    threshold_minutes.saturating_sub(operating_minutes)
}

/// Fraction of the maintenance interval already used, in `[0, 1]`.
///
/// Returns `0.0` for a zero interval (the ratio is undefined there).
#[inline]
pub fn utilization_ratio(operating_minutes: u32, threshold_minutes: u32) -> f32 {
    if threshold_minutes == 0 {
        return 0.0;
    }
    (operating_minutes as f64 / threshold_minutes as f64).min(1.0) as f32
}

// ── Urgency ───────────────────────────────────────────────────────────────────

/// Maintenance urgency.  Codes are the persisted values; ordering follows
/// severity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Urgency {
    Unset    = 0,
    #[default]
    Normal   = 1,
    Warning  = 2,
    Critical = 4,
}

impl Urgency {
    /// Classify a remaining life against `thresholds`.
    pub fn classify(remaining_minutes: u32, thresholds: &WearThresholds) -> Self {
        if remaining_minutes < thresholds.critical_minutes {
            Urgency::Critical
        } else if remaining_minutes < thresholds.warning_minutes {
            Urgency::Warning
        } else {
            Urgency::Normal
        }
    }

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode a persisted code.  Unknown codes map to `Unset`.
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Urgency::Normal,
            2 => Urgency::Warning,
            4 => Urgency::Critical,
            _ => Urgency::Unset,
        }
    }

    /// `true` for warning and critical.
    #[inline]
    pub fn is_urgent(self) -> bool {
        self >= Urgency::Warning
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Urgency::Unset    => "unset",
            Urgency::Normal   => "normal",
            Urgency::Warning  => "warning",
            Urgency::Critical => "critical",
        };
        f.write_str(s)
    }
}
