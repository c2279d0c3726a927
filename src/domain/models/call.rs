//! Call domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ports::Keyed;

/// Status of a call in the simulated telephony network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallStatus {
    /// Placed, waiting for the far end to answer
    Ringing,
    /// Answered and active
    InProgress,
    /// Ended; duration has been derived
    Completed,
}

impl CallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ringing => "ringing",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

/// Which side initiated the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallDirection {
    Inbound,
    Outbound,
}

/// A placed or historical call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub id: String,
    pub from: String,
    pub to: String,
    pub status: CallStatus,
    /// Whole seconds, derived when the call ends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_url: Option<String>,
    pub direction: CallDirection,
    pub start_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

impl Keyed for Call {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Call {
    /// Mark the call completed as of `ended_at` and derive its duration.
    pub fn end(&mut self, ended_at: DateTime<Utc>) {
        self.status = CallStatus::Completed;
        self.end_time = Some(ended_at);
        self.duration = Some((ended_at - self.start_time).num_seconds());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn ending_a_call_derives_whole_second_duration() {
        let start = Utc::now();
        let mut call = Call {
            id: "CALL-100".to_string(),
            from: "555-987-6543".to_string(),
            to: "555-123-4567".to_string(),
            status: CallStatus::InProgress,
            duration: None,
            recording_url: None,
            direction: CallDirection::Outbound,
            start_time: start,
            end_time: None,
            notes: None,
            account_id: None,
        };

        call.end(start + Duration::seconds(245));

        assert_eq!(call.status, CallStatus::Completed);
        assert_eq!(call.duration, Some(245));
        assert_eq!(call.end_time, Some(start + Duration::seconds(245)));
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(CallStatus::InProgress).expect("serialize"),
            "in_progress"
        );
        assert_eq!(CallStatus::Ringing.as_str(), "ringing");
    }
}
