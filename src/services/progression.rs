//! Delayed call answering.
//!
//! Placing a call returns `ringing` immediately; a scheduled task flips
//! the call to `in_progress` after a fixed real-time delay. A reader in
//! the window between the response and the timer firing sees the stale
//! `ringing` status, which is expected simulator behavior.

use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::models::{Call, CallStatus};
use crate::services::entity_store::EntityStore;

/// Schedules the ringing -> in_progress transition for placed calls.
///
/// The scheduler owns its pending tasks: handles are retained and
/// aborted, not awaited, when the scheduler is dropped.
#[derive(Debug)]
pub struct AnswerScheduler {
    delay: Duration,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl AnswerScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Schedule the answer transition for `call_id`.
    ///
    /// The transition only applies if the call is still ringing when
    /// the timer fires; a call ended inside the delay window stays
    /// completed. There is no cancellation path per call.
    pub fn schedule(&self, calls: EntityStore<Call>, call_id: String) {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let updated = calls
                .update(&call_id, |call| {
                    if call.status == CallStatus::Ringing {
                        call.status = CallStatus::InProgress;
                    }
                })
                .await;
            if updated.is_some() {
                debug!(call_id = %call_id, "call answered");
            }
        });

        if let Ok(mut pending) = self.pending.lock() {
            pending.retain(|h| !h.is_finished());
            pending.push(handle);
        }
    }
}

impl Drop for AnswerScheduler {
    fn drop(&mut self) {
        if let Ok(pending) = self.pending.get_mut() {
            for handle in pending.drain(..) {
                handle.abort();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::CallDirection;
    use chrono::Utc;

    fn ringing_call(id: &str) -> Call {
        Call {
            id: id.to_string(),
            from: "555-987-6543".to_string(),
            to: "555-123-4567".to_string(),
            status: CallStatus::Ringing,
            duration: None,
            recording_url: None,
            direction: CallDirection::Outbound,
            start_time: Utc::now(),
            end_time: None,
            notes: None,
            account_id: None,
        }
    }

    #[tokio::test]
    async fn ringing_call_is_answered_after_the_delay() {
        let calls = EntityStore::seeded(vec![ringing_call("CALL-100")]);
        let scheduler = AnswerScheduler::new(Duration::from_millis(10));

        scheduler.schedule(calls.clone(), "CALL-100".to_string());
        assert_eq!(
            calls.get("CALL-100").await.map(|c| c.status),
            Some(CallStatus::Ringing)
        );

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(
            calls.get("CALL-100").await.map(|c| c.status),
            Some(CallStatus::InProgress)
        );
    }

    #[tokio::test]
    async fn ended_call_is_not_reanswered() {
        let calls = EntityStore::seeded(vec![ringing_call("CALL-101")]);
        let scheduler = AnswerScheduler::new(Duration::from_millis(20));

        scheduler.schedule(calls.clone(), "CALL-101".to_string());
        calls
            .update("CALL-101", |c| c.end(Utc::now()))
            .await
            .expect("call exists");

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(
            calls.get("CALL-101").await.map(|c| c.status),
            Some(CallStatus::Completed)
        );
    }

    #[tokio::test]
    async fn dropping_the_scheduler_aborts_pending_transitions() {
        let calls = EntityStore::seeded(vec![ringing_call("CALL-102")]);
        let scheduler = AnswerScheduler::new(Duration::from_millis(20));

        scheduler.schedule(calls.clone(), "CALL-102".to_string());
        drop(scheduler);

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(
            calls.get("CALL-102").await.map(|c| c.status),
            Some(CallStatus::Ringing)
        );
    }
}
