// ABOUTME: Submission action for validated contact form data
// Trait seam plus the simulated implementation used without a real backend

use std::time::Duration;

use thiserror::Error;
use tokio::sync::oneshot;
use tracing::debug;

/// Validated field values collected from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Why a submission attempt failed. Shown to the user only in generic form;
/// the detail goes to the log.
#[derive(Debug, Clone, Error)]
pub enum SubmissionError {
    #[error("simulated network error")]
    Network,
}

/// Result of one submission attempt: accepted data echoed back, or a reason.
pub type SubmissionResult = Result<ContactData, SubmissionError>;

/// Delivers validated form data to its destination. Implementations resolve
/// asynchronously through the returned channel; dropping the sender without
/// resolving counts as a failure on the receiving side.
pub trait Submitter {
    fn submit(&self, data: ContactData) -> oneshot::Receiver<SubmissionResult>;
}

/// Stand-in for a real network call: resolves after a fixed delay,
/// succeeding with probability `success_rate`.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    pub delay: Duration,
    pub success_rate: f64,
}

impl SimulatedSubmitter {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(2000),
            success_rate: 0.9,
        }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(&self, data: ContactData) -> oneshot::Receiver<SubmissionResult> {
        let (tx, rx) = oneshot::channel();
        let delay = self.delay;
        let success_rate = self.success_rate;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let result = if rand::random::<f64>() < success_rate {
                debug!("simulated submission accepted for {}", data.email);
                Ok(data)
            } else {
                Err(SubmissionError::Network)
            };
            // The receiver may be gone if the app quit mid-flight.
            let _ = tx.send(result);
        });

        rx
    }
}

/// Test double resolving a canned outcome as soon as it is polled.
#[derive(Debug, Clone)]
pub struct ImmediateSubmitter {
    pub succeed: bool,
}

impl Submitter for ImmediateSubmitter {
    fn submit(&self, data: ContactData) -> oneshot::Receiver<SubmissionResult> {
        let (tx, rx) = oneshot::channel();
        let result = if self.succeed {
            Ok(data)
        } else {
            Err(SubmissionError::Network)
        };
        let _ = tx.send(result);
        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> ContactData {
        ContactData {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "A long enough message.".to_string(),
        }
    }

    #[tokio::test]
    async fn simulated_submitter_echoes_data_on_success() {
        let submitter = SimulatedSubmitter {
            delay: Duration::from_millis(1),
            success_rate: 1.0,
        };
        let result = submitter.submit(sample_data()).await.expect("sender kept");
        assert_eq!(result.unwrap(), sample_data());
    }

    #[tokio::test]
    async fn simulated_submitter_fails_at_zero_success_rate() {
        let submitter = SimulatedSubmitter {
            delay: Duration::from_millis(1),
            success_rate: 0.0,
        };
        let result = submitter.submit(sample_data()).await.expect("sender kept");
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn immediate_submitter_resolves_without_waiting() {
        let submitter = ImmediateSubmitter { succeed: true };
        let mut rx = submitter.submit(sample_data());
        assert!(rx.try_recv().expect("already resolved").is_ok());
    }
}
