//! Background work for the controller.
//!
//! The submit call is the only operation that blocks on the network, so it
//! runs on its own thread and reports back over a channel the controller
//! drains once per frame.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread;

use crate::report::ReportDraft;
use crate::submit::{self, ReportReceipt, SubmitError};

pub(crate) enum JobMessage {
    ReportSubmitted(SubmitOutcome),
}

#[derive(Debug)]
pub(crate) struct SubmitJob {
    pub(crate) endpoint: String,
    pub(crate) draft: ReportDraft,
}

#[derive(Debug)]
pub(crate) struct SubmitOutcome {
    pub(crate) result: Result<ReportReceipt, SubmitError>,
}

pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    submit_in_progress: bool,
}

impl ControllerJobs {
    pub(crate) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            submit_in_progress: false,
        }
    }

    pub(crate) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(crate) fn submit_in_progress(&self) -> bool {
        self.submit_in_progress
    }

    /// Dispatch the submission on a worker thread.
    ///
    /// The in-progress flag makes a second dispatch a no-op until the first
    /// outcome has been drained.
    pub(crate) fn begin_submit(&mut self, job: SubmitJob) {
        if self.submit_in_progress {
            return;
        }
        self.submit_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = submit::submit_report(&job.endpoint, &job.draft);
            let _ = tx.send(JobMessage::ReportSubmitted(SubmitOutcome { result }));
        });
    }

    pub(crate) fn clear_submit(&mut self) {
        self.submit_in_progress = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_submit_sets_and_guards_the_flag() {
        let mut jobs = ControllerJobs::new();
        assert!(!jobs.submit_in_progress());
        jobs.submit_in_progress = true;
        // A second dispatch while in flight is ignored.
        jobs.begin_submit(SubmitJob {
            endpoint: "http://127.0.0.1:1/unused".into(),
            draft: ReportDraft::default(),
        });
        assert!(jobs.submit_in_progress());
        assert!(matches!(
            jobs.try_recv_message(),
            Err(TryRecvError::Empty)
        ));
        jobs.clear_submit();
        assert!(!jobs.submit_in_progress());
    }
}
