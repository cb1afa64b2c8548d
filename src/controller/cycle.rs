//! One in-flight fetch cycle.

use crate::client::{FetchError, RequestTarget};
use crate::core::Record;
use crate::fetch::{FetchMachine, Settlement, Tag};
use parking_lot::Mutex;

/// A started cycle that still owes the machine its terminal event.
///
/// `FETCH_INIT` is dispatched on creation. If the cycle is dropped before
/// [`settle`](Self::settle) runs, it settles itself as a failure, so every
/// cycle produces exactly one terminal event.
pub(crate) struct PendingCycle<'a> {
    machine: &'a Mutex<FetchMachine>,
    tag: Tag,
    target: RequestTarget,
    settled: bool,
}

impl<'a> PendingCycle<'a> {
    pub(crate) fn begin(machine: &'a Mutex<FetchMachine>, target: RequestTarget) -> Self {
        let tag = machine.lock().begin();
        tracing::info!(tag, url = %target, "search submitted");
        Self {
            machine,
            tag,
            target,
            settled: false,
        }
    }

    pub(crate) fn tag(&self) -> Tag {
        self.tag
    }

    pub(crate) fn target(&self) -> &RequestTarget {
        &self.target
    }

    pub(crate) fn settle(mut self, outcome: Result<Vec<Record>, FetchError>) -> Settlement {
        self.settled = true;
        if let Err(error) = &outcome {
            tracing::warn!(tag = self.tag, term = self.target.term(), %error, "search failed");
        }
        self.machine.lock().settle(self.tag, outcome)
    }
}

impl Drop for PendingCycle<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.machine
                .lock()
                .settle(self.tag, Err(FetchError::Abandoned));
        }
    }
}
