//! `AdmissionQueues`: per-flow service order for the runway admission step.

use atc_core::{AircraftId, Flow, Priority, Tick};
use atc_fleet::FleetStore;

/// One aircraft waiting for admission, with the key it was ordered by.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QueueEntry {
    pub aircraft:  AircraftId,
    pub priority:  Priority,
    pub scheduled: Tick,
}

impl QueueEntry {
    #[inline]
    fn key(&self) -> (Priority, Tick) {
        (self.priority, self.scheduled)
    }
}

/// Arrival and departure queues for one tick, head first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdmissionQueues {
    pub arrival:   Vec<QueueEntry>,
    pub departure: Vec<QueueEntry>,
}

impl AdmissionQueues {
    /// Build both queues from the eligible aircraft in `fleet` at `now`.
    ///
    /// Does not mutate the fleet.
    pub fn build(fleet: &FleetStore, now: Tick) -> Self {
        let mut queues = Self::default();
        // FleetStore iterates in ascending id order; the stable sort keeps
        // that order within equal keys.
        for aircraft in fleet.iter().filter(|a| a.is_eligible(now)) {
            let entry = QueueEntry {
                aircraft:  aircraft.id,
                priority:  aircraft.priority,
                scheduled: aircraft.scheduled,
            };
            match aircraft.flow() {
                Flow::Arrival => queues.arrival.push(entry),
                Flow::Departure => queues.departure.push(entry),
            }
        }
        queues.arrival.sort_by_key(QueueEntry::key);
        queues.departure.sort_by_key(QueueEntry::key);

        tracing::debug!(
            tick = %now,
            arrival = queues.arrival.len(),
            departure = queues.departure.len(),
            "admission queues built"
        );
        queues
    }

    /// The queue serving `flow`.
    pub fn for_flow(&self, flow: Flow) -> &[QueueEntry] {
        match flow {
            Flow::Arrival => &self.arrival,
            Flow::Departure => &self.departure,
        }
    }

    /// Aircraft ids of one queue, head first.
    pub fn ids(&self, flow: Flow) -> Vec<AircraftId> {
        self.for_flow(flow).iter().map(|e| e.aircraft).collect()
    }

    /// Cursor serving both queue heads in merged `(priority, scheduled)`
    /// order.
    pub fn service_order(&self) -> ServiceOrder<'_> {
        ServiceOrder { queues: self, next: [0, 0], stopped: [false, false] }
    }

    pub fn len(&self) -> usize {
        self.arrival.len() + self.departure.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrival.is_empty() && self.departure.is_empty()
    }
}

// ── ServiceOrder ──────────────────────────────────────────────────────────────

const FLOWS: [Flow; 2] = [Flow::Arrival, Flow::Departure];

#[inline]
fn slot(flow: Flow) -> usize {
    match flow {
        Flow::Arrival => 0,
        Flow::Departure => 1,
    }
}

/// Interleaves the arrival and departure queues for one admission pass.
///
/// Each call to [`next_head`](Self::next_head) yields whichever queue head
/// has the lower `(priority, scheduled)` key, so an Emergency departure is
/// served before a Cargo arrival competing for the same flexible runway.
/// Equal keys go to the arrival queue.  A queue stopped with
/// [`stop`](Self::stop) yields nothing more this pass; the other queue keeps
/// going.
#[derive(Clone, Debug)]
pub struct ServiceOrder<'q> {
    queues:  &'q AdmissionQueues,
    next:    [usize; 2],
    stopped: [bool; 2],
}

impl ServiceOrder<'_> {
    /// The next head to try, or `None` once both queues are exhausted or
    /// stopped.
    pub fn next_head(&mut self) -> Option<(Flow, QueueEntry)> {
        let (flow, entry) = FLOWS
            .into_iter()
            .filter_map(|flow| self.peek(flow).map(|entry| (flow, entry)))
            .min_by_key(|(flow, entry)| (entry.key(), slot(*flow)))?;
        self.next[slot(flow)] += 1;
        Some((flow, entry))
    }

    /// Stop serving `flow` for the rest of this pass.
    pub fn stop(&mut self, flow: Flow) {
        self.stopped[slot(flow)] = true;
    }

    /// Entries of `flow` not yet yielded.
    pub fn remaining(&self, flow: Flow) -> usize {
        let served = self.next[slot(flow)];
        self.queues.for_flow(flow).len().saturating_sub(served)
    }

    fn peek(&self, flow: Flow) -> Option<QueueEntry> {
        let i = slot(flow);
        if self.stopped[i] {
            return None;
        }
        self.queues.for_flow(flow).get(self.next[i]).copied()
    }
}
