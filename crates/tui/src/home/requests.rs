use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use crate::Action;
use crate::worker::{Command, Reply};

#[derive(Debug, Default, Clone, Copy)]
struct Slot {
	current: Option<u64>,
	in_flight: bool,
}

/// Sequencing for the four request kinds.
///
/// Each kind tracks the id of its most recent request. Issuing a new request
/// supersedes the previous one of the same kind: a late reply carrying an
/// older id is dropped instead of overwriting newer state.
pub(crate) struct RequestRuntime {
	tx: Sender<Command>,
	rx: Receiver<Reply>,
	next_id: u64,
	slots: [Slot; 4],
}

impl RequestRuntime {
	pub(crate) fn new(tx: Sender<Command>, rx: Receiver<Reply>) -> Self {
		Self {
			tx,
			rx,
			next_id: 0,
			slots: [Slot::default(); 4],
		}
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(Command::Shutdown);
	}

	/// Send a request and return the id it was issued under.
	pub(crate) fn issue(&mut self, action: Action, query: String) -> u64 {
		self.next_id = self.next_id.saturating_add(1);
		let id = self.next_id;
		let slot = &mut self.slots[action.index()];
		if slot.in_flight {
			tracing::debug!(%action, superseded = ?slot.current, id, "superseding in-flight request");
		}
		slot.current = Some(id);
		slot.in_flight = true;

		if self.tx.send(Command::Request { id, action, query }).is_err() {
			tracing::error!(%action, id, "request dispatcher is not running");
		}
		id
	}

	/// Whether `reply` answers the latest request of its kind. Accepting a
	/// reply ends that kind's loading state.
	pub(crate) fn accept(&mut self, reply: &Reply) -> bool {
		let slot = &mut self.slots[reply.action.index()];
		if slot.current != Some(reply.id) {
			return false;
		}
		slot.in_flight = false;
		true
	}

	pub(crate) fn try_recv(&mut self) -> Result<Reply, TryRecvError> {
		self.rx.try_recv()
	}

	#[must_use]
	pub(crate) fn is_in_flight(&self, action: Action) -> bool {
		self.slots[action.index()].in_flight
	}

	/// True while any request is outstanding.
	#[must_use]
	pub(crate) fn is_loading(&self) -> bool {
		self.slots.iter().any(|slot| slot.in_flight)
	}
}
