//! Background request dispatcher.
//!
//! The UI thread never blocks on the network. It sends [`Command`]s to a
//! dispatcher thread, which runs every request on its own short-lived thread so
//! different actions proceed concurrently, and collects tagged [`Reply`]s from
//! a channel once per frame.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use bioverse_api::{
	ApiError, Backend, DescribeResponse, NerPayload, RecommendResponse, SearchResponse,
};

use crate::Action;

/// Work accepted by the dispatcher.
#[derive(Debug, Clone)]
pub(crate) enum Command {
	Request { id: u64, action: Action, query: String },
	Shutdown,
}

/// Successful response body for an [`Action`].
#[derive(Debug, Clone)]
pub(crate) enum Payload {
	Search(SearchResponse),
	Describe(DescribeResponse),
	Recommend(RecommendResponse),
	Recognize(NerPayload),
}

/// Result of a request, tagged with the id it was issued under.
#[derive(Debug)]
pub(crate) struct Reply {
	pub(crate) id: u64,
	pub(crate) action: Action,
	pub(crate) outcome: Result<Payload, ApiError>,
}

/// Start the dispatcher thread.
pub(crate) fn spawn(backend: Arc<dyn Backend>) -> (Sender<Command>, Receiver<Reply>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (reply_tx, reply_rx) = mpsc::channel();

	thread::spawn(move || dispatch(backend, command_rx, reply_tx));

	(command_tx, reply_rx)
}

fn dispatch(backend: Arc<dyn Backend>, commands: Receiver<Command>, replies: Sender<Reply>) {
	while let Ok(command) = commands.recv() {
		match command {
			Command::Request { id, action, query } => {
				let backend = Arc::clone(&backend);
				let replies = replies.clone();
				thread::spawn(move || {
					let outcome = execute(backend.as_ref(), action, &query);
					// The receiver is gone once the app shuts down.
					let _ = replies.send(Reply {
						id,
						action,
						outcome,
					});
				});
			}
			Command::Shutdown => break,
		}
	}
	tracing::debug!("request dispatcher stopped");
}

fn execute(backend: &dyn Backend, action: Action, query: &str) -> Result<Payload, ApiError> {
	match action {
		Action::Search => backend.search(query).map(Payload::Search),
		Action::Describe => backend.describe(query).map(Payload::Describe),
		Action::Recommend => backend.recommend(query).map(Payload::Recommend),
		Action::Recognize => backend.recognize(query).map(Payload::Recognize),
	}
}
