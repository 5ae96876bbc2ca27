//! Terminal event loop.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use crate::{App, Exit};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const INPUT_POLL: Duration = Duration::from_millis(50);

impl App<'_> {
	/// Take over the terminal and pump events until the user quits.
	pub fn run(&mut self) -> Result<Exit> {
		let mut terminal = ratatui::init();
		terminal.clear()?;

		let (event_tx, event_rx) = mpsc::channel();
		let input_running = Arc::new(AtomicBool::new(true));
		let input_flag = Arc::clone(&input_running);

		let input_thread = thread::spawn(move || -> Result<()> {
			while input_flag.load(Ordering::Relaxed) {
				if event::poll(INPUT_POLL)? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending = VecDeque::new();
		let mut last_frame = Instant::now();

		let result: Result<Exit> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(event) => pending.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let mut exit = None;
			while let Some(event) = pending.pop_front() {
				if let Event::Key(key) = event {
					if key.kind == KeyEventKind::Press {
						if let Some(reason) = self.handle_key(key) {
							exit = Some(reason);
							break;
						}
					}
				}
			}
			if let Some(reason) = exit {
				break Ok(reason);
			}

			let now = Instant::now();
			self.tick(now - last_frame);
			last_frame = now;

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			thread::sleep(FRAME_INTERVAL);
		};

		ratatui::restore();

		input_running.store(false, Ordering::Relaxed);
		match input_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}
