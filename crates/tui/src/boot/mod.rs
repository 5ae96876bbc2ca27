//! Time-driven boot sequence shown before the home screen.
//!
//! The sequence is driven by elapsed time handed in by the event loop, which
//! keeps it deterministic under test. Two independent [`Interval`]s reveal the
//! console lines and fill the progress counter; both stop with the screen when
//! it is dropped.

mod render;

use std::time::Duration;

/// Number of console lines in the sequence.
pub const LINE_COUNT: usize = 7;

/// Console lines revealed one at a time.
pub static CONSOLE_LINES: [&str; LINE_COUNT] = [
	"DIAGNOSTIC_CONSOLE_V3.7.2",
	"> INITIATING DEEP_SYSTEM_SCAN...",
	"> CALIBRATING QUANTUM SENSORS...",
	"> DATA MATRICES... RECONSTRUCTING",
	"> LOADING NEURAL PATHWAYS...",
	"> ESTABLISHING SECURE CONNECTION...",
	"> FINALIZING BOOT SEQUENCE...",
];

/// Delay between console lines.
pub const LINE_PERIOD: Duration = Duration::from_millis(400);
/// Delay between progress increments.
pub const PROGRESS_PERIOD: Duration = Duration::from_millis(40);
/// Pause after progress reaches [`PROGRESS_MAX`] before completion fires.
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);
/// Final progress value.
pub const PROGRESS_MAX: u8 = 100;

/// One-shot token returned by [`BootScreen::advance`] when the sequence ends.
#[must_use = "the boot screen only reports completion once"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootComplete;

/// A repeating timer fed with elapsed time instead of wall-clock callbacks.
#[derive(Debug, Clone)]
pub(crate) struct Interval {
	period: Duration,
	carry: Duration,
}

impl Interval {
	pub(crate) fn new(period: Duration) -> Self {
		Self {
			period,
			carry: Duration::ZERO,
		}
	}

	/// Consume `elapsed` and return how many periods completed.
	pub(crate) fn advance(&mut self, elapsed: Duration) -> u32 {
		self.carry += elapsed;
		let period = self.period.as_nanos().max(1);
		let fired = self.carry.as_nanos() / period;
		let fired = u32::try_from(fired).unwrap_or(u32::MAX);
		self.carry -= self.period * fired;
		fired
	}

	/// Time accumulated towards the next period.
	pub(crate) fn carry(&self) -> Duration {
		self.carry
	}
}

/// State of the boot animation.
#[derive(Debug, Clone)]
pub struct BootScreen {
	revealed: usize,
	progress: u8,
	line_timer: Interval,
	progress_timer: Interval,
	/// Time spent at full progress, `None` until progress reaches the maximum.
	settled_for: Option<Duration>,
	completed: bool,
	/// Total time fed to the screen, drives the cursor blink.
	pub(crate) elapsed: Duration,
}

impl Default for BootScreen {
	fn default() -> Self {
		Self::new()
	}
}

impl BootScreen {
	pub fn new() -> Self {
		Self {
			revealed: 0,
			progress: 0,
			line_timer: Interval::new(LINE_PERIOD),
			progress_timer: Interval::new(PROGRESS_PERIOD),
			settled_for: None,
			completed: false,
			elapsed: Duration::ZERO,
		}
	}

	/// Advance both timers by `elapsed`.
	///
	/// Returns [`BootComplete`] exactly once, on the call during which
	/// [`SETTLE_DELAY`] has passed since progress reached [`PROGRESS_MAX`].
	pub fn advance(&mut self, elapsed: Duration) -> Option<BootComplete> {
		self.elapsed += elapsed;

		let lines = self.line_timer.advance(elapsed) as usize;
		self.revealed = (self.revealed + lines).min(CONSOLE_LINES.len());

		match self.settled_for {
			Some(settled) => self.settled_for = Some(settled + elapsed),
			None => {
				let ticks = self.progress_timer.advance(elapsed);
				let next = u32::from(self.progress).saturating_add(ticks);
				let max = u32::from(PROGRESS_MAX);
				if next >= max {
					self.progress = PROGRESS_MAX;
					let overshoot = PROGRESS_PERIOD * (next - max);
					self.settled_for = Some(overshoot + self.progress_timer.carry());
				} else {
					self.progress = next as u8;
				}
			}
		}

		if self.completed {
			return None;
		}
		match self.settled_for {
			Some(settled) if settled >= SETTLE_DELAY => {
				self.completed = true;
				tracing::debug!("boot sequence complete");
				Some(BootComplete)
			}
			_ => None,
		}
	}

	/// Current progress in `0..=100`.
	#[must_use]
	pub fn progress(&self) -> u8 {
		self.progress
	}

	/// Console lines revealed so far.
	#[must_use]
	pub fn console_lines(&self) -> &'static [&'static str] {
		&CONSOLE_LINES[..self.revealed]
	}

	/// Whether progress has reached the maximum.
	#[must_use]
	pub fn is_ready(&self) -> bool {
		self.progress >= PROGRESS_MAX
	}

	/// Whether the completion token has been handed out.
	#[must_use]
	pub fn is_complete(&self) -> bool {
		self.completed
	}
}
