use ratatui::layout::Rect;

/// A `width` x `height` rectangle centred in `area`, clamped to its bounds.
#[must_use]
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
	let width = width.min(area.width);
	let height = height.min(area.height);
	Rect {
		x: area.x + (area.width - width) / 2,
		y: area.y + (area.height - height) / 2,
		width,
		height,
	}
}
