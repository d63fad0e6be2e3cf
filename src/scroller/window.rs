//! Viewport window computation.

use std::ops::Range;

/// Half-open range of list indices that intersect the viewport, plus the
/// trailing buffer rows.
///
/// Always derived from scroll geometry, never stored as state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportWindow {
    /// First materialized index
    pub start: usize,
    /// One past the last materialized index
    pub end: usize,
}

impl ViewportWindow {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end,
        }
    }

    /// Computes the window for the given geometry.
    ///
    /// `start = floor(scroll_offset / row_height)` and
    /// `end = min(start + ceil(viewport_height / row_height) + buffer_rows, total)`.
    /// A row height that is not a positive finite number yields an empty
    /// window; negative offsets and heights count as zero.
    pub fn compute(
        scroll_offset: f64,
        row_height: f64,
        viewport_height: f64,
        total: usize,
        buffer_rows: usize,
    ) -> Self {
        if !(row_height > 0.0 && row_height.is_finite()) {
            return Self::default();
        }

        let start = to_index((scroll_offset / row_height).floor());
        let visible_rows = to_index((viewport_height / row_height).ceil());
        let end = start
            .saturating_add(visible_rows)
            .saturating_add(buffer_rows)
            .min(total);

        Self::new(start, end)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Float to index. NaN and negatives become 0, overflow saturates.
fn to_index(value: f64) -> usize {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_at_top() {
        let window = ViewportWindow::compute(0.0, 80.0, 400.0, 1000, 1);
        assert_eq!(window, ViewportWindow::new(0, 6));
        assert_eq!(window.len(), 6);
    }

    #[test]
    fn test_window_scrolled() {
        let window = ViewportWindow::compute(8000.0, 80.0, 400.0, 1000, 1);
        assert_eq!(window.range(), 100..106);
    }

    #[test]
    fn test_window_partial_row_offset() {
        // 8040 is half way through row 100
        let window = ViewportWindow::compute(8040.0, 80.0, 400.0, 1000, 1);
        assert_eq!(window.range(), 100..106);
    }

    #[test]
    fn test_window_fractional_viewport_rounds_up() {
        // 500 / 80 = 6.25 rows visible, so 7 + 1 buffer
        let window = ViewportWindow::compute(0.0, 80.0, 500.0, 100_000, 1);
        assert_eq!(window.len(), 8);
    }

    #[test]
    fn test_window_clamped_to_total() {
        let window = ViewportWindow::compute(0.0, 80.0, 400.0, 3, 1);
        assert_eq!(window.range(), 0..3);

        let window = ViewportWindow::compute(79_600.0, 80.0, 400.0, 1000, 1);
        assert_eq!(window.range(), 995..1000);
    }

    #[test]
    fn test_window_past_end_is_empty() {
        let window = ViewportWindow::compute(10_000.0, 80.0, 400.0, 10, 1);
        assert!(window.is_empty());
        assert_eq!(window.start, 10);
    }

    #[test]
    fn test_window_empty_list() {
        let window = ViewportWindow::compute(0.0, 80.0, 400.0, 0, 1);
        assert!(window.is_empty());
    }

    #[test]
    fn test_window_without_buffer() {
        let window = ViewportWindow::compute(0.0, 80.0, 400.0, 1000, 0);
        assert_eq!(window.range(), 0..5);
    }

    #[test]
    fn test_window_degenerate_geometry() {
        assert!(ViewportWindow::compute(0.0, 0.0, 400.0, 1000, 1).is_empty());
        assert!(ViewportWindow::compute(0.0, -5.0, 400.0, 1000, 1).is_empty());
        assert!(ViewportWindow::compute(0.0, f64::NAN, 400.0, 1000, 1).is_empty());
        assert_eq!(
            ViewportWindow::compute(-300.0, 80.0, 400.0, 1000, 1).range(),
            0..6
        );
        assert_eq!(
            ViewportWindow::compute(0.0, 80.0, -1.0, 1000, 1).range(),
            0..1
        );
    }

    #[test]
    fn test_window_contains() {
        let window = ViewportWindow::new(3, 6);
        assert!(!window.contains(2));
        assert!(window.contains(3));
        assert!(window.contains(5));
        assert!(!window.contains(6));
    }
}
