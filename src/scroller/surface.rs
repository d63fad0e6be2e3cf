//! Scroll container abstraction.

use std::collections::BTreeMap;
use std::marker::PhantomData;

/// The scroll container a `VirtualScroller` drives.
///
/// In a browser this is the scrolling element with an inner track; rows are
/// absolutely positioned children of the track.
pub trait ScrollSurface {
    /// Materialized row handle
    type Row;

    /// Current scroll position from the top of the track.
    fn scroll_offset(&self) -> f64;

    /// Height of the visible area.
    fn viewport_height(&self) -> f64;

    /// Moves the scroll position. The surface may clamp it to its track.
    fn set_scroll_offset(&mut self, offset: f64);

    /// Sets the full height of the scrollable track.
    fn set_track_height(&mut self, height: f64);

    /// Attaches a freshly rendered row at `top`.
    fn mount(&mut self, index: usize, row: &mut Self::Row, top: f64);

    /// Detaches a row that left the window.
    fn unmount(&mut self, index: usize, row: Self::Row);
}

/// In-memory surface that behaves like a browser scroll container: the
/// scroll offset is clamped to `[0, track_height - viewport_height]`.
///
/// Records where each row was placed, which makes it usable for tests and
/// for computing pages without a display.
#[derive(Debug, Clone)]
pub struct HeadlessSurface<T> {
    scroll_offset: f64,
    viewport_height: f64,
    track_height: f64,
    placed: BTreeMap<usize, f64>,
    mounts: u64,
    unmounts: u64,
    _row: PhantomData<fn() -> T>,
}

impl<T> HeadlessSurface<T> {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            scroll_offset: 0.0,
            viewport_height,
            track_height: 0.0,
            placed: BTreeMap::new(),
            mounts: 0,
            unmounts: 0,
            _row: PhantomData,
        }
    }

    /// Simulates the user dragging the scrollbar.
    pub fn scroll_to(&mut self, offset: f64) {
        self.scroll_offset = self.clamp_offset(offset);
    }

    /// Simulates a window resize.
    pub fn resize(&mut self, viewport_height: f64) {
        self.viewport_height = viewport_height;
        self.scroll_offset = self.clamp_offset(self.scroll_offset);
    }

    pub fn track_height(&self) -> f64 {
        self.track_height
    }

    /// Top offset of every attached row, by index.
    pub fn placed(&self) -> &BTreeMap<usize, f64> {
        &self.placed
    }

    /// Total number of rows ever mounted.
    pub fn mounts(&self) -> u64 {
        self.mounts
    }

    /// Total number of rows ever unmounted.
    pub fn unmounts(&self) -> u64 {
        self.unmounts
    }

    fn clamp_offset(&self, offset: f64) -> f64 {
        let max = (self.track_height - self.viewport_height).max(0.0);
        offset.clamp(0.0, max)
    }
}

impl<T> ScrollSurface for HeadlessSurface<T> {
    type Row = T;

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_to(offset);
    }

    fn set_track_height(&mut self, height: f64) {
        self.track_height = height.max(0.0);
        self.scroll_offset = self.clamp_offset(self.scroll_offset);
    }

    fn mount(&mut self, index: usize, _row: &mut T, top: f64) {
        self.placed.insert(index, top);
        self.mounts += 1;
    }

    fn unmount(&mut self, index: usize, _row: T) {
        self.placed.remove(&index);
        self.unmounts += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_clamps_scroll_offset() {
        let mut surface: HeadlessSurface<()> = HeadlessSurface::new(400.0);
        surface.set_track_height(1_000.0);

        surface.scroll_to(5_000.0);
        assert_eq!(surface.scroll_offset(), 600.0);

        surface.scroll_to(-10.0);
        assert_eq!(surface.scroll_offset(), 0.0);
    }

    #[test]
    fn test_headless_shrinking_track_pulls_offset_back() {
        let mut surface: HeadlessSurface<()> = HeadlessSurface::new(400.0);
        surface.set_track_height(10_000.0);
        surface.scroll_to(9_000.0);

        surface.set_track_height(1_000.0);

        assert_eq!(surface.scroll_offset(), 600.0);
    }

    #[test]
    fn test_headless_track_shorter_than_viewport() {
        let mut surface: HeadlessSurface<()> = HeadlessSurface::new(400.0);
        surface.set_track_height(100.0);
        surface.scroll_to(50.0);

        assert_eq!(surface.scroll_offset(), 0.0);
    }

    #[test]
    fn test_headless_records_placement() {
        let mut surface: HeadlessSurface<String> = HeadlessSurface::new(400.0);
        let mut row = "row".to_string();

        surface.mount(3, &mut row, 240.0);
        assert_eq!(surface.placed().get(&3), Some(&240.0));

        surface.unmount(3, row);
        assert!(surface.placed().is_empty());
        assert_eq!(surface.mounts(), 1);
        assert_eq!(surface.unmounts(), 1);
    }
}
