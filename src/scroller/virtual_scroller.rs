//! Virtual Scroller Module
//!
//! Materializes only the rows of a long list that intersect the viewport.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use crate::config::ScrollerOptions;
use crate::scroller::{ScrollSurface, ViewportWindow};

// == Virtual Scroller ==
/// Windowed list renderer over a `ScrollSurface`.
///
/// Rows are produced by `render_row(index)` and tracked by index. After every
/// event the set of materialized indices equals the current
/// [`ViewportWindow`]. The list length comes from `total_count`, which is
/// queried on every update because the backing list may change.
///
/// Geometry is not validated. A row height that is not a positive finite
/// number simply produces an empty window.
pub struct VirtualScroller<S, R, C>
where
    S: ScrollSurface,
    R: FnMut(usize) -> S::Row,
    C: Fn() -> usize,
{
    surface: S,
    options: ScrollerOptions,
    render_row: R,
    total_count: C,
    /// Materialized rows by list index
    rows: BTreeMap<usize, S::Row>,
    window: ViewportWindow,
}

impl<S, R, C> VirtualScroller<S, R, C>
where
    S: ScrollSurface,
    R: FnMut(usize) -> S::Row,
    C: Fn() -> usize,
{
    // == Constructor ==
    /// Creates the scroller and renders the initial window.
    pub fn new(surface: S, options: ScrollerOptions, render_row: R, total_count: C) -> Self {
        let mut scroller = Self {
            surface,
            options,
            render_row,
            total_count,
            rows: BTreeMap::new(),
            window: ViewportWindow::default(),
        };
        scroller.update();
        scroller
    }

    // == Events ==
    /// Call after the surface scrolled.
    pub fn on_scroll(&mut self) {
        self.update();
    }

    /// Call after the viewport changed size.
    pub fn on_resize(&mut self) {
        self.update();
    }

    /// Call after the backing list changed.
    ///
    /// Indices do not survive a refresh: every materialized row is dropped
    /// and the window is rendered again from scratch.
    pub fn refresh(&mut self) {
        let rows = std::mem::take(&mut self.rows);
        for (index, row) in rows {
            self.surface.unmount(index, row);
        }
        self.update();
    }

    // == Scroll To Index ==
    /// Jumps so that `index` is the first visible row.
    ///
    /// Out-of-range indices are clamped to the last row; on an empty list
    /// the scroll offset goes to zero.
    pub fn scroll_to_index(&mut self, index: usize) {
        let total = (self.total_count)();
        let target = index.min(total.saturating_sub(1));
        let offset = self.row_top(target);
        self.surface.set_scroll_offset(offset);
        self.update();
    }

    // == Accessors ==
    pub fn window(&self) -> ViewportWindow {
        self.window
    }

    /// Materialized indices in ascending order.
    pub fn materialized_indices(&self) -> Vec<usize> {
        self.rows.keys().copied().collect()
    }

    pub fn materialized_count(&self) -> usize {
        self.rows.len()
    }

    /// The materialized row for `index`, if it is in the window.
    pub fn row(&self, index: usize) -> Option<&S::Row> {
        self.rows.get(&index)
    }

    /// Top offset at which `index` is placed.
    pub fn row_top(&self, index: usize) -> f64 {
        index as f64 * self.options.row_height
    }

    pub fn total_count(&self) -> usize {
        (self.total_count)()
    }

    pub fn options(&self) -> &ScrollerOptions {
        &self.options
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable surface access, e.g. to move the scroll position before
    /// calling `on_scroll`.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn update(&mut self) {
        let total = (self.total_count)();
        let row_height = self.options.row_height;

        self.surface.set_track_height(total as f64 * row_height);

        let window = ViewportWindow::compute(
            self.surface.scroll_offset(),
            row_height,
            self.surface.viewport_height(),
            total,
            self.options.buffer_rows,
        );

        let stale: Vec<usize> = self
            .rows
            .keys()
            .copied()
            .filter(|index| !window.contains(*index))
            .collect();
        for index in stale {
            if let Some(row) = self.rows.remove(&index) {
                self.surface.unmount(index, row);
            }
        }

        for index in window.range() {
            if let Entry::Vacant(slot) = self.rows.entry(index) {
                let mut row = (self.render_row)(index);
                self.surface.mount(index, &mut row, index as f64 * row_height);
                slot.insert(row);
            }
        }

        self.window = window;
    }
}

impl<S, R, C> fmt::Debug for VirtualScroller<S, R, C>
where
    S: ScrollSurface + fmt::Debug,
    R: FnMut(usize) -> S::Row,
    C: Fn() -> usize,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualScroller")
            .field("surface", &self.surface)
            .field("options", &self.options)
            .field("window", &self.window)
            .field("materialized", &self.rows.len())
            .finish()
    }
}
