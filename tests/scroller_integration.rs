//! Integration Tests for the Virtual Scroller
//!
//! Drives a scroller over a surface that mimics a DOM list: rows are
//! elements that know their own `top` style.

use std::cell::RefCell;
use std::rc::Rc;

use krk_components::{ScrollSurface, ScrollerOptions, ViewportWindow, VirtualScroller};

/// A rendered list row, like a `<div>` with an absolute position.
#[derive(Debug)]
struct RowElement {
    label: String,
    top: Option<f64>,
}

/// Scroll container holding attached row elements by label.
#[derive(Debug, Default)]
struct ListContainer {
    scroll_top: f64,
    client_height: f64,
    track_height: f64,
    attached: Vec<(usize, String, f64)>,
}

impl ScrollSurface for ListContainer {
    type Row = RowElement;

    fn scroll_offset(&self) -> f64 {
        self.scroll_top
    }

    fn viewport_height(&self) -> f64 {
        self.client_height
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_top = offset;
    }

    fn set_track_height(&mut self, height: f64) {
        self.track_height = height;
    }

    fn mount(&mut self, index: usize, row: &mut RowElement, top: f64) {
        row.top = Some(top);
        self.attached.push((index, row.label.clone(), top));
    }

    fn unmount(&mut self, index: usize, _row: RowElement) {
        self.attached.retain(|(i, _, _)| *i != index);
    }
}

fn container(client_height: f64) -> ListContainer {
    ListContainer {
        client_height,
        ..ListContainer::default()
    }
}

fn attached_indices(surface: &ListContainer) -> Vec<usize> {
    let mut indices: Vec<usize> = surface.attached.iter().map(|(i, _, _)| *i).collect();
    indices.sort_unstable();
    indices
}

#[test]
fn test_thousand_projects_at_top_and_scrolled() {
    let projects: Vec<String> = (0..1000).map(|i| format!("KRK-{:04}", i)).collect();
    let list = projects.clone();

    let mut scroller = VirtualScroller::new(
        container(400.0),
        ScrollerOptions::with_row_height(80.0),
        |index| RowElement {
            label: list[index].clone(),
            top: None,
        },
        || projects.len(),
    );

    assert_eq!(scroller.window(), ViewportWindow::new(0, 6));
    assert_eq!(attached_indices(scroller.surface()), (0..6).collect::<Vec<_>>());
    assert_eq!(scroller.surface().track_height, 80_000.0);

    scroller.surface_mut().scroll_top = 8000.0;
    scroller.on_scroll();

    assert_eq!(scroller.window(), ViewportWindow::new(100, 106));
    assert_eq!(
        attached_indices(scroller.surface()),
        (100..106).collect::<Vec<_>>()
    );

    let row = scroller.row(103).unwrap();
    assert_eq!(row.label, "KRK-0103");
    assert_eq!(row.top, Some(103.0 * 80.0));
}

#[test]
fn test_filtered_list_refresh() {
    let items = Rc::new(RefCell::new(
        (0..500).map(|i| format!("Persil {}", i)).collect::<Vec<_>>(),
    ));
    let render_items = items.clone();
    let count_items = items.clone();

    let mut scroller = VirtualScroller::new(
        container(240.0),
        ScrollerOptions::with_row_height(40.0),
        move |index| RowElement {
            label: render_items.borrow()[index].clone(),
            top: None,
        },
        move || count_items.borrow().len(),
    );
    assert_eq!(scroller.materialized_count(), 7);

    // Filter down to every tenth item; the old index 3 now means item 30
    items.borrow_mut().retain(|label| {
        label
            .trim_start_matches("Persil ")
            .parse::<usize>()
            .map(|n| n % 10 == 0)
            .unwrap_or(false)
    });
    scroller.refresh();

    assert_eq!(scroller.surface().track_height, 50.0 * 40.0);
    assert_eq!(scroller.row(3).unwrap().label, "Persil 30");
    assert_eq!(attached_indices(scroller.surface()), (0..7).collect::<Vec<_>>());
}

#[test]
fn test_scroll_to_index_positions_row_at_top() {
    let mut scroller = VirtualScroller::new(
        container(400.0),
        ScrollerOptions::with_row_height(50.0),
        |index| RowElement {
            label: index.to_string(),
            top: None,
        },
        || 200,
    );

    scroller.scroll_to_index(42);

    assert_eq!(scroller.surface().scroll_top, 2100.0);
    assert_eq!(scroller.window().start, 42);
    assert_eq!(scroller.row(42).unwrap().top, Some(2100.0));

    // Past the end targets the last row
    scroller.scroll_to_index(10_000);
    assert_eq!(scroller.surface().scroll_top, 199.0 * 50.0);
    assert_eq!(scroller.window().range(), 199..200);
}
