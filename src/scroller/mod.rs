//! Scroller Module
//!
//! Viewport-windowed rendering for long lists: only rows that intersect the
//! visible area are materialized, whatever the length of the list.

mod surface;
mod virtual_scroller;
mod window;


pub use surface::{HeadlessSurface, ScrollSurface};
pub use virtual_scroller::VirtualScroller;
pub use window::ViewportWindow;
