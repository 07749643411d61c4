// Event-driven controllers, one per screen. Each screen owns its
// collection state and paints through a DisplaySurface; nothing here
// touches a real page.

pub mod announcements;
pub mod attendance;
pub mod dashboard;
pub mod leave;

use crate::errors::{AppError, render};
use crate::models::page::PageWindow;
use crate::surface::{DisplaySurface, SurfaceUpdate};
use crate::templates_structs::PaginationTemplate;

/// Paint the pagination strip and the record-info line every screen
/// shares. The strip is cleared when the filtered view fits on one
/// page; the record info stays up even for an empty view.
pub(crate) fn paint_pagination(
    window: &PageWindow,
    surface: &mut dyn DisplaySurface,
) -> Result<(), AppError> {
    let markup = if window.visible {
        render(&PaginationTemplate::from_window(window))?
    } else {
        String::new()
    };
    surface.apply(SurfaceUpdate { container: "pagination", markup });
    surface.apply(SurfaceUpdate { container: "recordInfo", markup: window.summary() });
    Ok(())
}
