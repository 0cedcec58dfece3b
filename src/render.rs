//! Rendering boundary: the editor requests redraws, a sink draws them.

use crate::grid::GridSurface;

/// Display sink for the editor's grid.
///
/// Implementations own the actual drawing (canvas, terminal, test recorder);
/// the editor only signals what needs repainting. Sinks are stateless with
/// respect to anatomy: they read cell states off the grid surface.
pub trait Renderer {
    /// Redraw the whole grid surface.
    fn render_full_grid(&mut self, grid: &GridSurface);

    /// Redraw transient highlight overlays only.
    fn render_highlights(&mut self, grid: &GridSurface);
}

/// Sink that discards every draw request, for headless use.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render_full_grid(&mut self, _grid: &GridSurface) {}

    fn render_highlights(&mut self, _grid: &GridSurface) {}
}
