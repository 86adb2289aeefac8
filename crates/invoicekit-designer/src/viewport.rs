//! Viewport and coordinate transformation for the template canvas.
//!
//! Converts between screen coordinates (pointer events, relative to the host
//! surface) and canvas coordinates (unscaled page units). The page's top-left
//! corner sits at `origin` on screen and is scaled by `zoom`.

use invoicekit_settings::EditorSettings;

use crate::model::Point;

/// Page dimensions in canvas units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    origin: Point,
    page: PageSize,
    zoom_min: f64,
    zoom_max: f64,
}

impl Viewport {
    /// Viewport at the configured default zoom.
    ///
    /// Settings that fail validation are replaced by the defaults.
    pub fn new(settings: &EditorSettings) -> Self {
        if settings.validate().is_err() {
            return Self::new(&EditorSettings::default());
        }
        let mut viewport = Self {
            zoom: 1.0,
            origin: Point::new(0.0, 0.0),
            page: PageSize::new(settings.page_width, settings.page_height),
            zoom_min: settings.zoom_min,
            zoom_max: settings.zoom_max,
        };
        viewport.set_zoom(settings.default_zoom);
        viewport
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to the configured range.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(self.zoom_min, self.zoom_max);
        }
    }

    /// Zooms in by multiplying current zoom by 1.2.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * 1.2);
    }

    /// Zooms out by dividing current zoom by 1.2.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / 1.2);
    }

    pub fn reset_zoom(&mut self) {
        self.set_zoom(1.0);
    }

    /// Screen position of the page's top-left corner.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn set_origin(&mut self, x: f64, y: f64) {
        self.origin = Point::new(x, y);
    }

    pub fn page(&self) -> PageSize {
        self.page
    }

    /// Converts a screen point to canvas coordinates, clamped to the page.
    ///
    /// ```text
    /// canvas_x = clamp((screen_x - origin_x) / zoom, 0, page_width)
    /// canvas_y = clamp((screen_y - origin_y) / zoom, 0, page_height)
    /// ```
    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        let x = (screen.x - self.origin.x) / self.zoom;
        let y = (screen.y - self.origin.y) / self.zoom;
        Point::new(x.clamp(0.0, self.page.width), y.clamp(0.0, self.page.height))
    }

    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        Point::new(
            canvas.x * self.zoom + self.origin.x,
            canvas.y * self.zoom + self.origin.y,
        )
    }
}

/// Round a coordinate to the nearest multiple of `grid`.
///
/// Halfway values round away from zero.
pub fn snap_to_grid(value: f64, grid: f64) -> f64 {
    if grid <= 0.0 {
        return value;
    }
    (value / grid).round() * grid
}
