//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1600.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Camera-distance divisor for the widget's uniform scale. The widget is
/// rescaled every frame to `distance / WIDGET_SCALE_DIVISOR` so it subtends a
/// roughly constant screen size.
pub const WIDGET_SCALE_DIVISOR: f32 = 18.0;

/// Seconds after a drag ends during which a trailing click must not deselect
pub const CLICK_SUPPRESSION_SECS: f32 = 0.1;

/// Smallest scale factor a drag may produce (prevents degenerate/inverted scale)
pub const MIN_SCALE_FACTOR: f32 = 0.01;

/// Sensitivity of the screen-space translation fallback (world units per pixel)
pub const FALLBACK_DRAG_SENSITIVITY: f32 = 0.01;

/// Opacity of the reference axes shown in rotate and scale modes
pub const REFERENCE_AXIS_OPACITY: f32 = 0.3;
