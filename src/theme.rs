//! Centralized color theme for the application.
//!
//! This module provides all colors used throughout the viewer and the
//! transform widget. Modify values here to change the color scheme.

use bevy::prelude::Color;

// ============================================================================
// Viewport
// ============================================================================

/// Dark grey viewport background
pub const CLEAR_COLOR: Color = Color::srgb(0.13, 0.13, 0.13);

/// Semi-transparent grey grid lines on the ground plane
pub const GRID_COLOR: Color = Color::srgba(0.5, 0.5, 0.5, 0.3);

/// Matte ground plane
pub const GROUND_COLOR: Color = Color::srgb(0.22, 0.22, 0.24);

// ============================================================================
// Widget Handle Colors
// ============================================================================

/// X axis (arrows, rings, scale cubes)
pub const AXIS_X_COLOR: Color = Color::srgb_u8(255, 85, 85);

/// Y axis (arrows, rings, scale cubes)
pub const AXIS_Y_COLOR: Color = Color::srgb_u8(85, 255, 85);

/// Z axis (arrows, rings, scale cubes)
pub const AXIS_Z_COLOR: Color = Color::srgb_u8(85, 85, 255);

/// Center marker and uniform scale cube
pub const CENTER_COLOR: Color = Color::srgb_u8(255, 255, 85);

/// XY plane quad
pub const PLANE_XY_COLOR: Color = Color::srgb_u8(153, 153, 255);

/// XZ plane quad
pub const PLANE_XZ_COLOR: Color = Color::srgb_u8(153, 255, 153);

/// YZ plane quad
pub const PLANE_YZ_COLOR: Color = Color::srgb_u8(255, 153, 153);

// ============================================================================
// Selection
// ============================================================================

/// Green emissive glow applied to the picked mesh while selected
pub const HIGHLIGHT_EMISSIVE: bevy::prelude::LinearRgba = bevy::prelude::LinearRgba {
    red: 0.0,
    green: 0.7,
    blue: 0.0,
    alpha: 1.0,
};
