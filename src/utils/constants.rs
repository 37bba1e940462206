// Constants used in the game, structured into modules.

/// 3D camera
pub mod camera_3d_constants {
    pub const CAMERA_3D_INITIAL_X: f32 = 4.0;
    pub const CAMERA_3D_INITIAL_Y: f32 = 4.0;
    pub const CAMERA_3D_INITIAL_Z: f32 = 4.0;

    // Keyboard orbit speed (radians per second) and zoom speed (units per second).
    pub const CAMERA_3D_ORBIT_SPEED: f32 = 2.0;
    pub const CAMERA_3D_ZOOM_SPEED: f32 = 4.0;

    // Radius range for the camera's orbit.
    pub const CAMERA_3D_MIN_RADIUS: f32 = 3.0;
    pub const CAMERA_3D_MAX_RADIUS: f32 = 20.0;

    // Mouse drag orbit sensitivity (radians per pixel).
    pub const CAMERA_3D_DRAG_SENSITIVITY: f32 = 0.005;

    // Scroll wheel zoom (units per line / per pixel).
    pub const CAMERA_3D_WHEEL_LINE_ZOOM: f32 = 0.5;
    pub const CAMERA_3D_WHEEL_PIXEL_ZOOM: f32 = 0.01;

    // Pitch stays short of the poles so look_at keeps a valid up vector.
    pub const CAMERA_3D_MAX_PITCH: f32 = 1.45;
}

/// Cube geometry and sticker colors
pub mod cube_constants {
    use bevy::prelude::Color;

    // Side length of a sticker quad and the gap between neighboring cubelets.
    pub const STICKER_SIZE: f32 = 0.9;
    pub const STICKER_GAP: f32 = 0.1;

    // Lattice spacing: one cubelet per unit step.
    pub const CUBE_SPACING: f32 = STICKER_SIZE + STICKER_GAP;

    // Sticker colors in face order +X, -X, +Y, -Y, +Z, -Z.
    pub const FACE_COLORS: [Color; 6] = [
        Color::srgb(1.0, 0.0, 0.0),  // right, red
        Color::srgb(1.0, 0.5, 0.0),  // left, orange
        Color::srgb(1.0, 1.0, 0.0),  // up, yellow
        Color::srgb(1.0, 1.0, 1.0),  // down, white
        Color::srgb(0.0, 1.0, 0.0),  // front, green
        Color::srgb(0.0, 0.0, 1.0),  // back, blue
    ];

    // Inward-facing stickers share one neutral color.
    pub const INTERIOR_COLOR: Color = Color::srgb(0.157, 0.157, 0.157);

    // How far the hovered sticker is mixed toward white.
    pub const HOVER_LIGHTEN: f32 = 0.35;
}

/// Generic game constants
pub mod game_constants {
    // A layer turn animates over this long.
    pub const ROTATION_DURATION_SECS: f32 = 0.3;

    // A face normal component must exceed this to pick the rotation axis.
    pub const NORMAL_AXIS_THRESHOLD: f32 = 0.9;

    pub const QUARTER_TURN_RAD: f32 = std::f32::consts::FRAC_PI_2;
}

/// Touch gestures
pub mod touch_constants {
    // Swipe orbit sensitivity (radians per pixel).
    pub const SWIPE_SENSITIVITY: f32 = 0.005;

    // Pinch zoom sensitivity (units per pixel of pinch distance change).
    pub const PINCH_SENSITIVITY: f32 = 0.02;
}
