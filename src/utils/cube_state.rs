//! Placeholder face-color state.
//!
//! This bookkeeping is intentionally disconnected from the 3D scene: the
//! "read from scene" and "refresh from screen" operations return fixed
//! placeholder colors and are never synchronized with actual layer turns.

use std::fmt;

/// One of the six outward faces of the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Up,
    Down,
    Left,
    Right,
    Front,
    Back,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Left,
        Face::Right,
        Face::Front,
        Face::Back,
    ];

    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }

    fn index(self) -> usize {
        match self {
            Face::Up => 0,
            Face::Down => 1,
            Face::Left => 2,
            Face::Right => 3,
            Face::Front => 4,
            Face::Back => 5,
        }
    }

    /// Placeholder starting color of this face (0xRRGGBB).
    fn initial_color(self) -> u32 {
        match self {
            Face::Up => 0xffffff,    // white
            Face::Down => 0xffff00,  // yellow
            Face::Left => 0x00ff00,  // green
            Face::Right => 0x0000ff, // blue
            Face::Front => 0xff0000, // red
            Face::Back => 0xff8000,  // orange
        }
    }
}

/// Nine stickers per face, six faces, colors as 0xRRGGBB.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubeState {
    faces: [[u32; 9]; 6],
}

impl Default for CubeState {
    fn default() -> Self {
        let mut faces = [[0u32; 9]; 6];
        for face in Face::ALL {
            faces[face.index()] = [face.initial_color(); 9];
        }
        Self { faces }
    }
}

impl CubeState {
    pub fn face_colors(&self, face: Face) -> &[u32; 9] {
        &self.faces[face.index()]
    }

    pub fn update_face_colors(&mut self, face: Face, colors: [u32; 9]) {
        self.faces[face.index()] = colors;
    }

    /// Overwrite every face with the colors "seen on screen".
    /// The screen read is a placeholder and always reports white.
    pub fn refresh_from_screen(&mut self) {
        for face in Face::ALL {
            self.update_face_colors(face, face_colors_from_screen(face));
        }
    }
}

impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, face) in Face::ALL.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}:", face.letter())?;
            for color in self.face_colors(*face) {
                write!(f, " {color:06x}")?;
            }
        }
        Ok(())
    }
}

/// Read the current cube state.
/// Placeholder: no state is ever recovered from the 3D scene, so this
/// always returns the fixed starting state.
pub fn read_current_state() -> CubeState {
    CubeState::default()
}

/// Placeholder screen read for one face.
fn face_colors_from_screen(_face: Face) -> [u32; 9] {
    [0xffffff; 9]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_has_fixed_placeholder_colors() {
        let state = CubeState::default();
        assert_eq!(state.face_colors(Face::Up), &[0xffffff; 9]);
        assert_eq!(state.face_colors(Face::Front), &[0xff0000; 9]);
        assert_eq!(state.face_colors(Face::Back), &[0xff8000; 9]);
    }

    #[test]
    fn read_current_state_ignores_the_scene() {
        // Two reads are identical no matter what happened in between.
        assert_eq!(read_current_state(), read_current_state());
        assert_eq!(read_current_state(), CubeState::default());
    }

    #[test]
    fn refresh_from_screen_reports_all_white() {
        let mut state = CubeState::default();
        state.update_face_colors(Face::Down, [0x123456; 9]);
        state.refresh_from_screen();
        for face in Face::ALL {
            assert_eq!(state.face_colors(face), &[0xffffff; 9]);
        }
    }

    #[test]
    fn display_renders_one_line_per_face() {
        let text = CubeState::default().to_string();
        assert_eq!(text.lines().count(), 6);
        assert!(text.lines().next().unwrap().starts_with("U:"));
    }
}
