/// Logical movement keys understood by the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementKey {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Which movement keys are currently held.
///
/// Platform code flips these on press/release; the camera reads them once per frame.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MovementKeys {
    pub fn set(&mut self, key: MovementKey, pressed: bool) {
        match key {
            MovementKey::Forward => self.forward = pressed,
            MovementKey::Backward => self.backward = pressed,
            MovementKey::Left => self.left = pressed,
            MovementKey::Right => self.right = pressed,
            MovementKey::Up => self.up = pressed,
            MovementKey::Down => self.down = pressed,
        }
    }

    pub fn any(&self) -> bool {
        *self != Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
