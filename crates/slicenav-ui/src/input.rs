// src/input.rs
//
// Synthetic pointer clicks. The external scoring application is driven by
// clicking at fixed coordinates; the user's own pointer must come back where
// it was, so every click is move → press/release → move back.

use anyhow::Result;
use enigo::{Button, Coordinate, Direction, Enigo, Mouse, Settings};

pub trait PointerSim {
    /// Click the left button at absolute screen position `(x, y)`, restoring
    /// the pointer to its prior position afterwards.
    fn click_at(&mut self, x: i32, y: i32) -> Result<()>;
}

pub struct EnigoPointer {
    enigo: Enigo,
}

impl EnigoPointer {
    pub fn new() -> Result<Self> {
        Ok(Self { enigo: Enigo::new(&Settings::default())? })
    }
}

impl PointerSim for EnigoPointer {
    fn click_at(&mut self, x: i32, y: i32) -> Result<()> {
        let (home_x, home_y) = self.enigo.location()?;
        self.enigo.move_mouse(x, y, Coordinate::Abs)?;
        self.enigo.button(Button::Left, Direction::Click)?;
        self.enigo.move_mouse(home_x, home_y, Coordinate::Abs)?;
        Ok(())
    }
}

/// Stand-in used when the platform backend can't start (e.g. no display
/// server). Clicks are logged and dropped; navigation keeps working.
pub struct NoopPointer;

impl PointerSim for NoopPointer {
    fn click_at(&mut self, x: i32, y: i32) -> Result<()> {
        crate::nav_log!("[click] no input backend — dropped click at ({x}, {y})");
        Ok(())
    }
}
