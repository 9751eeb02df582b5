pub mod events;
pub mod frame;

#[cfg(feature = "visual")]
pub mod sdl_renderer;

use crate::command::Command;

pub use events::RenderEvent;
pub use frame::{layout_bars, Bar, Frame, Label, Rgb};

/// Core trait for drawing the session and collecting user input
pub trait Renderer {
    type Error;

    /// Handle a lifecycle event from the frame loop
    fn handle_event(&mut self, event: &RenderEvent) -> Result<(), Self::Error> {
        let _ = event;
        Ok(())
    }

    /// Commands pressed since the last call, in press order
    fn poll_commands(&mut self) -> Vec<Command>;

    /// Draw and present one frame
    fn draw(&mut self, frame: &Frame) -> Result<(), Self::Error>;

    /// Check if the user wants to quit
    fn should_quit(&mut self) -> bool {
        false
    }
}
