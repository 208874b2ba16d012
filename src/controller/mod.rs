// CONTROLLER: Input, game logic, and update loop
pub mod input;
pub mod session;
pub mod frame_loop;

pub use input::{Intent, InputProcessor, KeyBindings};
pub use session::{FrameOutcome, GameSession};
pub use frame_loop::FrameTimer;
