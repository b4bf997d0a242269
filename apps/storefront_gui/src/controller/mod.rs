//! Controller layer: user intents collected per frame and the reducer that applies them.

pub mod events;
pub mod reducer;
