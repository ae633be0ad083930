//! Pictograph Placement Engine WASM Module
//!
//! Resolves where the two props of a movement-notation pictograph sit: the
//! end orientation of each motion, the direction the props are separated
//! in, and the displacement vector for that direction.

pub mod api;
pub mod models;
pub mod placement;

// Re-export commonly used types
pub use models::*;
pub use placement::{BeatPlacement, Offset, PlacementConfig, PlacementError, PlacementResult};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A logger may already be installed by the host page
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Placement engine WASM module initialized");
}
