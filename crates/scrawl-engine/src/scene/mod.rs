//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in an append-only list
//! - guarantee deterministic ordering (insertion order = draw order)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::SceneList;
