use crate::scene::shapes::point::PointCmd;

/// Renderer-agnostic draw command.
///
/// The primitive set is closed and dispatched by matching, not by trait
/// objects. Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - add a matching renderer under `render::shapes::*`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Point(PointCmd),
}
