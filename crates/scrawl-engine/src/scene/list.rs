use super::DrawCmd;

/// Append-only, ordered collection of draw commands.
///
/// Unlike a per-frame draw list, `SceneList` is retained: entries accumulate
/// for the lifetime of the session and are iterated once per frame in
/// insertion order. There is no removal, reordering, or compaction; memory
/// grows with every inserted command until the whole list is dropped. This
/// is a deliberate scope limit, not an oversight.
///
/// Performance characteristics:
/// - `push()` is O(1) amortized
/// - `iter()` is a plain slice walk, no per-frame allocation
#[derive(Debug, Default)]
pub struct SceneList {
    items: Vec<DrawCmd>,
}

impl SceneList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a draw command, taking ownership. Never fails.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates commands in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter()
    }

    /// Returns entries in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::shapes::point::PointCmd;

    fn point(x: f32, y: f32) -> DrawCmd {
        DrawCmd::Point(PointCmd::new(Vec2::new(x, y), Color::BLACK, 8.0))
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut scene = SceneList::new();
        scene.push(point(0.1, 0.0));
        scene.push(point(0.2, 0.0));
        scene.push(point(0.3, 0.0));

        let xs: Vec<f32> = scene
            .iter()
            .map(|cmd| match cmd {
                DrawCmd::Point(p) => p.pos.x,
            })
            .collect();
        assert_eq!(xs, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn size_grows_monotonically() {
        let mut scene = SceneList::new();
        let mut prev = scene.len();
        for i in 0..32 {
            scene.push(point(i as f32 / 32.0, 0.0));
            assert!(scene.len() > prev);
            prev = scene.len();
        }
        assert_eq!(scene.len(), 32);
    }

    #[test]
    fn iteration_does_not_mutate() {
        let mut scene = SceneList::new();
        scene.push(point(0.0, 0.0));
        let before = scene.len();
        for _ in scene.iter() {}
        for _ in scene.iter() {}
        assert_eq!(scene.len(), before);
    }
}
