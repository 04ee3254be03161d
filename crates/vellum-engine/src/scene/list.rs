use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Commands are painted in the order they were pushed; a later command draws
/// over an earlier one. `clear()` keeps the allocation for the next frame.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a draw command.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    #[test]
    fn push_preserves_paint_order() {
        let mut list = DrawList::new();
        let red = Color::from_srgb_u8(255, 0, 0);
        list.push_polygon(vec![Vec2::zero(); 3], red);
        list.push_line_loop(vec![Vec2::zero(); 3], 2.0, red);
        assert!(matches!(list.items()[0], DrawCmd::Polygon(_)));
        assert!(matches!(list.items()[1], DrawCmd::LineLoop(_)));
    }

    #[test]
    fn clear_empties_the_list() {
        let mut list = DrawList::new();
        list.push_polygon(vec![Vec2::zero(); 3], Color::transparent());
        list.clear();
        assert!(list.is_empty());
    }
}
