use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Commands are kept in insertion order; renderers replay them one draw per
/// command. `clear()` keeps allocated capacity, so a list reused across
/// frames stops allocating once warmed.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Returns commands in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::Color;

    #[test]
    fn keeps_insertion_order() {
        let mut list = DrawList::new();
        list.push_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        list.push_line(Vec2::zero(), Vec2::new(5.0, 0.0), 2.0, Color::WHITE);
        list.push_circle(Vec2::zero(), 3.0, 1.0, Color::WHITE);
        list.push_text("hi", Vec2::zero(), 0.5, Color::WHITE);

        let kinds: Vec<&str> = list
            .iter()
            .map(|c| match c {
                DrawCmd::Rect(_) => "rect",
                DrawCmd::Line(_) => "line",
                DrawCmd::Circle(_) => "circle",
                DrawCmd::Text(_) => "text",
            })
            .collect();
        assert_eq!(kinds, ["rect", "line", "circle", "text"]);
    }

    #[test]
    fn clear_empties_the_list() {
        let mut list = DrawList::new();
        list.push_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        assert_eq!(list.len(), 1);
        list.clear();
        assert!(list.is_empty());
    }
}
