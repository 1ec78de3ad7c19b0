//! Per-slide offset storage.
//!
//! The position table is the only mutable shared state in the engine: the
//! transition engine writes committed offsets here, the gesture interpreter
//! reads them to layer live drag deltas on top, and the host render surface
//! observes the results through `TransformHost::apply_transform`.
//!
//! Steady-state invariant: the current slide sits at offset 0, its
//! immediate neighbors at ±width, and everything further away is parked a
//! full width off-screen in the direction it last travelled.

/// Stored horizontal offsets (px) for every physical slide, plus the
/// display width shared by all slides.
#[derive(Debug, Clone)]
pub struct PositionTable {
    offsets: Vec<f32>,
    width: f32,
}

impl PositionTable {
    /// Create a table for `len` slides, all at offset 0.
    pub fn new(len: usize, width: f32) -> Self {
        Self {
            offsets: vec![0.0; len],
            width,
        }
    }

    /// Rebuild the table after setup or a viewport resize. Offsets reset
    /// to 0; the caller re-stacks every slide immediately afterwards.
    pub fn reset(&mut self, len: usize, width: f32) {
        self.offsets.clear();
        self.offsets.resize(len, 0.0);
        self.width = width;
    }

    /// Number of physical slides tracked.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Shared slide width in px.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Current stored offset of a physical slide.
    pub fn offset(&self, physical: usize) -> f32 {
        self.offsets[physical]
    }

    /// Record a committed offset for a physical slide. Live drag deltas
    /// bypass this and go straight to the render surface.
    pub fn set_offset(&mut self, physical: usize, offset: f32) {
        self.offsets[physical] = offset;
    }
}

#[cfg(test)]
mod tests {
    use super::PositionTable;

    #[test]
    fn reset_resizes_and_clears() {
        let mut table = PositionTable::new(3, 300.0);
        table.set_offset(1, -300.0);
        table.reset(5, 200.0);
        assert_eq!(table.len(), 5);
        assert_eq!(table.width(), 200.0);
        for physical in 0..5 {
            assert_eq!(table.offset(physical), 0.0);
        }
    }

    #[test]
    fn stores_offsets_per_slide() {
        let mut table = PositionTable::new(3, 300.0);
        table.set_offset(0, -300.0);
        table.set_offset(2, 300.0);
        assert_eq!(table.offset(0), -300.0);
        assert_eq!(table.offset(1), 0.0);
        assert_eq!(table.offset(2), 300.0);
    }
}
