/// One rectangular part type and the quantity of it that remains to be cut.
#[derive(Debug, Clone, PartialEq)]
pub struct PartDemand {
    pub id: usize,
    pub label: String,
    /// Width in inches
    pub width: f32,
    /// Height in inches
    pub height: f32,
    /// Outstanding number of pieces
    pub quantity: usize,
}

impl PartDemand {
    pub fn new(id: usize, label: impl Into<String>, width: f32, height: f32, quantity: usize) -> Self {
        Self {
            id,
            label: label.into(),
            width,
            height,
            quantity,
        }
    }

    /// Area of a single piece in in²
    pub fn piece_area(&self) -> f32 {
        self.width * self.height
    }

    pub fn max_dim(&self) -> f32 {
        f32::max(self.width, self.height)
    }

    /// Parts with non-positive dimensions or zero quantity are never packed
    /// and contribute nothing to area totals.
    pub fn is_packable(&self) -> bool {
        self.quantity > 0 && self.width > 0.0 && self.height > 0.0
    }
}
