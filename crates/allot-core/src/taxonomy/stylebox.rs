//! Morningstar Style Box axes.

closed_enum! {
    /// Market capitalisation bucket.
    pub enum Size ("size") {
        Large => "Large",
        Mid => "Mid",
        Small => "Small",
    }
}

closed_enum! {
    /// Investment style bucket.
    pub enum Style ("style") {
        Value => "Value",
        Blend => "Blend",
        Growth => "Growth",
    }
}

impl Size {
    /// Row of the 3x3 style box, top to bottom.
    #[must_use]
    pub const fn row(self) -> usize {
        self as usize
    }
}

impl Style {
    /// Column of the 3x3 style box, left to right.
    #[must_use]
    pub const fn column(self) -> usize {
        self as usize
    }
}
