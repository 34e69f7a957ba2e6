//! Binary size suffixes used in the size column (e.g. `131072K`).

/// One-letter size suffix. Both cases are accepted and mean powers of 1024.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    Bytes,
    Kibi,
    Mebi,
    Gibi,
}

impl SizeUnit {
    /// Parse the (possibly empty) suffix captured after the size literal.
    pub fn from_suffix(s: &str) -> Option<Self> {
        match s {
            "" => Some(Self::Bytes),
            "k" | "K" => Some(Self::Kibi),
            "m" | "M" => Some(Self::Mebi),
            "g" | "G" => Some(Self::Gibi),
            _ => None,
        }
    }

    pub fn multiplier(self) -> u64 {
        match self {
            Self::Bytes => 1,
            Self::Kibi => 1 << 10,
            Self::Mebi => 1 << 20,
            Self::Gibi => 1 << 30,
        }
    }

    /// Scale a size literal to bytes, truncating any fractional byte.
    pub fn to_bytes(self, value: f64) -> u128 {
        let bytes = value * self.multiplier() as f64;
        // `as` saturates; only absurd literals get there.
        if bytes >= u128::MAX as f64 {
            log::warn!("size {} x {} does not fit in u128", value, self.multiplier());
        }
        bytes as u128
    }
}
