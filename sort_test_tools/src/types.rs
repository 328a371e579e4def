use std::cmp::Ordering;
use std::fmt;

/// Very large stack value, ordered by the `i32` it was created from.
#[derive(Clone)]
pub struct OneKiloByte {
    values: [i32; 256],
}

impl OneKiloByte {
    pub fn new(val: i32) -> Self {
        let mut values = [0; 256];
        for (i, elem) in values.iter_mut().enumerate() {
            *elem = val.wrapping_add(i as i32);
        }

        Self { values }
    }

    fn key(&self) -> i32 {
        self.values[0]
    }
}

impl PartialEq for OneKiloByte {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for OneKiloByte {}

impl PartialOrd for OneKiloByte {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OneKiloByte {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Debug for OneKiloByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OneKiloByte({})", self.key())
    }
}

/// 16 byte `Copy` value with a comparatively expensive comparison, ordered by `x / y`.
#[derive(Clone, Copy, Debug)]
pub struct F128 {
    x: f64,
    y: f64,
}

impl F128 {
    pub fn new(val: i32) -> Self {
        let val_f = (val as f64) + (i32::MAX as f64) + 10.0;

        let x = val_f + 0.1;
        let y = val_f.ln();

        assert!(y < x);
        assert!(x.is_normal() && y.is_normal());

        Self { x, y }
    }
}

impl PartialEq for F128 {
    fn eq(&self, other: &Self) -> bool {
        (self.x / self.y) == (other.x / other.y)
    }
}

impl Eq for F128 {}

impl PartialOrd for F128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for F128 {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.x / self.y).total_cmp(&(other.x / other.y))
    }
}
