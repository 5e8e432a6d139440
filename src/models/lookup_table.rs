use std::fmt::Display;

/// Expected accumulated ADC reading per whole degree Celsius.
/// Index `i` is `i` degC, starting at 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    values: Vec<u16>,
}

impl LookupTable {
    pub fn new(values: Vec<u16>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[u16] {
        &self.values
    }

    /// Reading expected at `celsius`, if the table covers it.
    pub fn get(&self, celsius: usize) -> Option<u16> {
        self.values.get(celsius).copied()
    }

    /// Readings never increase with temperature. Firmware reverse lookups
    /// rely on this.
    pub fn is_monotonic(&self) -> bool {
        self.values.windows(2).all(|pair| pair[0] >= pair[1])
    }

    /// First temperature whose reading is higher than the one before it.
    pub fn first_rise(&self) -> Option<usize> {
        self.values
            .windows(2)
            .position(|pair| pair[0] < pair[1])
            .map(|index| index + 1)
    }
}

impl Display for LookupTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.values.first(), self.values.last()) {
            (Some(first), Some(last)) => write!(
                f,
                "<LookupTable | 0..{} degC, readings {}..{}>",
                self.values.len() - 1,
                first,
                last
            ),
            _ => write!(f, "<LookupTable | empty>"),
        }
    }
}
