//! Component condition flags.

/// Technical condition of a part, as three independent flags.
///
/// The persisted form is a 3-bit mask: bit 2 = operational, bit 1 = needs
/// maintenance, bit 0 = counters active.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Condition {
    /// Serviceable; only operational parts can serve as replacements.
    pub operational:       bool,
    pub needs_maintenance: bool,
    /// Usage counters are running (part is installed and accruing hours).
    pub counters_active:   bool,
}

impl Condition {
    /// Installed and serviceable (`0b111`).
    pub const SERVICEABLE: Condition = Condition::from_bits(0b111);
    /// Unserviceable but still registered as operational stock (`0b100`).
    pub const BROKEN: Condition = Condition::from_bits(0b100);
    /// Serviceable, not installed (`0b110`).
    pub const NOT_INSTALLED: Condition = Condition::from_bits(0b110);
    /// Parts donor: counters only (`0b001`).
    pub const DONOR: Condition = Condition::from_bits(0b001);

    pub const fn from_bits(bits: u8) -> Self {
        Self {
            operational:       bits & 0b100 != 0,
            needs_maintenance: bits & 0b010 != 0,
            counters_active:   bits & 0b001 != 0,
        }
    }

    pub const fn bits(self) -> u8 {
        (self.operational as u8) << 2
            | (self.needs_maintenance as u8) << 1
            | self.counters_active as u8
    }
}
