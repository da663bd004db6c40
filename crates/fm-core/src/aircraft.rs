//! Aircraft types and the set of types a part fits.
//!
//! The on-disk representation is a one-byte mask (one bit per type, bit 0
//! unused).  Inside the kernel the mask is only ever handled as an
//! [`AcTypeSet`]; the compatibility test is set intersection.

use std::fmt;
use std::str::FromStr;

use crate::FmError;

/// A helicopter type a part may be fitted to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum AcType {
    Mi26  = 0b1000_0000,
    Mi17  = 0b0100_0000,
    Mi8T  = 0b0010_0000,
    Ka32  = 0b0001_0000,
    As350 = 0b0000_1000,
    As355 = 0b0000_0100,
    R44   = 0b0000_0010,
}

impl AcType {
    /// Every type, in descending bit order.
    pub const ALL: [AcType; 7] = [
        AcType::Mi26,
        AcType::Mi17,
        AcType::Mi8T,
        AcType::Ka32,
        AcType::As350,
        AcType::As355,
        AcType::R44,
    ];

    #[inline]
    pub fn bit(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            AcType::Mi26  => "Mi-26",
            AcType::Mi17  => "Mi-17",
            AcType::Mi8T  => "Mi-8T",
            AcType::Ka32  => "Ka-32",
            AcType::As350 => "AS350",
            AcType::As355 => "AS355",
            AcType::R44   => "R44",
        }
    }
}

impl fmt::Display for AcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AcType {
    type Err = FmError;

    /// Accepts the canonical names and the variant designations found in
    /// fleet registers (`"MI26T"`, `"MI171"`, `"171A2"`, `"MI8MTV"`, …).
    /// Case, dashes, spaces and Cyrillic `МИ`/`КА` prefixes are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | ' ' | '_'))
            .flat_map(char::to_uppercase)
            .map(|c| match c {
                'М' => 'M',
                'И' => 'I',
                'К' => 'K',
                'А' => 'A',
                'Т' => 'T',
                'Е' => 'E',
                'В' => 'V',
                other => other,
            })
            .collect();

        match key.as_str() {
            "MI26" | "MI26T" => Ok(AcType::Mi26),
            "MI17" | "MI171" | "171A2" | "MI171E" => Ok(AcType::Mi17),
            "MI8T" | "MI8MTV" | "MI8" | "MI8AMT" => Ok(AcType::Mi8T),
            "KA32" | "KA32T" => Ok(AcType::Ka32),
            "AS350" => Ok(AcType::As350),
            "AS355" => Ok(AcType::As355),
            "R44" => Ok(AcType::R44),
            _ => Err(FmError::UnknownAcType(s.to_owned())),
        }
    }
}

// ── AcTypeSet ─────────────────────────────────────────────────────────────────

/// The set of aircraft types a part fits.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcTypeSet(u8);

impl AcTypeSet {
    pub const EMPTY: AcTypeSet = AcTypeSet(0);

    /// Bits that correspond to a known [`AcType`].
    const KNOWN: u8 = 0b1111_1110;

    /// Build from a raw mask.  Bits that name no known type are dropped.
    #[inline]
    pub fn from_bits(bits: u8) -> Self {
        AcTypeSet(bits & Self::KNOWN)
    }

    /// `true` if `bits` carries bits outside the known types.
    #[inline]
    pub fn has_unknown_bits(bits: u8) -> bool {
        bits & !Self::KNOWN != 0
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn insert(&mut self, ty: AcType) {
        self.0 |= ty.bit();
    }

    #[inline]
    pub fn contains(self, ty: AcType) -> bool {
        self.0 & ty.bit() != 0
    }

    /// `true` if the two sets share at least one aircraft type.
    #[inline]
    pub fn intersects(self, other: AcTypeSet) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = AcType> {
        AcType::ALL.into_iter().filter(move |t| self.contains(*t))
    }
}

impl FromIterator<AcType> for AcTypeSet {
    fn from_iter<I: IntoIterator<Item = AcType>>(iter: I) -> Self {
        let mut set = AcTypeSet::EMPTY;
        for ty in iter {
            set.insert(ty);
        }
        set
    }
}

impl fmt::Display for AcTypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, ty) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{ty}")?;
        }
        f.write_str("}")
    }
}
