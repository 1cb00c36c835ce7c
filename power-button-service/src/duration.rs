//! Press duration tables and per-device field layouts
use crate::regs::{PEK_SHUTDOWN_MASK, PEK_STARTUP_MASK};

/// A press duration the PMIC supports and the field value selecting it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DurationEntry {
    /// Field value, before shifting into place
    pub index: u8,
    /// Press duration in milliseconds
    pub duration_ms: u32,
}

impl DurationEntry {
    /// Create a new entry
    pub const fn new(duration_ms: u32, index: u8) -> Self {
        Self { index, duration_ms }
    }
}

/// Every value a two-bit field can hold, in table order
pub type DurationTable = [DurationEntry; 4];

/// Startup times of the AXP20x family, whose field does not count up with the duration
pub static STARTUP_TIMES: DurationTable = [
    DurationEntry::new(128, 0),
    DurationEntry::new(1000, 2),
    DurationEntry::new(3000, 1),
    DurationEntry::new(2000, 3),
];

/// Startup times of the AXP221 and later
pub static AXP221_STARTUP_TIMES: DurationTable = [
    DurationEntry::new(128, 0),
    DurationEntry::new(1000, 1),
    DurationEntry::new(2000, 2),
    DurationEntry::new(3000, 3),
];

/// Shutdown times, common to all supported devices
pub static SHUTDOWN_TIMES: DurationTable = [
    DurationEntry::new(4000, 0),
    DurationEntry::new(6000, 1),
    DurationEntry::new(8000, 2),
    DurationEntry::new(10000, 3),
];

/// Where the press durations of one device family live and how they are encoded
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VariantProfile {
    /// Startup duration table
    pub startup: &'static DurationTable,
    /// Startup field mask
    pub startup_mask: u8,
    /// Shutdown duration table
    pub shutdown: &'static DurationTable,
    /// Shutdown field mask
    pub shutdown_mask: u8,
}

/// AXP20x profile
pub static AXP20X_PROFILE: VariantProfile = VariantProfile {
    startup: &STARTUP_TIMES,
    startup_mask: PEK_STARTUP_MASK,
    shutdown: &SHUTDOWN_TIMES,
    shutdown_mask: PEK_SHUTDOWN_MASK,
};

/// AXP221 profile
pub static AXP221_PROFILE: VariantProfile = VariantProfile {
    startup: &AXP221_STARTUP_TIMES,
    startup_mask: PEK_STARTUP_MASK,
    shutdown: &SHUTDOWN_TIMES,
    shutdown_mask: PEK_SHUTDOWN_MASK,
};

/// Power-enable key device types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PekVariant {
    /// `axp20x-pek`
    Axp20x,
    /// `axp221-pek`
    Axp221,
}

impl PekVariant {
    /// All device types
    pub const ALL: [PekVariant; 2] = [PekVariant::Axp20x, PekVariant::Axp221];

    /// Device name the parent PMIC driver registers the key function under
    pub fn name(self) -> &'static str {
        match self {
            PekVariant::Axp20x => "axp20x-pek",
            PekVariant::Axp221 => "axp221-pek",
        }
    }

    /// Match a device name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.name() == name)
    }

    /// Field layout for this device type
    pub fn profile(self) -> &'static VariantProfile {
        match self {
            PekVariant::Axp20x => &AXP20X_PROFILE,
            PekVariant::Axp221 => &AXP221_PROFILE,
        }
    }
}
