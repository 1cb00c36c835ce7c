//! Subset of the AXP register map used by the power-enable key
use bitflags::bitflags;

/// PEK key settings register
pub const PEK_KEY: u8 = 0x36;

/// Startup (power-on press time) field of [`PEK_KEY`]
pub const PEK_STARTUP_MASK: u8 = 0xc0;

/// Shutdown (forced power-off press time) field of [`PEK_KEY`]
pub const PEK_SHUTDOWN_MASK: u8 = 0x03;

/// First IRQ state register, one register per eight interrupts
pub const IRQ1_STATE: u8 = 0x48;

/// AXP288 interrupt number of the power key press
const AXP288_IRQ_POKN: u8 = 37;

/// State register holding the AXP288 power key interrupts
pub const AXP288_PEK_IRQ_STATE: u8 = IRQ1_STATE + AXP288_IRQ_POKN / 8;

bitflags! {
    /// Power key bits of [`AXP288_PEK_IRQ_STATE`], write one to clear
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Axp288PekIrq: u8 {
        /// Key held past the shutdown time
        const POKO = 1 << 2;
        /// Long press
        const POKL = 1 << 3;
        /// Short press
        const POKS = 1 << 4;
        /// Press (falling edge)
        const POKN = 1 << (AXP288_IRQ_POKN % 8);
        /// Release (rising edge)
        const POKP = 1 << 6;
    }
}
