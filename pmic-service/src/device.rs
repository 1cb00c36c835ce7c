//! Parent PMIC device handle
use crate::irq::IrqChip;
use crate::regmap::RegisterTransport;

/// PMIC family of the parent device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PmicVariant {
    /// AXP152
    Axp152,
    /// AXP202
    Axp202,
    /// AXP209
    Axp209,
    /// AXP221
    Axp221,
    /// AXP223
    Axp223,
    /// AXP288, found on Intel Bay Trail and Cherry Trail boards
    Axp288,
    /// AXP803
    Axp803,
    /// AXP806
    Axp806,
    /// AXP809
    Axp809,
    /// AXP813
    Axp813,
}

/// What a sub-function service borrows from its parent PMIC
///
/// The parent driver owns the register map and interrupt domain; sub-functions only hold
/// references for as long as they are attached.
pub struct Pmic<'a, T: RegisterTransport, C: IrqChip> {
    /// PMIC family
    pub variant: PmicVariant,
    /// Register map
    pub regmap: &'a T,
    /// Interrupt domain that demultiplexes the PMIC interrupt line
    pub irq_chip: &'a C,
}

impl<'a, T: RegisterTransport, C: IrqChip> Pmic<'a, T, C> {
    /// Create a new handle
    pub fn new(variant: PmicVariant, regmap: &'a T, irq_chip: &'a C) -> Self {
        Self {
            variant,
            regmap,
            irq_chip,
        }
    }
}

impl<T: RegisterTransport, C: IrqChip> Clone for Pmic<'_, T, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: RegisterTransport, C: IrqChip> Copy for Pmic<'_, T, C> {}
