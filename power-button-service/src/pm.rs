//! Suspend, resume and shutdown handling of the power key
use pmic_services::input::InputEndpoint;
use pmic_services::irq::IrqChip;
use pmic_services::regmap::RegisterTransport;
use pmic_services::{debug, PmicVariant};

use crate::button::{Parked, PowerButton};
use crate::regs::{Axp288PekIrq, AXP288_PEK_IRQ_STATE};

impl<C: IrqChip, E: InputEndpoint> PowerButton<'_, C, E> {
    /// Allow or forbid the power key to wake the system from the next suspend on
    pub fn set_wake_armed(&mut self, armed: bool) {
        self.wake_armed = armed;
    }

    /// Returns true if the power key will wake the system
    pub fn wake_armed(&self) -> bool {
        self.wake_armed
    }

    /// Returns true between [`Self::suspend`] and [`Self::resume`]
    pub fn is_suspended(&self) -> bool {
        self.parked.is_some()
    }

    /// Prepare both edge interrupts for system sleep
    ///
    /// Interrupts nested behind the PMIC line are not quiesced by the interrupt core on suspend,
    /// so lines that may not wake the system are masked here. Suspending twice does nothing.
    pub fn suspend(&mut self) {
        if self.parked.is_some() {
            debug!("Power key already suspended");
            return;
        }

        let parked = if self.wake_armed {
            self.press.enable_wake();
            self.release.enable_wake();
            Parked::Wake
        } else {
            self.press.disable();
            self.release.disable();
            Parked::Disabled
        };

        debug!("Power key suspended, wake: {}", parked == Parked::Wake);
        self.parked = Some(parked);
    }

    /// Undo whatever the last [`Self::suspend`] did
    ///
    /// The wake decision taken at suspend is reverted even if arming changed in between.
    pub fn resume(&mut self) {
        match self.parked.take() {
            Some(Parked::Wake) => {
                self.press.disable_wake();
                self.release.disable_wake();
            }
            Some(Parked::Disabled) => {
                self.press.enable();
                self.release.enable();
            }
            None => debug!("Power key resumed without suspend"),
        }
    }

    /// Leave the interrupts in their sleep configuration before power is removed
    pub fn shutdown(&mut self) {
        self.suspend();
    }
}

/// Clear the press latched by a wake-up key press
///
/// Must run after the early, interrupt-less resume phase and before interrupts are re-enabled.
/// On the AXP288 the press that woke the system stays latched and would otherwise reach the
/// host as a key press once interrupts are back. Other variants need nothing.
pub async fn clear_wake_press<T: RegisterTransport>(variant: PmicVariant, regmap: &T) -> Result<(), T::BusError> {
    if variant != PmicVariant::Axp288 {
        return Ok(());
    }

    regmap.write(AXP288_PEK_IRQ_STATE, Axp288PekIrq::POKN.bits()).await
}
