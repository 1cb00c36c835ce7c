//! Power-enable key function of an AXP PMIC
use pmic_services::input::{InputAllocator, InputEndpoint};
use pmic_services::irq::{IrqChip, IrqReturn, Virq};
use pmic_services::platform::Platform;
use pmic_services::regmap::RegisterTransport;
use pmic_services::{info, Error, Pmic, PmicVariant};

use crate::attribute::{self, Attribute, ShowBuffer};
use crate::button::{ButtonConfig, PowerButton};
use crate::duration::{PekVariant, VariantProfile};
use crate::{gate, pm};

/// An attached power-enable key
///
/// Press-time attributes are always available. Key reporting is only set up when no platform
/// button device already reports the power key.
pub struct Pek<'a, T: RegisterTransport, C: IrqChip, E: InputEndpoint> {
    button: Option<PowerButton<'a, C, E>>,
    regmap: &'a T,
    variant: PmicVariant,
    profile: &'static VariantProfile,
}

impl<'a, T: RegisterTransport, C: IrqChip, E: InputEndpoint> Pek<'a, T, C, E> {
    /// Attach to the key function of `pmic`
    pub fn probe<A, P>(
        config: &ButtonConfig,
        device: PekVariant,
        pmic: Pmic<'a, T, C>,
        allocator: &A,
        platform: &P,
    ) -> Result<Self, Error<T::BusError>>
    where
        A: InputAllocator<Endpoint = E>,
        P: Platform,
    {
        let button = if gate::should_register_input(pmic.variant, platform) {
            Some(PowerButton::setup::<_, _, T::BusError>(
                config,
                pmic.irq_chip,
                allocator,
                platform,
            )?)
        } else {
            None
        };

        info!("Attached {}", device.name());
        Ok(Self {
            button,
            regmap: pmic.regmap,
            variant: pmic.variant,
            profile: device.profile(),
        })
    }

    /// Field layout in use
    pub fn profile(&self) -> &'static VariantProfile {
        self.profile
    }

    /// The key reporter, `None` if input registration was skipped
    pub fn button(&self) -> Option<&PowerButton<'a, C, E>> {
        self.button.as_ref()
    }

    /// Read an attribute, see [`attribute::show`]
    pub async fn show(&self, attr: Attribute) -> Result<ShowBuffer, Error<T::BusError>> {
        attribute::show(self.regmap, self.profile, attr).await
    }

    /// Write an attribute, see [`attribute::store`]
    pub async fn store(&self, attr: Attribute, input: &[u8]) -> Result<usize, Error<T::BusError>> {
        attribute::store(self.regmap, self.profile, attr, input).await
    }

    /// Dispatch an interrupt to the key reporter
    pub fn handle_irq(&self, virq: Virq) -> IrqReturn {
        match &self.button {
            Some(button) => button.handle_irq(virq),
            None => IrqReturn::None,
        }
    }

    /// Allow or forbid the power key to wake the system
    pub fn set_wake_armed(&mut self, armed: bool) {
        if let Some(button) = &mut self.button {
            button.set_wake_armed(armed);
        }
    }

    /// System suspend
    pub fn suspend(&mut self) {
        if let Some(button) = &mut self.button {
            button.suspend();
        }
    }

    /// System resume
    pub fn resume(&mut self) {
        if let Some(button) = &mut self.button {
            button.resume();
        }
    }

    /// Early resume, before interrupts are enabled, see [`pm::clear_wake_press`]
    pub async fn resume_noirq(&self) -> Result<(), Error<T::BusError>> {
        pm::clear_wake_press(self.variant, self.regmap)
            .await
            .map_err(Error::Transport)
    }

    /// System shutdown
    pub fn shutdown(&mut self) {
        if let Some(button) = &mut self.button {
            button.shutdown();
        }
    }
}
