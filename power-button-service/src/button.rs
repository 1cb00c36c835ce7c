//! Power key edge interrupts to input key events

use pmic_services::input::{InputAllocator, InputEndpoint, KeyCode};
use pmic_services::irq::{Edge, IrqChip, IrqReturn, Subscription, Virq};
use pmic_services::platform::Platform;
use pmic_services::{error, info, warn, Error, Resource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Names the power key is published and wired under.
pub struct ButtonConfig {
    /// Input device name
    pub name: &'static str,
    /// Input device physical path
    pub phys: &'static str,
    /// Interrupt resource of the debounced rising edge (release)
    pub release_irq: &'static str,
    /// Interrupt resource of the debounced falling edge (press)
    pub press_irq: &'static str,
    /// Label the release interrupt is requested under
    pub release_label: &'static str,
    /// Label the press interrupt is requested under
    pub press_label: &'static str,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            name: "axp20x-pek",
            phys: "m1kbd/input2",
            release_irq: "PEK_DBR",
            press_irq: "PEK_DBF",
            release_label: "axp20x-pek-dbr",
            press_label: "axp20x-pek-dbf",
        }
    }
}

/// How the edge interrupts were left by the last suspend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum Parked {
    /// Armed as wake sources
    Wake,
    /// Masked
    Disabled,
}

/// The power key as an input device
///
/// The key is active low: the PMIC raises its debounced falling-edge interrupt on press and its
/// rising-edge interrupt on release. Each interrupt is translated on its own, no state is kept
/// between them.
pub struct PowerButton<'a, C: IrqChip, E: InputEndpoint> {
    // Field order is drop order: lines are freed before the input device goes away
    pub(crate) press: Subscription<'a, C>,
    pub(crate) release: Subscription<'a, C>,
    input: E,
    pub(crate) wake_armed: bool,
    pub(crate) parked: Option<Parked>,
}

impl<'a, C: IrqChip, E: InputEndpoint> PowerButton<'a, C, E> {
    /// Acquire both edge interrupts and publish the input device
    ///
    /// Anything acquired before a failing step is released again before returning.
    pub fn setup<A, P, X>(config: &ButtonConfig, chip: &'a C, allocator: &A, platform: &P) -> Result<Self, Error<X>>
    where
        A: InputAllocator<Endpoint = E>,
        P: Platform,
    {
        let release_virq = resolve::<_, X>(chip, config.release_irq, Edge::Rising)?;
        let press_virq = resolve::<_, X>(chip, config.press_irq, Edge::Falling)?;

        let mut input = allocator.allocate(config.name, config.phys).ok_or_else(|| {
            error!("Failed to allocate input device");
            Error::<X>::ResourceExhausted
        })?;
        input.set_key_capability(KeyCode::POWER);

        let release = subscribe::<_, X>(chip, release_virq, config.release_label, Edge::Rising)?;
        let press = subscribe::<_, X>(chip, press_virq, config.press_label, Edge::Falling)?;

        input.register().map_err(|_| {
            error!("Can't register input device");
            Error::<X>::ResourceUnavailable(Resource::InputDevice)
        })?;

        platform.set_wakeup_capable(true);
        info!(
            "Power key ready, press IRQ {}, release IRQ {}",
            press_virq.0, release_virq.0
        );

        Ok(Self {
            press,
            release,
            input,
            wake_armed: false,
            parked: None,
        })
    }

    /// Which edge `virq` reports, if it is one of ours
    pub fn edge(&self, virq: Virq) -> Option<Edge> {
        if virq == self.press.virq() {
            Some(Edge::Falling)
        } else if virq == self.release.virq() {
            Some(Edge::Rising)
        } else {
            None
        }
    }

    /// Interrupt handler for both edge lines
    ///
    /// Safe to call from any interrupt context, it never blocks.
    pub fn handle_irq(&self, virq: Virq) -> IrqReturn {
        let pressed = match self.edge(virq) {
            Some(Edge::Falling) => true,
            Some(Edge::Rising) => false,
            None => {
                warn!("Unexpected IRQ {}", virq.0);
                return IrqReturn::None;
            }
        };

        self.input.report_key(KeyCode::POWER, pressed);
        self.input.sync();
        IrqReturn::Handled
    }

    /// Input device the key is reported through
    pub fn input(&self) -> &E {
        &self.input
    }
}

fn resolve<C: IrqChip, X>(chip: &C, name: &str, edge: Edge) -> Result<Virq, Error<X>> {
    match chip.irq_by_name(name) {
        Some(irq) => Ok(chip.map(irq)),
        None => {
            error!("No {} IRQ resource", name);
            Err(Error::ResourceUnavailable(Resource::Irq(edge)))
        }
    }
}

fn subscribe<'a, C: IrqChip, X>(
    chip: &'a C,
    virq: Virq,
    label: &'static str,
    edge: Edge,
) -> Result<Subscription<'a, C>, Error<X>> {
    Subscription::request(chip, virq, label).map_err(|_| {
        error!("Failed to request {} IRQ#{}", label, virq.0);
        Error::ResourceUnavailable(Resource::Irq(edge))
    })
}
