//! Interrupt domain contract and scoped interrupt subscriptions
use crate::debug;

/// Interrupt number as listed in the platform resources of a device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HwIrq(pub u32);

/// Virtual interrupt number assigned by the interrupt domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Virq(pub u32);

/// Signal transition an interrupt line reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Low to high
    Rising,
    /// High to low
    Falling,
}

/// Result of handling an interrupt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IrqReturn {
    /// The interrupt did not belong to this handler
    None,
    /// The interrupt was handled
    Handled,
}

/// Interrupt domain of the parent device
///
/// Enable/disable calls nest: every `disable` must be balanced by an `enable` before the line
/// fires again. Wake marking nests the same way.
pub trait IrqChip {
    /// Error returned when a line cannot be requested
    type Error;

    /// Look up a named interrupt resource of the attaching device
    fn irq_by_name(&self, name: &str) -> Option<HwIrq>;
    /// Translate a resource interrupt into the virtual number handlers are keyed on
    fn map(&self, irq: HwIrq) -> Virq;
    /// Start delivering `virq` to the device's handler
    fn request(&self, virq: Virq, label: &'static str) -> Result<(), Self::Error>;
    /// Stop delivering `virq`
    fn free(&self, virq: Virq);
    /// Unmask the line
    fn enable(&self, virq: Virq);
    /// Mask the line
    fn disable(&self, virq: Virq);
    /// Keep the line armed as a wake source while the host sleeps
    fn enable_wake(&self, virq: Virq);
    /// Remove the line from the wake sources
    fn disable_wake(&self, virq: Virq);
}

/// A requested interrupt line, freed when dropped
pub struct Subscription<'a, C: IrqChip> {
    chip: &'a C,
    virq: Virq,
}

impl<'a, C: IrqChip> Subscription<'a, C> {
    /// Request `virq` from `chip`
    pub fn request(chip: &'a C, virq: Virq, label: &'static str) -> Result<Self, C::Error> {
        chip.request(virq, label)?;
        debug!("Requested IRQ {} ({})", virq.0, label);
        Ok(Self { chip, virq })
    }

    /// Virtual interrupt number of this subscription
    pub fn virq(&self) -> Virq {
        self.virq
    }

    /// Unmask the line
    pub fn enable(&self) {
        self.chip.enable(self.virq);
    }

    /// Mask the line
    pub fn disable(&self) {
        self.chip.disable(self.virq);
    }

    /// Arm the line as a wake source
    pub fn enable_wake(&self) {
        self.chip.enable_wake(self.virq);
    }

    /// Disarm the line as a wake source
    pub fn disable_wake(&self) {
        self.chip.disable_wake(self.virq);
    }
}

impl<C: IrqChip> Drop for Subscription<'_, C> {
    fn drop(&mut self) {
        debug!("Freeing IRQ {}", self.virq.0);
        self.chip.free(self.virq);
    }
}

#[cfg(test)]
mod test {
    extern crate std;
    use core::cell::RefCell;
    use std::vec::Vec;

    use super::*;

    #[derive(Default)]
    struct RecordingChip {
        busy: Option<Virq>,
        calls: RefCell<Vec<(&'static str, Virq)>>,
    }

    impl IrqChip for RecordingChip {
        type Error = ();

        fn irq_by_name(&self, _name: &str) -> Option<HwIrq> {
            None
        }

        fn map(&self, irq: HwIrq) -> Virq {
            Virq(irq.0)
        }

        fn request(&self, virq: Virq, _label: &'static str) -> Result<(), ()> {
            if self.busy == Some(virq) {
                return Err(());
            }
            self.calls.borrow_mut().push(("request", virq));
            Ok(())
        }

        fn free(&self, virq: Virq) {
            self.calls.borrow_mut().push(("free", virq));
        }

        fn enable(&self, virq: Virq) {
            self.calls.borrow_mut().push(("enable", virq));
        }

        fn disable(&self, virq: Virq) {
            self.calls.borrow_mut().push(("disable", virq));
        }

        fn enable_wake(&self, virq: Virq) {
            self.calls.borrow_mut().push(("enable_wake", virq));
        }

        fn disable_wake(&self, virq: Virq) {
            self.calls.borrow_mut().push(("disable_wake", virq));
        }
    }

    #[test]
    fn test_drop_frees_line() {
        let chip = RecordingChip::default();
        {
            let sub = Subscription::request(&chip, Virq(7), "test").unwrap();
            sub.disable();
            sub.enable();
        }

        assert_eq!(
            *chip.calls.borrow(),
            [
                ("request", Virq(7)),
                ("disable", Virq(7)),
                ("enable", Virq(7)),
                ("free", Virq(7))
            ]
        );
    }

    #[test]
    fn test_failed_request_frees_nothing() {
        let chip = RecordingChip {
            busy: Some(Virq(3)),
            ..Default::default()
        };

        assert!(Subscription::request(&chip, Virq(3), "test").is_err());
        assert!(chip.calls.borrow().is_empty());
    }
}
