//! PMIC Service Interface Exports
//!
//! Contracts for the collaborators a PMIC sub-function service is attached to: the register
//! map of the parent PMIC, its interrupt domain, the host input subsystem and the platform.

#![no_std]
#![warn(missing_docs)]

pub mod device;
pub mod fmt;
pub mod input;
pub mod irq;
pub mod platform;
pub mod regmap;

pub use device::{Pmic, PmicVariant};
pub use irq::Edge;

/// Resource that could not be acquired while attaching a service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resource {
    /// Interrupt line for the given edge, either missing from the platform resources or
    /// refused by the interrupt domain
    Irq(Edge),
    /// Host input device
    InputDevice,
}

/// Error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Malformed request, or the hardware rejected the write
    InvalidInput,
    /// A required resource is missing or busy
    ResourceUnavailable(Resource),
    /// Allocation failed
    ResourceExhausted,
    /// Register transport error
    Transport(E),
}
