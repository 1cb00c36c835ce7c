//! AXP power-enable key (PEK) service
//!
//! Turns the debounced press and release interrupts of the PMIC power key into power key
//! events for the host, and exposes the PMIC's startup and shutdown press times as decimal
//! millisecond attributes.

#![no_std]
#![warn(missing_docs)]

pub mod attribute;
pub mod button;
pub mod codec;
pub mod duration;
pub mod gate;
pub mod pek;
pub mod pm;
pub mod regs;

#[cfg(test)]
mod mock;

pub use attribute::Attribute;
pub use button::{ButtonConfig, PowerButton};
pub use duration::{PekVariant, VariantProfile};
pub use pek::Pek;
