//! Startup and shutdown press-time attributes
use core::fmt::Write;

use heapless::String;
use pmic_services::regmap::RegisterTransport;
use pmic_services::{debug, Error};

use crate::codec;
use crate::duration::{DurationTable, VariantProfile};
use crate::regs::PEK_KEY;

/// Capacity of a rendered attribute value, enough for any `u32` and a newline
pub const SHOW_CAPACITY: usize = 12;

/// Rendered attribute value
pub type ShowBuffer = String<SHOW_CAPACITY>;

/// Operator-visible press-time settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Attribute {
    /// How long the key must be held to power the system on
    Startup,
    /// How long the key must be held before the PMIC forces power off
    Shutdown,
}

impl Attribute {
    /// All attributes
    pub const ALL: [Attribute; 2] = [Attribute::Startup, Attribute::Shutdown];

    /// Attribute file name
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Startup => "startup",
            Attribute::Shutdown => "shutdown",
        }
    }

    /// Look up an attribute by file name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.name() == name)
    }

    fn field(self, profile: &VariantProfile) -> (&'static DurationTable, u8) {
        match self {
            Attribute::Startup => (profile.startup, profile.startup_mask),
            Attribute::Shutdown => (profile.shutdown, profile.shutdown_mask),
        }
    }
}

/// Read the current setting as decimal milliseconds followed by a newline
pub async fn show<T: RegisterTransport>(
    regmap: &T,
    profile: &VariantProfile,
    attr: Attribute,
) -> Result<ShowBuffer, Error<T::BusError>> {
    let value = regmap.read(PEK_KEY).await.map_err(Error::Transport)?;
    let (table, mask) = attr.field(profile);

    let mut out = ShowBuffer::new();
    // Cannot overflow, see SHOW_CAPACITY
    let _ = writeln!(out, "{}", codec::decode(value, mask, table));
    Ok(out)
}

/// Set the closest supported duration to the decimal milliseconds in `input`
///
/// Returns the number of bytes consumed, which is always all of `input`.
pub async fn store<T: RegisterTransport>(
    regmap: &T,
    profile: &VariantProfile,
    attr: Attribute,
    input: &[u8],
) -> Result<usize, Error<T::BusError>> {
    let Some(requested) = parse_ms(input) else {
        return Err(Error::InvalidInput);
    };
    let (table, mask) = attr.field(profile);
    let field = codec::encode(requested, mask, table);

    debug!(
        "{}: requested {} ms, setting {} ms",
        attr.name(),
        requested,
        codec::decode(field, mask, table)
    );

    // The bus error is not reported, a rejected write is invalid input to the caller
    match regmap.update_bits(PEK_KEY, mask, field).await {
        Ok(()) => Ok(input.len()),
        Err(_) => Err(Error::InvalidInput),
    }
}

fn parse_ms(input: &[u8]) -> Option<u32> {
    core::str::from_utf8(input).ok()?.trim().parse().ok()
}
