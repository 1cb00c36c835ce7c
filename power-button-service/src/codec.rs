//! Conversion between press-duration fields and milliseconds
use crate::duration::DurationTable;

/// Position of the lowest bit of `mask`
pub const fn field_shift(mask: u8) -> u32 {
    if mask == 0 {
        0
    } else {
        mask.trailing_zeros()
    }
}

/// Extract the field selected by `mask` from a register value
pub const fn extract(value: u8, mask: u8) -> u8 {
    (value & mask) >> field_shift(mask)
}

/// Decode the field selected by `mask` into milliseconds
///
/// A field value missing from `table` is returned as-is, so a read never fails and still shows
/// what the hardware holds.
pub fn decode(value: u8, mask: u8, table: &DurationTable) -> u32 {
    let index = extract(value, mask);
    table
        .iter()
        .find(|entry| entry.index == index)
        .map_or(index as u32, |entry| entry.duration_ms)
}

/// Field value of the table entry closest to `requested_ms`
///
/// The table is scanned from its last entry to its first and only a strictly smaller error
/// replaces the current best, so a request halfway between two entries picks the one further
/// down the table. An exact match ends the scan.
pub fn nearest_index(requested_ms: u32, table: &DurationTable) -> u8 {
    let mut best_err = u32::MAX;
    let mut index = 0;

    for entry in table.iter().rev() {
        let err = entry.duration_ms.abs_diff(requested_ms);
        if err < best_err {
            best_err = err;
            index = entry.index;
        }

        if err == 0 {
            break;
        }
    }

    index
}

/// Encode `requested_ms` as the closest supported duration, shifted into the field at `mask`
///
/// Bits outside `mask` are never set, callers still have to merge the result into the register.
pub fn encode(requested_ms: u32, mask: u8, table: &DurationTable) -> u8 {
    (nearest_index(requested_ms, table) << field_shift(mask)) & mask
}
