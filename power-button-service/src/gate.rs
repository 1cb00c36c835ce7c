//! Decide whether the power key should be reported by this service at all
use pmic_services::platform::Platform;
use pmic_services::{info, PmicVariant};

/// ACPI hardware IDs of platform button drivers that already report the power key on AXP288
/// boards
pub const SOC_BUTTON_HIDS: [&str; 2] = ["INTCFD9", "ACPI0011"];

/// Returns true if the input device should be registered
///
/// On AXP288 boards the power key may also be wired to a GPIO described by a platform button
/// device, registering both would report every press twice.
pub fn should_register_input<P: Platform>(variant: PmicVariant, platform: &P) -> bool {
    if variant != PmicVariant::Axp288 {
        return true;
    }

    match SOC_BUTTON_HIDS.into_iter().find(|hid| platform.firmware_declares(hid)) {
        Some(hid) => {
            info!("Power key is reported by {}, not registering input device", hid);
            false
        }
        None => true,
    }
}
