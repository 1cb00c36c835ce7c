//! Platform services a PMIC function may query

/// Platform firmware and power-management core
pub trait Platform {
    /// Returns true if the firmware tables declare a present device with hardware ID `hid`
    ///
    /// A lookup that cannot be resolved reports the device as absent.
    fn firmware_declares(&self, hid: &str) -> bool;

    /// Declare whether the attaching device is able to wake the system
    fn set_wakeup_capable(&self, capable: bool);
}
