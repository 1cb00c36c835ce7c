//! Host input subsystem contract

/// Input key code, numbered as in the Linux input event codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyCode(pub u16);

impl KeyCode {
    /// Power key
    pub const POWER: KeyCode = KeyCode(116);
}

/// Logical input device that key events are reported through
///
/// `report_key` and `sync` are called from interrupt context. Implementations must not block
/// or allocate there.
pub trait InputEndpoint {
    /// Error returned when the device cannot be published
    type Error;

    /// Declare that this device can report `key`
    fn set_key_capability(&mut self, key: KeyCode);
    /// Publish the device to the host
    fn register(&mut self) -> Result<(), Self::Error>;
    /// Report a key state change
    fn report_key(&self, key: KeyCode, pressed: bool);
    /// Mark the end of an event frame
    fn sync(&self);
}

/// Allocator for input devices
pub trait InputAllocator {
    /// Device type handed out
    type Endpoint: InputEndpoint;

    /// Allocate an unpublished device, `None` when out of memory
    fn allocate(&self, name: &'static str, phys: &'static str) -> Option<Self::Endpoint>;
}
