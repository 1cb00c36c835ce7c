//! Recording collaborators for unit tests
extern crate std;

use core::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::vec::Vec;

use pmic_services::input::{InputAllocator, InputEndpoint, KeyCode};
use pmic_services::irq::{HwIrq, IrqChip, Virq};
use pmic_services::platform::Platform;
use pmic_services::regmap::{merge_bits, RegisterTransport};

/// Offset between resource and virtual interrupt numbers handed out by [`MockIrqChip`]
pub const VIRQ_BASE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

pub struct MockRegmap {
    regs: RefCell<[u8; 256]>,
    writes: RefCell<Vec<(u8, u8)>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl MockRegmap {
    pub fn new() -> Self {
        Self {
            regs: RefCell::new([0; 256]),
            writes: RefCell::new(Vec::new()),
            fail_reads: Cell::new(false),
            fail_writes: Cell::new(false),
        }
    }

    pub fn set(&self, reg: u8, value: u8) {
        self.regs.borrow_mut()[reg as usize] = value;
    }

    pub fn get(&self, reg: u8) -> u8 {
        self.regs.borrow()[reg as usize]
    }

    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.writes.borrow().clone()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl RegisterTransport for MockRegmap {
    type BusError = BusFault;

    async fn read(&self, reg: u8) -> Result<u8, BusFault> {
        if self.fail_reads.get() {
            return Err(BusFault);
        }
        Ok(self.get(reg))
    }

    async fn write(&self, reg: u8, value: u8) -> Result<(), BusFault> {
        if self.fail_writes.get() {
            return Err(BusFault);
        }
        self.writes.borrow_mut().push((reg, value));
        self.set(reg, value);
        Ok(())
    }

    async fn update_bits(&self, reg: u8, mask: u8, value: u8) -> Result<(), BusFault> {
        let current = self.read(reg).await?;
        self.write(reg, merge_bits(current, mask, value)).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrqCall {
    Request(Virq),
    Free(Virq),
    Enable(Virq),
    Disable(Virq),
    EnableWake(Virq),
    DisableWake(Virq),
}

/// Observable state of one interrupt line
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub requested: bool,
    pub disable_depth: u32,
    pub wake_depth: u32,
}

pub struct MockIrqChip {
    names: Vec<(&'static str, u32)>,
    refuse: Cell<Option<Virq>>,
    calls: RefCell<Vec<IrqCall>>,
    lines: RefCell<BTreeMap<u32, Line>>,
}

impl MockIrqChip {
    /// Chip exposing the given named resources
    pub fn new(names: &[(&'static str, u32)]) -> Self {
        Self {
            names: names.to_vec(),
            refuse: Cell::new(None),
            calls: RefCell::new(Vec::new()),
            lines: RefCell::new(BTreeMap::new()),
        }
    }

    /// Chip exposing the two power key edges, release on 0 and press on 1
    pub fn pek() -> Self {
        Self::new(&[("PEK_DBR", 0), ("PEK_DBF", 1)])
    }

    pub fn refuse(&self, virq: Virq) {
        self.refuse.set(Some(virq));
    }

    pub fn calls(&self) -> Vec<IrqCall> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn line(&self, virq: Virq) -> Line {
        self.lines.borrow().get(&virq.0).copied().unwrap_or_default()
    }

    fn update(&self, call: IrqCall, virq: Virq, f: impl FnOnce(&mut Line)) {
        self.calls.borrow_mut().push(call);
        f(self.lines.borrow_mut().entry(virq.0).or_default());
    }
}

impl IrqChip for MockIrqChip {
    type Error = ();

    fn irq_by_name(&self, name: &str) -> Option<HwIrq> {
        self.names
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, irq)| HwIrq(*irq))
    }

    fn map(&self, irq: HwIrq) -> Virq {
        Virq(irq.0 + VIRQ_BASE)
    }

    fn request(&self, virq: Virq, _label: &'static str) -> Result<(), ()> {
        if self.refuse.get() == Some(virq) {
            return Err(());
        }
        self.update(IrqCall::Request(virq), virq, |line| line.requested = true);
        Ok(())
    }

    fn free(&self, virq: Virq) {
        self.update(IrqCall::Free(virq), virq, |line| line.requested = false);
    }

    fn enable(&self, virq: Virq) {
        self.update(IrqCall::Enable(virq), virq, |line| line.disable_depth -= 1);
    }

    fn disable(&self, virq: Virq) {
        self.update(IrqCall::Disable(virq), virq, |line| line.disable_depth += 1);
    }

    fn enable_wake(&self, virq: Virq) {
        self.update(IrqCall::EnableWake(virq), virq, |line| line.wake_depth += 1);
    }

    fn disable_wake(&self, virq: Virq) {
        self.update(IrqCall::DisableWake(virq), virq, |line| line.wake_depth -= 1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCall {
    Capability(KeyCode),
    Register,
    Key(KeyCode, bool),
    Sync,
    Release,
}

pub type InputLog = Rc<RefCell<Vec<InputCall>>>;

pub struct MockEndpoint {
    log: InputLog,
    refuse_register: bool,
}

impl InputEndpoint for MockEndpoint {
    type Error = ();

    fn set_key_capability(&mut self, key: KeyCode) {
        self.log.borrow_mut().push(InputCall::Capability(key));
    }

    fn register(&mut self) -> Result<(), ()> {
        if self.refuse_register {
            return Err(());
        }
        self.log.borrow_mut().push(InputCall::Register);
        Ok(())
    }

    fn report_key(&self, key: KeyCode, pressed: bool) {
        self.log.borrow_mut().push(InputCall::Key(key, pressed));
    }

    fn sync(&self) {
        self.log.borrow_mut().push(InputCall::Sync);
    }
}

impl Drop for MockEndpoint {
    fn drop(&mut self) {
        self.log.borrow_mut().push(InputCall::Release);
    }
}

#[derive(Default)]
pub struct MockInput {
    pub log: InputLog,
    pub exhausted: bool,
    pub refuse_register: bool,
}

impl MockInput {
    pub fn calls(&self) -> Vec<InputCall> {
        self.log.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.log.borrow_mut().clear();
    }
}

impl InputAllocator for MockInput {
    type Endpoint = MockEndpoint;

    fn allocate(&self, _name: &'static str, _phys: &'static str) -> Option<MockEndpoint> {
        if self.exhausted {
            return None;
        }
        Some(MockEndpoint {
            log: self.log.clone(),
            refuse_register: self.refuse_register,
        })
    }
}

#[derive(Default)]
pub struct MockPlatform {
    pub declared: Vec<&'static str>,
    pub wakeup_capable: Cell<bool>,
}

impl MockPlatform {
    pub fn declaring(hids: &[&'static str]) -> Self {
        Self {
            declared: hids.to_vec(),
            ..Default::default()
        }
    }
}

impl Platform for MockPlatform {
    fn firmware_declares(&self, hid: &str) -> bool {
        self.declared.iter().any(|declared| *declared == hid)
    }

    fn set_wakeup_capable(&self, capable: bool) {
        self.wakeup_capable.set(capable);
    }
}
