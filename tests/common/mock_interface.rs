//! Mock interface implementation for testing the LIS3DHH driver

#[cfg(feature = "async")]
use device_driver::AsyncRegisterInterface;
use device_driver::RegisterInterface;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

/// Register addresses used by the mock
#[allow(dead_code)]
pub mod addr {
    pub const WHO_AM_I: u8 = 0x0F;
    pub const CTRL_REG1: u8 = 0x20;
    pub const INT1_CTRL: u8 = 0x21;
    pub const INT2_CTRL: u8 = 0x22;
    pub const CTRL_REG4: u8 = 0x23;
    pub const CTRL_REG5: u8 = 0x24;
    pub const OUT_TEMP_L: u8 = 0x25;
    pub const STATUS: u8 = 0x27;
    pub const OUT_X_L: u8 = 0x28;
    pub const FIFO_CTRL: u8 = 0x2E;
    pub const FIFO_SRC: u8 = 0x2F;
}

/// Records operations performed on the mock interface
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Read register operation
    ReadRegister {
        /// Register address
        address: u8,
        /// Value that was returned
        value: u8,
    },
    /// Write register operation
    WriteRegister {
        /// Register address
        address: u8,
        /// Value that was written
        value: u8,
    },
}

/// Shared state for mock interface (uses interior mutability)
#[derive(Debug)]
struct MockState {
    /// Simulated register values
    registers: HashMap<u8, u8>,

    /// Operations log for verification
    operations: Vec<Operation>,

    /// Failure injection flags
    fail_next_read: bool,
    fail_next_write: bool,
    /// Fail every read once the next write has gone through
    fail_reads_after_write: bool,
    reads_dead: bool,

    /// Keep SW_RESET set after it is written (simulates a stuck reset)
    hold_reset: bool,

    /// Samples queued in the simulated FIFO
    fifo_samples: VecDeque<[i16; 3]>,
}

impl MockState {
    fn new() -> Self {
        let mut state = Self {
            registers: HashMap::new(),
            operations: Vec::new(),
            fail_next_read: false,
            fail_next_write: false,
            fail_reads_after_write: false,
            reads_dead: false,
            hold_reset: false,
            fifo_samples: VecDeque::new(),
        };

        // Power-on values
        state.registers.insert(addr::WHO_AM_I, 0x11);
        state.registers.insert(addr::CTRL_REG1, 0x40); // IF_ADD_INC
        state.registers.insert(addr::CTRL_REG4, 0x01); // reserved bit 0 reads as 1

        state
    }

    fn get(&self, address: u8) -> u8 {
        self.registers.get(&address).copied().unwrap_or(0)
    }

    /// Set acceleration output registers (little-endian per axis)
    fn set_accel_data(&mut self, x: i16, y: i16, z: i16) {
        for (i, value) in [x, y, z].into_iter().enumerate() {
            let [low, high] = value.to_le_bytes();
            let base = addr::OUT_X_L + 2 * i as u8;
            self.registers.insert(base, low);
            self.registers.insert(base + 1, high);
        }
    }

    /// Keep FSS in FIFO_SRC in sync with the queued samples
    fn sync_fifo_level(&mut self) {
        let level = self.fifo_samples.len().min(32) as u8;
        let src = self.get(addr::FIFO_SRC);
        self.registers
            .insert(addr::FIFO_SRC, (src & 0xC0) | (level & 0x3F));
    }
}

/// Mock interface for testing
#[derive(Clone)]
pub struct MockInterface {
    state: Rc<RefCell<MockState>>,
}

impl MockInterface {
    /// Create a new mock interface with power-on register values
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState::new())),
        }
    }

    /// Set a register value
    #[allow(dead_code)]
    pub fn set_register(&self, address: u8, value: u8) {
        self.state.borrow_mut().registers.insert(address, value);
    }

    /// Get a register value
    #[allow(dead_code)]
    pub fn get_register(&self, address: u8) -> u8 {
        self.state.borrow().get(address)
    }

    /// Set WHO_AM_I register value
    #[allow(dead_code)]
    pub fn set_who_am_i(&self, value: u8) {
        self.set_register(addr::WHO_AM_I, value);
    }

    /// Set accelerometer data (will be returned on next read)
    #[allow(dead_code)]
    pub fn set_accel_data(&self, x: i16, y: i16, z: i16) {
        self.state.borrow_mut().set_accel_data(x, y, z);
    }

    /// Set the two temperature output bytes
    #[allow(dead_code)]
    pub fn set_temperature_bytes(&self, low: u8, high: u8) {
        let mut state = self.state.borrow_mut();
        state.registers.insert(addr::OUT_TEMP_L, low);
        state.registers.insert(addr::OUT_TEMP_L + 1, high);
    }

    /// Queue samples in the simulated FIFO
    ///
    /// Each burst read of the output block pops one sample and FSS follows the
    /// queue length.
    #[allow(dead_code)]
    pub fn set_fifo_samples(&self, samples: Vec<[i16; 3]>) {
        let mut state = self.state.borrow_mut();
        state.fifo_samples = samples.into();
        state.sync_fifo_level();
    }

    /// Number of samples still queued in the simulated FIFO
    #[allow(dead_code)]
    pub fn fifo_remaining(&self) -> usize {
        self.state.borrow().fifo_samples.len()
    }

    /// Keep SW_RESET set after it is written
    #[allow(dead_code)]
    pub fn hold_reset(&self, enable: bool) {
        self.state.borrow_mut().hold_reset = enable;
    }

    /// Inject a read failure on the next read operation
    #[allow(dead_code)]
    pub fn fail_next_read(&self) {
        self.state.borrow_mut().fail_next_read = true;
    }

    /// Inject a write failure on the next write operation
    #[allow(dead_code)]
    pub fn fail_next_write(&self) {
        self.state.borrow_mut().fail_next_write = true;
    }

    /// Let the next write succeed, then fail every read after it
    #[allow(dead_code)]
    pub fn fail_reads_after_next_write(&self) {
        self.state.borrow_mut().fail_reads_after_write = true;
    }

    /// Get the operations log
    #[allow(dead_code)]
    pub fn operations(&self) -> Vec<Operation> {
        self.state.borrow().operations.clone()
    }

    /// Clear the operations log
    #[allow(dead_code)]
    pub fn clear_operations(&self) {
        self.state.borrow_mut().operations.clear();
    }

    /// Count register writes since the log was last cleared
    #[allow(dead_code)]
    pub fn write_count(&self) -> usize {
        self.state
            .borrow()
            .operations
            .iter()
            .filter(|op| matches!(op, Operation::WriteRegister { .. }))
            .count()
    }

    /// Count register reads since the log was last cleared
    #[allow(dead_code)]
    pub fn read_count(&self) -> usize {
        self.state
            .borrow()
            .operations
            .iter()
            .filter(|op| matches!(op, Operation::ReadRegister { .. }))
            .count()
    }
}

/// Mock error type
#[derive(Debug, Clone, PartialEq)]
pub enum MockError {
    /// Simulated communication error
    Communication,
}

impl RegisterInterface for MockInterface {
    type Error = MockError;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_read || state.reads_dead {
            state.fail_next_read = false;
            return Err(MockError::Communication);
        }

        // Output block read pops the oldest FIFO sample, if any
        if address == addr::OUT_X_L {
            if let Some([x, y, z]) = state.fifo_samples.pop_front() {
                state.set_accel_data(x, y, z);
                state.sync_fifo_level();
            }
        }

        for (i, byte) in read_data.iter_mut().enumerate() {
            let reg_addr = address.wrapping_add(i as u8);
            *byte = state.get(reg_addr);

            state.operations.push(Operation::ReadRegister {
                address: reg_addr,
                value: *byte,
            });
        }

        Ok(())
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_write {
            state.fail_next_write = false;
            return Err(MockError::Communication);
        }

        if state.fail_reads_after_write {
            state.reads_dead = true;
        }

        for (i, &byte) in write_data.iter().enumerate() {
            let reg_addr = address.wrapping_add(i as u8);

            state.operations.push(Operation::WriteRegister {
                address: reg_addr,
                value: byte,
            });

            // SW_RESET self-clears and restores the power-on values
            if reg_addr == addr::CTRL_REG1 && byte & 0x04 != 0 && !state.hold_reset {
                for reg in [addr::INT1_CTRL, addr::INT2_CTRL, addr::CTRL_REG5, addr::FIFO_CTRL] {
                    state.registers.insert(reg, 0x00);
                }
                state.registers.insert(addr::CTRL_REG4, 0x01);
                state.registers.insert(addr::CTRL_REG1, 0x40);
                continue;
            }

            state.registers.insert(reg_addr, byte);
        }

        Ok(())
    }
}

#[cfg(feature = "async")]
impl AsyncRegisterInterface for MockInterface {
    type Error = MockError;
    type AddressType = u8;

    async fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        // Delegate to synchronous implementation
        RegisterInterface::read_register(self, address, size_bits, read_data)
    }

    async fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        // Delegate to synchronous implementation
        RegisterInterface::write_register(self, address, size_bits, write_data)
    }
}

impl Default for MockInterface {
    fn default() -> Self {
        Self::new()
    }
}
