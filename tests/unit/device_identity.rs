//! Unit tests for device identification, construction and initialization

use crate::common::{MockDelay, MockError, MockInterface, addr, create_mock_driver};
use lis3dhh::{Error, Lis3dhhDriver, WHO_AM_I_VALUE};

#[test]
fn test_new_verifies_who_am_i() {
    let (mut driver, _interface) = create_mock_driver();

    assert_eq!(driver.read_device_id().unwrap(), WHO_AM_I_VALUE);
}

#[test]
fn test_new_rejects_wrong_device() {
    let interface = MockInterface::new();
    interface.set_who_am_i(0x33);

    let result = Lis3dhhDriver::new(interface);
    assert!(matches!(result, Err(Error::InvalidDevice(0x33))));
}

#[test]
fn test_new_propagates_bus_error() {
    let interface = MockInterface::new();
    interface.fail_next_read();

    let result = Lis3dhhDriver::new(interface);
    assert!(matches!(result, Err(Error::Bus(MockError::Communication))));
}

#[test]
fn test_new_unchecked_generates_no_traffic() {
    let interface = MockInterface::new();
    interface.set_who_am_i(0x00);

    let _driver = Lis3dhhDriver::new_unchecked(interface.clone());
    assert!(interface.operations().is_empty());
}

#[test]
fn test_release_returns_interface() {
    let (driver, interface) = create_mock_driver();

    let released = driver.release();
    released.set_register(addr::FIFO_CTRL, 0xAB);
    assert_eq!(interface.get_register(addr::FIFO_CTRL), 0xAB);
}

#[test]
fn test_init_resets_and_enables_bdu() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(addr::FIFO_CTRL, 0xFF);
    interface.set_register(addr::INT1_CTRL, 0x80);

    let mut delay = MockDelay::default();
    driver.init(&mut delay).unwrap();

    // Registers back to power-on values, then IF_ADD_INC | BDU
    assert_eq!(interface.get_register(addr::FIFO_CTRL), 0x00);
    assert_eq!(interface.get_register(addr::INT1_CTRL), 0x00);
    assert_eq!(interface.get_register(addr::CTRL_REG1), 0x41);
    assert!(driver.read_block_data_update().unwrap());
    assert!(driver.read_auto_increment().unwrap());
    assert!(!driver.read_reset().unwrap());
    assert!(delay.elapsed_ms >= 1);
}

#[test]
fn test_init_times_out_when_reset_sticks() {
    let (mut driver, interface) = create_mock_driver();
    interface.hold_reset(true);

    let mut delay = MockDelay::default();
    let result = driver.init(&mut delay);

    assert!(matches!(result, Err(Error::InitializationTimeout)));
    assert_eq!(delay.elapsed_ms, 100);
}

#[test]
fn test_init_write_failure() {
    let (mut driver, interface) = create_mock_driver();
    interface.fail_next_write();

    let result = driver.init(&mut MockDelay::default());
    assert!(matches!(result, Err(Error::Bus(MockError::Communication))));
}

#[test]
fn test_init_reports_bus_error_while_polling() {
    let (mut driver, interface) = create_mock_driver();
    interface.hold_reset(true);
    interface.fail_reads_after_next_write();

    let mut delay = MockDelay::default();
    let result = driver.init(&mut delay);

    assert!(matches!(result, Err(Error::Bus(MockError::Communication))));
    // Gave up on the first failed poll
    assert_eq!(delay.elapsed_ms, 1);
}
