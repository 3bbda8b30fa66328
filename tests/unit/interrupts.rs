//! Unit tests for interrupt routing and pad configuration

use crate::common::{addr, create_mock_driver};
use lis3dhh::{Int1Mode, InterruptRouting};

#[test]
fn test_int1_individual_sources() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_fifo_threshold_on_int1(true).unwrap();
    assert_eq!(interface.get_register(addr::INT1_CTRL), 0x08);
    driver.set_fifo_full_on_int1(true).unwrap();
    assert_eq!(interface.get_register(addr::INT1_CTRL), 0x18);
    driver.set_fifo_overrun_on_int1(true).unwrap();
    assert_eq!(interface.get_register(addr::INT1_CTRL), 0x38);
    driver.set_boot_on_int1(true).unwrap();
    assert_eq!(interface.get_register(addr::INT1_CTRL), 0x78);
    driver.set_drdy_on_int1(true).unwrap();
    assert_eq!(interface.get_register(addr::INT1_CTRL), 0xF8);

    assert!(driver.read_fifo_threshold_on_int1().unwrap());
    assert!(driver.read_fifo_full_on_int1().unwrap());
    assert!(driver.read_fifo_overrun_on_int1().unwrap());
    assert!(driver.read_boot_on_int1().unwrap());
    assert!(driver.read_drdy_on_int1().unwrap());

    driver.set_fifo_full_on_int1(false).unwrap();
    assert!(!driver.read_fifo_full_on_int1().unwrap());
    assert_eq!(interface.get_register(addr::INT1_CTRL), 0xE8);
}

#[test]
fn test_int2_individual_sources() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_fifo_threshold_on_int2(true).unwrap();
    driver.set_fifo_full_on_int2(true).unwrap();
    driver.set_fifo_overrun_on_int2(true).unwrap();
    driver.set_boot_on_int2(true).unwrap();
    driver.set_drdy_on_int2(true).unwrap();
    assert_eq!(interface.get_register(addr::INT2_CTRL), 0xF8);

    assert!(driver.read_fifo_threshold_on_int2().unwrap());
    assert!(driver.read_fifo_full_on_int2().unwrap());
    assert!(driver.read_fifo_overrun_on_int2().unwrap());
    assert!(driver.read_boot_on_int2().unwrap());
    assert!(driver.read_drdy_on_int2().unwrap());

    driver.set_drdy_on_int2(false).unwrap();
    assert!(!driver.read_drdy_on_int2().unwrap());

    // INT1 untouched
    assert_eq!(interface.get_register(addr::INT1_CTRL), 0x00);
}

#[test]
fn test_int2_reserved_bits_preserved() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(addr::INT2_CTRL, 0x07);

    driver.set_drdy_on_int2(true).unwrap();
    driver.set_fifo_threshold_on_int2(true).unwrap();

    assert_eq!(interface.get_register(addr::INT2_CTRL), 0x8F);
}

#[test]
fn test_int1_mode_round_trip() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_int1_mode(Int1Mode::Trigger).unwrap();
    assert_eq!(driver.read_int1_mode().unwrap(), Int1Mode::Trigger);
    assert_eq!(interface.get_register(addr::INT1_CTRL), 0x04);

    driver.set_int1_mode(Int1Mode::Interrupt).unwrap();
    assert_eq!(driver.read_int1_mode().unwrap(), Int1Mode::Interrupt);
}

#[test]
fn test_configure_int1_keeps_pad_function() {
    let (mut driver, interface) = create_mock_driver();
    driver.set_int1_mode(Int1Mode::Trigger).unwrap();
    interface.clear_operations();

    driver
        .configure_int1(&InterruptRouting::data_ready_only())
        .unwrap();

    assert_eq!(interface.write_count(), 1);
    assert_eq!(interface.get_register(addr::INT1_CTRL), 0x84);
    assert_eq!(
        driver.read_int1_routing().unwrap(),
        InterruptRouting::data_ready_only()
    );
    assert_eq!(driver.read_int1_mode().unwrap(), Int1Mode::Trigger);
}

#[test]
fn test_configure_int2_round_trip() {
    let (mut driver, interface) = create_mock_driver();

    let routing = InterruptRouting::fifo_batch();
    driver.configure_int2(&routing).unwrap();

    assert_eq!(interface.get_register(addr::INT2_CTRL), 0x28);
    assert_eq!(driver.read_int2_routing().unwrap(), routing);

    driver.configure_int2(&InterruptRouting::default()).unwrap();
    assert!(!driver.read_int2_routing().unwrap().any());
}
