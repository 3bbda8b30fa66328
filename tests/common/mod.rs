//! Common test utilities and mock implementations

pub mod mock_interface;

#[allow(unused_imports)]
pub use mock_interface::{MockError, MockInterface, Operation, addr};
#[allow(unused_imports)]
pub use test_utils::{MockDelay, assert_float_eq, create_mock_driver};
