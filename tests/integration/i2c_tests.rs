//! I²C bring-up and teardown through the board context.

use super::mock_hw::{DriverCall, MockDrivers};

use esp_eye_bsp::board::ports::{I2cConfig, I2cMode};
use esp_eye_bsp::{Board, BspConfig, BspError};

fn make_board() -> Board<MockDrivers> {
    Board::new(MockDrivers::new(), BspConfig::default())
}

#[test]
fn init_configures_then_installs_master() {
    let mut board = make_board();
    assert!(!board.is_i2c_initialized());

    board.i2c_init().unwrap();

    assert!(board.is_i2c_initialized());
    assert_eq!(
        board.drivers().calls,
        vec![
            DriverCall::I2cParamConfig {
                port: 1,
                config: I2cConfig::for_board(&BspConfig::default()),
            },
            DriverCall::I2cInstall {
                port: 1,
                mode: I2cMode::Master,
            },
        ]
    );
}

#[test]
fn second_init_is_a_no_op() {
    let mut board = make_board();
    assert_eq!(board.i2c_init(), Ok(()));
    assert_eq!(board.i2c_init(), Ok(()));
    assert_eq!(board.drivers().installs(), 1);
    assert_eq!(board.drivers().calls.len(), 2);
}

#[test]
fn deinit_clears_flag_and_next_init_reinstalls() {
    let mut board = make_board();
    board.i2c_init().unwrap();

    assert_eq!(board.i2c_deinit(), Ok(()));
    assert!(!board.is_i2c_initialized());
    assert_eq!(
        board.drivers().calls.last(),
        Some(&DriverCall::I2cDelete { port: 1 })
    );

    board.i2c_init().unwrap();
    assert!(board.is_i2c_initialized());
    assert_eq!(board.drivers().installs(), 2);
}

#[test]
fn param_config_error_is_forwarded_and_install_skipped() {
    let mut board = make_board();
    board.drivers_mut().fail_param_config = Some(BspError::InvalidArg);

    assert_eq!(board.i2c_init(), Err(BspError::InvalidArg));
    assert!(!board.is_i2c_initialized());
    assert_eq!(board.drivers().installs(), 0);
}

#[test]
fn install_error_leaves_bus_uninitialised() {
    let mut board = make_board();
    board.drivers_mut().fail_install = Some(BspError::Fail);

    assert_eq!(board.i2c_init(), Err(BspError::Fail));
    assert!(!board.is_i2c_initialized());

    // A later attempt goes back to the driver.
    board.drivers_mut().fail_install = None;
    assert_eq!(board.i2c_init(), Ok(()));
    assert_eq!(board.drivers().installs(), 2);
}

#[test]
fn failed_deinit_keeps_bus_initialised() {
    let mut board = make_board();
    board.i2c_init().unwrap();
    board.drivers_mut().fail_delete = Some(BspError::Driver(0x103));

    assert_eq!(board.i2c_deinit(), Err(BspError::Driver(0x103)));
    assert!(board.is_i2c_initialized());
}

#[test]
fn deinit_without_init_still_asks_the_driver() {
    let mut board = make_board();
    board.drivers_mut().fail_delete = Some(BspError::InvalidArg);

    assert_eq!(board.i2c_deinit(), Err(BspError::InvalidArg));
    assert_eq!(board.drivers().calls, vec![DriverCall::I2cDelete { port: 1 }]);
}

#[test]
fn configured_port_and_clock_reach_the_driver() {
    let config = BspConfig {
        i2c_port: 0,
        i2c_clk_speed_hz: 100_000,
    };
    let mut board = Board::new(MockDrivers::new(), config);
    board.i2c_init().unwrap();

    match &board.drivers().calls[0] {
        DriverCall::I2cParamConfig { port, config } => {
            assert_eq!(*port, 0);
            assert_eq!(config.clk_speed_hz, 100_000);
            assert_eq!((config.sda, config.scl), (18, 23));
        }
        other => panic!("unexpected first call {:?}", other),
    }
}
