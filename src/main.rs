#![no_std]
#![no_main]

mod board;

use core::cell::RefCell;

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_backtrace as _;
use esp_hal::{delay::Delay, timer::timg::TimerGroup};
use esp_println::println;
use lsm6dso::{Config, Lsm6dso, Sensor};

const SAMPLE_INTERVAL: Duration = Duration::from_millis(500);

#[esp_hal_embassy::main]
async fn main(_spawner: Spawner) {
    esp_println::logger::init_logger_from_env();

    let peripherals = esp_hal::init(esp_hal::Config::default());

    let timer_group0 = TimerGroup::new(peripherals.TIMG0);
    esp_hal_embassy::init(timer_group0.timer0);

    let i2c = board::init_i2c(
        peripherals.I2C0,
        board::pins::I2cPins {
            sda: peripherals.GPIO21,
            scl: peripherals.GPIO22,
        },
    );
    let bus = RefCell::new(i2c);

    let config = Config {
        address: board::IMU_ADDRESS,
        ..Config::default()
    };

    println!("LSM6DSO test application");
    println!("Initializing LSM6DSO sensor at {:#04x}...", config.address);

    let imu = match Lsm6dso::initialize(&bus, config, &mut Delay::new()) {
        Ok(imu) => imu,
        Err(e) => {
            println!("[ERROR] {:?}", e);
            return;
        }
    };
    println!("[SUCCESS]");

    println!("Powering down LSM6DSO sensor...");
    for sensor in [Sensor::Accelerometer, Sensor::Gyroscope] {
        if let Err(e) = imu.power_down(sensor) {
            println!("[ERROR] {:?}", e);
            return;
        }
    }
    println!("[SUCCESS]");

    Timer::after(Duration::from_secs(1)).await;

    println!("Powering up LSM6DSO sensor...");
    for sensor in [Sensor::Accelerometer, Sensor::Gyroscope] {
        if let Err(e) = imu.power_up(sensor) {
            println!("[ERROR] {:?}", e);
            return;
        }
    }
    println!("[SUCCESS]");

    loop {
        match imu.read_acceleration() {
            Ok(acc) => println!("Accelerometer x: {} y: {} z: {}", acc.x, acc.y, acc.z),
            Err(_) => println!("[ERROR] reading accelerometer!"),
        }

        match imu.read_angular_rate() {
            Ok(gyro) => println!("Gyroscope x: {} y: {} z: {}", gyro.x, gyro.y, gyro.z),
            Err(_) => println!("[ERROR] reading gyroscope!"),
        }

        match imu.read_temperature() {
            Ok(temp) => println!("Temperature [in °C x 100]: {}", temp),
            Err(_) => println!("[ERROR] reading temperature!"),
        }

        println!("");
        Timer::after(SAMPLE_INTERVAL).await;
    }
}
