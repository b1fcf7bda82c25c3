#![no_std]
#![no_main]

mod peripherals;
mod system;

// Panic handler and debugging
use defmt::unwrap;

use defmt_rtt as _;
use panic_probe as _;

// Device
use embassy_executor::Spawner;
use embassy_futures::select::{select3, Either3};
use embassy_nrf::{
    bind_interrupts,
    gpio::{Input, Level, Output, OutputDrive, Pull},
    interrupt::{self, InterruptExt, Priority},
    peripherals::SPI2,
    saadc::{self, ChannelConfig, Resolution, Saadc},
    spim,
};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, signal::Signal};
use embassy_time::{Delay, Duration, Timer};
use nrf_softdevice::Softdevice;
use static_cell::StaticCell;

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<SPI2>;
});

// Crate
use peripherals::{backlight::Backlight, battery::Battery, display::Display};
use system::{
    bluetooth::{self, Server},
    config::{self, BRIGHTNESS, TIMEZONE},
    time::TimeManager,
};
use trekkie::{
    clock::changed_units, BatteryInfo, ClockStyle, TimeUnits, TrekkieWatchface, WatchFace,
    WatchFaceState,
};

// Others
use chrono::{NaiveDateTime, Timelike};

// Communication channels
static BATTERY_STATUS: Signal<ThreadModeRawMutex, BatteryInfo> = Signal::new();
static BLE_BATTERY_LEVEL: Signal<ThreadModeRawMutex, u8> = Signal::new();
static BLUETOOTH_STATUS: Signal<ThreadModeRawMutex, bool> = Signal::new();
static TICK: Signal<ThreadModeRawMutex, (NaiveDateTime, TimeUnits)> = Signal::new();

static SERVER: StaticCell<Server> = StaticCell::new();

/// Fetch the battery status from the hardware.
#[embassy_executor::task(pool_size = 1)]
async fn update_battery_status(mut battery: Battery<'static>) {
    loop {
        match battery.update().await {
            Ok(true) => {
                // Battery status changed
                defmt::info!("Battery status updated");
                BATTERY_STATUS.signal(battery.info());
                BLE_BATTERY_LEVEL.signal(battery.info().percent);
            }
            Ok(false) => {}
            Err(e) => defmt::warn!("Battery measurement failed: {}", e),
        }

        // Re-schedule the timer interrupt in 1s
        Timer::after(Duration::from_secs(1)).await;
    }
}

/// Tick once a minute, on the minute.
#[embassy_executor::task(pool_size = 1)]
async fn tick_timer(clock: TimeManager) {
    let mut previous: Option<NaiveDateTime> = None;
    loop {
        let now = clock.local_time();
        let units = changed_units(previous.as_ref(), &now);
        TICK.signal((now, units));
        previous = Some(now);

        Timer::after(Duration::from_secs(60 - now.second() as u64)).await;
    }
}

/// Hand every event to the watchface, one at a time, and redraw.
#[embassy_executor::task(pool_size = 1)]
async fn update_lcd(mut display: Display<'static>, mut face: TrekkieWatchface) {
    loop {
        match select3(TICK.wait(), BATTERY_STATUS.wait(), BLUETOOTH_STATUS.wait()).await {
            Either3::First((time, units)) => {
                defmt::info!(
                    "Current time: {}:{} ({=u8:b})",
                    time.hour(),
                    time.minute(),
                    units.bits()
                );
                face.on_tick(&time, units);
            }
            Either3::Second(status) => {
                defmt::info!(
                    "Battery status: {} ({})",
                    status.percent,
                    if status.charging {
                        "charging"
                    } else {
                        "discharging"
                    }
                );
                face.on_battery_change(status);
            }
            Either3::Third(connected) => face.on_bluetooth_change(connected),
        }

        if let Err(e) = display.render(&mut face) {
            defmt::warn!("Drawing the watchface failed: {}", e);
        }
    }
}

#[embassy_executor::task(pool_size = 1)]
async fn update_bluetooth(sd: &'static Softdevice, server: &'static Server) {
    bluetooth::run(sd, server, &BLUETOOTH_STATUS, &BLE_BATTERY_LEVEL).await
}

#[embassy_executor::task(pool_size = 1)]
async fn softdevice_task(sd: &'static Softdevice) -> ! {
    sd.run().await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let mut p = embassy_nrf::init(config::embassy_config());
    defmt::info!("Initializing");

    // Keep peripheral interrupts clear of the softdevice priorities
    interrupt::SAADC.set_priority(Priority::P3);
    interrupt::SPIM2_SPIS2_SPI2.set_priority(Priority::P3);

    // Initialize SAADC
    let mut saadc_config = saadc::Config::default();
    // Set resolution to 12bit, necessary for correct battery status calculation
    saadc_config.resolution = Resolution::_12BIT;
    // Pin P0.31: Voltage level
    let channel_config = ChannelConfig::single_ended(&mut p.P0_31);
    let saadc = Saadc::new(p.SAADC, Irqs, saadc_config, [channel_config]);
    saadc.calibrate().await;

    // Initalize Battery
    let battery = unwrap!(Battery::init(saadc, Input::new(p.P0_12, Pull::None)).await);

    // Initialize Backlight
    let backlight = unwrap!(Backlight::init(
        Output::new(p.P0_14, Level::High, OutputDrive::Standard),
        Output::new(p.P0_22, Level::High, OutputDrive::Standard),
        Output::new(p.P0_23, Level::High, OutputDrive::Standard),
        BRIGHTNESS,
    ));

    // Initialize SPI
    let mut spim_config = spim::Config::default();
    // Use SPI at 8MHz (the fastest clock available on the nRF52832),
    // otherwise refreshing will be super slow.
    spim_config.frequency = spim::Frequency::M8;
    // SPI must be used in mode 3. Mode 0 (the default) won't work.
    spim_config.mode = spim::MODE_3;

    let spim = spim::Spim::new(p.SPI2, Irqs, p.P0_02, p.P0_04, p.P0_03, spim_config);

    // Initialize LCD
    let mut display = unwrap!(Display::init(
        spim,
        Output::new(p.P0_25, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_18, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_26, Level::Low, OutputDrive::Standard),
        backlight,
        &mut Delay,
    ));
    defmt::info!("Backlight level {}", display.brightness());

    // Prevent blank screen on boot
    let clock = TimeManager::init(TIMEZONE);
    let mut face = TrekkieWatchface::new(ClockStyle::configured());
    face.init(&WatchFaceState {
        time: clock.local_time(),
        battery: battery.info(),
        connected: false,
    });
    if let Err(e) = display.render(&mut face) {
        defmt::warn!("Drawing the watchface failed: {}", e);
    }

    // Initialize Bluetooth
    let sd = Softdevice::enable(&bluetooth::softdevice_config());
    let server = SERVER.init(unwrap!(Server::new(sd)));
    let sd: &'static Softdevice = sd;
    // Battery updates are only signalled on change, seed the first sample
    if let Err(e) = bluetooth::seed_battery_level(server, battery.info().percent) {
        defmt::warn!("Battery level update failed: {}", e);
    }

    defmt::info!("Initialization finished");

    // Schedule tasks
    unwrap!(spawner.spawn(softdevice_task(sd)));
    unwrap!(spawner.spawn(update_lcd(display, face)));
    unwrap!(spawner.spawn(update_battery_status(battery)));
    unwrap!(spawner.spawn(tick_timer(clock)));
    unwrap!(spawner.spawn(update_bluetooth(sd, server)));
}
