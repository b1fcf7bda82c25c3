//! Bluetooth module
//!
//! Advertises the watch as a connectable peripheral with a battery service
//! and reports whether a central is connected.

// Core
use core::mem;

// BLE
use embassy_futures::select::select;
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, signal::Signal};
use embassy_time::Timer;
use nrf_softdevice::{
    ble::{
        advertisement_builder::{
            Flag, LegacyAdvertisementBuilder, LegacyAdvertisementPayload, ServiceList,
            ServiceUuid16,
        },
        gatt_server, peripheral, Connection,
    },
    raw, Config, Softdevice,
};

const DEVICE_NAME: &[u8] = b"Trekkie";

pub static ADV_DATA: LegacyAdvertisementPayload = LegacyAdvertisementBuilder::new()
    .flags(&[Flag::GeneralDiscovery, Flag::LE_Only])
    .services_16(ServiceList::Complete, &[ServiceUuid16::BATTERY])
    .full_name("Trekkie")
    .build();

pub static SCAN_DATA: LegacyAdvertisementPayload = LegacyAdvertisementBuilder::new()
    .services_16(ServiceList::Complete, &[ServiceUuid16::BATTERY])
    .build();

#[nrf_softdevice::gatt_server]
pub struct Server {
    pub bas: BatteryService,
}

#[nrf_softdevice::gatt_service(uuid = "180f")]
pub struct BatteryService {
    #[characteristic(uuid = "2a19", read, notify)]
    pub battery_level: u8,
}

/// Softdevice configuration for a single peripheral connection
pub fn softdevice_config() -> Config {
    Config {
        clock: Some(raw::nrf_clock_lf_cfg_t {
            source: raw::NRF_CLOCK_LF_SRC_RC as u8,
            rc_ctiv: 16,
            rc_temp_ctiv: 2,
            accuracy: raw::NRF_CLOCK_LF_ACCURACY_500_PPM as u8,
        }),
        conn_gap: Some(raw::ble_gap_conn_cfg_t {
            conn_count: 1,
            event_length: 24,
        }),
        conn_gatt: Some(raw::ble_gatt_conn_cfg_t { att_mtu: 256 }),
        gatts_attr_tab_size: Some(raw::ble_gatts_cfg_attr_tab_size_t {
            attr_tab_size: raw::BLE_GATTS_ATTR_TAB_SIZE_DEFAULT,
        }),
        gap_role_count: Some(raw::ble_gap_cfg_role_count_t {
            adv_set_count: 1,
            periph_role_count: 1,
        }),
        gap_device_name: Some(raw::ble_gap_cfg_device_name_t {
            p_value: DEVICE_NAME.as_ptr() as _,
            current_len: DEVICE_NAME.len() as u16,
            max_len: DEVICE_NAME.len() as u16,
            write_perm: unsafe { mem::zeroed() },
            _bitfield_1: raw::ble_gap_cfg_device_name_t::new_bitfield_1(
                raw::BLE_GATTS_VLOC_STACK as u8,
            ),
        }),
        ..Default::default()
    }
}

/// Advertise, serve one connection at a time and report the connection state.
///
/// Battery levels signalled on `battery_level` are notified to the connected
/// central, or stored in the characteristic when notifications are off.
pub async fn run(
    sd: &'static Softdevice,
    server: &Server,
    connected: &Signal<ThreadModeRawMutex, bool>,
    battery_level: &Signal<ThreadModeRawMutex, u8>,
) -> ! {
    loop {
        let conn = match advertise(sd).await {
            Ok(conn) => conn,
            Err(e) => {
                defmt::warn!("Advertising failed: {}", e);
                Timer::after_secs(1).await;
                continue;
            }
        };
        defmt::info!("Bluetooth connected");
        connected.signal(true);

        let gatt = gatt_server::run(&conn, server, |_| {});
        let notify = async {
            loop {
                let level = battery_level.wait().await;
                if server.bas.battery_level_notify(&conn, &level).is_err() {
                    if let Err(e) = server.bas.battery_level_set(&level) {
                        defmt::warn!("Battery level update failed: {}", e);
                    }
                }
            }
        };
        select(gatt, notify).await;

        defmt::info!("Bluetooth disconnected");
        connected.signal(false);
    }
}

/// Store the battery level read by centrals before any change is signalled
pub fn seed_battery_level(
    server: &Server,
    percent: u8,
) -> Result<(), gatt_server::SetValueError> {
    server.bas.battery_level_set(&percent)
}

async fn advertise(sd: &'static Softdevice) -> Result<Connection, peripheral::AdvertiseError> {
    let config = peripheral::Config::default();
    let adv = peripheral::ConnectableAdvertisement::ScannableUndirected {
        adv_data: &ADV_DATA,
        scan_data: &SCAN_DATA,
    };
    peripheral::advertise_connectable(sd, adv, &config).await
}
