use crate::domain::{MacAddress, Status, WifiMode};
use serde::Deserialize;
use std::time::Duration;

/// GET /WiFi/AccessControl
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WifiAccessControl {
    #[serde(flatten)]
    pub status: Status,
    /// `"Allow all"`, `"Allow"` or `"Deny"`
    #[serde(rename = "blockType", default, deserialize_with = "crate::hitron::null_as_default")]
    pub block_type: String,
    #[serde(rename = "Rules_List", default, deserialize_with = "crate::hitron::skip_invalid")]
    pub rules: Vec<AccessControlRule>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "crate::hitron::wire::AccessControlRuleGet")]
pub struct AccessControlRule {
    pub id: u32,
    pub hostname: String,
    pub mac_addr: MacAddress,
}

/// GET /WiFi/AccessControl/Status
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WifiAccessControlStatus {
    #[serde(flatten)]
    pub status: Status,
    #[serde(rename = "blockType", default, deserialize_with = "crate::hitron::null_as_default")]
    pub block_type: String,
}

/// GET /WiFi/GuestSSID
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "crate::hitron::wire::GuestSsidSettingsGet")]
pub struct WifiGuestSsid {
    pub status: Status,
    pub enable: bool,
    pub ssid: String,
    pub ssid_5g: String,
    pub password: String,
    pub max_users: u32,
}

/// GET /WiFi/Radios
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WifiRadios {
    #[serde(flatten)]
    pub status: Status,
    // sic
    #[serde(rename = "Raidos_List", default, deserialize_with = "crate::hitron::skip_invalid")]
    pub radios: Vec<WifiRadio>,
}

/// A radio, as listed by GET /WiFi/Radios or on its own by GET /WiFi/Radios/<n>.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "crate::hitron::wire::RadioGet")]
pub struct WifiRadio {
    pub status: Status,
    pub vendor: String,
    /// `"2.4G"` or `"5G"`
    pub band: String,
    /// `"20MHz"`, `"20/40MHz"`, `"40MHz"` or `"80MHz"`
    pub channel_bandwidth: String,
    /// Path of the radio's own resource, `/1/Device/WiFi/Radios/<n>`
    pub radio_uri: String,
    /// Configured channel, only meaningful without automatic channel selection
    pub channel: u32,
    pub current_channel: u32,
    pub mode: WifiMode,
    pub enable: bool,
    /// Dynamic channel selection
    pub enable_dcs: bool,
    /// Dynamic frequency selection, allows channels shared with radar
    pub enable_dfs: bool,
    pub enable_wps: bool,
    pub igmp_snoop: bool,
    pub auto_channel: bool,
}

/// GET /WiFi/Radios/Advanced
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WifiRadiosAdvanced {
    #[serde(flatten)]
    pub status: Status,
    #[serde(rename = "Advanced_List", default, deserialize_with = "crate::hitron::skip_invalid")]
    pub radios: Vec<WifiRadioAdvanced>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "crate::hitron::wire::RadioAdvancedGet")]
pub struct WifiRadioAdvanced {
    pub radio: WifiRadio,
    pub ssid: String,
    pub bg_mode: String,
    pub n_operating_mode: String,
    pub n_guard_interval: String,
    pub tx_stream: String,
    pub rx_stream: String,
    pub n_mcs: i32,
    pub n_coexistence: bool,
    pub n_rdg: bool,
    pub n_amsdu: bool,
    pub n_autoba: bool,
    pub n_badecline: bool,
    pub band_steering: bool,
    pub show_mso: bool,
}

/// GET /WiFi/Radios/Survey
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WifiRadiosSurvey {
    #[serde(flatten)]
    pub status: Status,
    #[serde(rename = "APs_List", default, deserialize_with = "crate::hitron::skip_invalid")]
    pub access_points: Vec<AccessPoint>,
}

/// A neighbouring network seen by the survey.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "crate::hitron::wire::AccessPointGet")]
pub struct AccessPoint {
    pub band: String,
    pub channel: u32,
    pub ssid: String,
    pub bssid: MacAddress,
    /// Percent
    pub signal: i32,
    pub wmode: String,
    pub security: String,
    pub wps: bool,
    pub ext_ch: String,
    pub nt: String,
}

/// GET /WiFi/SSIDs
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WifiSsids {
    #[serde(flatten)]
    pub status: Status,
    #[serde(rename = "SSIDs_List", default, deserialize_with = "crate::hitron::skip_invalid")]
    pub ssids: Vec<Ssid>,
    #[serde(rename = "Guests_List", default, deserialize_with = "crate::hitron::skip_invalid")]
    pub guests: Vec<GuestSsid>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "crate::hitron::wire::SsidGet")]
pub struct Ssid {
    pub id: u32,
    pub radio: u32,
    pub bssid: MacAddress,
    pub name: String,
    pub band: String,
    pub if_name: String,
    pub auth_mode: String,
    pub security_mode: String,
    pub encrypt_type: String,
    pub passphrase: String,
    pub uri: String,
    pub default_key: String,
    pub enable: bool,
    pub enable_wps: bool,
    pub enable_wls: bool,
    pub visible: bool,
    pub enable_wmm: bool,
    pub band_steering: bool,
    pub primary: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "crate::hitron::wire::GuestSsidGet")]
pub struct GuestSsid {
    pub enable: bool,
    pub if_name: String,
    pub relate: String,
}

/// GET /WiFi/WPS
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "crate::hitron::wire::WpsGet")]
pub struct WifiWps {
    pub status: Status,
    pub enable: bool,
    pub method: String,
    pub client_pin: String,
    /// The device's WPS progress text
    pub state: String,
    pub time_elapsed: Duration,
}

/// GET /WiFi/Client
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WifiClients {
    #[serde(flatten)]
    pub status: Status,
    #[serde(rename = "Client_List", default, deserialize_with = "crate::hitron::skip_invalid")]
    pub clients: Vec<WifiClient>,
}

/// A station associated with one of the radios.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "crate::hitron::wire::ClientGet")]
pub struct WifiClient {
    pub index: u32,
    pub aid: u32,
    pub band: String,
    pub ssid: String,
    pub hostname: String,
    pub mac_addr: MacAddress,
    /// Received signal strength indicator, dBm
    pub rssi: i32,
    /// Bits per second
    pub data_rate: u64,
    pub phy_mode: String,
    pub channel: u32,
    /// Hz
    pub bandwidth: u64,
}
