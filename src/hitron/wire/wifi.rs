use crate::domain::Status;
use crate::hitron::NumberOrString;
use serde::Deserialize;

// GET /WiFi/AccessControl, elements of `Rules_List`
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccessControlRuleGet {
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub id: NumberOrString,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub host_name: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub mac_addr: String,
}

// GET /WiFi/GuestSSID
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GuestSsidSettingsGet {
    #[serde(flatten)]
    pub status: Status,
    #[serde(rename = "ssidName", deserialize_with = "crate::hitron::null_as_default")]
    pub ssid_name: String,
    #[serde(rename = "ssidName5G", deserialize_with = "crate::hitron::null_as_default")]
    pub ssid_name_5g: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub enable: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub pswd: String,
    #[serde(rename = "adminGuestAccProvider", deserialize_with = "crate::hitron::null_as_default")]
    pub admin_guest_acc_provider: String, // maximum number of guests
}

// GET /WiFi/Radios/<n>, elements of `Raidos_List` and the base of `Advanced_List` elements
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RadioGet {
    #[serde(flatten)]
    pub status: Status,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub vendor: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub band: String,
    #[serde(rename = "wlsOnOff", deserialize_with = "crate::hitron::null_as_default")]
    pub wls_on_off: String,
    #[serde(rename = "wlsDcsOnOff", deserialize_with = "crate::hitron::null_as_default")]
    pub wls_dcs_on_off: String,
    #[serde(rename = "wlsMode", deserialize_with = "crate::hitron::null_as_default")]
    pub wls_mode: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub n_bandwidth: String,
    #[serde(rename = "wlsChannel", deserialize_with = "crate::hitron::null_as_default")]
    pub wls_channel: NumberOrString,
    #[serde(rename = "autoChannel", deserialize_with = "crate::hitron::null_as_default")]
    pub auto_channel: String,
    #[serde(rename = "wlsDfsOnOff", deserialize_with = "crate::hitron::null_as_default")]
    pub wls_dfs_on_off: String,
    #[serde(rename = "wlsCurrentChannel", deserialize_with = "crate::hitron::null_as_default")]
    pub wls_current_channel: String,
    #[serde(rename = "wlswpsOnOff", deserialize_with = "crate::hitron::null_as_default")]
    pub wls_wps_on_off: String,
    #[serde(rename = "igmpSnoop", deserialize_with = "crate::hitron::null_as_default")]
    pub igmp_snoop: String,
    #[serde(rename = "Radio_URI", deserialize_with = "crate::hitron::null_as_default")]
    pub radio_uri: String,
}

// GET /WiFi/Radios/Advanced, elements of `Advanced_List`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RadioAdvancedGet {
    #[serde(flatten)]
    pub radio: RadioGet,
    #[serde(rename = "bgMode", deserialize_with = "crate::hitron::null_as_default")]
    pub bg_mode: String,
    #[serde(rename = "ssidName", deserialize_with = "crate::hitron::null_as_default")]
    pub ssid_name: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub n_coexistence: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub bandsteering: String,
    #[serde(rename = "n_OperatingMode", deserialize_with = "crate::hitron::null_as_default")]
    pub n_operating_mode: String,
    #[serde(rename = "n_GuardInterval", deserialize_with = "crate::hitron::null_as_default")]
    pub n_guard_interval: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub n_mcs: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub n_rdg: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub n_amsdu: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub n_autoba: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub n_badecline: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub tx_stream: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub rx_stream: String,
    #[serde(rename = "showMSO", deserialize_with = "crate::hitron::null_as_default")]
    pub show_mso: String,
}

// GET /WiFi/Radios/Survey, elements of `APs_List`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AccessPointGet {
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub band: String,
    #[serde(rename = "ssidName", deserialize_with = "crate::hitron::null_as_default")]
    pub ssid_name: String,
    #[serde(rename = "wlsChannel", deserialize_with = "crate::hitron::null_as_default")]
    pub wls_channel: NumberOrString,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub bssid: String, // "ca:fe:de:ad:be:ef\n"
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub signal: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub wmode: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub security: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub wps: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub extch: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub nt: String,
}

// GET /WiFi/SSIDs, elements of `SSIDs_List`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SsidGet {
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub id: NumberOrString,
    #[serde(rename = "ssidName", deserialize_with = "crate::hitron::null_as_default")]
    pub ssid_name: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub band: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub enable: String,
    #[serde(rename = "wlswpsOnOff", deserialize_with = "crate::hitron::null_as_default")]
    pub wls_wps_on_off: String,
    #[serde(rename = "ifName", deserialize_with = "crate::hitron::null_as_default")]
    pub if_name: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub bssid: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub radio: NumberOrString,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub visible: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub wmm: String,
    #[serde(rename = "authMode", deserialize_with = "crate::hitron::null_as_default")]
    pub auth_mode: String,
    #[serde(rename = "SecuMode", deserialize_with = "crate::hitron::null_as_default")]
    pub secu_mode: String,
    #[serde(rename = "encryptType", deserialize_with = "crate::hitron::null_as_default")]
    pub encrypt_type: String,
    #[serde(rename = "passPhrase", deserialize_with = "crate::hitron::null_as_default")]
    pub pass_phrase: String,
    #[serde(rename = "wlsEnable", deserialize_with = "crate::hitron::null_as_default")]
    pub wls_enable: String,
    #[serde(rename = "SSID_URI", deserialize_with = "crate::hitron::null_as_default")]
    pub ssid_uri: String,
    #[serde(rename = "defaultKey", deserialize_with = "crate::hitron::null_as_default")]
    pub default_key: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub bandsteer: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub primary: String,
}

// GET /WiFi/SSIDs, elements of `Guests_List`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GuestSsidGet {
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub enable: String,
    #[serde(rename = "ifName", deserialize_with = "crate::hitron::null_as_default")]
    pub if_name: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub relate: String,
}

// GET /WiFi/WPS
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WpsGet {
    #[serde(flatten)]
    pub status: Status,
    #[serde(rename = "wlswpsOnOff", deserialize_with = "crate::hitron::null_as_default")]
    pub wls_wps_on_off: String,
    #[serde(rename = "wlsWpsMethod", deserialize_with = "crate::hitron::null_as_default")]
    pub wls_wps_method: String,
    #[serde(rename = "wlsWpsClientPin", deserialize_with = "crate::hitron::null_as_default")]
    pub wls_wps_client_pin: String,
    #[serde(rename = "wlsWpsStatus", deserialize_with = "crate::hitron::null_as_default")]
    pub wls_wps_status: String,
    #[serde(rename = "wlsWpsTimeElapsed", deserialize_with = "crate::hitron::null_as_default")]
    pub wls_wps_time_elapsed: String, // seconds
}

// GET /WiFi/Client, elements of `Client_List`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClientGet {
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub aid: NumberOrString,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub index: NumberOrString,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub band: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub ssid: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub hostname: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub mac: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub rssi: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub br: String, // data rate, "866M"
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub pm: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub ch: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub bw: String, // "80MHz"
}
