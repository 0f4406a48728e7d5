use crate::domain::{MacAddress, Severity, Status, SubnetMask};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt::{Display, Formatter};
use std::net::IpAddr;
use std::time::Duration;

/// Identity of the cable modem. Also embedded in [`RouterSysInfo`](crate::domain::RouterSysInfo).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CmVersion {
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub device_id: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub model_name: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub vendor_name: String,
    #[serde(rename = "SerialNum", deserialize_with = "crate::hitron::null_as_default")]
    pub serial_num: String,
    #[serde(rename = "HwVersion", deserialize_with = "crate::hitron::null_as_default")]
    pub hw_version: String,
    #[serde(rename = "ApiVersion", deserialize_with = "crate::hitron::null_as_default")]
    pub api_version: String,
    #[serde(rename = "SoftwareVersion", deserialize_with = "crate::hitron::null_as_default")]
    pub software_version: String,
}

impl Display for CmVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DeviceID: {}", self.device_id)?;
        writeln!(f, "ModelName: {}", self.model_name)?;
        writeln!(f, "VendorName: {}", self.vendor_name)?;
        writeln!(f, "SerialNum: {}", self.serial_num)?;
        writeln!(f, "HwVersion: {}", self.hw_version)?;
        writeln!(f, "APIVersion: {}", self.api_version)?;
        writeln!(f, "SoftwareVersion: {}", self.software_version)
    }
}

/// GET /CM/Version
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CmVersionInfo {
    #[serde(flatten)]
    pub status: Status,
    #[serde(flatten)]
    pub version: CmVersion,
}

impl Display for CmVersionInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.status.is_success() {
            return writeln!(f, "{}", self.status);
        }
        self.version.fmt(f)
    }
}

/// DOCSIS provisioning steps, as reported (`"Success"`, `"Process"`, `"Disable"`, ...).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CmDocsisProvision {
    #[serde(flatten)]
    pub status: Status,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub hw_init: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub find_downstream: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub ranging: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub dhcp: String,
    #[serde(rename = "timeOfday", deserialize_with = "crate::hitron::null_as_default")]
    pub time_of_day: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub download_cfg: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub registration: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub eae_status: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub bpi_status: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub network_access: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub traffic_status: String,
}

/// A downstream or upstream QAM channel.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "crate::hitron::wire::PortInfoGet")]
pub struct PortInfo {
    pub port_id: String,
    pub channel_id: String,
    pub modulation: String,
    /// Hz
    pub frequency: u64,
    /// Upstream only, bits/s
    pub bandwidth: u64,
    /// dBmV
    pub signal_strength: f64,
    /// dB
    pub snr: f64,
    pub ds_octets: u64,
    pub correcteds: u64,
    pub uncorrect: u64,
}

/// GET /CM/DsInfo
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CmDsInfo {
    #[serde(flatten)]
    pub status: Status,
    #[serde(rename = "Freq_List", default, deserialize_with = "crate::hitron::skip_invalid")]
    pub ports: Vec<PortInfo>,
}

/// GET /CM/UsInfo
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CmUsInfo {
    #[serde(flatten)]
    pub status: Status,
    #[serde(rename = "Freq_List", default, deserialize_with = "crate::hitron::skip_invalid")]
    pub ports: Vec<PortInfo>,
}

/// A DOCSIS 3.1 OFDM downstream receiver.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "crate::hitron::wire::OfdmReceiverGet")]
pub struct OfdmReceiver {
    pub id: u32,
    /// `"4K"`, `"8K"` or empty when the receiver is idle
    pub fft_type: String,
    /// Hz
    pub subcarrier_zero_frequency: u64,
    pub plc_lock: bool,
    pub ncp_lock: bool,
    pub mdc1_lock: bool,
    pub plc_power: f64,
}

/// GET /CM/DsOfdm
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CmDsOfdm {
    #[serde(flatten)]
    pub status: Status,
    #[serde(rename = "Freq_List", default, deserialize_with = "crate::hitron::skip_invalid")]
    pub receivers: Vec<OfdmReceiver>,
}

/// A DOCSIS 3.1 OFDMA upstream channel.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "crate::hitron::wire::OfdmChannelGet")]
pub struct OfdmChannel {
    pub id: u32,
    pub enabled: bool,
    pub digital_attenuation: f64,
    pub digital_attenuation_backoff: f64,
    pub channel_bandwidth: f64,
    pub report_power: f64,
    pub report_power_1_6: f64,
    pub fft_size: String,
}

/// GET /CM/UsOfdm
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CmUsOfdm {
    #[serde(flatten)]
    pub status: Status,
    #[serde(rename = "Freq_List", default, deserialize_with = "crate::hitron::skip_invalid")]
    pub channels: Vec<OfdmChannel>,
}

/// GET /CM/SysInfo, the WAN side of the cable modem. Addresses are absent when the device
/// leaves them empty, for instance on a failed status.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "crate::hitron::wire::CmSysInfoGet")]
pub struct CmSysInfo {
    pub status: Status,
    /// `"Permitted"` or `"Denied"`
    pub network_access: String,
    pub ip: Option<IpAddr>,
    pub sub_mask: Option<SubnetMask>,
    pub gateway: Option<IpAddr>,
    pub lease: Duration,
    pub config_name: String,
    /// bits/s
    pub ds_data_rate: u64,
    /// bits/s
    pub us_data_rate: u64,
    pub mac_addr: Option<MacAddress>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "crate::hitron::wire::LogEntryGet")]
pub struct CmLogEntry {
    pub index: u32,
    pub time: DateTime<Utc>,
    pub r#type: String,
    pub priority: String,
    pub severity: Option<Severity>,
    pub event: String,
}

impl CmLogEntry {
    /// Name of the entry's severity, empty for unknown priorities.
    pub fn severity_name(&self) -> &'static str {
        self.severity.map(|s| s.name()).unwrap_or_default()
    }
}

/// GET /CM/Log
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CmLog {
    #[serde(flatten)]
    pub status: Status,
    #[serde(rename = "Log_List", default, deserialize_with = "crate::hitron::skip_invalid")]
    pub entries: Vec<CmLogEntry>,
}

impl Display for CmLog {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.status.is_success() {
            return writeln!(f, "{}", self.status);
        }

        for entry in &self.entries {
            writeln!(
                f,
                "{} [{}] {}",
                entry.time.format("%Y-%m-%d %H:%M:%S"),
                entry.severity_name(),
                entry.event
            )?;
        }
        Ok(())
    }
}
