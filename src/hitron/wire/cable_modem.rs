use crate::domain::Status;
use crate::hitron::NumberOrString;
use serde::Deserialize;

// GET /CM/DsInfo and /CM/UsInfo, elements of `Freq_List`
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortInfoGet {
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub port_id: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub frequency: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub modulation: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub modulation_type: String, // upstream name of `modulation`
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub bandwidth: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub signal_strength: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub snr: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub channel_id: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub dsoctets: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub correcteds: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub uncorrect: String,
}

// GET /CM/DsOfdm, elements of `Freq_List`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OfdmReceiverGet {
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub receive: NumberOrString,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub ffttype: String,
    #[serde(rename = "Subcarr0freqFreq", deserialize_with = "crate::hitron::null_as_default")]
    pub subcarrier_zero_frequency: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub plclock: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub ncplock: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub mdc1lock: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub plcpower: String,
}

// GET /CM/UsOfdm, elements of `Freq_List`. The numbers are padded with spaces.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OfdmChannelGet {
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub uschindex: NumberOrString,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub dig_atten: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub dig_atten_bo: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub channel_bw: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub rep_power: String,
    #[serde(rename = "repPower1_6", deserialize_with = "crate::hitron::null_as_default")]
    pub rep_power_1_6: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub fft_val: String,
}

// GET /CM/SysInfo
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CmSysInfoGet {
    #[serde(flatten)]
    pub status: Status,
    #[serde(rename = "ntAccess", deserialize_with = "crate::hitron::null_as_default")]
    pub network_access: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub ip: Vec<String>,
    #[serde(rename = "subMask", deserialize_with = "crate::hitron::null_as_default")]
    pub sub_mask: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub gw: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub lease: String,
    #[serde(rename = "Configname", deserialize_with = "crate::hitron::null_as_default")]
    pub config_name: String,
    #[serde(rename = "DsDataRate", deserialize_with = "crate::hitron::null_as_default")]
    pub ds_data_rate: String,
    #[serde(rename = "UsDataRate", deserialize_with = "crate::hitron::null_as_default")]
    pub us_data_rate: String,
    #[serde(rename = "macAddr", deserialize_with = "crate::hitron::null_as_default")]
    pub mac_addr: String,
}

// GET /CM/Log, elements of `Log_List`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LogEntryGet {
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub index: NumberOrString,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub time: String,
    pub r#type: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub priority: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub event: String,
}
