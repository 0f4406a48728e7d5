use crate::domain::{CmLogEntry, CmSysInfo, OfdmChannel, OfdmReceiver, PortInfo, Severity, SubnetMask};
use crate::extensions::field_context::FieldContext;
use crate::hitron::FieldError;
use crate::hitron::wire::{CmSysInfoGet, LogEntryGet, OfdmChannelGet, OfdmReceiverGet, PortInfoGet};
use crate::parsers::{
    is_yes, parse_dhcp_lease, parse_float, parse_int, parse_ip_list, parse_optional_int, parse_optional_ip, parse_optional_mac,
};
use chrono::NaiveDateTime;

const LOG_TIME_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

impl TryFrom<PortInfoGet> for PortInfo {
    type Error = FieldError;

    fn try_from(raw: PortInfoGet) -> Result<Self, Self::Error> {
        let counter = |name: &'static str, value: &str| -> Result<u64, FieldError> {
            Ok(parse_optional_int(value).field(name, value)?.unwrap_or_default())
        };

        let modulation = if raw.modulation.is_empty() { raw.modulation_type } else { raw.modulation };

        Ok(PortInfo {
            frequency: counter("frequency", &raw.frequency)?,
            bandwidth: counter("bandwidth", &raw.bandwidth)?,
            ds_octets: counter("dsoctets", &raw.dsoctets)?,
            correcteds: counter("correcteds", &raw.correcteds)?,
            uncorrect: counter("uncorrect", &raw.uncorrect)?,
            signal_strength: parse_float(&raw.signal_strength),
            snr: parse_float(&raw.snr),
            port_id: raw.port_id,
            channel_id: raw.channel_id,
            modulation,
        })
    }
}

impl From<OfdmReceiverGet> for OfdmReceiver {
    fn from(raw: OfdmReceiverGet) -> Self {
        let fft_type = match raw.ffttype.trim() {
            "NA" => String::new(),
            fft_type => fft_type.to_string(),
        };

        OfdmReceiver {
            id: raw.receive.to_int(),
            fft_type,
            subcarrier_zero_frequency: parse_int(&raw.subcarrier_zero_frequency),
            plc_lock: is_yes(&raw.plclock),
            ncp_lock: is_yes(&raw.ncplock),
            mdc1_lock: is_yes(&raw.mdc1lock),
            plc_power: parse_float(&raw.plcpower),
        }
    }
}

impl From<OfdmChannelGet> for OfdmChannel {
    fn from(raw: OfdmChannelGet) -> Self {
        OfdmChannel {
            id: raw.uschindex.to_int(),
            enabled: raw.state.trim() == "ENABLED",
            digital_attenuation: parse_float(&raw.dig_atten),
            digital_attenuation_backoff: parse_float(&raw.dig_atten_bo),
            channel_bandwidth: parse_float(&raw.channel_bw),
            report_power: parse_float(&raw.rep_power),
            report_power_1_6: parse_float(&raw.rep_power_1_6),
            fft_size: raw.fft_val.trim().to_string(),
        }
    }
}

impl TryFrom<CmSysInfoGet> for CmSysInfo {
    type Error = FieldError;

    fn try_from(raw: CmSysInfoGet) -> Result<Self, Self::Error> {
        // The device reports a single WAN address as a list
        let ip = parse_ip_list(&raw.ip).field("ip", &raw.ip.join(","))?.first().copied();

        Ok(CmSysInfo {
            ip,
            sub_mask: SubnetMask::parse(&raw.sub_mask),
            gateway: parse_optional_ip(&raw.gw).field("gw", &raw.gw)?,
            mac_addr: parse_optional_mac(&raw.mac_addr).field("macAddr", &raw.mac_addr)?,
            ds_data_rate: parse_optional_int(&raw.ds_data_rate)
                .field("DsDataRate", &raw.ds_data_rate)?
                .unwrap_or_default(),
            us_data_rate: parse_optional_int(&raw.us_data_rate)
                .field("UsDataRate", &raw.us_data_rate)?
                .unwrap_or_default(),
            lease: parse_dhcp_lease(&raw.lease),
            status: raw.status,
            network_access: raw.network_access,
            config_name: raw.config_name,
        })
    }
}

impl TryFrom<LogEntryGet> for CmLogEntry {
    type Error = FieldError;

    fn try_from(raw: LogEntryGet) -> Result<Self, Self::Error> {
        let time = NaiveDateTime::parse_from_str(&raw.time, LOG_TIME_FORMAT)
            .field("time", &raw.time)?
            .and_utc();

        Ok(CmLogEntry {
            index: raw.index.to_int(),
            time,
            severity: Severity::from_code(&raw.priority),
            r#type: raw.r#type,
            priority: raw.priority,
            event: raw.event,
        })
    }
}
