use crate::domain::{
    AccessControlRule, AccessPoint, GuestSsid, Ssid, WifiClient, WifiGuestSsid, WifiMode, WifiRadio, WifiRadioAdvanced,
    WifiWps,
};
use crate::extensions::field_context::FieldContext;
use crate::hitron::FieldError;
use crate::hitron::wire::{
    AccessControlRuleGet, AccessPointGet, ClientGet, GuestSsidGet, GuestSsidSettingsGet, RadioAdvancedGet, RadioGet,
    SsidGet, WpsGet,
};
use crate::parsers::{is_enabled, is_on, is_yes, parse_int, parse_mac};
use std::time::Duration;

const MEBI: u64 = 1024 * 1024;
const MEGA: u64 = 1_000_000;

/// Parses `"<n><unit>"` into `n * factor`. A missing unit or an unparsable number is zero.
fn parse_with_unit(s: &str, unit: &str, factor: u64) -> u64 {
    s.trim()
        .strip_suffix(unit)
        .map(|n| parse_int::<u64>(n).saturating_mul(factor))
        .unwrap_or_default()
}

impl TryFrom<AccessControlRuleGet> for AccessControlRule {
    type Error = FieldError;

    fn try_from(raw: AccessControlRuleGet) -> Result<Self, Self::Error> {
        Ok(AccessControlRule {
            id: raw.id.to_int(),
            mac_addr: parse_mac(&raw.mac_addr).field("macAddr", &raw.mac_addr)?,
            hostname: raw.host_name,
        })
    }
}

impl From<GuestSsidSettingsGet> for WifiGuestSsid {
    fn from(raw: GuestSsidSettingsGet) -> Self {
        WifiGuestSsid {
            status: raw.status,
            enable: is_on(&raw.enable),
            max_users: parse_int(&raw.admin_guest_acc_provider),
            ssid: raw.ssid_name,
            ssid_5g: raw.ssid_name_5g,
            password: raw.pswd,
        }
    }
}

impl From<RadioGet> for WifiRadio {
    fn from(raw: RadioGet) -> Self {
        WifiRadio {
            channel: raw.wls_channel.to_int(),
            current_channel: parse_int(&raw.wls_current_channel),
            mode: WifiMode::from_code(&raw.wls_mode),
            enable: is_on(&raw.wls_on_off),
            enable_dcs: is_on(&raw.wls_dcs_on_off),
            enable_dfs: is_on(&raw.wls_dfs_on_off),
            enable_wps: is_on(&raw.wls_wps_on_off),
            igmp_snoop: is_on(&raw.igmp_snoop),
            auto_channel: is_on(&raw.auto_channel),
            status: raw.status,
            vendor: raw.vendor,
            band: raw.band,
            channel_bandwidth: raw.n_bandwidth,
            radio_uri: raw.radio_uri,
        }
    }
}

impl From<RadioAdvancedGet> for WifiRadioAdvanced {
    fn from(raw: RadioAdvancedGet) -> Self {
        WifiRadioAdvanced {
            n_mcs: parse_int(&raw.n_mcs),
            n_coexistence: is_enabled(&raw.n_coexistence),
            n_rdg: is_enabled(&raw.n_rdg),
            n_amsdu: is_enabled(&raw.n_amsdu),
            n_autoba: is_enabled(&raw.n_autoba),
            n_badecline: is_enabled(&raw.n_badecline),
            band_steering: is_on(&raw.bandsteering),
            show_mso: raw.show_mso == "true",
            radio: WifiRadio::from(raw.radio),
            ssid: raw.ssid_name,
            bg_mode: raw.bg_mode,
            n_operating_mode: raw.n_operating_mode,
            n_guard_interval: raw.n_guard_interval,
            tx_stream: raw.tx_stream,
            rx_stream: raw.rx_stream,
        }
    }
}

impl TryFrom<AccessPointGet> for AccessPoint {
    type Error = FieldError;

    fn try_from(raw: AccessPointGet) -> Result<Self, Self::Error> {
        Ok(AccessPoint {
            bssid: parse_mac(&raw.bssid).field("bssid", &raw.bssid)?,
            channel: raw.wls_channel.to_int(),
            signal: parse_int(&raw.signal),
            wps: is_yes(&raw.wps),
            band: raw.band,
            ssid: raw.ssid_name,
            wmode: raw.wmode,
            security: raw.security,
            ext_ch: raw.extch,
            nt: raw.nt,
        })
    }
}

impl TryFrom<SsidGet> for Ssid {
    type Error = FieldError;

    fn try_from(raw: SsidGet) -> Result<Self, Self::Error> {
        Ok(Ssid {
            bssid: parse_mac(&raw.bssid).field("bssid", &raw.bssid)?,
            id: raw.id.to_int(),
            radio: raw.radio.to_int(),
            enable: is_on(&raw.enable),
            enable_wps: is_on(&raw.wls_wps_on_off),
            enable_wls: is_on(&raw.wls_enable),
            visible: is_on(&raw.visible),
            enable_wmm: is_on(&raw.wmm),
            band_steering: is_on(&raw.bandsteer),
            primary: is_yes(&raw.primary),
            name: raw.ssid_name,
            band: raw.band,
            if_name: raw.if_name,
            auth_mode: raw.auth_mode,
            security_mode: raw.secu_mode,
            encrypt_type: raw.encrypt_type,
            passphrase: raw.pass_phrase,
            uri: raw.ssid_uri,
            default_key: raw.default_key,
        })
    }
}

impl From<GuestSsidGet> for GuestSsid {
    fn from(raw: GuestSsidGet) -> Self {
        GuestSsid {
            enable: is_on(&raw.enable),
            if_name: raw.if_name,
            relate: raw.relate,
        }
    }
}

impl From<WpsGet> for WifiWps {
    fn from(raw: WpsGet) -> Self {
        WifiWps {
            status: raw.status,
            enable: is_on(&raw.wls_wps_on_off),
            time_elapsed: Duration::from_secs(parse_int(&raw.wls_wps_time_elapsed)),
            method: raw.wls_wps_method,
            client_pin: raw.wls_wps_client_pin,
            state: raw.wls_wps_status,
        }
    }
}

impl TryFrom<ClientGet> for WifiClient {
    type Error = FieldError;

    fn try_from(raw: ClientGet) -> Result<Self, Self::Error> {
        Ok(WifiClient {
            mac_addr: parse_mac(&raw.mac).field("mac", &raw.mac)?,
            index: raw.index.to_int(),
            aid: raw.aid.to_int(),
            rssi: parse_int(&raw.rssi),
            channel: parse_int(&raw.ch),
            data_rate: parse_with_unit(&raw.br, "M", MEBI),
            bandwidth: parse_with_unit(&raw.bw, "MHz", MEGA),
            band: raw.band,
            ssid: raw.ssid,
            hostname: raw.hostname,
            phy_mode: raw.pm,
        })
    }
}
