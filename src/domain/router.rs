use crate::domain::{CmVersion, MacAddress, Status, SubnetMask};
use crate::extensions::duration_ext::ToHms;
use crate::extensions::thousands_ext::ThousandsSeparated;
use crate::parsers::format_byte_count;
use chrono::DateTime;
use chrono_tz::Tz;
use ipnetwork::IpNetwork;
use serde::Deserialize;
use std::fmt::{Display, Formatter};
use std::net::IpAddr;
use std::time::Duration;

/// GET /Router/SysInfo
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "crate::hitron::wire::RouterSysInfoGet")]
pub struct RouterSysInfo {
    pub status: Status,
    pub version: CmVersion,
    pub system_time: Option<DateTime<Tz>>,
    pub lan_name: String,
    /// The router's LAN address together with the LAN's prefix
    pub private_lan: Option<IpNetwork>,
    pub lan_rx: u64,
    pub lan_tx: u64,
    pub wan_name: String,
    pub wan_ips: Vec<IpAddr>,
    pub wan_rx: u64,
    pub wan_rx_packets: u64,
    pub wan_tx: u64,
    pub wan_tx_packets: u64,
    pub dns: Vec<IpAddr>,
    pub secondary_dns: Option<IpAddr>,
    pub rf_mac: Option<MacAddress>,
    pub system_lan_uptime: Duration,
    pub system_wan_uptime: Duration,
    /// `"Dualstack"`, `"IPv4"`, ...
    pub router_mode: String,
}

fn join<T: Display>(values: &[T]) -> String {
    values.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

impl Display for RouterSysInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.status.is_success() && !self.status.message.is_empty() {
            return write!(f, "{}", self.status);
        }

        let v = &self.version;
        writeln!(f, "CMVersion:")?;
        writeln!(f, "\tDeviceID: {}", v.device_id)?;
        writeln!(f, "\tModelName: {}", v.model_name)?;
        writeln!(f, "\tVendorName: {}", v.vendor_name)?;
        writeln!(f, "\tSerialNum: {}", v.serial_num)?;
        writeln!(f, "\tHwVersion: {}", v.hw_version)?;
        writeln!(f, "\tAPIVersion: {}", v.api_version)?;
        writeln!(f, "\tSoftwareVersion: {}", v.software_version)?;

        let system_time = self.system_time.map(|t| t.format("%Y-%m-%d %H:%M:%S %z %Z").to_string());
        writeln!(f, "SystemTime: {}", system_time.unwrap_or_default())?;

        let (lan_ip, lan_net) = self
            .private_lan
            .map(|n| (n.ip().to_string(), format!("{}/{}", n.network(), n.prefix())))
            .unwrap_or_default();
        writeln!(f, "LAN: {} (IP {}) (Net {})", self.lan_name, lan_ip, lan_net)?;
        writeln!(f, "\tRx/Tx: {}/{}", format_byte_count(self.lan_rx), format_byte_count(self.lan_tx))?;

        writeln!(f, "WAN: {} ({})", self.wan_name, join(&self.wan_ips))?;
        writeln!(f, "\tRx/Tx: {}/{}", format_byte_count(self.wan_rx), format_byte_count(self.wan_tx))?;
        writeln!(
            f,
            "\tRx/Tx Packets: {}/{}",
            self.wan_rx_packets.separated(),
            self.wan_tx_packets.separated()
        )?;

        writeln!(f, "DNS: {}", join(&self.dns))?;
        if let Some(secondary_dns) = self.secondary_dns {
            writeln!(f, "SecDNS: {}", secondary_dns)?;
        }

        let rf_mac = self.rf_mac.map(|m| m.to_string());
        writeln!(f, "RFMac: {}", rf_mac.unwrap_or_default())?;
        writeln!(
            f,
            "System Uptime: LAN {}, WAN {}",
            self.system_lan_uptime.to_hms(),
            self.system_wan_uptime.to_hms()
        )?;
        writeln!(f, "RouterMode: {}", self.router_mode)
    }
}

/// GET /Router/Capability
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "crate::hitron::wire::RouterCapabilityGet")]
pub struct RouterCapability {
    pub status: Status,
    pub router_mode: String,
    pub gateway: bool,
    pub upnp: bool,
    pub hnap: bool,
    pub usb: bool,
    pub sip_alg: bool,
}

impl Display for RouterCapability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.status.is_success() {
            return write!(f, "{}", self.status);
        }

        write!(f, "RouterMode: {}", self.router_mode)?;
        let flags = [
            (self.gateway, "Gateway"),
            (self.upnp, "UPnP"),
            (self.hnap, "HNAP"),
            (self.usb, "USB"),
            (self.sip_alg, "SIPAlg"),
        ];
        for (_, name) in flags.iter().filter(|(on, _)| *on) {
            write!(f, "/{}", name)?;
        }
        Ok(())
    }
}

/// GET /Router/Location
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RouterLocation {
    #[serde(flatten)]
    pub status: Status,
    #[serde(rename = "locationText", default, deserialize_with = "crate::hitron::null_as_default")]
    pub location_text: String,
}

impl Display for RouterLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.status.is_success() {
            return write!(f, "{}", self.status);
        }
        f.write_str(&self.location_text)
    }
}

/// GET /Router/DMZ
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "crate::hitron::wire::RouterDmzGet")]
pub struct RouterDmz {
    pub status: Status,
    pub enable: bool,
    pub host: Option<IpAddr>,
    pub private_lan: Option<IpAddr>,
    pub sub_mask: Option<SubnetMask>,
}

/// GET /Router/PortForward/Status
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "crate::hitron::wire::PortForwardStatusGet")]
pub struct RouterPortForwardStatus {
    pub status: Status,
    pub enable: bool,
    pub private_lan: Option<IpAddr>,
    pub sub_mask: Option<SubnetMask>,
}

/// An inclusive port range. Unparsable ports are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortRange {
    pub start: u16,
    pub end: u16,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IpRange {
    pub start: Option<IpAddr>,
    pub end: Option<IpAddr>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "crate::hitron::wire::PortForwardRuleGet")]
pub struct PortForwardRule {
    pub id: u32,
    pub origin: u32,
    pub app_name: String,
    /// `"TCP"`, `"UDP"` or `"TCP/UDP"`
    pub protocol: String,
    pub enable: bool,
    pub public_ports: PortRange,
    pub private_ports: PortRange,
    pub local_ip: Option<IpAddr>,
    pub remote_ips: IpRange,
}

/// GET /Router/PortForward/all
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RouterPortForwardAll {
    #[serde(flatten)]
    pub status: Status,
    #[serde(default, deserialize_with = "crate::hitron::deserialize_int")]
    pub total: u32,
    #[serde(rename = "Rules_List", default, deserialize_with = "crate::hitron::skip_invalid")]
    pub rules: Vec<PortForwardRule>,
}

/// GET /Router/PortTrigger/Status
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "crate::hitron::wire::PortTriggerStatusGet")]
pub struct RouterPortTriggerStatus {
    pub status: Status,
    pub enable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "crate::hitron::wire::PortTriggerRuleGet")]
pub struct PortTriggerRule {
    pub id: u32,
    pub enable: bool,
    pub app_name: String,
    pub protocol: String,
    /// Outgoing ports that open the target ports
    pub trigger_ports: PortRange,
    /// Incoming ports forwarded to the triggering host
    pub target_ports: PortRange,
    pub timeout: Duration,
    pub two_way: bool,
}

/// GET /Router/PortTrigger/all
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RouterPortTriggerAll {
    #[serde(flatten)]
    pub status: Status,
    #[serde(default, deserialize_with = "crate::hitron::deserialize_int")]
    pub total: u32,
    #[serde(rename = "Rules_List", default, deserialize_with = "crate::hitron::skip_invalid")]
    pub rules: Vec<PortTriggerRule>,
}

/// GET /Router/TR069
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RouterTr069 {
    #[serde(flatten)]
    pub status: Status,
    #[serde(rename = "tr069url", default, deserialize_with = "crate::hitron::null_as_default")]
    pub tr069_url: String,
}
