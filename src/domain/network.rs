use crate::domain::{MacAddress, Status};
use chrono_tz::Tz;
use serde::Deserialize;
use std::net::IpAddr;
use std::time::Duration;

/// GET /Time
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "crate::hitron::wire::TimeGet")]
pub struct Time {
    pub status: Status,
    /// SNTP synchronisation
    pub enable: bool,
    pub daylight: bool,
    pub daylight_time: i32,
    pub time_zone: Tz,
    pub sntp_server: String,
}

/// GET /DNS
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "crate::hitron::wire::DnsGet")]
pub struct Dns {
    pub status: Status,
    /// Whether the LAN DNS servers are taken from the provider or set manually
    pub auto_enable: bool,
    /// DNS proxying for DHCP clients on the LAN
    pub proxy_enable: bool,
    pub lan_dns1: Option<IpAddr>,
    pub lan_dns2: Option<IpAddr>,
    pub domain_suffix: String,
    pub proxy_name1: String,
    pub proxy_name2: String,
}

/// GET /DDNS
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "crate::hitron::wire::DdnsGet")]
pub struct Ddns {
    pub status: Status,
    pub enable: bool,
    /// `"<system>@<provider>"`, empty when the device reports an unknown provider
    pub provider: String,
    pub username: String,
    pub password: String,
    pub hostname: String,
    pub update_interval: Duration,
}

/// GET /Hosts
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Hosts {
    #[serde(flatten)]
    pub status: Status,
    #[serde(rename = "Hosts_List", default, deserialize_with = "crate::hitron::skip_invalid")]
    pub hosts: Vec<Host>,
}

/// A device known to the router's LAN.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "crate::hitron::wire::HostGet")]
pub struct Host {
    pub name: String,
    /// `"DHCP-IP"` or `"Static-IP"`
    pub address_source: String,
    pub mac_addr: MacAddress,
    pub ip: IpAddr,
    /// `"Ethernet"` or `"Self"` for wired hosts, the radio for wireless ones
    pub connect_type: String,
    pub connect_to: Option<MacAddress>,
    pub comnum: u32,
    pub app_enable: bool,
    pub action: String,
}

/// GET /Users/CSRF
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UsersCsrf {
    #[serde(flatten)]
    pub status: Status,
    #[serde(rename = "CSRF", default, deserialize_with = "crate::hitron::null_as_default")]
    pub csrf: String,
}
