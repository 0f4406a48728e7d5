use crate::domain::{CmVersion, Status};
use crate::hitron::NumberOrString;
use serde::Deserialize;

// GET /Router/SysInfo
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouterSysInfoGet {
    #[serde(flatten)]
    pub status: Status,
    #[serde(flatten)]
    pub version: CmVersion,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub sys_time: String, // "2020-11-17 02:12:33", local to `tz`
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub tz: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub lan_name: String,
    #[serde(rename = "privLanIP", deserialize_with = "crate::hitron::null_as_default")]
    pub priv_lan_ip: String, // "192.168.0.1/24"
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub lan_rx: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub lan_tx: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub wan_name: String,
    #[serde(rename = "wanIP", deserialize_with = "crate::hitron::null_as_default")]
    pub wan_ip: Vec<String>,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub wan_rx: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub wan_rx_pkts: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub wan_tx: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub wan_tx_pkts: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub dns: Vec<String>,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub rf_mac: String,
    #[serde(rename = "secDNS", deserialize_with = "crate::hitron::null_as_default")]
    pub sec_dns: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub system_lan_uptime: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub system_wan_uptime: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub router_mode: String,
}

// GET /Router/Capability
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RouterCapabilityGet {
    #[serde(flatten)]
    pub status: Status,
    #[serde(rename = "routerMode", deserialize_with = "crate::hitron::null_as_default")]
    pub router_mode: String,
    #[serde(rename = "gatewayOnOff", deserialize_with = "crate::hitron::null_as_default")]
    pub gateway_on_off: String,
    #[serde(rename = "uPnpOnOff", deserialize_with = "crate::hitron::null_as_default")]
    pub upnp_on_off: String,
    #[serde(rename = "HnapOnOff", deserialize_with = "crate::hitron::null_as_default")]
    pub hnap_on_off: String,
    #[serde(rename = "UsbOnOff", deserialize_with = "crate::hitron::null_as_default")]
    pub usb_on_off: String,
    #[serde(rename = "sipAlgOnOff", deserialize_with = "crate::hitron::null_as_default")]
    pub sip_alg_on_off: String,
}

// GET /Router/DMZ
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouterDmzGet {
    #[serde(flatten)]
    pub status: Status,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub enable: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub host: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub private_lan: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub sub_mask: String,
}

// GET /Router/PortForward/Status
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortForwardStatusGet {
    #[serde(flatten)]
    pub status: Status,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub all_rules_on_off: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub private_lan: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub sub_mask: String,
}

// GET /Router/PortForward/all, elements of `Rules_List`
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortForwardRuleGet {
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub id: NumberOrString,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub origin: NumberOrString,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub app_name: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub pub_start: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub pub_end: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub pri_start: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub pri_end: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub protocol: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub local_ip_addr: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub remote_ip_star: String, // sic
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub remote_ip_end: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub rule_on_off: String,
}

// GET /Router/PortTrigger/Status
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortTriggerStatusGet {
    #[serde(flatten)]
    pub status: Status,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub all_rules_on_off: String,
}

// GET /Router/PortTrigger/all, elements of `Rules_List`
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortTriggerRuleGet {
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub id: NumberOrString,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub rule_on_off: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub app_name: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub protocol: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub pub_start: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub pub_end: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub pri_start: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub pri_end: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub timeout: String, // milliseconds
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub twoway_on_off: String,
}
