use crate::domain::Status;
use crate::hitron::NumberOrString;
use serde::Deserialize;

// GET /Time
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeGet {
    #[serde(flatten)]
    pub status: Status,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub sntp_on_off: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub sntp_time_zone: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub sntp_srv_name: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub daylight_on_off: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub daylight_time: String,
}

// GET /DNS
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DnsGet {
    #[serde(flatten)]
    pub status: Status,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub lan_dns_on_off: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub landns1: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub landns2: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub dns_proxy_on_off: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub domain_suffix: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub proxy_name1: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub proxy_name2: String,
}

// GET /DDNS
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DdnsGet {
    #[serde(flatten)]
    pub status: Status,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub ddns_on_off: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub ddns_srv_provider: NumberOrString,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub ddns_username: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub ddns_password: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub ddns_hostnames: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub ddns_update_interval: String, // seconds
}

// GET /Hosts, elements of `Hosts_List`
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostGet {
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub host_name: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub address_source: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub mac_addr: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub ip: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub connect_type: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub connect_to: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub comnum: NumberOrString,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub app_enable: String,
    #[serde(deserialize_with = "crate::hitron::null_as_default")]
    pub action: String,
}
