use crate::domain::{
    IpRange, PortForwardRule, PortRange, PortTriggerRule, RouterCapability, RouterDmz, RouterPortForwardStatus,
    RouterPortTriggerStatus, RouterSysInfo, SubnetMask,
};
use crate::extensions::field_context::FieldContext;
use crate::hitron::FieldError;
use crate::hitron::wire::{
    PortForwardRuleGet, PortForwardStatusGet, PortTriggerRuleGet, PortTriggerStatusGet, RouterCapabilityGet, RouterDmzGet,
    RouterSysInfoGet,
};
use crate::parsers::{
    is_on, parse_formatted_byte_count, parse_int, parse_ip_list, parse_optional_int, parse_optional_ip, parse_optional_mac,
    parse_port, parse_uptime, resolve_time_zone_or_utc,
};
use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use ipnetwork::IpNetwork;
use std::time::Duration;

const SYSTEM_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl TryFrom<RouterSysInfoGet> for RouterSysInfo {
    type Error = FieldError;

    fn try_from(raw: RouterSysInfoGet) -> Result<Self, Self::Error> {
        let system_time = parse_system_time(&raw.sys_time, &raw.tz)?;

        let private_lan = match raw.priv_lan_ip.trim() {
            "" => None,
            cidr => Some(cidr.parse::<IpNetwork>().field("privLanIP", &raw.priv_lan_ip)?),
        };

        Ok(RouterSysInfo {
            system_time,
            private_lan,
            wan_ips: parse_ip_list(&raw.wan_ip).field("wanIP", &raw.wan_ip.join(","))?,
            dns: parse_ip_list(&raw.dns).field("dns", &raw.dns.join(","))?,
            rf_mac: parse_optional_mac(&raw.rf_mac).field("rfMac", &raw.rf_mac)?,
            // Some firmware leaves stale values here, it is informational only
            secondary_dns: parse_optional_ip(&raw.sec_dns).ok().flatten(),
            system_lan_uptime: parse_uptime(&raw.system_lan_uptime).field("systemLanUptime", &raw.system_lan_uptime)?,
            system_wan_uptime: parse_uptime(&raw.system_wan_uptime).field("systemWanUptime", &raw.system_wan_uptime)?,
            lan_rx: parse_formatted_byte_count(&raw.lan_rx),
            lan_tx: parse_formatted_byte_count(&raw.lan_tx),
            wan_rx: parse_formatted_byte_count(&raw.wan_rx),
            wan_tx: parse_formatted_byte_count(&raw.wan_tx),
            wan_rx_packets: parse_int(&raw.wan_rx_pkts),
            wan_tx_packets: parse_int(&raw.wan_tx_pkts),
            status: raw.status,
            version: raw.version,
            lan_name: raw.lan_name,
            wan_name: raw.wan_name,
            router_mode: raw.router_mode,
        })
    }
}

/// The system time is local to the router's time zone. An unknown zone is treated as UTC.
fn parse_system_time(sys_time: &str, tz: &str) -> Result<Option<DateTime<Tz>>, FieldError> {
    if sys_time.trim().is_empty() {
        return Ok(None);
    }

    let naive = NaiveDateTime::parse_from_str(sys_time.trim(), SYSTEM_TIME_FORMAT).field("sysTime", sys_time)?;
    let zone = resolve_time_zone_or_utc(tz);

    // Around DST transitions a local time can be ambiguous, the earliest instant wins
    zone.from_local_datetime(&naive)
        .earliest()
        .map(Some)
        .ok_or_else(|| FieldError {
            field: "sysTime",
            value: sys_time.to_string(),
            reason: format!("does not exist in {}", zone.name()),
        })
}

impl From<RouterCapabilityGet> for RouterCapability {
    fn from(raw: RouterCapabilityGet) -> Self {
        RouterCapability {
            status: raw.status,
            router_mode: raw.router_mode,
            gateway: is_on(&raw.gateway_on_off),
            upnp: is_on(&raw.upnp_on_off),
            hnap: is_on(&raw.hnap_on_off),
            usb: is_on(&raw.usb_on_off),
            sip_alg: is_on(&raw.sip_alg_on_off),
        }
    }
}

impl TryFrom<RouterDmzGet> for RouterDmz {
    type Error = FieldError;

    fn try_from(raw: RouterDmzGet) -> Result<Self, Self::Error> {
        Ok(RouterDmz {
            enable: is_on(&raw.enable),
            host: parse_optional_ip(&raw.host).field("host", &raw.host)?,
            private_lan: parse_optional_ip(&raw.private_lan).field("privateLan", &raw.private_lan)?,
            sub_mask: SubnetMask::parse(&raw.sub_mask),
            status: raw.status,
        })
    }
}

impl TryFrom<PortForwardStatusGet> for RouterPortForwardStatus {
    type Error = FieldError;

    fn try_from(raw: PortForwardStatusGet) -> Result<Self, Self::Error> {
        Ok(RouterPortForwardStatus {
            enable: is_on(&raw.all_rules_on_off),
            private_lan: parse_optional_ip(&raw.private_lan).field("privateLan", &raw.private_lan)?,
            sub_mask: SubnetMask::parse(&raw.sub_mask),
            status: raw.status,
        })
    }
}

impl TryFrom<PortForwardRuleGet> for PortForwardRule {
    type Error = FieldError;

    fn try_from(raw: PortForwardRuleGet) -> Result<Self, Self::Error> {
        Ok(PortForwardRule {
            id: raw.id.to_int(),
            origin: raw.origin.to_int(),
            enable: is_on(&raw.rule_on_off),
            public_ports: port_range(&raw.pub_start, &raw.pub_end),
            private_ports: port_range(&raw.pri_start, &raw.pri_end),
            local_ip: parse_optional_ip(&raw.local_ip_addr).field("localIpAddr", &raw.local_ip_addr)?,
            remote_ips: IpRange {
                start: parse_optional_ip(&raw.remote_ip_star).field("remoteIpStar", &raw.remote_ip_star)?,
                end: parse_optional_ip(&raw.remote_ip_end).field("remoteIpEnd", &raw.remote_ip_end)?,
            },
            app_name: raw.app_name,
            protocol: raw.protocol,
        })
    }
}

impl From<PortTriggerStatusGet> for RouterPortTriggerStatus {
    fn from(raw: PortTriggerStatusGet) -> Self {
        RouterPortTriggerStatus {
            status: raw.status,
            enable: is_on(&raw.all_rules_on_off),
        }
    }
}

impl From<PortTriggerRuleGet> for PortTriggerRule {
    fn from(raw: PortTriggerRuleGet) -> Self {
        let timeout_ms = parse_optional_int::<u64>(&raw.timeout).ok().flatten().unwrap_or_default();

        PortTriggerRule {
            id: raw.id.to_int(),
            enable: is_on(&raw.rule_on_off),
            trigger_ports: port_range(&raw.pub_start, &raw.pub_end),
            target_ports: port_range(&raw.pri_start, &raw.pri_end),
            timeout: Duration::from_millis(timeout_ms),
            two_way: is_on(&raw.twoway_on_off),
            app_name: raw.app_name,
            protocol: raw.protocol,
        }
    }
}

fn port_range(start: &str, end: &str) -> PortRange {
    PortRange {
        start: parse_port(start),
        end: parse_port(end),
    }
}
