use crate::domain::{Ddns, Dns, Host, Time};
use crate::extensions::field_context::FieldContext;
use crate::hitron::FieldError;
use crate::hitron::wire::{DdnsGet, DnsGet, HostGet, TimeGet};
use crate::parsers::{is_on, parse_int, parse_ip, parse_mac, parse_optional_ip, resolve_time_zone_or_utc};
use std::time::Duration;

const DDNS_PROVIDERS: [&str; 11] = [
    "dyndns@dyndns.org",
    "default@freedns.afraid.org",
    "default@zoneedit.com",
    "default@no-ip.com",
    "default@easydns.com",
    "default@tzo.com",
    "dyndns@3322.org",
    "default@sitelutions.com",
    "default@dnsomatic.com",
    "ipv6tb@he.net",
    "default@dynsip.org",
];

/// Maps the device's 1-based provider number to its name, unknown numbers have no name.
pub fn ddns_provider(code: usize) -> &'static str {
    code.checked_sub(1)
        .and_then(|index| DDNS_PROVIDERS.get(index))
        .copied()
        .unwrap_or_default()
}

impl From<TimeGet> for Time {
    fn from(raw: TimeGet) -> Self {
        Time {
            status: raw.status,
            enable: is_on(&raw.sntp_on_off),
            daylight: is_on(&raw.daylight_on_off),
            daylight_time: parse_int(&raw.daylight_time),
            time_zone: resolve_time_zone_or_utc(&raw.sntp_time_zone),
            sntp_server: raw.sntp_srv_name,
        }
    }
}

impl TryFrom<DnsGet> for Dns {
    type Error = FieldError;

    fn try_from(raw: DnsGet) -> Result<Self, Self::Error> {
        Ok(Dns {
            status: raw.status,
            auto_enable: is_on(&raw.lan_dns_on_off),
            proxy_enable: is_on(&raw.dns_proxy_on_off),
            lan_dns1: parse_optional_ip(&raw.landns1).field("landns1", &raw.landns1)?,
            lan_dns2: parse_optional_ip(&raw.landns2).field("landns2", &raw.landns2)?,
            domain_suffix: raw.domain_suffix,
            proxy_name1: raw.proxy_name1,
            proxy_name2: raw.proxy_name2,
        })
    }
}

impl From<DdnsGet> for Ddns {
    fn from(raw: DdnsGet) -> Self {
        Ddns {
            status: raw.status,
            enable: is_on(&raw.ddns_on_off),
            provider: ddns_provider(raw.ddns_srv_provider.to_int()).to_string(),
            update_interval: Duration::from_secs(parse_int(&raw.ddns_update_interval)),
            username: raw.ddns_username,
            password: raw.ddns_password,
            hostname: raw.ddns_hostnames,
        }
    }
}

impl TryFrom<HostGet> for Host {
    type Error = FieldError;

    fn try_from(raw: HostGet) -> Result<Self, Self::Error> {
        Ok(Host {
            mac_addr: parse_mac(&raw.mac_addr).field("macAddr", &raw.mac_addr)?,
            ip: parse_ip(&raw.ip).field("ip", &raw.ip)?,
            connect_to: parse_mac(&raw.connect_to).ok(),
            comnum: raw.comnum.to_int(),
            app_enable: raw.app_enable == "TRUE",
            name: raw.host_name,
            address_source: raw.address_source,
            connect_type: raw.connect_type,
            action: raw.action,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ddns_provider;
    use crate::domain::{Ddns, Dns, Host, Hosts, MacAddress, Status, Time, UsersCsrf};
    use crate::hitron::decode;
    use chrono_tz::Tz;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::net::{IpAddr, Ipv4Addr};
    use std::time::Duration;

    #[test]
    fn decodes_time() {
        let body = br#"{"errCode":"000","errMsg":"","sntpOnOff":"ON","sntpTimeZone":"7_2_1",
            "sntpSrvName":"time.nist.gov","daylightOnOff":"ON","daylightTime":"60"}"#;

        let time = decode::<Time>(body).unwrap();

        assert_eq!(
            time,
            Time {
                status: Status::success(),
                enable: true,
                daylight: true,
                daylight_time: 60,
                time_zone: Tz::America__New_York,
                sntp_server: "time.nist.gov".to_string(),
            }
        );
    }

    #[test]
    fn time_tolerates_unknown_zones_and_sentinels() {
        let body = br#"{"errCode":"000","errMsg":"","sntpOnOff":"OFF","sntpTimeZone":"42_0_0","daylightTime":"NA"}"#;

        let time = decode::<Time>(body).unwrap();

        assert_eq!(time.time_zone, Tz::UTC);
        assert_eq!(time.daylight_time, 0);
        assert!(!time.enable);
    }

    #[test]
    fn null_soft_fields_decode_as_empty() {
        let body = br#"{"errCode":"000","errMsg":null,"sntpOnOff":"ON","sntpTimeZone":"7_2_1",
            "sntpSrvName":null,"daylightOnOff":null,"daylightTime":null}"#;

        let time = decode::<Time>(body).unwrap();

        assert_eq!(time.status, Status::success());
        assert_eq!(time.sntp_server, "");
        assert!(!time.daylight);
        assert_eq!(time.daylight_time, 0);
    }

    #[test]
    fn decodes_dns() {
        let body = br#"{"errCode":"000","errMsg":"","lanDnsOnOff":"OFF","landns1":"1.1.1.1",
            "landns2":"","dnsProxyOnOff":"ON","domainSuffix":"home","proxyName1":"router","proxyName2":""}"#;

        let dns = decode::<Dns>(body).unwrap();

        assert_eq!(
            dns,
            Dns {
                status: Status::success(),
                auto_enable: false,
                proxy_enable: true,
                lan_dns1: Some(IpAddr::V4(Ipv4Addr::new(1, 1, 1, 1))),
                lan_dns2: None,
                domain_suffix: "home".to_string(),
                proxy_name1: "router".to_string(),
                proxy_name2: String::new(),
            }
        );
    }

    #[test]
    fn rejects_malformed_dns_servers() {
        let err = decode::<Dns>(br#"{"landns1":"1.1.1"}"#).expect_err("expected a decode error");
        assert!(err.to_string().contains("landns1"), "unexpected error: {err}");
    }

    #[rstest]
    #[case::first(1, "dyndns@dyndns.org")]
    #[case::hurricane_electric(10, "ipv6tb@he.net")]
    #[case::last(11, "default@dynsip.org")]
    #[case::zero(0, "")]
    #[case::unknown(12, "")]
    fn maps_ddns_providers(#[case] code: usize, #[case] expected: &str) {
        assert_eq!(ddns_provider(code), expected);
    }

    #[test]
    fn decodes_ddns_with_a_numeric_provider() {
        let body = br#"{"errCode":"000","errMsg":"","ddnsOnOff":"ON","ddnsSrvProvider":4,
            "ddnsUsername":"me","ddnsPassword":"secret","ddnsHostnames":"home.example.com",
            "ddnsUpdateInterval":"3600"}"#;

        let ddns = decode::<Ddns>(body).unwrap();

        assert_eq!(
            ddns,
            Ddns {
                status: Status::success(),
                enable: true,
                provider: "default@no-ip.com".to_string(),
                username: "me".to_string(),
                password: "secret".to_string(),
                hostname: "home.example.com".to_string(),
                update_interval: Duration::from_secs(3600),
            }
        );
    }

    #[test_log::test]
    fn decodes_hosts_and_drops_unaddressable_ones() {
        let body = br#"{"errCode":"000","errMsg":"","Hosts_List":[
            {"hostName":"laptop","addressSource":"DHCP-IP","macAddr":"AA:BB:CC:DD:EE:01","ip":"192.168.0.10",
            "connectType":"Ethernet","connectTo":"","comnum":1,"appEnable":"TRUE","action":""},
            {"hostName":"phone","addressSource":"DHCP-IP","macAddr":"AA:BB:CC:DD:EE:02","ip":"192.168.0.11",
            "connectType":"5G","connectTo":"74:9B:DE:AD:BE:EF","comnum":"2","appEnable":"FALSE","action":"block"},
            {"hostName":"ghost","macAddr":"","ip":"192.168.0.12"}
        ]}"#;

        let hosts = decode::<Hosts>(body).unwrap();

        assert_eq!(
            hosts.hosts,
            vec![
                Host {
                    name: "laptop".to_string(),
                    address_source: "DHCP-IP".to_string(),
                    mac_addr: MacAddress::new([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0x01]),
                    ip: IpAddr::V4(Ipv4Addr::new(192, 168, 0, 10)),
                    connect_type: "Ethernet".to_string(),
                    connect_to: None,
                    comnum: 1,
                    app_enable: true,
                    action: String::new(),
                },
                Host {
                    name: "phone".to_string(),
                    address_source: "DHCP-IP".to_string(),
                    mac_addr: MacAddress::new([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0x02]),
                    ip: IpAddr::V4(Ipv4Addr::new(192, 168, 0, 11)),
                    connect_type: "5G".to_string(),
                    connect_to: Some(MacAddress::new([0x74, 0x9b, 0xde, 0xad, 0xbe, 0xef])),
                    comnum: 2,
                    app_enable: false,
                    action: "block".to_string(),
                },
            ]
        );
    }

    #[test]
    fn decodes_csrf_token() {
        let csrf = decode::<UsersCsrf>(br#"{"errCode":"000","errMsg":"","CSRF":"YXBpX2Nzcm"}"#).unwrap();
        assert_eq!(csrf.csrf, "YXBpX2Nzcm");
        assert!(csrf.status.is_success());
    }
}
