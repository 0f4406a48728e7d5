mod address;
mod byte_count;
mod lease;
mod scalar;
mod time_zone;
mod uptime;

pub use address::{parse_ip, parse_ip_list, parse_mac, parse_optional_ip, parse_optional_mac};
pub use byte_count::{format_byte_count, parse_formatted_byte_count};
pub use lease::parse_dhcp_lease;
pub use scalar::*;
pub use time_zone::{TimeZoneError, resolve_time_zone, resolve_time_zone_or_utc};
pub use uptime::{UptimeError, parse_uptime};
