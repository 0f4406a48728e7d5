mod cable_modem;
mod mac_address;
mod network;
mod router;
mod severity;
mod status;
mod subnet_mask;
mod wifi;
mod wifi_mode;

pub use cable_modem::*;
pub use mac_address::{MacAddress, MacAddressError};
pub use network::*;
pub use router::*;
pub use severity::{Severity, severity_name};
pub use status::{SUCCESS_CODE, Status};
pub use subnet_mask::SubnetMask;
pub use wifi::*;
pub use wifi_mode::WifiMode;
