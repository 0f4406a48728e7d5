//! Response shapes as the device sends them. Every scalar is read as the string it arrives as
//! and normalized by the `map_*` modules.

mod cable_modem;
mod network;
mod router;
mod wifi;

pub use cable_modem::*;
pub use network::*;
pub use router::*;
pub use wifi::*;
