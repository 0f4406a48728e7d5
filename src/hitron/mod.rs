//! Client for the local API of Hitron CODA cable modems, together with the decoders that turn
//! its loosely typed responses into the records of [`crate::domain`].

pub mod client;
mod admin;
mod decode;
mod endpoints;
mod map_cable_modem;
mod map_network;
mod map_router;
mod map_wifi;
mod number_or_string;
mod session;
pub mod wire;

pub use client::{Body, CableModem, HitronError, RawResponse, new_client};
pub(crate) use decode::{null_as_default, skip_invalid};
pub use decode::{DecodeError, FieldError, decode};
pub use map_network::ddns_provider;
pub(crate) use number_or_string::deserialize_int;
pub use number_or_string::NumberOrString;
