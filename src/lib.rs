pub mod app_config;
pub mod domain;
pub mod extensions;
pub mod hitron;
pub mod parsers;
