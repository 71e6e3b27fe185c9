//! Common implementation for the token exchange.

pub(super) mod decoders;
pub(super) mod encoders;
