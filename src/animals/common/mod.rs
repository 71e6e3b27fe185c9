//! Common implementation for animal searches.

pub(super) mod decoders;
pub(super) mod encoders;
