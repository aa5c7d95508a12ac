//! Session token issuance.
//!
//! Token internals are opaque to the rest of the core: services depend on the
//! [`TokenIssuer`] trait and receive a string. The JWT implementation here is
//! what production wires in.

mod issuer;

pub use issuer::{Claims, JwtTokenIssuer, TokenIssuer};
