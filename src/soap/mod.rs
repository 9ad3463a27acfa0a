//! SOAP 1.1 core: parameter tree, typed value codec, envelope transcoding.
//!
//! The data model is a tree of [`Param`] nodes (scalar [`Leaf`] or nested
//! [`Group`]); [`write_envelope`]/[`read_envelope`] transcode between trees
//! and envelope bytes, and [`SoapMessage`] ties the header and body trees to
//! a transport buffer pair.

mod envelope;
mod error;
mod message;
mod param;
pub mod value;

pub use envelope::{read_envelope, write_envelope};
pub use error::{Result, ValueError, ValueKind};
pub use message::SoapMessage;
pub use param::{Group, Leaf, Param};

/// SOAP 1.1 envelope namespace.
pub const SOAP_ENV_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// SOAP 1.1 encoding namespace, doubling as the `encodingStyle` value.
pub const SOAP_ENC_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/encoding/";

/// XML Schema namespace (1999 revision, as SOAP 1.1 specifies).
pub const XSD_NAMESPACE: &str = "http://www.w3.org/1999/XMLSchema";

/// XML Schema instance namespace (1999 revision).
pub const XSI_NAMESPACE: &str = "http://www.w3.org/1999/XMLSchema-instance";
