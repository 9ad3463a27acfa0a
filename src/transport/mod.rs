//! Transport collaborator boundary.
//!
//! The SOAP core does not speak HTTP; it only needs a raw byte buffer to
//! parse from and persist into, plus a header field map for the content
//! type. These types model that boundary so an embedding transport stack
//! can hand its buffers to [`crate::SoapMessage`].

mod body;
mod headers;

pub use body::MessageBody;
pub use headers::MessageHeaders;
