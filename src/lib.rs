//! SOAP 1.1 envelope transcoding over a hierarchical named-parameter tree.
//!
//! This library converts between SOAP 1.1 envelopes and an ownership-based
//! tree of named parameters, and provides a typed scalar codec (string,
//! boolean, integer, double, base64 binary) over each leaf's wire-format
//! value. It is deliberately not schema-aware: an element with element
//! children is a group, anything else is a scalar leaf.
//!
//! # Quick Start
//!
//! ```rust
//! use soapwire::{Leaf, MessageBody, MessageHeaders, SoapMessage};
//!
//! let mut headers = MessageHeaders::new();
//! let mut body = MessageBody::new();
//!
//! // Bind to the transport pair; an empty body yields empty trees.
//! let mut msg = SoapMessage::new(&mut headers, &mut body);
//! msg.set_operation_name("Login");
//! msg.params_mut().add(Leaf::string("User", "bob"));
//! msg.params_mut().add(Leaf::boolean("Remember", true));
//!
//! // Serialize the trees back into the transport body.
//! msg.persist();
//! drop(msg);
//! assert_eq!(headers.get("Content-Type"), Some("text/xml"));
//! ```
//!
//! # Features
//!
//! - **Typed value codec** - fallible getters, infallible setters
//! - **Single-owner parameter tree** - no reference counting, no cycles
//! - **Infallible envelope parsing** - malformed input degrades to empty trees
//! - **Transport boundary types** - fragmented body buffer and header fields

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod soap;
pub mod transport;

pub use soap::{Group, Leaf, Param, Result, SoapMessage, ValueError, ValueKind};
pub use transport::{MessageBody, MessageHeaders};
