//! SOAP message assembly over a transport header/body pair.

use crate::transport::{MessageBody, MessageHeaders};

use super::{Group, envelope};

/// A SOAP message bound to its transport buffers.
///
/// Owns the header and body parameter trees; the body group's name doubles
/// as the operation name. Construction flattens the transport body and runs
/// exactly one parse pass over it; [`persist`](Self::persist) serializes the
/// current trees back, and may be called any number of times.
///
/// The transport pair is borrowed for the lifetime of the message, which
/// also gives the single-writer discipline for free: nothing else can touch
/// the buffers while the message is alive.
#[derive(Debug)]
pub struct SoapMessage<'t> {
    header: Group,
    body: Group,
    transport_headers: &'t mut MessageHeaders,
    transport_body: &'t mut MessageBody,
}

impl<'t> SoapMessage<'t> {
    /// Bind to a transport pair and parse its current contents.
    ///
    /// Malformed or non-SOAP contents yield a message with empty header and
    /// body trees; callers must check for expected parameters via
    /// [`Group::get`] rather than rely on a parse error.
    pub fn new(
        transport_headers: &'t mut MessageHeaders,
        transport_body: &'t mut MessageBody,
    ) -> Self {
        let mut header = Group::new("Header");
        let mut body = Group::new("Body");

        let contents = transport_body.flatten();
        envelope::read_envelope(&contents, &mut header, &mut body);

        Self {
            header,
            body,
            transport_headers,
            transport_body,
        }
    }

    /// Operation name: the tag of the single element inside `Body`.
    #[must_use]
    pub fn operation_name(&self) -> &str {
        self.body.name()
    }

    /// Rename the operation.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn set_operation_name(&mut self, name: impl Into<String>) {
        self.body.set_name(name);
    }

    /// Header parameter tree.
    #[must_use]
    pub fn header(&self) -> &Group {
        &self.header
    }

    /// Mutable header parameter tree.
    pub fn header_mut(&mut self) -> &mut Group {
        &mut self.header
    }

    /// Body parameter tree: the operation's parameters.
    #[must_use]
    pub fn params(&self) -> &Group {
        &self.body
    }

    /// Mutable body parameter tree.
    pub fn params_mut(&mut self) -> &mut Group {
        &mut self.body
    }

    /// Serialize the current trees back into the transport buffers.
    ///
    /// Replaces the transport body with the envelope bytes, marks it
    /// complete, and sets the transport content type to `text/xml`.
    pub fn persist(&mut self) {
        let contents = envelope::write_envelope(&self.header, &self.body);
        self.transport_body.truncate();
        self.transport_body.append(contents);
        self.transport_body.complete();
        self.transport_headers.set_content_type("text/xml");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soap::Leaf;

    #[test]
    fn test_empty_transport_yields_empty_trees() {
        let mut headers = MessageHeaders::new();
        let mut body = MessageBody::new();

        let msg = SoapMessage::new(&mut headers, &mut body);
        assert!(msg.header().is_empty());
        assert!(msg.params().is_empty());
        assert_eq!(msg.operation_name(), "Body");
    }

    #[test]
    fn test_operation_name_tracks_body_group() {
        let mut headers = MessageHeaders::new();
        let mut body = MessageBody::new();

        let mut msg = SoapMessage::new(&mut headers, &mut body);
        msg.set_operation_name("GetStatus");
        assert_eq!(msg.operation_name(), "GetStatus");
        assert_eq!(msg.params().name(), "GetStatus");
    }

    #[test]
    fn test_persist_sets_content_type_and_completes_body() {
        let mut headers = MessageHeaders::new();
        let mut body = MessageBody::new();

        let mut msg = SoapMessage::new(&mut headers, &mut body);
        msg.set_operation_name("Ping");
        msg.params_mut().add(Leaf::integer("Seq", 1));
        msg.persist();
        drop(msg);

        assert_eq!(headers.get("Content-Type"), Some("text/xml"));
        assert!(body.is_complete());
        assert!(!body.is_empty());
    }

    #[test]
    fn test_persist_overwrites_previous_contents() {
        let mut headers = MessageHeaders::new();
        let mut body = MessageBody::new();
        body.append("stale bytes that are not xml");

        let mut msg = SoapMessage::new(&mut headers, &mut body);
        msg.set_operation_name("Reset");
        msg.persist();
        msg.persist();
        drop(msg);

        let contents = body.flatten();
        let xml = std::str::from_utf8(&contents).unwrap();
        assert_eq!(xml.matches("<Reset").count(), 1);
    }
}
