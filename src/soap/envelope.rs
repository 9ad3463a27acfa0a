//! Envelope transcoding between parameter trees and SOAP 1.1 XML.
//!
//! Serialization is infallible and parsing is deliberately tolerant:
//! anything that does not look like a SOAP envelope leaves the trees
//! untouched, so construction over arbitrary transport bytes never fails.

use tracing::debug;
use xmltree::{Element, EmitterConfig, XMLNode};

use super::{
    Group, Leaf, Param, SOAP_ENC_NAMESPACE, SOAP_ENV_NAMESPACE, XSD_NAMESPACE, XSI_NAMESPACE,
};

/// Serialize header and body trees into a SOAP 1.1 envelope document.
///
/// The header group emits as the `<Header>` element itself (its children
/// inside), while the body group emits inside an explicit `<Body>` wrapper
/// with its own name as the operation element tag. Leaf text is
/// entity-encoded by the emitter; groups carry no text.
#[must_use]
pub fn write_envelope(header: &Group, body: &Group) -> Vec<u8> {
    let mut envelope = Element::new("SOAP-ENV:Envelope");
    envelope.attributes.insert(
        "xmlns:SOAP-ENV".to_string(),
        SOAP_ENV_NAMESPACE.to_string(),
    );
    envelope
        .attributes
        .insert("xmlns:xsd".to_string(), XSD_NAMESPACE.to_string());
    envelope
        .attributes
        .insert("xmlns:xsi".to_string(), XSI_NAMESPACE.to_string());
    envelope.attributes.insert(
        "xmlns:SOAP-ENC".to_string(),
        SOAP_ENC_NAMESPACE.to_string(),
    );
    envelope.attributes.insert(
        "SOAP-ENV:encodingStyle".to_string(),
        SOAP_ENC_NAMESPACE.to_string(),
    );

    envelope
        .children
        .push(XMLNode::Element(group_element(header)));

    let mut body_wrapper = Element::new("Body");
    body_wrapper
        .children
        .push(XMLNode::Element(group_element(body)));
    envelope.children.push(XMLNode::Element(body_wrapper));

    let mut buf = Vec::new();
    let config = EmitterConfig::new().write_document_declaration(true);
    if let Err(error) = envelope.write_with_config(&mut buf, config) {
        debug!(error = %error, "envelope serialization failed");
    }
    buf
}

fn param_element(param: &Param) -> Element {
    match param {
        Param::Group(group) => group_element(group),
        Param::Leaf(leaf) => {
            let mut element = Element::new(leaf.name());
            let text = String::from_utf8_lossy(leaf.value()).into_owned();
            element.children.push(XMLNode::Text(text));
            element
        }
    }
}

fn group_element(group: &Group) -> Element {
    let mut element = Element::new(group.name());
    for child in group.children() {
        element.children.push(XMLNode::Element(param_element(child)));
    }
    element
}

/// Populate header and body trees from SOAP envelope bytes.
///
/// Never fails: unparsable input, a root element whose local name is not
/// `Envelope`, or a `Body` without an element child leave the trees as they
/// were. The first element child of `Body` names the operation (the body
/// group is renamed to it) and supplies the body parameters. Matching is by
/// local name only; namespace prefixes are ignored.
pub fn read_envelope(bytes: &[u8], header: &mut Group, body: &mut Group) {
    let root = match Element::parse(bytes) {
        Ok(root) => root,
        Err(error) => {
            debug!(error = %error, "discarding unparsable envelope");
            return;
        }
    };

    if root.name != "Envelope" {
        debug!(root = %root.name, "root element is not a SOAP envelope");
        return;
    }

    for node in &root.children {
        let Some(element) = node.as_element() else {
            continue;
        };
        match element.name.as_str() {
            "Header" => populate_group(header, element),
            "Body" => {
                if let Some(operation) = element.children.iter().find_map(|n| n.as_element()) {
                    body.set_name(operation.name.clone());
                    populate_group(body, operation);
                }
            }
            _ => {}
        }
    }
}

/// Recursively interpret the element children of `element` as parameters.
///
/// An element with at least one element child becomes a group; anything
/// else becomes a leaf whose raw value is the concatenated text content
/// (possibly empty).
fn populate_group(group: &mut Group, element: &Element) {
    for node in &element.children {
        let Some(child) = node.as_element() else {
            continue;
        };

        let has_element_child = child.children.iter().any(|n| n.as_element().is_some());
        if has_element_child {
            let mut nested = Group::new(child.name.clone());
            populate_group(&mut nested, child);
            group.add(nested);
        } else {
            let text = child.get_text().unwrap_or_default();
            group.add(Leaf::new(child.name.clone(), text.into_owned().into_bytes()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> (Group, Group) {
        let mut header = Group::new("Header");
        let mut body = Group::new("Body");
        read_envelope(xml.as_bytes(), &mut header, &mut body);
        (header, body)
    }

    #[test]
    fn test_serialize_structure() {
        let mut header = Group::new("Header");
        header.add(Leaf::string("SessionId", "abc"));

        let mut body = Group::new("Login");
        body.add(Leaf::string("User", "bob"));

        let bytes = write_envelope(&header, &body);
        let xml = String::from_utf8(bytes).unwrap();

        assert!(xml.contains("SOAP-ENV:Envelope"));
        assert!(xml.contains("xmlns:SOAP-ENV=\"http://schemas.xmlsoap.org/soap/envelope/\""));
        assert!(
            xml.contains("SOAP-ENV:encodingStyle=\"http://schemas.xmlsoap.org/soap/encoding/\"")
        );
        assert!(xml.contains("<SessionId>abc</SessionId>"));
        assert!(xml.contains("<Login>"));
        assert!(xml.contains("<User>bob</User>"));
    }

    #[test]
    fn test_leaf_text_entity_encoded() {
        let header = Group::new("Header");
        let mut body = Group::new("Echo");
        body.add(Leaf::string("Text", "a<b&c"));

        let xml = String::from_utf8(write_envelope(&header, &body)).unwrap();
        assert!(xml.contains("a&lt;b&amp;c"));
    }

    #[test]
    fn test_parse_header_and_body() {
        let (header, body) = parse(
            r#"<?xml version="1.0"?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
  <Header><SessionId>abc</SessionId></Header>
  <Body>
    <Login>
      <User>bob</User>
      <Remember>true</Remember>
    </Login>
  </Body>
</SOAP-ENV:Envelope>"#,
        );

        let session = header.get("SessionId").unwrap().as_leaf().unwrap();
        assert_eq!(session.value(), b"abc");

        assert_eq!(body.name(), "Login");
        assert_eq!(body.len(), 2);
        let remember = body.get("Remember").unwrap().as_leaf().unwrap();
        assert_eq!(remember.decode_boolean().unwrap(), true);
    }

    #[test]
    fn test_namespace_prefixes_ignored() {
        let (_, body) = parse(
            r#"<?xml version="1.0"?>
<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
  <s:Body>
    <u:Play xmlns:u="urn:example:service:1"><Speed>1</Speed></u:Play>
  </s:Body>
</s:Envelope>"#,
        );

        assert_eq!(body.name(), "Play");
        assert!(body.get("Speed").is_some());
    }

    #[test]
    fn test_foreign_root_leaves_trees_empty() {
        let (header, body) = parse("<Foo/>");
        assert!(header.is_empty());
        assert!(body.is_empty());
        assert_eq!(body.name(), "Body");
    }

    #[test]
    fn test_unparsable_input_leaves_trees_empty() {
        let (header, body) = parse("not xml at all <<<");
        assert!(header.is_empty());
        assert!(body.is_empty());
    }

    #[test]
    fn test_empty_body_keeps_name() {
        let (_, body) = parse(
            r#"<Envelope xmlns="http://schemas.xmlsoap.org/soap/envelope/"><Body>  </Body></Envelope>"#,
        );
        assert!(body.is_empty());
        assert_eq!(body.name(), "Body");
    }

    #[test]
    fn test_group_vs_leaf_classification() {
        let (_, body) = parse(
            "<Envelope><Body><Op>\
             <AGroup><Inner>x</Inner></AGroup>\
             <ALeaf>text</ALeaf>\
             <Empty></Empty>\
             </Op></Body></Envelope>",
        );

        assert!(body.get("AGroup").unwrap().is_group());

        let leaf = body.get("ALeaf").unwrap().as_leaf().unwrap();
        assert_eq!(leaf.value(), b"text");

        // No children at all is still a leaf, with an empty value.
        let empty = body.get("Empty").unwrap().as_leaf().unwrap();
        assert_eq!(empty.value(), b"");
    }

    #[test]
    fn test_nested_groups() {
        let (_, body) = parse(
            "<Envelope><Body><Op><Outer><Middle><Leaf>v</Leaf></Middle></Outer></Op></Body></Envelope>",
        );

        let outer = body.get("Outer").unwrap().as_group().unwrap();
        let middle = outer.get("Middle").unwrap().as_group().unwrap();
        let leaf = middle.get("Leaf").unwrap().as_leaf().unwrap();
        assert_eq!(leaf.value(), b"v");
    }

    #[test]
    fn test_roundtrip() {
        let mut header = Group::new("Header");
        header.add(Leaf::string("SessionId", "abc"));

        let mut body = Group::new("Login");
        body.add(Leaf::string("User", "bob"));
        body.add(Leaf::boolean("Remember", true));

        let bytes = write_envelope(&header, &body);

        let mut header2 = Group::new("Header");
        let mut body2 = Group::new("Body");
        read_envelope(&bytes, &mut header2, &mut body2);

        assert_eq!(header, header2);
        assert_eq!(body, body2);
        assert_eq!(body2.name(), "Login");
    }
}
