//! XML decoder for feed envelopes.

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::de::DeserializeOwned;

use crate::command::Command;
use crate::error::{NextbusError, Result};

/// Root element of every feed envelope.
const ENVELOPE_ROOT: &[u8] = b"body";

/// Decodes the XML envelope returned for `command`.
///
/// The root element must be `<body>`; its `copyright` attribute is not
/// checked, and elements the target type does not name (such as the feed's
/// `<Error>`) are skipped.
///
/// # Errors
///
/// Returns [`NextbusError::UnexpectedRoot`] if the document is rooted
/// anywhere but `<body>` (an HTML error page, say), and
/// [`NextbusError::Decode`] if the bytes are not well-formed XML or do not fit
/// the envelope.
pub fn parse_feed<T: DeserializeOwned>(command: Command, bytes: &[u8]) -> Result<T> {
    check_root(command, bytes)?;
    quick_xml::de::from_reader(bytes).map_err(|source| NextbusError::Decode { command, source })
}

/// Scans up to the first element and rejects anything not named `body`.
///
/// Reader errors and an empty document are left for the deserializer to
/// report.
fn check_root(command: Command, bytes: &[u8]) -> Result<()> {
    let mut reader = Reader::from_reader(bytes);
    loop {
        let found = match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if e.name().as_ref() == ENVELOPE_ROOT {
                    return Ok(());
                }
                format!("<{}>", String::from_utf8_lossy(e.name().as_ref()))
            }
            Ok(Event::Text(e)) if e.iter().all(u8::is_ascii_whitespace) => continue,
            Ok(Event::Text(_)) | Ok(Event::CData(_)) => "text content".to_string(),
            Ok(Event::Eof) | Err(_) => return Ok(()),
            Ok(_) => continue,
        };
        return Err(NextbusError::UnexpectedRoot { command, found });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AgencyList, RouteList};

    #[test]
    fn test_parse_empty_envelope() {
        let list: RouteList = parse_feed(Command::RouteList, b"<body copyright=\"x\"/>").unwrap();
        assert!(list.routes.is_empty());
    }

    #[test]
    fn test_parse_with_declaration() {
        let xml = b"<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n<body copyright=\"x\">\n<agency tag=\"alpha\" title=\"A\" regionTitle=\"R\"/>\n</body>\n";
        let list: AgencyList = parse_feed(Command::AgencyList, xml).unwrap();
        assert_eq!(list.agencies.len(), 1);
    }

    #[test]
    fn test_feed_error_element_is_ignored() {
        let xml = b"<body copyright=\"x\">\n<Error shouldRetry=\"false\">\n  Agency parameter \"a=zzz\" is not valid.\n</Error>\n</body>";
        let list: RouteList = parse_feed(Command::RouteList, xml).unwrap();
        assert!(list.routes.is_empty());
    }

    #[test]
    fn test_html_page_is_unexpected_root() {
        let err = parse_feed::<RouteList>(
            Command::RouteList,
            b"<!DOCTYPE html>\n<html><body>oops</body></html>",
        )
        .unwrap_err();
        match err {
            NextbusError::UnexpectedRoot { command, found } => {
                assert_eq!(command, Command::RouteList);
                assert_eq!(found, "<html>");
            }
            other => panic!("expected UnexpectedRoot, got {other:?}"),
        }
    }

    #[test]
    fn test_foreign_empty_root_is_rejected() {
        let result = parse_feed::<AgencyList>(Command::AgencyList, b"<foo/>");
        assert!(matches!(
            result,
            Err(NextbusError::UnexpectedRoot { ref found, .. }) if found == "<foo>"
        ));
    }

    #[test]
    fn test_plain_text_is_rejected() {
        let result = parse_feed::<AgencyList>(Command::AgencyList, b"Service Unavailable");
        assert!(matches!(result, Err(NextbusError::UnexpectedRoot { .. })));
    }

    #[test]
    fn test_empty_body_is_decode_error() {
        let result = parse_feed::<AgencyList>(Command::AgencyList, b"");
        assert!(matches!(result, Err(NextbusError::Decode { .. })));
    }

    #[test]
    fn test_parse_mismatched_tags() {
        let result = parse_feed::<RouteList>(
            Command::RouteList,
            b"<body><route tag=\"1\" title=\"1-first\"></body>",
        );
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            NextbusError::Decode {
                command: Command::RouteList,
                ..
            }
        ));
    }
}
