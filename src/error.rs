use thiserror::Error;

use crate::command::Command;

pub type Result<T, E = NextbusError> = std::result::Result<T, E>;

/// Everything that can go wrong while talking to the feed.
///
/// The three request kinds (`Transport`, `Read`, `Decode`) always carry the
/// command that was being issued and keep the underlying cause reachable via
/// [`std::error::Error::source`], so callers can tell a network failure apart
/// from malformed feed data.
#[derive(Debug, Error)]
pub enum NextbusError {
    #[error("could not fetch {command} from nextbus")]
    Transport {
        command: Command,
        #[source]
        source: reqwest::Error,
    },
    #[error("could not read {command} response body")]
    Read {
        command: Command,
        #[source]
        source: reqwest::Error,
    },
    #[error("could not parse {command} XML")]
    Decode {
        command: Command,
        #[source]
        source: quick_xml::DeError,
    },
    #[error("could not parse {command} XML: expected <body> root, found {found}")]
    UnexpectedRoot { command: Command, found: String },
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),
}

impl NextbusError {
    /// The feed command a request error belongs to.
    pub fn command(&self) -> Option<Command> {
        match self {
            NextbusError::Transport { command, .. }
            | NextbusError::Read { command, .. }
            | NextbusError::Decode { command, .. }
            | NextbusError::UnexpectedRoot { command, .. } => Some(*command),
            NextbusError::InvalidBaseUrl { .. } | NextbusError::ClientBuild(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn decode_error() -> quick_xml::DeError {
        quick_xml::de::from_str::<crate::model::RouteList>("<body><route></body>").unwrap_err()
    }

    #[test]
    fn error_display_decode_names_command() {
        let err = NextbusError::Decode {
            command: Command::RouteList,
            source: decode_error(),
        };
        assert_eq!(err.to_string(), "could not parse routeList XML");
        assert_eq!(err.command(), Some(Command::RouteList));
        assert!(err.source().is_some());
    }

    #[test]
    fn error_display_unexpected_root() {
        let err = NextbusError::UnexpectedRoot {
            command: Command::AgencyList,
            found: "<html>".into(),
        };
        assert_eq!(
            err.to_string(),
            "could not parse agencyList XML: expected <body> root, found <html>"
        );
        assert_eq!(err.command(), Some(Command::AgencyList));
    }

    #[test]
    fn error_display_invalid_base_url() {
        let err = NextbusError::InvalidBaseUrl {
            url: "nope".into(),
            reason: "relative URL without a base".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid base url \"nope\": relative URL without a base"
        );
        assert_eq!(err.command(), None);
    }
}
