//! Deep-link handoff to the messaging service that "submits" a booking.

use std::fmt;
use std::io::Write;
use std::sync::Mutex;

use crate::errors::HandoffError;

const WHATSAPP_BASE: &str = "https://wa.me";

/// A pre-filled chat link: `https://wa.me/<digits>?text=<encoded message>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppLink {
    destination: String,
    message: String,
}

impl WhatsAppLink {
    /// Strips every non-digit from `destination`; fails if nothing is left.
    pub fn new(destination: &str, message: impl Into<String>) -> Result<Self, HandoffError> {
        let digits: String = destination.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(HandoffError::InvalidDestination(destination.to_string()));
        }
        Ok(Self {
            destination: digits,
            message: message.into(),
        })
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn url(&self) -> String {
        format!(
            "{}/{}?text={}",
            WHATSAPP_BASE,
            self.destination,
            urlencoding::encode(&self.message)
        )
    }
}

impl fmt::Display for WhatsAppLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

/// Opens a URL in a new browsing context.
pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<(), HandoffError>;
}

/// Opens links with the platform's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> Result<(), HandoffError> {
        open::that(url).map_err(|err| HandoffError::OpenFailed(err.to_string()))
    }
}

/// Prints links to stdout instead of launching a browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoLinkOpener;

impl LinkOpener for EchoLinkOpener {
    fn open(&self, url: &str) -> Result<(), HandoffError> {
        let mut stdout = std::io::stdout();
        writeln!(stdout, "{url}").map_err(|err| HandoffError::OpenFailed(err.to_string()))
    }
}

/// Keeps every opened URL in memory.
#[derive(Debug, Default)]
pub struct RecordingLinkOpener {
    opened: Mutex<Vec<String>>,
}

impl RecordingLinkOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl LinkOpener for RecordingLinkOpener {
    fn open(&self, url: &str) -> Result<(), HandoffError> {
        self.opened
            .lock()
            .map_err(|err| HandoffError::OpenFailed(err.to_string()))?
            .push(url.to_string());
        Ok(())
    }
}

/// Builds the link and opens it. The booking counts as handed off once the
/// opener returns; delivery is never confirmed.
pub fn hand_off(
    destination: &str,
    message: &str,
    opener: &dyn LinkOpener,
) -> Result<WhatsAppLink, HandoffError> {
    let link = WhatsAppLink::new(destination, message)?;
    opener.open(&link.url())?;
    tracing::info!(destination = link.destination(), "booking handed off");
    Ok(link)
}
