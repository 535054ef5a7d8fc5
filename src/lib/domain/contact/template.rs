//! Notification templates

use std::{fmt, str::FromStr};

use askama::Template;
use thiserror::Error;

use super::{notifier::Notification, submission::ContactMessage};

/// How a contact message is rendered for the provider
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageTemplate {
    /// Plain text with emoji labels, no markup
    PlainText,

    /// Bold labels in the provider's HTML mode; field values are escaped
    #[default]
    RichText,
}

impl MessageTemplate {
    /// The provider markup mode this template needs
    pub fn parse_mode(&self) -> Option<&'static str> {
        match self {
            Self::PlainText => None,
            Self::RichText => Some("HTML"),
        }
    }

    /// Renders `message` into a [`Notification`].
    pub fn render(&self, message: &ContactMessage) -> Result<Notification, askama::Error> {
        let name = message.name.as_str();
        let email = message.email.as_str();
        let phone = message.phone.as_ref().map(|phone| phone.as_str());
        let body = message.message.as_str();

        let text = match self {
            Self::PlainText => PlainTextNotification {
                name,
                email,
                phone,
                message: body,
            }
            .render()?,
            Self::RichText => RichTextNotification {
                name,
                email,
                phone,
                message: body,
            }
            .render()?,
        };

        Ok(Notification {
            text: text.trim_end().to_string(),
            parse_mode: self.parse_mode(),
        })
    }
}

/// Unknown template name
#[derive(Debug, Error)]
#[error("unknown message template \"{0}\", expected \"plain\" or \"rich\"")]
pub struct UnknownTemplateError(String);

impl FromStr for MessageTemplate {
    type Err = UnknownTemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "text" => Ok(Self::PlainText),
            "rich" | "html" => Ok(Self::RichText),
            other => Err(UnknownTemplateError(other.to_string())),
        }
    }
}

impl fmt::Display for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlainText => write!(f, "plain"),
            Self::RichText => write!(f, "rich"),
        }
    }
}

#[derive(Template)]
#[template(path = "notifications/contact.txt")]
struct PlainTextNotification<'a> {
    name: &'a str,
    email: &'a str,
    phone: Option<&'a str>,
    message: &'a str,
}

#[derive(Template)]
#[template(path = "notifications/contact.html")]
struct RichTextNotification<'a> {
    name: &'a str,
    email: &'a str,
    phone: Option<&'a str>,
    message: &'a str,
}
