//! Mail folder types
//!
//! The provider exposes exactly three folders. Parsing a name outside
//! that set fails before any request is built.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// A Firstmail folder.
///
/// # Examples
///
/// ```
/// use firstmail_client::Folder;
///
/// let spam: Folder = "spam".parse().unwrap();
/// assert_eq!(spam, Folder::Spam);
/// assert_eq!(Folder::default().as_str(), "inbox");
/// assert!("archive".parse::<Folder>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Folder {
    #[default]
    Inbox,
    Starred,
    Spam,
}

impl Folder {
    /// The folder name as sent to the provider.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Starred => "starred",
            Self::Spam => "spam",
        }
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Folder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inbox" => Ok(Self::Inbox),
            "starred" => Ok(Self::Starred),
            "spam" => Ok(Self::Spam),
            _ => Err(Error::GetMessages(Some("invalid folder".to_string()))),
        }
    }
}
