use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Association category. File and folder rules live in independent sets and
/// never cross-match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IconType {
    /// Regular file entry.
    File,
    /// Directory entry.
    Folder,
}

impl IconType {
    /// Stable uppercase token used by the persistent record layout.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "FILE",
            Self::Folder => "FOLDER",
        }
    }
}

impl fmt::Display for IconType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FILE" => Ok(Self::File),
            "FOLDER" => Ok(Self::Folder),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::IconType;

    #[test]
    fn tokens_round_trip() {
        for icon_type in [IconType::File, IconType::Folder] {
            assert_eq!(icon_type.as_str().parse::<IconType>(), Ok(icon_type));
        }
    }

    #[test]
    fn unknown_token_is_rejected() {
        assert!("PSI".parse::<IconType>().is_err());
    }
}
