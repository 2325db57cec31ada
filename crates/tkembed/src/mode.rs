//! The two parallel content schemas served by the embed routes.

use std::fmt;

/// Which Notion database and property schema a request reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Published connections (`/embed`).
    Live,
    /// Work-in-progress builder records (`/embed-builder`).
    Builder,
}

impl Mode {
    /// Property whose formula text is suffix-matched and carries the client label.
    pub fn id_property(self) -> &'static str {
        match self {
            Self::Live => "tkid1",
            Self::Builder => "bldrID",
        }
    }

    /// Property holding the tile HTML.
    pub fn tile_property(self) -> &'static str {
        match self {
            Self::Live => "Tile HTML",
            Self::Builder => "TileContent",
        }
    }

    /// Property holding the modal HTML.
    pub fn modal_property(self) -> &'static str {
        match self {
            Self::Live => "Modal HTML",
            Self::Builder => "ModalContent",
        }
    }

    /// Environment variable naming this mode's database.
    pub fn database_env(self) -> &'static str {
        match self {
            Self::Live => "DATABASE_ID",
            Self::Builder => "TKBUILDER_DATABASE_ID",
        }
    }

    /// Tag used in exported file names.
    pub fn export_tag(self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::Builder => "Builder",
        }
    }

    pub fn is_builder(self) -> bool {
        self == Self::Builder
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live => f.write_str("live"),
            Self::Builder => f.write_str("builder"),
        }
    }
}
