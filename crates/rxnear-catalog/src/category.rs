use std::fmt;

use serde::{Deserialize, Serialize};

/// Dosage-form category, the closed set the catalog service accepts.
///
/// `Ord` follows declaration order, which keeps grouped views deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tablet,
    Capsule,
    Syrup,
    Injection,
    Cream,
    Ointment,
    Drops,
    Spray,
    Inhaler,
    Powder,
    Gel,
    Lotion,
    Other,
}

impl Category {
    /// Parses the upstream lowercase name; `None` for anything outside the
    /// catalog's set.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "tablet" => Some(Self::Tablet),
            "capsule" => Some(Self::Capsule),
            "syrup" => Some(Self::Syrup),
            "injection" => Some(Self::Injection),
            "cream" => Some(Self::Cream),
            "ointment" => Some(Self::Ointment),
            "drops" => Some(Self::Drops),
            "spray" => Some(Self::Spray),
            "inhaler" => Some(Self::Inhaler),
            "powder" => Some(Self::Powder),
            "gel" => Some(Self::Gel),
            "lotion" => Some(Self::Lotion),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tablet => "tablet",
            Self::Capsule => "capsule",
            Self::Syrup => "syrup",
            Self::Injection => "injection",
            Self::Cream => "cream",
            Self::Ointment => "ointment",
            Self::Drops => "drops",
            Self::Spray => "spray",
            Self::Inhaler => "inhaler",
            Self::Powder => "powder",
            Self::Gel => "gel",
            Self::Lotion => "lotion",
            Self::Other => "other",
        }
    }

    /// Badge tint the inventory UI renders for this category.
    #[must_use]
    pub fn badge_color(self) -> &'static str {
        match self {
            Self::Tablet => "blue",
            Self::Capsule => "green",
            Self::Syrup => "purple",
            Self::Injection => "red",
            Self::Cream => "pink",
            Self::Ointment => "indigo",
            Self::Drops => "teal",
            Self::Spray => "orange",
            Self::Inhaler => "cyan",
            Self::Powder => "lime",
            Self::Gel => "emerald",
            Self::Lotion => "rose",
            Self::Other => "gray",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
