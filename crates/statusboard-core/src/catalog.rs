use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};

/// Glyph shown next to a status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Washroom,
    Utensils,
    Coffee,
    Users,
    Phone,
    Car,
    Home,
    Monitor,
    Clock,
    Settings,
}

impl Icon {
    pub const ALL: [Icon; 10] = [
        Icon::Washroom,
        Icon::Utensils,
        Icon::Coffee,
        Icon::Users,
        Icon::Phone,
        Icon::Car,
        Icon::Home,
        Icon::Monitor,
        Icon::Clock,
        Icon::Settings,
    ];

    /// Name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Washroom => "washroom",
            Icon::Utensils => "utensils",
            Icon::Coffee => "coffee",
            Icon::Users => "users",
            Icon::Phone => "phone",
            Icon::Car => "car",
            Icon::Home => "home",
            Icon::Monitor => "monitor",
            Icon::Clock => "clock",
            Icon::Settings => "settings",
        }
    }

    /// Double-width pictograph for terminals with emoji support.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Washroom => "🚻",
            Icon::Utensils => "🍴",
            Icon::Coffee => "☕",
            Icon::Users => "👥",
            Icon::Phone => "📞",
            Icon::Car => "🚗",
            Icon::Home => "🏠",
            Icon::Monitor => "🖥",
            Icon::Clock => "🕒",
            Icon::Settings => "⚙",
        }
    }

    /// Plain ASCII stand-in for the glyph.
    pub fn ascii(self) -> &'static str {
        match self {
            Icon::Washroom => "[WC]",
            Icon::Utensils => "[EAT]",
            Icon::Coffee => "[TEA]",
            Icon::Users => "[MTG]",
            Icon::Phone => "[TEL]",
            Icon::Car => "[OUT]",
            Icon::Home => "[WFH]",
            Icon::Monitor => "[PC]",
            Icon::Clock => "[@]",
            Icon::Settings => "[*]",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Icon {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match Icon::ALL.iter().find(|icon| icon.name() == s) {
            Some(icon) => Ok(*icon),
            None => {
                let known: Vec<&str> = Icon::ALL.iter().map(|i| i.name()).collect();
                bail!("unknown icon {:?} (expected one of: {})", s, known.join(", "))
            }
        }
    }
}

/// Presentation tokens for a status. Opaque to everything outside the UI
/// crate, which resolves them to terminal colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTokens {
    pub background: String,
    pub text: String,
    pub accent: String,
    pub shadow: String,
}

impl StyleTokens {
    /// Tokens for a palette family: `<family>-<shade>` for each role.
    pub fn family(family: &str, background_shade: u16) -> Self {
        Self {
            background: format!("{family}-{background_shade}"),
            text: format!("{family}-100"),
            accent: format!("{family}-300"),
            shadow: format!("{family}-900"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDefinition {
    pub id: String,
    pub label: String,
    pub icon: Icon,
    pub style: StyleTokens,
}

impl StatusDefinition {
    pub fn new(id: &str, label: &str, icon: Icon, style: StyleTokens) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon,
            style,
        }
    }
}

/// Ordered, non-empty list of statuses with unique ids.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<StatusDefinition>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Build a catalog, rejecting empty lists, blank fields and duplicate ids.
    pub fn new(entries: Vec<StatusDefinition>) -> Result<Self> {
        if entries.is_empty() {
            bail!("status catalog must contain at least one status");
        }

        let mut seen = BTreeSet::new();
        for entry in &entries {
            if entry.id.trim().is_empty() {
                bail!("status id must not be empty");
            }
            if entry.id.trim() != entry.id {
                bail!("status id {:?} has leading/trailing whitespace", entry.id);
            }
            if entry.label.trim().is_empty() {
                bail!("status {:?} must have a non-empty label", entry.id);
            }
            if !seen.insert(entry.id.as_str()) {
                bail!("status catalog contains duplicate id {:?}", entry.id);
            }
        }

        Ok(Self { entries })
    }

    /// The eight statuses every office board ships with.
    pub fn builtin() -> Self {
        let entries = vec![
            StatusDefinition::new(
                "washroom",
                "In Washroom",
                Icon::Washroom,
                StyleTokens::family("blue", 500),
            ),
            StatusDefinition::new(
                "lunch",
                "At Lunch",
                Icon::Utensils,
                StyleTokens::family("orange", 500),
            ),
            StatusDefinition::new(
                "tea",
                "Tea Break",
                Icon::Coffee,
                StyleTokens::family("amber", 600),
            ),
            StatusDefinition::new(
                "meeting",
                "In Meeting",
                Icon::Users,
                StyleTokens::family("red", 500),
            ),
            StatusDefinition::new(
                "call",
                "On Call",
                Icon::Phone,
                StyleTokens::family("purple", 500),
            ),
            StatusDefinition::new(
                "out",
                "Stepped Out",
                Icon::Car,
                StyleTokens::family("gray", 600),
            ),
            StatusDefinition::new(
                "home",
                "Working from Home",
                Icon::Home,
                StyleTokens::family("green", 500),
            ),
            StatusDefinition::new(
                "desk",
                "At My Desk",
                Icon::Monitor,
                StyleTokens::family("emerald", 500),
            ),
        ];
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a constructed catalog; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusDefinition> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[StatusDefinition] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&StatusDefinition> {
        self.entries.get(index)
    }

    pub fn by_id(&self, id: &str) -> Option<&StatusDefinition> {
        self.entries.iter().find(|s| s.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|s| s.id == id)
    }
}
