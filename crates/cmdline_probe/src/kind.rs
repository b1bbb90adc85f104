/// Which sort of run to perform.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    One,
    Two,
    Three,
}

impl Default for Kind {
    fn default() -> Self {
        Self::One
    }
}

impl Kind {
    pub const NAMES: &'static str = "one, two, three";

    /// Case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match &*name.to_ascii_lowercase() {
            "one" => Self::One,
            "two" => Self::Two,
            "three" => Self::Three,
            _ => return None,
        };
        Some(kind)
    }
}
