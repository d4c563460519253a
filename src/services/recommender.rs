// src/services/recommender.rs
use std::str::FromStr;

pub const INVALID_DOSHA: &str = "Invalid dosha (vata/pitta/kapha)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    /// Table order, used when listing the known categories.
    pub const ALL: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

    pub fn as_str(self) -> &'static str {
        match self {
            Dosha::Vata => "vata",
            Dosha::Pitta => "pitta",
            Dosha::Kapha => "kapha",
        }
    }

    pub fn recommendations(self) -> &'static [&'static str; 4] {
        match self {
            Dosha::Vata => &[
                "Warm cooked meals",
                "Ghee",
                "Root vegetables",
                "Avoid cold drinks",
            ],
            Dosha::Pitta => &["Coconut water", "Cucumber", "Milk", "Avoid spicy food"],
            Dosha::Kapha => &["Ginger tea", "Leafy greens", "Barley", "Avoid heavy dairy"],
        }
    }
}

impl std::fmt::Display for Dosha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDosha(pub String);

/// Exact match against the lowercase keys. Callers fold case first.
impl FromStr for Dosha {
    type Err = UnknownDosha;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dosha::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDosha(s.to_string()))
    }
}

/// Looks up an already-lowercased category. Unknown keys, the empty string
/// included, get the single-item fallback list.
pub fn recommend(dosha: &str) -> Vec<&'static str> {
    match dosha.parse::<Dosha>() {
        Ok(d) => {
            tracing::debug!(dosha = %d, "dosha matched");
            d.recommendations().to_vec()
        }
        Err(UnknownDosha(key)) => {
            tracing::debug!(dosha = %key, "unknown dosha, returning fallback");
            vec![INVALID_DOSHA]
        }
    }
}

pub fn known_doshas() -> Vec<&'static str> {
    Dosha::ALL.iter().map(|d| d.as_str()).collect()
}
