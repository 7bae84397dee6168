//! Cover capabilities — which service operations an entity declares support for.
//!
//! Bit values follow the Home Assistant `CoverEntityFeature` flags so a
//! `supported_features` attribute can be taken over verbatim.

use serde::{Deserialize, Serialize};

/// A single capability flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverFeature {
    Open,
    Close,
    SetPosition,
    Stop,
    OpenTilt,
    CloseTilt,
    StopTilt,
    SetTiltPosition,
}

impl CoverFeature {
    /// Every known flag, lowest bit first.
    pub const ALL: [Self; 8] = [
        Self::Open,
        Self::Close,
        Self::SetPosition,
        Self::Stop,
        Self::OpenTilt,
        Self::CloseTilt,
        Self::StopTilt,
        Self::SetTiltPosition,
    ];

    /// The bit this flag occupies in a `supported_features` mask.
    #[must_use]
    pub fn bit(self) -> u32 {
        match self {
            Self::Open => 1,
            Self::Close => 2,
            Self::SetPosition => 4,
            Self::Stop => 8,
            Self::OpenTilt => 16,
            Self::CloseTilt => 32,
            Self::StopTilt => 64,
            Self::SetTiltPosition => 128,
        }
    }
}

/// The set of capabilities declared by a cover entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CoverFeature>", into = "Vec<CoverFeature>")]
pub struct SupportedFeatures(u32);

impl SupportedFeatures {
    /// An empty set: the entity supports nothing.
    #[must_use]
    pub fn none() -> Self {
        Self(0)
    }

    /// Whether `feature` is part of the set.
    #[must_use]
    pub fn contains(self, feature: CoverFeature) -> bool {
        self.0 & feature.bit() != 0
    }

    /// Add `feature` to the set.
    pub fn insert(&mut self, feature: CoverFeature) {
        self.0 |= feature.bit();
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, feature: CoverFeature) -> Self {
        self.insert(feature);
        self
    }

    /// Iterate over the known flags present in the set.
    pub fn iter(self) -> impl Iterator<Item = CoverFeature> {
        CoverFeature::ALL
            .into_iter()
            .filter(move |feature| self.contains(*feature))
    }
}

impl FromIterator<CoverFeature> for SupportedFeatures {
    fn from_iter<I: IntoIterator<Item = CoverFeature>>(iter: I) -> Self {
        let mut set = Self::none();
        for feature in iter {
            set.insert(feature);
        }
        set
    }
}

impl From<Vec<CoverFeature>> for SupportedFeatures {
    fn from(features: Vec<CoverFeature>) -> Self {
        features.into_iter().collect()
    }
}

impl From<SupportedFeatures> for Vec<CoverFeature> {
    fn from(set: SupportedFeatures) -> Self {
        set.iter().collect()
    }
}
