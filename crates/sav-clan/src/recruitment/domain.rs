use serde::{Deserialize, Serialize};

/// Canned result text attached to every completed submission.
pub const APPLICATION_READY: &str = "Your application is ready.";

/// Closed set of competitive rank tiers, ordered lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RankTier {
    Pro,
    Elite,
    Maestro,
    GranMaestro,
    Mitico,
    MiticoTopGlobal,
}

impl RankTier {
    /// Every tier, lowest to highest.
    pub const ALL: [RankTier; 6] = [
        RankTier::Pro,
        RankTier::Elite,
        RankTier::Maestro,
        RankTier::GranMaestro,
        RankTier::Mitico,
        RankTier::MiticoTopGlobal,
    ];

    pub const fn slug(self) -> &'static str {
        match self {
            RankTier::Pro => "pro",
            RankTier::Elite => "elite",
            RankTier::Maestro => "maestro",
            RankTier::GranMaestro => "gran-maestro",
            RankTier::Mitico => "mitico",
            RankTier::MiticoTopGlobal => "mitico-top-global",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RankTier::Pro => "Pro",
            RankTier::Elite => "Élite",
            RankTier::Maestro => "Maestro",
            RankTier::GranMaestro => "Gran Maestro",
            RankTier::Mitico => "Mítico",
            RankTier::MiticoTopGlobal => "Mítico Top Global",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.slug() == slug)
    }
}

/// Form data exactly as entered, prior to validation.
///
/// Numeric fields stay as raw text until submission so unparseable input can
/// be reported distinctly from out-of-range input. Confirmation booleans
/// default to `false` and are never auto-corrected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationDraft {
    pub in_game_name: String,
    pub player_id: String,
    pub level: String,
    pub rank: Option<RankTier>,
    pub kd_battle_royale: String,
    pub kd_battle_escalation: String,
    pub age: String,
    pub has_whatsapp: bool,
    pub is_available: bool,
    pub accepts_content_terms: bool,
    pub message: String,
}

/// An application after every constraint has passed.
///
/// Instances are only produced by validation and never change afterwards;
/// the type is deliberately not `Deserialize` so one cannot arrive from the
/// wire unvalidated. The three mandatory confirmations are not carried;
/// they are true by construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedApplication {
    in_game_name: String,
    player_id: String,
    level: u32,
    rank: RankTier,
    kd_battle_royale: f64,
    kd_battle_escalation: f64,
    age: u32,
    message: Option<String>,
}

impl ValidatedApplication {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        in_game_name: String,
        player_id: String,
        level: u32,
        rank: RankTier,
        kd_battle_royale: f64,
        kd_battle_escalation: f64,
        age: u32,
        message: Option<String>,
    ) -> Self {
        Self {
            in_game_name,
            player_id,
            level,
            rank,
            kd_battle_royale,
            kd_battle_escalation,
            age,
            message,
        }
    }

    pub fn in_game_name(&self) -> &str {
        &self.in_game_name
    }

    pub fn player_id(&self) -> &str {
        &self.player_id
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn rank(&self) -> RankTier {
        self.rank
    }

    pub fn kd_battle_royale(&self) -> f64 {
        self.kd_battle_royale
    }

    pub fn kd_battle_escalation(&self) -> f64 {
        self.kd_battle_escalation
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
