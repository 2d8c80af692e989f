use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{ApplicationDraft, RankTier, ValidatedApplication};

/// Thresholds backing the validation table.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationPolicy {
    pub min_name_chars: usize,
    pub min_player_id_chars: usize,
    pub minimum_level: u32,
    pub minimum_kd_battle_royale: f64,
    pub minimum_kd_battle_escalation: f64,
    pub minimum_age: u32,
    pub max_message_chars: usize,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            min_name_chars: 3,
            min_player_id_chars: 5,
            minimum_level: 50,
            minimum_kd_battle_royale: 3.0,
            minimum_kd_battle_escalation: 2.5,
            minimum_age: 18,
            max_message_chars: 500,
        }
    }
}

/// Fields of the recruitment form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    InGameName,
    PlayerId,
    Level,
    Rank,
    KdBattleRoyale,
    KdBattleEscalation,
    Age,
    HasWhatsapp,
    IsAvailable,
    AcceptsContentTerms,
    Message,
}

impl Field {
    /// Wire name, matching the draft's serialized field names.
    pub const fn name(self) -> &'static str {
        match self {
            Field::InGameName => "in_game_name",
            Field::PlayerId => "player_id",
            Field::Level => "level",
            Field::Rank => "rank",
            Field::KdBattleRoyale => "kd_battle_royale",
            Field::KdBattleEscalation => "kd_battle_escalation",
            Field::Age => "age",
            Field::HasWhatsapp => "has_whatsapp",
            Field::IsAvailable => "is_available",
            Field::AcceptsContentTerms => "accepts_content_terms",
            Field::Message => "message",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Field::InGameName => "In-Game Name",
            Field::PlayerId => "Player ID",
            Field::Level => "Level",
            Field::Rank => "Rank",
            Field::KdBattleRoyale => "K/D (BR)",
            Field::KdBattleEscalation => "K/D (BE)",
            Field::Age => "Age",
            Field::HasWhatsapp => "WhatsApp confirmation",
            Field::IsAvailable => "Availability confirmation",
            Field::AcceptsContentTerms => "Content terms confirmation",
            Field::Message => "Message",
        }
    }
}

/// Why a single field failed validation.
///
/// Unparseable numeric input reports [`ConstraintViolation::NotANumber`]
/// rather than the range violation for the same field.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConstraintViolation {
    #[error("must be at least {min} characters")]
    TooShort { min: usize },
    #[error("must not exceed {max} characters")]
    TooLong { max: usize },
    #[error("must be a number")]
    NotANumber,
    #[error("must be {min} or higher")]
    BelowMinimum { min: u32 },
    #[error("must be {min:.1} or higher")]
    BelowMinimumRatio { min: f64 },
    #[error("must be of legal age")]
    UnderLegalAge,
    #[error("select your rank")]
    RankNotSelected,
    #[error("must have WhatsApp")]
    WhatsappRequired,
    #[error("must have time available to play")]
    AvailabilityRequired,
    #[error("must accept the content creation terms")]
    ContentTermsRequired,
}

/// All-or-nothing validation failure: one violation per failing field.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
#[error("draft failed validation on {} field(s)", .violations.len())]
pub struct ValidationErrors {
    pub violations: BTreeMap<Field, ConstraintViolation>,
}

impl ValidationErrors {
    /// Rendered `label: message` lines for logs and CLI output.
    pub fn describe(&self) -> Vec<String> {
        self.violations
            .iter()
            .map(|(field, violation)| format!("{}: {violation}", field.label()))
            .collect()
    }
}

/// Validate a draft against the policy.
///
/// Either every constraint passes and an immutable application is produced,
/// or every failing field is reported at once so the form can surface all
/// inline errors in a single pass.
pub fn validate(
    draft: &ApplicationDraft,
    policy: &ValidationPolicy,
) -> Result<ValidatedApplication, ValidationErrors> {
    let mut violations = BTreeMap::new();

    if draft.in_game_name.chars().count() < policy.min_name_chars {
        violations.insert(
            Field::InGameName,
            ConstraintViolation::TooShort {
                min: policy.min_name_chars,
            },
        );
    }

    if draft.player_id.chars().count() < policy.min_player_id_chars {
        violations.insert(
            Field::PlayerId,
            ConstraintViolation::TooShort {
                min: policy.min_player_id_chars,
            },
        );
    }

    let level = match parse_whole(&draft.level) {
        Some(value) if value >= i64::from(policy.minimum_level) => Some(saturate_u32(value)),
        Some(_) => {
            violations.insert(
                Field::Level,
                ConstraintViolation::BelowMinimum {
                    min: policy.minimum_level,
                },
            );
            None
        }
        None => {
            violations.insert(Field::Level, ConstraintViolation::NotANumber);
            None
        }
    };

    let rank = match draft.rank {
        Some(rank) => Some(rank),
        None => {
            violations.insert(Field::Rank, ConstraintViolation::RankNotSelected);
            None
        }
    };

    let kd_battle_royale = checked_ratio(
        &draft.kd_battle_royale,
        policy.minimum_kd_battle_royale,
        Field::KdBattleRoyale,
        &mut violations,
    );
    let kd_battle_escalation = checked_ratio(
        &draft.kd_battle_escalation,
        policy.minimum_kd_battle_escalation,
        Field::KdBattleEscalation,
        &mut violations,
    );

    let age = match parse_whole(&draft.age) {
        Some(value) if value >= i64::from(policy.minimum_age) => Some(saturate_u32(value)),
        Some(_) => {
            violations.insert(Field::Age, ConstraintViolation::UnderLegalAge);
            None
        }
        None => {
            violations.insert(Field::Age, ConstraintViolation::NotANumber);
            None
        }
    };

    if !draft.has_whatsapp {
        violations.insert(Field::HasWhatsapp, ConstraintViolation::WhatsappRequired);
    }
    if !draft.is_available {
        violations.insert(Field::IsAvailable, ConstraintViolation::AvailabilityRequired);
    }
    if !draft.accepts_content_terms {
        violations.insert(
            Field::AcceptsContentTerms,
            ConstraintViolation::ContentTermsRequired,
        );
    }

    if draft.message.chars().count() > policy.max_message_chars {
        violations.insert(
            Field::Message,
            ConstraintViolation::TooLong {
                max: policy.max_message_chars,
            },
        );
    }

    match (level, rank, kd_battle_royale, kd_battle_escalation, age) {
        (Some(level), Some(rank), Some(kd_br), Some(kd_be), Some(age))
            if violations.is_empty() =>
        {
            let message = if draft.message.is_empty() {
                None
            } else {
                Some(draft.message.clone())
            };
            Ok(ValidatedApplication::from_parts(
                draft.in_game_name.clone(),
                draft.player_id.clone(),
                level,
                rank,
                kd_br,
                kd_be,
                age,
                message,
            ))
        }
        _ => Err(ValidationErrors { violations }),
    }
}

fn checked_ratio(
    raw: &str,
    minimum: f64,
    field: Field,
    violations: &mut BTreeMap<Field, ConstraintViolation>,
) -> Option<f64> {
    match parse_ratio(raw) {
        Some(value) if value >= minimum => Some(value),
        Some(_) => {
            violations.insert(field, ConstraintViolation::BelowMinimumRatio { min: minimum });
            None
        }
        None => {
            violations.insert(field, ConstraintViolation::NotANumber);
            None
        }
    }
}

fn parse_whole(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

// Only called on values that already cleared a non-negative minimum.
fn saturate_u32(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn parse_ratio(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
