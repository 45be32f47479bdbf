use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

/// A text tag read back from the database did not match any known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} tag: {value:?}")]
pub struct TagError {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }
}

impl FromStr for Role {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "USER" => Ok(Role::User),
            other => Err(TagError {
                kind: "role",
                value: other.to_string(),
            }),
        }
    }
}

/// Room layout of an accommodation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccommodationKind {
    Individual,
    Duplo,
    Compartilhado,
}

impl AccommodationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AccommodationKind::Individual => "INDIVIDUAL",
            AccommodationKind::Duplo => "DUPLO",
            AccommodationKind::Compartilhado => "COMPARTILHADO",
        }
    }
}

impl FromStr for AccommodationKind {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INDIVIDUAL" => Ok(AccommodationKind::Individual),
            "DUPLO" => Ok(AccommodationKind::Duplo),
            "COMPARTILHADO" => Ok(AccommodationKind::Compartilhado),
            other => Err(TagError {
                kind: "accommodation type",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Facil,
    Moderado,
    Avancado,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Facil => "FACIL",
            Difficulty::Moderado => "MODERADO",
            Difficulty::Avancado => "AVANCADO",
        }
    }
}

impl FromStr for Difficulty {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FACIL" => Ok(Difficulty::Facil),
            "MODERADO" => Ok(Difficulty::Moderado),
            "AVANCADO" => Ok(Difficulty::Avancado),
            other => Err(TagError {
                kind: "difficulty",
                value: other.to_string(),
            }),
        }
    }
}

// Row decoding goes through `try_from = "String"`, so each tag needs these.
macro_rules! text_tag_conversions {
    ($($tag:ty),+) => {
        $(
            impl TryFrom<String> for $tag {
                type Error = TagError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    value.parse()
                }
            }

            impl fmt::Display for $tag {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

text_tag_conversions!(Role, AccommodationKind, Difficulty);

/// Administrator login, keyed by email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AdminAccount {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
}

impl AdminAccount {
    pub fn new(email: String, name: String, created_at: OffsetDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            role: Role::Admin,
            is_active: true,
            created_at,
        }
    }
}

/// WGS84 position, stored as a JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// A field station, keyed by slug. Accommodations hang off it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ResearchCenter {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub location: String,
    #[sqlx(json)]
    pub coordinates: GeoPoint,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
}

/// A bookable room or dormitory, keyed by identifier (e.g. `QUARTO-001`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Accommodation {
    pub id: Uuid,
    pub identifier: String,
    pub name: String,
    pub description: String,
    pub capacity: i32,
    #[sqlx(rename = "accommodation_type", try_from = "String")]
    pub kind: AccommodationKind,
    pub amenities: Vec<String>,
    pub center_id: Uuid,
    pub is_active: bool,
    pub price_per_night: f64,
}

/// A guided activity offered to visitors, keyed by slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ActivityType {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub description: String,
    /// Length of the activity in minutes.
    pub duration: i32,
    #[sqlx(try_from = "String")]
    pub difficulty: Difficulty,
    pub max_participants: i32,
    pub price: f64,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_parse_their_own_text() {
        for role in [Role::Admin, Role::User] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        for kind in [
            AccommodationKind::Individual,
            AccommodationKind::Duplo,
            AccommodationKind::Compartilhado,
        ] {
            assert_eq!(AccommodationKind::try_from(kind.to_string()).unwrap(), kind);
        }
        for difficulty in [Difficulty::Facil, Difficulty::Moderado, Difficulty::Avancado] {
            assert_eq!(difficulty.as_str().parse::<Difficulty>().unwrap(), difficulty);
        }
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let err = "EXTREMO".parse::<Difficulty>().unwrap_err();
        assert_eq!(err.kind, "difficulty");
        assert_eq!(err.value, "EXTREMO");
        assert_eq!(err.to_string(), "unknown difficulty tag: \"EXTREMO\"");

        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_tag_serde_matches_db_text() {
        let json = serde_json::to_string(&AccommodationKind::Compartilhado).unwrap();
        assert_eq!(json, "\"COMPARTILHADO\"");

        let role: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_new_admin_is_active() {
        let now = OffsetDateTime::now_utc();
        let admin = AdminAccount::new("a@b.c".to_string(), "A".to_string(), now);

        assert_eq!(admin.role, Role::Admin);
        assert!(admin.is_active);
        assert_eq!(admin.created_at, now);
    }
}
