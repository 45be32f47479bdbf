//! The baseline catalog every fresh Pro-Mata database starts with.
//!
//! Each function returns the desired record with a fresh id. When the store
//! already holds the natural key, that id is discarded in favour of the stored
//! row's.

use time::OffsetDateTime;
use uuid::Uuid;

use catalog::{
    Accommodation, AccommodationKind, ActivityType, AdminAccount, BookingSettings, Difficulty,
    GeoPoint, ResearchCenter, SystemSetting,
};

pub const ADMIN_EMAIL: &str = "admin@promata.com.br";
pub const CENTER_SLUG: &str = "pro-mata-pucrs";
pub const ACCOMMODATION_IDENTIFIERS: [&str; 3] = ["QUARTO-001", "QUARTO-002", "DORMITORIO-001"];
pub const ACTIVITY_TYPE_SLUGS: [&str; 3] =
    ["trilha-ecologica", "observacao-aves", "pesquisa-cientifica"];
pub const BOOKING_SETTINGS_KEY: &str = "booking_settings";

pub fn admin_account(now: OffsetDateTime) -> AdminAccount {
    AdminAccount::new(
        ADMIN_EMAIL.to_string(),
        "Administrador Pro-Mata".to_string(),
        now,
    )
}

pub fn research_center(now: OffsetDateTime) -> ResearchCenter {
    ResearchCenter {
        id: Uuid::new_v4(),
        slug: CENTER_SLUG.to_string(),
        name: "Centro de Pesquisas e Proteção da Natureza Pró-Mata".to_string(),
        description:
            "Centro de pesquisa da PUCRS dedicado à conservação e pesquisa da Mata Atlântica"
                .to_string(),
        location: "São Francisco de Paula, RS".to_string(),
        coordinates: GeoPoint {
            latitude: -29.4494,
            longitude: -50.3847,
        },
        is_active: true,
        created_at: now,
    }
}

#[allow(clippy::too_many_arguments)]
fn accommodation(
    center_id: Uuid,
    identifier: &str,
    name: &str,
    description: &str,
    capacity: i32,
    kind: AccommodationKind,
    amenities: &[&str],
    price_per_night: f64,
) -> Accommodation {
    Accommodation {
        id: Uuid::new_v4(),
        identifier: identifier.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        capacity,
        kind,
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        center_id,
        is_active: true,
        price_per_night,
    }
}

/// Rooms owned by the center with id `center_id`.
pub fn accommodations(center_id: Uuid) -> [Accommodation; 3] {
    let [single, double, dorm] = ACCOMMODATION_IDENTIFIERS;
    [
        accommodation(
            center_id,
            single,
            "Quarto Individual 1",
            "Quarto individual com banheiro privativo",
            1,
            AccommodationKind::Individual,
            &["wifi", "banheiro_privativo", "aquecimento"],
            150.00,
        ),
        accommodation(
            center_id,
            double,
            "Quarto Duplo 1",
            "Quarto duplo com duas camas de solteiro",
            2,
            AccommodationKind::Duplo,
            &["wifi", "banheiro_privativo", "aquecimento", "varanda"],
            220.00,
        ),
        accommodation(
            center_id,
            dorm,
            "Dormitório Compartilhado A",
            "Dormitório compartilhado com 6 camas",
            6,
            AccommodationKind::Compartilhado,
            &["wifi", "banheiro_compartilhado", "armarios"],
            80.00,
        ),
    ]
}

fn activity_type(
    slug: &str,
    name: &str,
    description: &str,
    duration: i32,
    difficulty: Difficulty,
    max_participants: i32,
    price: f64,
) -> ActivityType {
    ActivityType {
        id: Uuid::new_v4(),
        slug: slug.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        duration,
        difficulty,
        max_participants,
        price,
        is_active: true,
    }
}

pub fn activity_types() -> [ActivityType; 3] {
    let [trail, birds, research] = ACTIVITY_TYPE_SLUGS;
    [
        activity_type(
            trail,
            "Trilha Ecológica",
            "Caminhada guiada pelas trilhas da mata",
            180, // 3h
            Difficulty::Moderado,
            15,
            45.00,
        ),
        activity_type(
            birds,
            "Observação de Aves",
            "Atividade de birdwatching com guia especializado",
            240, // 4h
            Difficulty::Facil,
            10,
            65.00,
        ),
        activity_type(
            research,
            "Pesquisa Científica",
            "Participação em atividades de pesquisa científica",
            480, // 8h
            Difficulty::Avancado,
            8,
            120.00,
        ),
    ]
}

pub fn booking_settings() -> BookingSettings {
    BookingSettings {
        max_advance_booking_days: 365,
        min_advance_booking_hours: 24,
        cancellation_deadline_hours: 48,
        default_check_in_time: "14:00".to_string(),
        default_check_out_time: "11:00".to_string(),
        allow_same_day_booking: false,
    }
}

pub fn system_setting() -> SystemSetting {
    SystemSetting::new(
        BOOKING_SETTINGS_KEY.to_string(),
        booking_settings(),
        "Configurações gerais para reservas".to_string(),
    )
}
