//! Seed data served while a collection has never been written.

use chrono::{DateTime, Utc};

use designi_core::{Email, Phone, ResourceId, Thumbnail, UserId, UserRole};

use crate::models::{DesignResource, User};

/// Id of the seeded administrator.
pub const ADMIN_ID: &str = "admin-1";

/// Author id carried by the seed catalog.
const SEED_AUTHOR: &str = "admin";

/// The built-in administrator account.
#[must_use]
pub fn admin() -> User {
    User {
        id: UserId::new(ADMIN_ID),
        name: "Administrador".to_owned(),
        email: Email::new_unchecked("admin@designi.com"),
        phone: Phone::new_unchecked("(00) 00000-0000"),
        role: UserRole::Admin,
    }
}

/// Seed user collection.
#[must_use]
pub fn users() -> Vec<User> {
    vec![admin()]
}

/// Seed resource catalog, stamped with `now` as upload date.
#[must_use]
pub fn resources(now: DateTime<Utc>) -> Vec<DesignResource> {
    let entry = |id: &str,
                 title: &str,
                 description: &str,
                 thumbnail: &str,
                 psd: &str,
                 tags: [&str; 3],
                 downloads: u64,
                 is_premium: bool| DesignResource {
        id: ResourceId::new(id),
        title: title.to_owned(),
        description: description.to_owned(),
        thumbnail_data: Thumbnail::new(thumbnail),
        psd_file_name: psd.to_owned(),
        upload_date: now,
        author_id: UserId::new(SEED_AUTHOR),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        downloads,
        is_premium,
    };

    vec![
        entry(
            "1",
            "Social Media Post - Burger",
            "Template profissional para hamburgueria artesanal.",
            "https://picsum.photos/400/400?random=1",
            "burger_social.psd",
            ["social media", "food", "burger"],
            120,
            true,
        ),
        entry(
            "2",
            "Flyer Evento Musical",
            "Cartaz para festas e eventos noturnos.",
            "https://picsum.photos/400/500?random=2",
            "music_flyer.psd",
            ["evento", "musica", "flyer"],
            45,
            false,
        ),
        entry(
            "3",
            "Cartão de Visita Minimalista",
            "Design limpo e corporativo para advogados.",
            "https://picsum.photos/400/300?random=3",
            "business_card.psd",
            ["corporativo", "minimalista", "business"],
            330,
            true,
        ),
    ]
}
