//! The built-in demo catalog.

use crate::types::{CatalogEntry, EntryKind};

/// Reference catalog, in relevance order.
pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: 1,
        name: "WhatsApp Messenger",
        package_id: "com.whatsapp",
        description: "Aplicación de mensajería instantánea",
        kind: EntryKind::Application,
        category: "Comunicación",
        rating: 4.5,
        installs: "5B+",
        developer: "WhatsApp LLC",
        popularity: 100,
        icon_url: "https://play-lh.googleusercontent.com/bYtqbOcTYOlgc6gqZ2rwb8lptHuwlNE75zYJu6Bn076-hTmvd96HH-6v7S0YUAAJXoJN",
    },
    CatalogEntry {
        id: 2,
        name: "Candy Crush Saga",
        package_id: "com.king.candycrushsaga",
        description: "Juego de puzle con dulces",
        kind: EntryKind::Game,
        category: "Puzzle",
        rating: 4.6,
        installs: "1B+",
        developer: "King",
        popularity: 95,
        icon_url: "https://play-lh.googleusercontent.com/TLUeelx8wcpEzf3hoqeLxPs3ai1tdGtAZT2kNf6oUz6KRUl2rYXGcO817S1L4P33PcU",
    },
    CatalogEntry {
        id: 3,
        name: "Spotify - Música y Podcasts",
        package_id: "com.spotify.music",
        description: "Escucha millones de canciones",
        kind: EntryKind::Application,
        category: "Música",
        rating: 4.8,
        installs: "1B+",
        developer: "Spotify AB",
        popularity: 90,
        icon_url: "https://play-lh.googleusercontent.com/P2VMEenhpKhqekKkKvO8l7o1sA9RAo5Ub3q26rgVU8GJvhd9thQ9pyX5srz-1pVrYw",
    },
    CatalogEntry {
        id: 4,
        name: "Minecraft",
        package_id: "com.mojang.minecraftpe",
        description: "Juego de aventuras y construcción",
        kind: EntryKind::Game,
        category: "Aventura",
        rating: 4.7,
        installs: "500M+",
        developer: "Mojang",
        popularity: 85,
        icon_url: "https://play-lh.googleusercontent.com/VSwHQjcAttxsLE47RuS4PqpC4LT7lCoSjE7Hx5AW_yCxtDvcnsHHvm5CTuL5BPN-uRTP",
    },
    CatalogEntry {
        id: 5,
        name: "Instagram",
        package_id: "com.instagram.android",
        description: "Comparte fotos y videos",
        kind: EntryKind::Application,
        category: "Redes Sociales",
        rating: 4.4,
        installs: "5B+",
        developer: "Instagram",
        popularity: 98,
        icon_url: "https://play-lh.googleusercontent.com/VRMWkE5p3CkWhJs6nv-9ZsLas1RRWCZ3dgryBoA1ibECdCd6uXJPOI23TresxVxqCQ",
    },
    CatalogEntry {
        id: 6,
        name: "Among Us",
        package_id: "com.innersloth.amongus",
        description: "Encuentra al impostor",
        kind: EntryKind::Game,
        category: "Estrategia",
        rating: 4.5,
        installs: "500M+",
        developer: "InnerSloth LLC",
        popularity: 88,
        icon_url: "https://play-lh.googleusercontent.com/8ddL1kuoNUB5vUvgDVjYY3_6HwQcrg1K2fd_R8soD-e2QYj8fT9cfhfh3G0hn-sruLec",
    },
    CatalogEntry {
        id: 7,
        name: "Adobe Photoshop Express",
        package_id: "com.adobe.psmobile",
        description: "Editor de fotos",
        kind: EntryKind::Application,
        category: "Foto",
        rating: 4.3,
        installs: "500M+",
        developer: "Adobe",
        popularity: 80,
        icon_url: "https://play-lh.googleusercontent.com/7p7lR_2Lwfzo7iC-4YMsYk3M3C7M-3TZ5R7y6y6x9x9x9x9x9x9x9x9x9x9x9x9x9",
    },
    CatalogEntry {
        id: 8,
        name: "Asphalt 9: Legends",
        package_id: "com.gameloft.android.ANMP.GloftA9HM",
        description: "Juego de carreras",
        kind: EntryKind::Game,
        category: "Carreras",
        rating: 4.6,
        installs: "100M+",
        developer: "Gameloft SE",
        popularity: 82,
        icon_url: "https://play-lh.googleusercontent.com/3pVej2i9hq5FRdJcVcL3W2Qa9cX0n3n3n3n3n3n3n3n3n3n3n3n3n3n3n3n3n3n3",
    },
    CatalogEntry {
        id: 9,
        name: "Netflix",
        package_id: "com.netflix.mediaclient",
        description: "Servicio de streaming",
        kind: EntryKind::Application,
        category: "Entretenimiento",
        rating: 4.6,
        installs: "1B+",
        developer: "Netflix, Inc.",
        popularity: 92,
        icon_url: "https://play-lh.googleusercontent.com/TBRwjS_qfJCSj1m7zZB93FnpJM5fSpMA_wUlFDLxWAb45T9f2XW9BDJPhmjZJ4e5z0U",
    },
    CatalogEntry {
        id: 10,
        name: "Clash of Clans",
        package_id: "com.supercell.clashofclans",
        description: "Juego de estrategia",
        kind: EntryKind::Game,
        category: "Estrategia",
        rating: 4.7,
        installs: "500M+",
        developer: "Supercell",
        popularity: 89,
        icon_url: "https://play-lh.googleusercontent.com/LByrur1mTmPeNr0ljI-uAUcct1rzmTve5Esau1SwoAzjBXQUby6uHlHb7FgF20P7F7Q",
    },
    CatalogEntry {
        id: 11,
        name: "Telegram",
        package_id: "org.telegram.messenger",
        description: "Mensajería rápida y segura",
        kind: EntryKind::Application,
        category: "Comunicación",
        rating: 4.3,
        installs: "500M+",
        developer: "Telegram FZ-LLC",
        popularity: 87,
        icon_url: "https://play-lh.googleusercontent.com/ZU9cSsyIJZo6Oy7HTHiEPwZg0m2Crep-d5ZrfajqtsH-xgCq0Pt4xKkCHv6k7K7pG2A",
    },
    CatalogEntry {
        id: 12,
        name: "Subway Surfers",
        package_id: "com.kiloo.subwaysurf",
        description: "Juego de carreras sin fin",
        kind: EntryKind::Game,
        category: "Carreras",
        rating: 4.5,
        installs: "1B+",
        developer: "SYBO Games",
        popularity: 90,
        icon_url: "https://play-lh.googleusercontent.com/ZU9cSsyIJZo6Oy7HTHiEPwZg0m2Crep-d5ZrfajqtsH-xgCq0Pt4xKkCHv6k7K7pG2A",
    },
];

/// Looks up an entry by id.
pub fn find(catalog: &[CatalogEntry], id: u32) -> Option<&CatalogEntry> {
    catalog.iter().find(|entry| entry.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = CATALOG.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), CATALOG.len());
        assert_eq!(CATALOG.len(), 12);
    }

    #[test]
    fn test_scores_are_in_range() {
        for entry in CATALOG {
            assert!((0.0..=5.0).contains(&entry.rating), "{}", entry.name);
            assert!(entry.popularity <= 100, "{}", entry.name);
        }
    }

    #[test]
    fn test_package_ids_are_valid() {
        for entry in CATALOG {
            assert!(playfetch_core::is_valid_input(entry.package_id), "{}", entry.package_id);
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find(CATALOG, 2).map(|e| e.name), Some("Candy Crush Saga"));
        assert!(find(CATALOG, 99).is_none());
        assert!(find(&[], 2).is_none());
    }
}
