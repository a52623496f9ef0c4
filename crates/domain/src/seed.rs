//! Built-in catalog used when nothing has been stored yet
//!
//! The list is also the golden fixture for initialization tests, so entries
//! and their order must not change casually.

use crate::aggregates::Catalog;
use crate::entities::MovieEntry;

/// Seed entry definition
pub struct SeedEntryDef {
    pub slug: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub summary: &'static str,
}

impl SeedEntryDef {
    pub fn to_entry(&self) -> MovieEntry {
        MovieEntry::new(self.slug, self.title, self.image, self.summary)
    }
}

/// Default catalog, in display order
pub const SEED_ENTRIES: &[SeedEntryDef] = &[
    SeedEntryDef {
        slug: "nobitas-dinosaur-2006",
        title: "Nobita's Dinosaur 2006",
        image: "/images/nobitas-dinosaur.jpg",
        summary: "Nobita hatches a dinosaur and sets off on a heartwarming adventure to return it to its time.",
    },
    SeedEntryDef {
        slug: "stand-by-me-doraemon",
        title: "Stand By Me Doraemon",
        image: "/images/stand-by-me.jpg",
        summary: "A 3D retelling of Doraemon's mission to help Nobita find confidence and love.",
    },
    SeedEntryDef {
        slug: "nobitas-little-star-wars",
        title: "Nobita's Little Star Wars",
        image: "/images/little-star-wars.jpg",
        summary: "Nobita and friends help tiny alien rebels in an interstellar war of justice.",
    },
    SeedEntryDef {
        slug: "great-adventure-into-the-underworld",
        title: "New Great Adventure into the Underworld",
        image: "/images/underworld.jpg",
        summary: "A magical quest to save the underworld from an evil invasion.",
    },
    SeedEntryDef {
        slug: "nobita-and-the-steel-troops",
        title: "Nobita and the Steel Troops",
        image: "/images/steel-troops.jpg",
        summary: "Robots from another world threaten Earth, and Nobita must stop them.",
    },
    SeedEntryDef {
        slug: "kingdom-of-clouds",
        title: "Kingdom of Clouds",
        image: "/images/kingdom-of-clouds.jpg",
        summary: "A sky-high journey into a world above the clouds, filled with secrets and wonder.",
    },
    SeedEntryDef {
        slug: "secret-gadget-museum",
        title: "Secret Gadget Museum",
        image: "/images/secret-gadget-museum.jpg",
        summary: "Doraemon\u{2019}s gadgets are stolen, sparking a mystery adventure in a futuristic museum.",
    },
    SeedEntryDef {
        slug: "legend-of-the-sun-king",
        title: "Legend of the Sun King",
        image: "/images/sun-king.jpg",
        summary: "Nobita is mistaken for a prince in an ancient kingdom with a mysterious curse.",
    },
    SeedEntryDef {
        slug: "great-adventure-in-the-antarctic",
        title: "Great Adventure in the Antarctic",
        image: "/images/antarctica.jpg",
        summary: "A chilling expedition into Antarctica unveils ancient secrets and hidden threats.",
    },
    SeedEntryDef {
        slug: "birth-of-japan",
        title: "Birth of Japan",
        image: "/images/birth-of-japan.jpg",
        summary: "Nobita and friends travel to the origins of Japan in this cultural time-travel epic.",
    },
    SeedEntryDef {
        slug: "nobita-and-the-windmasters",
        title: "Nobita and the Windmasters",
        image: "/images/windmasters.jpg",
        summary: "The gang enters a world ruled by wind spirits and faces off against an ancient evil.",
    },
    SeedEntryDef {
        slug: "drifts-in-the-universe",
        title: "Drifts in the Universe",
        image: "/images/universe-drift.jpg",
        summary: "A space adventure where Nobita and team drift into the unknown corners of the universe.",
    },
];

/// The seed list as a catalog
pub fn seed_catalog() -> Catalog {
    // Slugs above are unique; the duplicate check cannot fail.
    Catalog::from_entries(SEED_ENTRIES.iter().map(SeedEntryDef::to_entry).collect())
        .unwrap_or_default()
}
