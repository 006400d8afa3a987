//! Seed entries used when no journal data has been stored yet

use crate::domain::JournalEntry;

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=400&width=600";

const FINCH_CONTENT: &str = "Today I observed the most peculiar variations in the finches across different islands. The beaks of these birds appear to be adapted to their specific environments and food sources. This observation leads me to question whether these adaptations might be the result of some natural process of selection.\n\nThe specimens collected today will require further examination. I have noted at least four distinct variations in beak shape and size, each seemingly corresponding to different feeding habits. The finches on the more arid islands possess stronger, more robust beaks suitable for cracking seeds, while those in more verdant areas have more delicate beaks appropriate for insect consumption.\n\nI must consider whether these variations represent different species entirely, or if they are adaptations of a common ancestor. This question shall occupy my thoughts for some time to come.";

const IGUANA_CONTENT: &str = "Encountered a species of iguana that swims in the ocean and feeds on seaweed. Unlike any reptile I have previously documented, these creatures have developed flattened tails that aid in swimming and specialized glands to expel excess salt.\n\nTheir dark coloration appears to help them absorb heat after emerging from the cold waters. I have sketched several specimens and noted their behaviors. They are remarkably adept swimmers, diving to considerable depths to graze on algae growing on submerged rocks.\n\nThe local inhabitants inform me that these iguanas are found nowhere else in the world. This fact, combined with their unique adaptations, suggests they have evolved in isolation on these islands for a considerable period. I shall collect several specimens for further study upon our return to England.";

const SANTIAGO_CONTENT: &str = "The volcanic formations here provide compelling evidence for Mr. Lyell's theories on geological processes. I observed layers of solidified lava flows, suggesting multiple eruptions over vast periods.\n\nThe gradual changes in the landscape through these slow processes mirror what I am beginning to suspect about the development of species. Nature seems to operate through small, incremental changes over immense time periods.\n\nI collected several rock samples displaying various stages of weathering and mineral composition. The island itself appears to be relatively young in geological terms, yet the diversity of life it supports is remarkable. This paradox of young land and diverse biota requires explanation.";

/// The three naturalist entries a fresh journal starts with
pub fn seed_entries() -> Vec<JournalEntry> {
    vec![
        seed(
            1,
            "Remarkable Finch Variations",
            "September 15, 1835",
            "Galapagos",
            FINCH_CONTENT,
        ),
        seed(
            2,
            "Unusual Marine Iguanas",
            "October 2, 1835",
            "Galapagos",
            IGUANA_CONTENT,
        ),
        seed(
            3,
            "Geological Formations at Santiago",
            "October 14, 1835",
            "Santiago Island",
            SANTIAGO_CONTENT,
        ),
    ]
}

fn seed(id: i64, title: &str, date: &str, location: &str, content: &str) -> JournalEntry {
    JournalEntry {
        id,
        title: title.to_string(),
        date: date.to_string(),
        location: location.to_string(),
        content: content.to_string(),
        image: Some(PLACEHOLDER_IMAGE.to_string()),
    }
}
