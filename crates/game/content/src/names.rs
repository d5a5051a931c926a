//! Static name tables for generated content.
//!
//! Content is generated, never loaded from data files, so the tables live
//! as plain constants. Names repeat once a table is exhausted; variety
//! comes from the rarity prefix.

use mindspire_core::Rarity;

pub(crate) const WEAPON_NAMES: &[&str] = &[
    "Quill Blade",
    "Scholar's Edge",
    "Riddle Fang",
    "Axiom Cleaver",
    "Syllogism Saber",
    "Paradox Pike",
    "Lexicon Lance",
    "Theorem Talon",
];

pub(crate) const ARMOR_NAMES: &[&str] = &[
    "Thinking Cap",
    "Grammar Guard",
    "Logic Plate",
    "Mnemonic Mail",
    "Aegis of Axioms",
    "Casing of Conjecture",
    "Vest of Verity",
    "Helm of Hypotheses",
];

pub(crate) const ENEMY_NAMES: &[&str] = &[
    "Fib Imp",
    "Quiz Ghoul",
    "Error Sprite",
    "Fallacy Fiend",
    "Red Herring",
    "Sophist Shade",
    "Doubt Wraith",
    "Paradox Drake",
    "Amnesia Golem",
    "The Misprint",
];

pub(crate) const RELIC_NAMES: &[&str] = &[
    "Sigil of Recall",
    "Orb of Insight",
    "Crest of Certainty",
    "Idol of Intuition",
    "Totem of Trivia",
    "Prism of Proof",
];

pub(crate) fn rarity_prefix(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Common => "",
        Rarity::Rare => "Polished ",
        Rarity::Epic => "Runed ",
        Rarity::Legendary => "Fabled ",
        Rarity::Mythical => "Primordial ",
    }
}
