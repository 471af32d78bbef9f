//! Core types for the Mythforge character builder: game tables, the
//! character draft, and the dice and blessing state machines.
//!
//! This crate is independent of any front end. All game content (races,
//! weapons, religions) is compiled in as immutable tables; the mutable
//! state bundles ([`CharacterDraft`], [`RollSequencer`], [`BlessingWizard`])
//! are each owned by exactly one view and communicate by returned values.

/// Builder configuration: RNG seed and animation timing.
pub mod config;
/// Character draft: the in-progress, unsaved character record.
pub mod draft;
/// Error types used throughout the crate.
pub mod error;
/// Pantheon table for the manual blessing-entry fields.
pub mod pantheon;
/// Race table mapping each race to its fixed ability scores.
pub mod race;
/// Religion and deity tables with blessing text.
pub mod religion;
/// Six-roll d20 sequence with the positional curse offsets.
pub mod roll;
/// Ability scores and stat blocks.
pub mod stats;
/// Weapon category and item tables.
pub mod weapon;
/// Two-step religion/deity selection wizard.
pub mod wizard;

/// Re-export configuration.
pub use config::ForgeConfig;
/// Re-export the character draft.
pub use draft::CharacterDraft;
/// Re-export error types.
pub use error::{ForgeResult, RollError};
/// Re-export religion types.
pub use religion::{ChosenBlessing, Deity, Religion};
/// Re-export the roll sequencer.
pub use roll::{CURSE_OFFSETS, RollSequencer, SEQUENCE_LEN, apply_curse};
/// Re-export stat types.
pub use stats::{Ability, StatBlock};
/// Re-export the blessing wizard.
pub use wizard::{BlessingWizard, WizardStep};
