//! Two-step religion/deity selection wizard.
//!
//! Step one picks a religion, step two picks a deity within it. The full
//! blessing record is emitted exactly once, as the return value of
//! [`BlessingWizard::select_deity`], after which the wizard resets itself.

use crate::religion::{self, ChosenBlessing, Religion};

/// Current step of the blessing wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    /// Picking one of the religions.
    #[default]
    ChoosingReligion,
    /// Picking a deity within the tentatively chosen religion.
    ChoosingDeity,
}

/// State machine for the two-step blessing selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlessingWizard {
    step: WizardStep,
    religion: Option<&'static Religion>,
}

impl BlessingWizard {
    /// Create a wizard at the religion-picking step.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current step.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// The tentatively chosen religion, if any.
    pub fn selected_religion(&self) -> Option<&'static Religion> {
        self.religion
    }

    /// Tentatively choose a religion. Only valid at the religion-picking
    /// step; unknown keys and out-of-step calls are ignored.
    pub fn select_religion(&mut self, key: &str) {
        if self.step == WizardStep::ChoosingReligion
            && let Some(religion) = religion::religion(key)
        {
            self.religion = Some(religion);
        }
    }

    /// Advance to deity picking. A no-op unless a religion is tentatively
    /// chosen.
    pub fn proceed(&mut self) {
        if self.step == WizardStep::ChoosingReligion && self.religion.is_some() {
            self.step = WizardStep::ChoosingDeity;
        }
    }

    /// Return to religion picking, discarding the tentative religion.
    pub fn back(&mut self) {
        if self.step == WizardStep::ChoosingDeity {
            self.step = WizardStep::ChoosingReligion;
            self.religion = None;
        }
    }

    /// Choose a deity of the tentatively chosen religion. On success the
    /// blessing record is returned and the wizard resets to its initial
    /// state. Unknown names and out-of-step calls return `None` and leave
    /// the wizard unchanged.
    pub fn select_deity(&mut self, name: &str) -> Option<ChosenBlessing> {
        if self.step != WizardStep::ChoosingDeity {
            return None;
        }
        let blessing = self.religion?.bless(name)?;
        *self = Self::default();
        Some(blessing)
    }

    /// Abandon the wizard: reset to the initial state without emitting.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mercury_vexoth_flow() {
        let mut wizard = BlessingWizard::new();
        wizard.select_religion("Mercury");
        wizard.proceed();
        assert_eq!(wizard.step(), WizardStep::ChoosingDeity);

        let blessing = wizard.select_deity("Vexoth").unwrap();
        assert_eq!(blessing.religion, "Mercury");
        assert_eq!(blessing.god, "Vexoth");
        assert_eq!(blessing.domain, "Trickery & Luck");
        assert_eq!(blessing.blessing, "+1 reroll per session (any D20 roll)");

        // Emitting resets the wizard.
        assert_eq!(wizard.step(), WizardStep::ChoosingReligion);
        assert!(wizard.selected_religion().is_none());
    }

    #[test]
    fn proceed_without_selection_is_noop() {
        let mut wizard = BlessingWizard::new();
        wizard.proceed();
        assert_eq!(wizard.step(), WizardStep::ChoosingReligion);
    }

    #[test]
    fn unknown_religion_ignored() {
        let mut wizard = BlessingWizard::new();
        wizard.select_religion("Neptune");
        assert!(wizard.selected_religion().is_none());
        wizard.proceed();
        assert_eq!(wizard.step(), WizardStep::ChoosingReligion);
    }

    #[test]
    fn back_clears_tentative_religion() {
        let mut wizard = BlessingWizard::new();
        wizard.select_religion("Venus");
        wizard.proceed();
        wizard.back();
        assert_eq!(wizard.step(), WizardStep::ChoosingReligion);
        assert!(wizard.selected_religion().is_none());
    }

    #[test]
    fn deity_of_other_religion_rejected() {
        let mut wizard = BlessingWizard::new();
        wizard.select_religion("Venus");
        wizard.proceed();
        assert!(wizard.select_deity("Vexoth").is_none());
        // Still at deity picking with the tentative religion intact.
        assert_eq!(wizard.step(), WizardStep::ChoosingDeity);
        assert_eq!(wizard.selected_religion().unwrap().name, "Venus");
    }

    #[test]
    fn select_deity_before_proceed_is_none() {
        let mut wizard = BlessingWizard::new();
        wizard.select_religion("Mercury");
        assert!(wizard.select_deity("Vexoth").is_none());
    }

    #[test]
    fn religion_change_only_at_first_step() {
        let mut wizard = BlessingWizard::new();
        wizard.select_religion("Mars");
        wizard.proceed();
        wizard.select_religion("Venus");
        assert_eq!(wizard.selected_religion().unwrap().name, "Mars");
    }

    #[test]
    fn cancel_resets_without_emitting() {
        let mut wizard = BlessingWizard::new();
        wizard.select_religion("Pluto");
        wizard.proceed();
        wizard.cancel();
        assert_eq!(wizard.step(), WizardStep::ChoosingReligion);
        assert!(wizard.selected_religion().is_none());
    }
}
