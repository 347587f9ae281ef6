/// A step (or tab) of a multi-step edit flow
pub trait WizardStep: Copy + Eq + std::fmt::Debug + Send + Sync + 'static {
    /// Steps a new record walks through, in order
    const SEQUENCE: &'static [Self];
    /// Every step the flow has; edit mode unlocks all of them
    const ALL: &'static [Self];

    fn first() -> Self;

    /// Key used in routes and in the persisted progress
    fn key(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|step| step.key() == key)
    }

    /// Step unlocked once this one has been saved
    fn next(&self) -> Option<Self> {
        let position = Self::SEQUENCE.iter().position(|step| step == self)?;
        Self::SEQUENCE.get(position + 1).copied()
    }
}
