use crate::orbit::registry::{FeatureDescriptor, FeatureId, FeatureRegistry};
use crate::orbit::waveform::WaveformBuffer;

/// A request to transition the dashboard state. Intents are total: invalid
/// input degrades to a no-op, never an error.
#[derive(Debug, Clone)]
pub enum Intent {
    SelectFeature(FeatureId),
    DismissSelection,
    ToggleAudioSimulation,
    ToggleCommandBar,
    UpdateCommandInput(String),
    SubmitCommand,
}

/// What the session has to do after applying an intent. Mirrors the shape
/// of the state change without the caller re-inspecting every field.
#[derive(Debug, Clone, Default)]
pub struct IntentOutcome {
    pub changed: bool,
    pub audio_started: bool,
    pub audio_stopped: bool,
    /// Trimmed command text ready for the command handler.
    pub submitted: Option<String>,
}

impl IntentOutcome {
    fn changed() -> Self {
        Self {
            changed: true,
            ..Self::default()
        }
    }
}

/// Interactive state of one dashboard session. Created at rest, mutated
/// only through [`Intent`]s, dropped with the view.
#[derive(Debug, Default)]
pub struct OrbitalState {
    pub selected: Option<FeatureId>,
    pub audio_simulation_active: bool,
    pub command_bar_visible: bool,
    pub command_input: String,
    pub waveform: WaveformBuffer,
}

impl OrbitalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, intent: Intent, registry: &FeatureRegistry) -> IntentOutcome {
        match intent {
            Intent::SelectFeature(id) => {
                if registry.find(&id).is_none() {
                    return IntentOutcome::default();
                }
                self.selected = Some(id);
                IntentOutcome::changed()
            }
            Intent::DismissSelection => IntentOutcome {
                changed: self.selected.take().is_some(),
                ..IntentOutcome::default()
            },
            Intent::ToggleAudioSimulation => {
                self.audio_simulation_active = !self.audio_simulation_active;
                IntentOutcome {
                    changed: true,
                    audio_started: self.audio_simulation_active,
                    audio_stopped: !self.audio_simulation_active,
                    ..IntentOutcome::default()
                }
            }
            Intent::ToggleCommandBar => {
                self.command_bar_visible = !self.command_bar_visible;
                if !self.command_bar_visible {
                    self.command_input.clear();
                }
                IntentOutcome::changed()
            }
            Intent::UpdateCommandInput(text) => {
                if !self.command_bar_visible {
                    return IntentOutcome::default();
                }
                self.command_input = text;
                IntentOutcome::changed()
            }
            Intent::SubmitCommand => {
                if !self.command_bar_visible {
                    return IntentOutcome::default();
                }
                let submitted = self.command_input.trim().to_string();
                self.command_input.clear();
                self.command_bar_visible = false;
                IntentOutcome {
                    changed: true,
                    submitted: Some(submitted),
                    ..IntentOutcome::default()
                }
            }
        }
    }

    /// Resolves the current selection for display. Stale or unknown ids
    /// read as no selection rather than failing.
    pub fn selected_feature<'a>(
        &self,
        registry: &'a FeatureRegistry,
    ) -> Option<&'a FeatureDescriptor> {
        self.selected.as_ref().and_then(|id| registry.find(id))
    }
}
