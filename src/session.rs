use crate::config;
use crate::events::AppEvent;
use crate::nav::{NavModel, RoutePath};
use crate::orbit::AVATAR_FALLBACK;
use crate::orbit::registry::FeatureRegistry;
use crate::orbit::state::{Intent, OrbitalState};
use crate::orbit::waveform::WaveformSimulator;
use async_channel::Receiver;

/// Routing collaborator: performs the page transition. The session never
/// inspects the result.
pub trait Router {
    fn navigate(&self, path: &RoutePath);
}

/// Receives trimmed command text submitted from the command bar.
pub trait CommandHandler {
    fn handle(&self, command: &str);
}

pub struct LogRouter;

impl Router for LogRouter {
    fn navigate(&self, path: &RoutePath) {
        log::info!("Navigating to {}", path);
    }
}

pub struct LogCommandHandler;

impl CommandHandler for LogCommandHandler {
    fn handle(&self, command: &str) {
        log::info!("Processing command: {}", command);
    }
}

/// One dashboard session: owns the orbital state, the feature registry, the
/// side navigation, and the waveform refresh task, and dispatches events
/// from the bus one at a time.
pub struct DashboardSession<R, C> {
    pub state: OrbitalState,
    pub registry: FeatureRegistry,
    pub nav: NavModel,
    simulator: WaveformSimulator,
    router: R,
    commands: C,
    display_name: Option<String>,
}

impl<R: Router, C: CommandHandler> DashboardSession<R, C> {
    pub fn new(
        registry: FeatureRegistry,
        nav: NavModel,
        router: R,
        commands: C,
        display_name: Option<String>,
    ) -> Self {
        Self {
            state: OrbitalState::new(),
            registry,
            nav,
            simulator: WaveformSimulator::new(),
            router,
            commands,
            display_name,
        }
    }

    /// Label shown on the pivot avatar.
    pub fn avatar_label(&self) -> String {
        initials(self.display_name.as_deref())
    }

    pub async fn run(mut self, rx: Receiver<AppEvent>) {
        while let Ok(event) = rx.recv().await {
            self.handle(event);
        }
    }

    pub fn handle(&mut self, event: AppEvent) {
        match event {
            AppEvent::Intent(intent) => self.apply(intent),
            AppEvent::Navigate(path) => {
                // a path matching a menu entry behaves like picking that entry
                let route = match self.nav.entries.iter().position(|e| e.path == path) {
                    Some(index) => self.nav.select(index),
                    None => {
                        self.nav.close_overlay();
                        Some(path)
                    }
                };
                if let Some(route) = route {
                    self.router.navigate(&route);
                    self.nav.set_route(route);
                }
            }
            AppEvent::ToggleNavOverlay => self.nav.toggle_overlay(),
            AppEvent::ConfigReload => self.reload_registry(),
        }
    }

    pub fn apply(&mut self, intent: Intent) {
        let outcome = self.state.apply(intent, &self.registry);
        if outcome.audio_started {
            self.simulator.start(self.state.waveform.clone());
        }
        if outcome.audio_stopped {
            self.simulator.stop();
        }
        if let Some(command) = outcome.submitted {
            self.commands.handle(&command);
        }
    }

    // A selection pointing at a feature that disappeared with the reload
    // simply resolves as no selection from here on.
    fn reload_registry(&mut self) {
        match FeatureRegistry::from_config(&config::load_or_default()) {
            Ok(registry) => {
                self.registry = registry;
                log::info!("Configuration reloaded");
            }
            Err(e) => log::error!("Failed to reload config: {}", e),
        }
    }
}

/// First letter of each whitespace token, uppercased; fixed fallback when
/// no usable name is available.
pub fn initials(display_name: Option<&str>) -> String {
    let derived: String = display_name
        .unwrap_or_default()
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    if derived.is_empty() {
        AVATAR_FALLBACK.to_string()
    } else {
        derived
    }
}
