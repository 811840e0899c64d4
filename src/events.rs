use crate::nav::RoutePath;
use crate::orbit::Intent;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Intent(Intent),
    Navigate(RoutePath),
    ToggleNavOverlay,
    ConfigReload,
}
