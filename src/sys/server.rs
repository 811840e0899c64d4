use crate::events::AppEvent;
use crate::nav::RoutePath;
use crate::orbit::{FeatureId, Intent};
use async_channel::Sender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UnixListener;

const SOCKET_PATH: &str = "/tmp/orbitdeck.sock";

/// Text control surface standing in for the dashboard's pointer/keyboard
/// sources: newline-delimited commands become events on the bus.
pub async fn run_server(tx: Sender<AppEvent>) {
    // Cleanup old socket if it exists
    if std::fs::metadata(SOCKET_PATH).is_ok() {
        let _ = std::fs::remove_file(SOCKET_PATH);
    }

    let listener = match UnixListener::bind(SOCKET_PATH) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind unix socket: {}", e);
            return;
        }
    };

    loop {
        match listener.accept().await {
            Ok((mut stream, _)) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let reader = BufReader::new(&mut stream);
                    let mut lines = reader.lines();

                    while let Ok(Some(line)) = lines.next_line().await {
                        if let Some(event) = parse_command(line.trim()) {
                            if tx.send(event).await.is_err() {
                                return;
                            }
                        }
                    }
                });
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}

/// Unknown verbs and malformed lines are ignored.
fn parse_command(line: &str) -> Option<AppEvent> {
    let (verb, rest) = match line.split_once(' ') {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "select" if !rest.is_empty() => {
            Some(AppEvent::Intent(Intent::SelectFeature(FeatureId::new(rest))))
        }
        "dismiss" => Some(AppEvent::Intent(Intent::DismissSelection)),
        "audio" => Some(AppEvent::Intent(Intent::ToggleAudioSimulation)),
        "commandbar" => Some(AppEvent::Intent(Intent::ToggleCommandBar)),
        // bare "input" clears the draft
        "input" => Some(AppEvent::Intent(Intent::UpdateCommandInput(
            rest.to_string(),
        ))),
        "submit" => Some(AppEvent::Intent(Intent::SubmitCommand)),
        "nav" if !rest.is_empty() => Some(AppEvent::Navigate(RoutePath::new(rest))),
        "menu" => Some(AppEvent::ToggleNavOverlay),
        "reload" => Some(AppEvent::ConfigReload),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_select() {
        match parse_command("select audio") {
            Some(AppEvent::Intent(Intent::SelectFeature(id))) => {
                assert_eq!(id, FeatureId::new("audio"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_parse_input_preserves_text() {
        match parse_command("input start the poll") {
            Some(AppEvent::Intent(Intent::UpdateCommandInput(text))) => {
                assert_eq!(text, "start the poll");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_bare_input_clears_draft() {
        match parse_command("input") {
            Some(AppEvent::Intent(Intent::UpdateCommandInput(text))) => assert_eq!(text, ""),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_parse_bare_verbs() {
        assert!(matches!(
            parse_command("dismiss"),
            Some(AppEvent::Intent(Intent::DismissSelection))
        ));
        assert!(matches!(
            parse_command("audio"),
            Some(AppEvent::Intent(Intent::ToggleAudioSimulation))
        ));
        assert!(matches!(
            parse_command("submit"),
            Some(AppEvent::Intent(Intent::SubmitCommand))
        ));
        assert!(matches!(parse_command("reload"), Some(AppEvent::ConfigReload)));
    }

    #[test]
    fn test_parse_nav() {
        match parse_command("nav /host/reports") {
            Some(AppEvent::Navigate(path)) => assert_eq!(path, RoutePath::new("/host/reports")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_and_incomplete_lines_ignored() {
        assert!(parse_command("").is_none());
        assert!(parse_command("teleport").is_none());
        assert!(parse_command("select").is_none());
        assert!(parse_command("nav").is_none());
    }
}
