//! Line-oriented command input.
//!
//! Each non-blank line is one JSON `PlayerCommand`, e.g.
//! `{"type":"MoveAxis","horizontal":-1,"vertical":0}` or `{"type":"Fire"}`.

use std::io::BufRead;

use broadside_core::commands::PlayerCommand;

use crate::state::AppState;

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command_line(line: &str) -> Result<Option<PlayerCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(line)
        .map(Some)
        .map_err(|e| format!("Invalid command {:?}: {}", line, e))
}

/// Forward every command read from `reader` until EOF. Malformed lines are
/// logged and skipped. Returns the number of commands forwarded.
pub fn pump_commands(reader: impl BufRead, state: &AppState) -> Result<usize, String> {
    let mut forwarded = 0;
    for line in reader.lines() {
        let line = line.map_err(|e| format!("Failed to read input: {}", e))?;
        match parse_command_line(&line) {
            Ok(Some(command)) => {
                state.send_command(command)?;
                forwarded += 1;
            }
            Ok(None) => {}
            Err(e) => log::warn!("{}", e),
        }
    }
    Ok(forwarded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use broadside_core::state::GameStateSnapshot;
    use broadside_sim::engine::SimConfig;
    use broadside_sim::persistence::MemoryStore;
    use std::io::Cursor;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_command_line(r#"{"type":"Fire"}"#).unwrap(),
            Some(PlayerCommand::Fire)
        );
        assert_eq!(
            parse_command_line(r#"  {"type":"MoveAxis","horizontal":1,"vertical":-1}  "#).unwrap(),
            Some(PlayerCommand::MoveAxis {
                horizontal: 1,
                vertical: -1
            })
        );
        assert_eq!(parse_command_line("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_rejects_unknown_command() {
        let err = parse_command_line(r#"{"type":"Jump"}"#).unwrap_err();
        assert!(err.starts_with("Invalid command"));
        assert!(parse_command_line("fire").is_err());
    }

    #[test]
    fn test_pump_skips_bad_lines() {
        let state = AppState::new();
        state
            .start(
                SimConfig::default(),
                Box::new(MemoryStore::new()),
                Box::new(|_: &GameStateSnapshot| {}),
            )
            .unwrap();

        let input = Cursor::new("{\"type\":\"Start\"}\n\nnot json\n{\"type\":\"Fire\"}\n");
        assert_eq!(pump_commands(input, &state).unwrap(), 2);
        state.shutdown().unwrap();
    }

    #[test]
    fn test_pump_without_loop_fails() {
        let state = AppState::new();
        let input = Cursor::new("{\"type\":\"Start\"}\n");
        assert!(pump_commands(input, &state).is_err());
    }
}
