//! Command-line front end for the Enigma core.
//!
//! Text is typed into a machine one key at a time. Letters are folded to
//! upper case and enciphered; everything else passes through untouched, or
//! is dropped when the output is written in fixed-size groups.
//!
//! The front end plays the display role: it registers a [`LampLog`] observer
//! and traces every lamp change.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;

use enigma_core::{Letter, Machine, MachineConfig, MachineState, Observer};
pub use error::CliError;

/// Front-end configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Starting rotor window, slow to fast (e.g. `"AAA"`).
    pub window: String,
    /// Write ciphertext in groups of this many letters, dropping everything
    /// that is not a letter.
    pub group: Option<usize>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { window: "AAA".to_string(), group: None }
    }
}

/// Observer that traces lamp and rotor window changes.
#[derive(Debug, Default)]
pub struct LampLog {
    lamp: Option<Letter>,
    window: String,
}

impl Observer for LampLog {
    fn update(&mut self, state: &MachineState) {
        let lamp = state.lit_lamp();
        if lamp != self.lamp {
            match lamp {
                Some(lamp) => tracing::debug!(%lamp, "lamp on"),
                None => tracing::trace!("lamp off"),
            }
            self.lamp = lamp;
        }

        let window: String = (0..3)
            .filter_map(|i| state.rotor_window_letter(i).ok())
            .map(Letter::to_char)
            .collect();
        if window != self.window {
            tracing::trace!(%window, "rotor window");
            self.window = window;
        }
    }
}

/// Build a machine for `config` with a [`LampLog`] attached.
pub fn build_machine(config: &RunConfig) -> Result<Machine, CliError> {
    if config.group == Some(0) {
        return Err(CliError::EmptyGroup);
    }

    let mut machine = Machine::new(MachineConfig::standard()?.with_window(&config.window)?)?;
    machine.add_observer(LampLog::default());

    tracing::info!(window = %config.window, "machine ready");
    Ok(machine)
}

/// Type `text` into `machine`, keeping non-letters in place.
pub fn type_text(machine: &mut Machine, text: &str) -> String {
    text.chars()
        .map(|symbol| match Letter::from_char(symbol.to_ascii_uppercase()) {
            Ok(key) => {
                let lamp = machine.key_pressed(key);
                machine.key_released(key);
                lamp.to_char()
            },
            Err(_) => symbol,
        })
        .collect()
}

/// Drop trailing line endings (`\n` or `\r\n`) from piped input.
pub fn strip_line_ending(text: &str) -> &str {
    text.trim_end_matches(['\r', '\n'])
}

/// Keep only letters and split them into space-separated groups of `size`.
pub fn group_letters(text: &str, size: usize) -> String {
    let letters: Vec<char> = text.chars().filter(char::is_ascii_uppercase).collect();
    letters
        .chunks(size.max(1))
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Encipher `text` with a fresh machine built from `config`.
pub fn run(config: &RunConfig, text: &str) -> Result<String, CliError> {
    let mut machine = build_machine(config)?;
    let typed = type_text(&mut machine, text);

    tracing::info!(window = ?machine.rotor_offsets(), "done");

    Ok(match config.group {
        Some(size) => group_letters(&typed, size),
        None => typed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_punctuation_and_case_folds() {
        let out = run(&RunConfig::default(), "Hello, World!").unwrap();
        assert_eq!(out, "SRFZI, ZJCWB!");
    }

    #[test]
    fn groups_letters() {
        let config = RunConfig { group: Some(5), ..RunConfig::default() };
        assert_eq!(run(&config, "hello world").unwrap(), "SRFZI ZJCWB");
        assert_eq!(group_letters("ABCDEFG", 3), "ABC DEF G");
    }

    #[test]
    fn deciphers_with_same_window() {
        let config = RunConfig { window: "KEY".to_string(), group: None };
        let ciphertext = run(&config, "MEET AT NOON").unwrap();
        assert_eq!(run(&config, &ciphertext).unwrap(), "MEET AT NOON");
    }

    #[test]
    fn strips_crlf_from_input() {
        assert_eq!(strip_line_ending("HELLO\r\n"), "HELLO");
        assert_eq!(strip_line_ending("HELLO\n\n"), "HELLO");
        assert_eq!(strip_line_ending("HE\rLLO"), "HE\rLLO");

        let out = run(&RunConfig::default(), strip_line_ending("hello world\r\n")).unwrap();
        assert_eq!(out, "SRFZI ZJCWB");
    }

    #[test]
    fn rejects_bad_window() {
        let config = RunConfig { window: "AA".to_string(), group: None };
        assert!(matches!(run(&config, "A"), Err(CliError::Machine(_))));
    }

    #[test]
    fn rejects_empty_group() {
        let config = RunConfig { group: Some(0), ..RunConfig::default() };
        assert!(matches!(run(&config, "A"), Err(CliError::EmptyGroup)));
    }

    #[test]
    fn lamp_log_is_registered() {
        let machine = build_machine(&RunConfig::default()).unwrap();
        assert_eq!(machine.observer_count(), 1);
    }
}
