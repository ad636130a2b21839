//! Speech synthesis adapter.
//!
//! Speaks the current quote through whichever platform speech binary is on
//! PATH (`spd-say`, `espeak` or macOS `say`). Detection happens once at
//! startup; when nothing is found the capability is simply reported as
//! unavailable and the caller shows a denial toast instead.
//!
//! Rate/pitch/volume are fixed at 0.9x / 1.1x / 0.8x of each backend's
//! neutral value; the mapping to per-backend argument scales lives in
//! [`Backend::args`]. Starting a new utterance always cancels the previous
//! one first.

use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

use anyhow::{Context, Result};

/// Known speech binaries, in preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    SpdSay,
    Espeak,
    Say,
}

impl Backend {
    const ALL: [Backend; 3] = [Backend::SpdSay, Backend::Espeak, Backend::Say];

    pub fn binary(&self) -> &'static str {
        match self {
            Backend::SpdSay => "spd-say",
            Backend::Espeak => "espeak",
            Backend::Say => "say",
        }
    }

    /// Fixed prosody arguments for this backend.
    ///
    /// spd-say takes -100..=100 offsets from neutral; espeak takes absolute
    /// words-per-minute (175 neutral), pitch 0..=99 (50 neutral) and
    /// amplitude 0..=200 (100 neutral); `say` only exposes a rate.
    pub fn args(&self) -> Vec<&'static str> {
        match self {
            Backend::SpdSay => vec!["-r", "-10", "-p", "10", "-i", "-20"],
            Backend::Espeak => vec!["-s", "157", "-p", "55", "-a", "80"],
            Backend::Say => vec!["-r", "157"],
        }
    }
}

/// Find a binary in the given directories (split-out core of PATH lookup).
fn find_in(dirs: impl Iterator<Item = PathBuf>, binary: &str) -> Option<PathBuf> {
    dirs.map(|dir| dir.join(binary)).find(|p| p.is_file())
}

fn find_in_path(binary: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;
    find_in(std::env::split_paths(&path), binary)
}

/// The process-backed speech engine owned by the app for its whole lifetime.
#[derive(Debug)]
pub struct SpeechEngine {
    backend: Option<Backend>,
    child: Option<Child>,
}

impl SpeechEngine {
    /// Probe PATH for a usable backend.
    pub fn detect() -> Self {
        let backend = Backend::ALL
            .into_iter()
            .find(|b| find_in_path(b.binary()).is_some());
        match backend {
            Some(b) => tracing::info!("speech backend: {}", b.binary()),
            None => tracing::info!("no speech backend found, speaking disabled"),
        }
        Self {
            backend,
            child: None,
        }
    }

    /// An engine that never speaks, for tests.
    #[cfg(test)]
    pub fn disabled() -> Self {
        Self {
            backend: None,
            child: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Speak the text, cancelling any utterance still in flight.
    pub fn speak(&mut self, text: &str) -> Result<()> {
        let backend = self
            .backend
            .context("no speech backend available")?;
        self.cancel();

        let child = Command::new(backend.binary())
            .args(backend.args())
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to run {}", backend.binary()))?;
        self.child = Some(child);
        Ok(())
    }

    /// Stop the current utterance, if any.
    pub fn cancel(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl Drop for SpeechEngine {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spd_say_offsets_are_relative_to_neutral() {
        assert_eq!(
            Backend::SpdSay.args(),
            ["-r", "-10", "-p", "10", "-i", "-20"]
        );
    }

    #[test]
    fn espeak_gets_absolute_prosody_values() {
        // 0.9 * 175 wpm, 1.1 * 50 pitch, 0.8 * 100 amplitude
        assert_eq!(Backend::Espeak.args(), ["-s", "157", "-p", "55", "-a", "80"]);
    }

    #[test]
    fn find_in_locates_an_existing_file() {
        let dir = std::env::temp_dir().join(format!("moodscape-speech-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        let bin = dir.join("fake-say");
        std::fs::write(&bin, "").expect("create fake binary");

        let found = find_in([dir.clone()].into_iter(), "fake-say");
        assert_eq!(found, Some(bin));
        let missing = find_in([dir.clone()].into_iter(), "not-there");
        assert_eq!(missing, None);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn unavailable_engine_refuses_to_speak() {
        let mut engine = SpeechEngine::disabled();
        assert!(!engine.is_available());
        assert!(engine.speak("hello").is_err());
    }
}
