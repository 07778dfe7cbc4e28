//! # Form Controller
//!
//! Composes the file selector and the invocation builder behind the two
//! actions the form offers: choosing a file and harmonizing.
//!
//! The controller holds no form state of its own. The caller owns the
//! [`FormState`] and passes it in; every submit is independent and the
//! controller is idle again as soon as `submit` returns.

use std::path::PathBuf;

use tracing::{error, info};

use crate::config::HarmonizerConfig;
use crate::error::{HarmonizerError, Result};
use crate::file_selector::{self, FilePicker};
use crate::form::FormState;
use crate::invocation::Invocation;
use crate::launcher::{ProcessLauncher, SystemLauncher};

/// Result of one harmonize request.
#[derive(Debug)]
pub enum LaunchOutcome {
    /// The child was spawned. Its completion is not tracked.
    Launched(Invocation),
    /// Nothing is running; the reason says why.
    Failed(HarmonizerError),
}

impl LaunchOutcome {
    pub fn is_launched(&self) -> bool {
        matches!(self, LaunchOutcome::Launched(_))
    }
}

#[derive(Debug)]
pub struct FormController<L = SystemLauncher> {
    config: HarmonizerConfig,
    launcher: L,
}

impl FormController<SystemLauncher> {
    pub fn new(config: HarmonizerConfig) -> Self {
        Self::with_launcher(config, SystemLauncher)
    }
}

impl<L: ProcessLauncher> FormController<L> {
    pub fn with_launcher(config: HarmonizerConfig, launcher: L) -> Self {
        Self { config, launcher }
    }

    pub fn config(&self) -> &HarmonizerConfig {
        &self.config
    }

    /// Lets the user pick the input file; see [`file_selector::choose_file`].
    pub fn choose_file(
        &self,
        picker: &dyn FilePicker,
        state: &mut FormState,
    ) -> Result<Option<PathBuf>> {
        file_selector::choose_file(picker, state)
    }

    /// Builds the command for `state` and starts it once.
    ///
    /// Never panics on an incomplete form. Launch errors are logged here and
    /// handed back so the caller can decide how to show them.
    pub fn submit(&self, state: &FormState) -> LaunchOutcome {
        state.log_values();

        let invocation = match Invocation::build(&self.config, state) {
            Ok(invocation) => invocation,
            Err(e) => {
                error!("Cannot build invocation: {e}");
                return LaunchOutcome::Failed(e);
            }
        };
        info!(command = %invocation, "Launching harmonizer");

        match self.launcher.launch(&invocation) {
            Ok(()) => LaunchOutcome::Launched(invocation),
            Err(source) => {
                let e = HarmonizerError::ProcessLaunch {
                    program: invocation.program,
                    source,
                };
                error!("{e}");
                LaunchOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invocation::InvocationMode;
    use crate::options::{Key, Speed};
    use std::cell::RefCell;
    use std::io;

    #[derive(Default)]
    struct RecordingLauncher {
        launched: RefCell<Vec<Invocation>>,
        fail_with: Option<io::ErrorKind>,
    }

    impl ProcessLauncher for RecordingLauncher {
        fn launch(&self, invocation: &Invocation) -> io::Result<()> {
            self.launched.borrow_mut().push(invocation.clone());
            match self.fail_with {
                Some(kind) => Err(io::Error::from(kind)),
                None => Ok(()),
            }
        }
    }

    struct Picks(PathBuf);

    impl FilePicker for Picks {
        fn pick_wav_file(&self) -> Option<PathBuf> {
            Some(self.0.clone())
        }
    }

    #[test]
    fn submit_without_file_launches_fixed_command() {
        let controller =
            FormController::with_launcher(HarmonizerConfig::default(), RecordingLauncher::default());

        let outcome = controller.submit(&FormState::default());

        assert!(outcome.is_launched());
        let launched = controller.launcher.launched.borrow();
        assert_eq!(launched.len(), 1);
        assert_eq!(
            launched[0].to_string(),
            "./import somewhere.wav output.xml 0 0 120 4 0 4"
        );
    }

    #[test]
    fn each_submit_is_one_launch_regardless_of_form() {
        let controller =
            FormController::with_launcher(HarmonizerConfig::default(), RecordingLauncher::default());
        let mut state = FormState::default();

        controller.submit(&state);
        state.key = Key::B;
        state.speed = Speed::Slow;
        state.beats_per_minute = "not a number".to_string();
        controller.submit(&state);

        let launched = controller.launcher.launched.borrow();
        assert_eq!(launched.len(), 2);
        assert_eq!(launched[0], launched[1]);
    }

    #[test]
    fn launch_failure_is_reported_not_swallowed() {
        let launcher = RecordingLauncher {
            fail_with: Some(io::ErrorKind::NotFound),
            ..RecordingLauncher::default()
        };
        let controller = FormController::with_launcher(HarmonizerConfig::default(), launcher);

        match controller.submit(&FormState::default()) {
            LaunchOutcome::Failed(HarmonizerError::ProcessLaunch { program, source }) => {
                assert_eq!(program, "./import");
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected launch failure, got {other:?}"),
        }
    }

    #[test]
    fn from_form_without_file_fails_before_launching() {
        let config = HarmonizerConfig {
            invocation_mode: InvocationMode::FromForm,
            ..HarmonizerConfig::default()
        };
        let controller = FormController::with_launcher(config, RecordingLauncher::default());

        let outcome = controller.submit(&FormState::default());

        assert!(matches!(outcome, LaunchOutcome::Failed(HarmonizerError::MissingInputFile)));
        assert!(controller.launcher.launched.borrow().is_empty());
    }

    #[test]
    fn choose_file_then_submit_forwards_selection() {
        let config = HarmonizerConfig {
            invocation_mode: InvocationMode::FromForm,
            ..HarmonizerConfig::default()
        };
        let controller = FormController::with_launcher(config, RecordingLauncher::default());
        let mut state = FormState::default();

        controller
            .choose_file(&Picks(PathBuf::from("melody.wav")), &mut state)
            .unwrap();
        assert!(controller.submit(&state).is_launched());
        assert_eq!(controller.launcher.launched.borrow()[0].args[0], "melody.wav");
    }

    #[test]
    fn upper_case_wav_is_accepted_but_not_launched_from_form() {
        let config = HarmonizerConfig {
            invocation_mode: InvocationMode::FromForm,
            ..HarmonizerConfig::default()
        };
        let controller = FormController::with_launcher(config, RecordingLauncher::default());
        let mut state = FormState::default();

        controller
            .choose_file(&Picks(PathBuf::from("/takes/Hymn.WAV")), &mut state)
            .unwrap();
        assert_eq!(state.selected_file_path, Some(PathBuf::from("/takes/Hymn.WAV")));

        let outcome = controller.submit(&state);
        assert!(matches!(
            outcome,
            LaunchOutcome::Failed(HarmonizerError::UnsupportedInputSuffix(_))
        ));
        assert!(controller.launcher.launched.borrow().is_empty());
    }
}
