//! UI for pipes and CI.

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Plain-text UI with no animation or color.
///
/// Spinners become a single line on start and a single line on finish.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn print(&mut self, text: &str) {
        println!("{}", text);
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("✓ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        let visible = self.mode.shows_spinners();
        if visible {
            eprintln!("{}", message);
        }
        Box::new(LineSpinner { visible })
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_hints() {
            eprintln!("  {}", hint);
        }
    }
}

/// Spinner replacement that prints completion lines only.
struct LineSpinner {
    visible: bool,
}

impl SpinnerHandle for LineSpinner {
    fn finish_success(&mut self, msg: &str) {
        if self.visible {
            eprintln!("✓ {}", msg);
        }
    }

    fn finish_error(&mut self, msg: &str) {
        if self.visible {
            eprintln!("✗ {}", msg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_can_change_mode() {
        let mut ui = NonInteractiveUI::new(OutputMode::Normal);
        ui.set_output_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn silent_spinner_is_invisible() {
        let mut ui = NonInteractiveUI::new(OutputMode::Silent);
        let mut spinner = ui.start_spinner("Creating");
        spinner.finish_success("Created");
        assert_eq!(ui.output_mode(), OutputMode::Silent);
    }
}
