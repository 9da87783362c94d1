//! Wizard state machine.
//!
//! Turns a sequence of [`Input`]s into a generation request:
//!
//! ```text
//! ChooseTemplate -> EnterName -> ChooseFlag* -> Dispatch -> Done | Failed
//!        \______________\____________\_____________-> Quit
//! ```
//!
//! The step only moves forward. Quit is accepted everywhere. `Esc`/`Ctrl+C`
//! map to [`Input::Quit`]; `q` also quits on menu steps and in terminal
//! states, but is ordinary text while the name is being typed.

mod menu;

pub use menu::{Menu, YES_NO};

use crate::error::{Error, Result};
use crate::generate::Progress;
use crate::templates::{TemplateDescriptor, TemplateRegistry};
use crate::types::{validate_project_name, Flags};
use camino::{Utf8Path, Utf8PathBuf};

/// Prompt of the first menu
pub const CHOOSE_TEMPLATE_PROMPT: &str = "Select project type:";

/// One key event, already decoded from the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Up,
    Down,
    Confirm,
    Backspace,
    Space,
    Char(char),
    Quit,
}

/// Current wizard step with its payload
#[derive(Debug)]
pub enum Step {
    ChooseTemplate(Menu),
    EnterName { buffer: String },
    /// `index` is the position of the flag in the template's flag list
    ChooseFlag { index: usize, menu: Menu },
    /// Request is complete and validated; generation has not run yet
    Dispatch,
    Done(Utf8PathBuf),
    Failed(Error),
    Quit,
}

impl Step {
    /// Whether the step only accepts quit
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Dispatch | Self::Done(_) | Self::Failed(_) | Self::Quit
        )
    }

    /// Menu of the step, if it is a menu step
    pub fn menu(&self) -> Option<&Menu> {
        match self {
            Self::ChooseTemplate(menu) | Self::ChooseFlag { menu, .. } => Some(menu),
            _ => None,
        }
    }
}

/// What the input loop should do after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw and read the next key
    Continue,
    /// The request is ready; call [`Wizard::dispatch`]
    Dispatch,
    /// Leave the input loop
    Exit,
}

/// Live wizard session over a template registry
#[derive(Debug)]
pub struct Wizard<'r> {
    registry: &'r TemplateRegistry,
    step: Step,
    template: Option<usize>,
    project_name: String,
    flags: Flags,
}

impl<'r> Wizard<'r> {
    pub fn new(registry: &'r TemplateRegistry) -> Self {
        Self {
            registry,
            step: Step::ChooseTemplate(Menu::new(CHOOSE_TEMPLATE_PROMPT, registry.labels())),
            template: None,
            project_name: String::new(),
            flags: Flags::new(),
        }
    }

    pub fn step(&self) -> &Step {
        &self.step
    }

    /// Chosen template, once the first step is confirmed
    pub fn template(&self) -> Option<&'r TemplateDescriptor> {
        self.template.and_then(|i| self.registry.get_index(i))
    }

    /// Confirmed project name; empty until the name step is confirmed
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    /// Cursor of the current menu step
    pub fn cursor(&self) -> Option<usize> {
        self.step.menu().map(Menu::cursor)
    }

    /// Failure shown by the `Failed` step
    pub fn error(&self) -> Option<&Error> {
        match &self.step {
            Step::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Apply one input
    pub fn handle(&mut self, input: Input) -> Outcome {
        if input == Input::Quit {
            return self.quit();
        }

        match &mut self.step {
            Step::ChooseTemplate(menu) => match input {
                Input::Up | Input::Char('k') => menu.up(),
                Input::Down | Input::Char('j') => menu.down(),
                Input::Char('q') => return self.quit(),
                Input::Confirm => {
                    if menu.selected().is_some() {
                        let index = menu.cursor();
                        self.template = Some(index);
                        tracing::debug!("Template chosen: {:?}", self.template().map(|t| t.id()));
                        self.step = Step::EnterName {
                            buffer: String::new(),
                        };
                    }
                }
                _ => {}
            },

            Step::EnterName { buffer } => match input {
                Input::Char(c) if !c.is_control() => buffer.push(c),
                Input::Space => buffer.push(' '),
                Input::Backspace => {
                    buffer.pop();
                }
                Input::Confirm if !buffer.is_empty() => {
                    self.project_name = std::mem::take(buffer);
                    return self.advance_to_flag(0);
                }
                _ => {}
            },

            Step::ChooseFlag { index, menu } => match input {
                Input::Up | Input::Char('k') => menu.up(),
                Input::Down | Input::Char('j') => menu.down(),
                Input::Char('q') => return self.quit(),
                Input::Confirm => {
                    let index = *index;
                    let value = menu.cursor() == 0;
                    if let Some(spec) = self.template().and_then(|t| t.flags().get(index)) {
                        self.flags.set(spec.key, value);
                    }
                    return self.advance_to_flag(index + 1);
                }
                _ => {}
            },

            Step::Dispatch | Step::Done(_) | Step::Failed(_) | Step::Quit => {
                if input == Input::Char('q') {
                    return self.quit();
                }
            }
        }

        Outcome::Continue
    }

    /// Run the chosen generator if the wizard is at `Dispatch`
    ///
    /// Moves to `Done` or `Failed`. Any other step is left untouched.
    pub async fn dispatch(&mut self, base_dir: &Utf8Path, progress: &dyn Progress) -> &Step {
        if matches!(self.step, Step::Dispatch) {
            let result: Result<Utf8PathBuf> = match self.template() {
                Some(template) => {
                    template
                        .generate(base_dir, &self.project_name, &self.flags, progress)
                        .await
                }
                None => Err(Error::unknown_template("(none selected)")),
            };

            self.step = match result {
                Ok(path) => Step::Done(path),
                Err(e) => {
                    tracing::debug!("Generation failed: {}", e);
                    Step::Failed(e)
                }
            };
        }

        &self.step
    }

    /// Go to flag step `index` of the chosen template, or dispatch when past the last
    fn advance_to_flag(&mut self, index: usize) -> Outcome {
        match self.template().and_then(|t| t.flags().get(index)) {
            Some(spec) => {
                self.step = Step::ChooseFlag {
                    index,
                    menu: Menu::yes_no(spec.prompt),
                };
                Outcome::Continue
            }
            None => self.enter_dispatch(),
        }
    }

    fn enter_dispatch(&mut self) -> Outcome {
        match validate_project_name(&self.project_name) {
            Ok(()) => {
                self.step = Step::Dispatch;
                Outcome::Dispatch
            }
            Err(e) => {
                tracing::debug!("{}", e);
                self.step = Step::Failed(e);
                Outcome::Continue
            }
        }
    }

    fn quit(&mut self) -> Outcome {
        // Done and Failed keep their result so the caller can report it
        if !matches!(self.step, Step::Done(_) | Step::Failed(_)) {
            self.step = Step::Quit;
        }
        Outcome::Exit
    }
}
