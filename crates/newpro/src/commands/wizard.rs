//! Interactive project wizard

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use camino::Utf8Path;
use console::{Key, Term};
use newpro_projects::generate::ProjectTarget;
use newpro_projects::{NewproConfig, Outcome, Step, TemplateRegistry, Wizard};

use crate::output::{self, SpinnerProgress};
use crate::view;

/// Redraws the wizard in place
struct Screen {
    term: Term,
    lines: usize,
}

impl Screen {
    fn new(term: Term) -> Self {
        Self { term, lines: 0 }
    }

    fn draw(&mut self, text: &str) -> Result<()> {
        if self.lines > 0 {
            self.term.clear_last_lines(self.lines)?;
        }
        self.term.write_line(text)?;
        self.lines = text.lines().count();
        Ok(())
    }
}

async fn read_key(term: &Term) -> Result<Key> {
    let term = term.clone();
    let key = tokio::task::spawn_blocking(move || term.read_key())
        .await
        .context("Key reader task failed")??;
    Ok(key)
}

pub async fn run(config: &NewproConfig, base_dir: &Utf8Path) -> Result<ExitCode> {
    let term = Term::stdout();
    if !term.is_term() || !std::io::stdin().is_terminal() {
        bail!("newpro needs an interactive terminal (try `newpro templates` to list templates)");
    }
    if !base_dir.is_dir() {
        bail!("Target directory does not exist: {}", base_dir);
    }

    let registry = TemplateRegistry::builtin(config);
    let mut wizard = Wizard::new(&registry);
    let mut screen = Screen::new(term.clone());

    term.hide_cursor()?;
    let result = drive(&term, &mut screen, &mut wizard, base_dir).await;
    term.show_cursor()?;
    result?;

    let steps = next_steps(&wizard, base_dir);
    if !steps.is_empty() {
        output::header("Next steps");
        for step in &steps {
            output::info(step);
        }
    }

    // The Failed view already showed the error
    match wizard.step() {
        Step::Failed(_) => Ok(ExitCode::FAILURE),
        _ => Ok(ExitCode::SUCCESS),
    }
}

/// Hints printed once the screen closes; only a finished project has any
fn next_steps(wizard: &Wizard<'_>, base_dir: &Utf8Path) -> Vec<String> {
    match (wizard.step(), wizard.template()) {
        (Step::Done(path), Some(template)) => {
            tracing::debug!("Wizard finished at {}", path);
            let target = ProjectTarget::new(base_dir, wizard.project_name());
            template.generator().next_steps(&target)
        }
        _ => Vec::new(),
    }
}

/// Feed keys to the wizard until it asks to exit or a project is done
async fn drive(
    term: &Term,
    screen: &mut Screen,
    wizard: &mut Wizard<'_>,
    base_dir: &Utf8Path,
) -> Result<()> {
    screen.draw(&view::render(wizard))?;

    loop {
        let key = read_key(term).await?;
        let Some(input) = view::map_key(key.clone()) else {
            tracing::trace!("Ignoring key {:?}", key);
            continue;
        };

        match wizard.handle(input) {
            Outcome::Continue => screen.draw(&view::render(wizard))?,
            Outcome::Exit => {
                screen.draw(&view::render(wizard))?;
                return Ok(());
            }
            Outcome::Dispatch => {
                screen.draw(&view::render(wizard))?;

                let progress = SpinnerProgress::new("Starting...");
                wizard.dispatch(base_dir, &progress).await;
                progress.finish();

                screen.draw(&view::render(wizard))?;
                if matches!(wizard.step(), Step::Done(_)) {
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use newpro_projects::generate::NoProgress;
    use newpro_projects::Input;
    use tempfile::TempDir;

    fn type_name(wizard: &mut Wizard<'_>, name: &str) {
        for c in name.chars() {
            wizard.handle(Input::Char(c));
        }
    }

    #[test]
    fn test_failed_run_prints_nothing_after_the_screen() {
        let registry = TemplateRegistry::builtin(&NewproConfig::default());
        let mut wizard = Wizard::new(&registry);
        wizard.handle(Input::Down);
        wizard.handle(Input::Down);
        wizard.handle(Input::Confirm);
        type_name(&mut wizard, "bad|name");
        wizard.handle(Input::Confirm);

        assert!(matches!(wizard.step(), Step::Failed(_)));
        assert!(next_steps(&wizard, Utf8Path::new(".")).is_empty());
    }

    #[tokio::test]
    async fn test_done_run_prints_template_next_steps() {
        let temp = TempDir::new().unwrap();
        let base = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        let registry = TemplateRegistry::builtin(&NewproConfig::default());
        let mut wizard = Wizard::new(&registry);
        wizard.handle(Input::Down);
        wizard.handle(Input::Down);
        wizard.handle(Input::Confirm);
        type_name(&mut wizard, "hello");
        assert_eq!(wizard.handle(Input::Confirm), Outcome::Dispatch);
        wizard.dispatch(&base, &NoProgress).await;

        assert_eq!(next_steps(&wizard, &base), ["cd hello", "make run"]);
    }
}
