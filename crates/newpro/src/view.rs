//! Wizard rendering and key decoding

use console::{style, Key};
use newpro_projects::wizard::{Input, Menu, Step, Wizard};

const TITLE: &str = "Project Creator";

/// Decode a terminal key; keys the wizard has no use for map to `None`
pub fn map_key(key: Key) -> Option<Input> {
    match key {
        Key::ArrowUp => Some(Input::Up),
        Key::ArrowDown => Some(Input::Down),
        Key::Enter => Some(Input::Confirm),
        Key::Backspace => Some(Input::Backspace),
        Key::Escape | Key::CtrlC => Some(Input::Quit),
        Key::Char(' ') => Some(Input::Space),
        Key::Char(c) => Some(Input::Char(c)),
        _ => None,
    }
}

/// Render the current step as text
pub fn render(wizard: &Wizard<'_>) -> String {
    let mut s = String::new();
    s.push_str(&format!("{}\n\n", style(TITLE).magenta().bold()));

    match wizard.step() {
        Step::ChooseTemplate(menu) | Step::ChooseFlag { menu, .. } => {
            render_menu(&mut s, menu);
            s.push_str(&format!("\n{}", style("(Press q to quit)").dim()));
        }
        Step::EnterName { buffer } => {
            let label = wizard.template().map(|t| t.label()).unwrap_or_default();
            s.push_str(&format!("Enter project name for {}:\n", label));
            s.push_str(&format!("{}_\n\n", buffer));
            s.push_str(&format!(
                "{}\n{}",
                style("(Press Enter when done)").dim(),
                style("(Press Esc to quit)").dim()
            ));
        }
        Step::Dispatch => {
            s.push_str(&format!(
                "Creating project '{}'...",
                style(wizard.project_name()).cyan()
            ));
        }
        Step::Done(path) => {
            s.push_str(&format!(
                "{} Project '{}' created successfully in {}",
                style("✓").green().bold(),
                wizard.project_name(),
                path
            ));
        }
        Step::Failed(err) => {
            s.push_str(&format!(
                "{} {}: {}\n\n{}",
                style("✗").red().bold(),
                style(format!("Error ({})", err.kind())).red(),
                err,
                style("(Press q to quit)").dim()
            ));
        }
        Step::Quit => s.push_str("Cancelled, nothing was created."),
    }

    s
}

fn render_menu(s: &mut String, menu: &Menu) {
    s.push_str(&format!("{}\n\n", menu.prompt()));
    for (i, option) in menu.options().iter().enumerate() {
        if i == menu.cursor() {
            s.push_str(&format!("    {}\n", style(format!("> {}", option)).magenta().bold()));
        } else {
            s.push_str(&format!("    {}\n", style(format!("  {}", option)).blue()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newpro_projects::{NewproConfig, TemplateRegistry};

    fn plain(wizard: &Wizard<'_>) -> String {
        console::set_colors_enabled(false);
        render(wizard)
    }

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(Key::ArrowUp), Some(Input::Up));
        assert_eq!(map_key(Key::Enter), Some(Input::Confirm));
        assert_eq!(map_key(Key::Char(' ')), Some(Input::Space));
        assert_eq!(map_key(Key::Char('q')), Some(Input::Char('q')));
        assert_eq!(map_key(Key::CtrlC), Some(Input::Quit));
        assert_eq!(map_key(Key::Escape), Some(Input::Quit));
        assert_eq!(map_key(Key::Tab), None);
    }

    #[test]
    fn test_render_template_menu_marks_cursor() {
        let registry = TemplateRegistry::builtin(&NewproConfig::default());
        let mut wizard = Wizard::new(&registry);
        wizard.handle(Input::Down);

        let view = plain(&wizard);
        assert!(view.starts_with("Project Creator"));
        assert!(view.contains("Select project type:"));
        assert!(view.contains("    > Create new Astro project"));
        assert!(view.contains("      Create new Go project"));
        assert!(view.contains("(Press q to quit)"));
    }

    #[test]
    fn test_render_name_entry() {
        let registry = TemplateRegistry::builtin(&NewproConfig::default());
        let mut wizard = Wizard::new(&registry);
        wizard.handle(Input::Confirm);
        wizard.handle(Input::Char('a'));
        wizard.handle(Input::Space);
        wizard.handle(Input::Char('b'));

        let view = plain(&wizard);
        assert!(view.contains("Enter project name for Create new Go project:"));
        assert!(view.contains("a b_"));
    }

    #[test]
    fn test_render_flag_and_error() {
        let registry = TemplateRegistry::builtin(&NewproConfig::default());
        let mut wizard = Wizard::new(&registry);
        wizard.handle(Input::Confirm);
        wizard.handle(Input::Char('x'));
        wizard.handle(Input::Confirm);

        let view = plain(&wizard);
        assert!(view.contains("Use Cobra CLI?"));
        assert!(view.contains("    > Yes"));
        assert!(view.contains("      No"));

        let mut wizard = Wizard::new(&registry);
        wizard.handle(Input::Down);
        wizard.handle(Input::Confirm);
        wizard.handle(Input::Char('/'));
        wizard.handle(Input::Confirm);

        let view = plain(&wizard);
        assert!(view.contains("Error (invalid name)"));
        assert!(view.contains("forbidden character '/'"));
    }
}
