//! Integration tests for the wizard flow
//!
//! These tests drive the wizard with key inputs from the first menu through
//! generation, against temporary directories.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use newpro_projects::generate::{create_project_dir, Generator, NoProgress, Progress, ProjectTarget};
use newpro_projects::types::Flags;
use newpro_projects::{
    Error, Input, NewproConfig, Outcome, Result, Step, TemplateDescriptor, TemplateRegistry,
    Wizard,
};
use std::sync::Arc;
use tempfile::TempDir;

/// Generator that creates an empty project directory
struct DirOnly;

#[async_trait]
impl Generator for DirOnly {
    async fn generate(
        &self,
        target: &ProjectTarget,
        _flags: &Flags,
        progress: &dyn Progress,
    ) -> Result<()> {
        create_project_dir(&target.path, progress)
    }
}

fn go_astro_registry() -> TemplateRegistry {
    TemplateRegistry::new(vec![
        TemplateDescriptor::new("go", "Go", Vec::new(), Arc::new(DirOnly)),
        TemplateDescriptor::new("astro", "Astro", Vec::new(), Arc::new(DirOnly)),
    ])
}

fn temp_base() -> (TempDir, Utf8PathBuf) {
    let temp = TempDir::new().unwrap();
    let base = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
    (temp, base)
}

fn feed(wizard: &mut Wizard<'_>, inputs: &[Input]) -> Outcome {
    let mut outcome = Outcome::Continue;
    for input in inputs {
        outcome = wizard.handle(*input);
    }
    outcome
}

fn chars(text: &str) -> Vec<Input> {
    text.chars()
        .map(|c| if c == ' ' { Input::Space } else { Input::Char(c) })
        .collect()
}

fn menu_prompt(wizard: &Wizard<'_>) -> Option<String> {
    wizard.step().menu().map(|m| m.prompt().to_string())
}

fn entries(dir: &Utf8Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

#[tokio::test]
async fn test_down_confirm_demo_confirm_creates_astro_project() {
    let (_temp, base) = temp_base();
    let registry = go_astro_registry();
    let mut wizard = Wizard::new(&registry);

    let mut inputs = vec![Input::Down, Input::Confirm];
    inputs.extend(chars("demo"));
    inputs.push(Input::Confirm);

    assert_eq!(feed(&mut wizard, &inputs), Outcome::Dispatch);
    assert_eq!(wizard.template().map(|t| t.label()), Some("Astro"));
    assert_eq!(wizard.project_name(), "demo");

    let step = wizard.dispatch(&base, &NoProgress).await;
    assert!(matches!(step, Step::Done(_)));
    assert!(base.join("demo").is_dir());
}

#[tokio::test]
async fn test_quit_at_any_step_has_no_side_effects() {
    let (_temp, base) = temp_base();
    let registry = TemplateRegistry::builtin(&NewproConfig::default());

    let prefixes: Vec<Vec<Input>> = vec![
        vec![],
        vec![Input::Confirm],
        [vec![Input::Confirm], chars("demo")].concat(),
        [vec![Input::Confirm], chars("demo"), vec![Input::Confirm]].concat(),
        [
            vec![Input::Confirm],
            chars("demo"),
            vec![Input::Confirm, Input::Down, Input::Confirm],
        ]
        .concat(),
    ];

    for prefix in prefixes {
        let mut wizard = Wizard::new(&registry);
        feed(&mut wizard, &prefix);

        assert_eq!(wizard.handle(Input::Quit), Outcome::Exit);
        assert!(matches!(wizard.step(), Step::Quit));

        // Dispatch after quit must not generate anything
        wizard.dispatch(&base, &NoProgress).await;
        assert_eq!(entries(&base), 0);
    }
}

#[tokio::test]
async fn test_second_dispatch_with_same_name_already_exists() {
    let (_temp, base) = temp_base();
    let registry = go_astro_registry();

    let mut inputs = vec![Input::Confirm];
    inputs.extend(chars("twice"));
    inputs.push(Input::Confirm);

    let mut first = Wizard::new(&registry);
    assert_eq!(feed(&mut first, &inputs), Outcome::Dispatch);
    assert!(matches!(first.dispatch(&base, &NoProgress).await, Step::Done(_)));

    let mut second = Wizard::new(&registry);
    assert_eq!(feed(&mut second, &inputs), Outcome::Dispatch);
    second.dispatch(&base, &NoProgress).await;
    assert!(matches!(second.error(), Some(Error::AlreadyExists { .. })));
}

#[tokio::test]
async fn test_existing_directory_is_left_untouched() {
    let (_temp, base) = temp_base();
    std::fs::create_dir(base.join("taken")).unwrap();
    std::fs::write(base.join("taken/keep.txt"), "keep").unwrap();

    let registry = TemplateRegistry::builtin(&NewproConfig::default());
    let mut wizard = Wizard::new(&registry);
    let mut inputs = vec![Input::Down, Input::Down, Input::Confirm];
    inputs.extend(chars("taken"));
    inputs.push(Input::Confirm);

    assert_eq!(feed(&mut wizard, &inputs), Outcome::Dispatch);
    wizard.dispatch(&base, &NoProgress).await;

    assert!(matches!(wizard.error(), Some(Error::AlreadyExists { .. })));
    assert_eq!(entries(&base.join("taken")), 1);
}

#[tokio::test]
async fn test_builtin_cpp_project_end_to_end() {
    let (_temp, base) = temp_base();
    let registry = TemplateRegistry::builtin(&NewproConfig::default());
    let mut wizard = Wizard::new(&registry);

    let mut inputs = vec![Input::Down, Input::Down, Input::Down, Input::Confirm];
    inputs.extend(chars("hello world"));
    inputs.push(Input::Confirm);

    assert_eq!(feed(&mut wizard, &inputs), Outcome::Dispatch);
    assert_eq!(wizard.template().map(|t| t.id()), Some("cpp"));

    wizard.dispatch(&base, &NoProgress).await;
    let project = base.join("hello world");
    assert!(matches!(wizard.step(), Step::Done(path) if *path == project));
    for file in ["main.cpp", "Makefile", "README.md"] {
        assert!(project.join(file).is_file(), "{} missing", file);
    }
}

#[test]
fn test_builtin_go_asks_both_flags() {
    let registry = TemplateRegistry::builtin(&NewproConfig::default());
    let mut wizard = Wizard::new(&registry);

    let mut inputs = vec![Input::Confirm];
    inputs.extend(chars("tool"));
    inputs.push(Input::Confirm);
    feed(&mut wizard, &inputs);

    assert_eq!(menu_prompt(&wizard).as_deref(), Some("Use Cobra CLI?"));

    wizard.handle(Input::Down);
    wizard.handle(Input::Confirm);
    assert_eq!(menu_prompt(&wizard).as_deref(), Some("Add test file?"));

    assert_eq!(wizard.handle(Input::Confirm), Outcome::Dispatch);
    assert!(!wizard.flags().get("use_cobra_cli"));
    assert!(wizard.flags().get("add_test"));
}

#[tokio::test]
async fn test_forbidden_characters_rejected_for_every_builtin_template() {
    let (_temp, base) = temp_base();
    let registry = TemplateRegistry::builtin(&NewproConfig::default());

    for position in 0..registry.len() {
        let mut wizard = Wizard::new(&registry);
        let mut inputs = vec![Input::Down; position];
        inputs.push(Input::Confirm);
        inputs.extend(chars("bad*name"));
        // Enough confirms to pass every flag step
        inputs.extend([Input::Confirm; 4]);
        feed(&mut wizard, &inputs);

        wizard.dispatch(&base, &NoProgress).await;
        assert!(matches!(wizard.error(), Some(Error::InvalidName { .. })));
    }

    assert_eq!(entries(&base), 0);
}
