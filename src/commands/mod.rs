//! Command dispatch
//!
//! The single optional command token is classified into an [`Action`] and
//! each action lives in its own module with an `execute` function.

pub mod build;
pub mod clean;

use anyhow::Result;

use crate::build::BuildContext;
use crate::error::BuildfrontError;

/// What a single invocation does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Configure and compile (no token)
    Build,
    /// Build, then run the test suite
    Test,
    /// Remove the build output directory
    Clean,
    /// Anything else; reported and rejected
    Unknown(String),
}

impl Action {
    /// Classify the command token. Matching is exact and case-sensitive.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            None | Some("") => Action::Build,
            Some("test") => Action::Test,
            Some("clean") => Action::Clean,
            Some(other) => Action::Unknown(other.to_string()),
        }
    }
}

/// Perform exactly one action
pub fn dispatch(action: &Action, ctx: &BuildContext<'_>) -> Result<()> {
    match action {
        Action::Build => build::execute(ctx),
        Action::Test => test::execute(ctx),
        Action::Clean => clean::execute(&ctx.layout),
        Action::Unknown(token) => Err(BuildfrontError::unknown_command(token.as_str()).into()),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::build::testing::RecordingRunner;
    use crate::build::{ProjectLayout, Step};

    fn project_with_build_dir() -> (TempDir, ProjectLayout) {
        let temp_dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp_dir.path());
        fs::create_dir_all(layout.build_dir.join("CMakeFiles")).unwrap();
        fs::write(layout.build_dir.join("CMakeCache.txt"), "# cache").unwrap();
        (temp_dir, layout)
    }

    #[test]
    fn test_from_token() {
        assert_eq!(Action::from_token(None), Action::Build);
        assert_eq!(Action::from_token(Some("")), Action::Build);
        assert_eq!(Action::from_token(Some("test")), Action::Test);
        assert_eq!(Action::from_token(Some("clean")), Action::Clean);
        assert_eq!(
            Action::from_token(Some("Test")),
            Action::Unknown("Test".to_string())
        );
        assert_eq!(
            Action::from_token(Some("bogus")),
            Action::Unknown("bogus".to_string())
        );
    }

    #[test]
    fn test_default_dispatch_only_builds() {
        let (_temp_dir, layout) = project_with_build_dir();
        let runner = RecordingRunner::new();
        let ctx = BuildContext::new(layout.clone(), &runner, false);

        dispatch(&Action::Build, &ctx).unwrap();

        assert_eq!(runner.steps(), vec![Step::Configure, Step::Compile]);
        assert!(layout.build_dir.exists());
    }

    #[test]
    fn test_default_dispatch_twice_succeeds() {
        let (_temp_dir, layout) = project_with_build_dir();
        let runner = RecordingRunner::new();
        let ctx = BuildContext::new(layout, &runner, false);

        dispatch(&Action::Build, &ctx).unwrap();
        dispatch(&Action::Build, &ctx).unwrap();

        assert_eq!(
            runner.steps(),
            vec![Step::Configure, Step::Compile, Step::Configure, Step::Compile]
        );
    }

    #[test]
    fn test_test_dispatch_runs_tests_after_build() {
        let (_temp_dir, layout) = project_with_build_dir();
        let runner = RecordingRunner::new();
        let ctx = BuildContext::new(layout, &runner, false);

        dispatch(&Action::Test, &ctx).unwrap();

        assert_eq!(
            runner.steps(),
            vec![Step::Configure, Step::Compile, Step::Test]
        );
    }

    #[test]
    fn test_failing_tests_fail_the_invocation() {
        let (_temp_dir, layout) = project_with_build_dir();
        let runner = RecordingRunner::new().failing(Step::Test, 8);
        let ctx = BuildContext::new(layout, &runner, false);

        let err = dispatch(&Action::Test, &ctx).unwrap_err();
        let err = err.downcast_ref::<BuildfrontError>().unwrap();

        assert!(matches!(
            err,
            BuildfrontError::ToolFailed {
                step: Step::Test,
                exit_code: Some(8)
            }
        ));
        assert_eq!(err.exit_code(), 8);
    }

    #[test]
    fn test_compile_failure_skips_tests() {
        let (_temp_dir, layout) = project_with_build_dir();
        let runner = RecordingRunner::new().failing(Step::Compile, 2);
        let ctx = BuildContext::new(layout, &runner, false);

        let err = dispatch(&Action::Test, &ctx).unwrap_err();

        assert_eq!(runner.steps(), vec![Step::Configure, Step::Compile]);
        assert!(matches!(
            err.downcast_ref::<BuildfrontError>(),
            Some(BuildfrontError::ToolFailed {
                step: Step::Compile,
                ..
            })
        ));
    }

    #[test]
    fn test_clean_dispatch_removes_build_dir_without_tools() {
        let (_temp_dir, layout) = project_with_build_dir();
        let runner = RecordingRunner::new();
        let ctx = BuildContext::new(layout.clone(), &runner, false);

        dispatch(&Action::Clean, &ctx).unwrap();

        assert!(!layout.build_dir.exists());
        assert!(layout.source_dir.exists());
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_unknown_token_has_no_side_effects() {
        let (_temp_dir, layout) = project_with_build_dir();
        let runner = RecordingRunner::new();
        let ctx = BuildContext::new(layout.clone(), &runner, false);

        let err = dispatch(&Action::Unknown("bogus".to_string()), &ctx).unwrap_err();

        assert!(err.to_string().contains("bogus"));
        assert!(runner.calls.borrow().is_empty());
        assert!(layout.build_dir.join("CMakeCache.txt").exists());
    }
}
