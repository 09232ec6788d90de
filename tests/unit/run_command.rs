//! Unit tests for `devstack run`.

#![allow(clippy::expect_used, unsafe_code)]

use devstack::commands::exec::ASUSER_ENV;
use devstack::commands::run::{RunArgs, build_spec};
use serial_test::serial;

fn args() -> RunArgs {
    RunArgs {
        image: "image".to_string(),
        command: vec!["composer".to_string(), "install".to_string()],
        ..RunArgs::default()
    }
}

#[test]
#[serial]
fn spec_carries_image_and_command() {
    unsafe { std::env::remove_var(ASUSER_ENV) };
    let spec = build_spec(&args(), true);
    assert_eq!(spec.image, "image");
    assert_eq!(spec.command, vec!["composer", "install"]);
    assert_eq!(spec.user, None);
    assert!(spec.allocate_tty);
}

#[test]
#[serial]
fn asuser_env_is_forwarded() {
    unsafe { std::env::set_var(ASUSER_ENV, "1000") };
    let spec = build_spec(&args(), true);
    unsafe { std::env::remove_var(ASUSER_ENV) };
    assert_eq!(spec.user.as_deref(), Some("1000"));
}

#[test]
#[serial]
fn non_terminal_skips_tty_allocation() {
    unsafe { std::env::remove_var(ASUSER_ENV) };
    let spec = build_spec(&args(), false);
    assert!(!spec.allocate_tty);
}

#[test]
#[serial]
fn volume_and_publish_flags_pass_through() {
    unsafe { std::env::remove_var(ASUSER_ENV) };
    let spec = build_spec(
        &RunArgs {
            image: "image".to_string(),
            env: vec!["VAR_TEST=1".to_string()],
            volume: vec!["volume_test".to_string()],
            publish: vec!["publish_test".to_string()],
            ..RunArgs::default()
        },
        true,
    );
    assert_eq!(spec.env, vec!["VAR_TEST=1"]);
    assert_eq!(spec.volumes, vec!["volume_test"]);
    assert_eq!(spec.publish, vec!["publish_test"]);
}

mod run {
    use devstack::commands::run;
    use devstack::output::OutputContext;
    use serial_test::serial;

    use crate::helpers::FakeImageRunner;

    fn ctx() -> OutputContext {
        OutputContext::new(true, true)
    }

    #[tokio::test]
    #[serial]
    async fn forwards_spec_to_runner() {
        let runner = FakeImageRunner::default();
        run::run(&ctx(), &runner, super::args()).await.expect("run");

        let specs = runner.recorded_specs();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].image, "image");
        assert_eq!(specs[0].command, vec!["composer", "install"]);
    }

    #[tokio::test]
    #[serial]
    async fn non_zero_exit_is_an_error() {
        let runner = FakeImageRunner {
            exit_code: 1,
            ..FakeImageRunner::default()
        };
        let err = run::run(&ctx(), &runner, super::args())
            .await
            .expect_err("expected failure");
        assert!(err.to_string().contains("image"));
    }
}
