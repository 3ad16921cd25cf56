use super::*;
use crate::core::constants::DEFAULT_STREAM_CHUNK;

mod test_helpers {
    use super::*;

    pub(super) fn parse_args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv)
            .unwrap_or_else(|err| panic!("argv={argv:?} should parse successfully: {err}"))
    }
}

use test_helpers::parse_args;

#[test]
fn render_accepts_file_and_flags() {
    let argv = [
        "chatmark",
        "render",
        "reply.md",
        "--standalone",
        "--no-highlight",
    ];
    let args = parse_args(&argv);
    match args.command {
        Commands::Render {
            file,
            standalone,
            no_highlight,
            no_sanitize,
        } => {
            assert_eq!(file, Some(PathBuf::from("reply.md")));
            assert!(standalone);
            assert!(no_highlight);
            assert!(!no_sanitize);
        }
        _ => panic!("argv={argv:?} should parse as render"),
    }
}

#[test]
fn render_without_file_reads_stdin() {
    let args = parse_args(&["chatmark", "render"]);
    assert!(matches!(args.command, Commands::Render { file: None, .. }));
}

#[test]
fn global_flags_work_after_subcommand() {
    let argv = ["chatmark", "widgets", "-", "--config", "/tmp/c.toml", "-v"];
    let args = parse_args(&argv);
    assert_eq!(args.config, Some(PathBuf::from("/tmp/c.toml")));
    assert!(args.verbose);
    match args.command {
        Commands::Widgets { file } => assert_eq!(file, Some(PathBuf::from("-"))),
        _ => panic!("argv={argv:?} should parse as widgets"),
    }
}

#[test]
fn stream_defaults() {
    let args = parse_args(&["chatmark", "stream"]);
    match args.command {
        Commands::Stream {
            file,
            chunk,
            redraws,
        } => {
            assert_eq!(file, None);
            assert_eq!(chunk, DEFAULT_STREAM_CHUNK);
            assert_eq!(redraws, 1);
        }
        _ => panic!("expected stream"),
    }

    let args = parse_args(&["chatmark", "stream", "--chunk", "3", "--redraws", "5"]);
    assert!(matches!(
        args.command,
        Commands::Stream {
            chunk: 3,
            redraws: 5,
            ..
        }
    ));
}

#[test]
fn config_set_collects_value_words() {
    let argv = ["chatmark", "config", "set", "syntax-theme", "Solarized", "(dark)"];
    let args = parse_args(&argv);
    match args.command {
        Commands::Config {
            command: Some(ConfigCommands::Set { key, value }),
        } => {
            assert_eq!(key, "syntax-theme");
            assert_eq!(value, ["Solarized", "(dark)"]);
        }
        _ => panic!("argv={argv:?} should parse as config set"),
    }
}

#[test]
fn config_without_subcommand_means_show() {
    let args = parse_args(&["chatmark", "config"]);
    assert!(matches!(args.command, Commands::Config { command: None }));

    let args = parse_args(&["chatmark", "config", "unset", "sanitize"]);
    assert!(matches!(
        args.command,
        Commands::Config {
            command: Some(ConfigCommands::Unset { .. })
        }
    ));
}

#[test]
fn action_takes_payload() {
    let argv = [
        "chatmark",
        "action",
        "cancel_order",
        "--payload",
        r#"{"order_no":"A1"}"#,
    ];
    let args = parse_args(&argv);
    match args.command {
        Commands::Action { action, payload } => {
            assert_eq!(action, "cancel_order");
            assert_eq!(payload.as_deref(), Some(r#"{"order_no":"A1"}"#));
        }
        _ => panic!("argv={argv:?} should parse as action"),
    }
}

#[test]
fn css_list_flag() {
    let args = parse_args(&["chatmark", "css", "--list"]);
    assert!(matches!(
        args.command,
        Commands::Css {
            theme: None,
            list: true
        }
    ));
}

#[test]
fn subcommand_is_required() {
    assert!(Args::try_parse_from(["chatmark"]).is_err());
    assert!(Args::try_parse_from(["chatmark", "chat"]).is_err());
}

#[test]
fn commands_without_settings_never_touch_the_config_file() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let broken_config = dir.path().join("config.toml");
    std::fs::write(&broken_config, "this is = = not toml").expect("write config");
    let message = dir.path().join("reply.md");
    std::fs::write(&message, "hello `code").expect("write message");
    let config = ConfigSource::new(Some(broken_config));

    run_command(
        Commands::Preprocess {
            file: Some(message.clone()),
        },
        &config,
    )
    .expect("preprocess ignores config");
    run_command(
        Commands::Action {
            action: "msg:hi".to_string(),
            payload: None,
        },
        &config,
    )
    .expect("action ignores config");

    let err = run_command(
        Commands::Widgets {
            file: Some(message),
        },
        &config,
    )
    .expect_err("widgets reads config");
    assert!(err.to_string().contains("Failed to parse config"));
}
