use scaffold::config::{validate_project_name, ProjectConfig, ProjectType};
use scaffold::error::Error;

#[test]
fn test_validate_rejects_empty_name() {
    assert!(matches!(validate_project_name(""), Err(Error::ValidationError(_))));
}

#[test]
fn test_validate_rejects_reserved_characters() {
    for c in [' ', '/', '\\', ':', '*', '?', '"', '<', '>', '|'] {
        let name = format!("my{c}app");
        assert!(validate_project_name(&name).is_err(), "accepted {name:?}");
    }
}

#[test]
fn test_validate_rejects_control_characters() {
    for name in ["a\0b", "a\nb", "a\tb", "a\rb", "a\u{1b}b", "a\u{7f}b"] {
        match validate_project_name(name) {
            Err(Error::ValidationError(message)) => {
                assert!(message.contains("invalid characters"), "{message}");
            }
            other => panic!("Expected ValidationError for {name:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_validate_accepts_printable_names() {
    for name in ["demo", "my-app", "my_app", "App2", "a.b", "über-tool", "x"] {
        assert!(validate_project_name(name).is_ok(), "rejected {name:?}");
    }
}

#[test]
fn test_project_type_parse() {
    assert_eq!("cli".parse::<ProjectType>().unwrap(), ProjectType::Cli);
    assert_eq!("LIBRARY".parse::<ProjectType>().unwrap(), ProjectType::Library);
    assert_eq!(" service ".parse::<ProjectType>().unwrap(), ProjectType::Service);
    assert!("web".parse::<ProjectType>().is_err());
    assert!("".parse::<ProjectType>().is_err());
}

#[test]
fn test_apply_defaults_keeps_given_values() {
    let mut config = ProjectConfig {
        project_name: "demo".to_string(),
        module_path: "github.com/acme/demo".to_string(),
        author: "Ada".to_string(),
        license: "GPL-3.0".to_string(),
        project_type: ProjectType::Service,
    };
    let expected = config.clone();

    config.apply_defaults();
    assert_eq!(config, expected);
}

#[test]
fn test_apply_defaults_fills_empty_values() {
    let mut config = ProjectConfig {
        project_name: "demo".to_string(),
        module_path: String::new(),
        author: String::new(),
        license: "MIT".to_string(),
        project_type: ProjectType::Cli,
    };

    config.apply_defaults();
    assert_eq!(config.module_path, "demo");
    assert_eq!(config.author, "Your Name");
}
