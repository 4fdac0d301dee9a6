use super::handlers::parse_base_url;
use super::*;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn registry_lists_keys_in_display_order() {
    let registry = SettingRegistry::new();
    assert_eq!(
        registry.keys_display_order(),
        &["chat-base-url", "site-base-url", "request-timeout"]
    );
}

#[test]
fn set_and_unset_chat_base_url() {
    let registry = SettingRegistry::new();
    let mut config = Config::default();

    let message = registry
        .set("chat-base-url", &args(&["https://hoper.example/api/"]), &mut config)
        .unwrap();
    assert_eq!(message, "✅ Set chat-base-url to: https://hoper.example/api");
    assert_eq!(
        config.chat_base_url.as_deref(),
        Some("https://hoper.example/api")
    );

    registry.unset("chat-base-url", &mut config).unwrap();
    assert_eq!(config.chat_base_url, None);
}

#[test]
fn site_base_url_must_be_absolute() {
    let registry = SettingRegistry::new();
    let mut config = Config::default();

    for input in ["/api", "localhost:8080", "ftp://files.example", "http://", "http:///x"] {
        assert_eq!(
            registry.set("site-base-url", &args(&[input]), &mut config),
            Err(SettingError::InvalidUrl(input.to_string())),
            "{input} should be rejected"
        );
    }
    assert_eq!(config.site_base_url, None);
    assert_eq!(
        parse_base_url("http://localhost:8080/").as_deref(),
        Ok("http://localhost:8080")
    );
}

#[test]
fn request_timeout_accepts_positive_seconds() {
    let registry = SettingRegistry::new();
    let mut config = Config::default();

    registry
        .set("request-timeout", &args(&["30s"]), &mut config)
        .unwrap();
    assert_eq!(config.request_timeout_secs, Some(30));

    for input in ["0", "-5", "soon"] {
        assert!(matches!(
            registry.set("request-timeout", &args(&[input]), &mut config),
            Err(SettingError::InvalidTimeout(_))
        ));
    }
    assert_eq!(config.request_timeout_secs, Some(30));
}

#[test]
fn missing_or_extra_values_are_rejected() {
    let registry = SettingRegistry::new();
    let mut config = Config::default();

    assert!(matches!(
        registry.set("chat-base-url", &[], &mut config),
        Err(SettingError::MissingArgs { .. })
    ));
    assert!(matches!(
        registry.set("request-timeout", &args(&["1", "2"]), &mut config),
        Err(SettingError::MissingArgs { .. })
    ));
}

#[test]
fn unknown_keys_are_reported() {
    let registry = SettingRegistry::new();
    let mut config = Config::default();

    assert_eq!(
        registry.unset("theme", &mut config),
        Err(SettingError::UnknownKey("theme".to_string()))
    );
    assert_eq!(SettingError::UnknownKey("theme".into()).exit_code(), 1);
}

#[test]
fn format_shows_defaults_for_unset_values() {
    let registry = SettingRegistry::new();
    let config = Config {
        request_timeout_secs: Some(12),
        ..Default::default()
    };

    let chat = registry.get("chat-base-url").unwrap();
    assert_eq!(
        chat.format(&config),
        "  chat-base-url: (unset, default: http://localhost:8000)"
    );
    let timeout = registry.get("request-timeout").unwrap();
    assert_eq!(timeout.format(&config), "  request-timeout: 12s");
}
