use super::*;

#[test]
fn new_trims_trailing_slashes() {
    let config = ClientConfig::new("https://outcomes.example.edu/api//");
    assert_eq!(config.api_base, "https://outcomes.example.edu/api");
}

#[test]
fn join_handles_leading_slash() {
    let config = ClientConfig::new("http://localhost:5000/api");
    assert_eq!(config.join("/courses"), "http://localhost:5000/api/courses");
    assert_eq!(config.join("courses"), "http://localhost:5000/api/courses");
}

#[test]
fn join_never_doubles_separator() {
    let config = ClientConfig::new("http://localhost:5000/api/");
    assert_eq!(config.join("/auth/login"), "http://localhost:5000/api/auth/login");
}

#[test]
fn storage_keys_are_fixed() {
    assert_eq!(TOKEN_KEY, "token");
    assert_eq!(USER_KEY, "user");
}

#[test]
fn build_env_default_points_at_local_api() {
    if option_env!("OUTCOMES_API_BASE").is_none() {
        assert_eq!(ClientConfig::default().api_base, DEFAULT_API_BASE);
    }
}
