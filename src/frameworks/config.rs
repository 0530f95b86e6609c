use std::env;

// Runtime/server constants (not registry behavior).

pub fn http_port() -> u16 {
    env::var("SESSION_SERVER_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(8000)
}
