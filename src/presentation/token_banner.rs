//! Console output of the `get-token` utility.

use std::fmt::Write;

use crate::application::services::Provisioned;
use crate::config::ApiSettings;
use crate::infrastructure::http::endpoints;
use crate::shared::error::HarnessError;

const RULE_WIDTH: usize = 60;

pub fn render_header(email: &str) -> String {
    format!(
        "Getting bearer token for API testing\n{}\n\nTrying to login with {}...",
        "=".repeat(RULE_WIDTH),
        email
    )
}

/// Token, account and copy-paste usage snippets
pub fn render_token(provisioned: &Provisioned, base_url: &str, token_file: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let token = &provisioned.token;
    let mut out = String::new();

    if provisioned.registered {
        let _ = writeln!(out, "User did not exist and was registered.");
    }
    let _ = writeln!(out, "Login successful!");
    let _ = writeln!(out, "\n{}", rule);
    let _ = writeln!(out, "Email: {}", provisioned.user.email);
    let _ = writeln!(out, "User ID: {}", provisioned.user.id);
    let _ = writeln!(out, "\nBEARER TOKEN:\n{}\n{}\n{}", rule, token, rule);

    let _ = writeln!(out, "\nUsage in HTTP requests:");
    let _ = writeln!(out, "   Authorization: Bearer {}", token);

    let _ = writeln!(out, "\nUsage in curl:");
    let _ = writeln!(out, "   curl -H \"Authorization: Bearer {}\" \\", token);
    let _ = writeln!(out, "        {}{}", base_url, endpoints::AUTH_ME);

    let _ = writeln!(out, "\nUsage with reqwest:");
    let _ = writeln!(out, "   client.get(url).bearer_auth(\"{}\")", token);

    let _ = write!(out, "\nToken saved to: {}", token_file);
    out
}

/// Shown when the backend cannot be reached
pub fn render_unreachable(base_url: &str) -> String {
    format!(
        "Cannot connect to backend server!\n   Make sure the backend is running on {}",
        base_url
    )
}

/// Shown when the backend accepts the connection but never answers
pub fn render_timeout(base_url: &str, timeout_secs: u64) -> String {
    format!(
        "Backend at {} did not answer within {}s",
        base_url, timeout_secs
    )
}

/// Operator hint for transport failures; `None` when the error speaks for itself
pub fn render_hint(err: &HarnessError, api: &ApiSettings) -> Option<String> {
    if err.is_connect() {
        Some(render_unreachable(&api.base_url))
    } else if err.is_timeout() {
        Some(render_timeout(&api.base_url, api.timeout_secs))
    } else {
        None
    }
}
