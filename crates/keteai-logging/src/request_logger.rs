use colored::Colorize;

use crate::safe_truncate;

const MAX_BODY_CHARS: usize = 5000;

/// Hide all but the first few characters of an API key
pub fn mask_api_key(api_key: &str) -> String {
    format!("{}***", api_key.chars().take(6).collect::<String>())
}

/// Log HTTP request details for debugging (stderr)
pub fn log_request(url: &str, body: &serde_json::Value, api_key: &str, verbose: bool) {
    if !verbose {
        return;
    }

    eprintln!("\n{}", "═".repeat(80).bright_cyan());
    eprintln!("{}", "🔍 HTTP REQUEST DEBUG".bright_cyan().bold());
    eprintln!("{}", "═".repeat(80).bright_cyan());

    if let Ok(parsed_url) = reqwest::Url::parse(url) {
        eprintln!("{}: {}", "URL".bright_yellow(), url);
        eprintln!("{}: {}", "Host".bright_yellow(), parsed_url.host_str().unwrap_or("unknown"));
        eprintln!("{}: {}", "Scheme".bright_yellow(), parsed_url.scheme());
    } else {
        eprintln!("{}: {}", "URL".bright_yellow(), url);
    }

    eprintln!("\n{}", "Headers:".bright_yellow());
    eprintln!("  Content-Type: application/json");
    eprintln!("  x-goog-api-key: {}", mask_api_key(api_key));

    eprintln!("\n{}", "Request Body:".bright_yellow());
    match serde_json::to_string_pretty(body) {
        Ok(json) => print_truncated(&json),
        Err(e) => eprintln!("{}", format!("Error serializing request: {}", e).red()),
    }

    eprintln!("{}", "═".repeat(80).bright_cyan());
    eprintln!();
}

/// Log HTTP response details for debugging (stderr)
pub fn log_response(status: &reqwest::StatusCode, body: &str, verbose: bool) {
    if !verbose {
        return;
    }

    eprintln!("\n{}", "═".repeat(80).bright_green());
    eprintln!("{}", "📥 HTTP RESPONSE DEBUG".bright_green().bold());
    eprintln!("{}", "═".repeat(80).bright_green());

    eprintln!(
        "{}: {} {}",
        "Status".bright_yellow(),
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );

    eprintln!("\n{}", "Response Body:".bright_yellow());
    // Try to pretty-print JSON, fall back to raw text
    match serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
    {
        Some(pretty) => print_truncated(&pretty),
        None => print_truncated(body),
    }

    eprintln!("{}", "═".repeat(80).bright_green());
    eprintln!();
}

fn print_truncated(text: &str) {
    if text.chars().count() > MAX_BODY_CHARS {
        eprintln!("{}", safe_truncate(text, MAX_BODY_CHARS));
        eprintln!(
            "\n{}",
            format!("... (truncated, total {} bytes)", text.len()).bright_black()
        );
    } else {
        eprintln!("{}", text);
    }
}
