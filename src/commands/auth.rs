use clap::ArgMatches;
use crate::cli_context::CliContext;
use crate::client::RoomStore;
use crate::constants::SLUG_FALLBACK;

/// Show only the edges of a key.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 12 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

pub async fn handle_auth(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load()?;

    let url = matches.get_one::<String>("url");
    let key = matches.get_one::<String>("key");

    if let (Some(url), Some(key)) = (url, key) {
        context.set_credentials(url.clone(), key.clone())?;
        println!("Store credentials saved successfully!");

        // Check the connection with a cheap read
        let store = context.store()?;
        match store.slug_exists(SLUG_FALLBACK).await {
            Ok(_) => println!("✅ Connected to {}", store.base_url()),
            Err(e) => println!("❌ Failed to reach the store: {}", e),
        }
    } else if matches.get_flag("show") {
        let config = context.config();
        match (&config.store_url, &config.api_key) {
            (Some(url), Some(key)) => {
                println!("Store URL: {}", url);
                println!("API Key: {}", mask_key(key));
            }
            _ => println!("No store configured"),
        }
        if let Some(room) = &config.default_room {
            println!("Default room: {}", room);
        }
    } else {
        println!("Usage: wheel auth --url <URL> --key <KEY> or wheel auth --show");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("short"), "*****");
        assert_eq!(mask_key("eyJhbGciOiJIUzI1NiJ9.payload.sig"), "eyJhbGci....sig");
    }
}
