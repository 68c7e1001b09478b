// Command-line helpers shared by the binaries

use anyhow::anyhow;

use crate::services::ConfigStore;

pub fn parse_arg_value(args: &[String], key: &str) -> Option<String> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

pub fn has_flag(args: &[String], key: &str) -> bool {
    args.iter().any(|a| a == key)
}

/// `Ok(None)` when the flag is absent; an error when its value does not parse.
pub fn parse_number<T: std::str::FromStr>(args: &[String], key: &str) -> anyhow::Result<Option<T>> {
    match parse_arg_value(args, key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| anyhow!("{} expects a number, got {:?}", key, raw)),
        None => Ok(None),
    }
}

/// Handle `--set-token <token>` / `--clear-token` against the config file.
/// Returns the message to print, or `None` when neither flag is present.
pub fn run_token_command(args: &[String], store: &ConfigStore) -> anyhow::Result<Option<String>> {
    if has_flag(args, "--set-token") {
        let token = parse_arg_value(args, "--set-token")
            .filter(|t| !t.trim().is_empty() && !t.starts_with("--"))
            .ok_or_else(|| anyhow!("--set-token expects a token value"))?;
        store.set_bearer_token(&token).map_err(|e| anyhow!(e))?;
        return Ok(Some(format!("Bearer token saved to {}", store.config_file().display())));
    }

    if has_flag(args, "--clear-token") {
        store.delete_bearer_token().map_err(|e| anyhow!(e))?;
        return Ok(Some(format!("Bearer token removed from {}", store.config_file().display())));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_number() {
        let a = args(&["tool", "--samples", "5", "--truncate", "abc"]);
        assert_eq!(parse_number::<usize>(&a, "--samples").unwrap(), Some(5));
        assert_eq!(parse_number::<usize>(&a, "--limit").unwrap(), None);
        assert!(parse_number::<usize>(&a, "--truncate").is_err());
    }

    #[test]
    fn test_set_and_clear_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().to_path_buf());

        let msg = run_token_command(&args(&["tweetpulse", "--set-token", "secret-1"]), &store).unwrap();
        assert!(msg.unwrap().contains("saved"));
        assert_eq!(store.get_bearer_token().unwrap().as_deref(), Some("secret-1"));

        let msg = run_token_command(&args(&["tweetpulse", "--clear-token"]), &store).unwrap();
        assert!(msg.unwrap().contains("removed"));
        assert!(store.get_bearer_token().unwrap().is_none());
    }

    #[test]
    fn test_set_token_requires_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().to_path_buf());
        assert!(run_token_command(&args(&["tweetpulse", "--set-token"]), &store).is_err());
        assert!(run_token_command(&args(&["tweetpulse", "--set-token", "--json"]), &store).is_err());
        assert!(!store.config_file().exists());
    }

    #[test]
    fn test_no_token_flags() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().to_path_buf());
        assert!(run_token_command(&args(&["tweetpulse", "#AI"]), &store).unwrap().is_none());
    }
}
