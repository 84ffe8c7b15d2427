//! Friend list CLI command handler

use crate::core::config::Config;
use crate::core::id::UuidGenerator;
use crate::core::registry::FriendRegistry;
use crate::error::Result;

/// Print the starting roster
pub fn handle_friends(config: &Config, json: bool) -> Result<()> {
    let registry = config.initial_registry(&UuidGenerator);

    if json {
        println!("{}", serde_json::to_string_pretty(registry.friends())?);
    } else {
        print!("{}", format_friends(&registry));
    }
    Ok(())
}

/// One line per friend: name, then balance text
pub fn format_friends(registry: &FriendRegistry) -> String {
    if registry.is_empty() {
        return "No friends yet.\n".to_string();
    }

    let width = registry
        .friends()
        .iter()
        .map(|f| f.name.chars().count())
        .max()
        .unwrap_or(0);

    registry
        .friends()
        .iter()
        .map(|f| format!("{:width$}  {}\n", f.name, f.status_text(), width = width))
        .collect()
}
