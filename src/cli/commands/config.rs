use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::config::apply_setting;

use super::CommandDefinition;

const SETTABLE_KEYS: &[&str] = &[
    "language",
    "theme",
    "whatsapp",
    "currency",
    "fallback-rate",
    "catalog-bundled",
    "catalog-file",
    "catalog-rest",
];

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "config",
        "Show or change preferences",
        "config [show | set <key> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|arg| arg.to_ascii_lowercase()).as_deref() {
        None | Some("show") => {
            show(context);
            Ok(())
        }
        Some("set") => set(context, &args[1..]),
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "Unknown config action `{other}`. Usage: config [show | set <key> <value>]"
        ))),
    }
}

fn show(context: &ShellContext) {
    let config = context.config();
    output::section("Configuration");
    output::info(format!("  language       {}", config.language.code()));
    output::info(format!("  theme          {}", config.theme));
    output::info(format!("  whatsapp       {}", config.whatsapp_number));
    output::info(format!("  currency       {}", config.currency_symbol));
    output::info(format!("  fallback-rate  {}", config.fallback_daily_rate));
    output::info(format!("  catalog        {}", config.catalog));
    output::info(format!(
        "  file           {}",
        context.config_manager.config_path().display()
    ));
}

fn set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((key, rest)) = args.split_first() else {
        return Err(CommandError::InvalidArguments(format!(
            "Usage: config set <key> <value>. Keys: {}",
            SETTABLE_KEYS.join(", ")
        )));
    };
    let value = rest.join(" ");
    if value.is_empty() && !key.eq_ignore_ascii_case("catalog-bundled") {
        return Err(CommandError::InvalidArguments(format!(
            "Missing value for `{key}`"
        )));
    }

    apply_setting(&mut context.config, key, &value)?;
    context.persist_config()?;
    context.apply_output_preferences();
    tracing::info!(key = %key, "configuration updated");
    output::success(format!("Updated `{key}`."));
    Ok(())
}
