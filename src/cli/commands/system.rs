use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;

use super::CommandDefinition;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "help",
            "Show available commands or usage for one command",
            "help [command]",
            cmd_help,
        ),
        CommandDefinition::new("exit", "Leave the shell", "exit", cmd_exit),
    ]
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        let definition = context
            .registry
            .get(&name.to_ascii_lowercase())
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;
        output::info(format!("{} - {}", definition.name, definition.description));
        output::info(format!("usage: {}", definition.usage));
        return Ok(());
    }

    output::section("Commands");
    for definition in context.registry.iter() {
        output::info(format!("  {:<10} {}", definition.name, definition.description));
    }
    output::info("  quit       Alias for exit");
    Ok(())
}

fn cmd_exit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.running = false;
    Ok(())
}
