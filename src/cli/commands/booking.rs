use std::mem;

use crate::booking::{format_booking_message, BookingWizard, WhatsAppLink};
use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::forms::{
    run_booking_wizard, FormResult, ScriptedInteraction, TerminalInteraction,
};
use crate::cli::output;
use crate::errors::{BookingError, HandoffError};

use super::CommandDefinition;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "book",
        "Start the booking wizard, optionally seeded from a query string",
        "book [pickupLocation=..&pickupDate=..&carType=..]",
        cmd_book,
    )]
}

fn cmd_book(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let query = args.join("&");
    let catalog = context.load_catalog().into_catalog();
    let mut wizard = BookingWizard::seeded(context.config().app_context(), &query);
    let opener = context.link_opener();

    let result = match context.mode() {
        CliMode::Interactive => {
            let mut interaction = TerminalInteraction::new(wizard.context().language);
            let options = context.submit_options();
            run_booking_wizard(
                &mut wizard,
                &catalog,
                &options,
                opener.as_ref(),
                &mut interaction,
            )
        }
        CliMode::Script => {
            let mut lines = mem::take(&mut context.script_lines);
            let outcome = {
                let options = context.submit_options();
                let mut interaction = ScriptedInteraction::new(&mut lines);
                run_booking_wizard(
                    &mut wizard,
                    &catalog,
                    &options,
                    opener.as_ref(),
                    &mut interaction,
                )
            };
            context.script_lines = lines;
            outcome
        }
    };

    match result {
        Ok(FormResult::Completed(receipt)) => {
            output::success(format!(
                "Booking sent for {} ({} day(s), {}).",
                receipt.summary.vehicle,
                receipt.summary.days,
                receipt.summary.formatted_total()
            ));
            if context.mode() == CliMode::Interactive {
                output::info(format!("Link: {}", receipt.link));
            }
            Ok(())
        }
        Ok(FormResult::Cancelled) => {
            output::info("Booking cancelled.");
            Ok(())
        }
        Err(BookingError::Handoff(HandoffError::OpenFailed(reason))) => {
            output::warning(format!("Could not open the browser ({reason})."));
            let options = context.submit_options();
            let summary = wizard.summary(&catalog, &options);
            let message = format_booking_message(&summary, wizard.context().language);
            let link = WhatsAppLink::new(options.destination, message)
                .map_err(|err| CommandError::Booking(err.into()))?;
            output::info(format!("Open this link to send your booking: {link}"));
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
