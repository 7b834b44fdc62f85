//! Drives a [`BookingWizard`] through a prompt interaction.
//!
//! The runner owns no state of its own: every transition goes through the
//! wizard, so a step whose required fields are missing is re-prompted with the
//! list the wizard reports. Interactions are pluggable so that terminal
//! prompts, scripted stdin and tests share the same loop.

use std::collections::VecDeque;

use chrono::{NaiveDate, NaiveTime};
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::booking::message::labels;
use crate::booking::{
    format_price, BookingWizard, HandoffReceipt, LinkOpener, SubmitOptions, TransitionError,
    WizardStep,
};
use crate::catalog::Catalog;
use crate::cli::output;
use crate::config::Language;
use crate::domain::{BookingField, Location};
use crate::errors::BookingError;

/// Final state of a wizard run.
#[derive(Debug, Clone, PartialEq)]
pub enum FormResult<T> {
    Completed(T),
    Cancelled,
}

/// Describes how prompts can be answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    /// User supplied a concrete value.
    Value(String),
    /// User chose to keep the current/suggested value.
    Keep,
    /// Go back to the previous field, or the previous step from a first field.
    Back,
    /// Abort the whole wizard.
    Cancel,
}

/// Responses accepted on the summary step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationResponse {
    Confirm,
    Back,
    Cancel,
}

/// One selectable option; `key` is what gets stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub key: String,
    pub label: String,
}

/// Data provided to render the current field.
pub struct PromptContext<'a> {
    pub field: BookingField,
    pub label: &'a str,
    pub step: WizardStep,
    pub default: Option<&'a str>,
    pub choices: &'a [Choice],
    pub allow_back: bool,
}

pub trait WizardInteraction {
    fn prompt_field(&mut self, context: &PromptContext<'_>) -> PromptResponse;

    fn confirm(&mut self, lines: &[String]) -> ConfirmationResponse;
}

/// Interprets a typed line the same way in every interaction.
pub fn interpret_buffer(buffer: &str, default: Option<&str>) -> PromptResponse {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return if default.is_some() {
            PromptResponse::Keep
        } else {
            PromptResponse::Value(String::new())
        };
    }

    match trimmed.to_ascii_lowercase().as_str() {
        ":cancel" => PromptResponse::Cancel,
        ":back" => PromptResponse::Back,
        ":clear" => PromptResponse::Value(String::new()),
        _ => PromptResponse::Value(trimmed.to_string()),
    }
}

fn interpret_confirmation(line: &str) -> ConfirmationResponse {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "y" | "yes" | "send" | "confirm" => ConfirmationResponse::Confirm,
        ":back" | "back" => ConfirmationResponse::Back,
        _ => ConfirmationResponse::Cancel,
    }
}

/// Answers prompts from a queue of lines; an exhausted queue cancels.
pub struct ScriptedInteraction<'q> {
    lines: &'q mut VecDeque<String>,
}

impl<'q> ScriptedInteraction<'q> {
    pub fn new(lines: &'q mut VecDeque<String>) -> Self {
        Self { lines }
    }
}

impl WizardInteraction for ScriptedInteraction<'_> {
    fn prompt_field(&mut self, context: &PromptContext<'_>) -> PromptResponse {
        match self.lines.pop_front() {
            Some(line) => {
                output::info(format!("{}: {}", context.label, line.trim()));
                interpret_buffer(&line, context.default)
            }
            None => PromptResponse::Cancel,
        }
    }

    fn confirm(&mut self, lines: &[String]) -> ConfirmationResponse {
        for line in lines {
            output::info(line);
        }
        match self.lines.pop_front() {
            Some(line) => interpret_confirmation(&line),
            None => ConfirmationResponse::Cancel,
        }
    }
}

/// Terminal prompts built on dialoguer.
pub struct TerminalInteraction {
    theme: ColorfulTheme,
    language: Language,
}

impl TerminalInteraction {
    pub fn new(language: Language) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            language,
        }
    }

    fn back_label(&self) -> &'static str {
        match self.language {
            Language::En => "← Back",
            Language::Pt => "← Voltar",
        }
    }

    fn prompt_text(&self, context: &PromptContext<'_>) -> PromptResponse {
        let prompt = match context.default {
            Some(default) => format!("{} [{}]", context.label, default),
            None => context.label.to_string(),
        };
        match Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
        {
            Ok(buffer) => interpret_buffer(&buffer, context.default),
            Err(_) => PromptResponse::Cancel,
        }
    }

    fn prompt_choice(&self, context: &PromptContext<'_>) -> PromptResponse {
        let mut items: Vec<String> = context.choices.iter().map(|c| c.label.clone()).collect();
        if context.allow_back {
            items.push(self.back_label().to_string());
        }
        let initial = context
            .default
            .and_then(|default| context.choices.iter().position(|c| c.key == default))
            .unwrap_or(0);
        match Select::with_theme(&self.theme)
            .with_prompt(context.label)
            .items(&items)
            .default(initial)
            .interact_opt()
        {
            Ok(Some(index)) if index < context.choices.len() => {
                PromptResponse::Value(context.choices[index].key.clone())
            }
            Ok(Some(_)) => PromptResponse::Back,
            Ok(None) | Err(_) => PromptResponse::Cancel,
        }
    }
}

impl WizardInteraction for TerminalInteraction {
    fn prompt_field(&mut self, context: &PromptContext<'_>) -> PromptResponse {
        if context.choices.is_empty() {
            self.prompt_text(context)
        } else {
            self.prompt_choice(context)
        }
    }

    fn confirm(&mut self, lines: &[String]) -> ConfirmationResponse {
        for line in lines {
            output::info(line);
        }
        let items = match self.language {
            Language::En => ["Send via WhatsApp", "Edit previous step", "Cancel"],
            Language::Pt => ["Enviar por WhatsApp", "Editar passo anterior", "Cancelar"],
        };
        match Select::with_theme(&self.theme)
            .items(&items)
            .default(0)
            .interact_opt()
        {
            Ok(Some(0)) => ConfirmationResponse::Confirm,
            Ok(Some(1)) => ConfirmationResponse::Back,
            _ => ConfirmationResponse::Cancel,
        }
    }
}

enum StepOutcome {
    Next,
    Back,
    Cancel,
}

/// Runs the wizard to completion, cancellation or error.
pub fn run_booking_wizard<I: WizardInteraction>(
    wizard: &mut BookingWizard,
    catalog: &Catalog,
    options: &SubmitOptions<'_>,
    opener: &dyn LinkOpener,
    interaction: &mut I,
) -> Result<FormResult<HandoffReceipt>, BookingError> {
    let language = wizard.context().language;
    loop {
        let step = wizard.step();
        output::section(format!(
            "Step {} / {} - {}",
            step.number(),
            WizardStep::total(),
            step.title(language)
        ));

        if step == WizardStep::Summary {
            let lines = summary_lines(wizard, catalog, options);
            match interaction.confirm(&lines) {
                ConfirmationResponse::Confirm => {
                    let receipt = wizard.submit(catalog, options, opener)?;
                    return Ok(FormResult::Completed(receipt));
                }
                ConfirmationResponse::Back => {
                    wizard.back()?;
                    continue;
                }
                ConfirmationResponse::Cancel => return Ok(FormResult::Cancelled),
            }
        }

        match collect_step(wizard, catalog, options.currency_symbol, interaction) {
            StepOutcome::Next => match wizard.advance() {
                Ok(_) => {}
                Err(TransitionError::ValidationFailed { missing, .. }) => {
                    let labels: Vec<&str> =
                        missing.iter().map(|field| field.label(language)).collect();
                    output::warning(format!("Missing required fields: {}", labels.join(", ")));
                }
                Err(err) => return Err(err.into()),
            },
            StepOutcome::Back => {
                if wizard.back().is_err() {
                    output::warning("Already at the first step.");
                }
            }
            StepOutcome::Cancel => return Ok(FormResult::Cancelled),
        }
    }
}

fn collect_step<I: WizardInteraction>(
    wizard: &mut BookingWizard,
    catalog: &Catalog,
    currency_symbol: &str,
    interaction: &mut I,
) -> StepOutcome {
    let step = wizard.step();
    let language = wizard.context().language;
    let fields = step.fields();
    let mut index = 0;

    while let Some(field) = fields.get(index).copied() {
        let current = wizard.draft().get(field).to_string();
        let suggestion = suggested_value(wizard, catalog, field);
        let default = if current.is_empty() {
            suggestion
        } else {
            Some(current.clone())
        };
        let choices = choices_for(wizard, catalog, currency_symbol, field);
        let context = PromptContext {
            field,
            label: field.label(language),
            step,
            default: default.as_deref(),
            choices: &choices,
            allow_back: index > 0 || step != WizardStep::Details,
        };

        match interaction.prompt_field(&context) {
            PromptResponse::Cancel => return StepOutcome::Cancel,
            PromptResponse::Back => {
                if index == 0 {
                    return StepOutcome::Back;
                }
                index -= 1;
            }
            PromptResponse::Keep => {
                if current.is_empty() {
                    if let Some(value) = default {
                        if let Err(message) = apply_value(wizard, catalog, field, &value) {
                            output::warning(message);
                            continue;
                        }
                    }
                }
                index += 1;
            }
            PromptResponse::Value(raw) => match apply_value(wizard, catalog, field, &raw) {
                Ok(()) => index += 1,
                Err(message) => output::warning(message),
            },
        }
    }
    StepOutcome::Next
}

/// Validates the input format for a field and stores it. Empty input clears
/// the field; required-ness is enforced by the wizard on advance.
fn apply_value(
    wizard: &mut BookingWizard,
    catalog: &Catalog,
    field: BookingField,
    raw: &str,
) -> Result<(), String> {
    let value = raw.trim();
    let stored = if value.is_empty() {
        String::new()
    } else {
        match field {
            BookingField::PickupLocation | BookingField::DropoffLocation => {
                Location::resolve(value)
                    .ok_or_else(|| {
                        format!("Unknown location `{value}`. Type `locations` to list them.")
                    })?
                    .name()
                    .to_string()
            }
            BookingField::PickupDate | BookingField::ReturnDate => {
                NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .map_err(|_| "Use YYYY-MM-DD format".to_string())?
                    .format("%Y-%m-%d")
                    .to_string()
            }
            BookingField::PickupTime | BookingField::ReturnTime => {
                NaiveTime::parse_from_str(value, "%H:%M")
                    .map_err(|_| "Use 24-hour HH:MM format".to_string())?
                    .format("%H:%M")
                    .to_string()
            }
            BookingField::SelectedCarId => {
                let id = catalog
                    .lookup(value)
                    .map(|car| car.id.clone())
                    .ok_or_else(|| format!("No vehicle with id or slug `{value}`"))?;
                wizard
                    .select_car(catalog, &id)
                    .map_err(|err| err.to_string())?;
                return Ok(());
            }
            _ => value.to_string(),
        }
    };
    wizard
        .set_field(field, &stored)
        .map_err(|err| err.to_string())
}

/// A requested car type pre-selects the first matching vehicle.
fn suggested_value(
    wizard: &BookingWizard,
    catalog: &Catalog,
    field: BookingField,
) -> Option<String> {
    match field {
        BookingField::SelectedCarId => catalog
            .matching_type(&wizard.draft().car_type)
            .map(|car| car.id.clone()),
        _ => None,
    }
}

fn choices_for(
    wizard: &BookingWizard,
    catalog: &Catalog,
    currency_symbol: &str,
    field: BookingField,
) -> Vec<Choice> {
    let per_day = labels(wizard.context().language).per_day;
    match field {
        BookingField::PickupLocation | BookingField::DropoffLocation => Location::ALL
            .iter()
            .map(|location| Choice {
                key: location.name().to_string(),
                label: location.name().to_string(),
            })
            .collect(),
        BookingField::SelectedCarId => {
            let available = Location::resolve(&wizard.draft().pickup_location)
                .map(|location| catalog.available_at(location))
                .filter(|cars| !cars.is_empty())
                .unwrap_or_else(|| catalog.cars().iter().collect());
            available
                .into_iter()
                .map(|car| Choice {
                    key: car.id.clone(),
                    label: format!(
                        "{} ({}/{})",
                        car.display_name(),
                        format_price(currency_symbol, car.price_per_day),
                        per_day
                    ),
                })
                .collect()
        }
        _ => Vec::new(),
    }
}

fn summary_lines(
    wizard: &BookingWizard,
    catalog: &Catalog,
    options: &SubmitOptions<'_>,
) -> Vec<String> {
    let summary = wizard.summary(catalog, options);
    let language = wizard.context().language;
    let l = labels(language);
    let draft = wizard.draft();
    let mut lines = vec![
        format!(
            "  {}: {} ({}/{})",
            l.vehicle,
            summary.vehicle,
            summary.formatted_rate(),
            l.per_day
        ),
        format!(
            "  {}: {}",
            BookingField::PickupLocation.label(language),
            summary.pickup_location
        ),
        format!(
            "  {}: {}",
            BookingField::DropoffLocation.label(language),
            summary.dropoff_location
        ),
        format!("  {} -> {}", summary.pickup, summary.return_at),
        format!("  {}: {}", l.days, summary.days),
        format!("  {}: {}", l.price, summary.formatted_total()),
        format!("  {} <{}> {}", summary.name, summary.email, summary.phone),
    ];
    if !draft.special_requests.is_empty() {
        lines.push(format!(
            "  {}: {}",
            BookingField::SpecialRequests.label(language),
            draft.special_requests
        ));
    }
    lines
}
