use crate::booking::{format_price, Quote};
use crate::catalog::Catalog;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::ui::table::render_table;
use crate::domain::{Car, Location};

use super::CommandDefinition;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "cars",
            "List vehicles, optionally only featured ones or those at a location",
            "cars [featured|<location>]",
            cmd_cars,
        ),
        CommandDefinition::new(
            "car",
            "Show the details of one vehicle",
            "car <id|slug>",
            cmd_car,
        ),
        CommandDefinition::new(
            "locations",
            "List pickup and drop-off locations",
            "locations",
            cmd_locations,
        ),
        CommandDefinition::new(
            "quote",
            "Estimate the price of a rental period",
            "quote <pickup-date> <return-date> [car-id]",
            cmd_quote,
        ),
    ]
}

fn cmd_cars(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let catalog = context.load_catalog().into_catalog();
    let filter = args.join(" ");
    let cars: Vec<&Car> = if filter.is_empty() {
        catalog.cars().iter().collect()
    } else if filter.eq_ignore_ascii_case("featured") {
        catalog.featured()
    } else {
        let location = Location::resolve(&filter).ok_or_else(|| {
            CommandError::InvalidArguments(format!("unknown location `{filter}`"))
        })?;
        catalog.available_at(location)
    };

    if cars.is_empty() {
        output::info("No vehicles match.");
        return Ok(());
    }

    let symbol = &context.config().currency_symbol;
    let rows: Vec<Vec<String>> = cars
        .iter()
        .map(|car| {
            vec![
                car.id.clone(),
                car.display_name(),
                format!("{}/day", format_price(symbol, car.price_per_day)),
                car.transmission.to_string(),
                car.fuel.to_string(),
                car.seats.to_string(),
                if car.featured { "*".into() } else { String::new() },
            ]
        })
        .collect();
    output::section("Vehicles");
    output::info(render_table(
        &["ID", "Vehicle", "Price", "Gearbox", "Fuel", "Seats", "Featured"],
        &rows,
    ));
    Ok(())
}

fn cmd_car(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let reference = args
        .first()
        .ok_or_else(|| CommandError::InvalidArguments("usage: car <id|slug>".into()))?;
    let catalog = context.load_catalog().into_catalog();
    let car = catalog.lookup(reference).ok_or_else(|| {
        CommandError::InvalidArguments(format!("no vehicle with id or slug `{reference}`"))
    })?;

    let symbol = &context.config().currency_symbol;
    output::section(car.display_name());
    output::info(format!("  ID: {}", car.id));
    output::info(format!("  Slug: {}", car.slug));
    output::info(format!(
        "  Price: {}/day",
        format_price(symbol, car.price_per_day)
    ));
    output::info(format!("  Transmission: {}", car.transmission));
    output::info(format!("  Fuel: {}", car.fuel));
    output::info(format!("  Seats: {}", car.seats));
    if let Some(hp) = car.horsepower {
        output::info(format!("  Horsepower: {hp}"));
    }
    if !car.tags.is_empty() {
        output::info(format!("  Tags: {}", car.tags.join(", ")));
    }
    let availability = if car.location_availability.is_empty() {
        "all locations".to_string()
    } else {
        car.location_availability.join(", ")
    };
    output::info(format!("  Available at: {availability}"));
    Ok(())
}

fn cmd_locations(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Locations");
    for location in Location::ALL {
        output::info(format!("  {:<14} {}", location.slug(), location.name()));
    }
    Ok(())
}

fn cmd_quote(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [pickup, ret, rest @ ..] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: quote <pickup-date> <return-date> [car-id]".into(),
        ));
    };
    let catalog: Catalog = match rest.first() {
        Some(_) => context.load_catalog().into_catalog(),
        None => Catalog::default(),
    };
    let car = match rest.first() {
        Some(reference) => Some(catalog.lookup(reference).ok_or_else(|| {
            CommandError::InvalidArguments(format!("no vehicle with id or slug `{reference}`"))
        })?),
        None => None,
    };

    let config = context.config();
    let quote = Quote::for_period(pickup, ret, car, config.fallback_daily_rate);
    let vehicle = car
        .map(Car::display_name)
        .unwrap_or_else(|| "any vehicle (flat rate)".into());
    output::info(format!(
        "{} x {} day(s) at {}/day = {}",
        vehicle,
        quote.days,
        format_price(&config.currency_symbol, quote.rate_per_day),
        format_price(&config.currency_symbol, quote.total)
    ));
    Ok(())
}
