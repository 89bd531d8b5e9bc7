//! Per-command argument parsers.
//!
//! Each function receives the text after the command word and returns a
//! validated command or a [`ParseError`].

use std::num::NonZeroU32;

use chrono::NaiveDate;

use crate::commands::{
    add, completed, delete, edit, find, take, AddCommand, Command, DeleteCommand,
    DeleteCompletedCommand, DoneCommand, EditCommand, EditPrescriptionDescriptor, FindCommand,
    Index, TakeCommand, UntakeCommand,
};
use crate::model::prescription::{parse_consumption_count, parse_date, parse_stock};
use crate::model::{Dosage, Frequency, Name, NameContainsKeywordsPredicate, Note, Prescription};

use super::syntax::{
    ADD_PREFIXES, EDIT_PREFIXES, PREFIX_CONSUMPTION_COUNT, PREFIX_DOSAGE, PREFIX_END_DATE,
    PREFIX_EXPIRY_DATE, PREFIX_FREQUENCY, PREFIX_NAME, PREFIX_NOTE, PREFIX_START_DATE,
    PREFIX_TOTAL_STOCK,
};
use super::tokenizer::tokenize;
use super::util::{parse_amount, parse_index, parse_optional};
use super::ParseError;

/// `add n/NAME [d/..] [f/..] [s/..] [e/..] [exp/..] [ts/..] [nt/..]`.
///
/// The start date defaults to `today`.
pub fn parse_add(args: &str, today: NaiveDate) -> Result<Command, ParseError> {
    let map = tokenize(args, ADD_PREFIXES);
    if !map.contains(PREFIX_NAME) || !map.preamble().is_empty() {
        return Err(ParseError::invalid_format(add::MESSAGE_USAGE));
    }
    map.verify_no_duplicate_prefixes_for(ADD_PREFIXES)?;

    let name: Name = map.value(PREFIX_NAME).unwrap_or_default().parse()?;
    let start_date = parse_optional(map.value(PREFIX_START_DATE), parse_date)?.unwrap_or(today);

    let prescription = Prescription::builder(name, start_date)
        .dosage(parse_optional(map.value(PREFIX_DOSAGE), str::parse::<Dosage>)?)
        .frequency(parse_optional(
            map.value(PREFIX_FREQUENCY),
            str::parse::<Frequency>,
        )?)
        .end_date(parse_optional(map.value(PREFIX_END_DATE), parse_date)?)
        .expiry_date(parse_optional(map.value(PREFIX_EXPIRY_DATE), parse_date)?)
        .total_stock(parse_optional(map.value(PREFIX_TOTAL_STOCK), parse_stock)?)
        .note(parse_optional(map.value(PREFIX_NOTE), str::parse::<Note>)?)
        .build()?;

    Ok(Command::Add(AddCommand::new(prescription)))
}

/// `edit INDEX [n/..] [d/..] ... [c/..] [nt/..]`; at least one field.
pub fn parse_edit(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, EDIT_PREFIXES);
    let index = parse_index(map.preamble())
        .map_err(|_| ParseError::invalid_format(edit::MESSAGE_USAGE))?;
    map.verify_no_duplicate_prefixes_for(EDIT_PREFIXES)?;

    let descriptor = EditPrescriptionDescriptor {
        name: parse_optional(map.value(PREFIX_NAME), str::parse::<Name>)?,
        dosage: parse_optional(map.value(PREFIX_DOSAGE), str::parse::<Dosage>)?,
        frequency: parse_optional(map.value(PREFIX_FREQUENCY), str::parse::<Frequency>)?,
        start_date: parse_optional(map.value(PREFIX_START_DATE), parse_date)?,
        end_date: parse_optional(map.value(PREFIX_END_DATE), parse_date)?,
        expiry_date: parse_optional(map.value(PREFIX_EXPIRY_DATE), parse_date)?,
        total_stock: parse_optional(map.value(PREFIX_TOTAL_STOCK), parse_stock)?,
        consumption_count: parse_optional(
            map.value(PREFIX_CONSUMPTION_COUNT),
            parse_consumption_count,
        )?,
        note: parse_optional(map.value(PREFIX_NOTE), str::parse::<Note>)?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldEdited);
    }

    Ok(Command::Edit(EditCommand::new(index, descriptor)))
}

/// `delete INDEX`.
pub fn parse_delete(args: &str) -> Result<Command, ParseError> {
    let index = single_index(args, delete::MESSAGE_USAGE)?;
    Ok(Command::Delete(DeleteCommand::new(index)))
}

/// `done INDEX`.
pub fn parse_done(args: &str) -> Result<Command, ParseError> {
    let index = single_index(args, completed::DONE_MESSAGE_USAGE)?;
    Ok(Command::Done(DoneCommand::new(index)))
}

/// `deletec INDEX`.
pub fn parse_delete_completed(args: &str) -> Result<Command, ParseError> {
    let index = single_index(args, completed::DELETE_MESSAGE_USAGE)?;
    Ok(Command::DeleteCompleted(DeleteCompletedCommand::new(index)))
}

/// `find KEYWORD [MORE_KEYWORDS]...`.
pub fn parse_find(args: &str) -> Result<Command, ParseError> {
    if args.trim().is_empty() {
        return Err(ParseError::invalid_format(find::MESSAGE_USAGE));
    }
    Ok(Command::Find(FindCommand::new(
        NameContainsKeywordsPredicate::from_text(args),
    )))
}

/// `take INDEX [AMOUNT]`.
pub fn parse_take(args: &str) -> Result<Command, ParseError> {
    let (index, amount) = index_and_amount(args, take::TAKE_MESSAGE_USAGE)?;
    Ok(Command::Take(TakeCommand::new(index, amount)))
}

/// `untake INDEX [AMOUNT]`.
pub fn parse_untake(args: &str) -> Result<Command, ParseError> {
    let (index, amount) = index_and_amount(args, take::UNTAKE_MESSAGE_USAGE)?;
    Ok(Command::Untake(UntakeCommand::new(index, amount)))
}

fn single_index(args: &str, usage: &'static str) -> Result<Index, ParseError> {
    parse_index(args).map_err(|_| ParseError::invalid_format(usage))
}

fn index_and_amount(
    args: &str,
    usage: &'static str,
) -> Result<(Index, NonZeroU32), ParseError> {
    let mut parts = args.split_whitespace();
    let index = parts
        .next()
        .ok_or_else(|| ParseError::invalid_format(usage))
        .and_then(|text| parse_index(text).map_err(|_| ParseError::invalid_format(usage)))?;
    let amount = match parts.next() {
        Some(text) => parse_amount(text)?,
        None => NonZeroU32::MIN,
    };
    if parts.next().is_some() {
        return Err(ParseError::invalid_format(usage));
    }
    Ok((index, amount))
}
