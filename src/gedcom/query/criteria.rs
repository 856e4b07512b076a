//! Compound match criteria for individuals
//!
//! Grammar: `<criteria> = (<clause> (":" <clause>)*)?` where
//! `<clause> = <key> "=" <value>`, keys are `[A-Za-z0-9_]+` and values run up
//! to the next `:` without containing `=`.
//!
//! Recognized keys:
//! - `surname=<text>`, `given_name=<text>` (alias `name`): case-insensitive substring
//! - `birth=<year>`, `death=<year>`, `marriage=<year>`: exact derived year
//! - `birth_range=<from>-<to>`, `death_range=...`, `marriage_range=...`: inclusive,
//!   a `to` of `-1` (`1900--1`) leaves the range open-ended
//!
//! All recognized clauses must hold. Unknown keys are ignored. A clause whose
//! value is not a valid year or range does not hold.

use crate::gedcom::ast::{ElementId, Gedcom, GedcomError, Individual};
use chumsky::prelude::*;
use thiserror::Error;

/// One `key=value` clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub key: String,
    pub value: String,
}

/// The criteria string is not a `:`-separated list of `key=value` clauses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid criteria at offset {offset}: {message}")]
pub struct CriteriaError {
    pub offset: usize,
    pub message: String,
}

fn criteria_parser() -> impl Parser<char, Vec<Clause>, Error = Simple<char>> {
    let key = filter::<char, _, Simple<char>>(|c: &char| c.is_ascii_alphanumeric() || *c == '_')
        .repeated()
        .at_least(1)
        .collect::<String>();

    let value = filter::<char, _, Simple<char>>(|c: &char| *c != ':' && *c != '=')
        .repeated()
        .collect::<String>();

    let clause = key
        .then_ignore(just('='))
        .then(value)
        .map(|(key, value)| Clause { key, value });

    clause
        .separated_by(just(':'))
        .allow_trailing()
        .then_ignore(end())
}

/// Split a criteria string into clauses
pub fn parse_criteria(criteria: &str) -> Result<Vec<Clause>, CriteriaError> {
    criteria_parser().parse(criteria).map_err(|errors| {
        let first = errors.into_iter().next();
        CriteriaError {
            offset: first.as_ref().map(|e| e.span().start).unwrap_or(0),
            message: first
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unexpected input".to_string()),
        }
    })
}

fn parse_year(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

fn parse_range(value: &str) -> Option<(i32, i32)> {
    let (from, to) = value.split_once('-')?;
    Some((parse_year(from)?, parse_year(to)?))
}

impl Gedcom {
    /// True if the individual satisfies every clause of `criteria`
    ///
    /// A criteria string that does not follow the `key=value` grammar never
    /// matches.
    pub fn criteria_match(&self, individual: ElementId, criteria: &str) -> Result<bool, GedcomError> {
        let person = self.individual(individual)?;
        let Ok(clauses) = parse_criteria(criteria) else {
            return Ok(false);
        };

        for clause in &clauses {
            if !self.clause_holds(&person, clause)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn clause_holds(&self, person: &Individual<'_>, clause: &Clause) -> Result<bool, GedcomError> {
        let value = clause.value.as_str();
        let holds = match clause.key.as_str() {
            "surname" => person.surname_match(value),
            "given_name" | "name" => person.given_name_match(value),
            "birth" => parse_year(value).is_some_and(|year| person.birth_year_match(year)),
            "birth_range" => {
                parse_range(value).is_some_and(|(from, to)| person.birth_range_match(from, to))
            }
            "death" => parse_year(value).is_some_and(|year| person.death_year_match(year)),
            "death_range" => {
                parse_range(value).is_some_and(|(from, to)| person.death_range_match(from, to))
            }
            "marriage" => match parse_year(value) {
                Some(year) => self.marriage_year_match(person.id(), year)?,
                None => false,
            },
            "marriage_range" => match parse_range(value) {
                Some((from, to)) => self.marriage_range_match(person.id(), from, to)?,
                None => false,
            },
            _ => true,
        };
        Ok(holds)
    }
}
