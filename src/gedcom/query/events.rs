//! Event sub-records and individual attributes
//!
//! Events are read from the substantive children of an INDI record. Every
//! occurrence of an event tag contributes: DATE and PLAC keep the last value
//! declared, SOUR values accumulate in declaration order.

use crate::gedcom::ast::{ElementId, Gedcom, Individual};
use crate::gedcom::query::dates::{derive_year, year_in_range};
use crate::gedcom::tags;
use serde::Serialize;

/// Date, place and sources of one event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventData {
    pub date: Option<String>,
    pub place: Option<String>,
    pub sources: Vec<String>,
}

impl EventData {
    /// The year of the event's date, if one can be derived
    pub fn year(&self) -> Option<i32> {
        self.date.as_deref().and_then(derive_year)
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.place.is_none() && self.sources.is_empty()
    }

    /// Fold the DATE, PLAC and SOUR children of `event` into this record
    pub(crate) fn absorb(&mut self, doc: &Gedcom, event: ElementId) {
        for detail in doc.substantive_children(event) {
            let detail = doc.element(detail);
            match detail.tag() {
                tags::DATE => self.date = Some(detail.value().to_string()),
                tags::PLAC => self.place = Some(detail.value().to_string()),
                tags::SOUR => self.sources.push(detail.value().to_string()),
                _ => {}
            }
        }
    }

    pub(crate) fn of(doc: &Gedcom, event: ElementId) -> Self {
        let mut data = EventData::default();
        data.absorb(doc, event);
        data
    }
}

impl<'a> Individual<'a> {
    fn merged_event(&self, tag: &str) -> EventData {
        let doc = self.document();
        let mut data = EventData::default();
        for event in doc.children_with_tag(self.id(), tag) {
            data.absorb(doc, event);
        }
        data
    }

    pub fn get_birth_data(&self) -> EventData {
        self.merged_event(tags::BIRT)
    }

    pub fn get_death_data(&self) -> EventData {
        self.merged_event(tags::DEAT)
    }

    pub fn get_burial_data(&self) -> EventData {
        self.merged_event(tags::BURI)
    }

    /// One record per CENS line, in declaration order
    pub fn get_census_data(&self) -> Vec<EventData> {
        let doc = self.document();
        doc.children_with_tag(self.id(), tags::CENS)
            .map(|census| EventData::of(doc, census))
            .collect()
    }

    pub fn birth_year(&self) -> Option<i32> {
        self.get_birth_data().year()
    }

    pub fn death_year(&self) -> Option<i32> {
        self.get_death_data().year()
    }

    pub fn birth_year_match(&self, year: i32) -> bool {
        self.birth_year() == Some(year)
    }

    pub fn birth_range_match(&self, from: i32, to: i32) -> bool {
        year_in_range(self.birth_year(), from, to)
    }

    pub fn death_year_match(&self, year: i32) -> bool {
        self.death_year() == Some(year)
    }

    pub fn death_range_match(&self, from: i32, to: i32) -> bool {
        year_in_range(self.death_year(), from, to)
    }

    /// `(given, surname)` from the first usable NAME
    ///
    /// A NAME value like `John /Doe/` is split on the slashes. A NAME without
    /// a value is read from its GIVN and SURN children.
    pub fn name(&self) -> (String, String) {
        let doc = self.document();
        let mut given = String::new();
        let mut surname = String::new();

        for name in doc.children_with_tag(self.id(), tags::NAME) {
            let value = doc.element(name).value();
            if !value.trim().is_empty() {
                let mut parts = value.split('/');
                let first = parts.next().unwrap_or_default().trim();
                let last = parts.next().unwrap_or_default().trim();
                return (first.to_string(), last.to_string());
            }

            let givn = doc.child_value(name, tags::GIVN);
            let surn = doc.child_value(name, tags::SURN);
            if let Some(givn) = givn {
                given = givn.to_string();
            }
            if let Some(surn) = surn {
                surname = surn.to_string();
            }
            if givn.is_some() && surn.is_some() {
                break;
            }
        }

        (given, surname)
    }

    /// Case-insensitive substring match against the surname
    pub fn surname_match(&self, text: &str) -> bool {
        contains_ignore_case(&self.name().1, text)
    }

    /// Case-insensitive substring match against the given names
    pub fn given_name_match(&self, text: &str) -> bool {
        contains_ignore_case(&self.name().0, text)
    }

    /// The SEX value, e.g. `M`, `F` or `U`
    pub fn gender(&self) -> Option<&'a str> {
        self.child_value(tags::SEX)
    }

    pub fn is_private(&self) -> bool {
        let doc = self.document();
        doc.children_with_tag(self.id(), tags::PRIV)
            .any(|private| doc.element(private).value() == "Y")
    }

    pub fn is_deceased(&self) -> bool {
        self.document()
            .children_with_tag(self.id(), tags::DEAT)
            .next()
            .is_some()
    }

    /// True when the individual is linked as a child of any family
    pub fn is_child(&self) -> bool {
        self.document()
            .children_with_tag(self.id(), tags::FAMC)
            .next()
            .is_some()
    }

    /// The last OCCU value
    pub fn occupation(&self) -> Option<&'a str> {
        let doc = self.document();
        doc.children_with_tag(self.id(), tags::OCCU)
            .last()
            .map(|occupation| doc.element(occupation).value())
    }

    /// DATE of the last CHAN record
    pub fn last_change_date(&self) -> Option<&'a str> {
        let doc = self.document();
        doc.children_with_tag(self.id(), tags::CHAN)
            .filter_map(|change| doc.child_value(change, tags::DATE))
            .last()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
