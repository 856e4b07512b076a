//! Family graph resolution
//!
//! The tree only nests lines. Relationships form a second graph on top of it:
//! individuals point at families through FAMS/FAMC, families point back at
//! individuals through HUSB/WIFE/CHIL. These links come from untrusted text and
//! may form cycles, so every traversal keeps a visited set keyed by handle.

use crate::gedcom::ast::{ElementId, Gedcom, GedcomError, RecordKind};
use crate::gedcom::query::dates::{derive_year, year_in_range};
use crate::gedcom::query::events::EventData;
use crate::gedcom::query::{AncestorType, FamilyType, MembersType, ParentType};
use crate::gedcom::tags;
use std::collections::HashSet;

/// Pedigree value of a birth family link
const PEDIGREE_BIRTH: &str = "birth";
/// `_FREL`/`_MREL` value of a biological parent
const RELATION_NATURAL: &str = "Natural";

impl Gedcom {
    /// Resolve a pointer-valued link to a record of `expected` kind
    ///
    /// `Ok(None)` for pointers without a record. A record of another kind is
    /// a [`GedcomError::Resolution`].
    pub fn resolve_link(
        &self,
        pointer: &str,
        expected: RecordKind,
    ) -> Result<Option<ElementId>, GedcomError> {
        let pointer = pointer.trim();
        let Some(target) = self.find(pointer) else {
            return Ok(None);
        };
        let found = self.element(target).kind();
        if found != expected {
            return Err(GedcomError::Resolution {
                pointer: pointer.to_string(),
                expected: expected.name(),
                found: found.name(),
            });
        }
        Ok(Some(target))
    }

    /// Families the individual belongs to, in declaration order
    pub fn get_families(
        &self,
        individual: ElementId,
        family_type: FamilyType,
    ) -> Result<Vec<ElementId>, GedcomError> {
        self.expect_kind(individual, RecordKind::Individual)?;

        let mut families = Vec::new();
        for link in self.substantive_children(individual) {
            let link = self.element(link);
            let wanted = match family_type {
                FamilyType::Spouse => link.tag() == tags::FAMS,
                FamilyType::Child => link.tag() == tags::FAMC,
                FamilyType::All => link.tag() == tags::FAMS || link.tag() == tags::FAMC,
            };
            if !wanted {
                continue;
            }
            if let Some(family) = self.resolve_link(link.value(), RecordKind::Family)? {
                families.push(family);
            }
        }
        Ok(families)
    }

    /// Members of a family, in declaration order
    pub fn get_family_members(
        &self,
        family: ElementId,
        members_type: MembersType,
    ) -> Result<Vec<ElementId>, GedcomError> {
        self.expect_kind(family, RecordKind::Family)?;

        let mut members = Vec::new();
        for link in self.substantive_children(family) {
            let link = self.element(link);
            let tag = link.tag();
            let wanted = match members_type {
                MembersType::All => tag == tags::HUSB || tag == tags::WIFE || tag == tags::CHIL,
                MembersType::Parents => tag == tags::HUSB || tag == tags::WIFE,
                MembersType::Husband => tag == tags::HUSB,
                MembersType::Wife => tag == tags::WIFE,
                MembersType::Children => tag == tags::CHIL,
            };
            if !wanted {
                continue;
            }
            if let Some(member) = self.resolve_link(link.value(), RecordKind::Individual)? {
                members.push(member);
            }
        }
        Ok(members)
    }

    /// Parents from every FAMC family: father (HUSB) before mother (WIFE)
    ///
    /// With [`ParentType::Natural`], a family linked with a PEDI other than
    /// `birth` is skipped, and a parent whose `_FREL`/`_MREL` on the child's
    /// CHIL entry is not `Natural` is left out.
    pub fn get_parents(
        &self,
        individual: ElementId,
        parent_type: ParentType,
    ) -> Result<Vec<ElementId>, GedcomError> {
        self.expect_kind(individual, RecordKind::Individual)?;
        let natural_only = parent_type == ParentType::Natural;
        let pointer = self.element(individual).pointer();

        let mut parents = Vec::new();
        for link in self.children_with_tag(individual, tags::FAMC) {
            let Some(family) = self.resolve_link(self.element(link).value(), RecordKind::Family)?
            else {
                continue;
            };

            if natural_only {
                if let Some(pedigree) = self.child_value(link, tags::PEDI) {
                    if !pedigree.trim().eq_ignore_ascii_case(PEDIGREE_BIRTH) {
                        continue;
                    }
                }
            }

            let child_entry = self
                .children_with_tag(family, tags::CHIL)
                .find(|entry| !pointer.is_empty() && self.element(*entry).value().trim() == pointer);

            for (role, relation) in [
                (tags::HUSB, tags::FATHER_RELATION),
                (tags::WIFE, tags::MOTHER_RELATION),
            ] {
                if natural_only {
                    let adopted = child_entry
                        .and_then(|entry| self.child_value(entry, relation))
                        .is_some_and(|value| !value.trim().eq_ignore_ascii_case(RELATION_NATURAL));
                    if adopted {
                        continue;
                    }
                }
                for parent_link in self.children_with_tag(family, role) {
                    let value = self.element(parent_link).value();
                    if let Some(parent) = self.resolve_link(value, RecordKind::Individual)? {
                        if !parents.contains(&parent) {
                            parents.push(parent);
                        }
                    }
                }
            }
        }
        Ok(parents)
    }

    /// Every ancestor reachable through [`Gedcom::get_parents`]
    ///
    /// Parents come before their own ancestors. The result has no duplicates,
    /// never contains `individual` itself and is finite even for cyclic links.
    pub fn get_ancestors(
        &self,
        individual: ElementId,
        ancestor_type: AncestorType,
    ) -> Result<Vec<ElementId>, GedcomError> {
        self.expect_kind(individual, RecordKind::Individual)?;
        let mut visited = HashSet::from([individual]);
        let mut ancestors = Vec::new();
        let mut pending = vec![individual];

        while let Some(current) = pending.pop() {
            let fresh: Vec<ElementId> = self
                .get_parents(current, ancestor_type)?
                .into_iter()
                .filter(|parent| visited.insert(*parent))
                .collect();
            ancestors.extend(&fresh);
            // first parent's line is walked first
            pending.extend(fresh.into_iter().rev());
        }
        Ok(ancestors)
    }

    /// Depth-first path from `descendant` up to `ancestor`
    ///
    /// Parents are tried father first, in FAMC declaration order. The path
    /// starts at `descendant` and ends at `ancestor`; `None` when no path
    /// exists. Records are matched by handle or by equal non-empty pointer.
    pub fn find_path_to_ancestor(
        &self,
        descendant: ElementId,
        ancestor: ElementId,
        ancestor_type: AncestorType,
    ) -> Result<Option<Vec<ElementId>>, GedcomError> {
        self.expect_kind(descendant, RecordKind::Individual)?;
        self.expect_kind(ancestor, RecordKind::Individual)?;

        let mut path = vec![descendant];
        if self.same_record(descendant, ancestor) {
            return Ok(Some(path));
        }
        let mut visited = HashSet::from([descendant]);
        // one frame per path entry: its parents and the next one to try
        let mut frames = vec![(self.get_parents(descendant, ancestor_type)?, 0usize)];

        while let Some((parents, next)) = frames.last_mut() {
            let Some(&parent) = parents.get(*next) else {
                frames.pop();
                path.pop();
                continue;
            };
            *next += 1;

            if !visited.insert(parent) {
                continue;
            }
            path.push(parent);
            if self.same_record(parent, ancestor) {
                return Ok(Some(path));
            }
            frames.push((self.get_parents(parent, ancestor_type)?, 0));
        }
        Ok(None)
    }

    fn same_record(&self, a: ElementId, b: ElementId) -> bool {
        if a == b {
            return true;
        }
        let pointer = self.element(a).pointer();
        !pointer.is_empty() && pointer == self.element(b).pointer()
    }

    /// One record per MARR line of every FAMS family
    pub fn get_marriages(&self, individual: ElementId) -> Result<Vec<EventData>, GedcomError> {
        let mut marriages = Vec::new();
        for family in self.get_families(individual, FamilyType::Spouse)? {
            for marriage in self.children_with_tag(family, tags::MARR) {
                marriages.push(EventData::of(self, marriage));
            }
        }
        Ok(marriages)
    }

    /// Years of the individual's marriages that carry a derivable year
    pub fn get_marriage_years(&self, individual: ElementId) -> Result<Vec<i32>, GedcomError> {
        Ok(self
            .get_marriages(individual)?
            .iter()
            .filter_map(|marriage| marriage.date.as_deref().and_then(derive_year))
            .collect())
    }

    pub fn marriage_year_match(&self, individual: ElementId, year: i32) -> Result<bool, GedcomError> {
        Ok(self.get_marriage_years(individual)?.contains(&year))
    }

    /// True if any marriage year lies in `from..=to` (`to == -1` is open-ended)
    pub fn marriage_range_match(
        &self,
        individual: ElementId,
        from: i32,
        to: i32,
    ) -> Result<bool, GedcomError> {
        Ok(self
            .get_marriage_years(individual)?
            .into_iter()
            .any(|year| year_in_range(Some(year), from, to)))
    }
}
