use std::collections::BTreeMap;

use serde::Serialize;

use crate::{LedgerError, Member, StorageError};

/// Member codes are the prefix followed by a running number.
pub const CODE_PREFIX: &str = "L";
/// Number of the first member code.
pub const CODE_BASE: u64 = 2025001;

/// All members of the library, keyed by member code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ledger {
    members: BTreeMap<String, Member>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from stored records. Records without
    /// a code take the code they are stored under.
    pub fn from_records(
        records: BTreeMap<String, Member>,
    ) -> Result<Self, StorageError> {
        let mut members = BTreeMap::new();
        for (key, mut member) in records {
            if member.code.is_empty() {
                member.code = key.clone();
            } else if member.code != key {
                return Err(StorageError::Inconsistent {
                    key,
                    code: member.code,
                });
            }
            members.insert(key, member);
        }
        Ok(Self { members })
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Code for the next registration. This is derived from the
    /// number of members, skipping codes that are already taken.
    pub fn next_code(&self) -> String {
        let mut number = CODE_BASE + self.members.len() as u64;
        loop {
            let code = format!("{}{}", CODE_PREFIX, number);
            if !self.members.contains_key(&code) {
                return code;
            }
            number += 1;
        }
    }

    /// Add a member under its code.
    pub fn insert(&mut self, member: Member) -> &Member {
        let code = member.code.clone();
        self.members.insert(code.clone(), member);
        &self.members[&code]
    }

    /// Find a member by code
    pub fn lookup(&self, code: &str) -> Result<&Member, LedgerError> {
        let code = code.trim();
        self.members
            .get(code)
            .ok_or_else(|| LedgerError::NotFound(code.to_string()))
    }

    pub fn lookup_mut(
        &mut self,
        code: &str,
    ) -> Result<&mut Member, LedgerError> {
        let code = code.trim();
        self.members
            .get_mut(code)
            .ok_or_else(|| LedgerError::NotFound(code.to_string()))
    }

    /// Members in code order
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }
}
