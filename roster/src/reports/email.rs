//! Email Report
//!
//! Swaps an entry into a register, then derives addresses for the entries
//! whose first name holds an `a` or `e`.

use tracing::debug;

use crate::error::RosterError;
use crate::name::Name;
use crate::register::Register;

/// Domain appended to every generated address
const EMAIL_DOMAIN: &str = "email.com";

/// Characters of the family name used in the local part
const EMAIL_FAMILY_PREFIX_LEN: usize = 3;

/// Entry removed before `new_entry` is added
const REPLACED_POSITION: usize = 1;

/// Remove the entry at position 1, add `new_entry` (subject to capacity),
/// then emit `"f.fam@email.com\n"` for each entry whose first name contains
/// a lowercase `a` or `e`.
///
/// The register stays mutated even if address building fails on a family
/// name shorter than three characters.
pub fn register_mutate_and_email_report(
    new_entry: Name,
    register: &mut Register,
) -> Result<String, RosterError> {
    register.remove_name(REPLACED_POSITION)?;
    register.add_name(new_entry);

    let mut report = String::new();
    let mut matched = 0usize;

    for name in register.iter() {
        let first = name.first_name();
        if !(first.contains('a') || first.contains('e')) {
            continue;
        }
        report.push_str(&email_address(name)?);
        report.push('\n');
        matched += 1;
    }

    debug!(entries = register.size_of_register(), matched, "email report built");
    Ok(report)
}

fn email_address(name: &Name) -> Result<String, RosterError> {
    let family = name.family_name();
    if family.chars().count() < EMAIL_FAMILY_PREFIX_LEN {
        return Err(RosterError::FamilyNameTooShort {
            family_name: family.to_string(),
            required: EMAIL_FAMILY_PREFIX_LEN,
        });
    }

    let prefix: String = family.chars().take(EMAIL_FAMILY_PREFIX_LEN).collect();
    let initial: String = name.first_name().to_lowercase().chars().take(1).collect();
    Ok(format!("{}.{}@{}", initial, prefix.to_lowercase(), EMAIL_DOMAIN))
}
