use crate::domain::{CanonicalPhone, CodeEntry, MatchResult};
use crate::error::CoreError;

/// Digits of an OKVED code with separators removed, e.g. `62.01` -> `6201`.
pub fn code_digits(code: &str) -> String {
    code.chars().filter(char::is_ascii_digit).collect()
}

/// Picks the code whose digits form the longest suffix of the phone number.
///
/// Candidates are tried longest code first; among equally long matches the
/// one discovered first in `codes` wins. When nothing matches, the entry is
/// chosen by the subscriber number modulo `codes.len()` and reported with a
/// match length of zero.
pub fn match_phone(phone: &CanonicalPhone, codes: &[CodeEntry]) -> Result<MatchResult, CoreError> {
    if codes.is_empty() {
        return Err(CoreError::EmptyCodeList);
    }

    let phone_digits = phone.digits();
    let mut by_length: Vec<&CodeEntry> = codes.iter().collect();
    by_length.sort_by(|a, b| b.code.len().cmp(&a.code.len()));

    let mut best: Option<(&CodeEntry, usize)> = None;
    for entry in by_length {
        let digits = code_digits(&entry.code);
        if digits.is_empty() || !phone_digits.ends_with(&digits) {
            continue;
        }
        let length = digits.len();
        if best.map_or(true, |(_, best_length)| length > best_length) {
            best = Some((entry, length));
        }
    }

    Ok(match best {
        Some((entry, match_length)) => MatchResult {
            entry: entry.clone(),
            match_length,
        },
        None => fallback(phone, codes),
    })
}

fn fallback(phone: &CanonicalPhone, codes: &[CodeEntry]) -> MatchResult {
    let selected = match phone.subscriber_digits().parse::<u64>() {
        Ok(value) if !codes.is_empty() => {
            let index = (value % codes.len() as u64) as usize;
            codes.get(index)
        }
        _ => codes.first(),
    };

    MatchResult {
        entry: selected.cloned().unwrap_or_else(CodeEntry::placeholder),
        match_length: 0,
    }
}
