//! Collision-free output field naming.

use log::{debug, warn};

use crate::error::Result;

/// Returns `desired`, or `desired_N` for the first `N` in
/// `1..=max_attempts` whose name is free.
///
/// `exists` reports whether a field name is taken. When every suffix up to
/// `max_attempts` is taken the last candidate is returned anyway, so callers
/// must tolerate a collision at that extreme. No validation of length or
/// characters happens here.
///
/// # Errors
///
/// Propagates errors from `exists`.
pub fn unique_name<F>(desired: &str, max_attempts: u32, mut exists: F) -> Result<String>
where
    F: FnMut(&str) -> Result<bool>,
{
    let mut candidate = desired.to_string();
    let mut counter = 1;

    while counter <= max_attempts && exists(&candidate)? {
        debug!("{candidate} exists, creating new name with counter {counter}");
        candidate = format!("{desired}_{counter}");
        counter += 1;
    }

    if counter > max_attempts && exists(&candidate)? {
        warn!("Gave up after {max_attempts} attempts, '{candidate}' is still taken");
    }
    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn taken(names: impl IntoIterator<Item = String>) -> HashSet<String> {
        names.into_iter().collect()
    }

    fn series(desired: &str, last: u32) -> HashSet<String> {
        taken(std::iter::once(desired.to_string()).chain((1..=last).map(|n| format!("{desired}_{n}"))))
    }

    #[test]
    fn test_free_name_is_kept() {
        let fields = taken(["fid".to_string(), "CreatedDT".to_string()]);
        let name = unique_name("CreatedDT_str", 1000, |c| Ok(fields.contains(c))).unwrap();
        assert_eq!(name, "CreatedDT_str");
    }

    #[test]
    fn test_first_free_suffix_is_used() {
        let fields = series("label", 2);
        let name = unique_name("label", 1000, |c| Ok(fields.contains(c))).unwrap();
        assert_eq!(name, "label_3");
    }

    #[test]
    fn test_last_suffix_reached() {
        let fields = series("D", 999);
        let name = unique_name("D", 1000, |c| Ok(fields.contains(c))).unwrap();
        assert_eq!(name, "D_1000");
        assert!(!fields.contains(&name));
    }

    #[test]
    fn test_ceiling_returns_colliding_name() {
        let fields = series("D", 1000);
        let name = unique_name("D", 1000, |c| Ok(fields.contains(c))).unwrap();
        assert_eq!(name, "D_1000");
        assert!(fields.contains(&name));
    }

    #[test]
    fn test_zero_attempts_returns_desired() {
        let fields = series("D", 3);
        let name = unique_name("D", 0, |c| Ok(fields.contains(c))).unwrap();
        assert_eq!(name, "D");
    }

    #[test]
    fn test_lookup_errors_propagate() {
        let result = unique_name("D", 10, |_| {
            Err(crate::error::TimeStringError::Configuration {
                message: "locked".to_string(),
            })
        });
        assert!(result.is_err());
    }
}
