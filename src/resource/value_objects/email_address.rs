//! Syntactic email address validation.
//!
//! The check is syntactic only: a dot-atom local part, an `@`, and a domain of
//! at least two labels ending in an alphabetic top-level label. No DNS lookups.

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_LENGTH: usize = 64;
const MAX_LABEL_LENGTH: usize = 63;

/// Characters allowed in the local part besides ASCII alphanumerics.
const LOCAL_SPECIALS: &str = "!#$%&'*+/=?^_`{|}~-";

/// Check whether a string is a syntactically valid email address.
///
/// ```rust
/// use buddy_api::resource::value_objects::is_valid_email;
///
/// assert!(is_valid_email("skatar@skatarnir.is"));
/// assert!(!is_valid_email("skatar@localhost"));
/// assert!(!is_valid_email("not an email"));
/// ```
pub fn is_valid_email(value: &str) -> bool {
    if value.len() > MAX_EMAIL_LENGTH {
        return false;
    }

    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };

    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    !local.is_empty()
        && local.len() <= MAX_LOCAL_LENGTH
        && local.split('.').all(|atom| {
            !atom.is_empty()
                && atom
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || LOCAL_SPECIALS.contains(c))
        })
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LENGTH
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    let tld_ok = labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));

    labels_ok && tld_ok
}
