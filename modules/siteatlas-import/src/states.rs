use tracing::error;

use siteatlas_common::SiteAtlasError;

/// USPS two-letter codes and the full names they expand to: the fifty
/// states, the District of Columbia, and the inhabited territories.
const STATE_ABBREVIATIONS: [(&str, &str); 56] = [
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AS", "American Samoa"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("DC", "District of Columbia"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("GU", "Guam"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("MP", "Northern Mariana Islands"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("PR", "Puerto Rico"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("VI", "U.S. Virgin Islands"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

/// Normalize a state field into a full state name.
///
/// Two-character fields are treated as USPS codes and expanded,
/// case-insensitively; anything else is assumed to already be a full name
/// and passes through unchanged. An unknown code fails the run.
pub fn resolve_state(field: &str) -> Result<String, SiteAtlasError> {
    if field.chars().count() != 2 {
        return Ok(field.to_string());
    }

    let code = field.to_ascii_uppercase();
    match STATE_ABBREVIATIONS.iter().find(|(abbr, _)| *abbr == code) {
        Some((_, full)) => Ok((*full).to_string()),
        None => {
            error!(code = field, "State code not recognized");
            Err(SiteAtlasError::UnknownState(field.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_known_codes() {
        assert_eq!(resolve_state("CA").unwrap(), "California");
        assert_eq!(resolve_state("NY").unwrap(), "New York");
        assert_eq!(resolve_state("DC").unwrap(), "District of Columbia");
    }

    #[test]
    fn codes_are_case_insensitive() {
        assert_eq!(resolve_state("ca").unwrap(), "California");
        assert_eq!(resolve_state("Tx").unwrap(), "Texas");
    }

    #[test]
    fn passes_full_names_through() {
        assert_eq!(resolve_state("California").unwrap(), "California");
        assert_eq!(resolve_state("New Mexico").unwrap(), "New Mexico");
    }

    #[test]
    fn rejects_unknown_codes() {
        let err = resolve_state("ZZ").unwrap_err();
        assert!(matches!(err, SiteAtlasError::UnknownState(code) if code == "ZZ"));
    }

    #[test]
    fn covers_territories() {
        assert_eq!(resolve_state("PR").unwrap(), "Puerto Rico");
        assert_eq!(resolve_state("GU").unwrap(), "Guam");
    }
}
