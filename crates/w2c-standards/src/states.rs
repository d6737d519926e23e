//! Appendix H state codes.
//!
//! The RCS record carries the state as a two-digit SSA numeric code rather
//! than the postal abbreviation. The table is closed: the 50 states, DC,
//! and the five territories SSA lists. Anything else (including foreign
//! addresses) has no code and renders as spaces downstream.

/// Translate a two-letter postal abbreviation to the SSA numeric state
/// code. Case-insensitive; surrounding whitespace is ignored.
pub fn postal_to_ssa_code(abbrev: &str) -> Option<&'static str> {
    let code = match abbrev.trim().to_uppercase().as_str() {
        "AL" => "01",
        "AK" => "02",
        "AZ" => "03",
        "AR" => "04",
        "CA" => "05",
        "CO" => "06",
        "CT" => "07",
        "DE" => "08",
        "FL" => "09",
        "GA" => "10",
        "HI" => "11",
        "ID" => "12",
        "IL" => "13",
        "IN" => "14",
        "IA" => "15",
        "KS" => "16",
        "KY" => "17",
        "LA" => "18",
        "ME" => "19",
        "MD" => "20",
        "MA" => "21",
        "MI" => "22",
        "MN" => "23",
        "MS" => "24",
        "MO" => "25",
        "MT" => "26",
        "NE" => "27",
        "NV" => "28",
        "NH" => "29",
        "NJ" => "30",
        "NM" => "31",
        "NY" => "32",
        "NC" => "33",
        "ND" => "34",
        "OH" => "35",
        "OK" => "36",
        "OR" => "37",
        "PA" => "38",
        "RI" => "39",
        "SC" => "40",
        "SD" => "41",
        "TN" => "42",
        "TX" => "43",
        "UT" => "44",
        "VT" => "45",
        "VA" => "46",
        "WA" => "47",
        "WV" => "48",
        "WI" => "49",
        "WY" => "50",
        "DC" => "51",
        "AS" => "60",
        "GU" => "66",
        "MP" => "69",
        "PR" => "72",
        "VI" => "78",
        _ => return None,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_states() {
        assert_eq!(postal_to_ssa_code("IL"), Some("13"));
        assert_eq!(postal_to_ssa_code("ca"), Some("05"));
        assert_eq!(postal_to_ssa_code(" ny "), Some("32"));
        assert_eq!(postal_to_ssa_code("PR"), Some("72"));
    }

    #[test]
    fn test_unknown_states() {
        assert_eq!(postal_to_ssa_code("ZZ"), None);
        assert_eq!(postal_to_ssa_code(""), None);
        assert_eq!(postal_to_ssa_code("ON"), None); // no foreign provinces
    }
}
