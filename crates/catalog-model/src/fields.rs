//! Source column names and their short output keys.

/// Source columns read by the normalizer.
pub mod columns {
    pub const SERIAL_NO: &str = "serial_no";
    pub const COURSE_CODE: &str = "course_code";
    pub const COURSE_GROUP: &str = "course_group";
    pub const CHN_NAME: &str = "chn_name";
    pub const CREDIT: &str = "credit";
    pub const TIME_INF: &str = "time_inf";
}

/// Output keys, both projected and derived.
pub mod keys {
    pub const CHINESE_NAME: &str = "cn";
    pub const CREDIT: &str = "cr";
    pub const TIME_INFO: &str = "ti";

    /// Course name without the trailing `</br>` notes.
    pub const NAME: &str = "n";
    /// Credit programs, `/`-separated.
    pub const PROGRAMS: &str = "p";
    /// Schedule keys in order.
    pub const TIMES: &str = "tl";
    /// Distinct locations, `/`-separated.
    pub const LOCATIONS: &str = "lc";
    /// Expanded `{d,p,l}` slots.
    pub const SLOTS: &str = "tll";
    /// `"<key> <location>"` pairs, `/`-separated.
    pub const TIME_LOCATIONS: &str = "tls";
    /// Identifier carried by each record in list output.
    pub const ID: &str = "id";
}

/// Long source column name to short output key, in output order.
pub const FIELD_KEYS: &[(&str, &str)] = &[
    ("acadm_year", "y"),
    ("acadm_term", "t"),
    ("authorize_p", "a"),
    ("authorize_using", "au"),
    ("chn_name", "cn"),
    ("classes", "cl"),
    ("comment", "c"),
    ("counter", "co"),
    ("counter_exceptAuth", "ce"),
    ("course_code", "cc"),
    ("course_group", "cg"),
    ("course_kind", "ck"),
    ("credit", "cr"),
    ("dept_chiabbr", "d"),
    ("dept_code", "dc"),
    ("dept_group_name", "dgn"),
    ("eng_name", "en"),
    ("eng_teach", "et"),
    ("form_s", "fs"),
    ("intensive", "i"),
    ("limit", "l"),
    ("limit_count_h", "lh"),
    ("option_code", "oc"),
    ("restrict", "r"),
    ("gender_restrict", "rg"),
    ("rt", "rt"),
    ("serial_no", "s"),
    ("teacher", "te"),
    ("time_inf", "ti"),
    ("generalCore", "gc"),
];

/// Keys computed from other fields, in output order after [`FIELD_KEYS`].
pub const DERIVED_KEYS: &[&str] = &[
    keys::NAME,
    keys::PROGRAMS,
    keys::TIMES,
    keys::LOCATIONS,
    keys::SLOTS,
    keys::TIME_LOCATIONS,
];

pub fn short_key(column: &str) -> Option<&'static str> {
    FIELD_KEYS
        .iter()
        .find(|(source, _)| *source == column)
        .map(|(_, short)| *short)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn short_keys_are_unique() {
        let mut seen = HashSet::new();
        let shorts = FIELD_KEYS.iter().map(|(_, short)| *short);
        for short in shorts.chain(DERIVED_KEYS.iter().copied()) {
            assert!(seen.insert(short), "duplicate short key {short}");
        }
    }

    #[test]
    fn lookup_known_and_unknown() {
        assert_eq!(short_key("dept_group_name"), Some("dgn"));
        assert_eq!(short_key("time_inf"), Some("ti"));
        assert_eq!(short_key("course_avg"), None);
    }
}
