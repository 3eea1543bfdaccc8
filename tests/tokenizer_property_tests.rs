use deskentry::line::{Line, tokenize};
use deskentry::locale::match_level;
use deskentry::DesktopEntry;
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9-]{0,15}").expect("valid key regex")
}

fn value_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 _%/\\.,!\\?-]{0,30}").expect("valid value regex")
}

fn locale_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{2}(_[A-Z]{2})?(\\.[A-Za-z0-9-]{1,8})?(@[a-z]{1,8})?")
        .expect("valid locale regex")
}

proptest! {
    #[test]
    fn tokenize_never_panics(line in "\\PC{0,64}") {
        let _ = tokenize(&line);
    }

    #[test]
    fn tokenized_entry_slices_come_from_the_line(
        key in key_strategy(),
        value in value_strategy(),
    ) {
        let line = format!("{key}={value}");
        match tokenize(&line) {
            Line::Entry { key: k, locale, value: v } => {
                prop_assert_eq!(k, key.as_str());
                prop_assert_eq!(locale, None);
                prop_assert_eq!(v, value.trim());
            }
            other => prop_assert!(false, "expected entry, got {:?}", other),
        }
    }

    #[test]
    fn localized_entry_round_trips_through_the_parser(
        key in key_strategy(),
        tag in locale_strategy(),
        value in "[A-Za-z][A-Za-z0-9 ]{0,20}",
    ) {
        let text = format!("{key}=base\n{key}[{tag}]={value}\n");
        let mut entry = DesktopEntry::new("prop.desktop", [key.as_str()]);
        let matched = entry.parse_str(&text, Some(&tag));

        prop_assert!(matched);
        // The qualifier equals the current locale, so it is an exact match.
        prop_assert_eq!(entry.get_string(&key, true), Some(value.trim()));
        prop_assert_eq!(entry.get_string(&key, false), Some("base"));
    }

    #[test]
    fn match_level_is_bounded(current in locale_strategy(), candidate in locale_strategy()) {
        prop_assert!(match_level(&current, &candidate) <= 4);
    }

    #[test]
    fn match_level_exact_is_maximal(current in locale_strategy()) {
        prop_assert_eq!(match_level(&current, &current), 4);
    }

    #[test]
    fn parse_str_never_panics(text in "\\PC{0,256}", keys in prop::collection::vec(key_strategy(), 0..4)) {
        let mut entry = DesktopEntry::new("prop.desktop", keys);
        let _ = entry.parse_str(&text, Some("en_US.UTF-8"));
    }
}
