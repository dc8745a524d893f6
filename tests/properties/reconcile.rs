//! Property tests for config reconciliation.

use std::collections::BTreeMap;

use proptest::prelude::*;

use mypy_missing_imports::reconcile::reconcile;
use mypy_missing_imports::{derive_sections, ConfigDocument, IniDocument, TomlDocument};

type Layout = BTreeMap<String, BTreeMap<String, String>>;

fn unmanaged_layout() -> impl Strategy<Value = Layout> {
    let key = proptest::string::string_regex("[a-z][a-z_]{0,8}").unwrap();
    let value = proptest::string::string_regex("[A-Za-z0-9._/]{1,12}").unwrap();
    let section = proptest::string::string_regex("[a-z][a-z0-9_]{0,10}").unwrap();
    proptest::collection::btree_map(
        section,
        proptest::collection::btree_map(key, value, 1..4),
        0..5,
    )
}

fn modules() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        proptest::string::string_regex("[a-z][a-z0-9_]{0,6}(\\.[a-z][a-z0-9_]{0,6})?").unwrap(),
        0..8,
    )
}

/// A section as someone might write it by hand: comments above the header,
/// a note after it, and values that span lines with blank gaps.
#[derive(Debug, Clone)]
struct HandSection {
    comments: Vec<String>,
    note: Option<String>,
    /// key -> (value lines, blank line before each continuation)
    settings: BTreeMap<String, (Vec<String>, bool)>,
    blank_after: bool,
}

fn hand_edited() -> impl Strategy<Value = BTreeMap<String, HandSection>> {
    let comment = proptest::string::string_regex("[#;] [a-z]{1,8}( [a-z]{1,8})?").unwrap();
    let note = proptest::string::string_regex("[#;] [a-z]{1,8}").unwrap();
    let line = proptest::string::string_regex("[A-Za-z0-9._/,]{1,12}").unwrap();
    let key = proptest::string::string_regex("[a-z][a-z_]{0,8}").unwrap();
    let name = proptest::string::string_regex("[a-z][a-z0-9_]{0,10}").unwrap();

    let value = (proptest::collection::vec(line, 1..4), any::<bool>());
    let section = (
        proptest::collection::vec(comment, 0..3),
        proptest::option::of(note),
        proptest::collection::btree_map(key, value, 1..4),
        any::<bool>(),
    )
        .prop_map(|(comments, note, settings, blank_after)| HandSection {
            comments,
            note,
            settings,
            blank_after,
        });
    proptest::collection::btree_map(name, section, 1..5)
}

fn write_hand_edited(sections: &BTreeMap<String, HandSection>) -> String {
    let mut text = String::new();
    for (name, section) in sections {
        for comment in &section.comments {
            text.push_str(&format!("{comment}\n"));
        }
        match &section.note {
            Some(note) => text.push_str(&format!("[{name}] {note}\n")),
            None => text.push_str(&format!("[{name}]\n")),
        }
        for (key, (lines, gaps)) in &section.settings {
            text.push_str(&format!("{key} = {}\n", lines[0]));
            for line in &lines[1..] {
                if *gaps {
                    text.push('\n');
                }
                text.push_str(&format!("    {line}\n"));
            }
        }
        if section.blank_after {
            text.push('\n');
        }
    }
    text
}

fn expected_value(lines: &[String], gaps: bool) -> String {
    lines.join(if gaps { "\n\n" } else { "\n" })
}

fn build(doc: &mut dyn ConfigDocument, layout: &Layout) {
    for (section, settings) in layout {
        let pairs: Vec<(&str, &str)> = settings
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        doc.add_to_section(section, &pairs).unwrap();
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a document with only unmanaged sections survives an empty target.
    #[test]
    fn property_ini_unmanaged_round_trip(layout in unmanaged_layout()) {
        let mut doc = IniDocument::new();
        build(&mut doc, &layout);
        let original = doc.render();

        let mut reloaded = IniDocument::parse(&original).unwrap();
        let out = reconcile(&mut reloaded, &Vec::<String>::new()).unwrap();

        prop_assert_eq!(out, original);
    }

    /// PROPERTY: reconcile, reload, reconcile again yields identical ini text.
    #[test]
    fn property_ini_reconcile_idempotent(layout in unmanaged_layout(), mods in modules()) {
        let targets = derive_sections(&mods);

        let mut doc = IniDocument::new();
        build(&mut doc, &layout);
        let first = reconcile(&mut doc, &targets).unwrap();

        let mut reloaded = IniDocument::parse(&first).unwrap();
        let second = reconcile(&mut reloaded, &targets).unwrap();

        prop_assert_eq!(second, first);
    }

    /// PROPERTY: the toml dialect is idempotent too.
    #[test]
    fn property_toml_reconcile_idempotent(layout in unmanaged_layout(), mods in modules()) {
        let targets = derive_sections(&mods);

        let mut doc = TomlDocument::new();
        build(&mut doc, &layout);
        let first = reconcile(&mut doc, &targets).unwrap();

        let mut reloaded = TomlDocument::parse(&first).unwrap();
        let second = reconcile(&mut reloaded, &targets).unwrap();

        prop_assert_eq!(second, first);
    }

    /// PROPERTY: every target ends up as a section and nothing managed is left over.
    #[test]
    fn property_ini_sections_match_targets(layout in unmanaged_layout(), mods in modules()) {
        let targets = derive_sections(&mods);

        let mut doc = IniDocument::new();
        build(&mut doc, &layout);
        doc.add_to_section("mypy-stale.*", &[("ignore_missing_imports", "true")]).unwrap();
        reconcile(&mut doc, &targets).unwrap();

        let managed: Vec<String> = doc
            .sections()
            .into_iter()
            .filter(|s| s.starts_with("mypy-"))
            .collect();
        let mut expected = targets.clone();
        expected.sort();
        let mut actual = managed;
        actual.sort();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: hand-written ini text keeps its values and re-renders stably.
    #[test]
    fn property_ini_hand_edited_text_round_trip(sections in hand_edited()) {
        let text = write_hand_edited(&sections);
        let doc = IniDocument::parse(&text).unwrap();

        for (name, section) in &sections {
            for (key, (lines, gaps)) in &section.settings {
                let expected = expected_value(lines, *gaps);
                prop_assert_eq!(doc.get(name, key), Some(Some(expected.as_str())));
            }
        }

        let rendered = doc.render();
        let reparsed = IniDocument::parse(&rendered).unwrap();
        prop_assert_eq!(&reparsed, &doc);
        prop_assert_eq!(reparsed.render(), rendered);
    }

    /// PROPERTY: hand-written unmanaged text is untouched by an empty target.
    #[test]
    fn property_ini_hand_edited_unmanaged_survives(sections in hand_edited()) {
        let text = write_hand_edited(&sections);
        let expected = IniDocument::parse(&text).unwrap().render();

        let mut doc = IniDocument::parse(&text).unwrap();
        let out = reconcile(&mut doc, &Vec::<String>::new()).unwrap();

        prop_assert_eq!(out, expected);
    }

    /// PROPERTY: a stale section goes away even with a comment right under it.
    #[test]
    fn property_ini_stale_section_before_commented_header(sections in hand_edited()) {
        let mut text = write_hand_edited(&sections);
        text.push_str("[mypy-stale.*]\nignore_missing_imports = true\n");
        text.push_str("# tail notes\n[tail-section]\nkeep = 1\n");

        let mut doc = IniDocument::parse(&text).unwrap();
        let out = reconcile(&mut doc, &Vec::<String>::new()).unwrap();

        prop_assert!(!doc.sections().contains(&"mypy-stale.*".to_string()));
        prop_assert!(out.ends_with("# tail notes\n[tail-section]\nkeep = 1\n\n"));
    }
}
