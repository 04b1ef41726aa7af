mod prop_tests {
    use crate::{
        Category, IndexBuilder, LanguageDef, RawDataset, build_indices, bundled,
        lang::data::BUNDLED_LANGUAGES, language_key,
    };
    use proptest::prelude::*;

    fn any_bundled_index() -> impl Strategy<Value = usize> {
        0..BUNDLED_LANGUAGES.len()
    }

    /// A basename that hits the indices often: a registered filename, a
    /// stem plus a registered extension, or noise.
    fn basename_strategy() -> impl Strategy<Value = String> {
        let r = bundled();
        let files: Vec<String> = r.indices().filenames.iter().map(|(f, _)| f.to_owned()).collect();
        let exts: Vec<String> = r.indices().extensions.iter().map(|(e, _)| e.to_owned()).collect();
        prop_oneof![
            prop::sample::select(files),
            ("[a-z_]{1,8}", prop::sample::select(exts)).prop_map(|(stem, ext)| format!("{stem}{ext}")),
            "[A-Za-z0-9._-]{0,12}",
        ]
    }

    fn filter_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("programming".to_string()),
            Just("data".to_string()),
            Just("markup".to_string()),
            Just("prose".to_string()),
            "[a-z]{0,6}",
        ]
    }

    fn dataset_strategy() -> impl Strategy<Value = RawDataset> {
        let def = (
            prop::sample::select(vec!["programming", "data", "markup", "prose", "aliens"]),
            prop::collection::vec("\\.[a-z]{1,3}", 0..4),
            prop::collection::vec("[A-Za-z]{1,6}", 0..3),
            prop::option::of("[A-Z][a-z]{0,5}"),
        )
            .prop_map(|(category, exts, files, group)| {
                let mut def = LanguageDef::new(category).extensions(exts).filenames(files);
                def.group = group;
                def
            });
        prop::collection::vec(("[A-Za-z+#]{1,8}", def), 0..24)
            .prop_map(|entries| entries.into_iter().collect::<RawDataset>())
    }

    proptest! {
        #[test]
        fn name_lookup_ignores_case(i in any_bundled_index(), mask in any::<u64>()) {
            let name = BUNDLED_LANGUAGES[i].name;
            let mangled: String = name
                .chars()
                .enumerate()
                .map(|(n, c)| if (mask >> (n % 64)) & 1 == 1 { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
                .collect();
            let r = bundled();
            prop_assert_eq!(r.get_language(&mangled), r.get_language(name));
            prop_assert!(r.get_language(&mangled).is_some());
        }

        #[test]
        fn arbitrary_names_never_panic(s in ".{0,40}") {
            let r = bundled();
            if let Some(record) = r.get_language(&s) {
                prop_assert_eq!(language_key(&record.name), language_key(&s));
            }
        }

        #[test]
        fn filtered_is_subset_or_absent(base in basename_strategy(), filter in filter_strategy()) {
            let r = bundled();
            let all = r.get_language_by_file_name(&base, None);
            let some = r.get_language_by_file_name(&base, Some(&filter));
            match (all, some) {
                (_, None) => {}
                (None, Some(_)) => {
                    prop_assert!(false, "filter produced matches from nothing");
                }
                (Some(all), Some(filtered)) => {
                    prop_assert!(!filtered.is_empty());
                    // Subsequence: same relative order as the unfiltered result.
                    let mut it = all.iter();
                    for name in &filtered {
                        prop_assert!(it.any(|n| n == name));
                        prop_assert_eq!(r.get_language(name).unwrap().category.as_str(), filter.as_str());
                    }
                }
            }
        }

        #[test]
        fn result_is_never_empty(path in ".{0,40}") {
            if let Some(names) = bundled().get_language_by_file_name(&path, None) {
                prop_assert!(!names.is_empty());
            }
        }

        #[test]
        fn directories_do_not_change_the_answer(
            base in basename_strategy(),
            dirs in prop::collection::vec(("[A-Za-z0-9 ._-]{1,8}", prop::bool::ANY), 0..5),
            drive in prop::bool::ANY,
        ) {
            let mut path = if drive { r"C:\".to_string() } else { String::new() };
            for (dir, backslash) in &dirs {
                path.push_str(dir);
                path.push(if *backslash { '\\' } else { '/' });
            }
            path.push_str(&base);
            let r = bundled();
            prop_assert_eq!(
                r.get_language_by_file_name(&path, None),
                r.get_language_by_file_name(&base, None)
            );
        }

        #[test]
        fn rebuild_is_deterministic(ds in dataset_strategy()) {
            prop_assert_eq!(build_indices(&ds), build_indices(&ds));
        }

        #[test]
        fn every_reverse_key_resolves(ds in dataset_strategy()) {
            let idx = build_indices(&ds);
            for (_, keys) in idx.extensions.iter().chain(idx.filenames.iter()) {
                for key in keys {
                    prop_assert!(idx.languages.contains_key(key));
                }
            }
        }

        #[test]
        fn category_index_keeps_source_order(ds in dataset_strategy()) {
            let idx = build_indices(&ds);
            for category in Category::ALL {
                let expected: Vec<&str> = ds
                    .iter()
                    .filter(|(_, def)| def.category == category)
                    .map(|(name, _)| name)
                    .collect();
                let listed: Vec<&str> = idx.categories.names(&category).iter().map(String::as_str).collect();
                prop_assert_eq!(listed, expected);
            }
        }

        #[test]
        fn colliding_keys_last_write_wins(
            name in "[a-z]{1,6}",
            first in prop::sample::select(vec!["programming", "data"]),
            second in prop::sample::select(vec!["markup", "prose"]),
        ) {
            let upper = name.to_uppercase();
            let ds = RawDataset::new()
                .with(name.as_str(), LanguageDef::new(first).extensions([".one"]))
                .with(upper.as_str(), LanguageDef::new(second).extensions([".two"]));
            let mut builder = IndexBuilder::new();
            builder.extend(&ds);
            let (idx, report) = builder.finish().unwrap();

            prop_assert_eq!(idx.languages.len(), 1);
            let record = idx.languages.get(&name).unwrap();
            prop_assert_eq!(&record.name, &upper);
            prop_assert_eq!(record.category.as_str(), second);
            let two = [".two".to_string()];
            prop_assert_eq!(record.extensions.as_slice(), two.as_slice());
            prop_assert_eq!(report.key_collisions.len(), 1);
            // The replaced record's extension still points at the shared key.
            let shared = [name.clone()];
            prop_assert_eq!(idx.extensions.get(".one").unwrap(), shared.as_slice());
        }
    }
}
