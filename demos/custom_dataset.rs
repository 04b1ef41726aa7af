use std::error::Error;

use langmap::{BuildOptions, CollisionPolicy, RawDataset, Resolver, build_with_options};

const DATASET: &str = r#"{
    "Spline": {"type": "programming", "extensions": [".spl", ".sp"], "filenames": ["Splinefile"]},
    "SplineDoc": {"type": "prose", "extensions": [".sp"], "group": "Spline"},
    "SPLINE": {"type": "data", "extensions": [".spd"]}
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    let dataset = RawDataset::from_json_str(DATASET)?;

    // Default policy keeps the later of two names sharing a key, and says so.
    let (indices, report) = build_with_options(&dataset, BuildOptions::default())?;
    for c in &report.key_collisions {
        println!("key `{}`: `{}` replaced by `{}`", c.key, c.replaced, c.kept);
    }

    let langs = Resolver::new(indices);
    println!("{:?}", langs.get_language_by_file_name("a/b.sp", None));
    // → Some(["SPLINE", "SplineDoc"])
    println!("{:?}", langs.get_group("splinedoc").map(|l| l.name()));

    // Strict builds refuse the same dataset.
    let strict = BuildOptions {
        collision_policy: CollisionPolicy::Reject,
    };
    if let Err(e) = build_with_options(&dataset, strict) {
        println!("strict build failed: {e}");
    }

    Ok(())
}
