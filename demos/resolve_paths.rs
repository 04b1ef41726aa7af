use std::error::Error;

use langmap::bundled;

fn main() -> Result<(), Box<dyn Error>> {
    let langs = bundled();

    // ────────────────────────────────────────────────────────────────
    // Exact filenames win over extensions
    // ────────────────────────────────────────────────────────────────
    for path in ["Dockerfile", "CMakeLists.txt", "notes.txt", "repo/.gitignore"] {
        println!("{path:<28} {:?}", langs.get_language_by_file_name(path, None));
    }
    // → Dockerfile                   Some(["Dockerfile"])
    // → CMakeLists.txt               Some(["CMake"])
    // → notes.txt                    Some(["Text"])

    // ────────────────────────────────────────────────────────────────
    // Ambiguous extensions, optionally narrowed by category
    // ────────────────────────────────────────────────────────────────
    println!("{:?}", langs.get_language_by_file_name("src/lib.rs", None));
    // → Some(["RenderScript", "Rust", "XML"])
    println!(
        "{:?}",
        langs.get_language_by_file_name(r"C:\src\header.h", Some("programming"))
    );
    // → Some(["C", "C++", "Objective-C"])
    println!(
        "{:?}",
        langs.get_language_by_file_name("package.json", Some("programming"))
    );
    // → None

    // ────────────────────────────────────────────────────────────────
    // Name and category lookups
    // ────────────────────────────────────────────────────────────────
    if let Some(rust) = langs.get_language("RUST") {
        println!("{} is {} with {:?}", rust.name(), rust.category(), rust.extensions());
    }
    let prose: Vec<&str> = langs
        .get_languages_by_type("prose")
        .into_iter()
        .map(|l| l.name())
        .collect();
    println!("prose: {prose:?}");
    println!("aliens: {:?}", langs.get_languages_by_type("aliens"));
    // → aliens: []

    Ok(())
}
