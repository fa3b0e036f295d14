use std::path::Path;

use associations::Association;

/// Builds a new file association seeded from a user-selected file.
///
/// The rule is named `"<Capitalized stem> <UPPERCASE extension>"` and its
/// pattern is the base name verbatim, so the rule matches exactly the kind
/// of file it was seeded from. Priority and colors stay at their defaults;
/// the user refines the rule in the settings UI afterwards.
///
/// # Examples
///
/// ```
/// use resolver::seed_association;
///
/// let rule = seed_association("build.gradle");
/// assert_eq!(rule.name(), "Build GRADLE");
/// assert_eq!(rule.pattern(), "build.gradle");
/// ```
#[must_use]
pub fn seed_association(file_name: &str) -> Association {
    let path = Path::new(file_name);
    let base_name = path
        .file_name()
        .map_or(file_name, |name| name.to_str().unwrap_or(file_name));
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(base_name);
    let extension = path.extension().and_then(|ext| ext.to_str());

    let mut name = capitalize(stem);
    if let Some(extension) = extension {
        name.push(' ');
        name.push_str(&extension.to_uppercase());
    }

    Association::new(name, base_name)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
