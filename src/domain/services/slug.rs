use crate::domain::ports::RoomRepository;
use crate::error::AppError;

/// Lowercases, keeps ASCII alphanumerics, collapses everything else into
/// single hyphens. "Quantum Suite" -> "quantum-suite".
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Derives a catalog-unique slug from a room name, suffixing `-1`, `-2`, ...
/// until free. `exclude_id` lets a rename keep colliding with itself.
pub async fn ensure_unique_slug(
    repo: &dyn RoomRepository,
    name: &str,
    exclude_id: Option<i64>,
) -> Result<String, AppError> {
    let base = {
        let s = slugify(name);
        if s.is_empty() { "room".to_string() } else { s }
    };

    let mut candidate = base.clone();
    let mut counter = 1;

    while repo.slug_exists(&candidate, exclude_id).await? {
        candidate = format!("{base}-{counter}");
        counter += 1;
    }

    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn basic_names() {
        assert_eq!(slugify("Quantum Suite"), "quantum-suite");
        assert_eq!(slugify("Cyber Deluxe"), "cyber-deluxe");
    }

    #[test]
    fn punctuation_collapses_to_single_hyphens() {
        assert_eq!(slugify("Café  &  Bar 42"), "caf-bar-42");
        assert_eq!(slugify("--Neo's Room--"), "neo-s-room");
    }

    #[test]
    fn empty_when_nothing_survives() {
        assert_eq!(slugify("!!!"), "");
    }
}
