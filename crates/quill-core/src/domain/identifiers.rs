//! External identifier generation for blogs and usernames.

use rand::{Rng, distributions::Alphanumeric};

/// Length of the random suffix appended to a blog slug.
pub const BLOG_ID_SUFFIX_LEN: usize = 21;
/// Length of the suffix appended to a username that is already taken.
pub const USERNAME_SUFFIX_LEN: usize = 5;

/// Turn a title into a URL-safe slug.
///
/// Every character that is not an ASCII letter or digit becomes a space,
/// and the remaining words are joined with single hyphens.
pub fn slugify_title(title: &str) -> String {
    let spaced: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Join a title slug and a suffix into a blog id.
pub fn compose_blog_id(title: &str, suffix: &str) -> String {
    let slug = slugify_title(title);
    if slug.is_empty() {
        suffix.to_string()
    } else {
        format!("{slug}-{suffix}")
    }
}

/// Generate a fresh blog id: the title slug plus a random alphanumeric suffix.
///
/// Uniqueness is probabilistic; there is no collision retry.
pub fn generate_blog_id(title: &str) -> String {
    compose_blog_id(title, &random_alphanumeric(BLOG_ID_SUFFIX_LEN))
}

/// Random string over `[A-Za-z0-9]`.
pub fn random_alphanumeric(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Default username for a new account: the local part of the email.
pub fn username_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or_default().to_string()
}

/// Username used when the default one is already taken.
pub fn disambiguate_username(base: &str) -> String {
    format!("{base}{}", random_alphanumeric(USERNAME_SUFFIX_LEN))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_url_safe(id: &str) -> bool {
        id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    }

    #[test]
    fn test_slug_replaces_punctuation_and_collapses_whitespace() {
        assert_eq!(slugify_title("Hello World!"), "Hello-World");
        assert_eq!(slugify_title("  Rust   &  C++ : a tale "), "Rust-C-a-tale");
        assert_eq!(slugify_title("Café déjà vu"), "Caf-d-j-vu");
    }

    #[test]
    fn test_compose_is_deterministic() {
        assert_eq!(compose_blog_id("Hello World!", "abc123"), "Hello-World-abc123");
        assert_eq!(
            compose_blog_id("Hello World!", "abc123"),
            compose_blog_id("Hello World!", "abc123")
        );
    }

    #[test]
    fn test_punctuation_only_title_falls_back_to_suffix() {
        assert_eq!(compose_blog_id("?!", "xyz"), "xyz");
    }

    #[test]
    fn test_generated_ids_are_url_safe_and_distinct() {
        let first = generate_blog_id("Same Title: part 1/2");
        let second = generate_blog_id("Same Title: part 1/2");

        assert!(is_url_safe(&first), "{first}");
        assert!(first.starts_with("Same-Title-part-1-2-"));
        assert_eq!(first.len(), "Same-Title-part-1-2-".len() + BLOG_ID_SUFFIX_LEN);
        assert_ne!(first, second);
    }

    #[test]
    fn test_username_helpers() {
        assert_eq!(username_from_email("ada@example.com"), "ada");
        let alt = disambiguate_username("ada");
        assert!(alt.starts_with("ada"));
        assert_eq!(alt.len(), 3 + USERNAME_SUFFIX_LEN);
    }
}
