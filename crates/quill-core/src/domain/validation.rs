//! Publish and sign-up validation.
//!
//! Each validator returns the first violated rule. The error `Display`
//! strings are the messages shown to the user verbatim.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::BlogInput;

/// Maximum description length for a published blog, in characters.
pub const MAX_DESC_CHARS: usize = 200;
/// Maximum number of tags on a published blog.
pub const MAX_TAGS: usize = 10;

const PASSWORD_MIN_CHARS: usize = 6;
const PASSWORD_MAX_CHARS: usize = 20;
const FULLNAME_MIN_CHARS: usize = 3;

#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$").expect("valid regex literal")
});

/// A publish rule the submitted blog violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PublishError {
    #[error("Blog description must be under 200 characters")]
    Description,
    #[error("You must provide a banner to publish the blog")]
    Banner,
    #[error("There must be some blog content to publish it")]
    Content,
    #[error("You must provide tags, Maximum 10")]
    Tags,
    #[error("You must provide a title to publish the blog")]
    Title,
}

/// Check a blog submission.
///
/// Published blogs are checked for description, banner, content and tags,
/// in that order. The title is checked last and applies to drafts too.
pub fn validate_blog(input: &BlogInput) -> Result<(), PublishError> {
    if !input.draft {
        let desc_chars = input.desc.chars().count();
        if desc_chars == 0 || desc_chars > MAX_DESC_CHARS {
            return Err(PublishError::Description);
        }
        if input.banner.is_empty() {
            return Err(PublishError::Banner);
        }
        if input.content.is_empty() {
            return Err(PublishError::Content);
        }
        if input.tags.is_empty() || input.tags.len() > MAX_TAGS {
            return Err(PublishError::Tags);
        }
    }

    if input.title.is_empty() {
        return Err(PublishError::Title);
    }

    Ok(())
}

/// A sign-up field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Fullname must be at least 3 letters long")]
    Fullname,
    #[error("Enter Email")]
    MissingEmail,
    #[error("Email is invalid")]
    InvalidEmail,
    #[error("Password should be 6 to 20 characters long with a numeric, 1 lowercase and 1 uppercase letters")]
    WeakPassword,
}

/// First failing sign-up rule for the given fields, checked in field order.
pub fn validate_signup(fullname: &str, email: &str, password: &str) -> Result<(), SignupError> {
    if fullname.chars().count() < FULLNAME_MIN_CHARS {
        return Err(SignupError::Fullname);
    }
    if email.is_empty() {
        return Err(SignupError::MissingEmail);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(SignupError::InvalidEmail);
    }
    if !is_strong_password(password) {
        return Err(SignupError::WeakPassword);
    }
    Ok(())
}

fn is_strong_password(password: &str) -> bool {
    let len = password.chars().count();
    (PASSWORD_MIN_CHARS..=PASSWORD_MAX_CHARS).contains(&len)
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BlogContent, ContentBlock};

    fn publishable() -> BlogInput {
        BlogInput {
            title: "Hello World!".to_string(),
            desc: "A short description".to_string(),
            banner: "https://cdn.example.com/banner.png".to_string(),
            tags: vec!["rust".to_string()],
            content: BlogContent {
                blocks: vec![ContentBlock::default()],
                ..Default::default()
            },
            draft: false,
        }
    }

    #[test]
    fn test_publishable_blog_passes() {
        assert_eq!(validate_blog(&publishable()), Ok(()));
    }

    #[test]
    fn test_empty_description_is_rejected_first() {
        let input = BlogInput {
            desc: String::new(),
            banner: "x".to_string(),
            ..publishable()
        };
        let err = validate_blog(&input).unwrap_err();
        assert_eq!(err, PublishError::Description);
        assert_eq!(
            err.to_string(),
            "Blog description must be under 200 characters"
        );
    }

    #[test]
    fn test_description_length_boundary() {
        let at_limit = BlogInput {
            desc: "é".repeat(MAX_DESC_CHARS),
            ..publishable()
        };
        assert_eq!(validate_blog(&at_limit), Ok(()));

        let over = BlogInput {
            desc: "a".repeat(MAX_DESC_CHARS + 1),
            ..publishable()
        };
        assert_eq!(validate_blog(&over), Err(PublishError::Description));
    }

    #[test]
    fn test_rules_apply_in_order() {
        let everything_missing = BlogInput {
            title: String::new(),
            desc: "ok".to_string(),
            banner: String::new(),
            tags: Vec::new(),
            content: BlogContent::default(),
            draft: false,
        };
        assert_eq!(
            validate_blog(&everything_missing),
            Err(PublishError::Banner)
        );

        let no_content = BlogInput {
            content: BlogContent::default(),
            tags: Vec::new(),
            ..publishable()
        };
        assert_eq!(validate_blog(&no_content), Err(PublishError::Content));

        let no_tags = BlogInput {
            tags: Vec::new(),
            title: String::new(),
            ..publishable()
        };
        assert_eq!(validate_blog(&no_tags), Err(PublishError::Tags));
    }

    #[test]
    fn test_tag_count_bounds() {
        let ten = BlogInput {
            tags: (0..MAX_TAGS).map(|i| format!("t{i}")).collect(),
            ..publishable()
        };
        assert_eq!(validate_blog(&ten), Ok(()));

        let eleven = BlogInput {
            tags: (0..=MAX_TAGS).map(|i| format!("t{i}")).collect(),
            ..publishable()
        };
        assert_eq!(validate_blog(&eleven), Err(PublishError::Tags));
    }

    #[test]
    fn test_title_checked_after_publish_rules() {
        let input = BlogInput {
            title: String::new(),
            ..publishable()
        };
        assert_eq!(validate_blog(&input), Err(PublishError::Title));
    }

    #[test]
    fn test_draft_only_requires_title() {
        let draft = BlogInput {
            title: "Half-written".to_string(),
            draft: true,
            ..Default::default()
        };
        assert_eq!(validate_blog(&draft), Ok(()));

        let untitled = BlogInput {
            draft: true,
            ..Default::default()
        };
        assert_eq!(validate_blog(&untitled), Err(PublishError::Title));
    }

    #[test]
    fn test_signup_rules() {
        assert_eq!(validate_signup("Al", "al@example.com", "Secret1"), Err(SignupError::Fullname));
        assert_eq!(validate_signup("Alan", "", "Secret1"), Err(SignupError::MissingEmail));
        assert_eq!(
            validate_signup("Alan", "not-an-email", "Secret1"),
            Err(SignupError::InvalidEmail)
        );
        assert_eq!(
            validate_signup("Alan", "alan@example.com", "secret1"),
            Err(SignupError::WeakPassword)
        );
        assert_eq!(
            validate_signup("Alan", "alan@example.com", "Sh0rt"),
            Err(SignupError::WeakPassword)
        );
        assert_eq!(validate_signup("Alan", "alan.turing@example.co.uk", "Secret1"), Ok(()));
    }
}
