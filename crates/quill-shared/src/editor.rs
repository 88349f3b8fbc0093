//! Client-side blog editor: collects a draft and gates the move to the
//! publish form.
//!
//! The rich-text editor and the image upload service are injected through
//! [`TextEditor`] and [`ImageUploader`], so the state machine itself has no
//! UI or network dependencies.

use std::fmt::Display;

use async_trait::async_trait;
use thiserror::Error;

use quill_core::domain::BlogContent;

use crate::dto::CreateBlogRequest;

/// Shown in place of an empty title.
pub const TITLE_PLACEHOLDER: &str = "[Blog Title]";

/// The block editor the draft content comes from.
#[async_trait]
pub trait TextEditor: Send + Sync {
    type Error: Display + Send;

    /// Whether the editor finished initialising.
    fn is_ready(&self) -> bool;

    /// Serialise the current document.
    async fn save(&self) -> Result<BlogContent, Self::Error>;
}

/// Uploads an image and returns its public URL.
#[async_trait]
pub trait ImageUploader: Send + Sync {
    type Image: Send;
    type Error: Display + Send;

    async fn upload(&self, image: Self::Image) -> Result<String, Self::Error>;
}

/// Messages shown to the writer when the draft cannot move on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("Upload a blog banner to publish it")]
    MissingBanner,

    #[error("Write blog title to publish it")]
    MissingTitle,

    #[error("Write something in your blog to publish it")]
    EmptyContent,

    #[error("Failed to save the blog content")]
    SaveFailed,

    #[error("{0}")]
    UploadFailed(String),
}

/// What the writer has entered so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogDraft {
    pub title: String,
    pub banner: String,
    pub content: BlogContent,
    pub tags: Vec<String>,
    pub desc: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Editor,
    Publish,
}

pub struct BlogEditor<E> {
    editor: E,
    draft: BlogDraft,
    state: EditorState,
}

impl<E: TextEditor> BlogEditor<E> {
    pub fn new(editor: E) -> Self {
        Self::with_draft(editor, BlogDraft::default())
    }

    /// Resume editing an existing draft.
    pub fn with_draft(editor: E, draft: BlogDraft) -> Self {
        Self {
            editor,
            draft,
            state: EditorState::Editor,
        }
    }

    pub fn draft(&self) -> &BlogDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut BlogDraft {
        &mut self.draft
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    /// The title box is single-line: line breaks are dropped.
    pub fn set_title(&mut self, title: &str) {
        self.draft.title = title.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
    }

    pub fn display_title(&self) -> &str {
        if self.draft.title.is_empty() {
            TITLE_PLACEHOLDER
        } else {
            &self.draft.title
        }
    }

    pub fn set_banner(&mut self, url: impl Into<String>) {
        self.draft.banner = url.into();
    }

    /// Upload `image` and use the returned URL as the banner. The previous
    /// banner is kept when the upload fails.
    pub async fn attach_banner<U: ImageUploader>(
        &mut self,
        uploader: &U,
        image: U::Image,
    ) -> Result<(), EditorError> {
        let url = uploader
            .upload(image)
            .await
            .map_err(|e| EditorError::UploadFailed(e.to_string()))?;
        self.draft.banner = url;
        Ok(())
    }

    /// Try to move to the publish form.
    ///
    /// Returns `Ok(false)` without changing anything while the editor is
    /// still initialising.
    pub async fn request_publish(&mut self) -> Result<bool, EditorError> {
        if self.draft.banner.is_empty() {
            return Err(EditorError::MissingBanner);
        }
        if self.draft.title.is_empty() {
            return Err(EditorError::MissingTitle);
        }
        if !self.editor.is_ready() {
            return Ok(false);
        }

        let content = self
            .editor
            .save()
            .await
            .map_err(|_| EditorError::SaveFailed)?;
        if content.is_empty() {
            return Err(EditorError::EmptyContent);
        }

        self.draft.content = content;
        self.state = EditorState::Publish;
        Ok(true)
    }

    pub fn back_to_editor(&mut self) {
        self.state = EditorState::Editor;
    }

    /// Body for `POST /create-blog`.
    pub fn to_create_request(&self, draft: bool) -> CreateBlogRequest {
        CreateBlogRequest {
            title: self.draft.title.clone(),
            desc: self.draft.desc.clone(),
            banner: self.draft.banner.clone(),
            tags: self.draft.tags.clone(),
            content: self.draft.content.clone(),
            draft,
        }
    }
}
