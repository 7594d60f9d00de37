// ABOUTME: Slide extraction module for the reveal-search application
// ABOUTME: Splits a reveal.js markdown presentation into indexed slide documents

use crate::document::Document;
use crate::errors::{Result, SearchError};
use regex::Regex;
use std::sync::LazyLock;

/// Level-1 heading; the captured title excludes trailing blanks.
static CHAPTER_TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(.*?)[ \t\r]*$").unwrap());

/// Inline image with an empty alt text: `[](target)`.
static IMAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\]\((.*)\)").unwrap());

static STRONG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\s*([^*]*?)\s*\*\*").unwrap());

/// A lone `*` on each side, so the markers of `**strong**` never count.
static ITALIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[^*])\*\s*([^*]+?)\s*\*(?:[^*]|$)").unwrap());

/// The two patterns a presentation is split on.
#[derive(Debug, Clone)]
pub struct Separators {
    pub chapter: Regex,
    pub slide: Regex,
}

impl Separators {
    /// Compile both separators in multi-line mode, so `^` anchors at every line start.
    pub fn new(chapter: &str, slide: &str) -> Result<Self> {
        Ok(Self {
            chapter: compile_multiline(chapter)?,
            slide: compile_multiline(slide)?,
        })
    }

    /// Use already compiled patterns as they are.
    pub fn from_regex(chapter: Regex, slide: Regex) -> Self {
        Self { chapter, slide }
    }
}

fn compile_multiline(pattern: &str) -> Result<Regex> {
    Regex::new(&format!("(?m){}", pattern)).map_err(|source| SearchError::PatternError {
        pattern: pattern.to_string(),
        source,
    })
}

/// Turn one presentation into its ordered slide documents.
///
/// Chapters come from splitting `text` on the chapter separator, slides from
/// splitting each chapter on the slide separator. The chapter title is carried
/// forward from the last chapter that had a heading. Never returns an empty list:
/// text without any separator match is one chapter holding one slide.
pub fn extract_documents(name: &str, text: &str, separators: &Separators) -> Vec<Document> {
    let mut documents = Vec::new();

    separators.chapter.split(text).enumerate().fold(
        String::new(),
        |last_title, (chapter_index, chapter)| {
            let title = chapter_title(chapter)
                .map(str::to_string)
                .unwrap_or(last_title);

            for (slide_index, slide) in separators.slide.split(chapter).enumerate() {
                let sequence = documents.len() + 1;
                documents.push(Document {
                    id: format!("{}_{}", name, sequence),
                    url: slide_url(name, chapter_index, slide_index),
                    chapter_index,
                    slide_index,
                    content: slide.to_string(),
                    chapter_title: title.clone(),
                    keywords: slide_keywords(slide),
                    image: slide_image(slide),
                });
            }

            title
        },
    );

    documents
}

/// Text of the first level-1 heading in the chapter, if there is one.
pub fn chapter_title(chapter: &str) -> Option<&str> {
    CHAPTER_TITLE_REGEX
        .captures(chapter)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Target of the first `[](...)` image on the slide, verbatim, or empty.
pub fn slide_image(slide: &str) -> String {
    first_capture(&IMAGE_REGEX, slide).unwrap_or_default()
}

/// First strong span followed by first italic span; later spans are not indexed.
pub fn slide_keywords(slide: &str) -> Vec<String> {
    [&*STRONG_REGEX, &*ITALIC_REGEX]
        .into_iter()
        .filter_map(|regex| first_capture(regex, slide))
        .collect()
}

fn first_capture(regex: &Regex, text: &str) -> Option<String> {
    regex
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Build `/<name>/#/<chapter>/<slide>`, cleaned the way a path join would be.
///
/// An empty name yields `/#/<chapter>/<slide>`. Nothing is percent-encoded.
pub fn slide_url(name: &str, chapter_index: usize, slide_index: usize) -> String {
    let raw = format!("/{}/#/{}/{}", name, chapter_index, slide_index);

    let mut segments: Vec<&str> = Vec::new();
    for segment in raw.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }

    format!("/{}", segments.join("/"))
}
