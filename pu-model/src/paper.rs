use crate::locale::UiText;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language a paper is written in, as tagged in `papers.json`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Chinese,
    English,
    /// Any tag we don't filter on. Still listed under "all".
    #[serde(other)]
    Other,
}

impl Language {
    /// The lowercase tag used in JSON, CSS classes and `data-language`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Chinese => "chinese",
            Language::English => "english",
            Language::Other => "other",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One paper's metadata entry.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    pub title: String,
    pub authors: String,
    pub year: i32,
    pub source: String,
    /// Missing abstracts are allowed and render as nothing
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    pub language: Language,
    pub online_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_link: Option<String>,
}

/// Which kind of link a card shows.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LinkKind {
    Online,
    Pdf,
}

impl LinkKind {
    pub fn label(&self, text: &UiText) -> &'static str {
        match self {
            LinkKind::Online => text.read_online,
            LinkKind::Pdf => text.download_pdf,
        }
    }
}

/// A single outbound link on a paper card.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PaperLink {
    pub kind: LinkKind,
    pub href: String,
}

impl PaperLink {
    /// CSS class for the anchor; PDF links get an extra `pdf` modifier.
    pub fn class(&self) -> &'static str {
        match self.kind {
            LinkKind::Online => "paper-link",
            LinkKind::Pdf => "paper-link pdf",
        }
    }
}

impl Paper {
    /// Links shown on the card, online first. The PDF link only appears
    /// when `pdfLink` is present and non-empty.
    pub fn links(&self) -> Vec<PaperLink> {
        let mut links = vec![PaperLink {
            kind: LinkKind::Online,
            href: self.online_link.clone(),
        }];
        if let Some(pdf) = self.pdf_link.as_deref().filter(|p| !p.trim().is_empty()) {
            links.push(PaperLink {
                kind: LinkKind::Pdf,
                href: pdf.to_string(),
            });
        }
        links
    }
}

/// Top-level shape of `data/papers.json`.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct PaperCollection {
    pub papers: Vec<Paper>,
}

impl PaperCollection {
    /// Decode a `papers.json` document.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let collection: PaperCollection = serde_json::from_str(json)?;
        log::info!("Decoded {} papers", collection.papers.len());
        Ok(collection)
    }

    /// Count of papers written in `language`.
    pub fn count_language(&self, language: Language) -> usize {
        self.papers.iter().filter(|p| p.language == language).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    const EXAMPLE_JSON: &str = r#"{"papers":[
        {"title":"A","authors":"X","year":2020,"source":"S","language":"chinese","onlineLink":"u1"},
        {"title":"B","authors":"Y","year":2021,"source":"S2","language":"english","onlineLink":"u2","pdfLink":"p2"}
    ]}"#;

    #[test]
    fn test_parse_example_collection() {
        let collection = PaperCollection::from_json(EXAMPLE_JSON).unwrap();
        assert_eq!(collection.papers.len(), 2);
        let a = &collection.papers[0];
        assert_eq!(a.title, "A");
        assert_eq!(a.authors, "X");
        assert_eq!(a.year, 2020);
        assert_eq!(a.source, "S");
        assert_eq!(a.language, Language::Chinese);
        assert_eq!(a.abstract_text, "");
        assert_eq!(a.pdf_link, None);
        assert_eq!(collection.papers[1].pdf_link.as_deref(), Some("p2"));
    }

    #[test]
    fn test_links_without_pdf() {
        let collection = PaperCollection::from_json(EXAMPLE_JSON).unwrap();
        let links = collection.papers[0].links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].kind, LinkKind::Online);
        assert_eq!(links[0].href, "u1");
    }

    #[test]
    fn test_links_with_pdf() {
        let collection = PaperCollection::from_json(EXAMPLE_JSON).unwrap();
        let links = collection.papers[1].links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[1].kind, LinkKind::Pdf);
        assert_eq!(links[1].href, "p2");
        assert_eq!(links[1].class(), "paper-link pdf");
        assert_eq!(links[1].kind.label(Locale::Zh.text()), "下载PDF");
        assert_eq!(links[0].kind.label(Locale::En.text()), "Read online");
    }

    #[test]
    fn test_blank_pdf_link_is_ignored() {
        let json = r#"{"papers":[{"title":"C","authors":"Z","year":2019,"source":"S",
            "abstract":"text","language":"english","onlineLink":"u3","pdfLink":"  "}]}"#;
        let collection = PaperCollection::from_json(json).unwrap();
        assert_eq!(collection.papers[0].links().len(), 1);
        assert_eq!(collection.papers[0].abstract_text, "text");
    }

    #[test]
    fn test_unknown_language_decodes_as_other() {
        let json = r#"{"papers":[{"title":"D","authors":"W","year":2018,"source":"S",
            "language":"japanese","onlineLink":"u4"}]}"#;
        let collection = PaperCollection::from_json(json).unwrap();
        assert_eq!(collection.papers[0].language, Language::Other);
    }

    #[test]
    fn test_missing_papers_field_is_malformed() {
        let err = PaperCollection::from_json(r#"{"items":[]}"#).unwrap_err();
        assert!(matches!(err, crate::LoadError::Malformed(_)));
    }

    #[test]
    fn test_count_language() {
        let collection = PaperCollection::from_json(EXAMPLE_JSON).unwrap();
        assert_eq!(collection.count_language(Language::Chinese), 1);
        assert_eq!(collection.count_language(Language::English), 1);
        assert_eq!(collection.count_language(Language::Other), 0);
    }
}
