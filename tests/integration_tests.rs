//! Integration tests for the gist summarization engine.

use gist::{
    extract_text, load_document, Config, DocumentKind, GistError, ResourceConfig,
    ResourceProvider, Summarizer, Tokenizer,
};
use std::fs;
use std::io::{Cursor, Write};
use std::sync::Arc;
use std::thread;
use tempfile::tempdir;

const ARTICLE: &str = "Rust guarantees memory safety without a garbage collector. \
    The compiler tracks ownership of every value. \
    Yesterday the weather was mild. \
    Ownership rules let the compiler reject dangling references before the program runs. \
    Many teams adopt Rust for systems programming. \
    Cargo downloads crates and builds projects.";

fn summarizer() -> Summarizer {
    let config = Config::default();
    let provider = ResourceProvider::new(config.resources.clone());
    Summarizer::new(&provider, &config).unwrap()
}

#[test]
fn test_deterministic() {
    let summarizer = summarizer();
    let first = summarizer.summarize(ARTICLE, 3);
    for _ in 0..5 {
        assert_eq!(summarizer.summarize(ARTICLE, 3), first);
    }

    // A fresh provider and summarizer agree too
    assert_eq!(self::summarizer().summarize(ARTICLE, 3), first);
}

#[test]
fn test_order_preserved() {
    let summarizer = summarizer();
    let sentences = summarizer.sentences(ARTICLE);
    let summary = summarizer.summarize(ARTICLE, 3);

    let positions: Vec<usize> = summary
        .sentences
        .iter()
        .map(|s| sentences.iter().position(|orig| *orig == s.as_str()).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
}

#[test]
fn test_count_bounds() {
    let summarizer = summarizer();
    for n in 1..=8 {
        let stats = summarizer.summarize(ARTICLE, n).statistics;
        assert!(stats.summary_sentence_count <= n);
        assert!(stats.summary_sentence_count <= stats.original_sentence_count);
    }
    assert_eq!(summarizer.summarize(ARTICLE, 2).statistics.summary_sentence_count, 2);
}

#[test]
fn test_empty_input() {
    let summarizer = summarizer();
    for n in [1, 3, 50] {
        let summary = summarizer.summarize("", n);
        assert_eq!(summary.text, "");
        assert!(summary.sentences.is_empty());
        assert!(summary.statistics.is_empty());
    }
}

#[test]
fn test_single_sentence() {
    let summary = summarizer().summarize("Only one sentence here.", 1);
    assert_eq!(summary.text, "Only one sentence here.");
    assert_eq!(summary.statistics.summary_sentence_count, 1);
    assert_eq!(summary.statistics.original_sentence_count, 1);
}

#[test]
fn test_word_count_matches_tokenizer() {
    let summary = summarizer().summarize(ARTICLE, 2);
    let tokens = Tokenizer::default_config().segment_words(ARTICLE);
    assert_eq!(summary.statistics.original_word_count, tokens.len());
    assert_eq!(summary.statistics.original_char_count, ARTICLE.chars().count());
}

#[test]
fn test_summary_is_smaller() {
    let summary = summarizer().summarize(ARTICLE, 2);
    let stats = summary.statistics;

    assert!(stats.original_sentence_count > 2);
    assert!(stats.summary_char_count <= stats.original_char_count);
    assert!(stats.summary_word_count <= stats.original_word_count);
    assert!(stats.reduction_percentage() > 0.0);
}

#[test]
fn test_stopword_sentence_scores_zero() {
    let text = "Compilers catch bugs early. It is what it is.";
    let ranked = summarizer().rank(text);

    let filler = ranked.iter().find(|s| s.text == "It is what it is.").unwrap();
    assert_eq!(filler.score, 0.0);
    assert!(ranked[0].score > 0.0);
}

#[test]
fn test_content_words_outrank_filler() {
    let text = "New research shows important results. The cat sat. \
        New research needs important work.";
    let ranked = summarizer().rank(text);

    let filler = ranked.iter().find(|s| s.text == "The cat sat.").unwrap();
    assert!((filler.score - 0.5).abs() < 1e-10);
    assert_eq!(ranked[0].text, "New research shows important results.");
    assert!((ranked[0].score - 8.0 / 6.0).abs() < 1e-10);
    assert!(ranked[1].score > filler.score);
}

#[test]
fn test_saturation_returns_whole_document() {
    let summarizer = summarizer();
    let sentences = summarizer.sentences(ARTICLE);
    let summary = summarizer.summarize(ARTICLE, sentences.len() + 5);

    assert_eq!(summary.text, sentences.join(" "));
    assert_eq!(summary.statistics.summary_sentence_count, sentences.len());
}

#[test]
fn test_repeated_sentence_collapses_in_scoring() {
    let text = "Rust checks borrows. Tea is warm. Rust checks borrows. Soup is hot.";
    let summarizer = summarizer();

    let ranked = summarizer.rank(text);
    assert_eq!(ranked.len(), 3);

    // The repeated text is one selection but is kept at both of its positions
    let summary = summarizer.summarize(text, 1);
    assert_eq!(summary.statistics.original_sentence_count, 4);
    assert_eq!(summary.statistics.summary_sentence_count, 1);
    assert_eq!(summary.text, "Rust checks borrows. Rust checks borrows.");
}

#[test]
fn test_resource_failure_is_retryable() {
    let dir = tempdir().unwrap();
    let stopwords_path = dir.path().join("stopwords.txt");

    let provider = ResourceProvider::new(ResourceConfig {
        stopwords_path: Some(stopwords_path.clone()),
        ..Default::default()
    });
    let config = Config::default();

    match Summarizer::new(&provider, &config) {
        Err(GistError::ResourceUnavailable { reason, remediation }) => {
            assert!(reason.contains("stopwords.txt"));
            assert!(!remediation.is_empty());
        }
        other => panic!("expected ResourceUnavailable, got {:?}", other.map(|_| ())),
    }
    assert!(!provider.is_ready());

    fs::write(&stopwords_path, "# custom list\nthe\n\nis\n").unwrap();
    let summarizer = Summarizer::new(&provider, &config).unwrap();
    assert!(provider.is_ready());
    assert_eq!(summarizer.summarize("The cat is here.", 1).text, "The cat is here.");
}

#[test]
fn test_custom_stopwords_change_ranking() {
    let text = "Apples grow here. Pears grow there. Apples apples everywhere.";

    let default_top = summarizer().rank(text)[0].text;
    assert_eq!(default_top, "Apples apples everywhere.");

    let config = Config {
        resources: ResourceConfig {
            extra_stopwords: vec!["apples".to_string()],
            ..Default::default()
        },
        ..Default::default()
    };
    let provider = ResourceProvider::new(config.resources.clone());
    let summarizer = Summarizer::new(&provider, &config).unwrap();
    assert_eq!(summarizer.rank(text)[0].text, "Pears grow there.");
}

#[test]
fn test_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gist.json");
    fs::write(
        &path,
        r#"{ "summary": { "default_sentences": 2 }, "resources": { "language": "german" } }"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.summary.default_sentences, 2);

    let provider = ResourceProvider::new(config.resources.clone());
    let resources = provider.ensure_ready().unwrap();
    assert_eq!(resources.language(), gist::Language::German);
    assert!(resources.exclusions().contains("und"));
}

#[test]
fn test_shared_summarizer_across_threads() {
    let summarizer = Arc::new(summarizer());
    let expected = summarizer.summarize(ARTICLE, 2);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let summarizer = Arc::clone(&summarizer);
            thread::spawn(move || summarizer.summarize(ARTICLE, 2))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body
    );

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

#[test]
fn test_docx_extraction_feeds_summarizer() {
    let bytes = build_docx(&[
        "Rust compiles to native code.",
        "Lunch was fine.",
        "Native code from Rust runs fast.",
    ]);

    let text = extract_text(DocumentKind::Docx, &bytes).unwrap();
    assert_eq!(
        text,
        "Rust compiles to native code.\nLunch was fine.\nNative code from Rust runs fast."
    );

    let summary = summarizer().summarize(&text, 2);
    assert_eq!(summary.statistics.original_sentence_count, 3);
    assert_eq!(
        summary.sentences,
        vec!["Rust compiles to native code.", "Native code from Rust runs fast."]
    );
}

#[test]
fn test_load_document_from_disk() {
    let dir = tempdir().unwrap();

    let txt = dir.path().join("note.txt");
    fs::write(&txt, "Plain text works. It really does.").unwrap();
    assert_eq!(load_document(&txt).unwrap(), "Plain text works. It really does.");

    let docx = dir.path().join("note.docx");
    fs::write(&docx, build_docx(&["Alpha.", "Beta."])).unwrap();
    assert_eq!(load_document(&docx).unwrap(), "Alpha.\nBeta.");

    let odt = dir.path().join("note.odt");
    fs::write(&odt, b"whatever").unwrap();
    assert!(matches!(load_document(&odt), Err(GistError::UnsupportedFormat(_))));

    let broken = dir.path().join("broken.docx");
    fs::write(&broken, b"not a zip archive").unwrap();
    assert!(matches!(load_document(&broken), Err(GistError::Extraction(_))));
}
