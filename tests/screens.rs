//! Writing screen documents and capturing them in a batch.

use async_trait::async_trait;
use scraper::{Html, Selector};
use std::path::PathBuf;
use std::sync::Mutex;
use taproom_board::config::{Config, OutputConfig, SnapshotConfig};
use taproom_board::render::write_pages;
use taproom_board::snapshot::{capture_all, targets_for, SnapshotRenderer, SnapshotTarget};
use taproom_board::{Board, MenuPipeline, SnapshotError};

/// Records every target and fails the ones named in `failing`
struct FakeRenderer {
    failing: Vec<&'static str>,
    seen: Mutex<Vec<String>>,
}

#[async_trait]
impl SnapshotRenderer for FakeRenderer {
    async fn capture(&self, target: &SnapshotTarget) -> Result<PathBuf, SnapshotError> {
        self.seen.lock().unwrap().push(target.name.clone());
        if self.failing.contains(&target.name.as_str()) {
            Err(SnapshotError::Timeout {
                url: target.url.clone(),
                timeout: std::time::Duration::from_secs(120),
            })
        } else {
            Ok(target.output.clone())
        }
    }
}

fn sheet(count: usize) -> String {
    let mut text = String::from("id;название;цена;Наличие;Тип\n");
    for id in 1..=count {
        text.push_str(&format!("{};Сорт {};{};да;светлое\n", id, id, 200));
    }
    text
}

fn output_in(dir: &tempfile::TempDir) -> OutputConfig {
    OutputConfig {
        dir: dir.path().to_path_buf(),
        ..OutputConfig::default()
    }
}

#[test]
fn writes_every_configured_screen() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default();
    let board = MenuPipeline::new(&config).build_board(&sheet(20));

    let pages = write_pages(&board, &config.board, &output_in(&dir)).unwrap();

    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0].name, "screen1");
    assert_eq!(pages[0].card_count, 15);
    assert_eq!(pages[1].card_count, 6);
    assert_eq!(pages[2].card_count, 0);

    let html = std::fs::read_to_string(&pages[1].html_path).unwrap();
    let document = Html::parse_document(&html);
    let cards = Selector::parse("#menu .beer-card").unwrap();
    let filler = Selector::parse("#menu .filler-card").unwrap();
    let prices = Selector::parse(".price").unwrap();

    assert_eq!(document.select(&cards).count(), 6);
    assert_eq!(document.select(&filler).count(), 1);
    assert!(document
        .select(&prices)
        .all(|price| price.text().collect::<String>() == "200₽"));

    let empty = std::fs::read_to_string(&pages[2].html_path).unwrap();
    assert_eq!(Html::parse_document(&empty).select(&cards).count(), 0);

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&pages[0].json_path).unwrap()).unwrap();
    assert_eq!(json["number"], 1);
    assert_eq!(json["cards"][0]["kind"], "item");
    assert_eq!(json["cards"][0]["state"], "inStock");
    assert_eq!(json["cards"][0]["badge"]["category"], "light");
}

#[test]
fn failed_fetch_still_writes_empty_screens() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default();

    let pages = write_pages(&Board::default(), &config.board, &output_in(&dir)).unwrap();

    assert_eq!(pages.len(), 3);
    assert!(pages.iter().all(|page| page.card_count == 0));
}

#[test]
fn local_pages_are_addressed_as_file_urls() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default();
    let board = MenuPipeline::new(&config).build_board(&sheet(3));
    let pages = write_pages(&board, &config.board, &output_in(&dir)).unwrap();

    let targets = targets_for(&pages, &SnapshotConfig::default(), dir.path()).unwrap();

    assert_eq!(targets.len(), 3);
    assert!(targets[0].url.starts_with("file://"));
    assert!(targets[0].url.ends_with("/screen1.html"));
    assert_eq!(targets[2].output, dir.path().join("screen3.png"));
}

#[test]
fn one_failed_capture_does_not_abort_the_batch() {
    let renderer = FakeRenderer {
        failing: vec!["screen2"],
        seen: Mutex::new(Vec::new()),
    };
    let targets: Vec<SnapshotTarget> = (1..=3)
        .map(|n| SnapshotTarget {
            name: format!("screen{}", n),
            url: format!("https://example.org/screen{}.html", n),
            output: PathBuf::from(format!("out/screen{}.png", n)),
        })
        .collect();

    let report = tokio_test::block_on(capture_all(&renderer, &targets));

    assert_eq!(*renderer.seen.lock().unwrap(), vec!["screen1", "screen2", "screen3"]);
    assert!(!report.is_complete());
    assert_eq!(
        report.captured,
        vec![PathBuf::from("out/screen1.png"), PathBuf::from("out/screen3.png")]
    );
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "screen2");
    assert!(matches!(report.failed[0].1, SnapshotError::Timeout { .. }));
}
