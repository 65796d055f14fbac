//! Integration tests for talkboard.
//!
//! These tests run the whole library pipeline on realistic exports: parse,
//! build the reports, project the table rows and render the charts.

#![cfg(feature = "charts")]

use std::fs;

use chrono::NaiveDate;
use talkboard::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Fixtures
// ============================================================================

const EXPORT: &str = "[LINE] 旅行グループのトーク履歴
保存日時：2023/03/02 21:15

2023/01/28(土)
19:02\tAlice\t来月の旅行どうする？
19:03\tBob\t[スタンプ]
19:05\tCarol\t京都に行きたい
19:06\tAlice\t京都いいね
19:10\tBob\t\"新幹線の予約は
僕がやるよ\"
2023/02/12(日)
10:00\tCarol\t[写真]
10:01\tCarol\t[アルバム] 京都旅行
10:02\tAlice\t[ノート]集合場所は京都駅
10:05\tBob\tホテル代
BobがAliceに12,000 円を送金しました。
10:06\tAlice\tありがとう
2023/03/01(水)
22:40\tCarol\t京都の写真ありがとう
";

fn parse_export() -> TalkTable {
    TalkParser::new().parse_str(EXPORT).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_record_count() {
    let table = parse_export();
    assert_eq!(table.len(), 11);
    assert_eq!(table.undated_count(), 0);
    assert_eq!(table.users(), vec!["Alice", "Bob", "Carol"]);
}

#[test]
fn test_parse_dates_follow_headers() {
    let table = parse_export();
    let records = table.records();

    assert!(records[..5].iter().all(|r| r.date() == date(2023, 1, 28)));
    assert!(records[5..10].iter().all(|r| r.date() == date(2023, 2, 12)));
    assert_eq!(records[10].date(), date(2023, 3, 1));
}

#[test]
fn test_parse_wrapped_message_rejoined() {
    let table = parse_export();
    let record = &table.records()[4];
    assert_eq!(record.user(), "Bob");
    assert_eq!(record.message(), "新幹線の予約は僕がやるよ");
    assert_eq!(record.kind(), MessageType::Message);
}

#[test]
fn test_parse_remittance_removed() {
    let table = parse_export();
    assert!(table.iter().all(|r| !r.message().contains("送金")));

    let thanks = table.iter().find(|r| r.message() == "ありがとう").unwrap();
    assert_eq!(thanks.time(), "10:06");
}

#[test]
fn test_parse_classifies_payloads() {
    let table = parse_export();
    let kinds: Vec<MessageType> = table.iter().map(|r| r.kind()).collect();

    assert_eq!(kinds[1], MessageType::Stamp);
    assert_eq!(kinds[5], MessageType::Picture);
    assert_eq!(kinds[6], MessageType::Album);
    assert_eq!(kinds[7], MessageType::Note);
    // a marker word inside text is not a payload
    assert_eq!(kinds[10], MessageType::Message);
}

#[test]
fn test_parse_file_matches_parse_str() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("talk.txt");
    fs::write(&path, EXPORT).unwrap();

    let from_file = TalkParser::new().parse(&path).unwrap();
    assert_eq!(from_file, parse_export());
}

#[test]
fn test_custom_markers() {
    let export = "[LINE] talk\n2023/01/01(日)\n09:00\tAlice\t[Sticker]\n09:01\tBob\t[スタンプ]\n";
    let config = ParserConfig::new().with_markers(MessageMarkers::new().with_stamp("[Sticker]"));

    let table = TalkParser::with_config(config).parse_str(export).unwrap();
    assert_eq!(table.records()[0].kind(), MessageType::Stamp);
    assert_eq!(table.records()[1].kind(), MessageType::Message);
}

// ============================================================================
// Reports
// ============================================================================

#[test]
fn test_monthly_volume_report() {
    let volume = monthly_volume(&parse_export());

    assert_eq!(volume.labels(), vec!["2023/1", "2023/2", "2023/3"]);
    assert_eq!(volume.count("Alice", 2023, 1), 2);
    assert_eq!(volume.count("Bob", 2023, 1), 2);
    assert_eq!(volume.count("Carol", 2023, 1), 1);
    assert_eq!(volume.count("Carol", 2023, 2), 2);
    assert_eq!(volume.count("Alice", 2023, 2), 2);
    assert_eq!(volume.count("Bob", 2023, 2), 1);
    assert_eq!(volume.count("Carol", 2023, 3), 1);
    assert_eq!(volume.total(), 11);
}

#[test]
fn test_type_ratio_report() {
    let ratio = type_ratio(&parse_export());
    assert_eq!(ratio[0], (MessageType::Message, 7));

    let rest: Vec<MessageType> = ratio[1..].iter().map(|(kind, _)| *kind).collect();
    assert_eq!(
        rest,
        vec![
            MessageType::Stamp,
            MessageType::Picture,
            MessageType::Album,
            MessageType::Note
        ]
    );
}

#[test]
fn test_word_ranking_report() {
    let table = parse_export();
    let frequencies = word_frequencies(&table, &ScriptTokenizer::default(), &StopWords::new());
    let ranking = word_ranking(&frequencies, Some(3));

    assert_eq!(ranking.words[0], "京都");
    assert_eq!(ranking.counts[0], 3);
    assert_eq!(ranking.words.len(), 3);
    // album and note bodies are not counted
    assert_eq!(frequencies.get("京都旅行"), None);
    assert_eq!(frequencies.get("集合場所"), None);
}

#[test]
fn test_word_ranking_with_stop_words() {
    let table = parse_export();
    let stop_words = StopWords::parse("京都\r\n写真\r\n");
    let frequencies = word_frequencies(&table, &ScriptTokenizer::default(), &stop_words);

    assert_eq!(frequencies.get("京都"), None);
    assert_eq!(frequencies.get("写真"), None);
    assert!(frequencies.get("新幹線").is_some());
}

#[test]
fn test_custom_tokenizer() {
    struct Whitespace;

    impl WordTokenizer for Whitespace {
        fn terms(&self, text: &str) -> Vec<String> {
            text.split_whitespace().map(String::from).collect()
        }
    }

    let table = TalkParser::new()
        .parse_str("[LINE] t\n2023/01/01(日)\n09:00\tA\tfoo bar foo\n09:01\tB\tbar foo\n")
        .unwrap();
    let frequencies = word_frequencies(&table, &Whitespace, &StopWords::new());

    assert_eq!(
        frequencies.entries(),
        &[("foo".to_string(), 3), ("bar".to_string(), 2)]
    );
}

// ============================================================================
// Table rows
// ============================================================================

#[test]
fn test_rows_follow_columns() {
    let table = parse_export();
    let rows: Vec<[String; 7]> = table.rows().map(|row| row.to_strings()).collect();

    assert_eq!(rows.len(), table.len());
    assert_eq!(rows[6][5], "[アルバム] 京都旅行");
    assert_eq!(rows[6][6], "album");
    assert_eq!(rows[10][0], "2023");
    assert_eq!(rows[10][1], "3");
}

#[test]
fn test_rows_serialize_with_column_names() {
    let table = parse_export();
    let rows: Vec<serde_json::Value> = table
        .rows()
        .map(|row| serde_json::to_value(row).unwrap())
        .collect();

    assert_eq!(rows[0]["user"], "Alice");
    assert_eq!(rows[0]["day"], 28);
    assert_eq!(rows[7]["type"], "note");
    for column in TalkTable::COLUMNS {
        assert!(rows[0].get(column).is_some(), "missing column {column}");
    }
}

// ============================================================================
// Charts
// ============================================================================

#[test]
fn test_charts_written() {
    let dir = tempdir().unwrap();
    let table = parse_export();
    let frequencies = word_frequencies(&table, &ScriptTokenizer::default(), &StopWords::new());

    let charts = Charts::new(
        &monthly_volume(&table),
        &type_ratio(&table),
        &word_ranking(&frequencies, Some(5)),
    );
    let written = write_charts(&charts, dir.path()).unwrap();

    assert_eq!(written.len(), 3);
    let ranking = fs::read_to_string(dir.path().join("word_ranking.html")).unwrap();
    assert!(ranking.contains("京都"));
    let types = fs::read_to_string(dir.path().join("message_types.html")).unwrap();
    assert!(types.contains("album"));
}
