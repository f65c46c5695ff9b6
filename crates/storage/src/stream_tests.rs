// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::path::PathBuf;
use tempfile::TempDir;

// Lines 2 and 5 are damaged: line 2 declares 32 bytes instead of 33 and
// line 5 has its CRC off by one. The last line is not a journal entry.
const DAMAGED_JOURNAL: &str = "\
2015-10-19T00:14:24.341Z 35 VHdvIHJvYWRzIGRpdmVyZ2VkIGluIGEgeWVsbG93IHdvb2Q= 925641221
2015-10-19T00:14:24.365Z 32 QW5kIHNvcnJ5IEkgY291bGQgbm90IHRyYXZlbCBib3Ro 2623152121
2015-10-19T00:14:24.366Z 33 QW5kIGJlIG9uZSB0cmF2ZWxlciwgbG9uZyBJIHN0b29k 8770967
2015-10-19T00:14:24.367Z 37 QW5kIGxvb2tlZCBkb3duIG9uZSBhcyBmYXIgYXMgSSBjb3VsZA== 1357003472
2015-10-19T00:14:24.367Z 36 VG8gd2hlcmUgaXQgYmVudCBpbiB0aGUgdW5kZXJncm93dGg7 3464495713
Not a journal entry at all!";

const FROST_LINE: &str =
    "2015-10-19T00:14:24.341Z 35 VHdvIHJvYWRzIGRpdmVyZ2VkIGluIGEgeWVsbG93IHdvb2Q= 925641221";

fn journal_file(contents: impl AsRef<[u8]>) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("test.journal");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

fn read_all<F: FnMut(JournalCorruption)>(stream: RecordStream<F>) -> Vec<String> {
    stream
        .map(|r| r.unwrap().read_string().into_owned())
        .collect()
}

#[test]
fn damaged_entries_are_skipped() {
    let (_dir, path) = journal_file(DAMAGED_JOURNAL);

    let texts = read_all(RecordStream::open(&path).unwrap());

    assert_eq!(
        texts,
        vec![
            "Two roads diverged in a yellow wood",
            "And be one traveler, long I stood",
            "And looked down one as far as I could",
        ]
    );
}

#[test]
fn damaged_entries_are_reported_in_order() {
    let (_dir, path) = journal_file(DAMAGED_JOURNAL);
    let mut corruptions = Vec::new();

    let count = RecordStream::open_with(&path, |c| corruptions.push(c))
        .unwrap()
        .count();

    assert_eq!(count, 3);
    let messages: Vec<String> = corruptions.iter().map(|c| c.error.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            "Bad CRC: computed 4112716956 but read 2623152121",
            "Bad CRC: computed 3464495712 but read 3464495713",
            "Invalid journal entry \"Not a journal entry at all!\"",
        ]
    );
    assert!(matches!(corruptions[0].error, CorruptionError::BadCrc { .. }));
    assert!(matches!(corruptions[1].error, CorruptionError::BadCrc { .. }));
    assert!(matches!(
        corruptions[2].error,
        CorruptionError::InvalidEntry { .. }
    ));
    let lines: Vec<u64> = corruptions.iter().map(|c| c.line).collect();
    assert_eq!(lines, vec![2, 5, 6]);
}

#[test]
fn corruption_display_includes_line_number() {
    let (_dir, path) = journal_file("\n\nbogus\n");
    let mut corruptions = Vec::new();

    RecordStream::open_with(&path, |c| corruptions.push(c))
        .unwrap()
        .for_each(drop);

    assert_eq!(
        corruptions[0].to_string(),
        "line 3: Invalid journal entry \"bogus\""
    );
}

#[test]
fn blank_lines_are_never_reported() {
    let (_dir, path) = journal_file(format!("\n\n\n{FROST_LINE}\n\n\n\n{FROST_LINE}\n\n"));
    let mut reported = 0;

    let count = RecordStream::open_with(&path, |_| reported += 1)
        .unwrap()
        .count();

    assert_eq!(count, 2);
    assert_eq!(reported, 0);
}

#[test]
fn empty_file_yields_nothing() {
    let (_dir, path) = journal_file("");
    assert_eq!(RecordStream::open(&path).unwrap().count(), 0);
}

#[test]
fn missing_final_newline_is_read() {
    let (_dir, path) = journal_file(FROST_LINE);
    let texts = read_all(RecordStream::open(&path).unwrap());
    assert_eq!(texts, vec!["Two roads diverged in a yellow wood"]);
}

#[test]
fn crlf_line_endings_are_accepted() {
    let (_dir, path) = journal_file(format!("\r\n{FROST_LINE}\r\n"));
    let texts = read_all(RecordStream::open(&path).unwrap());
    assert_eq!(texts, vec!["Two roads diverged in a yellow wood"]);
}

#[test]
fn whitespace_only_line_is_corruption() {
    let (_dir, path) = journal_file(format!("   \n{FROST_LINE}\n"));
    let mut corruptions = Vec::new();

    let count = RecordStream::open_with(&path, |c| corruptions.push(c))
        .unwrap()
        .count();

    assert_eq!(count, 1);
    assert_eq!(corruptions.len(), 1);
    assert_eq!(corruptions[0].line, 1);
}

#[test]
fn invalid_utf8_line_is_corruption_not_io_error() {
    let mut contents = b"\n\xff\xfe garbage\n\n".to_vec();
    contents.extend_from_slice(FROST_LINE.as_bytes());
    contents.push(b'\n');
    let (_dir, path) = journal_file(contents);
    let mut corruptions = Vec::new();

    let results: Vec<_> = RecordStream::open_with(&path, |c| corruptions.push(c))
        .unwrap()
        .collect();

    assert_eq!(results.len(), 1);
    assert!(results[0].is_ok());
    assert_eq!(corruptions.len(), 1);
    assert_eq!(corruptions[0].line, 2);
    assert!(matches!(
        corruptions[0].error,
        CorruptionError::InvalidEntry { .. }
    ));
}

#[test]
fn stream_is_restartable() {
    let (_dir, path) = journal_file(DAMAGED_JOURNAL);

    let first = read_all(RecordStream::open(&path).unwrap());
    let second = read_all(RecordStream::open(&path).unwrap());

    assert_eq!(first, second);
}

#[test]
fn abandoned_stream_does_not_affect_new_ones() {
    let (_dir, path) = journal_file(format!("{FROST_LINE}\n{FROST_LINE}\n"));

    let mut stream = RecordStream::open(&path).unwrap();
    assert!(stream.next().unwrap().is_ok());
    drop(stream);

    assert_eq!(RecordStream::open(&path).unwrap().count(), 2);
}

#[test]
fn open_fails_for_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = RecordStream::open(&dir.path().join("absent.journal"));
    assert!(matches!(result, Err(JournalError::Io(_))));
}

#[cfg(unix)]
#[test]
fn read_error_is_yielded_once_then_stream_ends() {
    // Opening a directory succeeds on Unix, but reading from it fails
    let dir = TempDir::new().unwrap();
    let mut stream = RecordStream::open(dir.path()).unwrap();

    assert!(matches!(stream.next(), Some(Err(JournalError::Io(_)))));
    assert!(stream.next().is_none());
}
