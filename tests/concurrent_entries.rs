//! Concurrency guarantees: entries composed by different threads come out
//! whole, each with exactly one timestamp + level prefix, and fragments from
//! one thread never land inside another thread's entry.

use std::fs;
use std::io;
use std::sync::Arc;
use std::thread;

use duolog::Logger;
use regex::Regex;

/// ctime-style timestamp followed by the plain LOG prefix and the payload.
const LOG_LINE: &str =
    r"^[A-Z][a-z]{2} [A-Z][a-z]{2} [ \d]\d \d{2}:\d{2}:\d{2} \d{4} \[   LOG   \] msg$";

#[test]
fn two_threads_of_one_hundred_entries_each_stay_well_formed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("concurrent.log");

    let logger = Arc::new(Logger::with_file(&path));
    logger.redirect_console(Box::new(io::sink()));

    let writers: Vec<_> = (0..2)
        .map(|_| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for _ in 0..100 {
                    logger.info().append("msg");
                }
            })
        })
        .collect();
    for writer in writers {
        writer.join().expect("writer thread panicked");
    }

    let contents = fs::read_to_string(&path).expect("read log file");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 200);

    let shape = Regex::new(LOG_LINE).expect("regex");
    for line in &lines {
        assert!(shape.is_match(line), "malformed line: {line:?}");
    }
}

#[test]
fn fragments_from_concurrent_writers_never_interleave() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("fragments.log");

    let logger = Arc::new(Logger::with_file(&path));
    logger.redirect_console(Box::new(io::sink()));

    let writers: Vec<_> = (0..4)
        .map(|worker| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for _ in 0..50 {
                    logger
                        .debug()
                        .append(format_args!("w{worker}-a "))
                        .append(format_args!("w{worker}-b "))
                        .append(format_args!("w{worker}-c"));
                }
            })
        })
        .collect();
    for writer in writers {
        writer.join().expect("writer thread panicked");
    }

    let contents = fs::read_to_string(&path).expect("read log file");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 200);

    for line in &lines {
        let (_, payload) = line.split_once("] ").expect("prefix present");
        let worker = &payload[..2]; // "w0".."w3"
        assert_eq!(
            payload,
            format!("{worker}-a {worker}-b {worker}-c"),
            "foreign fragment in line: {line:?}"
        );
        // Exactly one prefix per line.
        assert_eq!(line.matches("[  DEBUG  ]").count(), 1);
    }
}
