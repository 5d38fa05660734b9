//! Integration tests for asn-netblock-summary
//!
//! These tests run the complete workflow from fixture files to rendered output.

use asn_netblock_summary::{
    build_netblock_stats, build_summary_index, generate_report,
    input::{read_discovered_names, read_text_facts},
    output::{save_asn_details_to_file, Palette},
    Report,
};
use chrono::NaiveDate;
use std::path::Path;
use std::sync::Arc;

const FACTS: &str = "tests/test_data/facts_example.txt";
const NAMES: &str = "tests/test_data/names_example.json";

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date")
}

fn load_report() -> Report {
    let lines = read_text_facts(Path::new(FACTS)).expect("Failed to read facts");
    let names = read_discovered_names(Path::new(NAMES)).expect("Failed to read names");
    Report::new(&lines, &names)
}

#[test]
fn test_facts_fixture_index() {
    let lines = read_text_facts(Path::new(FACTS)).expect("Failed to read facts");
    assert_eq!(lines.len(), 9, "blank line dropped by the reader");

    let index = build_summary_index(&lines);
    assert_eq!(index.asns().len(), 1);
    let summary = index.asn(15133).expect("ASN 15133 present");
    assert_eq!(summary.organization, "EDGECAST");
    assert_eq!(
        summary.netblocks.iter().collect::<Vec<_>>(),
        vec!["93.184.216.0/24"]
    );
    assert_eq!(summary.fqdns.iter().collect::<Vec<_>>(), vec!["example.com"]);
    assert_eq!(index.fqdn_count(), 2);
}

#[test]
fn test_names_fixture_stats() {
    let names = read_discovered_names(Path::new(NAMES)).expect("Failed to read names");
    let stats = build_netblock_stats(&names);

    assert_eq!(stats.asns.len(), 1, "record without cidr is skipped");
    let data = &stats.asns[&15133];
    assert_eq!(data.name, "EDGECAST", "first description wins");
    assert_eq!(data.netblocks["93.184.216.0/24"], 2);
    assert_eq!(data.netblocks["2606:2800:220::/48"], 1);
}

#[test]
fn test_console_report() {
    let report = load_report();
    let mut buf = Vec::new();
    report
        .print(&mut buf, Palette::plain(), false)
        .expect("print to Vec");
    let out = String::from_utf8(buf).unwrap();

    let expected = format!(
        "3 names discovered\n{}\n\
         ASN: 15133 - EDGECAST\n\
         \t2606:2800:220::/48\t1    Subdomain Name(s)\n\
         \t93.184.216.0/24   \t2    Subdomain Name(s)\n\
         \nASN: 15133 - EDGECAST\n\
         \t93.184.216.0/24\t2 Subdomain Name(s)\n\
         example.com --> 93.184.216.34\n\
         www.example.com --> 93.184.216.34\n",
        "-".repeat(80)
    );
    assert_eq!(out, expected);
}

#[test]
fn test_file_report_overwrites() {
    let dir = tempfile::tempdir().expect("temp dir");
    let report = load_report();

    let path = report
        .save(dir.path(), "example.com", date(), false)
        .expect("first save");
    assert_eq!(path.file_name().unwrap(), "example.com_2024-03-09.txt");
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "ASN: 15133 - EDGECAST\n\
         \tNetblocks: 93.184.216.0/24\n\
         \tSubdomains: 2\n\
         example.com: 93.184.216.34\n\
         www.example.com: 93.184.216.34\n"
    );

    let smaller = build_summary_index(&["64512 (ASN) --> managed_by --> Private Use (RIROrganization)"]);
    let second = save_asn_details_to_file(dir.path(), "example.com", date(), &smaller, false)
        .expect("second save");
    assert_eq!(second, path);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "ASN: 64512 - Private Use\n\tNetblocks: \n\tSubdomains: 0\n"
    );
}

#[test]
fn test_demo_report_masks_both_views() {
    let dir = tempfile::tempdir().expect("temp dir");
    let report = load_report();

    let mut buf = Vec::new();
    report.print(&mut buf, Palette::plain(), true).unwrap();
    let console = String::from_utf8(buf).unwrap();

    let path = report.save(dir.path(), "demo", date(), true).unwrap();
    let file = std::fs::read_to_string(path).unwrap();

    for out in [&console, &file] {
        assert!(!out.contains("15133"), "ASN leaked: {out}");
        assert!(!out.contains("EDGECAST"), "organization leaked: {out}");
        assert!(!out.contains("93.184.216.34"), "address leaked: {out}");
        assert!(out.contains("xx.xxx.xxx.x/24"), "netblock not masked: {out}");
        assert!(out.contains("www.xxxxxxx.xxx"), "name not masked: {out}");
    }
}

#[test]
fn test_renderers_share_snapshot_across_threads() {
    let report = Arc::new(load_report());
    let dir = tempfile::tempdir().expect("temp dir");
    let dir_path = dir.path().to_path_buf();

    let file_report = Arc::clone(&report);
    let handle = std::thread::spawn(move || {
        file_report
            .save(&dir_path, "parallel", date(), false)
            .map_err(|e| e.to_string())
    });

    let mut buf = Vec::new();
    report.print(&mut buf, Palette::plain(), false).unwrap();

    let path = handle.join().expect("file thread").expect("file saved");
    assert!(path.exists());
    assert!(String::from_utf8(buf).unwrap().starts_with("3 names discovered\n"));
}

#[test]
fn test_generate_report_writes_both_outputs() {
    let dir = tempfile::tempdir().expect("temp dir");
    let report = Arc::new(load_report());

    let mut buf = Vec::new();
    let path = generate_report(
        Arc::clone(&report),
        &mut buf,
        Palette::plain(),
        false,
        dir.path(),
        "example.com",
        date(),
    )
    .expect("report file saved");

    assert_eq!(path, dir.path().join("example.com_2024-03-09.txt"));
    assert!(std::fs::read_to_string(&path)
        .unwrap()
        .starts_with("ASN: 15133 - EDGECAST\n"));
    assert!(String::from_utf8(buf)
        .unwrap()
        .starts_with("3 names discovered\n"));
}

#[test]
fn test_generate_report_file_error_keeps_console_output() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("no/such/dir");
    let report = Arc::new(load_report());

    let mut buf = Vec::new();
    let result = generate_report(
        report,
        &mut buf,
        Palette::plain(),
        false,
        &missing,
        "example.com",
        date(),
    );

    let err = result.expect_err("output directory does not exist");
    assert!(err.contains("failed to create file"), "got: {err}");
    let console = String::from_utf8(buf).unwrap();
    assert!(console.starts_with("3 names discovered\n"), "got: {console}");
    assert!(console.contains("www.example.com --> 93.184.216.34\n"));
    assert!(!missing.exists());
}
