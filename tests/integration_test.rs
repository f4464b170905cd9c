use assert_fs::prelude::*;
use indoc::indoc;
use seqsieve::filter::RecordFilter;
use seqsieve::{
    filter_fastq, read_fastq, run_filter_fastq, write_fastq, FastqError, FilterConfig, Record,
};

const SAMPLE: &str = indoc! {"
    @read1 sample=1
    GGCCAATT
    +
    IIIIIIII

    @read2 sample=1
    AAAAAAAAAA
    +
    ++++++++++
    @read3 sample=2
    GCGCGC
    +read3 sample=2
    ??????
"};

#[test]
fn filter_then_reread() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("sample.fastq");
    input.write_str(SAMPLE).unwrap();
    let output = temp.child("nested/dir/out.fastq");

    let config = FilterConfig::new((0.0, 100.0), (0u64, 8u64), 25.0);
    let summary = run_filter_fastq(input.path(), output.path(), config).unwrap();
    assert_eq!((summary.read_count, summary.passed_count), (3, 2));

    let expected: Vec<Record> = read_fastq(input.path())
        .unwrap()
        .map(|r| r.unwrap())
        .filter(|r| config.matches(r))
        .collect();
    let written: Vec<Record> = read_fastq(output.path())
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(written, expected);
    let headers: Vec<&str> = written.iter().map(|r| r.header.as_str()).collect();
    assert_eq!(headers, vec!["read1 sample=1", "read3 sample=2"]);

    temp.close().unwrap();
}

#[test]
fn streaming_composition() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("sample.fastq");
    input.write_str(SAMPLE).unwrap();
    let output = temp.child("out.fastq");

    // length shorthand: 6 means (0, 6)
    let config = FilterConfig::new(100.0, 6u64, 0.0);
    let n = write_fastq(filter_fastq(read_fastq(input.path()).unwrap(), config), output.path())
        .unwrap();

    assert_eq!(n, 1);
    output.assert("@read3 sample=2\nGCGCGC\n+\n??????\n");

    temp.close().unwrap();
}

#[test]
fn second_write_is_rejected() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("sample.fastq");
    input.write_str(SAMPLE).unwrap();
    let output = temp.child("out.fastq");

    run_filter_fastq(input.path(), output.path(), FilterConfig::default()).unwrap();
    let first = std::fs::read_to_string(output.path()).unwrap();

    let err = run_filter_fastq(input.path(), output.path(), FilterConfig::new(0.0, 0u64, 0.0))
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<FastqError>(),
        Some(FastqError::AlreadyExists { .. })
    ));
    assert_eq!(std::fs::read_to_string(output.path()).unwrap(), first);

    temp.close().unwrap();
}
