//! Integration tests: export the wave table and read it back as text.

use ombak_io::write_waves;
use ombak_wave::WaveEvent;

#[test]
fn writes_header_and_one_row_per_wave() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("waves.csv");

    let waves = [
        WaveEvent {
            height: 2.0,
            period: 2.0,
        },
        WaveEvent {
            height: 0.5,
            period: 1.25,
        },
    ];
    write_waves(&path, &waves).expect("write succeeds");

    let content = std::fs::read_to_string(&path).expect("read back");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "wave_height,wave_period");
    assert_eq!(lines[1], "2,2");
    assert_eq!(lines[2], "0.5,1.25");
}

#[test]
fn empty_table_writes_header_only() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("waves.csv");

    write_waves(&path, &[]).expect("write succeeds");

    let content = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(content.trim_end(), "wave_height,wave_period");
}

#[test]
fn unwritable_destination_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("no_such_subdir").join("waves.csv");

    assert!(write_waves(&path, &[]).is_err());
}
