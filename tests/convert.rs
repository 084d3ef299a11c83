use std::fs;
use std::path::Path;

use image::{GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};
use tempfile::TempDir;

use webp_batch_lib::core::{MemorySink, TallySink};
use webp_batch_lib::{
    ConversionRequest, ConversionResult, ConverterError, ProgressEvent, ResizeSettings, convert,
};

fn write_jpeg(dir: &Path, name: &str, width: u32, height: u32) {
    RgbImage::from_fn(width, height, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 90]))
        .save(dir.join(name))
        .expect("write jpeg");
}

fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
    RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]))
        .save(dir.join(name))
        .expect("write png");
}

fn dimensions(path: &Path) -> (u32, u32) {
    image::open(path).expect("decode output").dimensions()
}

fn sorted_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn resize_with_aspect_ratio_scenario() {
    let input = TempDir::new().expect("temp dir");
    let output = TempDir::new().expect("temp dir");
    write_jpeg(input.path(), "a.jpg", 400, 300);
    write_png(input.path(), "b.png", 100, 100);
    fs::write(input.path().join("notes.txt"), "hello").unwrap();

    let request = ConversionRequest::new(input.path(), output.path())
        .with_resize(ResizeSettings::keep_aspect(200, 0));
    let mut sink = MemorySink::new();
    let summary = convert(&request, &mut sink).unwrap();

    assert_eq!(summary.count, 2);
    assert!(!summary.cancelled);
    assert_eq!(sorted_names(output.path()), vec!["a.webp", "b.webp"]);
    assert_eq!(dimensions(&output.path().join("a.webp")), (200, 150));
    assert_eq!(dimensions(&output.path().join("b.webp")), (200, 200));
    assert!(sink.lines().iter().all(|line| !line.contains("notes.txt")));
}

#[test]
fn height_only_derives_width() {
    let input = TempDir::new().expect("temp dir");
    let output = TempDir::new().expect("temp dir");
    write_jpeg(input.path(), "a.jpg", 400, 300);

    let request = ConversionRequest::new(input.path(), output.path())
        .with_resize(ResizeSettings::keep_aspect(0, 150));
    convert(&request, &mut MemorySink::new()).unwrap();

    assert_eq!(dimensions(&output.path().join("a.webp")), (200, 150));
}

#[test]
fn only_matching_extensions_are_processed() {
    let input = TempDir::new().expect("temp dir");
    let output = TempDir::new().expect("temp dir");
    write_jpeg(input.path(), "upper.JPG", 10, 10);
    write_jpeg(input.path(), "long.jpeg", 10, 10);
    write_png(input.path(), "mixed.PnG", 10, 10);
    fs::write(input.path().join("readme.md"), "x").unwrap();
    fs::write(input.path().join("old.webp"), "x").unwrap();
    fs::write(input.path().join("photo.gif"), "x").unwrap();

    let mut sink = MemorySink::new();
    let summary = convert(&ConversionRequest::new(input.path(), output.path()), &mut sink).unwrap();

    assert_eq!(summary.count, 3);
    assert_eq!(sorted_names(output.path()), vec!["long.webp", "mixed.webp", "upper.webp"]);
    for skipped in ["readme.md", "old.webp", "photo.gif"] {
        assert!(sink.lines().iter().all(|line| !line.contains(skipped)));
    }
}

#[test]
fn event_stream_is_started_files_finished() {
    let input = TempDir::new().expect("temp dir");
    let output = TempDir::new().expect("temp dir");
    write_png(input.path(), "b.png", 4, 4);
    write_jpeg(input.path(), "a.jpg", 4, 4);

    let mut sink = MemorySink::new();
    convert(&ConversionRequest::new(input.path(), output.path()), &mut sink).unwrap();

    let events = sink.events();
    assert_eq!(events.len(), 4);
    assert_eq!(events[0], ProgressEvent::Started);
    match &events[1] {
        ProgressEvent::File(ConversionResult::Converted { input: src, output: dst }) => {
            assert_eq!(src, &input.path().join("a.jpg"));
            assert_eq!(dst, &output.path().join("a.webp"));
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert!(events[3].is_finished());
    assert!(sink.lines()[3].starts_with("Conversion finished. Converted 2 images in "));
}

#[test]
fn failures_are_counted_as_attempts() {
    let input = TempDir::new().expect("temp dir");
    let output = TempDir::new().expect("temp dir");
    write_jpeg(input.path(), "good.jpg", 8, 8);
    fs::write(input.path().join("broken.png"), b"\x89PNG but not really").unwrap();

    let mut tally = TallySink::new(MemorySink::new());
    let summary = convert(&ConversionRequest::new(input.path(), output.path()), &mut tally).unwrap();

    assert_eq!(summary.count, 2);
    assert_eq!(tally.succeeded(), 1);
    assert_eq!(tally.failed(), 1);
    let lines = tally.into_inner().lines().to_vec();
    assert!(lines.iter().any(|l| l.starts_with("Error converting ") && l.contains("broken.png")));
}

#[test]
fn second_run_overwrites_silently() {
    let input = TempDir::new().expect("temp dir");
    let output = TempDir::new().expect("temp dir");
    let out_dir = output.path().join("nested").join("webp");
    write_jpeg(input.path(), "a.jpg", 40, 30);

    let request = ConversionRequest::new(input.path(), &out_dir);
    convert(&request, &mut MemorySink::new()).unwrap();
    assert_eq!(dimensions(&out_dir.join("a.webp")), (40, 30));

    let request = request.with_resize(ResizeSettings::exact(20, 10));
    let summary = convert(&request, &mut MemorySink::new()).unwrap();
    assert_eq!(summary.count, 1);
    assert_eq!(dimensions(&out_dir.join("a.webp")), (20, 10));
    assert_eq!(sorted_names(&out_dir), vec!["a.webp"]);
}

#[test]
fn invalid_resize_request_touches_nothing() {
    let input = TempDir::new().expect("temp dir");
    let output = TempDir::new().expect("temp dir");
    let out_dir = output.path().join("webp");
    write_jpeg(input.path(), "a.jpg", 10, 10);

    let request = ConversionRequest::new(input.path(), &out_dir)
        .with_resize(ResizeSettings::exact(0, 0));
    let mut sink = MemorySink::new();
    let err = convert(&request, &mut sink).unwrap_err();

    assert!(matches!(err, ConverterError::Configuration(_)));
    assert!(sink.is_empty());
    assert!(!out_dir.exists());
}

#[test]
fn no_resize_keeps_dimensions() {
    let input = TempDir::new().expect("temp dir");
    let output = TempDir::new().expect("temp dir");
    write_jpeg(input.path(), "wide.jpg", 123, 45);
    write_png(input.path(), "tall.png", 7, 91);

    convert(&ConversionRequest::new(input.path(), output.path()), &mut MemorySink::new()).unwrap();

    assert_eq!(dimensions(&output.path().join("wide.webp")), (123, 45));
    assert_eq!(dimensions(&output.path().join("tall.webp")), (7, 91));
}

#[test]
fn both_dimensions_with_aspect_ratio_are_used_as_given() {
    let input = TempDir::new().expect("temp dir");
    let output = TempDir::new().expect("temp dir");
    write_jpeg(input.path(), "a.jpg", 400, 300);

    let request = ConversionRequest::new(input.path(), output.path())
        .with_resize(ResizeSettings::keep_aspect(100, 100));
    convert(&request, &mut MemorySink::new()).unwrap();

    assert_eq!(dimensions(&output.path().join("a.webp")), (100, 100));
}

#[test]
fn empty_input_folder_reports_zero() {
    let input = TempDir::new().expect("temp dir");
    let output = TempDir::new().expect("temp dir");

    let mut sink = MemorySink::new();
    let summary = convert(&ConversionRequest::new(input.path(), output.path()), &mut sink).unwrap();

    assert_eq!(summary.count, 0);
    assert_eq!(sink.lines().len(), 2);
}

#[test]
fn output_folder_under_a_file_is_fatal() {
    let input = TempDir::new().expect("temp dir");
    write_jpeg(input.path(), "a.jpg", 4, 4);
    let blocker = input.path().join("blocker");
    fs::write(&blocker, "x").unwrap();

    let request = ConversionRequest::new(input.path(), blocker.join("out"));
    let mut sink = MemorySink::new();
    let err = convert(&request, &mut sink).unwrap_err();

    assert!(matches!(err, ConverterError::DirectoryCreation { .. }));
    assert!(sink.is_empty());
}
