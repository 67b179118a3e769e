use super::*;

fn checker() -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 2,
        data: vec![
            0, 0, 0, 255, 255, 255, 255, 255, //
            255, 255, 255, 255, 10, 20, 30, 255,
        ],
    }
}

fn temp_dir(tag: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("halftone_frame_{tag}_{}", std::process::id()))
}

#[test]
fn pixel_reads_row_major_and_rejects_out_of_bounds() {
    let f = checker();
    assert_eq!(f.pixel(1, 1), Some([10, 20, 30, 255]));
    assert_eq!(f.pixel(1, 0), Some([255, 255, 255, 255]));
    assert_eq!(f.pixel(2, 0), None);
    assert_eq!(f.pixel(0, 2), None);
}

#[test]
fn save_png_creates_parents_and_roundtrips() {
    let dir = temp_dir("roundtrip");
    let path = dir.join("nested").join("out.png");
    checker().save_png(&path).unwrap();

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (2, 2));
    assert_eq!(decoded.get_pixel(1, 1).0, [10, 20, 30, 255]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn save_png_rejects_short_buffer() {
    let mut f = checker();
    f.data.truncate(8);
    let path = temp_dir("short").join("out.png");
    let err = f.save_png(&path).unwrap_err();
    assert!(matches!(err, HalftoneError::InvalidInput(_)));
    let _ = std::fs::remove_dir_all(temp_dir("short"));
}
