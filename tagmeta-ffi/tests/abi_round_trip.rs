//! End-to-end ABI test: write a tag through the boundary, read the record
//! back through the boundary, release it exactly once.

use std::ffi::{CStr, CString};

use tagmeta::{edit_metadata, free_metadata, read_metadata};

fn write_wav_fixture(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("fixture.wav");
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: 44100,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for _ in 0..44100 {
        writer.write_sample(0i16).unwrap();
        writer.write_sample(0i16).unwrap();
    }
    writer.finalize().unwrap();
    path
}

#[test]
fn edit_then_read_through_the_boundary() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_wav_fixture(dir.path());
    let filename = CString::new(path.to_str().unwrap()).unwrap();

    // Fresh fixture carries no tag: extraction reports absent, not a record.
    let record = unsafe { read_metadata(filename.as_ptr()) };
    assert!(record.is_null());

    let field = CString::new("title").unwrap();
    let value = CString::new("Boundary Title").unwrap();
    let ok = unsafe { edit_metadata(filename.as_ptr(), field.as_ptr(), value.as_ptr()) };
    assert_eq!(ok, 1);

    let record = unsafe { read_metadata(filename.as_ptr()) };
    assert!(!record.is_null());
    unsafe {
        assert_eq!(
            CStr::from_ptr((*record).title).to_str().unwrap(),
            "Boundary Title"
        );
        // WAV is outside the recognized container set.
        assert_eq!(CStr::from_ptr((*record).codec).to_str().unwrap(), "other");
        assert_eq!((*record).has_image, -1);
        assert_eq!((*record).channels, 2);
        assert_eq!((*record).frequency, 44100);
        // Absent text fields are empty strings, never null.
        assert!(!(*record).artist.is_null());
        assert_eq!(CStr::from_ptr((*record).artist).to_str().unwrap(), "");
        free_metadata(record);
    }
}

#[test]
fn rejected_edit_reports_false() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_wav_fixture(dir.path());
    let filename = CString::new(path.to_str().unwrap()).unwrap();

    let field = CString::new("year").unwrap();
    let value = CString::new("not-a-year").unwrap();
    let ok = unsafe { edit_metadata(filename.as_ptr(), field.as_ptr(), value.as_ptr()) };
    assert_eq!(ok, 0);
}
