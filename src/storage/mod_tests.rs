//! Tests for storage implementations.

use std::fs::OpenOptions;
use std::io::{Cursor, Seek, SeekFrom};

use tempfile::tempdir;

use super::Storage;

mod memory {
    use super::*;

    #[test]
    fn read_document_starts_from_zero() {
        let mut doc = Cursor::new(b"a = 1\n".to_vec());
        doc.seek(SeekFrom::Start(3)).unwrap();

        assert_eq!(doc.read_document().unwrap(), "a = 1\n");
    }

    #[test]
    fn replace_document_shrinks_and_rewinds() {
        let mut doc = Cursor::new(b"a long document\n".to_vec());

        doc.replace_document("short\n").unwrap();

        assert_eq!(doc.get_ref(), b"short\n");
        assert_eq!(doc.position(), 0);
    }

    #[test]
    fn truncate_keeps_position() {
        let mut doc = Cursor::new(b"abcdef".to_vec());
        doc.seek(SeekFrom::Start(4)).unwrap();

        doc.truncate(2).unwrap();

        assert_eq!(doc.get_ref(), b"ab");
        assert_eq!(doc.position(), 4);
    }

    #[test]
    fn mutable_reference_delegates() {
        let mut doc = Cursor::new(b"abc".to_vec());
        {
            let mut storage = &mut doc;
            <&mut Cursor<Vec<u8>> as Storage>::replace_document(&mut storage, "xy").unwrap();
        }

        assert_eq!(doc.get_ref(), b"xy");
    }
}

mod file {
    use super::*;

    #[test]
    fn replace_document_rewrites_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.cfg");
        std::fs::write(&path, "first = a rather long line\nsecond = 2\n").unwrap();

        let mut handle = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&path)
            .unwrap();

        assert_eq!(
            handle.read_document().unwrap(),
            "first = a rather long line\nsecond = 2\n"
        );
        handle.replace_document("first = x\n").unwrap();

        assert_eq!(handle.stream_position().unwrap(), 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first = x\n");
    }

    #[test]
    fn read_document_rejects_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.cfg");
        std::fs::write(&path, [0xFF, 0xFE, b'\n']).unwrap();

        let mut handle = OpenOptions::new().read(true).open(&path).unwrap();

        let err = handle.read_document().unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
