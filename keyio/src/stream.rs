use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Result;

/// Exclusive owner of one input byte stream.
///
/// [`StreamReader::drain`] reads everything remaining into memory in one
/// step; [`StreamReader::release`] drops the underlying stream and is safe
/// to call repeatedly. Dropping the reader releases as well, so the stream
/// closes exactly once on every exit path, including decode and
/// reconstruction failures further up the load.
#[derive(Debug)]
pub struct StreamReader<R: Read> {
    inner: Option<R>,
}

impl StreamReader<File> {
    /// Open `path` for reading.
    ///
    /// A missing or unreadable file fails here, at construction time, not
    /// at drain time.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(File::open(path)?))
    }

    pub fn from_file(file: File) -> Self {
        Self::new(file)
    }
}

impl<R: Read> StreamReader<R> {
    pub fn new(reader: R) -> Self {
        StreamReader {
            inner: Some(reader),
        }
    }

    /// Read all remaining bytes from the underlying stream.
    ///
    /// An exhausted or already-released stream yields an empty buffer, not
    /// an error. I/O failures mid-read surface as
    /// [`Error::StreamUnavailable`](crate::Error::StreamUnavailable).
    pub fn drain(&mut self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        if let Some(reader) = self.inner.as_mut() {
            reader.read_to_end(&mut buffer)?;
        }
        Ok(buffer)
    }

    /// Drop the underlying stream if still held. Subsequent calls are no-ops.
    pub fn release(&mut self) {
        self.inner = None;
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Read, Write};

    use crate::error::Error;
    use crate::stream::StreamReader;

    #[test]
    fn test_drain_reads_everything() {
        let mut reader = StreamReader::new(Cursor::new(vec![0x01, 0x02, 0x03]));
        assert_eq!(vec![0x01, 0x02, 0x03], reader.drain().unwrap());
    }

    #[test]
    fn test_drain_after_exhaustion_is_empty() {
        let mut reader = StreamReader::new(Cursor::new(vec![0x01]));
        assert_eq!(vec![0x01], reader.drain().unwrap());
        assert!(reader.drain().unwrap().is_empty());
    }

    #[test]
    fn test_drain_after_release_is_empty() {
        let mut reader = StreamReader::new(Cursor::new(vec![0x01]));
        reader.release();
        assert!(reader.drain().unwrap().is_empty());
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut reader = StreamReader::new(Cursor::new(vec![0x01]));
        reader.release();
        reader.release();
    }

    #[test]
    fn test_from_file_drains_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x01, 0x02]).unwrap();

        let mut reader = StreamReader::from_file(file.reopen().unwrap());
        assert_eq!(vec![0x01, 0x02], reader.drain().unwrap());
    }

    #[test]
    fn test_open_missing_file() {
        let err = StreamReader::open("/nonexistent/key.bin").unwrap_err();
        match err {
            Error::StreamUnavailable(e) => assert_eq!(io::ErrorKind::NotFound, e.kind()),
            other => panic!("expected StreamUnavailable, got {:?}", other),
        }
    }

    struct FailingStream;

    impl Read for FailingStream {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("stream broke"))
        }
    }

    #[test]
    fn test_drain_surfaces_io_error() {
        let mut reader = StreamReader::new(FailingStream);
        assert!(matches!(
            reader.drain(),
            Err(Error::StreamUnavailable(_))
        ));
    }
}
