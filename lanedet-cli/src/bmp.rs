//! Raw 24-bit BMP reading and writing.
//!
//! The wire contract with the hardware verification environment is narrower
//! than general BMP: a 54-byte header, 24 bits per pixel, B,G,R order, and
//! rows stored without padding (the supported dimensions are multiples of
//! four). Pixel data is kept in stored order; nothing is ever flipped.
//! Debug images reuse the input frame's header verbatim.

use byteorder::{ByteOrder, LittleEndian};
use snafu::{ensure, ResultExt, Snafu};
use std::fs;
use std::path::{Path, PathBuf};

/// Size of the fixed BMP header.
pub const HEADER_LEN: usize = 54;

#[derive(Debug, Snafu)]
pub enum BmpError {
    #[snafu(display("failed to read {}: {source}", path.display()))]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("failed to write {}: {source}", path.display()))]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("{}: truncated BMP header", path.display()))]
    ShortHeader { path: PathBuf },
    #[snafu(display("{}: unsupported BMP format: {bpp} bpp", path.display()))]
    UnsupportedDepth { path: PathBuf, bpp: u16 },
    #[snafu(display("{}: bad image dimensions {width}x{height}", path.display()))]
    BadDimensions {
        path: PathBuf,
        width: i32,
        height: i32,
    },
    #[snafu(display(
        "{}: truncated pixel data, expected {expected} bytes after the header, got {actual}",
        path.display()
    ))]
    TruncatedData {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },
}

/// One decoded frame: the verbatim header plus packed B,G,R pixel data in
/// stored row order.
#[derive(Debug, Clone)]
pub struct Bmp {
    pub header: [u8; HEADER_LEN],
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

/// Reads a 24-bit BMP frame.
pub fn read(path: &Path) -> Result<Bmp, BmpError> {
    let bytes = fs::read(path).context(ReadSnafu { path })?;
    ensure!(bytes.len() >= HEADER_LEN, ShortHeaderSnafu { path });

    let mut header = [0u8; HEADER_LEN];
    header.copy_from_slice(&bytes[..HEADER_LEN]);

    let bpp = LittleEndian::read_u16(&header[28..30]);
    ensure!(bpp == 24, UnsupportedDepthSnafu { path, bpp });

    let width = LittleEndian::read_i32(&header[18..22]);
    let height = LittleEndian::read_i32(&header[22..26]);
    ensure!(
        width > 0 && height > 0,
        BadDimensionsSnafu {
            path,
            width,
            height,
        }
    );

    let (width, height) = (width as usize, height as usize);
    let expected = width * height * 3;
    let actual = bytes.len() - HEADER_LEN;
    ensure!(
        actual >= expected,
        TruncatedDataSnafu {
            path,
            expected,
            actual,
        }
    );

    Ok(Bmp {
        header,
        width,
        height,
        data: bytes[HEADER_LEN..HEADER_LEN + expected].to_vec(),
    })
}

/// Writes an 8-bit image as a 24-bit BMP by triplicating each byte into
/// B, G and R, under the given header.
pub fn write_gray(path: &Path, header: &[u8; HEADER_LEN], luma: &[u8]) -> Result<(), BmpError> {
    let mut bytes = Vec::with_capacity(HEADER_LEN + luma.len() * 3);
    bytes.extend_from_slice(header);
    for &value in luma {
        bytes.extend_from_slice(&[value, value, value]);
    }
    fs::write(path, &bytes).context(WriteSnafu { path })
}

/// Writes packed B,G,R pixel data under the given header.
pub fn write_color(path: &Path, header: &[u8; HEADER_LEN], bgr: &[u8]) -> Result<(), BmpError> {
    let mut bytes = Vec::with_capacity(HEADER_LEN + bgr.len());
    bytes.extend_from_slice(header);
    bytes.extend_from_slice(bgr);
    fs::write(path, &bytes).context(WriteSnafu { path })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_for(width: i32, height: i32, bpp: u16) -> [u8; HEADER_LEN] {
        let mut header = [0u8; HEADER_LEN];
        header[0] = b'B';
        header[1] = b'M';
        LittleEndian::write_i32(&mut header[18..22], width);
        LittleEndian::write_i32(&mut header[22..26], height);
        LittleEndian::write_u16(&mut header[28..30], bpp);
        header
    }

    #[test]
    fn round_trips_a_small_frame() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.bmp");

        let header = header_for(2, 2, 24);
        let data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        write_color(&path, &header, &data).unwrap();

        let bmp = read(&path).unwrap();
        assert_eq!(bmp.width, 2);
        assert_eq!(bmp.height, 2);
        assert_eq!(bmp.header, header);
        assert_eq!(bmp.data, data);
    }

    #[test]
    fn gray_write_triplicates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.bmp");

        write_gray(&path, &header_for(2, 1, 24), &[9, 200]).unwrap();
        let bmp = read(&path).unwrap();
        assert_eq!(bmp.data, vec![9, 9, 9, 200, 200, 200]);
    }

    #[test]
    fn rejects_wrong_depth() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("depth.bmp");
        fs::write(&path, header_for(1, 1, 32)).unwrap();
        assert!(matches!(
            read(&path),
            Err(BmpError::UnsupportedDepth { bpp: 32, .. })
        ));
    }

    #[test]
    fn rejects_truncated_pixel_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.bmp");
        let mut bytes = header_for(4, 4, 24).to_vec();
        bytes.extend_from_slice(&[0u8; 10]);
        fs::write(&path, &bytes).unwrap();
        assert!(matches!(
            read(&path),
            Err(BmpError::TruncatedData {
                expected: 48,
                actual: 10,
                ..
            })
        ));
    }

    #[test]
    fn rejects_short_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.bmp");
        fs::write(&path, [0u8; 20]).unwrap();
        assert!(matches!(read(&path), Err(BmpError::ShortHeader { .. })));
    }
}
