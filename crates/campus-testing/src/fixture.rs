//! Upload fixtures.

use bytes::Bytes;

use campus_core::media::Upload;

/// Smallest byte prefix recognised as a PNG image.
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

/// A valid PNG upload named `file_name`.
pub fn png_upload(file_name: &str) -> Upload {
    Upload {
        file_name: file_name.to_owned(),
        content_type: Some("image/png".to_owned()),
        bytes: Bytes::from_static(PNG_BYTES),
    }
}

/// An upload that claims to be a PNG but is plain text.
pub fn fake_png_upload(file_name: &str) -> Upload {
    Upload {
        file_name: file_name.to_owned(),
        content_type: Some("image/png".to_owned()),
        bytes: Bytes::from_static(b"definitely not an image"),
    }
}
