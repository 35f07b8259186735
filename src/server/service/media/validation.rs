//! Upload checks run before anything is sent to the CDN.

use crate::server::error::upload::UploadError;

/// Largest accepted upload, 10 MiB.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Folder used when the request does not name one.
pub const DEFAULT_FOLDER: &str = "kashi-darshan";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Gif,
    Webp,
}

impl ImageKind {
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Webp => "webp",
        }
    }
}

/// Signature bytes at a fixed offset.
struct MagicNumber {
    offset: usize,
    bytes: &'static [u8],
}

const fn magic(offset: usize, bytes: &'static [u8]) -> MagicNumber {
    MagicNumber { offset, bytes }
}

/// Every signature of an entry must match. Order matters for the linear scan.
const MAGIC_NUMBERS: &[(ImageKind, &[MagicNumber])] = &[
    (ImageKind::Jpeg, &[magic(0, &[0xFF, 0xD8, 0xFF])]),
    (
        ImageKind::Png,
        &[magic(0, &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A])],
    ),
    (ImageKind::Gif, &[magic(0, b"GIF87a")]),
    (ImageKind::Gif, &[magic(0, b"GIF89a")]),
    (ImageKind::Webp, &[magic(0, b"RIFF"), magic(8, b"WEBP")]),
];

/// Detects the image kind from the leading bytes of `data`
pub fn detect_image_kind(data: &[u8]) -> Option<ImageKind> {
    MAGIC_NUMBERS
        .iter()
        .find(|(_, signatures)| {
            signatures.iter().all(|signature| {
                data.get(signature.offset..signature.offset + signature.bytes.len())
                    == Some(signature.bytes)
            })
        })
        .map(|(kind, _)| *kind)
}

/// Checks size and content of an upload, returning the detected kind
///
/// `declared` is the content type sent by the client. Generic binary types are ignored,
/// any other image type has to agree with the detected kind.
pub fn validate_upload(data: &[u8], declared: Option<&str>) -> Result<ImageKind, UploadError> {
    if data.is_empty() {
        return Err(UploadError::Empty);
    }
    if data.len() > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge {
            size: data.len(),
            limit: MAX_UPLOAD_BYTES,
        });
    }

    let kind = detect_image_kind(data).ok_or(UploadError::UnsupportedType)?;

    if let Some(declared) = declared {
        let declared = declared
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        let declared = match declared.as_str() {
            "image/jpg" | "image/pjpeg" => "image/jpeg".to_string(),
            _ => declared,
        };

        if !declared.is_empty() && declared != "application/octet-stream" && declared != kind.mime()
        {
            return Err(UploadError::ContentTypeMismatch {
                declared,
                detected: kind.mime(),
            });
        }
    }

    Ok(kind)
}

/// Returns the folder to upload into, [`DEFAULT_FOLDER`] when none is given
pub fn validate_folder(folder: Option<&str>) -> Result<String, UploadError> {
    let folder = match folder.map(str::trim) {
        None | Some("") => return Ok(DEFAULT_FOLDER.to_string()),
        Some(folder) => folder,
    };

    // Segments are separated by single slashes, with none leading or trailing
    let valid = folder.len() <= 128
        && folder.split('/').all(|segment| !segment.is_empty())
        && !folder.contains("..")
        && folder
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '/'));

    if valid {
        Ok(folder.to_string())
    } else {
        Err(UploadError::InvalidFolder(folder.to_string()))
    }
}
