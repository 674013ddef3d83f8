use mime::Mime;

use super::record::CandidateFile;

/// Size ceiling for the profile photo.
pub const PHOTO_MAX_BYTES: u64 = 5 * 1024 * 1024;
/// Size ceiling for an uploaded introduction video.
pub const VIDEO_MAX_BYTES: u64 = 100 * 1024 * 1024;

/// Rejection raised before a candidate file touches the record.
#[derive(Debug, thiserror::Error)]
pub enum MediaIntakeError {
    #[error("photo must be less than 5MB (got {size_bytes} bytes)")]
    PhotoTooLarge { size_bytes: u64 },
    #[error("video must be less than 100MB (got {size_bytes} bytes)")]
    VideoTooLarge { size_bytes: u64 },
    #[error("unsupported photo type '{0}': expected JPEG or PNG")]
    UnsupportedPhotoType(String),
    #[error("unsupported video type '{0}': expected MP4 or QuickTime")]
    UnsupportedVideoType(String),
}

/// Size and content-type checks applied before a file is accepted into the
/// wizard. Rejection leaves the application record untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaIntakeGuard;

impl MediaIntakeGuard {
    pub fn check_photo(&self, file: &CandidateFile) -> Result<(), MediaIntakeError> {
        if file.size_bytes > PHOTO_MAX_BYTES {
            return Err(MediaIntakeError::PhotoTooLarge {
                size_bytes: file.size_bytes,
            });
        }
        match file.content_type.parse::<Mime>() {
            Ok(mime) if mime == mime::IMAGE_JPEG || mime == mime::IMAGE_PNG => Ok(()),
            _ => Err(MediaIntakeError::UnsupportedPhotoType(
                file.content_type.clone(),
            )),
        }
    }

    pub fn check_video(&self, file: &CandidateFile) -> Result<(), MediaIntakeError> {
        if file.size_bytes > VIDEO_MAX_BYTES {
            return Err(MediaIntakeError::VideoTooLarge {
                size_bytes: file.size_bytes,
            });
        }
        let accepted = file
            .content_type
            .parse::<Mime>()
            .ok()
            .map(|mime| {
                mime.type_() == mime::VIDEO
                    && (mime.subtype() == mime::MP4 || mime.subtype().as_str() == "quicktime")
            })
            .unwrap_or(false);
        if accepted {
            Ok(())
        } else {
            Err(MediaIntakeError::UnsupportedVideoType(
                file.content_type.clone(),
            ))
        }
    }
}

/// Displayable reference to a generated photo preview (a data URL or an
/// object key, depending on the generator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoPreview(pub String);

/// External preview utility. Returning `None` is a silent failure: a missing
/// preview never blocks anything beyond step 7's photo requirement.
pub trait PreviewGenerator: Send + Sync {
    fn preview(&self, file: &CandidateFile) -> Option<PhotoPreview>;
}

/// Ephemeral per-session media state owned by the controller. Lives outside
/// the application record and is dropped with the wizard session.
#[derive(Debug, Default)]
pub struct MediaSession {
    pub photo_preview: Option<PhotoPreview>,
}
